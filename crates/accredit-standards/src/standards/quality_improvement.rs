use accredit_core::models::evidence::EvidenceType;

use crate::Standard;
use crate::catalog::{EvaluationElement, checkpoint};

/// QI: Quality Improvement.
pub struct QualityImprovement;

impl Standard for QualityImprovement {
    fn id(&self) -> &str {
        "2"
    }

    fn code(&self) -> &str {
        "QI"
    }

    fn name(&self) -> &str {
        "Quality Improvement"
    }

    fn elements(&self) -> &[EvaluationElement] {
        static ELEMENTS: std::sync::LazyLock<Vec<EvaluationElement>> =
            std::sync::LazyLock::new(|| {
                vec![EvaluationElement {
                    id: "qi_performance_measurement".to_string(),
                    name: "Performance Measurement".to_string(),
                    checkpoints: vec![checkpoint(
                        "QI.01",
                        "1.1",
                        "Data Collection",
                        EvidenceType::Both,
                    )],
                }]
            });
        &ELEMENTS
    }
}
