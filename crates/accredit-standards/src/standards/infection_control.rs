use accredit_core::models::evidence::EvidenceType;

use crate::Standard;
use crate::catalog::{EvaluationElement, checkpoint};

/// IC: Infection Control, assessed at facility-program level.
pub struct InfectionControl;

impl Standard for InfectionControl {
    fn id(&self) -> &str {
        "3"
    }

    fn code(&self) -> &str {
        "IC"
    }

    fn name(&self) -> &str {
        "Infection Control"
    }

    fn elements(&self) -> &[EvaluationElement] {
        static ELEMENTS: std::sync::LazyLock<Vec<EvaluationElement>> =
            std::sync::LazyLock::new(|| {
                vec![
                    EvaluationElement {
                        id: "ic_prevention_program".to_string(),
                        name: "Infection Prevention Program".to_string(),
                        checkpoints: vec![
                            checkpoint("IC.01", "1.1", "Surveillance Plan", EvidenceType::File),
                            checkpoint("IC.01", "1.2", "Outbreak Response", EvidenceType::Both),
                        ],
                    },
                    EvaluationElement {
                        id: "ic_sterilization".to_string(),
                        name: "Sterilization".to_string(),
                        checkpoints: vec![checkpoint(
                            "IC.02",
                            "2.1",
                            "Instrument Reprocessing",
                            EvidenceType::File,
                        )],
                    },
                ]
            });
        &ELEMENTS
    }
}
