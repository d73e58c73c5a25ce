use accredit_core::models::evidence::EvidenceType;

use crate::Standard;
use crate::catalog::{EvaluationElement, checkpoint};

/// MM: Medication Management, from ordering through dispensing.
pub struct MedicationManagement;

impl Standard for MedicationManagement {
    fn id(&self) -> &str {
        "4"
    }

    fn code(&self) -> &str {
        "MM"
    }

    fn name(&self) -> &str {
        "Medication Management"
    }

    fn elements(&self) -> &[EvaluationElement] {
        static ELEMENTS: std::sync::LazyLock<Vec<EvaluationElement>> =
            std::sync::LazyLock::new(|| {
                vec![
                    EvaluationElement {
                        id: "mm_prescribing".to_string(),
                        name: "Prescribing and Ordering".to_string(),
                        checkpoints: vec![
                            checkpoint("MM.01", "1.1", "Order Completeness", EvidenceType::File),
                            checkpoint("MM.01", "1.2", "High-Alert Medications", EvidenceType::Both),
                        ],
                    },
                    EvaluationElement {
                        id: "mm_dispensing".to_string(),
                        name: "Dispensing".to_string(),
                        checkpoints: vec![checkpoint(
                            "MM.02",
                            "2.1",
                            "Pharmacy Verification",
                            EvidenceType::File,
                        )],
                    },
                ]
            });
        &ELEMENTS
    }
}
