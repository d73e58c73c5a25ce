use accredit_core::models::evidence::EvidenceType;

use crate::Standard;
use crate::catalog::{EvaluationElement, checkpoint};

/// PS: Patient Safety. Medication handling and infection prevention at the
/// point of care.
pub struct PatientSafety;

impl Standard for PatientSafety {
    fn id(&self) -> &str {
        "1"
    }

    fn code(&self) -> &str {
        "PS"
    }

    fn name(&self) -> &str {
        "Patient Safety"
    }

    fn elements(&self) -> &[EvaluationElement] {
        static ELEMENTS: std::sync::LazyLock<Vec<EvaluationElement>> =
            std::sync::LazyLock::new(|| {
                vec![
                    EvaluationElement {
                        id: "ps_medication_safety".to_string(),
                        name: "Medication Safety".to_string(),
                        checkpoints: vec![
                            checkpoint("PS.01", "1.1", "Medication Administration", EvidenceType::File),
                            checkpoint("PS.01", "1.2", "Medication Storage", EvidenceType::Both),
                        ],
                    },
                    EvaluationElement {
                        id: "ps_infection_control".to_string(),
                        name: "Infection Control".to_string(),
                        checkpoints: vec![
                            checkpoint("PS.02", "2.1", "Hand Hygiene", EvidenceType::File),
                            checkpoint("PS.02", "2.2", "Isolation Procedures", EvidenceType::Link),
                        ],
                    },
                ]
            });
        &ELEMENTS
    }
}
