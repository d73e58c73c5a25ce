use accredit_core::models::evidence::EvidenceType;

use crate::Standard;
use crate::catalog::{EvaluationElement, checkpoint};

/// PFR: Patient and Family Rights.
pub struct PatientFamilyRights;

impl Standard for PatientFamilyRights {
    fn id(&self) -> &str {
        "5"
    }

    fn code(&self) -> &str {
        "PFR"
    }

    fn name(&self) -> &str {
        "Patient and Family Rights"
    }

    fn elements(&self) -> &[EvaluationElement] {
        static ELEMENTS: std::sync::LazyLock<Vec<EvaluationElement>> =
            std::sync::LazyLock::new(|| {
                vec![
                    EvaluationElement {
                        id: "pfr_patient_rights".to_string(),
                        name: "Patient Rights".to_string(),
                        checkpoints: vec![
                            checkpoint("PFR.01", "1.1", "Informed Consent", EvidenceType::File),
                            checkpoint("PFR.01", "1.2", "Privacy and Confidentiality", EvidenceType::Both),
                        ],
                    },
                    EvaluationElement {
                        id: "pfr_family_involvement".to_string(),
                        name: "Family Involvement".to_string(),
                        checkpoints: vec![checkpoint(
                            "PFR.02",
                            "2.1",
                            "Family Education",
                            EvidenceType::Link,
                        )],
                    },
                ]
            });
        &ELEMENTS
    }
}
