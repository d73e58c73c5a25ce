//! accredit-standards
//!
//! Accreditation standard definitions. Pure data: each standard lists its
//! evaluation elements and the checkpoints scored under them, and knows how
//! to instantiate and check an assessment checklist.

pub mod catalog;
pub mod error;
pub mod standards;

use accredit_core::grouping::group_items;
use accredit_core::models::assessment_item::AssessmentItem;
use catalog::{EvaluationElement, StandardInfo, ValidationError};
use error::StandardError;

/// Trait implemented by each accreditation standard.
pub trait Standard: Send + Sync {
    /// Catalog identifier (e.g., "1").
    fn id(&self) -> &str;

    /// Short code used in checkpoint numbers (e.g., "PS").
    fn code(&self) -> &str;

    /// Human-readable name (e.g., "Patient Safety").
    fn name(&self) -> &str;

    /// The evaluation elements of this standard, in catalog order.
    fn elements(&self) -> &[EvaluationElement];

    fn info(&self) -> StandardInfo {
        StandardInfo {
            id: self.id().to_string(),
            code: self.code().to_string(),
            name: self.name().to_string(),
        }
    }

    fn checkpoint_count(&self) -> usize {
        self.elements().iter().map(|e| e.checkpoints.len()).sum()
    }

    /// A fresh, unscored checklist with consecutive ids starting at `first_id`.
    fn checklist(&self, first_id: u32) -> Vec<AssessmentItem> {
        self.elements()
            .iter()
            .flat_map(|element| element.checkpoints.iter().map(move |cp| (element, cp)))
            .zip(first_id..)
            .map(|((element, cp), id)| AssessmentItem {
                id: id.to_string(),
                standard: self.name().to_string(),
                evaluation_element: element.name.clone(),
                title: cp.title.clone(),
                number: cp.number.clone(),
                sub_point: cp.sub_point.clone(),
                max_weight: cp.max_weight,
                evidence_type: cp.evidence_type,
                self_assessment_score: None,
                self_assessment_evidence: None,
                self_assessment_notes: None,
                evaluation_score: None,
                evaluation_notes: None,
            })
            .collect()
    }

    /// Check items belonging to this standard against the catalog.
    /// Items of other standards are ignored.
    fn validate_items(&self, items: &[AssessmentItem]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut reject = |item: &AssessmentItem, message: String| {
            errors.push(ValidationError {
                item_id: item.id.clone(),
                standard_id: self.id().to_string(),
                message: format!("{} item {}: {message}", self.code(), item.id),
            });
        };

        for item in items.iter().filter(|i| i.standard == self.name()) {
            let Some(element) = self
                .elements()
                .iter()
                .find(|e| e.name == item.evaluation_element)
            else {
                reject(
                    item,
                    format!("unknown evaluation element '{}'", item.evaluation_element),
                );
                continue;
            };

            let Some(cp) = element
                .checkpoints
                .iter()
                .find(|cp| cp.number == item.number && cp.sub_point == item.sub_point)
            else {
                reject(
                    item,
                    format!("no checkpoint {} under '{}'", item.reference(), element.name),
                );
                continue;
            };

            if cp.max_weight != item.max_weight {
                reject(
                    item,
                    format!("max weight {} differs from catalog {}", item.max_weight, cp.max_weight),
                );
            }
            if cp.evidence_type != item.evidence_type {
                reject(
                    item,
                    format!("evidence type {} differs from catalog {}", item.evidence_type, cp.evidence_type),
                );
            }
            if let Some(evidence) = &item.self_assessment_evidence
                && !item.evidence_type.permits(evidence)
            {
                reject(
                    item,
                    format!("evidence '{}' not accepted (expects {})", evidence.label(), item.evidence_type),
                );
            }
        }
        errors
    }

    /// Plain-text summary of this standard's items, grouped by element.
    fn to_summary(&self, items: &[AssessmentItem]) -> String {
        let mut output = format!("## {} {}\n\n", self.code(), self.name());
        let groups = group_items(items);
        let Some(elements) = groups.get(self.name()) else {
            output.push_str("(no items)\n");
            return output;
        };
        for (element, items) in elements.iter() {
            output.push_str(&format!("### {element}\n"));
            for item in items {
                let self_score = item
                    .self_assessment_score
                    .map_or_else(|| "-".to_string(), |s| s.to_string());
                let eval_score = item
                    .evaluation_score
                    .map_or_else(|| "-".to_string(), |s| s.to_string());
                output.push_str(&format!(
                    "- {} {}: self {self_score}, evaluation {eval_score} (max {})\n",
                    item.reference(),
                    item.title,
                    item.max_weight,
                ));
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered standards, in catalog order.
pub fn all_standards() -> Vec<Box<dyn Standard>> {
    vec![
        Box::new(standards::patient_safety::PatientSafety),
        Box::new(standards::quality_improvement::QualityImprovement),
        Box::new(standards::infection_control::InfectionControl),
        Box::new(standards::medication_management::MedicationManagement),
        Box::new(standards::patient_family_rights::PatientFamilyRights),
    ]
}

/// Look up a standard by catalog ID.
pub fn get_standard(id: &str) -> Option<Box<dyn Standard>> {
    all_standards().into_iter().find(|s| s.id() == id)
}

/// Look up a standard by its display name, as stored on assessment items.
pub fn find_by_name(name: &str) -> Option<Box<dyn Standard>> {
    all_standards().into_iter().find(|s| s.name() == name)
}

/// Check a mixed checklist against the whole catalog. Fails on the first item
/// naming an unknown standard or not matching its standard's checkpoints.
pub fn check_items(items: &[AssessmentItem]) -> Result<(), StandardError> {
    if let Some(item) = items.iter().find(|i| find_by_name(&i.standard).is_none()) {
        return Err(StandardError::UnknownStandard(item.standard.clone()));
    }
    for standard in all_standards() {
        if let Some(error) = standard.validate_items(items).into_iter().next() {
            return Err(error.into());
        }
    }
    Ok(())
}
