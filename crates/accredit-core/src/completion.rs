use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assessment_item::{AssessmentItem, AssessmentMode};

/// Progress over a checklist: how many entries have a recorded score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Completion {
    pub completed: usize,
    pub total: usize,
    /// `round(100 * completed / total)`, halves rounded up. 0 when `total` is 0.
    pub percentage: u8,
}

impl Completion {
    pub fn new(completed: usize, total: usize) -> Self {
        let completed = completed.min(total);
        let percentage = if total == 0 {
            0
        } else {
            // Integer form of round-half-up: floor((200c + t) / 2t).
            ((200 * completed + total) / (2 * total)) as u8
        };
        Self {
            completed,
            total,
            percentage,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Count the entries of `items` for which `is_done` holds.
pub fn completion<'a, T, F>(items: impl IntoIterator<Item = &'a T>, is_done: F) -> Completion
where
    T: 'a,
    F: Fn(&T) -> bool,
{
    let (completed, total) = items
        .into_iter()
        .fold((0, 0), |(done, seen), item| {
            (done + usize::from(is_done(item)), seen + 1)
        });
    Completion::new(completed, total)
}

pub fn mode_completion(items: &[AssessmentItem], mode: AssessmentMode) -> Completion {
    completion(items, |item| mode.is_done(item))
}

pub fn self_assessment_completion(items: &[AssessmentItem]) -> Completion {
    mode_completion(items, AssessmentMode::SelfAssessment)
}

pub fn evaluation_completion(items: &[AssessmentItem]) -> Completion {
    mode_completion(items, AssessmentMode::Evaluation)
}
