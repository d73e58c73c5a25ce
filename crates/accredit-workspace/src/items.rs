use std::collections::HashSet;

use accredit_core::completion::{Completion, mode_completion};
use accredit_core::grouping::{ItemGroups, group_items};
use accredit_core::models::assessment_item::{AssessmentItem, AssessmentMode};

use crate::error::WorkspaceError;

/// Ordered collection of checklist items, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<AssessmentItem>,
}

impl ItemStore {
    /// Fails with `DuplicateId` if two items share an id.
    pub fn new(items: Vec<AssessmentItem>) -> Result<Self, WorkspaceError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(WorkspaceError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn list_items(&self) -> &[AssessmentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&AssessmentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&AssessmentItem, WorkspaceError> {
        self.get(id)
            .ok_or_else(|| WorkspaceError::not_found("assessment item", id))
    }

    /// Replace the entry whose id matches `item.id`.
    pub fn update_item(&mut self, item: AssessmentItem) -> Result<(), WorkspaceError> {
        let slot = self
            .items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or_else(|| WorkspaceError::not_found("assessment item", &item.id))?;
        *slot = item;
        tracing::debug!(id = %slot.id, "assessment item replaced");
        Ok(())
    }

    /// Edit one item in place. `edit` runs against a copy; the store only
    /// changes if it returns `Ok`.
    pub fn update_with<F>(&mut self, id: &str, edit: F) -> Result<&AssessmentItem, WorkspaceError>
    where
        F: FnOnce(&mut AssessmentItem) -> Result<(), WorkspaceError>,
    {
        let slot = self
            .items
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or_else(|| WorkspaceError::not_found("assessment item", id))?;
        let mut copy = slot.clone();
        edit(&mut copy)?;
        copy.id = slot.id.clone();
        *slot = copy;
        tracing::debug!(id, "assessment item edited inline");
        Ok(slot)
    }

    pub fn grouped(&self) -> ItemGroups<'_> {
        group_items(&self.items)
    }

    pub fn completion(&self, mode: AssessmentMode) -> Completion {
        mode_completion(&self.items, mode)
    }
}
