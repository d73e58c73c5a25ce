use accredit_core::completion::Completion;
use accredit_core::grouping::ItemGroups;
use accredit_core::models::assessment_item::{AssessmentItem, AssessmentMode};
use accredit_core::models::room::ProgressStatus;

use crate::editor::ItemEditor;
use crate::error::WorkspaceError;
use crate::items::ItemStore;

/// One mounted assessment form: its own store plus its item dialog.
#[derive(Debug, Clone)]
pub struct AssessmentView {
    store: ItemStore,
    editor: ItemEditor,
}

impl AssessmentView {
    pub fn new(mode: AssessmentMode, store: ItemStore) -> Self {
        Self {
            store,
            editor: ItemEditor::new(mode),
        }
    }

    pub fn mode(&self) -> AssessmentMode {
        self.editor.mode()
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Inline edits that bypass the dialog go through the store directly.
    pub fn store_mut(&mut self) -> &mut ItemStore {
        &mut self.store
    }

    pub fn editor(&self) -> &ItemEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ItemEditor {
        &mut self.editor
    }

    pub fn open(&mut self, id: &str) -> Result<&AssessmentItem, WorkspaceError> {
        self.editor.open(&self.store, id)
    }

    pub fn save(&mut self) -> Result<String, WorkspaceError> {
        self.editor.commit(&mut self.store)
    }

    pub fn cancel(&mut self) -> Option<AssessmentItem> {
        self.editor.cancel()
    }

    pub fn grouped(&self) -> ItemGroups<'_> {
        self.store.grouped()
    }

    pub fn completion(&self) -> Completion {
        self.store.completion(self.mode())
    }

    pub fn progress(&self) -> ProgressStatus {
        ProgressStatus::from(&self.completion())
    }
}
