//! The item dialog: copy on open, edit the copy, merge back on save.

use accredit_core::models::assessment_item::{AssessmentItem, AssessmentMode};
use accredit_core::models::evidence::Evidence;
use accredit_core::models::score::Score;

use crate::error::WorkspaceError;
use crate::items::ItemStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Open { draft: AssessmentItem },
}

/// Holds at most one draft. Only fields owned by `mode` may be edited.
#[derive(Debug, Clone)]
pub struct ItemEditor {
    mode: AssessmentMode,
    state: EditorState,
}

impl ItemEditor {
    pub fn new(mode: AssessmentMode) -> Self {
        Self {
            mode,
            state: EditorState::Closed,
        }
    }

    pub fn mode(&self) -> AssessmentMode {
        self.mode
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open { .. })
    }

    pub fn draft(&self) -> Option<&AssessmentItem> {
        match &self.state {
            EditorState::Open { draft } => Some(draft),
            EditorState::Closed => None,
        }
    }

    /// Copy item `id` into a new draft. The store is not touched.
    pub fn open(&mut self, store: &ItemStore, id: &str) -> Result<&AssessmentItem, WorkspaceError> {
        if let EditorState::Open { draft } = &self.state {
            return Err(WorkspaceError::EditorBusy {
                id: draft.id.clone(),
            });
        }
        let draft = store.require(id)?.clone();
        tracing::debug!(id, mode = %self.mode, "editor opened");
        self.state = EditorState::Open { draft };
        self.draft().ok_or(WorkspaceError::NoOpenDraft)
    }

    pub fn set_self_assessment_score(&mut self, score: Score) -> Result<(), WorkspaceError> {
        let draft = self.editable("self_assessment_score", AssessmentMode::SelfAssessment)?;
        draft.self_assessment_score = Some(score);
        Ok(())
    }

    pub fn set_self_assessment_evidence(&mut self, evidence: Evidence) -> Result<(), WorkspaceError> {
        let draft = self.editable("self_assessment_evidence", AssessmentMode::SelfAssessment)?;
        if !draft.evidence_type.permits(&evidence) {
            return Err(WorkspaceError::EvidenceNotPermitted {
                id: draft.id.clone(),
                evidence_type: draft.evidence_type,
            });
        }
        draft.self_assessment_evidence = Some(evidence);
        Ok(())
    }

    pub fn set_self_assessment_notes(&mut self, notes: &str) -> Result<(), WorkspaceError> {
        let draft = self.editable("self_assessment_notes", AssessmentMode::SelfAssessment)?;
        draft.self_assessment_notes = non_blank(notes);
        Ok(())
    }

    pub fn set_evaluation_score(&mut self, score: Score) -> Result<(), WorkspaceError> {
        let draft = self.editable("evaluation_score", AssessmentMode::Evaluation)?;
        draft.evaluation_score = Some(score);
        Ok(())
    }

    pub fn set_evaluation_notes(&mut self, notes: &str) -> Result<(), WorkspaceError> {
        let draft = self.editable("evaluation_notes", AssessmentMode::Evaluation)?;
        draft.evaluation_notes = non_blank(notes);
        Ok(())
    }

    /// Write the draft back over the store entry with the same id and close.
    ///
    /// If that entry is gone the draft stays open and `NotFound` is returned.
    pub fn commit(&mut self, store: &mut ItemStore) -> Result<String, WorkspaceError> {
        let draft = self.draft().cloned().ok_or(WorkspaceError::NoOpenDraft)?;
        let id = draft.id.clone();
        if let Err(e) = store.update_item(draft) {
            tracing::warn!(id = %id, error = %e, "draft commit rejected");
            return Err(e);
        }
        self.state = EditorState::Closed;
        tracing::info!(id = %id, mode = %self.mode, "draft committed");
        Ok(id)
    }

    /// Close and hand back the discarded draft, if any.
    pub fn cancel(&mut self) -> Option<AssessmentItem> {
        match std::mem::take(&mut self.state) {
            EditorState::Open { draft } => {
                tracing::debug!(id = %draft.id, "draft discarded");
                Some(draft)
            }
            EditorState::Closed => None,
        }
    }

    fn editable(
        &mut self,
        field: &'static str,
        owner: AssessmentMode,
    ) -> Result<&mut AssessmentItem, WorkspaceError> {
        let mode = self.mode;
        let EditorState::Open { draft } = &mut self.state else {
            return Err(WorkspaceError::NoOpenDraft);
        };
        if mode != owner {
            return Err(WorkspaceError::ReadOnlyField { field, mode });
        }
        Ok(draft)
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
