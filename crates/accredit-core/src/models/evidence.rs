use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Supporting evidence attached to a self-assessment.
///
/// The variant is chosen when the evidence is created; it is never guessed
/// from the string content afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Evidence {
    File { name: String },
    Link { url: String },
}

impl Evidence {
    /// An uploaded document, identified by its file name.
    pub fn file(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidEvidence(
                "file name must not be empty".to_string(),
            ));
        }
        Ok(Evidence::File {
            name: trimmed.to_string(),
        })
    }

    /// An external reference. Only http(s) URLs are accepted.
    pub fn link(url: impl Into<String>) -> Result<Self, CoreError> {
        let url = url.into();
        let trimmed = url.trim();
        let has_scheme = trimmed.starts_with("https://") || trimmed.starts_with("http://");
        if !has_scheme || trimmed.len() <= "https://".len() {
            return Err(CoreError::InvalidEvidence(format!(
                "'{trimmed}' is not an http(s) URL"
            )));
        }
        Ok(Evidence::Link {
            url: trimmed.to_string(),
        })
    }

    pub fn label(&self) -> &str {
        match self {
            Evidence::File { name } => name,
            Evidence::Link { url } => url,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Evidence::Link { .. })
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evidence::File { name } => write!(f, "file: {name}"),
            Evidence::Link { url } => write!(f, "link: {url}"),
        }
    }
}

/// Which kinds of evidence a checkpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvidenceType {
    File,
    Link,
    Both,
}

impl EvidenceType {
    pub fn permits(self, evidence: &Evidence) -> bool {
        match (self, evidence) {
            (EvidenceType::Both, _) => true,
            (EvidenceType::File, Evidence::File { .. }) => true,
            (EvidenceType::Link, Evidence::Link { .. }) => true,
            _ => false,
        }
    }
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EvidenceType::File => "file",
            EvidenceType::Link => "link",
            EvidenceType::Both => "file or link",
        };
        f.write_str(s)
    }
}
