//! Project record model.
//!
//! # Responsibility
//! - Define the record shape behind the main and "more projects" card grids.
//! - Carry the optional case-study detail used by the overlay view.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - Optional link fields suppress their UI affordance when absent; they are
//!   never an error.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a project record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = String;

/// Wire value of the `type` tag that routes a record to the secondary,
/// visually de-emphasized card group.
pub const ADDITIONAL_TAG: &str = "additional";

/// Structured case-study detail shown in the overlay view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub problem: String,
    pub solution: String,
    /// Ordered feature bullets; order is display order.
    pub features: Vec<String>,
    /// Omitted from the detail view entirely when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    /// Omitted from the detail view entirely when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learned: Option<String>,
}

/// Canonical project record loaded from the embedded data source.
///
/// All link fields are optional on the wire; absence means the renderer
/// omits the corresponding control rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Shown as the lead line of the case-study view.
    #[serde(default)]
    pub subtitle: String,
    /// Ordered technology names; order is display order.
    pub tech: Vec<String>,
    /// Single display glyph used as the card image.
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_demo: Option<String>,
    /// Wire tag `type`; the value `"additional"` selects the secondary group.
    /// Any other value (or absence) keeps the record in the featured group.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
}

impl ProjectRecord {
    /// Creates a minimal record with the required display fields only.
    pub fn new(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        description: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            subtitle: String::new(),
            tech: Vec::new(),
            emoji: emoji.into(),
            github: None,
            live: None,
            video: None,
            local_demo: None,
            tag: None,
            case_study: None,
        }
    }

    /// Returns whether this record belongs to the secondary card group.
    pub fn is_additional(&self) -> bool {
        self.tag.as_deref() == Some(ADDITIONAL_TAG)
    }

    /// Returns whether a case-study detail view exists for this record.
    pub fn has_case_study(&self) -> bool {
        self.case_study.is_some()
    }

    /// Checks structural requirements that the wire format cannot express.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is empty or whitespace-only.
    /// - `EmptyTitle` when `title` is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.trim().is_empty() {
            return Err(ProjectValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// Structural validation failure for a single project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyId,
    EmptyTitle { id: ProjectId },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "project id cannot be empty"),
            Self::EmptyTitle { id } => write!(f, "project `{id}` has an empty title"),
        }
    }
}

impl Error for ProjectValidationError {}
