//! Prodigy task record model.
//!
//! # Responsibility
//! - Define the record shape behind the remotely fetched Prodigy card grid.
//!
//! # Invariants
//! - `highlights` and `demo_steps` keep wire order; the demo checklist is
//!   decorative and carries no persisted check state.

use serde::{Deserialize, Serialize};

/// Record for one Prodigy internship task, fetched once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdigyRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Short badge text, e.g. `PRODIGY/WD/01`.
    pub task_code: String,
    /// Ordered technology names; order is display order.
    pub tech: Vec<String>,
    /// Ordered highlight bullets for the "Key Features" list.
    pub highlights: Vec<String>,
    /// Ordered steps rendered as unchecked, non-interactive checklist items.
    pub demo_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_demo: Option<String>,
    /// When present, the whole card renders as one clickable link to it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
}

impl ProdigyRecord {
    /// Returns whether the card should render as a single clickable link.
    pub fn is_clickable(&self) -> bool {
        self.live.is_some()
    }
}
