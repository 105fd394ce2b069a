//! Overlay controller: the Closed/Open state machine behind the modal view.
//!
//! # Responsibility
//! - Own the single "open" flag and the reference to the triggering control.
//! - Hand the boundary layer explicit instructions (content to show, control
//!   to refocus) instead of touching any display state itself.
//!
//! # Invariants
//! - A failed lookup leaves the state Closed and produces no content.
//! - `close` while Closed is a no-op.
//! - While Open, Tab focus cycles only among the overlay's focusable
//!   elements, wrapping in both directions.

use crate::model::project::ProjectId;
use crate::render::case_study::{assemble_case_study, CaseStudyView};
use crate::render::RenderOptions;
use crate::store::project_store::ProjectStore;

/// The two states of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open,
}

/// Controller for the case-study overlay.
///
/// Kept as an explicit value passed to handlers rather than ambient state;
/// the boundary layer owns exactly one of these per page.
#[derive(Debug)]
pub struct OverlayController {
    state: OverlayState,
    /// Id of the record whose trigger opened the overlay; focus returns to
    /// that control on close.
    last_trigger: Option<ProjectId>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self {
            state: OverlayState::Closed,
            last_trigger: None,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Opens the overlay for the record with the given id.
    ///
    /// On success returns the assembled view; the caller writes it into the
    /// display region, suppresses background scroll and schedules focus to
    /// the overlay title. On a lookup miss returns `None` and the state
    /// stays Closed (or Open with its previous content, if already Open).
    pub fn open(
        &mut self,
        store: &ProjectStore,
        id: &str,
        options: &RenderOptions,
    ) -> Option<CaseStudyView> {
        let view = assemble_case_study(store, id, options)?;
        self.state = OverlayState::Open;
        self.last_trigger = Some(id.to_string());
        Some(view)
    }

    /// Closes the overlay.
    ///
    /// Returns the id of the control that opened it, so the caller can
    /// restore keyboard focus, or `None` when the overlay was not open
    /// (in which case nothing must change).
    pub fn close(&mut self) -> Option<ProjectId> {
        if self.state == OverlayState::Closed {
            return None;
        }
        self.state = OverlayState::Closed;
        self.last_trigger.take()
    }
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}

/// Focus target after a Tab press inside the open overlay.
///
/// `current` is the index of the focused element among the overlay's
/// focusable elements, `count` how many there are. Forward from the last
/// wraps to the first; backward from the first wraps to the last.
/// Returns `None` when there is nothing to focus.
pub fn next_focus_index(current: usize, count: usize, backward: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let next = if backward {
        if current == 0 {
            count - 1
        } else {
            current - 1
        }
    } else if current + 1 >= count {
        0
    } else {
        current + 1
    };
    Some(next)
}
