//! Navigation highlighting and mobile menu decisions.
//!
//! # Responsibility
//! - Pick the nav link to mark active from section intersection reports.
//! - Hold the scroll-offset and breakpoint constants shared with the page.

/// Fixed header height subtracted when scrolling to a section.
pub const HEADER_SCROLL_OFFSET_PX: f64 = 80.0;

/// Viewport width above which the mobile menu force-closes.
pub const MOBILE_MENU_BREAKPOINT_PX: f64 = 768.0;

/// Section visibility ratio required before a section counts as active.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.3;

/// Chooses the active section from `(section_id, is_intersecting)` reports.
///
/// Reports arrive in observer callback order; the last intersecting section
/// wins, matching how successive reports overwrite the highlight.
pub fn active_section<'a, I>(reports: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    reports
        .into_iter()
        .filter(|(_, intersecting)| *intersecting)
        .map(|(id, _)| id)
        .last()
}

/// Whether a resize to `width` should force the mobile menu closed.
pub fn closes_menu_on_resize(width: f64) -> bool {
    width > MOBILE_MENU_BREAKPOINT_PX
}

#[cfg(test)]
mod tests {
    use super::{active_section, closes_menu_on_resize};

    #[test]
    fn last_intersecting_section_wins() {
        let reports = [("about", true), ("projects", false), ("contact", true)];
        assert_eq!(active_section(reports), Some("contact"));
    }

    #[test]
    fn no_intersection_keeps_current_highlight() {
        let reports = [("about", false), ("projects", false)];
        assert_eq!(active_section(reports), None);
    }

    #[test]
    fn menu_closes_only_past_breakpoint() {
        assert!(closes_menu_on_resize(1024.0));
        assert!(!closes_menu_on_resize(768.0));
        assert!(!closes_menu_on_resize(480.0));
    }
}
