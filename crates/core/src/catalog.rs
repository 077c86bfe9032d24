//! Fixed, in-memory content of the static pages.
//!
//! None of this comes from the backend. The lists are searched and filtered
//! locally with [`crate::filter`].

pub mod checklist;
pub mod dashboard;
pub mod glossary;
pub mod org_chart;
pub mod resources;
pub mod setup;
pub mod sources;
pub mod videos;

/// Rounds `completed / total` to a whole percentage.
///
/// An empty list counts as 0% done.
pub fn progress_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Round half up, in integers.
    ((completed * 200 + total) / (total * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(7, 20), 35);
        assert_eq!(progress_percent(2, 20), 10);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(1, 8), 13);
        assert_eq!(progress_percent(20, 20), 100);
        assert_eq!(progress_percent(0, 0), 0);
    }
}
