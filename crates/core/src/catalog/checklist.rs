//! The 30-day onboarding checklist.

use super::progress_percent;

/// A single checklist task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    /// What to do.
    pub title: &'static str,
    /// Whether it is done.
    pub completed: bool,
}

/// Tasks for one stretch of the onboarding period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// The days this section covers, e.g. `"Days 2-5"`.
    pub day: &'static str,
    /// Theme of the section.
    pub title: &'static str,
    /// The tasks, in order.
    pub tasks: Vec<Task>,
}

/// Checklist state for the current page visit.
///
/// Toggles only last until the page is left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checklist {
    sections: Vec<Section>,
}

impl Default for Checklist {
    fn default() -> Self {
        let section = |day, title, tasks: [(&'static str, bool); 4]| Section {
            day,
            title,
            tasks: tasks
                .into_iter()
                .map(|(title, completed)| Task { title, completed })
                .collect(),
        };
        Self {
            sections: vec![
                section(
                    "Day 1",
                    "Welcome & Orientation",
                    [
                        ("Complete security training", true),
                        ("Set up SSH keys", true),
                        ("Join team Slack channels", false),
                        ("Review handbook", false),
                    ],
                ),
                section(
                    "Days 2-5",
                    "Development Setup",
                    [
                        ("Install Docker & tools", false),
                        ("Clone repositories", false),
                        ("Configure IDE", false),
                        ("Run local environment", false),
                    ],
                ),
                section(
                    "Days 6-10",
                    "Onboarding Projects",
                    [
                        ("Complete first task", false),
                        ("Code review participation", false),
                        ("Attend standup meetings", false),
                        ("Document your setup", false),
                    ],
                ),
                section(
                    "Days 11-20",
                    "Integration & Learning",
                    [
                        ("API integration project", false),
                        ("Database query optimization", false),
                        ("Performance profiling", false),
                        ("Attend workshops", false),
                    ],
                ),
                section(
                    "Days 21-30",
                    "Independence & Contribution",
                    [
                        ("Lead a feature implementation", false),
                        ("Mentor code reviews", false),
                        ("Document best practices", false),
                        ("Complete onboarding survey", false),
                    ],
                ),
            ],
        }
    }
}

impl Checklist {
    /// Returns the sections in order.
    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the number of completed tasks.
    pub fn completed(&self) -> usize {
        self.tasks().filter(|task| task.completed).count()
    }

    /// Returns the number of tasks.
    pub fn total(&self) -> usize {
        self.tasks().count()
    }

    /// Returns the rounded completion percentage.
    pub fn progress(&self) -> u32 {
        progress_percent(self.completed(), self.total())
    }

    /// Flips a task and returns its new state, or `None` if there is no
    /// such task. Both indices start at 0.
    pub fn toggle(&mut self, section: usize, task: usize) -> Option<bool> {
        let task = self.sections.get_mut(section)?.tasks.get_mut(task)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.sections.iter().flat_map(|section| section.tasks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_progress() {
        let checklist = Checklist::default();
        assert_eq!(checklist.sections().len(), 5);
        assert_eq!(checklist.total(), 20);
        assert_eq!(checklist.completed(), 2);
        assert_eq!(checklist.progress(), 10);
    }

    #[test]
    fn test_toggle_updates_progress() {
        let mut checklist = Checklist::default();
        for task in 0..4 {
            checklist.toggle(1, task);
        }
        assert_eq!(checklist.toggle(2, 0), Some(true));
        assert_eq!(checklist.completed(), 7);
        assert_eq!(checklist.progress(), 35);

        assert_eq!(checklist.toggle(0, 0), Some(false));
        assert_eq!(checklist.completed(), 6);
        assert_eq!(checklist.progress(), 30);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut checklist = Checklist::default();
        assert_eq!(checklist.toggle(5, 0), None);
        assert_eq!(checklist.toggle(0, 4), None);
        assert_eq!(checklist, Checklist::default());
    }
}
