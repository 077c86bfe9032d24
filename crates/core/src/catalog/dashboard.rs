//! The landing page summary.

use super::progress_percent;

/// Tasks completed so far, as shown on the dashboard.
pub const TASKS_COMPLETED: usize = 7;
/// Tasks in the whole onboarding.
pub const TASKS_TOTAL: usize = 20;
/// Consecutive active days.
pub const STREAK: &str = "5 days";
/// Buttons under "Quick Start Resources".
pub const QUICK_LINKS: &[&str] = &["Handbook", "GitHub", "Confluence", "Okta"];

/// Urgency of an upcoming task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Due now.
    High,
    /// Due soon.
    Medium,
}

impl Priority {
    /// Returns the badge text.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
        }
    }
}

/// A task due soon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpcomingTask {
    /// What to do.
    pub title: &'static str,
    /// How urgent it is.
    pub priority: Priority,
    /// Days until it is due.
    pub days_left: u32,
}

/// How a recent activity turned out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// Something was finished.
    Completed,
    /// Something was looked at.
    Viewed,
    /// Something still needs attention.
    Pending,
}

/// Something the user did lately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    /// What happened.
    pub title: &'static str,
    /// When, as free text.
    pub time: &'static str,
    /// How it turned out.
    pub kind: ActivityKind,
}

/// Tasks due soon, most urgent first.
pub const UPCOMING_TASKS: &[UpcomingTask] = &[
    UpcomingTask {
        title: "Setup Development Environment",
        priority: Priority::High,
        days_left: 1,
    },
    UpcomingTask {
        title: "Attend Team Onboarding Meeting",
        priority: Priority::High,
        days_left: 1,
    },
    UpcomingTask {
        title: "Review Engineering Handbook",
        priority: Priority::Medium,
        days_left: 3,
    },
    UpcomingTask {
        title: "Complete Security Training",
        priority: Priority::Medium,
        days_left: 5,
    },
];

/// Latest activity, newest first.
pub const RECENT_ACTIVITY: &[Activity] = &[
    Activity {
        title: "Completed Docker Setup",
        time: "2 hours ago",
        kind: ActivityKind::Completed,
    },
    Activity {
        title: "Viewed Runway Portal Guide",
        time: "4 hours ago",
        kind: ActivityKind::Viewed,
    },
    Activity {
        title: "SSH Keys Pending",
        time: "1 day ago",
        kind: ActivityKind::Pending,
    },
];

/// Returns the overall onboarding progress in percent.
pub fn progress() -> u32 {
    progress_percent(TASKS_COMPLETED, TASKS_TOTAL)
}

/// Returns how many upcoming tasks are high priority.
pub fn high_priority_count() -> usize {
    UPCOMING_TASKS
        .iter()
        .filter(|task| task.priority == Priority::High)
        .count()
}
