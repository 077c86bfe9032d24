//! Development environment setup guide.

use crate::filter::matches_search;

/// One step of the guide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// What to do.
    pub title: &'static str,
    /// Where to get help, if anywhere.
    pub link: Option<&'static str>,
    /// Whether the user marked it done.
    pub completed: bool,
}

/// A group of related steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupSection {
    /// Section heading.
    pub title: &'static str,
    /// What the section is for.
    pub description: &'static str,
    /// The steps, in order.
    pub steps: Vec<Step>,
}

impl SetupSection {
    /// Returns the steps whose title matches `search`, with their index.
    pub fn matching_steps<'a>(
        &'a self,
        search: &str,
    ) -> Vec<(usize, &'a Step)> {
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, step)| matches_search(search, [step.title]))
            .collect()
    }
}

/// A shell command worth remembering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickCommand {
    /// The command line.
    pub command: &'static str,
    /// What it does.
    pub description: &'static str,
}

/// Commands listed under the guide.
pub const QUICK_REFERENCE: &[QuickCommand] = &[
    QuickCommand {
        command: "npm install",
        description: "Install project dependencies",
    },
    QuickCommand {
        command: "npm run dev",
        description: "Start development server",
    },
    QuickCommand {
        command: "docker compose up",
        description: "Start Docker services",
    },
    QuickCommand {
        command: "npm test",
        description: "Run test suite",
    },
];

/// Setup guide state for the current page visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupGuide {
    sections: Vec<SetupSection>,
}

/// A step title and its optional guide link.
type StepSpec = (&'static str, Option<&'static str>);

impl Default for SetupGuide {
    fn default() -> Self {
        let section = |title, description, steps: [StepSpec; 4]| {
            SetupSection {
                title,
                description,
                steps: steps
                    .into_iter()
                    .map(|(title, link)| Step {
                        title,
                        link,
                        completed: false,
                    })
                    .collect(),
            }
        };
        Self {
            sections: vec![
                section(
                    "Essential Tools",
                    "Core development tools required for all team members",
                    [
                        ("Install Node.js 18+", Some("https://nodejs.org")),
                        ("Install Git", Some("https://git-scm.com")),
                        ("Install Docker Desktop", Some("https://docker.com")),
                        (
                            "Install VS Code or IDE",
                            Some("https://code.visualstudio.com"),
                        ),
                    ],
                ),
                section(
                    "Environment Configuration",
                    "Configure your development environment",
                    [
                        ("Generate SSH keys", None),
                        ("Add SSH key to GitHub", None),
                        ("Configure git credentials", None),
                        ("Set environment variables", None),
                    ],
                ),
                section(
                    "Project Setup",
                    "Clone and configure project repositories",
                    [
                        ("Clone main repository", None),
                        ("Install dependencies", None),
                        ("Configure local environment", None),
                        ("Run local development server", None),
                    ],
                ),
                section(
                    "Verification",
                    "Verify everything is working correctly",
                    [
                        ("Run test suite", None),
                        ("Start development server", None),
                        ("Verify database connection", None),
                        ("Complete first pull request", None),
                    ],
                ),
            ],
        }
    }
}

impl SetupGuide {
    /// Returns the sections in order.
    #[inline]
    pub fn sections(&self) -> &[SetupSection] {
        &self.sections
    }

    /// Flips a step and returns its new state, or `None` if there is no
    /// such step. Both indices start at 0.
    pub fn toggle(&mut self, section: usize, step: usize) -> Option<bool> {
        let step = self.sections.get_mut(section)?.steps.get_mut(step)?;
        step.completed = !step.completed;
        Some(step.completed)
    }
}
