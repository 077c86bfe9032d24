//! Pages, the sidebar and the command palette.

use std::fmt::{self, Display};

use crate::filter::matches_search;

/// A page of the portal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    /// Onboarding overview.
    #[default]
    Dashboard,
    /// Free-form assistant chat.
    Oracle,
    /// Training videos.
    Tutor,
    /// Document upload and Q&A.
    Analyst,
    /// Documentation and tool links.
    Resources,
    /// The 30-day checklist.
    Checklist,
    /// Company terminology.
    Glossary,
    /// Team structure.
    OrgChart,
    /// Development environment setup.
    Setup,
}

impl Page {
    /// Every page.
    pub const ALL: &'static [Page] = &[
        Page::Dashboard,
        Page::Oracle,
        Page::Tutor,
        Page::Analyst,
        Page::Resources,
        Page::Checklist,
        Page::Glossary,
        Page::OrgChart,
        Page::Setup,
    ];

    /// Returns the stable identifier of this page.
    pub fn id(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Oracle => "oracle",
            Page::Tutor => "tutor",
            Page::Analyst => "analyst",
            Page::Resources => "resources",
            Page::Checklist => "checklist",
            Page::Glossary => "glossary",
            Page::OrgChart => "org-chart",
            Page::Setup => "setup",
        }
    }

    /// Returns the heading of this page.
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Welcome, New Voyager",
            Page::Oracle => "The Oracle",
            Page::Tutor => "The Tutor",
            Page::Analyst => "The Analyst",
            Page::Resources => "Resources",
            Page::Checklist => "Launch44 Checklist",
            Page::Glossary => "Glossary",
            Page::OrgChart => "Organization Chart",
            Page::Setup => "Environment Setup",
        }
    }

    /// Returns the page with the given id.
    pub fn parse(id: &str) -> Option<Page> {
        let id = id.trim();
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.id().eq_ignore_ascii_case(id))
    }

    /// Like [`Page::parse`], but unknown ids land on the dashboard.
    pub fn from_id(id: &str) -> Page {
        Page::parse(id).unwrap_or_else(|| {
            debug!("unknown page {id:?}, showing the dashboard");
            Page::Dashboard
        })
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An entry of the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Where it leads.
    pub page: Page,
    /// The text shown.
    pub label: &'static str,
}

/// The sidebar, top to bottom.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        page: Page::Dashboard,
        label: "Dashboard",
    },
    NavItem {
        page: Page::Oracle,
        label: "The Oracle",
    },
    NavItem {
        page: Page::Tutor,
        label: "The Tutor",
    },
    NavItem {
        page: Page::Analyst,
        label: "The Analyst",
    },
    NavItem {
        page: Page::Resources,
        label: "Resources",
    },
];

/// Section of the command palette a command is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandGroup {
    /// The pages of the sidebar.
    Navigation,
    /// Pages only reachable from the palette.
    Pages,
}

impl CommandGroup {
    /// Returns the heading shown above the group.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            CommandGroup::Navigation => "Navigation",
            CommandGroup::Pages => "Pages",
        }
    }
}

/// A command palette entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    /// Display title.
    pub title: &'static str,
    /// What it does.
    pub description: &'static str,
    /// Where it leads.
    pub page: Page,
    /// Where it is listed.
    pub group: CommandGroup,
}

const fn command(
    title: &'static str,
    description: &'static str,
    page: Page,
    group: CommandGroup,
) -> Command {
    Command {
        title,
        description,
        page,
        group,
    }
}

/// Every palette command.
pub const COMMANDS: &[Command] = &[
    command(
        "Dashboard",
        "View your onboarding overview",
        Page::Dashboard,
        CommandGroup::Navigation,
    ),
    command(
        "Chat with Oracle",
        "Ask questions to the AI assistant",
        Page::Oracle,
        CommandGroup::Navigation,
    ),
    command(
        "Video Training",
        "Browse video tutorials",
        Page::Tutor,
        CommandGroup::Navigation,
    ),
    command(
        "Upload Document",
        "Analyze documents with The Analyst",
        Page::Analyst,
        CommandGroup::Navigation,
    ),
    command(
        "Resources",
        "Access all documentation and tools",
        Page::Resources,
        CommandGroup::Navigation,
    ),
    command(
        "Checklist",
        "View Day 1 to Day 30 checklist",
        Page::Checklist,
        CommandGroup::Pages,
    ),
    command(
        "Glossary",
        "Learn company terminology",
        Page::Glossary,
        CommandGroup::Pages,
    ),
    command(
        "Organization Chart",
        "Explore team structure",
        Page::OrgChart,
        CommandGroup::Pages,
    ),
    command(
        "Environment Setup",
        "Configure your development environment",
        Page::Setup,
        CommandGroup::Pages,
    ),
];

/// The command palette overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandPalette {
    open: bool,
    search: String,
}

impl CommandPalette {
    /// Returns whether the palette is shown.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the search text.
    #[inline]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Shows the palette.
    #[inline]
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the palette, keeping the search text.
    #[inline]
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Shows or hides the palette.
    #[inline]
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Replaces the search text.
    #[inline]
    pub fn set_search<S: Into<String>>(&mut self, search: S) {
        self.search = search.into();
    }

    /// Returns the commands matching the search, in listing order.
    pub fn results(&self) -> Vec<&'static Command> {
        COMMANDS
            .iter()
            .filter(|cmd| {
                matches_search(&self.search, [cmd.title, cmd.description])
            })
            .collect()
    }

    /// Picks the `index`-th result, resetting and closing the palette.
    ///
    /// Returns `None` and leaves the palette alone when there is no such
    /// result.
    pub fn select(&mut self, index: usize) -> Option<Page> {
        let page = self.results().get(index)?.page;
        self.search.clear();
        self.open = false;
        Some(page)
    }
}
