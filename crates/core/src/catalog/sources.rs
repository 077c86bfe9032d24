//! Details behind the citations attached to assistant answers.

/// What the source drawer shows for a citation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceDoc {
    /// The citation as the backend spells it.
    pub citation: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Short description of the document.
    pub content: &'static str,
    /// Where to read the full document.
    pub link: &'static str,
}

/// Known citations. The first entry doubles as the fallback.
pub const SOURCES: &[SourceDoc] = &[
    SourceDoc {
        citation: "Confluence: Engineering Handbook",
        title: "Engineering Handbook",
        content: "The Engineering Handbook contains all technical guidelines, best practices, and architectural decisions for project44. It covers coding standards, deployment procedures, and troubleshooting guides. Access the full documentation on Confluence.",
        link: "https://project44.atlassian.net/wiki/spaces/FDNENG/overview",
    },
    SourceDoc {
        citation: "GitHub: project44",
        title: "project44 GitHub Organization",
        content: "The official project44 GitHub organization hosts all repositories including the design system (manifest), SDKs, documentation, infrastructure templates, and open source projects. Explore repositories, contribute to projects, and access code examples.",
        link: "https://github.com/project44",
    },
    SourceDoc {
        citation: "GitHub: project44-docs",
        title: "Project44 Documentation",
        content: "The official GitHub repository documentation includes SDK references, API documentation, and code examples for integrating with project44 services.",
        link: "https://github.com/project44/docs",
    },
    SourceDoc {
        citation: "Runway Portal",
        title: "Runway Portal",
        content: "The Runway Portal is your gateway to testing environments, deployments, and real-time monitoring of your project44 implementations.",
        link: "https://runway.project44.com",
    },
];

/// Returns the drawer content for `citation`.
///
/// Citations the portal knows nothing about show the Engineering Handbook.
pub fn lookup(citation: &str) -> &'static SourceDoc {
    SOURCES
        .iter()
        .find(|doc| doc.citation == citation)
        .unwrap_or(&SOURCES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_citation() {
        assert_eq!(
            lookup("Runway Portal").link,
            "https://runway.project44.com"
        );
        assert_eq!(
            lookup("GitHub: project44-docs").title,
            "Project44 Documentation"
        );
    }

    #[test]
    fn test_unknown_citation_falls_back() {
        assert_eq!(lookup("Slack: #general").title, "Engineering Handbook");
        assert_eq!(lookup("").citation, "Confluence: Engineering Handbook");
    }
}
