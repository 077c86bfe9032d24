//! Links to documentation and tools.

use crate::filter::{Category, Listing, define_category};

define_category! {
    /// Where a resource lives.
    ResourceCategory {
        /// Wiki spaces.
        Confluence => "Confluence",
        /// Repositories.
        GitHub => "GitHub",
        /// Internal applications.
        Tools => "Tools",
        /// Anything outside the company.
        External => "External",
    }
}

/// A documentation or tool link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resource {
    /// Stable identifier.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Where the resource lives.
    pub category: ResourceCategory,
    /// One-sentence summary.
    pub description: &'static str,
    /// Where to open it.
    pub link: &'static str,
    /// Freshness hint, as free text.
    pub last_updated: &'static str,
}

impl Listing for Resource {
    type Category = ResourceCategory;

    fn category(&self) -> ResourceCategory {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.description]
    }
}

/// Every resource.
pub const RESOURCES: &[Resource] = &[
    Resource {
        id: "1",
        title: "Engineering Handbook",
        category: ResourceCategory::Confluence,
        description: "Complete technical guidelines, coding standards, and best practices for development.",
        link: "https://confluence.example.com/engineering",
        last_updated: "2 days ago",
    },
    Resource {
        id: "2",
        title: "HR Policies",
        category: ResourceCategory::Confluence,
        description: "Human resources policies, benefits information, and employee guidelines.",
        link: "https://confluence.example.com/hr",
        last_updated: "1 week ago",
    },
    Resource {
        id: "3",
        title: "Product Specifications",
        category: ResourceCategory::Confluence,
        description: "Detailed product specifications, feature documentation, and roadmaps.",
        link: "https://confluence.example.com/product",
        last_updated: "3 days ago",
    },
    Resource {
        id: "4",
        title: "SDK Repository",
        category: ResourceCategory::GitHub,
        description: "Official SDK for integrating project44 services into your applications.",
        link: "https://github.com/project44/sdk",
        last_updated: "6 hours ago",
    },
    Resource {
        id: "5",
        title: "project44-docs",
        category: ResourceCategory::GitHub,
        description: "Complete API documentation, code examples, and integration guides.",
        link: "https://github.com/project44/docs",
        last_updated: "1 day ago",
    },
    Resource {
        id: "6",
        title: "Infrastructure-as-Code",
        category: ResourceCategory::GitHub,
        description: "Terraform and CloudFormation templates for infrastructure setup.",
        link: "https://github.com/project44/infrastructure",
        last_updated: "4 days ago",
    },
    Resource {
        id: "7",
        title: "MyApps (Okta)",
        category: ResourceCategory::Tools,
        description: "Single sign-on portal for accessing all internal applications.",
        link: "https://okta.project44.com",
        last_updated: "Updated daily",
    },
    Resource {
        id: "8",
        title: "HelpCenter",
        category: ResourceCategory::Tools,
        description: "FAQ, troubleshooting guides, and support documentation.",
        link: "https://help.project44.com",
        last_updated: "1 day ago",
    },
    Resource {
        id: "9",
        title: "Runway Portal",
        category: ResourceCategory::Tools,
        description: "Testing environments and deployment management for your applications.",
        link: "https://runway.project44.com",
        last_updated: "Real-time",
    },
    Resource {
        id: "10",
        title: "Security Guidelines",
        category: ResourceCategory::External,
        description: "Industry best practices and security standards for enterprise development.",
        link: "https://owasp.org",
        last_updated: "External source",
    },
    Resource {
        id: "11",
        title: "API Rate Limits",
        category: ResourceCategory::External,
        description: "Understanding and managing API rate limiting in your integrations.",
        link: "https://docs.project44.com/api/limits",
        last_updated: "2 weeks ago",
    },
    Resource {
        id: "12",
        title: "Community Forum",
        category: ResourceCategory::External,
        description: "Community discussions, Q&A, and best practices from other users.",
        link: "https://forum.project44.com",
        last_updated: "Updated hourly",
    },
];

/// Number of resources in each category, in display order.
pub fn category_counts() -> Vec<(ResourceCategory, usize)> {
    ResourceCategory::ALL
        .iter()
        .map(|&category| {
            let count =
                RESOURCES.iter().filter(|r| r.category == category).count();
            (category, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

    #[test]
    fn test_github_has_three() {
        let mut filter = Filter::default();
        filter.select_category("GitHub").unwrap();
        let titles: Vec<_> =
            filter.apply(RESOURCES).iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            ["SDK Repository", "project44-docs", "Infrastructure-as-Code"]
        );
    }

    #[test]
    fn test_counts_add_up() {
        let counts = category_counts();
        assert_eq!(counts.len(), 4);
        assert!(counts.iter().all(|(_, n)| *n == 3));
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, RESOURCES.len());
    }
}
