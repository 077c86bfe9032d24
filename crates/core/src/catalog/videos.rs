//! Training videos.

use crate::filter::{Listing, define_category};

define_category! {
    /// Subject of a video.
    VideoCategory {
        /// Getting tools running.
        ToolsAndSetup => "Tools & Setup",
        /// Writing and integrating code.
        Development => "Development",
        /// Keys and credentials.
        Security => "Security",
        /// Running things in production.
        Operations => "Operations",
    }
}

/// A training video.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Video {
    /// Stable identifier.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Running time, `mm:ss`.
    pub duration: &'static str,
    /// Subject.
    pub category: VideoCategory,
    /// One-sentence summary.
    pub description: &'static str,
    /// Opening of the transcript.
    pub transcript: &'static str,
}

impl Listing for Video {
    type Category = VideoCategory;

    fn category(&self) -> VideoCategory {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.description]
    }
}

/// Every video.
pub const VIDEOS: &[Video] = &[
    Video {
        id: "1",
        title: "Getting Started with Runway",
        duration: "12:45",
        category: VideoCategory::ToolsAndSetup,
        description: "Learn how to navigate the Runway portal and set up your first testing environment.",
        transcript: "In this video, we'll walk through the Runway portal interface. First, log in with your company credentials. You'll see the main dashboard with your environments listed. Click on any environment to view deployment options...",
    },
    Video {
        id: "2",
        title: "Docker Setup Guide",
        duration: "18:30",
        category: VideoCategory::Development,
        description: "Complete guide to setting up Docker for local development and containerization.",
        transcript: "Docker allows us to containerize our applications. First, ensure Docker Desktop is installed. Open your terminal and run docker --version. Then, clone the repository and navigate to the Docker configuration...",
    },
    Video {
        id: "3",
        title: "API Integration Best Practices",
        duration: "22:15",
        category: VideoCategory::Development,
        description: "Learn best practices for integrating with project44 APIs securely and efficiently.",
        transcript: "When integrating with our APIs, always use authentication tokens. Never commit API keys to version control. Use environment variables instead. Start with the API documentation at api.project44.com...",
    },
    Video {
        id: "4",
        title: "SSH Key Configuration",
        duration: "8:20",
        category: VideoCategory::Security,
        description: "Step-by-step guide to generating and configuring SSH keys for GitHub and servers.",
        transcript: "SSH keys provide secure authentication. Generate a new key pair using ssh-keygen. When prompted, enter a secure passphrase. Add the public key to your GitHub account in settings...",
    },
    Video {
        id: "5",
        title: "Database Connection & Queries",
        duration: "25:00",
        category: VideoCategory::Development,
        description: "Understanding database connections, query optimization, and migration strategies.",
        transcript: "First, understand your database type. project44 uses PostgreSQL. Connection strings are stored in environment variables. Always use connection pooling for production. Test your queries...",
    },
    Video {
        id: "6",
        title: "Monitoring and Logging",
        duration: "19:45",
        category: VideoCategory::Operations,
        description: "Set up comprehensive monitoring and logging for your applications.",
        transcript: "Monitoring is crucial for production readiness. We use CloudWatch and DataDog. Log levels should be configured appropriately. Debug in development, info in production...",
    },
];

/// Finds a video by id.
pub fn find(id: &str) -> Option<&'static Video> {
    VIDEOS.iter().find(|video| video.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

    #[test]
    fn test_development_videos() {
        let mut filter = Filter::default();
        filter.set_category(Some(VideoCategory::Development));
        let ids: Vec<_> = filter.apply(VIDEOS).iter().map(|v| v.id).collect();
        assert_eq!(ids, ["2", "3", "5"]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("4").map(|v| v.title), Some("SSH Key Configuration"));
        assert!(find("7").is_none());
    }
}
