//! Company terminology.

use crate::filter::{Listing, define_category};

define_category! {
    /// Topic a glossary term belongs to.
    GlossaryCategory {
        /// Shipping and freight vocabulary.
        Logistics => "Logistics",
        /// Architecture and APIs.
        Technology => "Technology",
        /// Internal and third-party tools.
        Tools => "Tools",
        /// Access and credentials.
        Security => "Security",
    }
}

/// A glossary entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Term {
    /// The term itself.
    pub term: &'static str,
    /// What it means.
    pub definition: &'static str,
    /// Topic of the term.
    pub category: GlossaryCategory,
}

impl Listing for Term {
    type Category = GlossaryCategory;

    fn category(&self) -> GlossaryCategory {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.term, self.definition]
    }
}

const fn term(
    term: &'static str,
    definition: &'static str,
    category: GlossaryCategory,
) -> Term {
    Term {
        term,
        definition,
        category,
    }
}

/// Every glossary entry.
pub const TERMS: &[Term] = &[
    term(
        "Dwell Time",
        "The amount of time a shipment spends stationary at a location.",
        GlossaryCategory::Logistics,
    ),
    term(
        "ELD",
        "Electronic Logging Device - records hours of service for drivers.",
        GlossaryCategory::Logistics,
    ),
    term(
        "API v4",
        "The latest version of our REST API with enhanced features and performance.",
        GlossaryCategory::Technology,
    ),
    term(
        "Runway",
        "Our testing environment portal for deploying and validating changes.",
        GlossaryCategory::Tools,
    ),
    term(
        "Microservices",
        "Architectural approach using small, independent services.",
        GlossaryCategory::Technology,
    ),
    term(
        "Rate Limiting",
        "Controlling the number of API requests per time period.",
        GlossaryCategory::Technology,
    ),
    term(
        "RLS",
        "Row-Level Security - database-level access control.",
        GlossaryCategory::Security,
    ),
    term(
        "SSH",
        "Secure Shell Protocol for secure remote server access.",
        GlossaryCategory::Security,
    ),
    term(
        "Docker",
        "Containerization platform for packaging applications.",
        GlossaryCategory::Tools,
    ),
    term(
        "Load Balancing",
        "Distributing network traffic across multiple servers.",
        GlossaryCategory::Technology,
    ),
];
