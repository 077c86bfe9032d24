//! Who is who.

use crate::filter::{Listing, define_category};

define_category! {
    /// A department of the company.
    Department {
        /// Technical development and infrastructure.
        Engineering => "Engineering",
        /// Features and user experience.
        Product => "Product",
        /// Clients and account growth.
        SalesAndCs => "Sales & CS",
        /// HR, finance and administration.
        Operations => "Operations",
    }
}

/// A person on the org chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Member {
    /// Full name.
    pub name: &'static str,
    /// Job title.
    pub role: &'static str,
    /// Where they work.
    pub department: Department,
}

impl Listing for Member {
    type Category = Department;

    fn category(&self) -> Department {
        self.department
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.role]
    }
}

const fn member(
    name: &'static str,
    role: &'static str,
    department: Department,
) -> Member {
    Member {
        name,
        role,
        department,
    }
}

/// Everyone, grouped by department in display order.
pub const MEMBERS: &[Member] = &[
    member("Alex Chen", "VP Engineering", Department::Engineering),
    member("Sarah Johnson", "Frontend Lead", Department::Engineering),
    member("Mike Davis", "Backend Lead", Department::Engineering),
    member("Lisa Wong", "DevOps Engineer", Department::Engineering),
    member("James Lee", "VP Product", Department::Product),
    member("Emily Rodriguez", "Senior PM", Department::Product),
    member("David Kim", "Product Designer", Department::Product),
    member("Rachel Smith", "VP Sales", Department::SalesAndCs),
    member("Tom Brown", "Account Manager", Department::SalesAndCs),
    member("Karen White", "Customer Success", Department::SalesAndCs),
    member("Robert Taylor", "VP Operations", Department::Operations),
    member("Nicole Garcia", "HR Manager", Department::Operations),
    member("Chris Martinez", "Finance Manager", Department::Operations),
];

/// Summary shown under the chart.
pub const STRUCTURE_NOTE: &str = "project44 is organized into four main \
departments: Engineering handles all technical development and \
infrastructure. Product manages feature development and user experience. \
Sales & Customer Success focuses on clients and account growth. Operations \
handles HR, finance, and administrative functions. Each department has a \
VP-level leader reporting to the CEO.";
