use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeskError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Vendors,
    Procurement,
    Sla,
    Risk,
    Billing,
    Analytics,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Vendors,
        Page::Procurement,
        Page::Sla,
        Page::Risk,
        Page::Billing,
        Page::Analytics,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Vendors => "vendors",
            Page::Procurement => "procurement",
            Page::Sla => "sla",
            Page::Risk => "risk",
            Page::Billing => "billing",
            Page::Analytics => "analytics",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Vendors => "Vendor Management",
            Page::Procurement => "Procurement",
            Page::Sla => "SLA Management",
            Page::Risk => "Risk & Compliance",
            Page::Billing => "Billing & Payments",
            Page::Analytics => "Analytics & MIS",
        }
    }

    pub fn path(self) -> String {
        format!("/{}", self.id())
    }

    /// Static sidebar counter, if the entry shows one.
    pub fn badge(self) -> Option<u32> {
        match self {
            Page::Vendors => Some(3),
            Page::Risk => Some(5),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Accepts a bare id or a path; the root path is the dashboard.
impl FromStr for Page {
    type Err = DeskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let id = value.trim().trim_start_matches('/');
        if id.is_empty() {
            return Ok(Page::Dashboard);
        }
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.id() == id)
            .ok_or_else(|| DeskError::UnknownPage(value.to_string()))
    }
}
