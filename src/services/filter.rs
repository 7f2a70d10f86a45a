use serde::{Deserialize, Serialize};

use crate::models::{BillingRecord, Procurement, RiskAssessment, SlaRecord, Vendor};

const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    IgnoreCase,
}

/// One categorical criterion. "all" (or nothing) leaves the field unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn matches(&self, actual: &str, mode: MatchMode) -> bool {
        match (self, mode) {
            (Selection::All, _) => true,
            (Selection::Only(wanted), MatchMode::Exact) => wanted == actual,
            (Selection::Only(wanted), MatchMode::IgnoreCase) => {
                wanted.to_lowercase() == actual.to_lowercase()
            }
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value.is_empty() || value == ALL {
            Selection::All
        } else {
            Selection::Only(value)
        }
    }
}

impl From<Selection> for String {
    fn from(value: Selection) -> Self {
        match value {
            Selection::All => ALL.to_string(),
            Selection::Only(v) => v,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Criteria {
    pub query: String,
    pub status: Selection,
    #[serde(rename = "type")]
    pub kind: Selection,
    pub risk_level: Selection,
}

impl Criteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<Selection>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<Selection>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_risk_level(mut self, level: impl Into<Selection>) -> Self {
        self.risk_level = level.into();
        self
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        self.matches_text(item, &self.query.to_lowercase()) && self.matches_categories(item)
    }

    fn matches_text<T: Filterable>(&self, item: &T, needle: &str) -> bool {
        needle.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }

    fn matches_categories<T: Filterable>(&self, item: &T) -> bool {
        let status_ok = item
            .status_label()
            .map_or(true, |label| self.status.matches(label, T::STATUS_MATCH));
        let kind_ok = item
            .kind_label()
            .map_or(true, |label| self.kind.matches(label, MatchMode::Exact));
        let level_ok = item
            .risk_level_label()
            .map_or(true, |label| self.risk_level.matches(label, MatchMode::IgnoreCase));
        status_ok && kind_ok && level_ok
    }
}

/// What a record exposes to the filter engine. A `None` label means the
/// matching criterion does not apply to that record type and is ignored.
pub trait Filterable {
    const STATUS_MATCH: MatchMode = MatchMode::Exact;

    fn search_fields(&self) -> Vec<&str>;

    fn status_label(&self) -> Option<&str> {
        None
    }

    fn kind_label(&self) -> Option<&str> {
        None
    }

    fn risk_level_label(&self) -> Option<&str> {
        None
    }
}

/// Matching subset in input order. Pure: same inputs, same output.
pub fn filter<'a, T, I>(items: I, criteria: &Criteria) -> Vec<&'a T>
where
    T: Filterable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = criteria.query.to_lowercase();
    items
        .into_iter()
        .filter(|item| criteria.matches_text(*item, &needle) && criteria.matches_categories(*item))
        .collect()
}

impl Filterable for Vendor {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str()]
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_label(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }
}

impl Filterable for Procurement {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.id.as_str()]
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_label(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }
}

impl Filterable for SlaRecord {
    const STATUS_MATCH: MatchMode = MatchMode::IgnoreCase;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.vendor_name.as_str(), self.service_name.as_str(), self.id.as_str()]
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl Filterable for BillingRecord {
    const STATUS_MATCH: MatchMode = MatchMode::IgnoreCase;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.vendor_name.as_str(), self.invoice_no.as_str(), self.vendor_id.as_str()]
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl Filterable for RiskAssessment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.vendor_name.as_str(), self.vendor_id.as_str()]
    }

    fn risk_level_label(&self) -> Option<&str> {
        Some(self.risk_level.as_str())
    }
}
