use std::sync::Arc;

use crate::db::RecordStore;
use crate::error::Result;
use crate::models::{AnalyticsPeriod, Settings};
use crate::navigation::Page;
use crate::services::filter::{Criteria, Selection};

/// Shared, read-only application state. Cloning is two refcount bumps.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(store: RecordStore, settings: Settings) -> Self {
        AppState {
            store: Arc::new(store),
            settings: Arc::new(settings),
        }
    }

    /// Builds the store from `settings.fixtures_dir`, or the bundled fixtures.
    pub fn load(settings: Settings) -> Result<Self> {
        let store = match &settings.fixtures_dir {
            Some(dir) => RecordStore::from_dir(dir)?,
            None => RecordStore::from_fixtures()?,
        };
        Ok(AppState::new(store, settings))
    }
}

/// What one page is currently showing. Every change yields a new session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSession {
    pub page: Page,
    pub criteria: Criteria,
    pub period: AnalyticsPeriod,
    pub vendor_id: Option<String>,
}

impl PageSession {
    pub fn new(page: Page) -> Self {
        PageSession {
            page,
            ..PageSession::default()
        }
    }

    /// Navigating away drops the page-scoped filter state.
    pub fn navigate(&self, page: Page) -> Self {
        PageSession::new(page)
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        self.with_criteria(self.criteria.clone().with_query(query))
    }

    pub fn with_status(&self, status: impl Into<Selection>) -> Self {
        self.with_criteria(self.criteria.clone().with_status(status))
    }

    pub fn with_kind(&self, kind: impl Into<Selection>) -> Self {
        self.with_criteria(self.criteria.clone().with_kind(kind))
    }

    pub fn with_risk_level(&self, level: impl Into<Selection>) -> Self {
        self.with_criteria(self.criteria.clone().with_risk_level(level))
    }

    pub fn with_criteria(&self, criteria: Criteria) -> Self {
        PageSession {
            criteria,
            ..self.clone()
        }
    }

    pub fn with_period(&self, period: AnalyticsPeriod) -> Self {
        PageSession {
            period,
            ..self.clone()
        }
    }

    pub fn with_vendor(&self, vendor_id: impl Into<String>) -> Self {
        PageSession {
            vendor_id: Some(vendor_id.into()),
            ..self.clone()
        }
    }
}
