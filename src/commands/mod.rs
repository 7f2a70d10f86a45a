//! One command per page. Each takes the shared state plus the page's
//! criteria and returns an owned, serializable view.

pub mod analytics;
pub mod billing;
pub mod dashboard;
pub mod procurement;
pub mod risk;
pub mod sla;
pub mod vendors;

use serde_json::Value;

use crate::error::Result;
use crate::navigation::Page;
use crate::services::state::{AppState, PageSession};

/// Dispatches a session to its page command and serializes the view.
pub fn render_page(state: &AppState, session: &PageSession) -> Result<Value> {
    let criteria = &session.criteria;
    let value = match session.page {
        Page::Dashboard => serde_json::to_value(dashboard::get_dashboard_view(state)?)?,
        Page::Vendors => match &session.vendor_id {
            Some(id) => serde_json::to_value(vendors::get_vendor_detail(state, id)?)?,
            None => serde_json::to_value(vendors::get_vendors(state, criteria)?)?,
        },
        Page::Procurement => serde_json::to_value(procurement::get_procurements(state, criteria)?)?,
        Page::Sla => serde_json::to_value(sla::get_sla_records(state, criteria)?)?,
        Page::Risk => serde_json::to_value(risk::get_risk_overview(state, criteria)?)?,
        Page::Billing => serde_json::to_value(billing::get_billing(state, criteria)?)?,
        Page::Analytics => serde_json::to_value(analytics::get_analytics(state, session.period)?)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Settings;

    #[test]
    fn every_page_renders() {
        let state = AppState::load(Settings::default()).unwrap();
        for page in Page::ALL {
            let value = render_page(&state, &PageSession::new(page)).unwrap();
            assert!(value.is_object(), "{} did not render an object", page);
        }
    }

    #[test]
    fn vendor_session_renders_detail() {
        let state = AppState::load(Settings::default()).unwrap();
        let session = PageSession::new(Page::Vendors).with_vendor("V003");
        let value = render_page(&state, &session).unwrap();
        assert_eq!(value["name"], "Wipro Technologies");
        assert_eq!(value["contractLabel"], "₹29.0Cr");
    }
}
