use crate::error::Result;
use crate::models::{DashboardView, SlaRecord, SlaWatchRow};
use crate::services::metrics;
use crate::services::state::AppState;
use crate::utils::{format_currency, format_penalty, format_percent};

use super::vendors::vendor_row;

const SLA_WATCHLIST_LEN: usize = 5;

pub fn get_dashboard_view(state: &AppState) -> Result<DashboardView> {
    let store = &state.store;
    let stats = metrics::dashboard_stats(store);

    let recent_activities = store
        .activities()
        .iter()
        .take(state.settings.recent_activity_limit)
        .cloned()
        .collect();
    let sla_watchlist = store
        .sla_records()
        .iter()
        .take(SLA_WATCHLIST_LEN)
        .map(sla_watch_row)
        .collect();
    // Store order, not ranked: the dashboard lists the first vendors as-is.
    let top_vendors = store
        .vendors()
        .iter()
        .take(state.settings.top_vendor_limit)
        .map(vendor_row)
        .collect();

    tracing::debug!(
        page = "dashboard",
        vendors = stats.total_vendors,
        pending = stats.pending_approvals,
        "built dashboard view"
    );

    Ok(DashboardView {
        total_spend_label: format_currency(stats.total_spend),
        compliance_score_label: format_percent(stats.compliance_score),
        avg_sla_compliance_label: format_percent(stats.avg_sla_compliance),
        monthly_spend: store.analytics().monthly_spend.clone(),
        category_distribution: metrics::category_distribution(store.vendors()),
        risk_distribution: metrics::risk_distribution(
            store.risk_assessments().iter().map(|r| r.risk_level),
        ),
        recent_activities,
        sla_watchlist,
        top_vendors,
        stats,
    })
}

fn sla_watch_row(sla: &SlaRecord) -> SlaWatchRow {
    SlaWatchRow {
        penalty_label: format_penalty(sla.penalty),
        badge: sla.status.badge_class(),
        sla: sla.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RiskLevel, Settings};

    fn state() -> AppState {
        AppState::load(Settings::default()).unwrap()
    }

    #[test]
    fn headline_stats_are_derived() {
        let view = get_dashboard_view(&state()).unwrap();
        assert_eq!(view.stats.total_vendors, 10);
        assert_eq!(view.stats.active_contracts, 7);
        assert_eq!(view.stats.pending_approvals, 4);
        assert_eq!(view.stats.sla_breach, 2);
        assert_eq!(view.stats.risk_alerts, 2);
        assert_eq!(view.stats.total_spend, 1_900_000_000);
        assert_eq!(view.total_spend_label, "₹190.0Cr");
        assert_eq!(view.compliance_score_label, "62.5%");
        assert_eq!(view.avg_sla_compliance_label, "94.4%");
    }

    #[test]
    fn lists_are_truncated_in_store_order() {
        let view = get_dashboard_view(&state()).unwrap();
        assert_eq!(view.recent_activities.len(), 5);
        assert_eq!(view.recent_activities[0].id, 1);
        let ids: Vec<&str> = view.top_vendors.iter().map(|r| r.vendor.id.as_str()).collect();
        assert_eq!(ids, vec!["V001", "V002", "V003", "V004", "V005"]);
        let penalties: Vec<&str> = view.sla_watchlist.iter().map(|r| r.penalty_label.as_str()).collect();
        assert_eq!(penalties, vec!["-", "-", "₹2.5L", "₹15.0L", "-"]);
    }

    #[test]
    fn distributions_cover_the_store() {
        let view = get_dashboard_view(&state()).unwrap();
        let total: usize = view.category_distribution.iter().map(|c| c.count).sum();
        assert_eq!(total, 10);
        assert_eq!(view.category_distribution[0].category, "IT Services");
        assert_eq!(view.category_distribution[0].count, 2);
        let high = view
            .risk_distribution
            .iter()
            .find(|b| b.level == RiskLevel::High)
            .unwrap();
        assert_eq!(high.count, 2);
        assert_eq!(view.monthly_spend.len(), 12);
    }
}
