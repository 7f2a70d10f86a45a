use crate::error::Result;
use crate::models::{AnalyticsPeriod, AnalyticsView, Vendor};
use crate::services::metrics;
use crate::services::state::AppState;

use super::vendors::vendor_row;

pub fn get_analytics(state: &AppState, period: AnalyticsPeriod) -> Result<AnalyticsView> {
    let store = &state.store;
    let series = store.analytics();
    let top_vendors = metrics::top_n_by(
        store.vendors(),
        state.settings.top_vendor_limit,
        |v: &Vendor| v.contract_value,
    )
    .into_iter()
    .map(vendor_row)
    .collect();

    tracing::debug!(page = "analytics", period = %period, "built analytics view");

    Ok(AnalyticsView {
        period: period.as_str(),
        monthly_spend: period.window(&series.monthly_spend),
        vendor_growth: period.window(&series.vendor_growth),
        sla_trend: period.window(&series.sla_trend),
        risk_trend: period.window(&series.risk_trend),
        contract_value_by_type: series.contract_value_by_type.clone(),
        top_vendors,
    })
}
