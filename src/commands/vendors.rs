use crate::error::Result;
use crate::models::{Vendor, VendorDetail, VendorRow, VendorsView};
use crate::services::filter::{filter, Criteria};
use crate::services::metrics;
use crate::services::state::AppState;
use crate::utils::{format_crore, format_date_with_year, format_percent};

pub fn get_vendors(state: &AppState, criteria: &Criteria) -> Result<VendorsView> {
    let all = state.store.vendors();
    let vendors: Vec<VendorRow> = filter(all, criteria).into_iter().map(vendor_row).collect();
    // Portfolio totals, independent of the current filter.
    let stats = metrics::vendor_stats(all);

    tracing::debug!(page = "vendors", matched = vendors.len(), total = all.len(), "filtered vendors");

    Ok(VendorsView {
        no_results: vendors.is_empty(),
        total_contract_label: format_crore(stats.total_contract_value, 1),
        vendors,
        stats,
    })
}

pub fn get_vendor_detail(state: &AppState, vendor_id: &str) -> Result<VendorDetail> {
    let vendor = state.store.vendor(vendor_id)?;
    tracing::debug!(page = "vendors", vendor = vendor_id, "vendor detail");
    Ok(VendorDetail {
        onboard_label: format_date_with_year(vendor.onboard_date),
        renewal_label: format_date_with_year(vendor.renewal_date),
        sla_compliance_label: format_percent(Some(vendor.sla_compliance)),
        row: vendor_row(vendor),
    })
}

pub(crate) fn vendor_row(vendor: &Vendor) -> VendorRow {
    VendorRow {
        contract_label: format_crore(vendor.contract_value, 1),
        risk_level: vendor.risk_level(),
        badge: vendor.status.badge_class(),
        vendor: vendor.clone(),
    }
}
