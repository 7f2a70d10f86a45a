use crate::error::Result;
use crate::models::{BillingRecord, BillingRow, BillingView};
use crate::services::filter::{filter, Criteria};
use crate::services::metrics;
use crate::services::state::AppState;
use crate::utils::{format_currency, format_currency_with, format_date};

pub fn get_billing(state: &AppState, criteria: &Criteria) -> Result<BillingView> {
    let all = state.store.billing_records();
    let matched = filter(all, criteria);
    let filtered_net_payable = metrics::sum_by(matched.iter().copied(), |b: &BillingRecord| b.net_payable);
    let bills: Vec<BillingRow> = matched.into_iter().map(billing_row).collect();

    tracing::debug!(
        page = "billing",
        matched = bills.len(),
        net_payable = filtered_net_payable,
        "filtered bills"
    );

    Ok(BillingView {
        no_results: bills.is_empty(),
        bills,
        stats: metrics::billing_stats(all),
        filtered_net_payable,
        filtered_net_payable_label: format_currency(filtered_net_payable),
    })
}

fn billing_row(bill: &BillingRecord) -> BillingRow {
    BillingRow {
        amount_label: format_currency_with(bill.amount, 2),
        net_payable_label: format_currency_with(bill.net_payable, 2),
        submitted_label: format_date(bill.submitted_date),
        due_label: format_date(bill.due_date),
        badge: bill.status.badge_class(),
        bill: bill.clone(),
    }
}
