use crate::error::Result;
use crate::models::{SlaRecord, SlaRow, SlaView};
use crate::services::filter::{filter, Criteria};
use crate::services::metrics;
use crate::services::state::AppState;
use crate::utils::{format_lakh, format_penalty_with, format_percent, to_fixed, PLACEHOLDER};

pub fn get_sla_records(state: &AppState, criteria: &Criteria) -> Result<SlaView> {
    let all = state.store.sla_records();
    let records: Vec<SlaRow> = filter(all, criteria).into_iter().map(sla_row).collect();
    let stats = metrics::sla_stats(all);

    tracing::debug!(page = "sla", matched = records.len(), "filtered sla records");

    Ok(SlaView {
        no_results: records.is_empty(),
        avg_compliance_label: format_percent(stats.avg_compliance),
        total_penalty_label: format_lakh(stats.total_penalty, 1),
        records,
        stats,
    })
}

fn sla_row(sla: &SlaRecord) -> SlaRow {
    let performance = sla.performance();
    SlaRow {
        performance,
        performance_label: performance.map_or_else(|| PLACEHOLDER.to_string(), |p| to_fixed(p, 1)),
        is_percent_metric: sla.is_percent_metric(),
        penalty_label: format_penalty_with(sla.penalty, 2),
        badge: sla.status.badge_class(),
        sla: sla.clone(),
    }
}
