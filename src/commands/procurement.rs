use crate::error::Result;
use crate::models::{Procurement, ProcurementRow, ProcurementView};
use crate::services::filter::{filter, Criteria};
use crate::services::metrics;
use crate::services::state::AppState;
use crate::utils::{format_crore, format_date};

pub fn get_procurements(state: &AppState, criteria: &Criteria) -> Result<ProcurementView> {
    let all = state.store.procurements();
    let procurements: Vec<ProcurementRow> =
        filter(all, criteria).into_iter().map(procurement_row).collect();
    let stats = metrics::procurement_stats(all);

    tracing::debug!(page = "procurement", matched = procurements.len(), "filtered procurements");

    Ok(ProcurementView {
        no_results: procurements.is_empty(),
        total_value_label: format_crore(stats.total_value, 0),
        procurements,
        stats,
    })
}

fn procurement_row(procurement: &Procurement) -> ProcurementRow {
    ProcurementRow {
        stage_index: procurement.stage.index(),
        progress_percent: procurement.stage.progress_percent(),
        value_label: format_crore(procurement.estimated_value, 0),
        submitted_label: procurement.submitted_date.map(format_date),
        badge: procurement.status.badge_class(),
        procurement: procurement.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcurementStage, Settings};

    fn state() -> AppState {
        AppState::load(Settings::default()).unwrap()
    }

    #[test]
    fn rows_track_stage_progress() {
        let view = get_procurements(&state(), &Criteria::default()).unwrap();
        let core = &view.procurements[0];
        assert_eq!(core.procurement.stage, ProcurementStage::TechnicalEvaluation);
        assert_eq!(core.stage_index, 3);
        assert_eq!(core.progress_percent, 75);
        assert_eq!(core.value_label, "₹150Cr");
        assert_eq!(core.submitted_label.as_deref(), Some("15 Sept"));
        assert_eq!(core.badge, "in-progress");

        let draft = &view.procurements[4];
        assert_eq!(draft.progress_percent, 0);
        assert_eq!(draft.submitted_label, None);
    }

    #[test]
    fn stats_cover_all_procurements() {
        let view = get_procurements(&state(), &Criteria::default().with_kind("IT")).unwrap();
        assert_eq!(view.procurements.len(), 3);
        assert_eq!(view.stats.total, 6);
        assert_eq!(view.stats.approved, 1);
        assert_eq!(view.stats.in_progress, 2);
        assert_eq!(view.stats.pending, 2);
        assert_eq!(view.stats.draft, 1);
        assert_eq!(view.total_value_label, "₹344Cr");
    }

    #[test]
    fn status_and_query_combine() {
        let criteria = Criteria::default().with_status("Pending").with_query("mobile");
        let view = get_procurements(&state(), &criteria).unwrap();
        assert_eq!(view.procurements.len(), 1);
        assert_eq!(view.procurements[0].procurement.id, "PR-2024-006");
    }
}
