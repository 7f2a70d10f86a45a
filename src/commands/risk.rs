use crate::error::Result;
use crate::models::{ComplianceCheck, ComplianceRow, RiskAssessment, RiskRow, RiskView};
use crate::services::filter::{filter, Criteria};
use crate::services::metrics;
use crate::services::state::AppState;
use crate::utils::format_date;

pub fn get_risk_overview(state: &AppState, criteria: &Criteria) -> Result<RiskView> {
    let store = &state.store;
    let all = store.risk_assessments();
    let assessments: Vec<RiskRow> = filter(all, criteria).into_iter().map(risk_row).collect();

    tracing::debug!(page = "risk", matched = assessments.len(), "filtered risk assessments");

    Ok(RiskView {
        no_results: assessments.is_empty(),
        assessments,
        compliance_checks: store.compliance_checks().iter().map(compliance_row).collect(),
        stats: metrics::risk_stats(all, store.compliance_checks()),
        risk_share: metrics::risk_distribution(all.iter().map(|r| r.risk_level)),
        radar: store.analytics().risk_radar.clone(),
    })
}

fn risk_row(assessment: &RiskAssessment) -> RiskRow {
    RiskRow {
        last_assessed_label: format_date(assessment.last_assessed),
        next_review_label: format_date(assessment.next_review),
        badge: assessment.risk_level.badge_class(),
        assessment: assessment.clone(),
    }
}

fn compliance_row(check: &ComplianceCheck) -> ComplianceRow {
    ComplianceRow {
        last_checked_label: format_date(check.last_checked),
        check: check.clone(),
    }
}
