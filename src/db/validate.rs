use serde::Serialize;
use std::collections::HashSet;

use crate::error::{DeskError, Result};
use crate::models::{BillingStatus, RiskLevel};

use super::fixtures::{BILLING_RECORDS, PROCUREMENTS, RISK_ASSESSMENTS, SLA_RECORDS, VENDORS};
use super::RecordStore;

/// A record that loaded but disagrees with a rule it should derive from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureIssue {
    pub file: &'static str,
    pub record: String,
    pub message: String,
}

impl FixtureIssue {
    fn new(file: &'static str, record: &str, message: String) -> Self {
        FixtureIssue {
            file,
            record: record.to_string(),
            message,
        }
    }
}

/// Hard invariants: any violation rejects the whole store.
pub fn reject_invalid(store: &RecordStore) -> Result<()> {
    unique_ids(VENDORS, store.vendors.iter().map(|v| v.id.as_str()))?;
    unique_ids(PROCUREMENTS, store.procurements.iter().map(|p| p.id.as_str()))?;
    unique_ids(SLA_RECORDS, store.sla_records.iter().map(|s| s.id.as_str()))?;
    unique_ids(BILLING_RECORDS, store.billing_records.iter().map(|b| b.id.as_str()))?;
    unique_ids(RISK_ASSESSMENTS, store.risk_assessments.iter().map(|r| r.id.as_str()))?;

    for vendor in &store.vendors {
        if vendor.risk_score > 100 {
            return Err(DeskError::fixture(
                VENDORS,
                format!("{}: riskScore {} outside 0-100", vendor.id, vendor.risk_score),
            ));
        }
        if !(0.0..=100.0).contains(&vendor.sla_compliance) {
            return Err(DeskError::fixture(
                VENDORS,
                format!("{}: slaCompliance {} outside 0-100", vendor.id, vendor.sla_compliance),
            ));
        }
        if vendor.renewal_date < vendor.onboard_date {
            return Err(DeskError::fixture(
                VENDORS,
                format!("{}: renewalDate precedes onboardDate", vendor.id),
            ));
        }
    }

    for assessment in &store.risk_assessments {
        if assessment.score > 100 {
            return Err(DeskError::fixture(
                RISK_ASSESSMENTS,
                format!("{}: score {} outside 0-100", assessment.id, assessment.score),
            ));
        }
    }

    Ok(())
}

fn unique_ids<'a>(file: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DeskError::fixture(file, format!("duplicate id {}", id)));
        }
    }
    Ok(())
}

/// Soft inconsistencies between stored and derivable fields. These are
/// reported, never corrected.
pub fn collect_issues(store: &RecordStore) -> Vec<FixtureIssue> {
    let mut issues = Vec::new();
    let vendor_ids: HashSet<&str> = store.vendors.iter().map(|v| v.id.as_str()).collect();
    let unknown_vendor = |file: &'static str, record: &str, vendor_id: &str| {
        if !vendor_ids.contains(vendor_id) {
            Some(FixtureIssue::new(
                file,
                record,
                format!("references unknown vendor {}", vendor_id),
            ))
        } else {
            None
        }
    };

    let mut referential = Vec::new();
    for sla in &store.sla_records {
        referential.extend(unknown_vendor(SLA_RECORDS, &sla.id, &sla.vendor_id));
    }
    for bill in &store.billing_records {
        referential.extend(unknown_vendor(BILLING_RECORDS, &bill.id, &bill.vendor_id));
    }
    for assessment in &store.risk_assessments {
        referential.extend(unknown_vendor(RISK_ASSESSMENTS, &assessment.id, &assessment.vendor_id));
    }

    for sla in &store.sla_records {
        if sla.penalty > 0 && !sla.status.allows_penalty() {
            issues.push(FixtureIssue::new(
                SLA_RECORDS,
                &sla.id,
                format!("penalty {} recorded with status {}", sla.penalty, sla.status),
            ));
        }
    }

    for bill in &store.billing_records {
        let expected = bill.expected_net_payable();
        if bill.net_payable as i128 != expected {
            issues.push(FixtureIssue::new(
                BILLING_RECORDS,
                &bill.id,
                format!("netPayable {} != amount + gst - tds ({})", bill.net_payable, expected),
            ));
        }
        match (bill.status, bill.hold_reason.is_some()) {
            (BillingStatus::OnHold, false) => issues.push(FixtureIssue::new(
                BILLING_RECORDS,
                &bill.id,
                "on hold without holdReason".to_string(),
            )),
            (status, true) if status != BillingStatus::OnHold => issues.push(FixtureIssue::new(
                BILLING_RECORDS,
                &bill.id,
                format!("holdReason set while {}", status),
            )),
            _ => {}
        }
    }

    for assessment in &store.risk_assessments {
        let derived = RiskLevel::from_score(assessment.score);
        if assessment.risk_level != derived {
            issues.push(FixtureIssue::new(
                RISK_ASSESSMENTS,
                &assessment.id,
                format!(
                    "riskLevel {} but score {} implies {}",
                    assessment.risk_level, assessment.score, derived
                ),
            ));
        }
    }

    issues.extend(referential);
    issues
}
