pub mod fixtures;
mod validate;

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{DeskError, Result};
use crate::models::{
    Activity, AnalyticsSeries, BillingRecord, ComplianceCheck, Procurement, RiskAssessment,
    SlaRecord, Vendor,
};

pub use fixtures::FixtureSet;
pub use validate::FixtureIssue;

/// Read-only collections for the lifetime of the process. Built once,
/// validated once, then only ever borrowed.
#[derive(Debug)]
pub struct RecordStore {
    vendors: Vec<Vendor>,
    procurements: Vec<Procurement>,
    sla_records: Vec<SlaRecord>,
    billing_records: Vec<BillingRecord>,
    risk_assessments: Vec<RiskAssessment>,
    compliance_checks: Vec<ComplianceCheck>,
    activities: Vec<Activity>,
    analytics: AnalyticsSeries,
    issues: Vec<FixtureIssue>,
}

impl RecordStore {
    pub fn from_fixtures() -> Result<Self> {
        Self::from_set(&FixtureSet::bundled())
    }

    pub fn from_dir(dir: &Path) -> Result<Self> {
        tracing::info!(dir = %dir.display(), "loading fixtures from directory");
        Self::from_set(&FixtureSet::from_dir(dir)?)
    }

    pub fn from_set(set: &FixtureSet) -> Result<Self> {
        let mut store = RecordStore {
            vendors: load(set, fixtures::VENDORS)?,
            procurements: load(set, fixtures::PROCUREMENTS)?,
            sla_records: load(set, fixtures::SLA_RECORDS)?,
            billing_records: load(set, fixtures::BILLING_RECORDS)?,
            risk_assessments: load(set, fixtures::RISK_ASSESSMENTS)?,
            compliance_checks: load(set, fixtures::COMPLIANCE_CHECKS)?,
            activities: load(set, fixtures::ACTIVITIES)?,
            analytics: load(set, fixtures::ANALYTICS)?,
            issues: Vec::new(),
        };

        validate::reject_invalid(&store)?;
        store.issues = validate::collect_issues(&store);
        for issue in &store.issues {
            tracing::warn!(file = issue.file, record = %issue.record, "{}", issue.message);
        }

        tracing::info!(
            vendors = store.vendors.len(),
            procurements = store.procurements.len(),
            sla_records = store.sla_records.len(),
            billing_records = store.billing_records.len(),
            risk_assessments = store.risk_assessments.len(),
            compliance_checks = store.compliance_checks.len(),
            issues = store.issues.len(),
            "record store ready"
        );
        Ok(store)
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn vendor(&self, id: &str) -> Result<&Vendor> {
        self.vendors
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| DeskError::NotFound {
                kind: "Vendor",
                id: id.to_string(),
            })
    }

    pub fn procurements(&self) -> &[Procurement] {
        &self.procurements
    }

    pub fn sla_records(&self) -> &[SlaRecord] {
        &self.sla_records
    }

    pub fn billing_records(&self) -> &[BillingRecord] {
        &self.billing_records
    }

    pub fn risk_assessments(&self) -> &[RiskAssessment] {
        &self.risk_assessments
    }

    pub fn compliance_checks(&self) -> &[ComplianceCheck] {
        &self.compliance_checks
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn analytics(&self) -> &AnalyticsSeries {
        &self.analytics
    }

    pub fn issues(&self) -> &[FixtureIssue] {
        &self.issues
    }
}

fn load<T: DeserializeOwned>(set: &FixtureSet, file: &'static str) -> Result<T> {
    let value = set.document(file)?;
    serde_json::from_value(value).map_err(|e| DeskError::fixture(file, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingStatus, RiskLevel};

    fn vendors_with(patch: impl Fn(&mut serde_json::Value)) -> FixtureSet {
        let bundled = FixtureSet::bundled();
        let mut doc = bundled.document(fixtures::VENDORS).unwrap();
        patch(&mut doc);
        bundled.with_file(fixtures::VENDORS, doc.to_string())
    }

    #[test]
    fn bundled_fixtures_load_clean() {
        let store = RecordStore::from_fixtures().unwrap();
        assert!(!store.vendors().is_empty());
        assert!(!store.procurements().is_empty());
        assert!(!store.sla_records().is_empty());
        assert!(!store.billing_records().is_empty());
        assert!(!store.risk_assessments().is_empty());
        assert!(!store.compliance_checks().is_empty());
        assert!(!store.activities().is_empty());
        assert_eq!(store.analytics().monthly_spend.len(), 12);
        assert!(store.issues().is_empty(), "unexpected issues: {:?}", store.issues());
    }

    #[test]
    fn vendor_lookup() {
        let store = RecordStore::from_fixtures().unwrap();
        assert_eq!(store.vendor("V001").unwrap().name, "Tata Consultancy Services");
        assert!(matches!(
            store.vendor("V999"),
            Err(DeskError::NotFound { kind: "Vendor", .. })
        ));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let set = vendors_with(|doc| doc[0]["status"] = "Retired".into());
        assert!(matches!(
            RecordStore::from_set(&set),
            Err(DeskError::Fixture { file: fixtures::VENDORS, .. })
        ));
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let set = vendors_with(|doc| doc[0]["riskScore"] = 140.into());
        let err = RecordStore::from_set(&set).unwrap_err();
        assert!(err.to_string().contains("riskScore 140"));
    }

    #[test]
    fn renewal_before_onboard_is_rejected() {
        let set = vendors_with(|doc| doc[1]["renewalDate"] = "2001-01-01".into());
        let err = RecordStore::from_set(&set).unwrap_err();
        assert!(err.to_string().contains("renewalDate precedes onboardDate"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let set = vendors_with(|doc| {
            let first = doc[0]["id"].clone();
            doc[1]["id"] = first;
        });
        let err = RecordStore::from_set(&set).unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn soft_inconsistencies_are_flagged_not_rejected() {
        let bundled = FixtureSet::bundled();
        let mut bills = bundled.document(fixtures::BILLING_RECORDS).unwrap();
        bills[0]["netPayable"] = 1.into();
        let mut risks = bundled.document(fixtures::RISK_ASSESSMENTS).unwrap();
        risks[0]["riskLevel"] = "High".into();
        let set = bundled
            .with_file(fixtures::BILLING_RECORDS, bills.to_string())
            .with_file(fixtures::RISK_ASSESSMENTS, risks.to_string());

        let store = RecordStore::from_set(&set).unwrap();
        let files: Vec<&str> = store.issues().iter().map(|i| i.file).collect();
        assert_eq!(files, vec![fixtures::BILLING_RECORDS, fixtures::RISK_ASSESSMENTS]);
        // Stored values are kept as authored.
        assert_eq!(store.billing_records()[0].net_payable, 1);
        assert_eq!(store.risk_assessments()[0].risk_level, RiskLevel::High);
    }

    #[test]
    fn hold_reason_mismatch_is_flagged() {
        let bundled = FixtureSet::bundled();
        let mut bills = bundled.document(fixtures::BILLING_RECORDS).unwrap();
        let paid = bills
            .as_array()
            .unwrap()
            .iter()
            .position(|b| b["status"] == "Paid")
            .unwrap();
        bills[paid]["holdReason"] = "pending audit".into();
        let store = RecordStore::from_set(
            &bundled.with_file(fixtures::BILLING_RECORDS, bills.to_string()),
        )
        .unwrap();
        assert_eq!(store.issues().len(), 1);
        assert!(store.issues()[0].message.contains(BillingStatus::Paid.as_str()));
    }
}
