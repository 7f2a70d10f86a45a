mod period;
mod status;
mod views;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

pub use period::AnalyticsPeriod;
pub use status::{
    ActivityKind, BillingStatus, ComplianceStatus, ProcurementStage, ProcurementStatus, RiskLevel,
    SlaStatus, VendorStatus, VendorType, LOW_RISK_CEILING, MEDIUM_RISK_CEILING,
};
pub use views::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: VendorType,
    pub category: String,
    pub status: VendorStatus,
    pub contract_value: u64,
    pub sla_compliance: f64,
    pub risk_score: u8,
    pub primary_contact: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub certifications: BTreeSet<String>,
    pub onboard_date: NaiveDate,
    pub renewal_date: NaiveDate,
}

impl Vendor {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Procurement {
    pub id: String,
    pub title: String,
    pub department: String,
    #[serde(rename = "type")]
    pub kind: VendorType,
    pub status: ProcurementStatus,
    pub stage: ProcurementStage,
    pub estimated_value: u64,
    pub vendor_count: u32,
    pub submitted_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaRecord {
    pub id: String,
    pub vendor_id: String,
    pub vendor_name: String,
    pub service_name: String,
    pub metric: String,
    pub target: f64,
    pub actual: f64,
    /// Absent for percentage metrics.
    pub unit: Option<String>,
    pub status: SlaStatus,
    pub penalty: u64,
    pub period: String,
}

impl SlaRecord {
    pub fn is_percent_metric(&self) -> bool {
        self.unit.is_none()
    }

    /// Actual over target as a percentage. `None` when the target is zero.
    pub fn performance(&self) -> Option<f64> {
        if self.target == 0.0 {
            return None;
        }
        Some(self.actual / self.target * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecord {
    pub id: String,
    pub invoice_no: String,
    pub vendor_id: String,
    pub vendor_name: String,
    pub amount: u64,
    pub gst: u64,
    pub tds: u64,
    pub net_payable: u64,
    pub status: BillingStatus,
    pub hold_reason: Option<String>,
    pub submitted_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl BillingRecord {
    /// amount + gst - tds, signed so a malformed record cannot underflow.
    pub fn expected_net_payable(&self) -> i128 {
        self.amount as i128 + self.gst as i128 - self.tds as i128
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub id: String,
    pub vendor_id: String,
    pub vendor_name: String,
    pub category: String,
    pub score: u8,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub factors: Vec<String>,
    pub last_assessed: NaiveDate,
    pub next_review: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCheck {
    pub name: String,
    pub status: ComplianceStatus,
    pub last_checked: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u32,
    pub title: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

/// Spend per vendor segment for one month, in crore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySpend {
    pub month: String,
    #[serde(rename = "IT")]
    pub it: f64,
    #[serde(rename = "NonIT")]
    pub non_it: f64,
    #[serde(rename = "NonBanking")]
    pub non_banking: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorGrowth {
    pub month: String,
    pub new_vendors: u32,
    pub terminated: u32,
    pub active: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractValueByType {
    #[serde(rename = "type")]
    pub kind: String,
    /// Crore.
    pub value: u64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaTrend {
    pub month: String,
    #[serde(rename = "IT")]
    pub it: f64,
    #[serde(rename = "NonIT")]
    pub non_it: f64,
    #[serde(rename = "NonBanking")]
    pub non_banking: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskTrend {
    pub month: String,
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRadar {
    pub category: String,
    pub score: u8,
}

/// Monthly and categorical chart series that have no base collection behind them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSeries {
    pub monthly_spend: Vec<MonthlySpend>,
    pub vendor_growth: Vec<VendorGrowth>,
    pub contract_value_by_type: Vec<ContractValueByType>,
    pub sla_trend: Vec<SlaTrend>,
    pub risk_trend: Vec<RiskTrend>,
    pub risk_radar: Vec<RiskRadar>,
}

fn default_top_vendor_limit() -> usize {
    5
}

fn default_recent_activity_limit() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fixtures_dir: Option<PathBuf>,
    pub top_vendor_limit: usize,
    pub recent_activity_limit: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            fixtures_dir: None,
            top_vendor_limit: default_top_vendor_limit(),
            recent_activity_limit: default_recent_activity_limit(),
            log_level: default_log_level(),
        }
    }
}
