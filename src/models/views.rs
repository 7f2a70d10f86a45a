use serde::Serialize;

use super::{
    Activity, BillingRecord, ComplianceCheck, ContractValueByType, MonthlySpend, Procurement,
    RiskAssessment, RiskLevel, RiskRadar, RiskTrend, SlaRecord, SlaTrend, Vendor, VendorGrowth,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_vendors: usize,
    pub active_contracts: usize,
    pub pending_approvals: usize,
    pub sla_breach: usize,
    pub total_spend: u64,
    pub risk_alerts: usize,
    pub compliance_score: Option<f64>,
    pub avg_sla_compliance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorStats {
    pub total: usize,
    pub active: usize,
    pub under_review: usize,
    pub inactive: usize,
    pub total_contract_value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementStats {
    pub total: usize,
    pub approved: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub draft: usize,
    pub total_value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaStats {
    pub total: usize,
    pub exceeded: usize,
    pub on_track: usize,
    pub at_risk: usize,
    pub breached: usize,
    pub total_penalty: u64,
    /// `None` when there is nothing to average.
    pub avg_compliance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingStats {
    pub total_invoiced: u64,
    pub total_payable: u64,
    pub paid: u64,
    pub pending: u64,
    pub on_hold: u64,
    pub invoice_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskStats {
    pub total_assessments: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub compliance_passed: usize,
    pub compliance_total: usize,
    pub compliance_rate: Option<i64>,
    pub avg_risk_score: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBucket {
    pub level: RiskLevel,
    pub count: usize,
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRow {
    #[serde(flatten)]
    pub vendor: Vendor,
    pub contract_label: String,
    pub risk_level: RiskLevel,
    pub badge: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDetail {
    #[serde(flatten)]
    pub row: VendorRow,
    pub onboard_label: String,
    pub renewal_label: String,
    pub sla_compliance_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorsView {
    pub vendors: Vec<VendorRow>,
    pub stats: VendorStats,
    pub total_contract_label: String,
    pub no_results: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementRow {
    #[serde(flatten)]
    pub procurement: Procurement,
    pub stage_index: usize,
    pub progress_percent: u8,
    pub value_label: String,
    pub submitted_label: Option<String>,
    pub badge: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementView {
    pub procurements: Vec<ProcurementRow>,
    pub stats: ProcurementStats,
    pub total_value_label: String,
    pub no_results: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaRow {
    #[serde(flatten)]
    pub sla: SlaRecord,
    pub performance: Option<f64>,
    pub performance_label: String,
    pub is_percent_metric: bool,
    pub penalty_label: String,
    pub badge: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaView {
    pub records: Vec<SlaRow>,
    pub stats: SlaStats,
    pub avg_compliance_label: String,
    pub total_penalty_label: String,
    pub no_results: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRow {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub last_assessed_label: String,
    pub next_review_label: String,
    pub badge: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRow {
    #[serde(flatten)]
    pub check: ComplianceCheck,
    pub last_checked_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskView {
    pub assessments: Vec<RiskRow>,
    pub compliance_checks: Vec<ComplianceRow>,
    pub stats: RiskStats,
    pub risk_share: Vec<RiskBucket>,
    pub radar: Vec<RiskRadar>,
    pub no_results: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRow {
    #[serde(flatten)]
    pub bill: BillingRecord,
    pub amount_label: String,
    pub net_payable_label: String,
    pub submitted_label: String,
    pub due_label: String,
    pub badge: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingView {
    pub bills: Vec<BillingRow>,
    pub stats: BillingStats,
    pub filtered_net_payable: u64,
    pub filtered_net_payable_label: String,
    pub no_results: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaWatchRow {
    #[serde(flatten)]
    pub sla: SlaRecord,
    pub penalty_label: String,
    pub badge: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub total_spend_label: String,
    pub compliance_score_label: String,
    pub avg_sla_compliance_label: String,
    pub monthly_spend: Vec<MonthlySpend>,
    pub category_distribution: Vec<CategoryCount>,
    pub risk_distribution: Vec<RiskBucket>,
    pub recent_activities: Vec<Activity>,
    pub sla_watchlist: Vec<SlaWatchRow>,
    pub top_vendors: Vec<VendorRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsView {
    pub period: &'static str,
    pub monthly_spend: Vec<MonthlySpend>,
    pub vendor_growth: Vec<VendorGrowth>,
    pub sla_trend: Vec<SlaTrend>,
    pub risk_trend: Vec<RiskTrend>,
    pub contract_value_by_type: Vec<ContractValueByType>,
    pub top_vendors: Vec<VendorRow>,
}
