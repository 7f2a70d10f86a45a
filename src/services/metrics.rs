use std::collections::BTreeMap;

use crate::db::RecordStore;
use crate::models::{
    BillingRecord, BillingStats, BillingStatus, CategoryCount, ComplianceCheck, ComplianceStatus,
    DashboardStats, Procurement, ProcurementStats, ProcurementStatus, RiskAssessment, RiskBucket,
    RiskLevel, RiskStats, SlaRecord, SlaStats, SlaStatus, Vendor, VendorStats, VendorStatus,
};

pub fn count_where<'a, T, I>(items: I, pred: impl Fn(&T) -> bool) -> usize
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().filter(|item| pred(*item)).count()
}

/// Integer sum, so currency never picks up float drift.
pub fn sum_by<'a, T, I>(items: I, value: impl Fn(&T) -> u64) -> u64
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(|item| value(item)).sum()
}

/// Mean of the values, or `None` for an empty input.
pub fn average_of(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

pub fn average_by<'a, T, I>(items: I, value: impl Fn(&T) -> f64) -> Option<f64>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    average_of(items.into_iter().map(|item| value(item)))
}

/// First `n` items by descending key. The sort is stable, so ties keep input
/// order, and the input itself is left untouched.
pub fn top_n_by<'a, T, K, I>(items: I, n: usize, key: impl Fn(&T) -> K) -> Vec<&'a T>
where
    T: 'a,
    K: Ord,
    I: IntoIterator<Item = &'a T>,
{
    let mut ranked: Vec<&'a T> = items.into_iter().collect();
    ranked.sort_by(|a, b| key(b).cmp(&key(a)));
    ranked.truncate(n);
    ranked
}

/// part / whole as an unrounded percentage; `None` when whole is zero.
/// Display rounding happens once, in `utils::to_fixed`.
pub fn percentage(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(part as f64 / whole as f64 * 100.0)
}

/// `Math.round`: halves go towards positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn vendor_stats(vendors: &[Vendor]) -> VendorStats {
    VendorStats {
        total: vendors.len(),
        active: count_where(vendors, |v: &Vendor| v.status == VendorStatus::Active),
        under_review: count_where(vendors, |v: &Vendor| v.status == VendorStatus::UnderReview),
        inactive: count_where(vendors, |v: &Vendor| v.status == VendorStatus::Inactive),
        total_contract_value: sum_by(vendors, |v: &Vendor| v.contract_value),
    }
}

pub fn procurement_stats(procurements: &[Procurement]) -> ProcurementStats {
    let with_status = |status: ProcurementStatus| {
        count_where(procurements, |p: &Procurement| p.status == status)
    };
    ProcurementStats {
        total: procurements.len(),
        approved: with_status(ProcurementStatus::Approved),
        in_progress: with_status(ProcurementStatus::InProgress),
        pending: with_status(ProcurementStatus::Pending),
        draft: with_status(ProcurementStatus::Draft),
        total_value: sum_by(procurements, |p: &Procurement| p.estimated_value),
    }
}

pub fn sla_stats(records: &[SlaRecord]) -> SlaStats {
    let with_status = |status: SlaStatus| count_where(records, |s: &SlaRecord| s.status == status);
    SlaStats {
        total: records.len(),
        exceeded: with_status(SlaStatus::Exceeded),
        on_track: with_status(SlaStatus::OnTrack),
        at_risk: with_status(SlaStatus::AtRisk),
        breached: with_status(SlaStatus::Breached),
        total_penalty: sum_by(records, |s: &SlaRecord| s.penalty),
        avg_compliance: average_sla_compliance(records),
    }
}

/// Mean of actual/target across records with a usable target.
pub fn average_sla_compliance<'a>(records: impl IntoIterator<Item = &'a SlaRecord>) -> Option<f64> {
    average_of(records.into_iter().filter_map(SlaRecord::performance))
}

pub fn billing_stats(bills: &[BillingRecord]) -> BillingStats {
    let net_where = |pred: fn(BillingStatus) -> bool| {
        sum_by(
            bills.iter().filter(|b| pred(b.status)),
            |b: &BillingRecord| b.net_payable,
        )
    };
    BillingStats {
        total_invoiced: sum_by(bills, |b: &BillingRecord| b.amount),
        total_payable: sum_by(bills, |b: &BillingRecord| b.net_payable),
        paid: net_where(|s| s == BillingStatus::Paid),
        pending: net_where(|s| matches!(s, BillingStatus::Pending | BillingStatus::Approved)),
        on_hold: net_where(|s| s == BillingStatus::OnHold),
        invoice_count: bills.len(),
    }
}

pub fn risk_stats(assessments: &[RiskAssessment], checks: &[ComplianceCheck]) -> RiskStats {
    let at_level = |level: RiskLevel| count_where(assessments, |r: &RiskAssessment| r.risk_level == level);
    let passed = count_where(checks, |c: &ComplianceCheck| c.status == ComplianceStatus::Passed);
    let compliance_rate = if checks.is_empty() {
        None
    } else {
        Some(round_half_up(passed as f64 / checks.len() as f64 * 100.0))
    };
    RiskStats {
        total_assessments: assessments.len(),
        low: at_level(RiskLevel::Low),
        medium: at_level(RiskLevel::Medium),
        high: at_level(RiskLevel::High),
        compliance_passed: passed,
        compliance_total: checks.len(),
        compliance_rate,
        avg_risk_score: average_by(assessments, |r: &RiskAssessment| r.score as f64)
            .map(round_half_up),
    }
}

/// Counts per level in Low, Medium, High order, with each level's share.
pub fn risk_distribution(levels: impl IntoIterator<Item = RiskLevel>) -> Vec<RiskBucket> {
    let mut counts: BTreeMap<RiskLevel, usize> = RiskLevel::ALL.iter().map(|l| (*l, 0)).collect();
    for level in levels {
        *counts.entry(level).or_default() += 1;
    }
    let total: usize = counts.values().sum();
    counts
        .into_iter()
        .map(|(level, count)| RiskBucket {
            level,
            count,
            percent: percentage(count as u64, total as u64),
        })
        .collect()
}

/// Vendors per category, categories in first-seen order.
pub fn category_distribution(vendors: &[Vendor]) -> Vec<CategoryCount> {
    let mut buckets: Vec<CategoryCount> = Vec::new();
    for vendor in vendors {
        match buckets.iter_mut().find(|b| b.category == vendor.category) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(CategoryCount {
                category: vendor.category.clone(),
                count: 1,
            }),
        }
    }
    buckets
}

/// Headline KPIs, recomputed from the base collections on every call.
pub fn dashboard_stats(store: &RecordStore) -> DashboardStats {
    let vendors = store.vendors();
    let pending_procurements = count_where(store.procurements(), |p: &Procurement| {
        p.status == ProcurementStatus::Pending
    });
    let pending_bills = count_where(store.billing_records(), |b: &BillingRecord| {
        b.status == BillingStatus::Pending
    });
    let checks = store.compliance_checks();
    let passed = count_where(checks, |c: &ComplianceCheck| c.status == ComplianceStatus::Passed);

    DashboardStats {
        total_vendors: vendors.len(),
        active_contracts: count_where(vendors, |v: &Vendor| v.status == VendorStatus::Active),
        pending_approvals: pending_procurements + pending_bills,
        sla_breach: count_where(store.sla_records(), |s: &SlaRecord| {
            s.status == SlaStatus::Breached
        }),
        total_spend: sum_by(vendors, |v: &Vendor| v.contract_value),
        risk_alerts: count_where(store.risk_assessments(), |r: &RiskAssessment| {
            r.risk_level == RiskLevel::High
        }),
        compliance_score: percentage(passed as u64, checks.len() as u64),
        avg_sla_compliance: average_by(vendors, |v: &Vendor| v.sla_compliance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{format_percent, PLACEHOLDER};

    #[derive(Debug)]
    struct Ranked {
        name: &'static str,
        value: u64,
    }

    #[test]
    fn top_n_keeps_tie_order() {
        let items = vec![
            Ranked { name: "A", value: 50 },
            Ranked { name: "B", value: 80 },
            Ranked { name: "C", value: 80 },
            Ranked { name: "D", value: 30 },
        ];
        let top: Vec<&str> = top_n_by(&items, 2, |r: &Ranked| r.value)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(top, vec!["B", "C"]);
        // Input order is untouched.
        let original: Vec<&str> = items.iter().map(|r| r.name).collect();
        assert_eq!(original, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn top_n_larger_than_input() {
        let items = vec![Ranked { name: "A", value: 1 }];
        assert_eq!(top_n_by(&items, 5, |r: &Ranked| r.value).len(), 1);
    }

    #[test]
    fn average_of_empty_is_none() {
        assert_eq!(average_of(Vec::<f64>::new()), None);
        assert_eq!(average_of(vec![1.0, 2.0, 4.5]), Some(2.5));
    }

    fn sla(id: &str, target: f64, actual: f64) -> SlaRecord {
        SlaRecord {
            id: id.to_string(),
            vendor_id: "V001".to_string(),
            vendor_name: "Tata Consultancy Services".to_string(),
            service_name: "Core Banking Support".to_string(),
            metric: "System Uptime".to_string(),
            target,
            actual,
            unit: None,
            status: SlaStatus::OnTrack,
            penalty: 0,
            period: "Oct 2024".to_string(),
        }
    }

    #[test]
    fn percentage_is_unrounded_and_labels_round_once() {
        assert_eq!(percentage(5, 0), None);
        assert_eq!(percentage(0, 4), Some(0.0));
        assert_eq!(percentage(5, 8), Some(62.5));
        assert_eq!(format_percent(percentage(1, 3)), "33.3%");
        assert_eq!(format_percent(percentage(2, 3)), "66.7%");
    }

    #[test]
    fn sla_average_rounds_the_exact_mean() {
        // 0.15 is stored just below the tie, so one decimal gives 0.1.
        let records = vec![sla("SLA1", 100.0, 0.15)];
        let average = average_sla_compliance(&records);
        assert_eq!(average, Some(0.15));
        assert_eq!(format_percent(average), "0.1%");
    }

    #[test]
    fn zero_targets_are_left_out_of_the_average() {
        let only_zero = vec![sla("SLA1", 0.0, 42.0)];
        assert_eq!(sla_stats(&only_zero).avg_compliance, None);
        assert_eq!(format_percent(sla_stats(&only_zero).avg_compliance), PLACEHOLDER);

        let mixed = vec![sla("SLA1", 0.0, 42.0), sla("SLA2", 50.0, 45.0)];
        assert_eq!(sla_stats(&mixed).avg_compliance, Some(90.0));
    }

    #[test]
    fn math_round_semantics() {
        assert_eq!(round_half_up(45.5), 46);
        assert_eq!(round_half_up(62.5), 63);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(10.49), 10);
    }

    #[test]
    fn sums_stay_integral() {
        let items = vec![
            Ranked { name: "A", value: 14_500_000 },
            Ranked { name: "B", value: 556_800 },
        ];
        assert_eq!(sum_by(&items, |r: &Ranked| r.value), 15_056_800);
        assert_eq!(count_where(&items, |r: &Ranked| r.value > 1_000_000), 1);
    }

    #[test]
    fn risk_distribution_includes_empty_levels() {
        let buckets = risk_distribution(vec![RiskLevel::High, RiskLevel::Low, RiskLevel::High]);
        let counts: Vec<(RiskLevel, usize)> = buckets.iter().map(|b| (b.level, b.count)).collect();
        assert_eq!(
            counts,
            vec![(RiskLevel::Low, 1), (RiskLevel::Medium, 0), (RiskLevel::High, 2)]
        );
        assert_eq!(format_percent(buckets[2].percent), "66.7%");
        assert!(risk_distribution(Vec::new()).iter().all(|b| b.percent.is_none()));
    }
}
