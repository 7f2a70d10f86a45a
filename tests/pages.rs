use std::path::PathBuf;

use vendordesk::commands::{billing, render_page, vendors};
use vendordesk::db::{fixtures, RecordStore};
use vendordesk::models::{AnalyticsPeriod, ProcurementStage, Settings};
use vendordesk::navigation::Page;
use vendordesk::services::state::{AppState, PageSession};
use vendordesk::DeskError;

fn state() -> AppState {
    AppState::load(Settings::default()).unwrap()
}

fn fixture_copy(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vendordesk-{}-{}", tag, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    for name in fixtures::FILES {
        std::fs::copy(source.join(name), dir.join(name)).unwrap();
    }
    dir
}

#[test]
fn billing_session_filters_on_hold() {
    let state = state();
    let session = PageSession::new(Page::Billing).with_status("On Hold");
    let value = render_page(&state, &session).unwrap();
    assert_eq!(value["filteredNetPayable"], 7_656_000);
    assert_eq!(value["bills"].as_array().unwrap().len(), 2);
    assert_eq!(value["bills"][0]["holdReason"], "SLA breach penalty under reconciliation");
    assert_eq!(value["stats"]["invoiceCount"], 8);
}

#[test]
fn vendor_rows_serialize_with_camel_case_fields() {
    let state = state();
    let session = PageSession::new(Page::Vendors).with_query("tata");
    let value = render_page(&state, &session).unwrap();
    let row = &value["vendors"][0];
    assert_eq!(row["id"], "V001");
    assert_eq!(row["type"], "IT");
    assert_eq!(row["contractValue"], 450_000_000);
    assert_eq!(row["contractLabel"], "₹45.0Cr");
    assert_eq!(row["riskLevel"], "Low");
    assert_eq!(value["noResults"], false);
}

#[test]
fn empty_result_is_a_state_not_an_error() {
    let state = state();
    let view = vendors::get_vendors(&state, &PageSession::new(Page::Vendors).with_query("zzz").criteria)
        .unwrap();
    assert!(view.vendors.is_empty());
    assert!(view.no_results);
    let bills = billing::get_billing(&state, &PageSession::new(Page::Billing).with_query("zzz").criteria)
        .unwrap();
    assert_eq!(bills.filtered_net_payable, 0);
    assert_eq!(bills.filtered_net_payable_label, "₹0");
}

#[test]
fn analytics_period_windows_series() {
    let state = state();
    let session = PageSession::new(Page::Analytics).with_period(AnalyticsPeriod::OneMonth);
    let value = render_page(&state, &session).unwrap();
    assert_eq!(value["period"], "1month");
    assert_eq!(value["monthlySpend"].as_array().unwrap().len(), 1);
    assert_eq!(value["monthlySpend"][0]["month"], "Dec");
    assert_eq!(value["topVendors"].as_array().unwrap().len(), 5);
}

#[test]
fn stage_transitions_only_move_forward() {
    let stage = ProcurementStage::CommitteeReview;
    assert_eq!(
        stage.advance_to(ProcurementStage::TechnicalEvaluation).unwrap(),
        ProcurementStage::TechnicalEvaluation
    );
    assert!(matches!(
        stage.advance_to(ProcurementStage::RequirementGathering),
        Err(DeskError::InvalidTransition { .. })
    ));
    assert_eq!(ProcurementStage::TERMINAL.next(), None);
}

#[test]
fn injected_dataset_drives_the_views() {
    let dir = fixture_copy("injected");
    let vendors = std::fs::read_to_string(dir.join(fixtures::VENDORS)).unwrap();
    let mut doc: serde_json::Value = serde_json::from_str(&vendors).unwrap();
    doc.as_array_mut().unwrap().truncate(3);
    std::fs::write(dir.join(fixtures::VENDORS), doc.to_string()).unwrap();

    let settings = Settings {
        fixtures_dir: Some(dir.clone()),
        ..Settings::default()
    };
    let state = AppState::load(settings).unwrap();
    let value = render_page(&state, &PageSession::new(Page::Dashboard)).unwrap();
    assert_eq!(value["stats"]["totalVendors"], 3);
    assert_eq!(value["totalSpendLabel"], "₹112.0Cr");
    // SLA and billing rows now point at vendors outside the set.
    assert!(!state.store.issues().is_empty());

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn malformed_directory_is_rejected() {
    let dir = fixture_copy("malformed");
    std::fs::write(dir.join(fixtures::PROCUREMENTS), r#"[{"id": "PR-1"}]"#).unwrap();
    assert!(matches!(
        RecordStore::from_dir(&dir),
        Err(DeskError::FixtureSchema { file: fixtures::PROCUREMENTS, .. })
    ));
    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn unknown_page_is_reported() {
    assert!(matches!("reports".parse::<Page>(), Err(DeskError::UnknownPage(_))));
}
