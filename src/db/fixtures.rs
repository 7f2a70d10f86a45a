use jsonschema::JSONSchema;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{DeskError, Result};

pub const VENDORS: &str = "vendors.json";
pub const PROCUREMENTS: &str = "procurements.json";
pub const SLA_RECORDS: &str = "sla_records.json";
pub const BILLING_RECORDS: &str = "billing_records.json";
pub const RISK_ASSESSMENTS: &str = "risk_assessments.json";
pub const COMPLIANCE_CHECKS: &str = "compliance_checks.json";
pub const ACTIVITIES: &str = "activities.json";
pub const ANALYTICS: &str = "analytics.json";

pub const FILES: [&str; 8] = [
    VENDORS,
    PROCUREMENTS,
    SLA_RECORDS,
    BILLING_RECORDS,
    RISK_ASSESSMENTS,
    COMPLIANCE_CHECKS,
    ACTIVITIES,
    ANALYTICS,
];

macro_rules! bundled {
    ($name:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/", $name))
    };
}

/// Raw fixture documents keyed by file name.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    files: BTreeMap<&'static str, String>,
}

impl FixtureSet {
    pub fn bundled() -> Self {
        let sources = [
            (VENDORS, bundled!("vendors.json")),
            (PROCUREMENTS, bundled!("procurements.json")),
            (SLA_RECORDS, bundled!("sla_records.json")),
            (BILLING_RECORDS, bundled!("billing_records.json")),
            (RISK_ASSESSMENTS, bundled!("risk_assessments.json")),
            (COMPLIANCE_CHECKS, bundled!("compliance_checks.json")),
            (ACTIVITIES, bundled!("activities.json")),
            (ANALYTICS, bundled!("analytics.json")),
        ];
        FixtureSet {
            files: sources
                .into_iter()
                .map(|(name, raw)| (name, raw.to_string()))
                .collect(),
        }
    }

    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !std::fs::metadata(dir)?.is_dir() {
            return Err(DeskError::fixture(VENDORS, format!("{} is not a directory", dir.display())));
        }
        let mut files = BTreeMap::new();
        for name in FILES {
            let path = dir.join(name);
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| DeskError::fixture(name, format!("{}: {}", path.display(), e)))?;
            files.insert(name, raw);
        }
        Ok(FixtureSet { files })
    }

    /// Replaces one document, e.g. to inject a dataset for a single collection.
    pub fn with_file(mut self, name: &'static str, raw: impl Into<String>) -> Self {
        self.files.insert(name, raw.into());
        self
    }

    /// Parses a document and checks its shape before it is typed.
    pub fn document(&self, name: &'static str) -> Result<Value> {
        let raw = self
            .files
            .get(name)
            .ok_or_else(|| DeskError::fixture(name, "missing"))?;
        let value: Value =
            serde_json::from_str(raw).map_err(|e| DeskError::fixture(name, e.to_string()))?;
        check_shape(name, &value)?;
        Ok(value)
    }
}

fn check_shape(name: &'static str, value: &Value) -> Result<()> {
    let schema = schema_for(name);
    let compiled = JSONSchema::compile(&schema)
        .map_err(|e| DeskError::fixture(name, format!("schema: {}", e)))?;
    let result = compiled.validate(value);
    if let Err(errors) = result {
        let errors: Vec<String> = errors
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect();
        return Err(DeskError::FixtureSchema { file: name, errors });
    }
    Ok(())
}

fn records(required: &[&str], properties: Value) -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "required": required,
            "properties": properties
        }
    })
}

fn schema_for(name: &str) -> Value {
    let date = json!({"type": "string", "pattern": "^\\d{4}-\\d{2}-\\d{2}$"});
    let amount = json!({"type": "integer", "minimum": 0});
    let text = json!({"type": "string"});
    let month_series = |fields: &[&str]| {
        let mut required = vec!["month"];
        required.extend_from_slice(fields);
        json!({"type": "array", "items": {"type": "object", "required": required}})
    };

    match name {
        VENDORS => records(
            &[
                "id", "name", "type", "category", "status", "contractValue", "slaCompliance",
                "riskScore", "onboardDate", "renewalDate",
            ],
            json!({
                "id": text, "name": text, "category": text,
                "contractValue": amount,
                "slaCompliance": {"type": "number"},
                "riskScore": {"type": "integer"},
                "certifications": {"type": "array", "items": text},
                "onboardDate": date, "renewalDate": date
            }),
        ),
        PROCUREMENTS => records(
            &["id", "title", "department", "type", "status", "stage", "estimatedValue", "vendorCount"],
            json!({
                "id": text, "title": text, "department": text,
                "estimatedValue": amount,
                "vendorCount": {"type": "integer", "minimum": 0},
                "submittedDate": {"anyOf": [date, {"type": "null"}]}
            }),
        ),
        SLA_RECORDS => records(
            &[
                "id", "vendorId", "vendorName", "serviceName", "metric", "target", "actual",
                "status", "penalty", "period",
            ],
            json!({
                "id": text, "vendorId": text, "vendorName": text, "serviceName": text,
                "target": {"type": "number"}, "actual": {"type": "number"},
                "unit": {"type": ["string", "null"]},
                "penalty": amount
            }),
        ),
        BILLING_RECORDS => records(
            &[
                "id", "invoiceNo", "vendorId", "vendorName", "amount", "gst", "tds", "netPayable",
                "status", "submittedDate", "dueDate",
            ],
            json!({
                "id": text, "invoiceNo": text, "vendorId": text, "vendorName": text,
                "amount": amount, "gst": amount, "tds": amount, "netPayable": amount,
                "holdReason": {"type": ["string", "null"]},
                "submittedDate": date, "dueDate": date
            }),
        ),
        RISK_ASSESSMENTS => records(
            &[
                "id", "vendorId", "vendorName", "category", "score", "riskLevel", "lastAssessed",
                "nextReview",
            ],
            json!({
                "id": text, "vendorId": text, "vendorName": text, "category": text,
                "score": {"type": "integer"},
                "factors": {"type": "array", "items": text},
                "lastAssessed": date, "nextReview": date
            }),
        ),
        COMPLIANCE_CHECKS => records(
            &["name", "status", "lastChecked"],
            json!({"name": text, "lastChecked": date}),
        ),
        ACTIVITIES => records(
            &["id", "title", "time", "type"],
            json!({"id": {"type": "integer"}, "title": text, "time": text}),
        ),
        ANALYTICS => json!({
            "type": "object",
            "required": [
                "monthlySpend", "vendorGrowth", "contractValueByType", "slaTrend", "riskTrend",
                "riskRadar"
            ],
            "properties": {
                "monthlySpend": month_series(&["IT", "NonIT", "NonBanking"]),
                "vendorGrowth": month_series(&["newVendors", "terminated", "active"]),
                "contractValueByType": {"type": "array", "items": {"type": "object", "required": ["type", "value", "count"]}},
                "slaTrend": month_series(&["IT", "NonIT", "NonBanking"]),
                "riskTrend": month_series(&["low", "medium", "high"]),
                "riskRadar": {"type": "array", "items": {"type": "object", "required": ["category", "score"]}}
            }
        }),
        _ => json!({}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_documents_pass_their_schemas() {
        let set = FixtureSet::bundled();
        for name in FILES {
            assert!(set.document(name).is_ok(), "{} failed shape check", name);
        }
    }

    #[test]
    fn shape_errors_are_reported_per_file() {
        let set = FixtureSet::bundled().with_file(VENDORS, r#"[{"id": "V1"}]"#);
        match set.document(VENDORS) {
            Err(DeskError::FixtureSchema { file, errors }) => {
                assert_eq!(file, VENDORS);
                assert!(!errors.is_empty());
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = std::env::temp_dir().join("vendordesk-no-such-fixtures");
        assert!(matches!(FixtureSet::from_dir(&dir), Err(DeskError::Io(_))));
    }

    #[test]
    fn malformed_json_is_a_fixture_error() {
        let set = FixtureSet::bundled().with_file(ACTIVITIES, "[{");
        assert!(matches!(
            set.document(ACTIVITIES),
            Err(DeskError::Fixture { file: ACTIVITIES, .. })
        ));
    }
}
