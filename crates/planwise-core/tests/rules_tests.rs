//! End-to-end tests for the rule engine: records and lookups loaded from
//! JSON files, validated, and enriched the way the CLI drives it.

use std::io::Write;

use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

use planwise_core::{
    display::{CheckResult, Suggestions},
    models::{Catalog, PlanDefinition, PlanType},
    rules::{self, PricingConfig},
    PlanwiseError,
};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary file");
    file
}

const CATALOG_JSON: &str = r#"{
    "subjects": [
        {"id": 5, "display_name": "Mathematics"},
        {"id": 3, "display_name": "Science"}
    ],
    "terms": [
        {"id": 12, "display_name": "Term 1"},
        {"id": 13, "display_name": "Term 2"}
    ],
    "years": [
        {"id": 4, "display_name": "Year 10"}
    ]
}"#;

#[test]
fn test_full_flow_from_json_files() {
    let catalog_file = write_temp(CATALOG_JSON);
    let plan_file = write_temp(
        r#"{
            "name": "",
            "description": "Maths for terms 1 and 2",
            "price": 10,
            "plan_type": "multi_term",
            "subject_id": 5,
            "year_id": 4,
            "included_term_ids": "12,,13"
        }"#,
    );

    let catalog = Catalog::from_json_file(catalog_file.path()).unwrap();
    let plan = PlanDefinition::from_json_file(plan_file.path()).unwrap();
    assert_eq!(plan.plan_type, Some(PlanType::MultiTerm));

    // Name is blank, so validation flags it and the suggestion applies.
    let report = rules::validate(&plan);
    assert!(!report.is_valid());
    assert_eq!(report.issues_for("name").len(), 1);
    assert!(report.issues_for("included_term_ids").is_empty());

    assert!(rules::is_generated_name(&plan.name, &catalog));
    let suggested = rules::suggested_name(&plan, &catalog);
    assert_eq!(suggested, "Science 2 Terms - Year 10");

    let enriched = PlanDefinition {
        name: suggested,
        ..plan
    };
    assert!(rules::validate(&enriched).is_valid());

    let price = rules::suggested_price(
        &enriched,
        &PricingConfig::default(),
        enriched.included_term_count() as u32,
    );
    assert_eq!(price, Some(dec!(89.98)));
}

#[test]
fn test_missing_plan_file_reports_path() {
    let err = PlanDefinition::from_json_file("/nonexistent/plan.json").unwrap_err();
    match err {
        PlanwiseError::FileSystem { path, .. } => {
            assert!(path.to_string_lossy().contains("plan.json"));
        }
        other => panic!("Expected FileSystem error, got {other:?}"),
    }
}

#[test]
fn test_malformed_catalog_is_a_serialization_error() {
    let file = write_temp("{ not json");
    let err = Catalog::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, PlanwiseError::Serialization { .. }));
}

#[test]
fn test_check_result_display_lists_every_issue() {
    let plan = PlanDefinition {
        plan_type: Some(PlanType::SingleTerm),
        ..PlanDefinition::default()
    };
    let report = rules::validate(&plan);
    let output = format!("{}", CheckResult::new(&plan, &report));

    assert!(output.contains("(unnamed plan)"));
    assert!(output.contains("must be fixed"));
    assert!(output.contains("**name**"));
    assert!(output.contains("**description**"));
    assert!(output.contains("**price**"));
    assert!(output.contains("**subject_id**"));
    assert!(output.contains("**term_id**"));
}

#[test]
fn test_check_result_display_for_valid_plan() {
    let plan = PlanDefinition {
        name: "Mathematics Term 1".to_string(),
        description: "Maths, term 1".to_string(),
        price: dec!(49.99),
        plan_type: Some(PlanType::SingleTerm),
        subject_id: Some(5),
        term_id: Some(12),
        ..PlanDefinition::default()
    };
    let report = rules::validate(&plan);
    let output = format!("{}", CheckResult::new(&plan, &report));
    assert!(output.contains("All checks passed"));
}

#[test]
fn test_suggestions_display() {
    let output = format!(
        "{}",
        Suggestions::new()
            .with_name("Full Year Access - Year 10".to_string())
            .with_price(Some(dec!(224.96)))
    );
    assert!(output.contains("Full Year Access - Year 10"));
    assert!(output.contains("224.96"));

    let output = format!("{}", Suggestions::new().with_name(String::new()));
    assert!(output.contains("no suggestion for the current selections"));
    assert!(!output.contains("Price"));

    let output = format!("{}", Suggestions::new().with_price(None));
    assert!(output.contains("no suggestion without a plan type"));
    assert!(!output.contains("Name"));
}
