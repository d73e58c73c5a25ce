use accredit_standards::check_items;
use accredit_standards::error::StandardError;
use accredit_workspace::Workspace;
use accredit_workspace::error::WorkspaceError;
use accredit_workspace::seed;

#[test]
fn workspace_lists_every_standard() {
    let workspace = Workspace::seeded().unwrap();
    let codes: Vec<String> = workspace.standards().into_iter().map(|s| s.code).collect();
    assert_eq!(codes, vec!["PS", "QI", "IC", "MM", "PFR"]);
}

#[test]
fn catalog_mismatch_surfaces_as_workspace_error() {
    let mut items = seed::self_assessment_items().unwrap();
    items[0].standard = "Patient Safty".to_string();

    let err: WorkspaceError = check_items(&items).unwrap_err().into();
    assert!(
        matches!(&err, WorkspaceError::Catalog(StandardError::UnknownStandard(name)) if name == "Patient Safty")
    );
    assert_eq!(err.to_string(), "catalog mismatch: unknown standard: Patient Safty");

    let mut items = seed::self_assessment_items().unwrap();
    items[1].max_weight = 20;
    let err: WorkspaceError = check_items(&items).unwrap_err().into();
    assert!(matches!(err, WorkspaceError::Catalog(StandardError::Validation(_))));
}
