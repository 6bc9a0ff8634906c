use std::io::Cursor;

use anyhow::Result;
use outreach_builder::*;

fn table(origin: &str, csv: &str) -> Table {
    Table::from_csv_reader(Cursor::new(csv.to_string()), origin).expect("test CSV should load")
}

fn standard_inputs() -> MergeInputs {
    MergeInputs {
        known: table(
            "known_activity.csv",
            "Account Name,Details,First Name,Last Name,Title\n\
             Acme Corp,preventative maintenance dashboard,John,Smith,Plant Manager\n\
             Vehement Capital,quality management research,Dana,Reyes,Director of Quality\n",
        ),
        unknown: table(
            "unknown_activity.csv",
            "Account Name,Details\n\
             Globex,visited pricing/measuring-machines\n\
             Acme Corp,cadworx tutorial\n",
        ),
        intent: table(
            "intent.csv",
            "Account Name,Details\n\
             Initech,digital transformation\n",
        ),
        master: table(
            "master_account_list.csv",
            "Account Name,Current Team - Primary,Industry (SF)\n\
             Acme Corp,Alice Smith,Industrial Machinery\n\
             ACME CORP,Bob Jones,Aerospace\n\
             Globex,Carol Diaz,Oil & Gas\n\
             Initech,,High-Tech\n",
        ),
    }
}

#[test]
fn test_end_to_end_scenario() -> Result<()> {
    let outcome = unify_engagement(&standard_inputs(), &MergeRequest::default())?;

    let acme = outcome
        .rep_accounts
        .iter()
        .find(|row| row.account == "Acme Corp" && row.title == "Plant Manager")
        .expect("the known Acme Corp row should be assigned");
    assert_eq!(acme.product, ProductLabel::EamApm);
    assert_eq!(classify_role(&acme.title), RoleCategory::Operations);
    assert_eq!(acme.industry, IndustryCategory::Discrete);
    assert_eq!(acme.rep, "Alice Smith");
    assert!(acme.assigned);
    assert!(outcome
        .unassigned
        .iter()
        .all(|row| !(row.account == "Acme Corp" && row.title == "Plant Manager")));

    assert!(acme.subject_line.contains("HxGN EAM/APM"));
    assert!(acme
        .email_body
        .contains("Hi John, as a Plant Manager at Acme Corp"));
    assert!(acme.email_body.contains("discrete manufacturing"));
    assert!(acme
        .email_body
        .contains("preventative maintenance dashboard"));
    Ok(())
}

#[test]
fn test_join_completeness_before_filtering() -> Result<()> {
    let outcome = unify_engagement(&standard_inputs(), &MergeRequest::default())?;
    // 5 activity rows in, 5 rows out across the two sets.
    assert_eq!(outcome.summary.total_rows, 5);
    assert_eq!(
        outcome.rep_accounts.len() + outcome.unassigned.len(),
        outcome.summary.total_rows
    );
    assert_eq!(outcome.summary.unique_accounts, 4);
    Ok(())
}

#[test]
fn test_first_master_occurrence_wins_for_all_matches() -> Result<()> {
    let outcome = unify_engagement(&standard_inputs(), &MergeRequest::default())?;
    // Both Acme rows (known + unknown) get the first master entry's rep,
    // and its industry text, despite the ACME CORP duplicate.
    let acme_reps: Vec<&str> = outcome
        .rep_accounts
        .iter()
        .chain(outcome.unassigned.iter())
        .filter(|row| row.account.eq_ignore_ascii_case("acme corp"))
        .map(|row| row.rep.as_str())
        .collect();
    assert_eq!(acme_reps.len(), 2);
    assert!(acme_reps.iter().all(|&rep| rep == "Alice Smith"));
    Ok(())
}

#[test]
fn test_blank_rep_means_unassigned() -> Result<()> {
    let outcome = unify_engagement(&standard_inputs(), &MergeRequest::default())?;
    // Initech is in the master list but with a blank rep.
    assert!(outcome
        .unassigned
        .iter()
        .any(|row| row.account == "Initech"));
    Ok(())
}

#[test]
fn test_rep_fragment_filter_correctness() -> Result<()> {
    let request = MergeRequest {
        options: MergeOptions {
            rep_fragments: "smith".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let unfiltered = unify_engagement(&standard_inputs(), &MergeRequest::default())?;
    let filtered = unify_engagement(&standard_inputs(), &request)?;

    assert!(!filtered.rep_accounts.is_empty());
    for row in &filtered.rep_accounts {
        assert!(row.rep.to_lowercase().contains("smith"));
    }
    let excluded: Vec<&MergedRow> = unfiltered
        .rep_accounts
        .iter()
        .filter(|row| !row.rep.to_lowercase().contains("smith"))
        .collect();
    assert!(!excluded.is_empty());
    assert_eq!(
        filtered.rep_accounts.len() + excluded.len(),
        unfiltered.rep_accounts.len()
    );
    // The filter never narrows the unassigned set or the summary counts.
    assert_eq!(filtered.unassigned.len(), unfiltered.unassigned.len());
    assert_eq!(filtered.summary.assigned_rows, unfiltered.summary.assigned_rows);
    Ok(())
}

#[test]
fn test_missing_master_column_halts_with_name() {
    let mut inputs = standard_inputs();
    inputs.master = table("master_account_list.csv", "Account Name,Industry (SF)\nAcme,Chem\n");
    let err = unify_engagement(&inputs, &MergeRequest::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Master file missing required column(s): Current Team - Primary"
    );
}

#[test]
fn test_missing_activity_columns_list_all_names() {
    let mut inputs = standard_inputs();
    inputs.known = table("known_activity.csv", "Company,Interest\nAcme,demo\n");
    inputs.unknown = table("unknown_activity.csv", "Company,Interest\n");
    inputs.intent = table("intent.csv", "Company,Interest\n");
    let err = unify_engagement(&inputs, &MergeRequest::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Activity file(s) missing required column(s): Account Name, Details"
    );
}

#[test]
fn test_runs_are_byte_identical() -> Result<()> {
    let request = MergeRequest::default();
    let first = unify_engagement(&standard_inputs(), &request)?;
    let second = unify_engagement(&standard_inputs(), &request)?;

    assert_eq!(
        rows_to_csv_string(&first.rep_accounts, &request.mapping, first.contact)?,
        rows_to_csv_string(&second.rep_accounts, &request.mapping, second.contact)?
    );
    assert_eq!(
        rows_to_csv_string(&first.unassigned, &request.mapping, first.contact)?,
        rows_to_csv_string(&second.unassigned, &request.mapping, second.contact)?
    );
    Ok(())
}

#[test]
fn test_written_files_have_headers_and_sorted_rows() -> Result<()> {
    let request = MergeRequest::default();
    let outcome = unify_engagement(&standard_inputs(), &request)?;

    let dir = tempfile::tempdir()?;
    write_outcome_files(&outcome, &request.mapping, dir.path())?;

    let rep_csv = std::fs::read_to_string(dir.path().join(REP_ACCOUNTS_FILE))?;
    let unassigned_csv = std::fs::read_to_string(dir.path().join(UNASSIGNED_FILE))?;

    let header = rep_csv.lines().next().unwrap();
    assert_eq!(
        header,
        "Current Team - Primary,Account Name,First Name,Last Name,Title,Details,Product Solution,Subject Line,Email Body,Origin File"
    );
    assert!(unassigned_csv.starts_with(header));

    let accounts: Vec<String> = outcome
        .rep_accounts
        .iter()
        .map(|row| row.account.clone())
        .collect();
    let mut sorted = accounts.clone();
    sorted.sort();
    assert_eq!(accounts, sorted);
    Ok(())
}

#[test]
fn test_custom_column_mapping_is_echoed() -> Result<()> {
    let mapping = ColumnMapping {
        activity_account: "Company".to_string(),
        activity_details: "Interest".to_string(),
        master_account: "Company".to_string(),
        master_rep: "Owner".to_string(),
        master_industry: "Vertical".to_string(),
        ..Default::default()
    };
    let request = MergeRequest {
        mapping,
        ..Default::default()
    };

    let inputs = MergeInputs {
        known: table(
            "known.csv",
            "Company,Interest,First Name,Last Name,Title\nAcme,eam rollout,Ann,Lee,Reliability Engineer\n",
        ),
        unknown: table("unknown.csv", "Company,Interest\n"),
        intent: table("intent.csv", "Company,Interest\n"),
        master: table("master.csv", "Company,Owner,Vertical\nAcme,Alice,Mining & Metals\n"),
    };

    let outcome = unify_engagement(&inputs, &request)?;
    assert_eq!(outcome.rep_accounts.len(), 1);
    assert_eq!(outcome.rep_accounts[0].industry, IndustryCategory::Mining);

    let csv = rows_to_csv_string(&outcome.rep_accounts, &request.mapping, outcome.contact)?;
    assert!(csv.starts_with("Owner,Company,First Name,Last Name,Title,Interest,"));
    Ok(())
}

#[test]
fn test_empty_inputs_yield_empty_outputs() -> Result<()> {
    let inputs = MergeInputs {
        known: table("known.csv", "Account Name,Details\n"),
        unknown: table("unknown.csv", "Account Name,Details\n"),
        intent: table("intent.csv", "Account Name,Details\n"),
        master: table("master.csv", "Account Name,Current Team - Primary\n"),
    };
    let request = MergeRequest::default();
    let outcome = unify_engagement(&inputs, &request)?;
    assert_eq!(outcome.summary.total_rows, 0);
    assert!(outcome.rep_accounts.is_empty());
    assert!(outcome.unassigned.is_empty());

    let csv = rows_to_csv_string(&outcome.rep_accounts, &request.mapping, outcome.contact)?;
    assert_eq!(csv.lines().count(), 1);
    Ok(())
}
