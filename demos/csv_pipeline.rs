use std::fs;

use outreach_builder::{
    unify_engagement, write_outcome_files, MergeInputs, MergeRequest, Table, REP_ACCOUNTS_FILE,
    UNASSIGNED_FILE,
};

fn main() {
    let dir = std::env::temp_dir().join("outreach_builder_demo");
    fs::create_dir_all(&dir).expect("demo directory should be creatable");

    let write = |name: &str, contents: &str| {
        let path = dir.join(name);
        fs::write(&path, contents).expect("demo input should be writable");
        path
    };

    let known = write(
        "known_activity.csv",
        "Account Name,Details,First Name,Last Name,Title\n\
         Acme Corp,eam rollout planning,John,Smith,Maintenance Supervisor\n",
    );
    let unknown = write(
        "unknown_activity.csv",
        "Account Name,Details\nGlobex,cadworx tutorial\n",
    );
    let intent = write("intent.csv", "Account Name,Details\nInitech,apm research\n");
    let master = write(
        "master_account_list.csv",
        "Account Name,Current Team - Primary,Industry (SF)\n\
         Acme Corp,Alice Smith,Aerospace & Defense\n\
         Globex,Bob Jones,Oil & Gas\n",
    );

    let inputs = MergeInputs {
        known: Table::from_csv_path(known).expect("known activity should load"),
        unknown: Table::from_csv_path(unknown).expect("unknown activity should load"),
        intent: Table::from_csv_path(intent).expect("intent should load"),
        master: Table::from_csv_path(master).expect("master list should load"),
    };

    let request = MergeRequest::default();
    let outcome = unify_engagement(&inputs, &request).expect("merge should succeed");
    write_outcome_files(&outcome, &request.mapping, &dir).expect("outputs should be writable");

    println!(
        "Wrote {} rep account row(s) and {} unassigned row(s):",
        outcome.rep_accounts.len(),
        outcome.unassigned.len()
    );
    println!("  {}", dir.join(REP_ACCOUNTS_FILE).display());
    println!("  {}", dir.join(UNASSIGNED_FILE).display());
}
