use std::io::Cursor;

use outreach_builder::{
    unify_engagement, MergeInputs, MergeOptions, MergeRequest, Table,
};

fn main() {
    let known = Table::from_csv_reader(
        Cursor::new(
            "Account Name,Details,First Name,Last Name,Title\n\
             Acme Corp,preventative maintenance dashboard,John,Smith,Plant Manager\n\
             Globex,quality audit workflow,Dana,Reyes,Director of Quality\n",
        ),
        "known_activity.csv",
    )
    .expect("known activity should load");

    let unknown = Table::from_csv_reader(
        Cursor::new(
            "Account Name,Details\n\
             Initech,visited pricing/measuring-machines\n",
        ),
        "unknown_activity.csv",
    )
    .expect("unknown activity should load");

    let intent = Table::from_csv_reader(
        Cursor::new(
            "Account Name,Details\n\
             Hooli,digital transformation\n",
        ),
        "intent.csv",
    )
    .expect("intent should load");

    let master = Table::from_csv_reader(
        Cursor::new(
            "Account Name,Current Team - Primary,Industry (SF)\n\
             Acme Corp,Alice Smith,Industrial Machinery\n\
             Globex,Bob Jones,Pharmaceuticals\n\
             Initech,Alice Smith,High-Tech\n",
        ),
        "master_account_list.csv",
    )
    .expect("master list should load");

    let request = MergeRequest {
        options: MergeOptions {
            rep_fragments: "smith".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    let inputs = MergeInputs {
        known,
        unknown,
        intent,
        master,
    };
    let outcome = unify_engagement(&inputs, &request).expect("merge should succeed");

    println!(
        "Merged {} activity rows across {} unique accounts.",
        outcome.summary.total_rows, outcome.summary.unique_accounts
    );
    println!(
        "Assigned (pre-filter): {} | After rep filter: {} | Unassigned: {}",
        outcome.summary.assigned_rows,
        outcome.rep_accounts.len(),
        outcome.summary.unassigned_rows
    );

    if let Some(row) = outcome.rep_accounts.first() {
        println!("\n--- {} ({}) ---", row.account, row.rep);
        println!("Product: {}", row.product);
        println!("Subject: {}", row.subject_line);
        println!("\n{}", row.email_body);
    }
}
