//! Per-row derivation and the split/filter/sort over the joined rows.

use std::collections::HashSet;

use log::debug;

use crate::classify::{classify_industry, classify_product};
use crate::normalize::normalize_account_key;
use crate::schema::{ContactColumns, JoinedRow, MergeOptions, MergeSummary, MergedRow};
use crate::templates::{build_email_body, subject_line};

/// The two output sets plus run metrics. `rep_accounts` is fragment-filtered
/// and sorted; `unassigned` is sorted only and never fragment-filtered.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub rep_accounts: Vec<MergedRow>,
    pub unassigned: Vec<MergedRow>,
    pub summary: MergeSummary,
    pub contact: ContactColumns,
}

/// Pure per-row transform: derives product, industry category, subject
/// line, email body and the assignment flag for one joined row.
pub fn derive_row(row: JoinedRow) -> MergedRow {
    let JoinedRow {
        activity,
        rep,
        master_industry,
    } = row;

    let product = classify_product(&activity.details);
    let industry = classify_industry(&master_industry);
    let subject = subject_line(product, &activity.title, industry, &activity.account);
    let email_body = build_email_body(
        &activity.first_name,
        &activity.title,
        &activity.account,
        product,
        &activity.details,
        industry,
    );
    let assigned = !rep.trim().is_empty();

    MergedRow {
        rep,
        account: activity.account,
        first_name: activity.first_name,
        last_name: activity.last_name,
        title: activity.title,
        details: activity.details,
        source: activity.source,
        origin_file: activity.origin_file,
        product,
        industry,
        subject_line: subject,
        email_body,
        assigned,
    }
}

/// Derives every joined row, partitions assigned/unassigned, applies the
/// rep-fragment filter to the assigned set only, and sorts both sets by
/// account name (stable, ascending).
pub fn process_rows(
    joined: Vec<JoinedRow>,
    contact: ContactColumns,
    options: &MergeOptions,
) -> MergeOutcome {
    let normalize = options.normalize_account_names;

    let rows: Vec<MergedRow> = joined.into_iter().map(derive_row).collect();

    let unique_accounts: HashSet<String> = rows
        .iter()
        .map(|row| normalize_account_key(&row.account, normalize))
        .collect();
    let total_rows = rows.len();

    let (assigned, mut unassigned): (Vec<MergedRow>, Vec<MergedRow>) =
        rows.into_iter().partition(|row| row.assigned);
    let assigned_rows = assigned.len();

    let fragments = options.fragment_list();
    let mut rep_accounts: Vec<MergedRow> = if fragments.is_empty() {
        assigned
    } else {
        assigned
            .into_iter()
            .filter(|row| {
                let rep = row.rep.to_lowercase();
                fragments.iter().any(|fragment| rep.contains(fragment))
            })
            .collect()
    };

    rep_accounts.sort_by(|a, b| a.account.cmp(&b.account));
    unassigned.sort_by(|a, b| a.account.cmp(&b.account));

    debug!(
        "{} assigned row(s) pre-filter, {} after rep-fragment filter, {} unassigned",
        assigned_rows,
        rep_accounts.len(),
        unassigned.len()
    );

    MergeOutcome {
        summary: MergeSummary {
            total_rows,
            unique_accounts: unique_accounts.len(),
            assigned_rows,
            unassigned_rows: unassigned.len(),
        },
        rep_accounts,
        unassigned,
        contact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{IndustryCategory, ProductLabel};
    use crate::schema::{ActivityRecord, SourceTag};

    fn joined(account: &str, details: &str, rep: &str, industry: &str) -> JoinedRow {
        JoinedRow {
            activity: ActivityRecord {
                account: account.to_string(),
                details: details.to_string(),
                first_name: String::new(),
                last_name: String::new(),
                title: String::new(),
                source: SourceTag::Unknown,
                origin_file: "unknown.csv".to_string(),
            },
            rep: rep.to_string(),
            master_industry: industry.to_string(),
        }
    }

    fn options(fragments: &str) -> MergeOptions {
        MergeOptions {
            rep_fragments: fragments.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_derive_row_fills_all_columns() {
        let row = derive_row(joined(
            "Acme Corp",
            "preventative maintenance dashboard",
            "Alice",
            "Industrial Machinery",
        ));
        assert_eq!(row.product, ProductLabel::EamApm);
        assert_eq!(row.industry, IndustryCategory::Discrete);
        assert!(row.assigned);
        assert!(!row.subject_line.is_empty());
        assert!(row.email_body.contains("Acme Corp"));
    }

    #[test]
    fn test_blank_rep_is_unassigned() {
        assert!(!derive_row(joined("Acme", "", "", "")).assigned);
        assert!(!derive_row(joined("Acme", "", "   ", "")).assigned);
        assert!(derive_row(joined("Acme", "", "Alice", "")).assigned);
    }

    #[test]
    fn test_partition_is_exhaustive() {
        let rows = vec![
            joined("B Corp", "", "Alice", ""),
            joined("A Corp", "", "", ""),
            joined("C Corp", "", "Bob", ""),
        ];
        let outcome = process_rows(rows, ContactColumns::default(), &options(""));
        assert_eq!(
            outcome.rep_accounts.len() + outcome.unassigned.len(),
            outcome.summary.total_rows
        );
        assert_eq!(outcome.summary.assigned_rows, 2);
        assert_eq!(outcome.summary.unassigned_rows, 1);
        assert_eq!(outcome.summary.unique_accounts, 3);
    }

    #[test]
    fn test_fragment_filter_only_narrows_assigned() {
        let rows = vec![
            joined("A Corp", "", "Alice Smith", ""),
            joined("B Corp", "", "Bob Jones", ""),
            joined("C Corp", "", "", ""),
        ];
        let outcome = process_rows(rows, ContactColumns::default(), &options("smith"));
        assert_eq!(outcome.rep_accounts.len(), 1);
        assert_eq!(outcome.rep_accounts[0].rep, "Alice Smith");
        // Pre-filter count is unaffected and unassigned is untouched.
        assert_eq!(outcome.summary.assigned_rows, 2);
        assert_eq!(outcome.unassigned.len(), 1);
    }

    #[test]
    fn test_fragment_filter_is_case_insensitive_any_match() {
        let rows = vec![
            joined("A Corp", "", "ALICE", ""),
            joined("B Corp", "", "Bob", ""),
        ];
        let outcome = process_rows(rows, ContactColumns::default(), &options("alice, carol"));
        assert_eq!(outcome.rep_accounts.len(), 1);
        assert_eq!(outcome.rep_accounts[0].rep, "ALICE");
    }

    #[test]
    fn test_outputs_sorted_by_account_name() {
        let rows = vec![
            joined("Zeta", "", "Alice", ""),
            joined("Alpha", "", "Alice", ""),
            joined("Mid", "", "", ""),
            joined("Aardvark", "", "", ""),
        ];
        let outcome = process_rows(rows, ContactColumns::default(), &options(""));
        let assigned: Vec<&str> = outcome
            .rep_accounts
            .iter()
            .map(|row| row.account.as_str())
            .collect();
        assert_eq!(assigned, vec!["Alpha", "Zeta"]);
        let unassigned: Vec<&str> = outcome
            .unassigned
            .iter()
            .map(|row| row.account.as_str())
            .collect();
        assert_eq!(unassigned, vec!["Aardvark", "Mid"]);
    }
}
