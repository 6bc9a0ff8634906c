//! Delimited-text export of the two output tables.
//!
//! Comma-separated, UTF-8, header row included, no index column. Header
//! names echo the configured column mapping for the pass-through columns;
//! the derived columns keep their fixed names. Zero rows is not an error
//! and yields a headers-only file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::pipeline::MergeOutcome;
use crate::schema::{ColumnMapping, ContactColumns, MergedRow};

pub const REP_ACCOUNTS_FILE: &str = "rep_accounts.csv";
pub const UNASSIGNED_FILE: &str = "unassigned_web_activity.csv";

/// Writes one output table. Optional contact columns are emitted only when
/// they were present in the activity uploads.
pub fn write_rows<W: Write>(
    writer: W,
    rows: &[MergedRow],
    mapping: &ColumnMapping,
    contact: ContactColumns,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = vec![&mapping.master_rep, &mapping.activity_account];
    if contact.first {
        header.push(&mapping.activity_first);
    }
    if contact.last {
        header.push(&mapping.activity_last);
    }
    if contact.title {
        header.push(&mapping.activity_title);
    }
    header.push(&mapping.activity_details);
    header.extend(["Product Solution", "Subject Line", "Email Body", "Origin File"]);
    csv_writer.write_record(&header)?;

    for row in rows {
        let mut record: Vec<&str> = vec![&row.rep, &row.account];
        if contact.first {
            record.push(&row.first_name);
        }
        if contact.last {
            record.push(&row.last_name);
        }
        if contact.title {
            record.push(&row.title);
        }
        record.push(&row.details);
        record.push(row.product.label());
        record.push(&row.subject_line);
        record.push(&row.email_body);
        record.push(&row.origin_file);
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Renders one output table to a CSV string.
pub fn rows_to_csv_string(
    rows: &[MergedRow],
    mapping: &ColumnMapping,
    contact: ContactColumns,
) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, rows, mapping, contact)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes both outputs into `dir` under their default file names.
pub fn write_outcome_files(
    outcome: &MergeOutcome,
    mapping: &ColumnMapping,
    dir: impl AsRef<Path>,
) -> Result<()> {
    let dir = dir.as_ref();
    write_rows(
        File::create(dir.join(REP_ACCOUNTS_FILE))?,
        &outcome.rep_accounts,
        mapping,
        outcome.contact,
    )?;
    write_rows(
        File::create(dir.join(UNASSIGNED_FILE))?,
        &outcome.unassigned,
        mapping,
        outcome.contact,
    )?;
    Ok(())
}
