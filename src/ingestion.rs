//! Tabular loading and record extraction.
//!
//! Uploads are held fully in memory as string tables before processing
//! begins; there is no streaming. Cell-level problems are never fatal: a
//! missing, ragged or undecodable cell reads as a blank string, matching the
//! "blank for unknown" rule used throughout the pipeline.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::error::{MergeError, Result};
use crate::schema::{ActivityRecord, ColumnMapping, ContactColumns, MasterAccountEntry, SourceTag};

/// One uploaded table: an ordered header row plus trimmed string cells,
/// tagged with the file name it came from.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub origin: String,
}

impl Table {
    pub fn new(origin: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            origin: origin.into(),
        }
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_csv_reader(File::open(path)?, origin)
    }

    /// Reads comma-separated text. Rows shorter than the header are padded
    /// with blanks; cells that are not valid text are read as blank.
    pub fn from_csv_reader<R: Read>(reader: R, origin: impl Into<String>) -> Result<Self> {
        let origin = origin.into();
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers: Vec<String> = csv_reader
            .byte_headers()?
            .iter()
            .map(|header| String::from_utf8_lossy(header).trim().to_string())
            .collect();

        let mut rows = Vec::new();
        let mut malformed_cells = 0usize;
        for record in csv_reader.byte_records() {
            let record = record?;
            let row: Vec<String> = (0..headers.len())
                .map(|idx| match record.get(idx) {
                    Some(bytes) => match std::str::from_utf8(bytes) {
                        Ok(text) => text.trim().to_string(),
                        Err(_) => {
                            malformed_cells += 1;
                            String::new()
                        }
                    },
                    None => String::new(),
                })
                .collect();
            rows.push(row);
        }

        if malformed_cells > 0 {
            warn!(
                "{}: {} cell(s) could not be read as text, treated as blank",
                origin, malformed_cells
            );
        }
        debug!("{}: loaded {} row(s), {} column(s)", origin, rows.len(), headers.len());

        Ok(Self {
            headers,
            rows,
            origin,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell value by column name; blank when the column or cell is absent.
    pub fn cell(&self, row: usize, column: &str) -> &str {
        self.column_index(column)
            .and_then(|idx| self.rows.get(row).and_then(|cells| cells.get(idx)))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// The concatenated activity rows plus which optional contact columns were
/// present across the three uploads.
#[derive(Debug, Clone)]
pub struct ActivitySet {
    pub records: Vec<ActivityRecord>,
    pub contact: ContactColumns,
}

/// Tags and concatenates the three activity uploads in Known/Unknown/Intent
/// order. Required columns are validated against the union of the three
/// header rows: a column missing from one file simply reads blank there, but
/// a column missing from all three halts the run.
pub fn collect_activity(
    known: &Table,
    unknown: &Table,
    intent: &Table,
    mapping: &ColumnMapping,
) -> Result<ActivitySet> {
    let tables = [
        (known, SourceTag::Known),
        (unknown, SourceTag::Unknown),
        (intent, SourceTag::Intent),
    ];

    let union_has = |name: &str| tables.iter().any(|(table, _)| table.has_column(name));

    let required = [
        mapping.activity_account.as_str(),
        mapping.activity_details.as_str(),
    ];
    let missing: Vec<String> = required
        .into_iter()
        .filter(|&column| !union_has(column))
        .map(String::from)
        .collect();
    if !missing.is_empty() {
        return Err(MergeError::MissingActivityColumns { columns: missing });
    }

    let mut records = Vec::new();
    for (table, source) in tables {
        for row in 0..table.len() {
            records.push(ActivityRecord {
                account: table.cell(row, &mapping.activity_account).to_string(),
                details: table.cell(row, &mapping.activity_details).to_string(),
                first_name: table.cell(row, &mapping.activity_first).to_string(),
                last_name: table.cell(row, &mapping.activity_last).to_string(),
                title: table.cell(row, &mapping.activity_title).to_string(),
                source,
                origin_file: table.origin.clone(),
            });
        }
    }
    debug!("Collected {} activity row(s) across three uploads", records.len());

    Ok(ActivitySet {
        records,
        contact: ContactColumns {
            first: union_has(&mapping.activity_first),
            last: union_has(&mapping.activity_last),
            title: union_has(&mapping.activity_title),
        },
    })
}

/// Extracts master entries. The industry column is optional; without it
/// every entry carries blank industry text.
pub fn collect_master(table: &Table, mapping: &ColumnMapping) -> Result<Vec<MasterAccountEntry>> {
    let required = [mapping.master_account.as_str(), mapping.master_rep.as_str()];
    let missing: Vec<String> = required
        .into_iter()
        .filter(|&column| !table.has_column(column))
        .map(String::from)
        .collect();
    if !missing.is_empty() {
        return Err(MergeError::MissingMasterColumns { columns: missing });
    }

    let entries = (0..table.len())
        .map(|row| MasterAccountEntry {
            account: table.cell(row, &mapping.master_account).to_string(),
            rep: table.cell(row, &mapping.master_rep).to_string(),
            industry: table.cell(row, &mapping.master_industry).to_string(),
        })
        .collect();
    Ok(entries)
}
