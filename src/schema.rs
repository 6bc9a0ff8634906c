use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::{IndustryCategory, ProductLabel};

/// Which upload an activity row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceTag {
    Known,
    Unknown,
    Intent,
}

impl SourceTag {
    pub fn label(&self) -> &'static str {
        match self {
            SourceTag::Known => "Known",
            SourceTag::Unknown => "Unknown",
            SourceTag::Intent => "Intent",
        }
    }
}

/// One row from a Known/Unknown/Intent upload. Contact fields are blank for
/// sources that carry no visitor identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub account: String,
    pub details: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub source: SourceTag,
    pub origin_file: String,
}

/// One row from the master account list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterAccountEntry {
    pub account: String,
    pub rep: String,
    pub industry: String,
}

/// An activity record paired with its master match (blank rep/industry when
/// no master key matched).
#[derive(Debug, Clone)]
pub struct JoinedRow {
    pub activity: ActivityRecord,
    pub rep: String,
    pub master_industry: String,
}

/// A fully derived output row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedRow {
    pub rep: String,
    pub account: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub details: String,
    pub source: SourceTag,
    pub origin_file: String,
    pub product: ProductLabel,
    pub industry: IndustryCategory,
    pub subject_line: String,
    pub email_body: String,
    pub assigned: bool,
}

/// Which optional contact columns appeared across the three activity
/// uploads. Drives output column selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactColumns {
    pub first: bool,
    pub last: bool,
    pub title: bool,
}

/// Column-name options for the uploaded tables. Defaults mirror the CRM
/// export headers the tool was built around.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ColumnMapping {
    #[schemars(description = "Account Name column in the three activity files")]
    pub activity_account: String,

    #[schemars(description = "Details column in the three activity files")]
    pub activity_details: String,

    #[schemars(description = "First Name column (known activity only)")]
    pub activity_first: String,

    #[schemars(description = "Last Name column (known activity only)")]
    pub activity_last: String,

    #[schemars(description = "Title column (known activity only)")]
    pub activity_title: String,

    #[schemars(description = "Account Name column in the master account list")]
    pub master_account: String,

    #[schemars(description = "Rep assignment column in the master account list")]
    pub master_rep: String,

    #[schemars(
        description = "Industry column in the master account list, used for email theming. Optional: a master file without it merges with blank industry."
    )]
    pub master_industry: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            activity_account: "Account Name".to_string(),
            activity_details: "Details".to_string(),
            activity_first: "First Name".to_string(),
            activity_last: "Last Name".to_string(),
            activity_title: "Title".to_string(),
            master_account: "Account Name".to_string(),
            master_rep: "Current Team - Primary".to_string(),
            master_industry: "Industry (SF)".to_string(),
        }
    }
}

/// Behavioral options for one merge run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MergeOptions {
    #[schemars(
        description = "Trim, collapse whitespace and casefold account names before joining"
    )]
    pub normalize_account_names: bool,

    #[schemars(
        description = "Comma-separated rep-name fragments. Filters the Rep Accounts output to reps containing any fragment (case-insensitive); blank keeps all assigned accounts."
    )]
    pub rep_fragments: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            normalize_account_names: true,
            rep_fragments: String::new(),
        }
    }
}

impl MergeOptions {
    /// Parsed fragment list: trimmed, lowercased, empties dropped.
    pub fn fragment_list(&self) -> Vec<String> {
        self.rep_fragments
            .split(',')
            .map(|fragment| fragment.trim().to_lowercase())
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }
}

/// The full externally-authored configuration for one merge run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MergeRequest {
    pub mapping: ColumnMapping,
    pub options: MergeOptions,
}

impl MergeRequest {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(MergeRequest)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::generate_json_schema())
    }
}

/// Run metrics over the joined rows, computed before the rep-fragment
/// filter narrows the assigned set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    pub total_rows: usize,
    pub unique_accounts: usize,
    pub assigned_rows: usize,
    pub unassigned_rows: usize,
}
