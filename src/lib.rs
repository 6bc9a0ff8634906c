//! # Outreach Builder
//!
//! A library for unifying sales-engagement activity (known web visitors,
//! unknown web visitors and third-party intent signals) with a master
//! account-to-rep mapping, then generating deterministic outreach drafts
//! per row.
//!
//! ## Core Concepts
//!
//! - **Activity rows**: per-visit records from three uploads, tagged with
//!   their source and origin file; contact fields are blank where a source
//!   carries no visitor identity
//! - **Master account list**: the authoritative account → rep (+ industry)
//!   mapping, deduplicated by normalized account key (first occurrence wins)
//! - **Left join on normalized keys**: every activity row survives exactly
//!   once, with blank rep/industry when no master key matches
//! - **Derived columns**: a product solution classified from free-text
//!   details, an industry bucket from master industry text, and a templated
//!   subject line + email body per row
//! - **Determinism**: template variants are chosen by hashing stable keys,
//!   never by randomness, so re-running on the same inputs reproduces
//!   byte-identical output
//!
//! ## Example
//!
//! ```rust,ignore
//! use outreach_builder::*;
//!
//! let inputs = MergeInputs {
//!     known: Table::from_csv_path("known_activity.csv")?,
//!     unknown: Table::from_csv_path("unknown_activity.csv")?,
//!     intent: Table::from_csv_path("intent.csv")?,
//!     master: Table::from_csv_path("master_account_list.csv")?,
//! };
//!
//! let outcome = unify_engagement(&inputs, &MergeRequest::default())?;
//! write_outcome_files(&outcome, &MergeRequest::default().mapping, ".")?;
//! ```

pub mod classify;
pub mod error;
pub mod export;
pub mod ingestion;
pub mod join;
pub mod normalize;
pub mod pipeline;
pub mod schema;
pub mod selector;
pub mod templates;

pub use classify::{
    classify_industry, classify_product, classify_role, IndustryCategory, ProductLabel,
    RoleCategory,
};
pub use error::{MergeError, Result};
pub use export::*;
pub use ingestion::{collect_activity, collect_master, ActivitySet, Table};
pub use join::left_join;
pub use normalize::{normalize_account_key, title_case};
pub use pipeline::{derive_row, process_rows, MergeOutcome};
pub use schema::*;
pub use selector::pick_index;
pub use templates::{build_email_body, subject_line};

use log::{debug, info};

/// The four uploads, loaded fully into memory before processing begins.
#[derive(Debug, Clone)]
pub struct MergeInputs {
    pub known: Table,
    pub unknown: Table,
    pub intent: Table,
    pub master: Table,
}

pub struct OutreachBuilder;

impl OutreachBuilder {
    /// Runs one merge: validate columns, join activity against the master
    /// list, derive per-row columns, split/filter/sort. Stateless; each
    /// invocation is independent.
    pub fn process(inputs: &MergeInputs, request: &MergeRequest) -> Result<MergeOutcome> {
        debug!(
            "Unifying activity from {}, {} and {} against {}",
            inputs.known.origin, inputs.unknown.origin, inputs.intent.origin, inputs.master.origin
        );

        let activity = collect_activity(
            &inputs.known,
            &inputs.unknown,
            &inputs.intent,
            &request.mapping,
        )?;
        let master = collect_master(&inputs.master, &request.mapping)?;

        let joined = left_join(
            activity.records,
            &master,
            request.options.normalize_account_names,
        );
        let outcome = pipeline::process_rows(joined, activity.contact, &request.options);

        info!(
            "Merged {} activity rows across {} unique accounts ({} assigned, {} unassigned)",
            outcome.summary.total_rows,
            outcome.summary.unique_accounts,
            outcome.summary.assigned_rows,
            outcome.summary.unassigned_rows
        );

        Ok(outcome)
    }
}

/// Convenience wrapper around [`OutreachBuilder::process`].
pub fn unify_engagement(inputs: &MergeInputs, request: &MergeRequest) -> Result<MergeOutcome> {
    OutreachBuilder::process(inputs, request)
}
