use std::collections::HashMap;

use log::debug;

use crate::normalize::normalize_account_key;
use crate::schema::{ActivityRecord, JoinedRow, MasterAccountEntry};

/// Left-joins activity records against the deduplicated master list on the
/// normalized account key. Every activity record appears exactly once in
/// the output, in input order; unmatched records keep blank rep and
/// industry.
pub fn left_join(
    activity: Vec<ActivityRecord>,
    master: &[MasterAccountEntry],
    normalize: bool,
) -> Vec<JoinedRow> {
    let master_by_key = dedup_master(master, normalize);

    activity
        .into_iter()
        .map(|record| {
            let key = normalize_account_key(&record.account, normalize);
            let (rep, master_industry) = match master_by_key.get(&key) {
                Some(entry) => (entry.rep.clone(), entry.industry.clone()),
                None => (String::new(), String::new()),
            };
            JoinedRow {
                activity: record,
                rep,
                master_industry,
            }
        })
        .collect()
}

/// First occurrence wins; later master rows sharing a key are silently
/// dropped.
fn dedup_master<'a>(
    master: &'a [MasterAccountEntry],
    normalize: bool,
) -> HashMap<String, &'a MasterAccountEntry> {
    let mut by_key: HashMap<String, &MasterAccountEntry> = HashMap::with_capacity(master.len());
    let mut dropped = 0usize;
    for entry in master {
        let key = normalize_account_key(&entry.account, normalize);
        if by_key.contains_key(&key) {
            dropped += 1;
            continue;
        }
        by_key.insert(key, entry);
    }
    if dropped > 0 {
        debug!("Dropped {} duplicate master row(s) by account key", dropped);
    }
    by_key
}
