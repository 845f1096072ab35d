//! Grouper - buckets records by canonical key
//!
//! Groups keep first-seen member order and are returned in the order their
//! key first appeared. Singleton keys are dropped.

use std::collections::HashMap;

use tracing::debug;

use crate::{Group, Record};

/// Group records by exact canonical key, keeping only groups of two or more
pub fn group(records: Vec<Record>) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.get(record.canonical()) {
            Some(&slot) => groups[slot].members.push(record),
            None => {
                index.insert(record.canonical().to_string(), groups.len());
                groups.push(Group {
                    canonical: record.canonical().to_string(),
                    members: vec![record],
                });
            }
        }
    }

    let distinct = groups.len();
    groups.retain(|g| g.len() >= 2);
    debug!(distinct, retained = groups.len(), "grouped records by canonical key");
    groups
}
