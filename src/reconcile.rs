// src/reconcile.rs
//! Merging freshly scraped standings into previously known standings.
//!
//! The one hard rule: a merge never lowers a country's recorded total.
//! Scrapes fail in partial ways (truncated tables, proxy error pages that
//! still parse) and none of those may silently erase progress. Suspect
//! incoming records are not errors; they are reported in the audit trail and
//! the caller decides what to surface.

use std::fmt;

use crate::data::{MedalCount, RecordSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// All-zero incoming record: unreliable/absent data, not a real reset.
    ZeroTotal,
    /// Incoming total is below the recorded total.
    Regression,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::ZeroTotal => write!(f, "all-zero incoming record"),
            RejectReason::Regression => write!(f, "incoming total below recorded total"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Accepted {
    pub id: String,
    pub previous: MedalCount,
    pub new: MedalCount,
}

#[derive(Clone, Debug)]
pub struct Rejected {
    pub id: String,
    pub previous: MedalCount,
    pub new: MedalCount,
    pub reason: RejectReason,
}

/// Outcome of one reconciliation: the merged standings plus the audit trail
/// of what was taken and what was refused.
#[derive(Clone, Debug)]
pub struct ReconciliationResult {
    pub merged: RecordSet,
    pub accepted: Vec<Accepted>,
    pub rejected: Vec<Rejected>,
}

/// Pure merge of `incoming` into `previous`.
///
/// Per incoming identity: reject on zero total, reject on total regression,
/// otherwise the incoming triple replaces the previous one wholesale (no
/// field-wise max — a country can trade a reported silver for a gold).
/// Identities present only in `previous` carry through unchanged.
pub fn reconcile(previous: &RecordSet, incoming: &RecordSet) -> ReconciliationResult {
    let mut merged = previous.clone();
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for (id, new) in incoming {
        let prev = previous.get(id).copied().unwrap_or_default();

        let reason = if new.total() == 0 {
            Some(RejectReason::ZeroTotal)
        } else if new.total() < prev.total() {
            Some(RejectReason::Regression)
        } else {
            None
        };

        match reason {
            Some(reason) => rejected.push(Rejected { id: id.clone(), previous: prev, new: *new, reason }),
            None => {
                merged.insert(id.clone(), *new);
                accepted.push(Accepted { id: id.clone(), previous: prev, new: *new });
            }
        }
    }

    ReconciliationResult { merged, accepted, rejected }
}
