// src/data.rs
//
// Value types shared across the pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One country's medal line. Immutable value type; fields are never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalCount {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalCount {
    pub fn new(gold: u32, silver: u32, bronze: u32) -> Self {
        Self { gold, silver, bronze }
    }

    /// Build from possibly-negative parsed values; anything below zero clamps to 0.
    pub fn clamped(gold: i64, silver: i64, bronze: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, u32::MAX as i64) as u32;
        Self { gold: clamp(gold), silver: clamp(silver), bronze: clamp(bronze) }
    }

    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

/// Standings keyed by canonical country identity.
/// BTreeMap keeps reports and audit trails in a stable order.
pub type RecordSet = BTreeMap<String, MedalCount>;
