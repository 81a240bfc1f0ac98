// src/store.rs
//
// Local cache under .store/: the merged standings as one line per country,
// plus the unix timestamp of the last successful ingestion. The rest of the
// crate treats this as an opaque get/set store.

use std::{fs, io, path::PathBuf, time::{Duration, SystemTime, UNIX_EPOCH}};

use crate::config::consts::{COUNTS_FILE, LAST_INGESTED_FILE, STORE_DIR};
use crate::data::{MedalCount, RecordSet};

fn counts_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(COUNTS_FILE)
}

fn last_ingested_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LAST_INGESTED_FILE)
}

/// Cached standings, or `None` when nothing has been ingested yet.
/// Malformed lines are dropped rather than failing the whole load.
pub fn load_counts() -> Option<RecordSet> {
    let text = fs::read_to_string(counts_path()).ok()?;
    Some(parse_counts(&text))
}

pub fn save_counts(set: &RecordSet) -> io::Result<()> {
    fs::create_dir_all(STORE_DIR)?;
    let mut buf = s!();
    for (country, mc) in set {
        buf.push_str(&format!("{},{},{},{}\n", country, mc.gold, mc.silver, mc.bronze));
    }
    fs::write(counts_path(), buf)
}

/// Lines are `country,gold,silver,bronze`. The numeric fields are read
/// right-to-left so a comma inside a fallback identity survives.
fn parse_counts(text: &str) -> RecordSet {
    let mut out = RecordSet::new();
    for line in text.lines() {
        let mut fields = line.rsplitn(4, ',');
        let (Some(b), Some(s), Some(g), Some(country)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else { continue };

        let (Ok(g), Ok(s), Ok(b)) = (
            g.trim().parse::<u32>(),
            s.trim().parse::<u32>(),
            b.trim().parse::<u32>(),
        ) else { continue };

        if country.is_empty() { continue; }
        out.insert(s!(country), MedalCount::new(g, s, b));
    }
    out
}

pub fn load_last_ingested() -> Option<SystemTime> {
    let text = fs::read_to_string(last_ingested_path()).ok()?;
    let secs: u64 = text.trim().parse().ok()?;
    Some(UNIX_EPOCH + Duration::from_secs(secs))
}

pub fn save_last_ingested(at: SystemTime) -> io::Result<()> {
    fs::create_dir_all(STORE_DIR)?;
    let secs = at.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    fs::write(last_ingested_path(), format!("{secs}\n"))
}
