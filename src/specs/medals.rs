// src/specs/medals.rs
//! Spec for medal-count standings pages.
//!
//! Two kinds of record source, harvested in order:
//! 1. Embedded script payloads carrying JSON objects with a
//!    country/nation/name field and optional medal fields.
//! 2. HTML tables, with column roles assigned from the header row and a
//!    positional fallback when the headers don't identify the medal columns.
//!
//! Later records for the same canonical identity overwrite earlier ones, so
//! table data wins over script fragments and the last table wins overall.

use serde_json::Value;

use crate::core::html::{script_texts, table_blocks, table_rows};
use crate::core::sanitize::leading_int;
use crate::countries::Canonicalizer;
use crate::data::{MedalCount, RecordSet};

/// A script payload is only worth scanning if it mentions one of these.
const SCRIPT_TOKENS: &[&str] = &["medal", "country", "gold", "nation"];

/// Country-cell literals that mark a header or rank row, not a data row.
const HEADER_LITERALS: &[&str] = &["Country", "Nation", "Rank", "Rnk"];

/// Extract every per-country medal record from a raw document.
/// Total: malformed substructure is skipped silently, and a document with no
/// usable records yields an empty set.
pub fn parse(doc: &str, countries: &Canonicalizer) -> RecordSet {
    let mut out = RecordSet::new();

    for text in script_texts(doc) {
        let lc = text.to_ascii_lowercase();
        if SCRIPT_TOKENS.iter().any(|t| lc.contains(t)) {
            harvest_script(&text, countries, &mut out);
        }
    }

    for table in table_blocks(doc) {
        harvest_table(&table, countries, &mut out);
    }

    out
}

/* ---------- script payloads ---------- */

/// Scan a script body for balanced `{...}` fragments and harvest any JSON
/// value shaped like a country record, however deeply nested. A fragment
/// that fails to parse is skipped; inner objects still get their own try.
fn harvest_script(text: &str, countries: &Canonicalizer, out: &mut RecordSet) {
    let bytes = text.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let Some(start) = text[i..].find('{').map(|p| p + i) else { break };
        match balanced_object_end(text, start) {
            Some(end) => {
                match serde_json::from_str::<Value>(&text[start..end]) {
                    Ok(v) => {
                        harvest_value(&v, countries, out);
                        i = end;
                    }
                    // Not valid JSON; inner braces may still be.
                    Err(_) => i = start + 1,
                }
            }
            None => break, // unbalanced to end of script
        }
    }
}

/// Byte index one past the `}` closing the object opened at `start`.
/// String-literal aware, so braces inside quoted values don't count.
fn balanced_object_end(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (off, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + off + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Record `value` if it exposes a country/nation/name field; otherwise
/// recurse into its children looking for records (arrays of country objects,
/// wrapper objects, etc.).
fn harvest_value(value: &Value, countries: &Canonicalizer, out: &mut RecordSet) {
    if let Some(label) = record_label(value) {
        let count = MedalCount::clamped(
            num_field(value, &["gold", "g"]),
            num_field(value, &["silver", "s"]),
            num_field(value, &["bronze", "b"]),
        );
        out.insert(countries.canonicalize(label), count);
        return;
    }
    match value {
        Value::Object(map) => {
            for v in map.values() {
                harvest_value(v, countries, out);
            }
        }
        Value::Array(items) => {
            for v in items {
                harvest_value(v, countries, out);
            }
        }
        _ => {}
    }
}

fn record_label(value: &Value) -> Option<&str> {
    for key in ["country", "nation", "name"] {
        if let Some(label) = value.get(key).and_then(Value::as_str) {
            let label = label.trim();
            if !label.is_empty() {
                return Some(label);
            }
        }
    }
    None
}

/// First present field among `keys`, read as an integer. Accepts plain
/// numbers and numeric strings; anything else counts as 0.
fn num_field(value: &Value, keys: &[&str]) -> i64 {
    for key in keys {
        match value.get(key) {
            Some(Value::Number(n)) => return n.as_i64().unwrap_or(0),
            Some(Value::String(s)) => return leading_int(s).unwrap_or(0),
            Some(_) | None => continue,
        }
    }
    0
}

/* ---------- tables ---------- */

struct ColumnRoles {
    country: Option<usize>,
    gold: Option<usize>,
    silver: Option<usize>,
    bronze: Option<usize>,
}

impl ColumnRoles {
    /// Assign roles by substring match on the header row (first row).
    /// First matching header wins per role; a header claims only one role.
    fn from_headers(headers: &[String]) -> Self {
        let mut roles = Self { country: None, gold: None, silver: None, bronze: None };

        for (i, h) in headers.iter().enumerate() {
            let h = h.to_ascii_lowercase();
            if h.contains("country") || h.contains("nation") || h.contains("name") {
                roles.country.get_or_insert(i);
            } else if h.contains("gold") || h == "g" {
                roles.gold.get_or_insert(i);
            } else if h.contains("silver") || h == "s" {
                roles.silver.get_or_insert(i);
            } else if h.contains("bronze") || h == "b" {
                roles.bronze.get_or_insert(i);
            }
        }

        // No identifiable country column: default to the second column when
        // there is one (standings tables lead with a rank column).
        if roles.country.is_none() && headers.len() > 1 {
            roles.country = Some(1);
        }
        roles
    }

    fn medals_identified(&self) -> bool {
        self.gold.is_some() && self.silver.is_some() && self.bronze.is_some()
    }
}

fn harvest_table(table_inner: &str, countries: &Canonicalizer, out: &mut RecordSet) {
    let rows = table_rows(table_inner);
    let Some((header_row, data_rows)) = rows.split_first() else { return };

    let roles = ColumnRoles::from_headers(header_row);
    let country_col = roles.country.unwrap_or(0);

    for row in data_rows {
        if row.len() < 3 {
            continue;
        }
        let label = row.get(country_col).map(|s| s.trim()).unwrap_or("");
        if skip_country_cell(label) {
            continue;
        }

        let cell = |ix: Option<usize>| -> i64 {
            ix.and_then(|i| row.get(i))
                .and_then(|c| leading_int(c))
                .unwrap_or(0)
        };
        let mut gold = cell(roles.gold);
        let mut silver = cell(roles.silver);
        let mut bronze = cell(roles.bronze);

        // Positional fallback: first three numeric cells outside the country
        // column are gold, silver, bronze in that order.
        if !roles.medals_identified() {
            let mut seen = 0usize;
            for (i, c) in row.iter().enumerate() {
                if i == country_col {
                    continue;
                }
                let Some(n) = leading_int(c) else { continue };
                match seen {
                    0 => gold = n,
                    1 => silver = n,
                    2 => bronze = n,
                    _ => break,
                }
                seen += 1;
            }
        }

        // All-zero rows are retained here; the merge layer decides their fate.
        out.insert(countries.canonicalize(label), MedalCount::clamped(gold, silver, bronze));
    }
}

/// Header-ish or rank-ish country cells mean the row carries no record.
fn skip_country_cell(label: &str) -> bool {
    if label.is_empty() {
        return true;
    }
    if HEADER_LITERALS.contains(&label) {
        return true;
    }
    let lc = label.to_ascii_lowercase();
    if lc.contains("rank") || lc.contains("country") {
        return true;
    }
    label.chars().all(|c| c.is_ascii_digit())
}
