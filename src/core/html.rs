// src/core/html.rs
// Deliberately naive HTML scanning, tailored to the medal standings pages.
// Case-insensitive on ASCII tag names; no DOM, no attribute parsing.

use super::sanitize::normalize_entities;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the next complete tag block from `from` onwards, case-insensitive.
/// A block spans from the start of the opening tag to the end of the closing tag.
pub fn next_tag_block_ci(s: &str, open_tag: &str, close_tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open_lc = to_lower(open_tag);
    let close_lc = to_lower(close_tag);
    let start = lc.get(from..)?.find(&open_lc)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&close_lc)?;
    let end = open_end + end_rel + close_tag.len();
    Some((start, end))
}

/// Given a complete block like `<td ...>INNER</td>`, return INNER
/// (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return block[open_end + 1..close_start].to_string();
            }
        }
    }
    s!()
}

/// Remove all `<...>` tags, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Inner content of every `<table>` block in the document.
/// Nested tables stay inside their outer block's content.
pub fn table_blocks(doc: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        out.push(inner_after_open_tag(&doc[s..e]));
        pos = e;
    }
    out
}

/// Raw inner text of every `<script>` block. Not tag-stripped; script
/// payloads are code, not markup.
pub fn script_texts(doc: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<script", "</script>", pos) {
        out.push(inner_after_open_tag(&doc[s..e]));
        pos = e;
    }
    out
}

/// Cell texts of every `<tr>` in a table block, `<td>` and `<th>` alike,
/// in document order, entity-decoded and tag-stripped.
pub fn table_rows(table_inner: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table_inner, "<tr", "</tr>", pos) {
        let tr = &table_inner[tr_s..tr_e];
        pos = tr_e;

        let cells = row_cells(tr);
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    rows
}

fn row_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    loop {
        let td = next_tag_block_ci(tr, "<td", "</td>", pos);
        let th = next_tag_block_ci(tr, "<th", "</th>", pos);
        // Whichever cell kind starts first is the next cell.
        let (s, e) = match (td, th) {
            (Some(a), Some(b)) => if a.0 <= b.0 { a } else { b },
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => break,
        };
        let inner = inner_after_open_tag(&tr[s..e]);
        cells.push(strip_tags(normalize_entities(&inner)));
        pos = e;
    }
    cells
}
