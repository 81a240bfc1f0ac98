// src/specs/mod.rs
//! # Page-reading "specs"
//!
//! A spec encodes *where the ground truth lives in a document* and *how to
//! extract it robustly*. It parses text it is handed; it never decides when
//! to fetch, how to cache, or how to merge — those live with the retrieval
//! cascade (`scrape`), the store (`store`), and the merger (`reconcile`).
//!
//! Conventions:
//! - Case-insensitive tag detection via `core::html`; no full-document regexes.
//! - Tolerant extraction: a malformed fragment or row is skipped, never fatal.
//! - Testable offline against captured or hand-written document snippets.
pub mod medals;
