// src/config/options.rs
use super::consts::{FORWARD_ENDPOINTS, SOURCE_URLS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestOptions {
    /// Forwarding endpoints, tried in order (outer loop).
    pub endpoints: Vec<String>,
    /// Target source URLs, tried in order per endpoint (inner loop).
    pub sources: Vec<String>,
    /// Fetch and reconcile, but skip writing the store.
    pub dry_run: bool,
    /// Print cached standings and exit without fetching.
    pub show_only: bool,
    /// Emit merged standings as JSON instead of the text report.
    pub json: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            endpoints: FORWARD_ENDPOINTS.iter().map(|s| s!(*s)).collect(),
            sources: SOURCE_URLS.iter().map(|s| s!(*s)).collect(),
            dry_run: false,
            show_only: false,
            json: false,
        }
    }
}
