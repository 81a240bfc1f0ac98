// src/runner.rs
//
// One ingestion cycle: fetch → load previous → reconcile → save.
// The caller is responsible for not running overlapping cycles; nothing
// here serializes access to the store.

use std::error::Error;
use std::time::SystemTime;

use crate::config::options::IngestOptions;
use crate::countries::Canonicalizer;
use crate::progress::Progress;
use crate::reconcile::{self, ReconciliationResult};
use crate::{scrape, store};

/// What one cycle did, for reporting.
pub struct RunSummary {
    /// Countries in the freshly fetched record set.
    pub fetched: usize,
    pub outcome: ReconciliationResult,
    /// False on --dry-run.
    pub saved: bool,
}

pub fn run(
    opts: &IngestOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let countries = Canonicalizer::olympics();

    let incoming = scrape::collect_medals(opts, &countries, progress.as_deref_mut())?;
    let previous = store::load_counts().unwrap_or_default();
    let outcome = reconcile::reconcile(&previous, &incoming);

    let mut saved = false;
    if !opts.dry_run {
        store::save_counts(&outcome.merged)?;
        store::save_last_ingested(SystemTime::now())?;
        saved = true;
    }

    logf!(
        "cycle done: {} fetched, {} accepted, {} rejected, saved={}",
        incoming.len(),
        outcome.accepted.len(),
        outcome.rejected.len(),
        saved
    );
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "{} countries fetched; {} accepted, {} rejected",
            incoming.len(),
            outcome.accepted.len(),
            outcome.rejected.len()
        ));
    }

    Ok(RunSummary { fetched: incoming.len(), outcome, saved })
}
