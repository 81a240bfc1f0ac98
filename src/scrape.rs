// src/scrape.rs
//! Retrieval cascade: endpoints × sources, strictly sequential, first
//! non-empty parse wins.
//!
//! Endpoint order takes priority over source order — a dead forwarding
//! endpoint is abandoned before alternate sources are routed through it.
//! Sequential on purpose: a single success is sufficient, retry is cheap,
//! and ordered attempts make source preference deterministic.

use std::fmt;

use crate::config::consts::MIN_BODY_LEN;
use crate::config::options::IngestOptions;
use crate::core::net::{self, FetchError};
use crate::countries::Canonicalizer;
use crate::data::RecordSet;
use crate::progress::Progress;
use crate::specs;

/// Every configured (endpoint, source) candidate was exhausted without a
/// usable parse. Not a fault: the caller decides what to surface.
#[derive(Debug)]
pub struct Unavailable {
    pub attempts: usize,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no usable medal data from any source ({} attempts)", self.attempts)
    }
}

impl std::error::Error for Unavailable {}

/// Fetch the first usable record set, walking the configured cascade.
pub fn collect_medals(
    opts: &IngestOptions,
    countries: &Canonicalizer,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RecordSet, Unavailable> {
    collect_with(net::http_get, opts, countries, progress)
}

/// Cascade core, generic over the fetch function so the state machine is
/// testable without sockets. Each candidate either terminates the cascade
/// with a non-empty parse or logs its failure and advances.
pub fn collect_with<F>(
    fetch: F,
    opts: &IngestOptions,
    countries: &Canonicalizer,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RecordSet, Unavailable>
where
    F: Fn(&str) -> Result<String, FetchError>,
{
    let mut attempts = 0usize;

    for endpoint in &opts.endpoints {
        for source in &opts.sources {
            attempts += 1;
            let url = join!(endpoint.as_str(), &urlencoding::encode(source));

            if let Some(p) = progress.as_deref_mut() {
                p.update_status(&format!("Fetching {source} via {endpoint}"));
            }

            let body = match fetch(&url) {
                Ok(body) => body,
                Err(e) => {
                    logf!("{source} via {endpoint}: {e}");
                    continue;
                }
            };

            if body.len() < MIN_BODY_LEN {
                logf!("{source} via {endpoint}: {}", FetchError::ImplausibleBody(body.len()));
                continue;
            }

            let set = specs::medals::parse(&body, countries);
            if set.is_empty() {
                logf!("{source} via {endpoint}: no records in {} bytes", body.len());
                continue;
            }

            logf!("{source} via {endpoint}: {} countries", set.len());
            return Ok(set);
        }
    }

    Err(Unavailable { attempts })
}
