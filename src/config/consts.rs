// src/config/consts.rs

// Net config.
// Forwarding endpoints are tried in order (outer loop); a dead endpoint is
// abandoned before alternate sources are routed through it.
pub const FORWARD_ENDPOINTS: &[&str] = &[
    "https://api.allorigins.win/raw?url=",
    "https://corsproxy.io/?",
    "https://api.codetabs.com/v1/proxy?quest=",
];

// Target pages, in preference order (inner loop).
pub const SOURCE_URLS: &[&str] = &[
    "https://www.usatoday.com/sports/olympics/medal-count/",
    "https://sportsdata.usatoday.com/olympics/medals",
    "https://sportsdata.usatoday.com/olympics/medal-count",
    "https://www.usatoday.com/sports/olympics/",
];

pub const ACCEPT_HEADER: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Bodies shorter than this are proxy error pages, not standings.
pub const MIN_BODY_LEN: usize = 100;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const COUNTS_FILE: &str = "medal_counts.csv";
pub const LAST_INGESTED_FILE: &str = "last_ingested";
pub const LOG_FILE: &str = ".store/debug.log";
