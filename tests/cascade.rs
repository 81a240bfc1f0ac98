// tests/cascade.rs
//
// Retrieval cascade behavior, with the fetch function stubbed out so the
// state machine runs without sockets.

use std::cell::RefCell;

use medal_scrape::config::options::IngestOptions;
use medal_scrape::core::net::FetchError;
use medal_scrape::countries::Canonicalizer;
use medal_scrape::data::MedalCount;
use medal_scrape::scrape::collect_with;

const GOOD_PAGE: &str = r#"
    <html><body><p>Olympic medal standings, updated hourly. Filler text to
    keep this body over the plausibility threshold.</p>
    <table>
      <tr><th>Rank</th><th>Country</th><th>Gold</th><th>Silver</th><th>Bronze</th></tr>
      <tr><td>1</td><td>Norway</td><td>5</td><td>3</td><td>2</td></tr>
    </table></body></html>
"#;

// Long enough to pass the plausibility check, but carries no records.
const EMPTY_PAGE: &str = r#"
    <html><body><p>Sorry, the medal standings are temporarily unavailable.
    Please check back later for updated results and coverage.</p></body></html>
"#;

fn opts(endpoints: &[&str], sources: &[&str]) -> IngestOptions {
    IngestOptions {
        endpoints: endpoints.iter().map(|s| s.to_string()).collect(),
        sources: sources.iter().map(|s| s.to_string()).collect(),
        ..IngestOptions::default()
    }
}

#[test]
fn exhausted_cascade_reports_unavailable() {
    let opts = opts(&["p1/?", "p2/?"], &["https://a.example/", "https://b.example/"]);
    let cz = Canonicalizer::olympics();

    let calls = RefCell::new(0usize);
    let fetch = |url: &str| -> Result<String, FetchError> {
        *calls.borrow_mut() += 1;
        if url.starts_with("p1/") {
            Err(FetchError::BadStatus(503))
        } else {
            Ok(s_short()) // implausibly short body
        }
    };

    let err = collect_with(fetch, &opts, &cz, None).unwrap_err();
    assert_eq!(err.attempts, 4);
    assert_eq!(*calls.borrow(), 4);
}

fn s_short() -> String {
    "error".to_string()
}

#[test]
fn first_usable_candidate_terminates_the_cascade() {
    let opts = opts(&["p/?"], &["https://a.example/", "https://b.example/", "https://c.example/"]);
    let cz = Canonicalizer::olympics();

    let calls = RefCell::new(Vec::<String>::new());
    let fetch = |url: &str| -> Result<String, FetchError> {
        calls.borrow_mut().push(url.to_string());
        if url.contains("b.example") {
            Ok(GOOD_PAGE.to_string())
        } else {
            Err(FetchError::BadStatus(404))
        }
    };

    let set = collect_with(fetch, &opts, &cz, None).unwrap();
    assert_eq!(set.get("Norway"), Some(&MedalCount::new(5, 3, 2)));
    // c.example must never be attempted.
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn empty_parse_advances_to_next_candidate() {
    let opts = opts(&["p/?"], &["https://a.example/", "https://b.example/"]);
    let cz = Canonicalizer::olympics();

    let fetch = |url: &str| -> Result<String, FetchError> {
        if url.contains("a.example") {
            Ok(EMPTY_PAGE.to_string())
        } else {
            Ok(GOOD_PAGE.to_string())
        }
    };

    let set = collect_with(fetch, &opts, &cz, None).unwrap();
    assert!(set.contains_key("Norway"));
}

#[test]
fn endpoint_order_outranks_source_order() {
    let opts = opts(&["p1/?", "p2/?"], &["https://a.example/x", "https://b.example/y"]);
    let cz = Canonicalizer::olympics();

    let calls = RefCell::new(Vec::<String>::new());
    let fetch = |url: &str| -> Result<String, FetchError> {
        calls.borrow_mut().push(url.to_string());
        Err(FetchError::BadStatus(500))
    };

    let _ = collect_with(fetch, &opts, &cz, None);
    let calls = calls.borrow();

    // All sources through p1 before any source through p2; targets URL-encoded.
    assert_eq!(
        *calls,
        vec![
            "p1/?https%3A%2F%2Fa.example%2Fx",
            "p1/?https%3A%2F%2Fb.example%2Fy",
            "p2/?https%3A%2F%2Fa.example%2Fx",
            "p2/?https%3A%2F%2Fb.example%2Fy",
        ]
    );
}
