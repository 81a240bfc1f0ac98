// tests/parse_e2e.rs
//
// Document parser against a realistic page: navigation noise, an embedded
// script payload, a standings table with corrupted labels, entities, and
// markup inside cells.

use medal_scrape::countries::Canonicalizer;
use medal_scrape::data::MedalCount;
use medal_scrape::specs::medals;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Medal Count | Olympics</title>
  <script src="/bundle.js"></script>
  <script>
    window.__PRELOAD__ = {"widgets":{"medalTicker":[
      {"country":"Switzerland","gold":1,"silver":2,"bronze":0},
      {"country":"Netherlands","gold":"2","silver":0,"bronze":1}
    ]}};
  </script>
</head>
<body>
  <nav><ul><li><a href="/sports">Sports</a></li><li><a href="/olympics">Olympics</a></li></ul></nav>
  <table class="standings">
    <thead>
      <tr><th>Rnk</th><th>Country</th><th>G</th><th>S</th><th>B</th></tr>
    </thead>
    <tbody>
      <tr><td>1</td><td><a href="/italy">ItalyITAITA</a></td><td>3</td><td>1</td><td>0</td></tr>
      <tr><td>2</td><td><b>Great&nbsp;Britain</b></td><td>2</td><td>2</td><td>2</td></tr>
      <tr><td>3</td><td>Individual  Neutral AthletesAINAIN</td><td>1</td><td>0</td><td>1</td></tr>
      <tr><td>4</td><td>United StatesUSAUSA</td><td>1</td><td>0</td><td>0</td></tr>
      <tr><td>5</td><td>Slovenia</td><td>0</td><td>0</td><td>0</td></tr>
      <tr><td></td><td>Country</td><td>G</td><td>S</td><td>B</td></tr>
    </tbody>
  </table>
  <footer>© 2026 Example Sports Network</footer>
</body>
</html>"#;

#[test]
fn realistic_page_parses_to_canonical_records() {
    let set = medals::parse(PAGE, &Canonicalizer::olympics());

    // Script payload, reached through the wrapper object.
    assert_eq!(set.get("Switzerland"), Some(&MedalCount::new(1, 2, 0)));
    assert_eq!(set.get("Netherlands"), Some(&MedalCount::new(2, 0, 1)));

    // Table rows, labels canonicalized through the cascade.
    assert_eq!(set.get("Italy"), Some(&MedalCount::new(3, 1, 0)));
    assert_eq!(set.get("Great Britain"), Some(&MedalCount::new(2, 2, 2)));
    assert_eq!(set.get("AIN"), Some(&MedalCount::new(1, 0, 1)));
    assert_eq!(set.get("USA"), Some(&MedalCount::new(1, 0, 0)));

    // All-zero rows are retained at the parse layer.
    assert_eq!(set.get("Slovenia"), Some(&MedalCount::new(0, 0, 0)));

    // Repeated header row and raw variants never leak through.
    assert_eq!(set.len(), 7);
    assert!(!set.contains_key("ItalyITAITA"));
    assert!(!set.contains_key("Country"));
}

#[test]
fn single_letter_headers_map_medal_columns() {
    let doc = r#"
        <table>
          <tr><td>Rank</td><td>Nation</td><td>g</td><td>s</td><td>b</td></tr>
          <tr><td>1</td><td>Finland</td><td>4</td><td>0</td><td>1</td></tr>
        </table>
    "#;
    let set = medals::parse(doc, &Canonicalizer::olympics());
    assert_eq!(set.get("Finland"), Some(&MedalCount::new(4, 0, 1)));
}
