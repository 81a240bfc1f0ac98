// src/cli.rs
use std::env;
use std::error::Error;
use std::time::SystemTime;

use crate::config::options::IngestOptions;
use crate::data::RecordSet;
use crate::progress::Progress;
use crate::reconcile::ReconciliationResult;
use crate::{runner, store};

pub fn run() -> Result<(), Box<dyn Error>> {
    let opts = parse_cli()?;

    if opts.show_only {
        return show_cached(&opts);
    }

    let mut progress = ConsoleProgress;
    let summary = runner::run(&opts, Some(&mut progress))?;
    report(&opts, &summary.outcome)?;

    if opts.dry_run {
        println!("(dry run: store not updated)");
    }
    Ok(())
}

fn parse_cli() -> Result<IngestOptions, Box<dyn Error>> {
    let mut opts = IngestOptions::default();
    let mut sources_replaced = false;
    let mut endpoints_replaced = false;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--source" => {
                let v = args.next().ok_or("Missing value for --source")?;
                if !sources_replaced {
                    opts.sources.clear();
                    sources_replaced = true;
                }
                opts.sources.push(v);
            }
            "--proxy" => {
                let v = args.next().ok_or("Missing value for --proxy")?;
                if !endpoints_replaced {
                    opts.endpoints.clear();
                    endpoints_replaced = true;
                }
                opts.endpoints.push(v);
            }
            "--dry-run" => opts.dry_run = true,
            "--show" => opts.show_only = true,
            "--json" => opts.json = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(opts)
}

/* ---------- output ---------- */

struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn update_status(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

fn show_cached(opts: &IngestOptions) -> Result<(), Box<dyn Error>> {
    let Some(counts) = store::load_counts() else {
        println!("No cached standings yet. Run without --show to ingest.");
        return Ok(());
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        print_standings(&counts);
        if let Some(at) = store::load_last_ingested() {
            if let Ok(elapsed) = SystemTime::now().duration_since(at) {
                println!("\nLast ingested {} min ago", elapsed.as_secs() / 60);
            }
        }
    }
    Ok(())
}

fn report(opts: &IngestOptions, outcome: &ReconciliationResult) -> Result<(), Box<dyn Error>> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&outcome.merged)?);
        return Ok(());
    }

    print_standings(&outcome.merged);

    for a in &outcome.accepted {
        println!(
            "updated  {}: {}-{}-{} -> {}-{}-{}",
            a.id, a.previous.gold, a.previous.silver, a.previous.bronze,
            a.new.gold, a.new.silver, a.new.bronze
        );
    }
    for r in &outcome.rejected {
        println!(
            "rejected {}: {}-{}-{} ({})",
            r.id, r.new.gold, r.new.silver, r.new.bronze, r.reason
        );
    }
    Ok(())
}

fn print_standings(counts: &RecordSet) {
    // Total-descending, then alphabetical for ties.
    let mut rows: Vec<_> = counts.iter().collect();
    rows.sort_by(|a, b| b.1.total().cmp(&a.1.total()).then(a.0.cmp(b.0)));

    println!("{:<28} {:>4} {:>6} {:>6} {:>5}", "Country", "Gold", "Silver", "Bronze", "Total");
    for (country, mc) in rows {
        println!(
            "{:<28} {:>4} {:>6} {:>6} {:>5}",
            country, mc.gold, mc.silver, mc.bronze, mc.total()
        );
    }
}
