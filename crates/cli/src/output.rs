//! Human-readable rendering of a walk report.

use caa_guard_application::{LevelReport, WalkOutcome, WalkReport};
use caa_guard_domain::{CaaRecordSet, LevelDecision};

pub fn render(report: &WalkReport, verbose: bool) {
    for level in &report.levels {
        match &level.decision {
            LevelDecision::Inconclusive => render_inconclusive(report, level, verbose),
            _ => render_terminal(report, level, verbose),
        }
    }

    if report.outcome == WalkOutcome::NoCaaFound {
        println!(
            "No CAA records restrict issuance for \"{}\"",
            report.request.domain
        );
    }
}

fn render_inconclusive(report: &WalkReport, level: &LevelReport, verbose: bool) {
    let discovery = report.request.is_discovery();

    if level.set.is_empty() {
        if discovery || verbose {
            println!("[{}] Empty response", level.domain);
        }
        return;
    }

    if !level.set.is_useful() {
        if discovery || verbose {
            println!("[{}] CAA set contains no relevant records", level.domain);
            if verbose {
                print_set(&level.set);
            }
        }
        return;
    }

    if discovery {
        println!("[{}] CAA set contains following records", level.domain);
        print_set(&level.set);
        return;
    }

    // Issuer supplied, but the bucket this request consults is empty at
    // this level; the walk moved on to the next ancestor.
    if verbose {
        if report.request.is_wildcard() {
            println!("[{}] No issuewild tag records in set", level.domain);
        } else {
            println!("[{}] No issue tag records in set", level.domain);
        }
        print_set(&level.set);
    }
}

fn render_terminal(report: &WalkReport, level: &LevelReport, verbose: bool) {
    let issuer = report.request.issuer.as_deref().unwrap_or_default();

    match &report.outcome {
        WalkOutcome::Authorized { domain, .. } => {
            if report.request.is_wildcard() {
                println!("[{domain}] CAA set permits wildcard issuance");
                for record in &level.set.issuewild {
                    println!("\t{record}");
                }
            } else {
                println!("[{domain}] Valid issue record found for \"{issuer}\" in set");
                if verbose {
                    print_set(&level.set);
                }
            }
        }
        WalkOutcome::Unauthorized { domain } => {
            eprintln!("[{domain}] Issuer \"{issuer}\" not present in CAA issue tag set");
            if verbose {
                print_set(&level.set);
            }
        }
        WalkOutcome::CriticalUnknown { domain } => {
            eprintln!("[{domain}] CAA set contains an unknown record with critical bit set");
            if verbose {
                print_set(&level.set);
            }
        }
        WalkOutcome::NoCaaFound | WalkOutcome::DiscoveryComplete => {}
    }
}

fn print_set(set: &CaaRecordSet) {
    for record in set.iter() {
        println!("\t{record}");
    }
}
