//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `elemental_core` linkage.
//! - Exercise the discovery ledger against a database file without the UI.
//!
//! Usage:
//! - `elemental_cli` prints ping/version.
//! - `elemental_cli record <number> <label>` records a detection (`-1` = none).
//! - `elemental_cli score` prints the home screen score line.
//!
//! The database file comes from `ELEMENTAL_DB_PATH` (default: temp dir).

use elemental_core::db::{open_db, resolve_db_path};
use elemental_core::{DetectionRequest, DiscoveryService, SqlitePreferenceStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    match args.first().map(String::as_str) {
        None => {
            println!("elemental_core ping={}", elemental_core::ping());
            println!("elemental_core version={}", elemental_core::core_version());
            Ok(())
        }
        Some("record") => {
            let number = args
                .get(1)
                .ok_or("missing <number>")?
                .parse::<i32>()
                .map_err(|err| format!("invalid <number>: {err}"))?;
            let label = args.get(2).cloned().unwrap_or_default();
            record(number, label)
        }
        Some("score") => {
            let conn = open_db(resolve_db_path()).map_err(|err| err.to_string())?;
            let service = DiscoveryService::with_store(SqlitePreferenceStore::new(&conn));
            println!("{}", service.score_label().map_err(|err| err.to_string())?);
            Ok(())
        }
        Some(other) => Err(format!(
            "unknown command `{other}`; expected `record <number> <label>` or `score`"
        )),
    }
}

fn record(number: i32, label: String) -> Result<(), String> {
    let request = DetectionRequest {
        number,
        ..DetectionRequest::not_found(label)
    };
    let conn = open_db(resolve_db_path()).map_err(|err| err.to_string())?;
    let service = DiscoveryService::with_store(SqlitePreferenceStore::new(&conn));
    let report = service.detect(&request).map_err(|err| err.to_string())?;

    println!("{}", report.view.title);
    if let Some(details) = &report.view.details {
        println!(
            "{} {} {} {}",
            details.number, details.symbol, details.name, details.weight
        );
    }
    if !report.view.message.is_empty() {
        println!("{}", report.view.message);
    }
    println!("{}", service.score_label().map_err(|err| err.to_string())?);
    Ok(())
}
