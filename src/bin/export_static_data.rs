//! CLI tool to export the full hierarchy as static JSON documents.
//!
//! Usage:
//!   cargo run --bin export-static-data -- --out public/data

use std::env;
use std::path::PathBuf;

use civic_atlas_lib::config::Config;
use civic_atlas_lib::db::DbPool;
use civic_atlas_lib::services::export;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut out_dir: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                i += 1;
                if i < args.len() {
                    out_dir = Some(PathBuf::from(&args[i]));
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Load config and connect
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let out_dir = out_dir.unwrap_or_else(|| config.export_dir.clone());

    let pool = match DbPool::new(&config).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error connecting to database: {}", e);
            std::process::exit(1);
        }
    };

    // Any read or write failure aborts the whole run; documents are never
    // left half-written.
    let summary = match export::run_export(pool.connection(), &out_dir).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Export failed: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!("════════════════════════════════════════════════════════════════");
    println!("  Static Data Export Complete");
    println!("════════════════════════════════════════════════════════════════");
    println!();
    println!("  Districts:    {}", summary.districts);
    println!("  Assemblies:   {}", summary.assemblies);
    println!("  Local bodies: {}", summary.local_bodies);
    println!("  Documents:    {}", summary.documents);
    println!();
    println!("  Output:       {}", out_dir.display());
    println!("════════════════════════════════════════════════════════════════");
    println!();
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage: export-static-data [--out <dir>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --out, -o   Output directory (default: ATLAS_EXPORT_DIR or public/data)");
    eprintln!("  --help, -h  Show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  export-static-data --out public/data");
    eprintln!();
}
