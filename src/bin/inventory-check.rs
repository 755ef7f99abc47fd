// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Inventory diagnostic: explain rental availability for one location.
//!
//! Connects to the catalog store (Firestore, or a JSON snapshot with
//! `--seed`), prints the known locations and, for every bike, how its
//! inventory references the requested location.

use anyhow::{bail, Context};
use bike_catalog::db::{CatalogDb, FirestoreDb, MemoryCatalog};
use bike_catalog::models::{Location, LocationId};
use bike_catalog::services::audit::EntryStatus;
use bike_catalog::services::{audit_inventory, CatalogService, InventoryAudit, LocationDirectory};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inventory-check")]
#[command(about = "Diagnose rental inventory keys for a location", long_about = None)]
#[command(version)]
struct Cli {
    /// Location id or short code (e.g. "NYC")
    #[arg(short, long)]
    location: String,

    /// Read the catalog from a JSON snapshot instead of Firestore
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    seed: Option<PathBuf>,

    /// GCP project for Firestore
    #[arg(long, env = "GCP_PROJECT_ID", default_value = "local-dev")]
    project: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let db = match &cli.seed {
        Some(path) => CatalogDb::memory(
            MemoryCatalog::load_from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
        ),
        None => CatalogDb::Firestore(
            FirestoreDb::new(&cli.project)
                .await
                .context("connecting to Firestore")?,
        ),
    };
    let catalog = CatalogService::new(db);

    let locations = catalog.locations().await.context("listing locations")?;
    let bikes = catalog.purchase_bikes(None).await.context("listing bikes")?;

    let directory = LocationDirectory::from_locations(&locations);

    let Some(location) = resolve_location(&locations, &directory, &cli.location) else {
        print_locations(&locations, &directory);
        bail!("no location with id or code {:?}", cli.location);
    };

    let audit = audit_inventory(&locations, &bikes, &location);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&audit)?),
        OutputFormat::Text => {
            print_locations(&locations, &directory);
            println!();
            print_audit(&audit);
        }
    }

    Ok(())
}

/// Try the argument as a canonical id first, then as a short code.
fn resolve_location(
    locations: &[Location],
    directory: &LocationDirectory,
    arg: &str,
) -> Option<Location> {
    let id = LocationId::new(arg);
    if let Some(location) = locations.iter().find(|l| l.id == id) {
        return Some(location.clone());
    }

    let id = directory.id_for_code(arg)?;
    locations.iter().find(|l| &l.id == id).cloned()
}

/// Codes are shown as the directory resolves them; `-` marks a location
/// that cannot be reached by code.
fn print_locations(locations: &[Location], directory: &LocationDirectory) {
    println!("{} location(s):", locations.len());
    for location in locations {
        println!(
            "  {:<28} {:<8} {} ({})",
            location.id,
            directory.code_for_id(&location.id).unwrap_or("-"),
            location.name,
            location.city
        );
    }
}

fn print_audit(audit: &InventoryAudit) {
    println!(
        "Inventory for {} [{}] (code {}):",
        audit.location.name,
        audit.location.id,
        audit.code.as_deref().unwrap_or("-")
    );

    for bike in &audit.bikes {
        let status = match &bike.status {
            EntryStatus::Ok { stock } => format!("ok ({} in stock)", stock),
            EntryStatus::Zero => "zero".to_string(),
            EntryStatus::KeyedByCode { stock } => {
                format!("keyed-by-code ({} in stock, not visible)", stock)
            }
            EntryStatus::NotStocked => "-".to_string(),
        };
        println!("  {:<28} {:<30} {}", bike.id, bike.name, status);
    }

    println!();
    println!("Available for rental: {}", audit.available.len());
    for id in &audit.available {
        println!("  {}", id);
    }

    if audit.keyed_by_code_count() > 0 {
        println!();
        println!(
            "warning: {} bike(s) reference this location by code {:?}; inventory must use id {:?}",
            audit.keyed_by_code_count(),
            audit.code.as_deref().unwrap_or_default(),
            audit.location.id.as_str()
        );
    }

    if audit.code.is_none() && !audit.location.code.trim().is_empty() {
        println!(
            "warning: code {:?} is shared with another location; this location is unreachable by code",
            audit.location.code
        );
    }

    for entry in &audit.dangling {
        println!(
            "warning: bike {} has {} unit(s) at unknown location {:?}",
            entry.bike_id,
            entry.stock,
            entry.location.as_str()
        );
    }
}
