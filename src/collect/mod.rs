//! The collector: fetch, parse, transform, and persist one resource at a
//! time, in catalog order.

pub mod cache;
pub mod client;

pub use cache::*;
pub use client::*;

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;

use crate::catalog::{Resource, SourceKind, CATALOG};
use crate::parser::read_rows;

/// Collect a single resource into the data directory.
///
/// CSV sources: the raw file is fetched only when absent or `force` is set,
/// but the derived JSON is always rewritten from the cached CSV, so catalog
/// changes take effect without a re-download. JSON sources are a no-op when
/// the derived file already exists and `force` is not set.
///
/// A non-success HTTP status skips the resource, leaving existing files
/// untouched. Malformed CSV or JSON aborts the run.
pub fn collect_resource(
    client: &SourceClient,
    dir: &DataDir,
    resource: &Resource,
    force: bool,
) -> Result<()> {
    let name = resource.file_name();
    let json_path = dir.json_path(name);

    match resource.kind() {
        SourceKind::Csv => {
            let csv_path = dir.csv_path(name);

            if !csv_path.exists() || force {
                let Some(body) = client.fetch_text(&resource.remote_url())? else {
                    return Ok(());
                };
                fs::write(&csv_path, body)
                    .with_context(|| format!("Failed to write raw CSV: {:?}", csv_path))?;
            }

            let rows = read_rows(&csv_path, resource)?;
            let rows = match resource.table_reduce {
                Some(reduce) => reduce.apply(rows)?,
                None => rows,
            };

            let json = serde_json::to_vec(&rows)
                .with_context(|| format!("Failed to serialize {}", name))?;
            fs::write(&json_path, json)
                .with_context(|| format!("Failed to write derived JSON: {:?}", json_path))?;
        }

        SourceKind::Json => {
            if json_path.exists() && !force {
                return Ok(());
            }

            let Some(body) = client.fetch_text(&resource.remote_url())? else {
                return Ok(());
            };
            let value: Value = serde_json::from_str(&body)
                .with_context(|| format!("Failed to parse JSON body for {}", name))?;
            fs::write(&json_path, serde_json::to_vec(&value)?)
                .with_context(|| format!("Failed to write derived JSON: {:?}", json_path))?;
        }
    }

    Ok(())
}

/// Collect every catalog resource in order. Returns the number of resources
/// processed.
pub fn collect_all(dir: &DataDir, force: bool) -> Result<usize> {
    let client = SourceClient::new()?;

    for resource in CATALOG {
        println!("Collecting {}", resource.file_name());
        collect_resource(&client, dir, resource, force)?;
        println!("{} collected", resource.file_name());
    }

    Ok(CATALOG.len())
}
