//! Enrich command handlers: read records from JSON, run the pipeline,
//! write the enriched records back out.

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::{ActivityRecommendation, DestinationRecommendation};
use crate::state::SharedState;

pub async fn cmd_enrich_destinations(
    state: &SharedState,
    input: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let records: Vec<DestinationRecommendation> = read_records(input).await?;

    if records.is_empty() {
        println!("No records to enrich in {}", input.display());
        return Ok(());
    }

    let total = records.len();
    let enriched = state.enrichment.enrich_destinations(records).await;
    let with_images = enriched.iter().filter(|r| r.image_count() > 0).count();

    write_records(&enriched, output).await?;

    if output.is_some() {
        println!("✓ Enriched {total} destination records");
        println!("  With images: {with_images}/{total}");
        println!(
            "  Cache entries: {}",
            state.image_cache.stats().total_entries
        );
    }

    Ok(())
}

pub async fn cmd_enrich_activities(
    state: &SharedState,
    input: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let activities: Vec<ActivityRecommendation> = read_records(input).await?;

    if activities.is_empty() {
        println!("No records to enrich in {}", input.display());
        return Ok(());
    }

    let total = activities.len();
    let enriched = state.enrichment.enrich_activities(activities).await;
    let with_cover = enriched.iter().filter(|a| a.cover_image.is_some()).count();

    write_records(&enriched, output).await?;

    if output.is_some() {
        println!("✓ Enriched {total} activity records");
        println!("  With cover image: {with_cover}/{total}");
        println!(
            "  Cache entries: {}",
            state.image_cache.stats().total_entries
        );
    }

    Ok(())
}

async fn read_records<T: serde::de::DeserializeOwned>(input: &Path) -> Result<Vec<T>> {
    let content = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of records", input.display()))
}

async fn write_records<T: serde::Serialize>(records: &[T], output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;

    match output {
        Some(path) => tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
