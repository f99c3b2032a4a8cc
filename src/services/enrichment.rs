//! Merges fetched images back into recommendation records.

use std::sync::Arc;

use tracing::{debug, info};

use crate::models::{ActivityRecommendation, DestinationRecommendation};
use crate::services::fetch::ImageFetchService;
use crate::services::query::{build_activity_query, build_destination_query};

/// Drives the enrichment pipeline: one query per record, one concurrent
/// batch fetch, results mapped back positionally. Output length and order
/// always match the input, and a failure enriching one record never
/// affects the others.
pub struct EnrichmentService {
    fetcher: Arc<ImageFetchService>,
    images_per_destination: usize,
    images_per_activity: usize,
}

impl EnrichmentService {
    #[must_use]
    pub const fn new(
        fetcher: Arc<ImageFetchService>,
        images_per_destination: usize,
        images_per_activity: usize,
    ) -> Self {
        Self {
            fetcher,
            images_per_destination,
            images_per_activity,
        }
    }

    /// Fills the four discrete image slots of each destination record in
    /// result order. Slots beyond what was found stay `None`; URLs are
    /// never recycled to pad the gap.
    pub async fn enrich_destinations(
        &self,
        mut records: Vec<DestinationRecommendation>,
    ) -> Vec<DestinationRecommendation> {
        if records.is_empty() {
            return records;
        }

        info!("Enriching {} destinations with images", records.len());

        let queries = records.iter().map(build_destination_query).collect();
        let all_images = self
            .fetcher
            .fetch_all(queries, self.images_per_destination)
            .await;

        for (record, images) in records.iter_mut().zip(all_images) {
            let mut slots = images.into_iter();
            record.image = slots.next();
            record.image2 = slots.next();
            record.image3 = slots.next();
            record.image4 = slots.next();

            debug!("Added {} images to '{}'", record.image_count(), record.title);
        }

        records
    }

    /// Sets each activity's image list to the full result and its cover
    /// image to the first entry, if any.
    pub async fn enrich_activities(
        &self,
        mut activities: Vec<ActivityRecommendation>,
    ) -> Vec<ActivityRecommendation> {
        if activities.is_empty() {
            return activities;
        }

        info!("Enriching {} activities with images", activities.len());

        let queries = activities.iter().map(build_activity_query).collect();
        let all_images = self
            .fetcher
            .fetch_all(queries, self.images_per_activity)
            .await;

        for (activity, images) in activities.iter_mut().zip(all_images) {
            activity.cover_image = images.first().cloned();
            activity.images = images;

            debug!(
                "Added {} images to '{}'",
                activity.images.len(),
                activity.title
            );
        }

        activities
    }
}
