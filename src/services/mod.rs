pub mod enrichment;
pub use enrichment::EnrichmentService;

pub mod fetch;
pub use fetch::ImageFetchService;

pub mod placeholder;
pub mod query;
