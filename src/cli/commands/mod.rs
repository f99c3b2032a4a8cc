mod enrich;
mod providers;

pub use enrich::{cmd_enrich_activities, cmd_enrich_destinations};
pub use providers::cmd_providers;
