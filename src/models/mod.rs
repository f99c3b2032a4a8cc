pub mod recommendation;

pub use recommendation::{
    ActivityCategory, ActivityRecommendation, DestinationRecommendation, SettlementType,
};
