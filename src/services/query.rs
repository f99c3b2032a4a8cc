//! Pure search-query derivation from recommendation records.

use crate::models::{
    ActivityCategory, ActivityRecommendation, DestinationRecommendation, SettlementType,
};

/// Builds the image search query for a destination recommendation:
/// name + location + a settlement hint, space-joined, empty fields
/// skipped. Examples: "Paris France travel", "Bali Indonesia beach".
#[must_use]
pub fn build_destination_query(rec: &DestinationRecommendation) -> String {
    let hint = match rec.settlement_type {
        SettlementType::Beach | SettlementType::Island => "beach",
        SettlementType::Resort => "resort",
        _ => "travel",
    };

    [rec.name.as_str(), rec.location.as_str(), hint]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the image search query for a trip activity. Place-specific
/// categories search for the attraction in its destination; general
/// activities search for the title alone.
#[must_use]
pub fn build_activity_query(activity: &ActivityRecommendation) -> String {
    match activity.category {
        ActivityCategory::Sightseeing | ActivityCategory::Culture | ActivityCategory::Nature => {
            format!("{} {}", activity.title, activity.destination)
                .trim()
                .to_string()
        }
        _ => activity.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(name: &str, location: &str, settlement_type: SettlementType) -> DestinationRecommendation {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "location": location,
            "title": format!("{name}, {location}"),
            "settlement_type": settlement_type,
        }))
        .unwrap()
    }

    fn activity(title: &str, dest: &str, category: ActivityCategory) -> ActivityRecommendation {
        ActivityRecommendation {
            title: title.to_string(),
            destination: dest.to_string(),
            category,
            description: String::new(),
            images: Vec::new(),
            cover_image: None,
        }
    }

    #[test]
    fn city_destination_gets_travel_hint() {
        let rec = destination("Paris", "France", SettlementType::City);
        assert_eq!(build_destination_query(&rec), "Paris France travel");
    }

    #[test]
    fn island_and_beach_destinations_get_beach_hint() {
        let island = destination("Bali", "Indonesia", SettlementType::Island);
        assert_eq!(build_destination_query(&island), "Bali Indonesia beach");

        let beach = destination("Tulum", "Mexico", SettlementType::Beach);
        assert_eq!(build_destination_query(&beach), "Tulum Mexico beach");
    }

    #[test]
    fn resort_destination_gets_resort_hint() {
        let rec = destination("Cancun", "Mexico", SettlementType::Resort);
        assert_eq!(build_destination_query(&rec), "Cancun Mexico resort");
    }

    #[test]
    fn empty_fields_are_skipped_not_joined() {
        let rec = destination("Santorini", "", SettlementType::Island);
        assert_eq!(build_destination_query(&rec), "Santorini beach");

        let blank = destination("", "", SettlementType::City);
        assert_eq!(build_destination_query(&blank), "travel");
    }

    #[test]
    fn place_specific_activities_include_the_destination() {
        let act = activity("Eiffel Tower", "Paris, France", ActivityCategory::Sightseeing);
        assert_eq!(build_activity_query(&act), "Eiffel Tower Paris, France");

        let act = activity("Local Market", "Barcelona", ActivityCategory::Culture);
        assert_eq!(build_activity_query(&act), "Local Market Barcelona");
    }

    #[test]
    fn general_activities_use_the_title_alone() {
        let act = activity("Seine River Cruise", "Paris, France", ActivityCategory::Activities);
        assert_eq!(build_activity_query(&act), "Seine River Cruise");

        let act = activity("Sushi Dinner", "Tokyo", ActivityCategory::Dining);
        assert_eq!(build_activity_query(&act), "Sushi Dinner");
    }

    #[test]
    fn missing_destination_degrades_to_title_only() {
        let act = activity("Eiffel Tower", "", ActivityCategory::Sightseeing);
        assert_eq!(build_activity_query(&act), "Eiffel Tower");
    }
}
