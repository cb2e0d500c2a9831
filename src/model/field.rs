use serde::Serialize;

use super::page::Page;

/// The declared type of a form field.
///
/// The kind determines the field's default value, how it is edited, and how
/// it serializes into the submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free-text string.
    Text,
    /// Numeric string: digits with at most one decimal point.
    Numeric,
    /// ISO `YYYY-MM-DD` string, written only by the date picker.
    Date,
    /// Yes/no boolean.
    Flag,
    /// Small integer rating, 1–5; `0` means unset.
    Rating,
    /// Non-negative integer counter.
    Count,
    /// Set membership over a fixed option list.
    MultiChoice,
}

impl FieldKind {
    /// Returns the declared default value for this kind.
    ///
    /// Unset fields are never null/absent on the wire: text-like kinds
    /// default to an empty string, flags to `false`, and integers to `0`.
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Numeric => FieldValue::Numeric(String::new()),
            FieldKind::Date => FieldValue::Date(String::new()),
            FieldKind::Flag => FieldValue::Flag(false),
            FieldKind::Rating => FieldValue::Rating(0),
            FieldKind::Count => FieldValue::Count(0),
            FieldKind::MultiChoice => FieldValue::Choices(Vec::new()),
        }
    }
}

/// A single field value.
///
/// Serializes untagged, so the submission payload carries plain JSON
/// strings, booleans, numbers, and arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Numeric(String),
    Date(String),
    Flag(bool),
    Rating(u8),
    Count(u32),
    Choices(Vec<String>),
}

impl FieldValue {
    /// Returns the kind this value belongs to.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Numeric(_) => FieldKind::Numeric,
            FieldValue::Date(_) => FieldKind::Date,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Rating(_) => FieldKind::Rating,
            FieldValue::Count(_) => FieldKind::Count,
            FieldValue::Choices(_) => FieldKind::MultiChoice,
        }
    }
}

/// Stable key for every field in the daily recap.
///
/// Declaration order is wire order: the submission payload emits fields in
/// the order they appear here, which mirrors the intake form page by page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    // Route & Logistics
    Date,
    Country,
    Latitude,
    Longitude,
    DistanceCovered,
    AverageSpeed,
    CyclingHours,
    BreakdownsEncountered,
    NumberOfBreakdowns,
    ChargingStops,
    ElevationGains,
    RoadQuality,
    // Community Engagement
    TotalPeopleInteracted,
    CommunityEvents,
    WomenReached,
    YouthReached,
    MarginalizedPersons,
    CommunityFeedbackScore,
    // Knowledge Sharing
    ClimateMessages,
    PublicMessagingReach,
    AudienceQuestions,
    EducationalMedia,
    Interviews,
    PhotosVideos,
    // Environment & Emissions
    VisibleEmissions,
    PlasticHotspots,
    NatureSites,
    ClimateInnovations,
    // Equipment Performance
    EbikesInUse,
    PowerStationEb70,
    PowerStationAc180p,
    PowerStationPv350,
    PowerStationP20075w,
    ChargingMode,
    AverageBatteryUse,
    EquipmentBreakdowns,
    EquipmentBreakdownCount,
    // Team & Safety
    RidersToday,
    TeamHealthScore,
    HydrationCheck,
    InjuriesAccidents,
    InjuryDescription,
    TeamMood,
    // Social Media
    InstagramPosts,
    TiktokVideos,
    LinkedinMentions,
    NewsletterMentions,
    MediaContacts,
}

static ALL_FIELDS: &[FieldKey] = &[
    FieldKey::Date,
    FieldKey::Country,
    FieldKey::Latitude,
    FieldKey::Longitude,
    FieldKey::DistanceCovered,
    FieldKey::AverageSpeed,
    FieldKey::CyclingHours,
    FieldKey::BreakdownsEncountered,
    FieldKey::NumberOfBreakdowns,
    FieldKey::ChargingStops,
    FieldKey::ElevationGains,
    FieldKey::RoadQuality,
    FieldKey::TotalPeopleInteracted,
    FieldKey::CommunityEvents,
    FieldKey::WomenReached,
    FieldKey::YouthReached,
    FieldKey::MarginalizedPersons,
    FieldKey::CommunityFeedbackScore,
    FieldKey::ClimateMessages,
    FieldKey::PublicMessagingReach,
    FieldKey::AudienceQuestions,
    FieldKey::EducationalMedia,
    FieldKey::Interviews,
    FieldKey::PhotosVideos,
    FieldKey::VisibleEmissions,
    FieldKey::PlasticHotspots,
    FieldKey::NatureSites,
    FieldKey::ClimateInnovations,
    FieldKey::EbikesInUse,
    FieldKey::PowerStationEb70,
    FieldKey::PowerStationAc180p,
    FieldKey::PowerStationPv350,
    FieldKey::PowerStationP20075w,
    FieldKey::ChargingMode,
    FieldKey::AverageBatteryUse,
    FieldKey::EquipmentBreakdowns,
    FieldKey::EquipmentBreakdownCount,
    FieldKey::RidersToday,
    FieldKey::TeamHealthScore,
    FieldKey::HydrationCheck,
    FieldKey::InjuriesAccidents,
    FieldKey::InjuryDescription,
    FieldKey::TeamMood,
    FieldKey::InstagramPosts,
    FieldKey::TiktokVideos,
    FieldKey::LinkedinMentions,
    FieldKey::NewsletterMentions,
    FieldKey::MediaContacts,
];

impl FieldKey {
    /// Returns every field in wire order.
    pub fn all() -> &'static [FieldKey] {
        ALL_FIELDS
    }

    /// Returns the snake_case key used in the submission payload.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKey::Date => "date",
            FieldKey::Country => "country",
            FieldKey::Latitude => "latitude",
            FieldKey::Longitude => "longitude",
            FieldKey::DistanceCovered => "distance_covered",
            FieldKey::AverageSpeed => "average_speed",
            FieldKey::CyclingHours => "cycling_hours",
            FieldKey::BreakdownsEncountered => "breakdowns_encountered",
            FieldKey::NumberOfBreakdowns => "number_of_breakdowns",
            FieldKey::ChargingStops => "charging_stops",
            FieldKey::ElevationGains => "elevation_gains",
            FieldKey::RoadQuality => "road_quality",
            FieldKey::TotalPeopleInteracted => "total_people_interacted",
            FieldKey::CommunityEvents => "community_events",
            FieldKey::WomenReached => "women_reached",
            FieldKey::YouthReached => "youth_reached",
            FieldKey::MarginalizedPersons => "marginalized_persons",
            FieldKey::CommunityFeedbackScore => "community_feedback_score",
            FieldKey::ClimateMessages => "climate_messages",
            FieldKey::PublicMessagingReach => "public_messaging_reach",
            FieldKey::AudienceQuestions => "audience_questions",
            FieldKey::EducationalMedia => "educational_media",
            FieldKey::Interviews => "interviews",
            FieldKey::PhotosVideos => "photos_videos",
            FieldKey::VisibleEmissions => "visible_emissions",
            FieldKey::PlasticHotspots => "plastic_hotspots",
            FieldKey::NatureSites => "nature_sites",
            FieldKey::ClimateInnovations => "climate_innovations",
            FieldKey::EbikesInUse => "ebikes_in_use",
            FieldKey::PowerStationEb70 => "power_station_eb70",
            FieldKey::PowerStationAc180p => "power_station_ac180p",
            FieldKey::PowerStationPv350 => "power_station_pv350",
            FieldKey::PowerStationP20075w => "power_station_p200_75w",
            FieldKey::ChargingMode => "charging_mode",
            FieldKey::AverageBatteryUse => "average_battery_use",
            FieldKey::EquipmentBreakdowns => "equipment_breakdowns",
            FieldKey::EquipmentBreakdownCount => "equipment_breakdown_count",
            FieldKey::RidersToday => "riders_today",
            FieldKey::TeamHealthScore => "team_health_score",
            FieldKey::HydrationCheck => "hydration_check",
            FieldKey::InjuriesAccidents => "injuries_accidents",
            FieldKey::InjuryDescription => "injury_description",
            FieldKey::TeamMood => "team_mood",
            FieldKey::InstagramPosts => "instagram_posts",
            FieldKey::TiktokVideos => "tiktok_videos",
            FieldKey::LinkedinMentions => "linkedin_mentions",
            FieldKey::NewsletterMentions => "newsletter_mentions",
            FieldKey::MediaContacts => "media_contacts",
        }
    }

    /// Returns the label displayed next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Date => "Date (YYYY-MM-DD)",
            FieldKey::Country => "Country",
            FieldKey::Latitude => "Latitude",
            FieldKey::Longitude => "Longitude",
            FieldKey::DistanceCovered => "Distance Covered (km)",
            FieldKey::AverageSpeed => "Average Speed (km/h)",
            FieldKey::CyclingHours => "Cycling Hours Today",
            FieldKey::BreakdownsEncountered => "Breakdowns Encountered",
            FieldKey::NumberOfBreakdowns => "How many breakdowns?",
            FieldKey::ChargingStops => "Charging Stops Made",
            FieldKey::ElevationGains => "Number of Elevation Gains (hilly areas)",
            FieldKey::RoadQuality => "Road Quality (1 = Poor, 5 = Excellent)",
            FieldKey::TotalPeopleInteracted => "Total People Interacted With Today",
            FieldKey::CommunityEvents => "Number of Community Events/Dialogs Held",
            FieldKey::WomenReached => "Estimated No. of Women Reached",
            FieldKey::YouthReached => "Estimated No. of Youth Reached (under 25)",
            FieldKey::MarginalizedPersons => "Estimated No. of Marginalized Persons",
            FieldKey::CommunityFeedbackScore => {
                "Community Feedback Score (1 = Low interest, 5 = High engagement)"
            }
            FieldKey::ClimateMessages => "Number of Climate Messages Shared (posters, flyers, talks)",
            FieldKey::PublicMessagingReach => "No. of People Reached via Public Messaging",
            FieldKey::AudienceQuestions => "No. of Questions/Comments from the Audience",
            FieldKey::EducationalMedia => "Educational Media Shared (videos, QR codes, etc.)",
            FieldKey::Interviews => "Interviews Conducted Today (audio/video)",
            FieldKey::PhotosVideos => "Photos/Videos Captured for Documentation",
            FieldKey::VisibleEmissions => "Visible Emissions Points (open fires, exhaust, industry)",
            FieldKey::PlasticHotspots => "Plastic/Littering Hotspots Identified",
            FieldKey::NatureSites => "Trees/Nature Conservation Sites Visited",
            FieldKey::ClimateInnovations => "Climate Innovations Witnessed (local solutions)",
            FieldKey::EbikesInUse => "No. of Ebikes in Use Today",
            FieldKey::PowerStationEb70 => "Power Station EB70",
            FieldKey::PowerStationAc180p => "Power Station AC180P",
            FieldKey::PowerStationPv350 => "Power Station PV350",
            FieldKey::PowerStationP20075w => "Power Station P200+75W",
            FieldKey::ChargingMode => "Charging Mode Used",
            FieldKey::AverageBatteryUse => "Average Battery Use Per Bike (in %)",
            FieldKey::EquipmentBreakdowns => "Breakdowns Reported (bike or equipment)",
            FieldKey::EquipmentBreakdownCount => "How many?",
            FieldKey::RidersToday => "No. of Riders Today",
            FieldKey::TeamHealthScore => "Team Health Score (1 = Bad, 5 = Excellent)",
            FieldKey::HydrationCheck => "Hydration Check (Yes/No per rider)",
            FieldKey::InjuriesAccidents => "Any Injuries or Accidents?",
            FieldKey::InjuryDescription => "Describe briefly",
            FieldKey::TeamMood => "Team Reflection Mood",
            FieldKey::InstagramPosts => "Instagram Posts Shared",
            FieldKey::TiktokVideos => "TikTok Videos Uploaded",
            FieldKey::LinkedinMentions => "LinkedIn Mentions",
            FieldKey::NewsletterMentions => "Newsletter Mentions Today",
            FieldKey::MediaContacts => "Press/Media Contacts Made Today",
        }
    }

    /// Returns the declared kind of this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldKey::Date => FieldKind::Date,
            FieldKey::Country | FieldKey::HydrationCheck | FieldKey::InjuryDescription => {
                FieldKind::Text
            }
            FieldKey::BreakdownsEncountered
            | FieldKey::EquipmentBreakdowns
            | FieldKey::InjuriesAccidents
            | FieldKey::NewsletterMentions => FieldKind::Flag,
            FieldKey::RoadQuality
            | FieldKey::CommunityFeedbackScore
            | FieldKey::TeamHealthScore
            | FieldKey::TeamMood => FieldKind::Rating,
            FieldKey::NumberOfBreakdowns
            | FieldKey::PowerStationEb70
            | FieldKey::PowerStationAc180p
            | FieldKey::PowerStationPv350
            | FieldKey::PowerStationP20075w
            | FieldKey::EquipmentBreakdownCount => FieldKind::Count,
            FieldKey::ChargingMode => FieldKind::MultiChoice,
            _ => FieldKind::Numeric,
        }
    }

    /// Returns the page this field belongs to.
    pub fn page(&self) -> Page {
        match self {
            FieldKey::Date
            | FieldKey::Country
            | FieldKey::Latitude
            | FieldKey::Longitude
            | FieldKey::DistanceCovered
            | FieldKey::AverageSpeed
            | FieldKey::CyclingHours
            | FieldKey::BreakdownsEncountered
            | FieldKey::NumberOfBreakdowns
            | FieldKey::ChargingStops
            | FieldKey::ElevationGains
            | FieldKey::RoadQuality => Page::RouteLogistics,
            FieldKey::TotalPeopleInteracted
            | FieldKey::CommunityEvents
            | FieldKey::WomenReached
            | FieldKey::YouthReached
            | FieldKey::MarginalizedPersons
            | FieldKey::CommunityFeedbackScore => Page::CommunityEngagement,
            FieldKey::ClimateMessages
            | FieldKey::PublicMessagingReach
            | FieldKey::AudienceQuestions
            | FieldKey::EducationalMedia
            | FieldKey::Interviews
            | FieldKey::PhotosVideos => Page::KnowledgeSharing,
            FieldKey::VisibleEmissions
            | FieldKey::PlasticHotspots
            | FieldKey::NatureSites
            | FieldKey::ClimateInnovations => Page::EnvironmentEmissions,
            FieldKey::EbikesInUse
            | FieldKey::PowerStationEb70
            | FieldKey::PowerStationAc180p
            | FieldKey::PowerStationPv350
            | FieldKey::PowerStationP20075w
            | FieldKey::ChargingMode
            | FieldKey::AverageBatteryUse
            | FieldKey::EquipmentBreakdowns
            | FieldKey::EquipmentBreakdownCount => Page::EquipmentPerformance,
            FieldKey::RidersToday
            | FieldKey::TeamHealthScore
            | FieldKey::HydrationCheck
            | FieldKey::InjuriesAccidents
            | FieldKey::InjuryDescription
            | FieldKey::TeamMood => Page::TeamSafety,
            FieldKey::InstagramPosts
            | FieldKey::TiktokVideos
            | FieldKey::LinkedinMentions
            | FieldKey::NewsletterMentions
            | FieldKey::MediaContacts => Page::SocialMedia,
        }
    }

    /// Returns `true` if the field must carry a value before submission.
    ///
    /// Flags and unconditional counters always carry a value, so requiring
    /// them is vacuous and they are not declared here. Gated counters
    /// (`NumberOfBreakdowns`, `EquipmentBreakdownCount`) are required only
    /// when their gating flag is set; see
    /// [`missing_required`](super::validation::missing_required).
    pub fn required(&self) -> bool {
        matches!(
            self,
            FieldKey::DistanceCovered
                | FieldKey::AverageSpeed
                | FieldKey::CyclingHours
                | FieldKey::NumberOfBreakdowns
                | FieldKey::ChargingStops
                | FieldKey::ElevationGains
                | FieldKey::TotalPeopleInteracted
                | FieldKey::CommunityEvents
                | FieldKey::WomenReached
                | FieldKey::YouthReached
                | FieldKey::MarginalizedPersons
                | FieldKey::ClimateMessages
                | FieldKey::PublicMessagingReach
                | FieldKey::AudienceQuestions
                | FieldKey::EducationalMedia
                | FieldKey::Interviews
                | FieldKey::PhotosVideos
                | FieldKey::VisibleEmissions
                | FieldKey::PlasticHotspots
                | FieldKey::NatureSites
                | FieldKey::ClimateInnovations
                | FieldKey::EbikesInUse
                | FieldKey::AverageBatteryUse
                | FieldKey::EquipmentBreakdownCount
                | FieldKey::RidersToday
                | FieldKey::TeamHealthScore
                | FieldKey::InstagramPosts
                | FieldKey::TiktokVideos
                | FieldKey::LinkedinMentions
                | FieldKey::MediaContacts
        )
    }

    /// Returns the flag field that gates this field, if any.
    ///
    /// Gated fields are hidden while the flag is unset, and gated counters
    /// become required once it is set.
    pub fn gated_by(&self) -> Option<FieldKey> {
        match self {
            FieldKey::NumberOfBreakdowns => Some(FieldKey::BreakdownsEncountered),
            FieldKey::EquipmentBreakdownCount => Some(FieldKey::EquipmentBreakdowns),
            FieldKey::InjuryDescription => Some(FieldKey::InjuriesAccidents),
            _ => None,
        }
    }

    /// Returns the option list for multi-choice fields, empty otherwise.
    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            FieldKey::ChargingMode => &["Solar", "Grid", "None"],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn all_returns_48_fields() {
        assert_eq!(FieldKey::all().len(), 48);
    }

    #[test]
    fn all_order_matches_discriminants() {
        for (i, key) in FieldKey::all().iter().enumerate() {
            assert_eq!(*key as usize, i, "{key:?} out of order");
        }
    }

    #[test]
    fn wire_names_are_unique() {
        let names: HashSet<&str> = FieldKey::all().iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), FieldKey::all().len());
    }

    #[test]
    fn wire_names_are_snake_case() {
        for key in FieldKey::all() {
            let name = key.name();
            assert!(
                name.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "{name} is not snake_case"
            );
        }
    }

    #[test]
    fn every_page_has_fields() {
        for page in Page::all() {
            assert!(
                FieldKey::all().iter().any(|k| k.page() == *page),
                "{page:?} has no fields"
            );
        }
    }

    #[test]
    fn field_counts_per_page() {
        let count = |page: Page| FieldKey::all().iter().filter(|k| k.page() == page).count();
        assert_eq!(count(Page::RouteLogistics), 12);
        assert_eq!(count(Page::CommunityEngagement), 6);
        assert_eq!(count(Page::KnowledgeSharing), 6);
        assert_eq!(count(Page::EnvironmentEmissions), 4);
        assert_eq!(count(Page::EquipmentPerformance), 9);
        assert_eq!(count(Page::TeamSafety), 6);
        assert_eq!(count(Page::SocialMedia), 5);
    }

    #[test]
    fn derived_coordinate_fields_are_numeric() {
        assert_eq!(FieldKey::Latitude.kind(), FieldKind::Numeric);
        assert_eq!(FieldKey::Longitude.kind(), FieldKind::Numeric);
    }

    #[test]
    fn gated_fields_point_at_flags() {
        for key in FieldKey::all() {
            if let Some(gate) = key.gated_by() {
                assert_eq!(gate.kind(), FieldKind::Flag, "{key:?} gated by non-flag");
            }
        }
    }

    #[test]
    fn injury_description_is_gated_but_optional() {
        assert_eq!(
            FieldKey::InjuryDescription.gated_by(),
            Some(FieldKey::InjuriesAccidents)
        );
        assert!(!FieldKey::InjuryDescription.required());
    }

    #[test]
    fn gated_counters_are_required() {
        assert!(FieldKey::NumberOfBreakdowns.required());
        assert!(FieldKey::EquipmentBreakdownCount.required());
    }

    #[test]
    fn flags_are_never_required() {
        for key in FieldKey::all() {
            if key.kind() == FieldKind::Flag {
                assert!(!key.required(), "{key:?} is a required flag");
            }
        }
    }

    #[test]
    fn charging_mode_choices() {
        assert_eq!(FieldKey::ChargingMode.choices(), &["Solar", "Grid", "None"]);
        assert!(FieldKey::Country.choices().is_empty());
    }

    #[test]
    fn default_values_match_kinds() {
        for key in FieldKey::all() {
            let default = key.kind().default_value();
            assert_eq!(default.kind(), key.kind(), "{key:?} default kind mismatch");
        }
    }

    #[test]
    fn defaults_serialize_as_declared() {
        assert_eq!(
            serde_json::to_value(FieldKind::Text.default_value()).unwrap(),
            serde_json::json!("")
        );
        assert_eq!(
            serde_json::to_value(FieldKind::Flag.default_value()).unwrap(),
            serde_json::json!(false)
        );
        assert_eq!(
            serde_json::to_value(FieldKind::Rating.default_value()).unwrap(),
            serde_json::json!(0)
        );
        assert_eq!(
            serde_json::to_value(FieldKind::MultiChoice.default_value()).unwrap(),
            serde_json::json!([])
        );
    }
}
