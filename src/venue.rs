use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VenueCharacteristic {
    BattingParadise,
    SpinFriendly,
    Balanced,
    BattingFriendly,
    PaceFriendly,
    BowlingFriendly,
}

impl VenueCharacteristic {
    pub fn label(self) -> &'static str {
        match self {
            VenueCharacteristic::BattingParadise => "Batting Paradise",
            VenueCharacteristic::SpinFriendly => "Spin Friendly",
            VenueCharacteristic::Balanced => "Balanced",
            VenueCharacteristic::BattingFriendly => "Batting Friendly",
            VenueCharacteristic::PaceFriendly => "Pace Friendly",
            VenueCharacteristic::BowlingFriendly => "Bowling Friendly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueProfile {
    pub canonical_name: String,
    pub characteristic: VenueCharacteristic,
    pub color_tag: String,
    pub description: String,
}

const WANKHEDE: &str = "Wankhede Stadium, Mumbai";
const CHINNASWAMY: &str = "M Chinnaswamy Stadium, Bengaluru";
const CHIDAMBARAM: &str = "MA Chidambaram Stadium, Chepauk, Chennai";
const EDEN_GARDENS: &str = "Eden Gardens, Kolkata";
const NARENDRA_MODI: &str = "Narendra Modi Stadium, Ahmedabad";
const ARUN_JAITLEY: &str = "Arun Jaitley Stadium, Delhi";
const RAJIV_GANDHI: &str = "Rajiv Gandhi International Stadium, Uppal, Hyderabad";
const BINDRA: &str = "Punjab Cricket Association IS Bindra Stadium, Mohali, Chandigarh";
const MANSINGH: &str = "Sawai Mansingh Stadium, Jaipur";

const VENUE_TABLE: &[(&str, VenueCharacteristic, &str, &str)] = &[
    (
        WANKHEDE,
        VenueCharacteristic::BattingParadise,
        "success",
        "Expect High Scores & Boundaries",
    ),
    (
        CHINNASWAMY,
        VenueCharacteristic::BattingParadise,
        "success",
        "Small Boundaries, High Scoring",
    ),
    (
        CHIDAMBARAM,
        VenueCharacteristic::SpinFriendly,
        "warning",
        "Grip & Turn for Spinners",
    ),
    (
        EDEN_GARDENS,
        VenueCharacteristic::Balanced,
        "info",
        "Good Balance between Bat & Ball",
    ),
    (
        NARENDRA_MODI,
        VenueCharacteristic::BattingFriendly,
        "success",
        "Fast Outfield, Good for Batting",
    ),
    (
        ARUN_JAITLEY,
        VenueCharacteristic::SpinFriendly,
        "warning",
        "Slow Pitch, Spinners Dominate",
    ),
    (
        RAJIV_GANDHI,
        VenueCharacteristic::BattingFriendly,
        "success",
        "Flat Deck, Good for Chasing",
    ),
    (
        BINDRA,
        VenueCharacteristic::PaceFriendly,
        "primary",
        "Help for Fast Bowlers early on",
    ),
    (
        MANSINGH,
        VenueCharacteristic::BowlingFriendly,
        "primary",
        "Large Boundaries, Low Scoring",
    ),
];

// Evaluated top to bottom; the first rule with any matching keyword wins.
const FUZZY_RULES: &[(&[&str], &str)] = &[
    (&["wankhede"], WANKHEDE),
    (&["chinnaswamy"], CHINNASWAMY),
    (&["chidambaram", "chepauk"], CHIDAMBARAM),
    (&["eden gardens"], EDEN_GARDENS),
    (&["narendra modi", "motera"], NARENDRA_MODI),
    (&["arun jaitley", "kotla"], ARUN_JAITLEY),
    (&["rajiv gandhi"], RAJIV_GANDHI),
    (&["bindra", "mohali"], BINDRA),
    (&["mansingh"], MANSINGH),
];

static VENUES: Lazy<HashMap<&'static str, VenueProfile>> = Lazy::new(|| {
    VENUE_TABLE
        .iter()
        .map(|(name, characteristic, color, desc)| {
            (
                *name,
                VenueProfile {
                    canonical_name: (*name).to_string(),
                    characteristic: *characteristic,
                    color_tag: (*color).to_string(),
                    description: (*desc).to_string(),
                },
            )
        })
        .collect()
});

/// Canonical venue profiles, in table order.
pub fn known_venues() -> impl Iterator<Item = &'static VenueProfile> {
    VENUE_TABLE.iter().filter_map(|(name, ..)| VENUES.get(name))
}

/// Look a venue up by its exact canonical name, then by keyword.
/// `None` means no classification; callers show no badge.
pub fn classify_venue(name: &str) -> Option<&'static VenueProfile> {
    if let Some(profile) = VENUES.get(name) {
        return Some(profile);
    }
    if name.is_empty() {
        return None;
    }

    let lower = name.to_lowercase();
    let (_, canonical) = FUZZY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))?;
    log::debug!("venue {name:?} matched {canonical:?} by keyword");
    VENUES.get(canonical)
}
