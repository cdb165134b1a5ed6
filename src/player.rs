use serde::{Deserialize, Serialize};

use crate::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BattingStats {
    #[serde(default)]
    pub total_runs: u32,
    #[serde(default)]
    pub total_balls_faced: u32,
    #[serde(default)]
    pub average: f64,
    #[serde(default)]
    pub strike_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BowlingStats {
    #[serde(default)]
    pub total_wickets: u32,
    #[serde(default)]
    pub total_runs_conceded: u32,
    #[serde(default)]
    pub bowling_average: f64,
    #[serde(default)]
    pub economy_rate: f64,
}

/// Which stat groups the player service returned for a player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerStats {
    BattingOnly(BattingStats),
    BowlingOnly(BowlingStats),
    Both(BattingStats, BowlingStats),
    Neither,
}

impl PlayerStats {
    pub fn from_parts(batting: Option<BattingStats>, bowling: Option<BowlingStats>) -> Self {
        match (batting, bowling) {
            (Some(bat), Some(bowl)) => PlayerStats::Both(bat, bowl),
            (Some(bat), None) => PlayerStats::BattingOnly(bat),
            (None, Some(bowl)) => PlayerStats::BowlingOnly(bowl),
            (None, None) => PlayerStats::Neither,
        }
    }

    pub fn batting(&self) -> Option<&BattingStats> {
        match self {
            PlayerStats::BattingOnly(bat) | PlayerStats::Both(bat, _) => Some(bat),
            _ => None,
        }
    }

    pub fn bowling(&self) -> Option<&BowlingStats> {
        match self {
            PlayerStats::BowlingOnly(bowl) | PlayerStats::Both(_, bowl) => Some(bowl),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlayerRecord", into = "PlayerRecord")]
pub struct PlayerProfile {
    pub name: String,
    pub role: Role,
    pub stats: PlayerStats,
    pub batting_hand: Option<String>,
    pub bowling_style: Option<String>,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, role: Role, stats: PlayerStats) -> Self {
        Self {
            name: name.into(),
            role,
            stats,
            batting_hand: None,
            bowling_style: None,
        }
    }

    /// Card detail line matching the role the player is shown in: batting hand for a
    /// batsman, bowling style for a bowler. Placeholder values ("N/A") are dropped.
    pub fn card_detail(&self, shown_as: Role) -> Option<&str> {
        let raw = match shown_as {
            Role::Batsman => self.batting_hand.as_deref(),
            Role::Bowler => self.bowling_style.as_deref(),
            Role::AllRounder => None,
        }?;
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("n/a") {
            None
        } else {
            Some(raw)
        }
    }
}

/// Wire shape of the player service: stat groups are independently optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerRecord {
    #[serde(alias = "player_name")]
    name: String,
    #[serde(default)]
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    batting: Option<BattingStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bowling: Option<BowlingStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    batting_hand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bowling_style: Option<String>,
}

impl From<PlayerRecord> for PlayerProfile {
    fn from(raw: PlayerRecord) -> Self {
        Self {
            name: raw.name,
            role: raw.role,
            stats: PlayerStats::from_parts(raw.batting, raw.bowling),
            batting_hand: raw.batting_hand,
            bowling_style: raw.bowling_style,
        }
    }
}

impl From<PlayerProfile> for PlayerRecord {
    fn from(profile: PlayerProfile) -> Self {
        Self {
            batting: profile.stats.batting().copied(),
            bowling: profile.stats.bowling().copied(),
            name: profile.name,
            role: profile.role,
            batting_hand: profile.batting_hand,
            bowling_style: profile.bowling_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_json_maps_to_tagged_stats() {
        let raw = r#"{
            "player_name": "RA Jadeja",
            "role": "All-Rounder",
            "batting": {"total_runs": 3000, "total_balls_faced": 2300, "average": 26.5, "strike_rate": 130.4},
            "bowling": {"total_wickets": 160, "total_runs_conceded": 4700, "bowling_average": 29.4, "economy_rate": 7.6},
            "batting_hand": "Left-hand bat"
        }"#;
        let p: PlayerProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(p.name, "RA Jadeja");
        assert_eq!(p.role, Role::AllRounder);
        assert!(matches!(p.stats, PlayerStats::Both(_, _)));
        assert_eq!(p.stats.bowling().unwrap().total_wickets, 160);
        assert_eq!(p.card_detail(Role::Batsman), Some("Left-hand bat"));
        assert_eq!(p.card_detail(Role::Bowler), None);
    }

    #[test]
    fn missing_groups_become_neither() {
        let p: PlayerProfile = serde_json::from_str(r#"{"name": "X", "role": "Bowler"}"#).unwrap();
        assert_eq!(p.stats, PlayerStats::Neither);
        assert!(p.stats.batting().is_none());
    }

    #[test]
    fn placeholder_card_detail_is_dropped() {
        let mut p = PlayerProfile::new("Y", Role::Bowler, PlayerStats::Neither);
        p.bowling_style = Some("N/A".to_string());
        assert_eq!(p.card_detail(Role::Bowler), None);
    }
}
