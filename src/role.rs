use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Batsman,
    Bowler,
    #[default]
    AllRounder,
}

const BATSMAN_PARTNERS: &[Role] = &[Role::Batsman, Role::AllRounder];
const BOWLER_PARTNERS: &[Role] = &[Role::Bowler, Role::AllRounder];
const ANY_PARTNER: &[Role] = &[Role::Batsman, Role::Bowler, Role::AllRounder];

impl Role {
    /// Parse the role text handed out by the player service.
    /// Anything unrecognised is treated as an all-rounder, the most permissive role.
    pub fn from_text(raw: &str) -> Role {
        let s: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match s.as_str() {
            "batsman" | "batter" | "batswoman" => Role::Batsman,
            "bowler" => Role::Bowler,
            "allrounder" => Role::AllRounder,
            _ => {
                log::warn!("unrecognised role {raw:?}, treating as all-rounder");
                Role::AllRounder
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-Rounder",
        }
    }

    pub fn bats(self) -> bool {
        matches!(self, Role::Batsman | Role::AllRounder)
    }

    pub fn bowls(self) -> bool {
        matches!(self, Role::Bowler | Role::AllRounder)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Role::from_text).unwrap_or(Role::AllRounder))
    }
}

/// Roles a partner must have for a side-by-side comparison to share a play dimension.
pub fn eligible_partner_roles(role: Role) -> &'static [Role] {
    match role {
        Role::Batsman => BATSMAN_PARTNERS,
        Role::Bowler => BOWLER_PARTNERS,
        Role::AllRounder => ANY_PARTNER,
    }
}

/// Every other roster entry that can be compared with `anchor`, sorted by name.
/// An anchor missing from the roster is compared as an all-rounder.
pub fn eligible_partners(anchor: &str, roster: &HashMap<String, Role>) -> Vec<String> {
    let anchor_role = roster.get(anchor).copied().unwrap_or(Role::AllRounder);
    let allowed = eligible_partner_roles(anchor_role);
    let mut out: Vec<String> = roster
        .iter()
        .filter(|(name, _)| name.as_str() != anchor)
        .filter(|(_, role)| allowed.contains(role))
        .map(|(name, _)| name.clone())
        .collect();
    out.sort();
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatVisibility {
    pub show_batting: bool,
    pub show_bowling: bool,
}

impl StatVisibility {
    /// Single-player view: nothing is being compared, so every category is shown.
    pub fn single() -> Self {
        Self {
            show_batting: true,
            show_bowling: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.show_batting && !self.show_bowling
    }
}

/// A stat category is shown only when both players are capable in it.
pub fn visibility(role1: Role, role2: Role) -> StatVisibility {
    StatVisibility {
        show_batting: role1.bats() && role2.bats(),
        show_bowling: role1.bowls() && role2.bowls(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Role; 3] = [Role::Batsman, Role::Bowler, Role::AllRounder];

    #[test]
    fn every_role_is_self_comparable() {
        for role in ALL {
            assert!(eligible_partner_roles(role).contains(&role), "{role}");
        }
    }

    #[test]
    fn eligibility_table() {
        assert_eq!(
            eligible_partner_roles(Role::Batsman),
            &[Role::Batsman, Role::AllRounder]
        );
        assert_eq!(
            eligible_partner_roles(Role::Bowler),
            &[Role::Bowler, Role::AllRounder]
        );
        assert_eq!(eligible_partner_roles(Role::AllRounder).len(), 3);
    }

    #[test]
    fn role_text_variants() {
        assert_eq!(Role::from_text("Batsman"), Role::Batsman);
        assert_eq!(Role::from_text(" bowler "), Role::Bowler);
        assert_eq!(Role::from_text("All-Rounder"), Role::AllRounder);
        assert_eq!(Role::from_text("all rounder"), Role::AllRounder);
        assert_eq!(Role::from_text("Wicketkeeper"), Role::AllRounder);
        assert_eq!(Role::from_text(""), Role::AllRounder);
    }

    #[test]
    fn role_serde_uses_upstream_labels() {
        let json = serde_json::to_string(&Role::AllRounder).unwrap();
        assert_eq!(json, "\"All-Rounder\"");
        let role: Role = serde_json::from_str("\"Batsman\"").unwrap();
        assert_eq!(role, Role::Batsman);
        let role: Role = serde_json::from_str("null").unwrap();
        assert_eq!(role, Role::AllRounder);
    }

    #[test]
    fn visibility_pairs() {
        assert!(visibility(Role::Batsman, Role::Bowler).is_empty());
        assert_eq!(
            visibility(Role::AllRounder, Role::AllRounder),
            StatVisibility::single()
        );
        assert_eq!(
            visibility(Role::Batsman, Role::Batsman),
            StatVisibility {
                show_batting: true,
                show_bowling: false
            }
        );
        assert_eq!(
            visibility(Role::Bowler, Role::AllRounder),
            StatVisibility {
                show_batting: false,
                show_bowling: true
            }
        );
    }

    #[test]
    fn partners_exclude_anchor_and_sort() {
        let roster: HashMap<String, Role> = [
            ("Kohli", Role::Batsman),
            ("Bumrah", Role::Bowler),
            ("Jadeja", Role::AllRounder),
            ("Gill", Role::Batsman),
        ]
        .into_iter()
        .map(|(n, r)| (n.to_string(), r))
        .collect();

        assert_eq!(eligible_partners("Kohli", &roster), vec!["Gill", "Jadeja"]);
        assert_eq!(eligible_partners("Bumrah", &roster), vec!["Jadeja"]);
        assert_eq!(
            eligible_partners("Jadeja", &roster),
            vec!["Bumrah", "Gill", "Kohli"]
        );
        assert_eq!(eligible_partners("Nobody", &roster).len(), 4);
    }
}
