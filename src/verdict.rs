use serde::{Deserialize, Serialize};

const BOWLER_DOMINATES_RISK: f64 = 40.0;
const HIGH_STRIKE_RATE: f64 = 150.0;
const SAFE_RISK: f64 = 25.0;
const LOW_STRIKE_RATE: f64 = 110.0;
const ATTRITION_RISK: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerdictLabel {
    BowlerDominates,
    BatsmanDominates,
    HighVolatility,
    BattleOfAttrition,
    Balanced,
}

impl VerdictLabel {
    pub fn severity_tag(self) -> &'static str {
        match self {
            VerdictLabel::BowlerDominates => "danger",
            VerdictLabel::BatsmanDominates => "success",
            VerdictLabel::HighVolatility => "warning",
            VerdictLabel::BattleOfAttrition => "info",
            VerdictLabel::Balanced => "secondary",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            VerdictLabel::BowlerDominates => "BOWLER DOMINATES",
            VerdictLabel::BatsmanDominates => "BATSMAN DOMINATES",
            VerdictLabel::HighVolatility => "HIGH VOLATILITY",
            VerdictLabel::BattleOfAttrition => "BATTLE OF ATTRITION",
            VerdictLabel::Balanced => "BALANCED CONTEST",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            VerdictLabel::BowlerDominates => "High probability of wicket.",
            VerdictLabel::BatsmanDominates => "High scoring, low risk.",
            VerdictLabel::HighVolatility => "High reward, but high risk.",
            VerdictLabel::BattleOfAttrition => "Defensive play expected.",
            VerdictLabel::Balanced => "Evenly matched contest.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: VerdictLabel,
    pub severity_tag: String,
}

impl From<VerdictLabel> for Verdict {
    fn from(label: VerdictLabel) -> Self {
        Self {
            label,
            severity_tag: label.severity_tag().to_string(),
        }
    }
}

/// Qualitative read of a predicted contest. Rules are a priority chain: dismissal risk is
/// checked before strike rate, so a very high strike rate with >40% risk still reads as
/// the bowler's contest. Predicted runs do not move the verdict.
pub fn classify_verdict(_predicted_runs: f64, strike_rate: f64, dismissal_rate: f64) -> Verdict {
    let risk = dismissal_rate * 100.0;

    let label = if risk > BOWLER_DOMINATES_RISK {
        VerdictLabel::BowlerDominates
    } else if strike_rate > HIGH_STRIKE_RATE && risk < SAFE_RISK {
        VerdictLabel::BatsmanDominates
    } else if strike_rate > HIGH_STRIKE_RATE && risk >= SAFE_RISK {
        VerdictLabel::HighVolatility
    } else if strike_rate < LOW_STRIKE_RATE && risk < ATTRITION_RISK {
        VerdictLabel::BattleOfAttrition
    } else {
        VerdictLabel::Balanced
    };
    label.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(sr: f64, dr: f64) -> VerdictLabel {
        classify_verdict(30.0, sr, dr).label
    }

    #[test]
    fn dismissal_risk_takes_priority() {
        assert_eq!(label(160.0, 0.45), VerdictLabel::BowlerDominates);
        assert_eq!(label(90.0, 0.41), VerdictLabel::BowlerDominates);
    }

    #[test]
    fn priority_chain_examples() {
        assert_eq!(label(160.0, 0.10), VerdictLabel::BatsmanDominates);
        assert_eq!(label(160.0, 0.30), VerdictLabel::HighVolatility);
        assert_eq!(label(100.0, 0.10), VerdictLabel::BattleOfAttrition);
        assert_eq!(label(130.0, 0.15), VerdictLabel::Balanced);
    }

    #[test]
    fn boundaries_are_strict() {
        assert_eq!(label(160.0, 0.25), VerdictLabel::HighVolatility);
        assert_eq!(label(150.0, 0.10), VerdictLabel::Balanced);
        assert_eq!(label(110.0, 0.10), VerdictLabel::Balanced);
        assert_eq!(label(100.0, 0.25), VerdictLabel::Balanced);
        assert_eq!(label(100.0, 0.35), VerdictLabel::Balanced);
    }

    #[test]
    fn nan_falls_through_to_balanced() {
        assert_eq!(label(f64::NAN, f64::NAN), VerdictLabel::Balanced);
    }

    #[test]
    fn severity_tag_follows_label() {
        let v = classify_verdict(0.0, 160.0, 0.45);
        assert_eq!(v.severity_tag, "danger");
        assert_eq!(v.label.headline(), "BOWLER DOMINATES");
    }
}
