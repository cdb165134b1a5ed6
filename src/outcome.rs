use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const WICKET_KEY: &str = "W";
pub const DOT_KEY: &str = "0";
const MIN_VISIBLE_HEIGHT: f64 = 5.0;

/// Next-ball outcome probabilities (percent) in the order the prediction service sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutcomeDistribution {
    entries: Vec<(String, f64)>,
}

impl OutcomeDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: impl Into<String>, probability: f64) {
        self.entries.push((outcome.into(), probability));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for OutcomeDistribution {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Serialize for OutcomeDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct DistributionVisitor;

impl<'de> Visitor<'de> for DistributionVisitor {
    type Value = OutcomeDistribution;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of outcome label to probability")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut out = OutcomeDistribution::new();
        while let Some((k, v)) = access.next_entry::<String, serde_json::Value>()? {
            match v.as_f64() {
                Some(p) => out.push(k, p),
                None => log::warn!("dropping outcome {k:?} with non-numeric probability {v}"),
            }
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for OutcomeDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DistributionVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeBar {
    pub outcome: String,
    pub label: String,
    pub probability: f64,
    pub display_height: f64,
}

/// Bar specs for the next-ball chart, preserving upstream order.
/// Entries with a negative or non-finite probability are skipped; the rest still render.
pub fn format_outcomes(distribution: &OutcomeDistribution) -> Vec<OutcomeBar> {
    distribution
        .iter()
        .filter_map(|(outcome, probability)| {
            if !probability.is_finite() || probability < 0.0 {
                log::warn!("dropping outcome {outcome:?} with probability {probability}");
                return None;
            }
            Some(OutcomeBar {
                outcome: outcome.to_string(),
                label: outcome_label(outcome).to_string(),
                probability,
                display_height: display_height(probability),
            })
        })
        .collect()
}

pub fn outcome_label(outcome: &str) -> &str {
    match outcome {
        WICKET_KEY => "WICKET",
        DOT_KEY => "DOT",
        other => other,
    }
}

fn display_height(probability: f64) -> f64 {
    if probability > 0.0 {
        probability.max(MIN_VISIBLE_HEIGHT)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stays_zero_and_order_is_kept() {
        let dist: OutcomeDistribution = [("0", 60.0), ("4", 0.0), ("W", 10.0)].into_iter().collect();
        let bars = format_outcomes(&dist);
        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        let heights: Vec<_> = bars.iter().map(|b| b.display_height).collect();
        assert_eq!(labels, vec!["DOT", "4", "WICKET"]);
        assert_eq!(heights, vec![60.0, 0.0, 10.0]);
    }

    #[test]
    fn small_probabilities_get_visible_floor() {
        let dist: OutcomeDistribution = [("6", 1.2), ("5", 0.1)].into_iter().collect();
        let bars = format_outcomes(&dist);
        assert_eq!(bars[0].display_height, 5.0);
        assert_eq!(bars[0].probability, 1.2);
        assert_eq!(bars[1].display_height, 5.0);
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let dist: OutcomeDistribution = [("1", 30.0), ("2", -4.0), ("3", f64::NAN), ("X", 7.0)]
            .into_iter()
            .collect();
        let bars = format_outcomes(&dist);
        let keys: Vec<_> = bars.iter().map(|b| b.outcome.as_str()).collect();
        assert_eq!(keys, vec!["1", "X"]);
        assert_eq!(bars[1].label, "X");
    }

    #[test]
    fn json_key_order_is_preserved() {
        let dist: OutcomeDistribution =
            serde_json::from_str(r#"{"W": 4.0, "6": 8.5, "0": 40.0, "1": 30.0}"#).unwrap();
        let keys: Vec<_> = dist.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["W", "6", "0", "1"]);
        let back = serde_json::to_string(&dist).unwrap();
        assert!(back.starts_with(r#"{"W":4.0"#));
    }

    #[test]
    fn non_numeric_json_values_skip_only_that_entry() {
        let dist: OutcomeDistribution =
            serde_json::from_str(r#"{"0": 60, "4": null, "W": 10}"#).unwrap();
        let bars = format_outcomes(&dist);
        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["DOT", "WICKET"]);

        let dist: OutcomeDistribution =
            serde_json::from_str(r#"{"1": "lots", "2": [3], "6": 4.5}"#).unwrap();
        assert_eq!(dist.len(), 1);
        assert_eq!(format_outcomes(&dist)[0].display_height, 5.0);
    }
}
