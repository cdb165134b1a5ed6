use serde::{Deserialize, Serialize};

use crate::outcome::{OutcomeBar, OutcomeDistribution, format_outcomes};
use crate::venue::{VenueProfile, classify_venue};
use crate::verdict::{Verdict, classify_verdict};

const DISMISSAL_CALL_THRESHOLD: f64 = 0.5;
const DEFAULT_BALLS: u32 = 20;
const MIN_RUNS_GAUGE: f64 = 40.0;
const RUNS_PER_BALL_GAUGE: f64 = 2.5;
const STRIKE_RATE_GAUGE: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DismissalCall {
    Yes,
    No,
}

impl DismissalCall {
    pub fn from_probability(p: f64) -> Self {
        if p >= DISMISSAL_CALL_THRESHOLD {
            DismissalCall::Yes
        } else {
            DismissalCall::No
        }
    }
}

/// Numbers returned by the prediction service for one batter/bowler/venue request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub predicted_runs: f64,
    #[serde(default)]
    pub strike_rate: f64,
    #[serde(default)]
    pub dismissal_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissal_prob: Option<DismissalCall>,
}

impl PredictionResult {
    pub fn new(predicted_runs: f64, strike_rate: f64, dismissal_rate: f64) -> Self {
        Self {
            predicted_runs,
            strike_rate,
            dismissal_rate,
            dismissal_prob: None,
        }
    }

    /// Fill the Yes/No dismissal call from the model's raw probability when the
    /// service did not send one.
    pub fn with_dismissal_probability(mut self, probability: Option<f64>) -> Self {
        if self.dismissal_prob.is_none() {
            self.dismissal_prob = probability.map(DismissalCall::from_probability);
        }
        self
    }

    pub fn verdict(&self) -> Verdict {
        classify_verdict(self.predicted_runs, self.strike_rate, self.dismissal_rate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub value: f64,
    pub max: f64,
}

impl Gauge {
    /// Unfilled part of the half-doughnut.
    pub fn remainder(&self) -> f64 {
        (self.max - self.value).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionGauges {
    pub runs: Gauge,
    pub strike_rate: Gauge,
    pub dismissal: Gauge,
}

/// Gauge scales for a prediction. The runs dial grows with the requested ball count;
/// zero balls falls back to a 20-ball scale.
pub fn prediction_gauges(prediction: &PredictionResult, balls_faced: u32) -> PredictionGauges {
    let balls = if balls_faced == 0 {
        DEFAULT_BALLS
    } else {
        balls_faced
    };
    PredictionGauges {
        runs: Gauge {
            value: prediction.predicted_runs,
            max: MIN_RUNS_GAUGE.max(balls as f64 * RUNS_PER_BALL_GAUGE),
        },
        strike_rate: Gauge {
            value: prediction.strike_rate,
            max: STRIKE_RATE_GAUGE,
        },
        dismissal: Gauge {
            value: prediction.dismissal_rate * 100.0,
            max: 100.0,
        },
    }
}

/// Everything the prediction page derives from one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupInsight {
    pub prediction: PredictionResult,
    pub verdict: Verdict,
    pub venue: Option<VenueProfile>,
    pub gauges: PredictionGauges,
    pub outcomes: Vec<OutcomeBar>,
}

impl MatchupInsight {
    pub fn build(
        prediction: PredictionResult,
        venue_name: &str,
        balls_faced: u32,
        outcomes: Option<&OutcomeDistribution>,
    ) -> Self {
        Self {
            verdict: prediction.verdict(),
            venue: classify_venue(venue_name).cloned(),
            gauges: prediction_gauges(&prediction, balls_faced),
            outcomes: outcomes.map(format_outcomes).unwrap_or_default(),
            prediction,
        }
    }
}
