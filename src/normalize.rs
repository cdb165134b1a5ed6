use serde::{Deserialize, Serialize};

pub const TOTAL_RUNS_CEILING: f64 = 10_000.0;
pub const BATTING_AVERAGE_CEILING: f64 = 60.0;
pub const STRIKE_RATE_CEILING: f64 = 180.0;
pub const WICKETS_CEILING: f64 = 500.0;
pub const ECONOMY_RATE_CEILING: f64 = 12.0;
pub const BOWLING_AVERAGE_CEILING: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    HigherBetter,
    LowerBetter,
}

/// Reference maxima that put elite career numbers near the top of the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ceilings {
    pub total_runs: f64,
    pub batting_average: f64,
    pub strike_rate: f64,
    pub wickets: f64,
    pub economy_rate: f64,
    pub bowling_average: f64,
}

impl Default for Ceilings {
    fn default() -> Self {
        Self {
            total_runs: TOTAL_RUNS_CEILING,
            batting_average: BATTING_AVERAGE_CEILING,
            strike_rate: STRIKE_RATE_CEILING,
            wickets: WICKETS_CEILING,
            economy_rate: ECONOMY_RATE_CEILING,
            bowling_average: BOWLING_AVERAGE_CEILING,
        }
    }
}

impl Ceilings {
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("total_runs", self.total_runs),
            ("batting_average", self.batting_average),
            ("strike_rate", self.strike_rate),
            ("wickets", self.wickets),
            ("economy_rate", self.economy_rate),
            ("bowling_average", self.bowling_average),
        ]
    }
}

/// Scale `value` onto 0..=100 against `ceiling`, clamping anything above the ceiling.
///
/// # Panics
/// If `ceiling` is not a positive finite number. That is a broken calibration constant,
/// not bad input data.
pub fn normalize(value: f64, ceiling: f64) -> f64 {
    check_ceiling(ceiling);
    (value.max(0.0) / ceiling * 100.0).min(100.0)
}

/// Lower-is-better variant: 0 scores 100, the ceiling and above score 0.
///
/// # Panics
/// Same as [`normalize`].
pub fn normalize_inverse(value: f64, ceiling: f64) -> f64 {
    check_ceiling(ceiling);
    ((ceiling - value.max(0.0)) / ceiling * 100.0).max(0.0)
}

pub fn normalize_dir(value: f64, ceiling: f64, dir: Direction) -> f64 {
    match dir {
        Direction::HigherBetter => normalize(value, ceiling),
        Direction::LowerBetter => normalize_inverse(value, ceiling),
    }
}

fn check_ceiling(ceiling: f64) {
    assert!(
        ceiling.is_finite() && ceiling > 0.0,
        "normalizer ceiling must be positive and finite, got {ceiling}"
    );
}
