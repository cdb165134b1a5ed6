use serde::{Deserialize, Serialize};

use crate::normalize::{Ceilings, Direction, normalize_dir};
use crate::player::{BattingStats, BowlingStats, PlayerProfile};
use crate::role::{StatVisibility, visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonMode {
    Single,
    Versus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatMetric {
    TotalRuns,
    BattingAverage,
    StrikeRate,
    Wickets,
    EconomyRate,
    BowlingAverage,
}

impl StatMetric {
    pub fn chart_label(self) -> &'static str {
        match self {
            StatMetric::TotalRuns => "Runs",
            StatMetric::BattingAverage => "Average",
            StatMetric::StrikeRate => "Strike Rate",
            StatMetric::Wickets => "Wickets",
            StatMetric::EconomyRate => "Economy",
            StatMetric::BowlingAverage => "Bowling Avg",
        }
    }

    pub fn table_label(self) -> &'static str {
        match self {
            StatMetric::TotalRuns => "Total Runs",
            StatMetric::BattingAverage => "Batting Avg",
            other => other.chart_label(),
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            StatMetric::EconomyRate | StatMetric::BowlingAverage => Direction::LowerBetter,
            _ => Direction::HigherBetter,
        }
    }

    pub fn ceiling(self, ceilings: &Ceilings) -> f64 {
        match self {
            StatMetric::TotalRuns => ceilings.total_runs,
            StatMetric::BattingAverage => ceilings.batting_average,
            StatMetric::StrikeRate => ceilings.strike_rate,
            StatMetric::Wickets => ceilings.wickets,
            StatMetric::EconomyRate => ceilings.economy_rate,
            StatMetric::BowlingAverage => ceilings.bowling_average,
        }
    }

    /// Counting stats are shown as integers, rates with two decimals.
    pub fn is_count(self) -> bool {
        matches!(self, StatMetric::TotalRuns | StatMetric::Wickets)
    }
}

type GroupValues = [(StatMetric, f64); 3];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub metric: StatMetric,
    pub raw_first: f64,
    pub raw_second: Option<f64>,
    pub score_first: f64,
    pub score_second: Option<f64>,
}

impl ComparisonRow {
    pub fn display_first(&self) -> String {
        display_raw(self.metric, Some(self.raw_first))
    }

    pub fn display_second(&self) -> String {
        display_raw(self.metric, self.raw_second)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub mode: ComparisonMode,
    pub first: String,
    pub second: Option<String>,
    pub visibility: StatVisibility,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    /// Nothing comparable: callers show the neutral "no insight available" state.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Side-by-side rows for one player, or two when a partner is given.
/// A stat group is included only when it is visible for the pair and the first player has it.
pub fn build_comparison(
    first: &PlayerProfile,
    second: Option<&PlayerProfile>,
    ceilings: &Ceilings,
) -> ComparisonReport {
    let (mode, vis) = match second {
        Some(p2) => (ComparisonMode::Versus, visibility(first.role, p2.role)),
        None => (ComparisonMode::Single, StatVisibility::single()),
    };

    let mut rows = Vec::new();
    if vis.show_batting {
        if let Some(bat) = first.stats.batting() {
            let other = second.and_then(|p| p.stats.batting()).map(batting_values);
            push_group(&mut rows, batting_values(bat), other, ceilings);
        }
    }
    if vis.show_bowling {
        if let Some(bowl) = first.stats.bowling() {
            let other = second.and_then(|p| p.stats.bowling()).map(bowling_values);
            push_group(&mut rows, bowling_values(bowl), other, ceilings);
        }
    }

    ComparisonReport {
        mode,
        first: first.name.clone(),
        second: second.map(|p| p.name.clone()),
        visibility: vis,
        rows,
    }
}

fn push_group(
    rows: &mut Vec<ComparisonRow>,
    first: GroupValues,
    second: Option<GroupValues>,
    ceilings: &Ceilings,
) {
    for (i, (metric, raw_first)) in first.into_iter().enumerate() {
        let raw_second = second.map(|vals| vals[i].1);
        rows.push(build_row(metric, raw_first, raw_second, ceilings));
    }
}

fn build_row(
    metric: StatMetric,
    raw_first: f64,
    raw_second: Option<f64>,
    ceilings: &Ceilings,
) -> ComparisonRow {
    let ceiling = metric.ceiling(ceilings);
    let dir = metric.direction();
    ComparisonRow {
        metric,
        raw_first,
        raw_second,
        score_first: normalize_dir(raw_first, ceiling, dir),
        score_second: raw_second.map(|v| normalize_dir(v, ceiling, dir)),
    }
}

fn batting_values(bat: &BattingStats) -> GroupValues {
    [
        (StatMetric::TotalRuns, bat.total_runs as f64),
        (StatMetric::BattingAverage, bat.average),
        (StatMetric::StrikeRate, bat.strike_rate),
    ]
}

fn bowling_values(bowl: &BowlingStats) -> GroupValues {
    [
        (StatMetric::Wickets, bowl.total_wickets as f64),
        (StatMetric::EconomyRate, bowl.economy_rate),
        (StatMetric::BowlingAverage, bowl.bowling_average),
    ]
}

fn display_raw(metric: StatMetric, raw: Option<f64>) -> String {
    match raw {
        None => "-".to_string(),
        Some(v) if metric.is_count() => format!("{}", v.round() as i64),
        Some(v) => format!("{v:.2}"),
    }
}
