use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;

use matchup_intel::outcome::OutcomeDistribution;
use matchup_intel::prediction::{MatchupInsight, PredictionResult};

#[derive(Debug, serde::Deserialize)]
struct InterpretCase {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    venue: String,
    #[serde(default)]
    balls: u32,
    prediction: PredictionResult,
    #[serde(default)]
    dismissal_probability: Option<f64>,
    #[serde(default)]
    next_ball: Option<OutcomeDistribution>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum CaseFile {
    Batch(Vec<InterpretCase>),
    Single(InterpretCase),
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::init();

    let path = std::env::args()
        .skip(1)
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/interpret_case.json"));
    let as_json = std::env::args().any(|a| a == "--json");

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cases = match serde_json::from_str::<CaseFile>(&raw).context("parse case file")? {
        CaseFile::Batch(cases) => cases,
        CaseFile::Single(case) => vec![case],
    };

    let insights: Vec<(String, MatchupInsight)> = cases
        .par_iter()
        .enumerate()
        .map(|(i, case)| {
            let id = case.id.clone().unwrap_or_else(|| format!("case-{}", i + 1));
            let prediction = case
                .prediction
                .with_dismissal_probability(case.dismissal_probability);
            let insight = MatchupInsight::build(
                prediction,
                &case.venue,
                case.balls,
                case.next_ball.as_ref(),
            );
            (id, insight)
        })
        .collect();

    if as_json {
        let out: Vec<_> = insights
            .iter()
            .map(|(id, insight)| serde_json::json!({ "id": id, "insight": insight }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (id, insight) in &insights {
        print_insight(id, insight);
    }
    Ok(())
}

const MAX_BAR_WIDTH: f64 = 50.0;

/// Two percentage points per character, capped so an oversized model value stays on one line.
fn bar_width(display_height: f64) -> usize {
    (display_height / 2.0).round().clamp(0.0, MAX_BAR_WIDTH) as usize
}

fn print_insight(id: &str, insight: &MatchupInsight) {
    let p = &insight.prediction;
    let label = insight.verdict.label;
    println!("== {id}");
    println!(
        "Runs: {:.0} / {:.0}",
        p.predicted_runs, insight.gauges.runs.max
    );
    println!("Strike rate: {:.1}", p.strike_rate);
    println!("Dismissal rate: {:.2}", p.dismissal_rate);
    if let Some(call) = p.dismissal_prob {
        println!("Dismissal: {call:?}");
    }
    println!(
        "Verdict: {} [{}] {}",
        label.headline(),
        insight.verdict.severity_tag,
        label.description()
    );
    match &insight.venue {
        Some(v) => println!(
            "Venue: {} [{}] {}",
            v.characteristic.label(),
            v.color_tag,
            v.description
        ),
        None => println!("Venue: -"),
    }
    for bar in &insight.outcomes {
        println!(
            "  {:>6} {:>5.1}% {}",
            bar.label,
            bar.probability,
            "#".repeat(bar_width(bar.display_height))
        );
    }
}
