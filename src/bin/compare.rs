use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use matchup_intel::comparison::{ComparisonMode, build_comparison};
use matchup_intel::config::EngineConfig;
use matchup_intel::player::PlayerProfile;
use matchup_intel::role::{Role, eligible_partners};

#[derive(Debug, serde::Deserialize)]
struct CompareCase {
    players: Vec<PlayerProfile>,
    first: String,
    #[serde(default)]
    second: Option<String>,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/compare_case.json"));
    let config_path = std::env::var("MATCHUP_CONFIG").ok().map(PathBuf::from);
    let config = EngineConfig::resolve(config_path.as_deref())?;

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let case: CompareCase = serde_json::from_str(&raw).context("parse compare case")?;

    let by_name: HashMap<&str, &PlayerProfile> =
        case.players.iter().map(|p| (p.name.as_str(), p)).collect();
    let roster: HashMap<String, Role> = case
        .players
        .iter()
        .map(|p| (p.name.clone(), p.role))
        .collect();

    let first = by_name
        .get(case.first.as_str())
        .copied()
        .ok_or_else(|| anyhow!("player {} not in roster", case.first))?;
    let second = match case.second.as_deref() {
        Some(name) => Some(
            by_name
                .get(name)
                .copied()
                .ok_or_else(|| anyhow!("player {name} not in roster"))?,
        ),
        None => None,
    };

    let partners = eligible_partners(&first.name, &roster);
    println!("{}", card_line(first));
    if let Some(p) = second {
        println!("{}", card_line(p));
    }
    println!("Comparable with: {}", partners.join(", "));

    let report = build_comparison(first, second, &config.ceilings);
    let mode = match report.mode {
        ComparisonMode::Single => "SINGLE MODE",
        ComparisonMode::Versus => "VS MODE",
    };
    println!("Matchup intel [{mode}]");
    if report.is_empty() {
        println!("No comparable stats for this pair.");
        return Ok(());
    }

    let second_name = report.second.as_deref().unwrap_or("-");
    println!("{:<14} {:>12} {:>12}", "Metric", report.first, second_name);
    for row in &report.rows {
        println!(
            "{:<14} {:>12} {:>12}",
            row.metric.table_label(),
            row.display_first(),
            row.display_second()
        );
    }
    println!();
    println!("Performance rating (0-100)");
    for row in &report.rows {
        let second = row
            .score_second
            .map(|s| format!("{}", s.round()))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} {:>5} {:>5}",
            row.metric.chart_label(),
            row.score_first.round(),
            second
        );
    }
    Ok(())
}

/// "Name (Role) - detail", the detail omitted when the player has none for that role.
fn card_line(player: &PlayerProfile) -> String {
    match player.card_detail(player.role) {
        Some(detail) => format!("{} ({}) - {detail}", player.name, player.role),
        None => format!("{} ({})", player.name, player.role),
    }
}
