use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::normalize::Ceilings;

const ENV_PREFIX: &str = "MATCHUP_CEILING_";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub ceilings: Ceilings,
}

impl EngineConfig {
    /// Defaults overridden by `MATCHUP_CEILING_*` variables. Values that do not parse are ignored.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(env_lookup)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read engine config {}", path.display()))?;
        let cfg: EngineConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parse engine config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// File first (if given), then environment on top.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p)?.with_overrides(env_lookup),
            None => Self::from_env(),
        }
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let c = &mut self.ceilings;
        let fields: [(&str, &mut f64); 6] = [
            ("TOTAL_RUNS", &mut c.total_runs),
            ("BATTING_AVERAGE", &mut c.batting_average),
            ("STRIKE_RATE", &mut c.strike_rate),
            ("WICKETS", &mut c.wickets),
            ("ECONOMY_RATE", &mut c.economy_rate),
            ("BOWLING_AVERAGE", &mut c.bowling_average),
        ];
        for (suffix, slot) in fields {
            let key = format!("{ENV_PREFIX}{suffix}");
            let Some(raw) = lookup(&key) else { continue };
            match raw.trim().parse::<f64>() {
                Ok(v) => *slot = v,
                Err(_) => log::warn!("ignoring {key}={raw:?}: not a number"),
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Every ceiling must be a positive finite number; the normalizer panics otherwise.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.ceilings.entries() {
            if !value.is_finite() || value <= 0.0 {
                return Err(anyhow!("ceiling {name} must be positive, got {value}"));
            }
        }
        Ok(())
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
