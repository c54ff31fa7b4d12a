use std::str::FromStr;

use anyhow::{Context, Result};

use crate::matching::composer::DEFAULT_WEIGHTS;
use crate::matching::ScoreWeights;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub score_weights: ScoreWeights,
    /// Upper bound on candidates × jobs accepted by the batch endpoint.
    pub max_batch_pairs: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let score_weights = ScoreWeights {
            skills: parse_or(&lookup, "MATCH_WEIGHT_SKILLS", DEFAULT_WEIGHTS.skills)?,
            experience: parse_or(&lookup, "MATCH_WEIGHT_EXPERIENCE", DEFAULT_WEIGHTS.experience)?,
            education: parse_or(&lookup, "MATCH_WEIGHT_EDUCATION", DEFAULT_WEIGHTS.education)?,
            location: parse_or(&lookup, "MATCH_WEIGHT_LOCATION", DEFAULT_WEIGHTS.location)?,
        };
        score_weights
            .validate()
            .context("MATCH_WEIGHT_* variables describe an unusable weighting")?;

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            score_weights,
            max_batch_pairs: parse_or(&lookup, "MAX_BATCH_PAIRS", 10_000)?,
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
