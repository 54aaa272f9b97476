//! Environment configuration.
//!
//! The scheduler invokes the binary with no arguments, so everything comes
//! from the environment (optionally via a `.env` file loaded by the CLI):
//!
//! - `NOTION_TOKEN` — integration token
//! - `ROOMIES_DATABASE_ID` / `CHORES_DATABASE_ID` / `TODOS_DATABASE_ID`
//! - `ROTATION_START` — anchor date of the rotation (optional,
//!   `YYYY-MM-DD`; defaults to [`DEFAULT_ROTATION_START`])
//!
//! The loader reads through a lookup closure so tests can feed it a plain
//! map instead of mutating process-global environment variables.

use chrono::NaiveDate;

use crate::error::{Result, RotaError};

/// Anchor week of the chores rotation. Can really be any week; shifting it
/// by whole weeks only relabels which week is "week zero".
pub const DEFAULT_ROTATION_START: &str = "2025-12-07";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub roomies_db: String,
    pub chores_db: String,
    pub todos_db: String,
    pub rotation_start: NaiveDate,
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through a lookup function (testable without global state).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| RotaError::Config(format!("{key} must be set")))
        };

        let rotation_start = match lookup("ROTATION_START") {
            Some(raw) if !raw.is_empty() => parse_date("ROTATION_START", &raw)?,
            _ => parse_date("ROTATION_START", DEFAULT_ROTATION_START)?,
        };

        Ok(Self {
            token: require("NOTION_TOKEN")?,
            roomies_db: require("ROOMIES_DATABASE_ID")?,
            chores_db: require("CHORES_DATABASE_ID")?,
            todos_db: require("TODOS_DATABASE_ID")?,
            rotation_start,
        })
    }
}

fn parse_date(key: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| RotaError::Config(format!("{key} is not a valid YYYY-MM-DD date: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_vars() -> HashMap<String, String> {
        vars(&[
            ("NOTION_TOKEN", "secret"),
            ("ROOMIES_DATABASE_ID", "db-r"),
            ("CHORES_DATABASE_ID", "db-c"),
            ("TODOS_DATABASE_ID", "db-t"),
        ])
    }

    #[test]
    fn loads_all_required_vars() {
        let env = full_vars();
        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.token, "secret");
        assert_eq!(config.roomies_db, "db-r");
        assert_eq!(config.chores_db, "db-c");
        assert_eq!(config.todos_db, "db-t");
        assert_eq!(
            config.rotation_start,
            NaiveDate::from_ymd_opt(2025, 12, 7).unwrap()
        );
    }

    #[test]
    fn missing_token_names_the_variable() {
        let mut env = full_vars();
        env.remove("NOTION_TOKEN");

        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert_eq!(err.to_string(), "config error: NOTION_TOKEN must be set");
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut env = full_vars();
        env.insert("CHORES_DATABASE_ID".into(), "".into());

        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("CHORES_DATABASE_ID"));
    }

    #[test]
    fn rotation_start_can_be_overridden() {
        let mut env = full_vars();
        env.insert("ROTATION_START".into(), "2026-01-04".into());

        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(
            config.rotation_start,
            NaiveDate::from_ymd_opt(2026, 1, 4).unwrap()
        );
    }

    #[test]
    fn invalid_rotation_start_is_a_config_error() {
        let mut env = full_vars();
        env.insert("ROTATION_START".into(), "next sunday".into());

        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("ROTATION_START"));
    }
}
