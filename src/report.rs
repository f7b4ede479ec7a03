use crate::config::ResolvedConfig;
use crate::error::AppError;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct OutputPaths {
    pub synergy: String,
    pub matchups: String,
    pub recs: String,
}

impl OutputPaths {
    pub fn under(output_dir: &str) -> Self {
        let csv = |name: &str| format!("{}/{}.csv", output_dir, name);
        OutputPaths {
            synergy: csv("synergy"),
            matchups: csv("matchups"),
            recs: csv("recs"),
        }
    }
}

/// Run summary printed on stdout. Field order is the JSON key order.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Report {
    pub status: &'static str,
    pub regions: Vec<String>,
    pub window_days: i64,
    pub outputs: OutputPaths,
}

impl Report {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Report {
            status: "ok",
            regions: config.regions.clone(),
            window_days: config.window_days,
            outputs: OutputPaths::under(&config.output_dir),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::JsonError(e.to_string()))
    }
}
