use crate::error::{EtlError, Result};
use std::{env, path::PathBuf};
use url::Url;

pub const DEFAULT_URL: &str = "https://redfin-public-data.s3.us-west-2.amazonaws.com/redfin_covid19/weekly_housing_market_data_most_recent.tsv000";
pub const DEFAULT_RAW_PATH: &str = "../data/redfin_raw.csv";
pub const DEFAULT_CLEAN_PATH: &str = "../data/redfin_clean.csv";

pub const URL_VAR: &str = "REDFIN_URL";
pub const RAW_PATH_VAR: &str = "REDFIN_RAW_PATH";
pub const CLEAN_PATH_VAR: &str = "REDFIN_CLEAN_PATH";

/// Where to download from and where the two files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: Url,
    pub raw_path: PathBuf,
    pub clean_path: PathBuf,
}

impl Config {
    /// Defaults, overridden by `REDFIN_URL`, `REDFIN_RAW_PATH`, `REDFIN_CLEAN_PATH`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let url_str = get(URL_VAR, DEFAULT_URL);
        let url = Url::parse(&url_str)
            .map_err(|e| EtlError::Config(format!("{URL_VAR}=`{url_str}`: {e}")))?;

        Ok(Config {
            url,
            raw_path: PathBuf::from(get(RAW_PATH_VAR, DEFAULT_RAW_PATH)),
            clean_path: PathBuf::from(get(CLEAN_PATH_VAR, DEFAULT_CLEAN_PATH)),
        })
    }
}
