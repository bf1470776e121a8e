use crate::{
    config::Config,
    error::Result,
    fetch::{self, FetchSummary},
    process::{self, TransformSummary},
};
use tracing::info;

/// Download the raw dataset to `cfg.raw_path`.
pub async fn fetch_stage(cfg: &Config) -> Result<FetchSummary> {
    info!(url = %cfg.url, dest = %cfg.raw_path.display(), "fetch stage");
    let client = fetch::build_client()?;
    fetch::download_raw(&client, &cfg.url, &cfg.raw_path).await
}

/// Load `cfg.raw_path`, filter and clean it, write `cfg.clean_path`.
pub fn transform_stage(cfg: &Config) -> Result<TransformSummary> {
    info!(
        src = %cfg.raw_path.display(),
        dest = %cfg.clean_path.display(),
        "transform stage"
    );
    let records = process::load_raw(&cfg.raw_path)?;
    let (rows, summary) = process::transform_with_summary(&records);
    process::write_clean(&cfg.clean_path, &rows)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EtlError;
    use anyhow::Result;
    use std::fs;

    fn config_in(dir: &std::path::Path) -> Result<Config> {
        let raw = dir.join("data").join("redfin_raw.csv");
        let clean = dir.join("data").join("redfin_clean.csv");
        Ok(Config::from_lookup(|k| match k {
            crate::config::URL_VAR => Some("http://127.0.0.1:9/unused".into()),
            crate::config::RAW_PATH_VAR => Some(raw.display().to_string()),
            crate::config::CLEAN_PATH_VAR => Some(clean.display().to_string()),
            _ => None,
        })?)
    }

    #[test]
    fn transform_stage_without_raw_file_fails_at_open() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let cfg = config_in(dir.path())?;
        let err = transform_stage(&cfg).unwrap_err();
        assert!(matches!(err, EtlError::Io { .. }));
        assert!(!cfg.clean_path.exists());
        Ok(())
    }

    #[test]
    fn transform_stage_writes_output() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let cfg = config_in(dir.path())?;
        fs::create_dir_all(cfg.raw_path.parent().unwrap())?;
        fs::write(
            &cfg.raw_path,
            "period_end\tregion_type\tregion_name\tduration\tmedian_sale_price\n\
2021-01-01\tcounty\tAda County\t12 weeks\t1\n\
2021-01-08\tcounty\tAda County\t12 weeks\t2\n",
        )?;

        let summary = transform_stage(&cfg)?;

        assert_eq!(summary.loaded, 2);
        assert_eq!(summary.kept, 1);
        assert_eq!(
            fs::read_to_string(&cfg.clean_path)?,
            "county,median_sale_price\nAda,2.0\n"
        );
        Ok(())
    }
}
