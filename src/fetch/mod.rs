pub mod download;

pub use download::{build_client, download_raw, FetchSummary};
