use super::{utils::strip_region_suffixes, CountyPrice, RawRecord};
use chrono::NaiveDate;
use tracing::info;

pub const REGION_TYPE: &str = "county";
pub const DURATION: &str = "12 weeks";

/// Row counts for one transform pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformSummary {
    pub loaded: usize,
    /// Rows with the wanted region type and duration.
    pub matched: usize,
    pub null_price: usize,
    /// Matched, priced rows from an older period.
    pub stale: usize,
    pub kept: usize,
    pub max_period_end: Option<NaiveDate>,
}

/// Latest-period, 12-week county median prices, in source order.
pub fn transform(records: &[RawRecord]) -> Vec<CountyPrice> {
    transform_with_summary(records).0
}

pub fn transform_with_summary(records: &[RawRecord]) -> (Vec<CountyPrice>, TransformSummary) {
    // taken over every loaded row, before any filter
    let max_period_end = records.iter().map(|r| r.period_end).max();
    let mut summary = TransformSummary {
        loaded: records.len(),
        max_period_end,
        ..Default::default()
    };

    let Some(latest) = max_period_end else {
        return (Vec::new(), summary);
    };

    let mut out = Vec::new();
    for r in records {
        if r.region_type != REGION_TYPE || r.duration != DURATION {
            continue;
        }
        summary.matched += 1;

        let Some(price) = r.median_sale_price else {
            summary.null_price += 1;
            continue;
        };
        if r.period_end != latest {
            summary.stale += 1;
            continue;
        }

        out.push(CountyPrice {
            county: strip_region_suffixes(&r.region_name),
            median_sale_price: price,
        });
    }
    summary.kept = out.len();

    info!(
        loaded = summary.loaded,
        matched = summary.matched,
        null_price = summary.null_price,
        stale = summary.stale,
        kept = summary.kept,
        max_period_end = %latest,
        "transform complete"
    );
    (out, summary)
}
