use chrono::{NaiveDate, NaiveTime};
use serde::{de, Deserialize, Deserializer};

/// Parse `"YYYY-MM-DD"`, tolerating a trailing `" HH:MM:SS"` / `"THH:MM:SS"`.
pub fn parse_period_end(s: &str) -> Option<NaiveDate> {
    let s = s.trim().trim_matches('"');
    let day = s.get(..10)?;
    match s.as_bytes().get(10) {
        None => {}
        Some(b' ') | Some(b'T') => {
            NaiveTime::parse_from_str(s.get(11..)?, "%H:%M:%S").ok()?;
        }
        Some(_) => return None,
    }
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

pub fn deserialize_period_end<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_period_end(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid period_end `{raw}`")))
}
