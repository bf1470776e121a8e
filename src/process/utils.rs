use serde::{de, Deserialize, Deserializer};

/// Removed from `region_name`, first occurrence each, in this order.
pub const REGION_SUFFIXES: [&str; 4] = [" County", " Parish", " Census Area", " Borough"];

/// Tokens read as a missing value in numeric columns.
pub const NULL_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Strip each of [`REGION_SUFFIXES`] once, wherever it first appears.
///
/// Not anchored to the end, so a match in the middle of a name goes too.
pub fn strip_region_suffixes(name: &str) -> String {
    REGION_SUFFIXES
        .iter()
        .fold(name.to_string(), |acc, pat| acc.replacen(pat, "", 1))
}

pub fn is_null_token(s: &str) -> bool {
    NULL_TOKENS.contains(&s.trim())
}

pub fn deserialize_nullable_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if is_null_token(&raw) {
        return Ok(None);
    }
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| de::Error::custom(format!("invalid number `{raw}`")))?;
    // "nan" spellings not in NULL_TOKENS still parse to NaN
    Ok((!value.is_nan()).then_some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_each_suffix() {
        assert_eq!(strip_region_suffixes("Los Angeles County"), "Los Angeles");
        assert_eq!(strip_region_suffixes("Orleans Parish"), "Orleans");
        assert_eq!(strip_region_suffixes("Bethel Census Area"), "Bethel");
        assert_eq!(strip_region_suffixes("Juneau Borough"), "Juneau");
        assert_eq!(strip_region_suffixes("Baltimore city"), "Baltimore city");
    }

    #[test]
    fn first_occurrence_anywhere() {
        // mid-string matches are removed too
        assert_eq!(strip_region_suffixes("Miami County Dade"), "Miami Dade");
        // only the first of two
        assert_eq!(strip_region_suffixes("A County B County"), "A B County");
        // case-sensitive
        assert_eq!(strip_region_suffixes("Kent COUNTY"), "Kent COUNTY");
        // no leading space, no match
        assert_eq!(strip_region_suffixes("Countyville"), "Countyville");
    }

    #[test]
    fn null_tokens() {
        assert!(is_null_token(""));
        assert!(is_null_token(" NA "));
        assert!(is_null_token("NaN"));
        assert!(is_null_token("#N/A"));
        assert!(is_null_token("<NA>"));
        assert!(!is_null_token("0"));
    }
}
