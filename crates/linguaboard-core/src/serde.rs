use serde::{Deserialize, Deserializer};

/// Treats an empty or whitespace-only string as `None`.
///
/// The backend stores unset media references (images, audio) as `""`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

/// Accepts a number either as a JSON number or as a numeric string.
///
/// Multipart-backed endpoints echo numeric fields back as strings.
pub fn deserialize_optional_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        Float(f64),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Float(f)) => Ok(Some(f as i64)),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Media {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        image: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_lenient_i64")]
        count: Option<i64>,
    }

    #[test]
    fn test_empty_string_is_none() {
        let media: Media = serde_json::from_str(r#"{"image":""}"#).unwrap();
        assert!(media.image.is_none());
    }

    #[test]
    fn test_present_string_is_kept() {
        let media: Media = serde_json::from_str(r#"{"image":"uploads/a.png"}"#).unwrap();
        assert_eq!(media.image.as_deref(), Some("uploads/a.png"));
    }

    #[test]
    fn test_missing_and_null_fields() {
        let media: Media = serde_json::from_str(r#"{"image":null}"#).unwrap();
        assert!(media.image.is_none());
        assert!(media.count.is_none());
    }

    #[test]
    fn test_lenient_number_variants() {
        let media: Media = serde_json::from_str(r#"{"count":"12"}"#).unwrap();
        assert_eq!(media.count, Some(12));

        let media: Media = serde_json::from_str(r#"{"count":7}"#).unwrap();
        assert_eq!(media.count, Some(7));

        let media: Media = serde_json::from_str(r#"{"count":""}"#).unwrap();
        assert_eq!(media.count, None);

        assert!(serde_json::from_str::<Media>(r#"{"count":"many"}"#).is_err());
    }
}
