use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A `post` document as returned by the content API.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RawContentItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub first_publication_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub data: RawPostData,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RawPostData {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub banner: Option<RawBanner>,
    #[serde(default)]
    pub content: Option<Vec<RawContentBlock>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RawBanner {
    pub url: Option<String>,
    pub alt: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RawContentBlock {
    pub heading: Option<String>,
    #[serde(default)]
    pub body: Vec<RawParagraph>,
}

/// A rich text node, only its plain text matters here.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RawParagraph {
    pub text: Option<String>,
}

/// Accepts both `2021-03-25T19:25:28+0000` (what the API sends) and RFC 3339.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_timestamp(&value)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp `{}`", value)))
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
        .map(|date| date.to_utc())
}
