//! Netlify deploy notification payload

use serde::{Deserialize, Deserializer};

/// Header Netlify uses to name the event being delivered (`X-Netlify-Event`).
pub const EVENT_HEADER: &str = "x-netlify-event";

/// The only event this relay forwards.
pub const DEPLOY_CREATED_EVENT: &str = "deploy_created";

/// Payload Netlify posts when a deploy is published.
///
/// Every field is optional: absent keys and explicit `null` both decode to
/// the type's default. Only `build_id`, `name`, `deploy_ssl_url`,
/// `created_at`, `published_at`, `deploy_time` and `links.permalink` end up
/// in the Teams card; the rest are decoded and ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeployEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub site_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub build_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deploy_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deploy_ssl_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub published_at: String,
    /// Build duration in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub deploy_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub commit_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub log_access_attributes: LogAccessAttributes,
    #[serde(deserialize_with = "null_as_default")]
    pub links: DeployLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogAccessAttributes {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub endpoint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeployLinks {
    #[serde(deserialize_with = "null_as_default")]
    pub permalink: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alias: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl DeployEvent {
    /// Decode a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
