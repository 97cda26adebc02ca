//! Teams MessageCard built from a deploy event

use serde::Serialize;

use crate::webhook::DeployEvent;

pub const CARD_TYPE: &str = "MessageCard";
pub const CARD_CONTEXT: &str = "http://schema.org/extensions";
pub const THEME_COLOR: &str = "0076D7";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationCard {
    #[serde(rename = "@type")]
    pub card_type: String,
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
    pub summary: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    #[serde(rename = "activityTitle")]
    pub activity_title: String,
    pub facts: Vec<Fact>,
}

/// One name/value line inside a card section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fact {
    pub name: String,
    pub value: String,
}

impl Fact {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Fact whose value is an anchor pointing at `url` and showing `url`.
    pub fn link(name: impl Into<String>, url: &str) -> Self {
        Self::new(name, anchor(url))
    }
}

fn anchor(url: &str) -> String {
    format!("<a href=\"{}\">{}</a>", url, url)
}

/// "<site> published new page at <published_at>", timestamp untouched.
pub fn deploy_title(event: &DeployEvent) -> String {
    format!("{} published new page at {}", event.name, event.published_at)
}

impl NotificationCard {
    /// Map a deploy event onto a single-section card with six facts.
    pub fn from_deploy(event: &DeployEvent) -> Self {
        let title = deploy_title(event);

        let facts = vec![
            Fact::link("permalink", &event.links.permalink),
            Fact::link("deploy_url", &event.deploy_ssl_url),
            Fact::new("build_id", event.build_id.as_str()),
            Fact::new("created_at", event.created_at.as_str()),
            Fact::new("published_at", event.published_at.as_str()),
            Fact::new("deploy_time", event.deploy_time.to_string()),
        ];

        Self {
            card_type: CARD_TYPE.to_string(),
            context: CARD_CONTEXT.to_string(),
            theme_color: THEME_COLOR.to_string(),
            summary: title.clone(),
            sections: vec![Section {
                activity_title: title,
                facts,
            }],
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
