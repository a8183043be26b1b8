use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display, str::FromStr};

pub mod catalog;

pub use catalog::Catalog;

/// Identifier of a catalog item (e.g. "3")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Fixed set of labels a catalog item can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Programming,
    Education,
    Design,
    Business,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Programming,
        Category::Education,
        Category::Design,
        Category::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Programming => "programming",
            Category::Education => "education",
            Category::Design => "design",
            Category::Business => "business",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Channel that published a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    /// Avatar image locator
    pub avatar: String,
    /// Subscriber count, display string (e.g. "2.5M")
    pub subscribers: String,
}

/// An immutable catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail: String,
    /// Display string, e.g. "12:34"
    pub duration: String,
    /// Display string, e.g. "1.2M"
    pub views: String,
    pub likes: u64,
    pub comments: u64,
    /// Display string, e.g. "2 weeks ago"
    pub upload_date: String,
    pub category: Category,
    pub channel: Channel,
}

impl Video {
    /// Case-insensitive match against title, description and channel name.
    ///
    /// An empty query matches every item.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.channel.name.to_lowercase().contains(&needle)
    }
}

/// A record of a user viewing a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEvent {
    pub video_id: VideoId,
    pub category: Category,
    pub watched_at: DateTime<Utc>,
}

impl WatchEvent {
    pub fn new(video_id: VideoId, category: Category, watched_at: DateTime<Utc>) -> Self {
        Self {
            video_id,
            category,
            watched_at,
        }
    }

    /// Event for `video` stamped with the current time
    pub fn now(video: &Video) -> Self {
        Self::new(video.id.clone(), video.category, Utc::now())
    }
}

/// Recency-decayed weight per category, derived from the watch log
pub type InterestWeights = HashMap<Category, u64>;
