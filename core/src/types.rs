//! Option enums and response DTOs for the photo API.
//!
//! # Design
//! `OrderBy`, `Orientation` and `Resolution` are closed sets, so a typed
//! option can never carry an unsupported value. Strings coming from outside
//! (pass-through parameters, config files) go through `FromStr`, which is
//! where the membership check happens.
//!
//! The DTOs mirror the documented response shapes. The client itself never
//! parses a response; they exist for `HttpResponse::json`. The mock server
//! defines its own copies and the integration tests catch drift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Sort order for `/photos` and `/photos/curated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Latest,
    Oldest,
    Popular,
}

impl OrderBy {
    pub const ALL: [OrderBy; 3] = [OrderBy::Latest, OrderBy::Oldest, OrderBy::Popular];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderBy::Latest => "latest",
            OrderBy::Oldest => "oldest",
            OrderBy::Popular => "popular",
        }
    }
}

impl FromStr for OrderBy {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderBy::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| {
                ApiError::invalid_argument(
                    "order_by",
                    format!("`{s}` is not one of latest, oldest, popular"),
                )
            })
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Photo orientation filter for search and random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Landscape,
        Orientation::Portrait,
        Orientation::Squarish,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Squarish => "squarish",
        }
    }
}

impl FromStr for Orientation {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| {
                ApiError::invalid_argument(
                    "orientation",
                    format!("`{s}` is not one of landscape, portrait, squarish"),
                )
            })
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistics bucket size. The API only supports daily buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    #[default]
    Days,
}

impl Resolution {
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::Days => "days",
        }
    }
}

impl FromStr for Resolution {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days" => Ok(Resolution::Days),
            other => Err(ApiError::invalid_argument(
                "resolution",
                format!("`{other}` is not supported, only days"),
            )),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image URLs for the sizes the API renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotoUrls {
    pub raw: String,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

/// A photo as returned by list, curated, get, random and search results.
/// Only the fields this crate's callers commonly need; unknown fields are
/// ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub id: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub urls: PhotoUrls,
}

/// Body of `/search/photos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    pub total: u64,
    pub total_pages: u64,
    pub results: Vec<Photo>,
}

/// One statistic (downloads, views, likes) with its historical series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatSeries {
    pub total: u64,
    pub historical: Historical,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Historical {
    pub resolution: Resolution,
    pub quantity: u32,
    pub values: Vec<HistoricalValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoricalValue {
    pub date: String,
    pub value: u64,
}

/// Body of `/photos/{id}/statistics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotoStatistics {
    pub id: String,
    pub downloads: StatSeries,
    pub views: StatSeries,
    pub likes: StatSeries,
}

/// Body of `/photos/{id}/download`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadLink {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_by_parses_known_values() {
        assert_eq!("latest".parse::<OrderBy>().unwrap(), OrderBy::Latest);
        assert_eq!("oldest".parse::<OrderBy>().unwrap(), OrderBy::Oldest);
        assert_eq!("popular".parse::<OrderBy>().unwrap(), OrderBy::Popular);
        assert_eq!(OrderBy::default(), OrderBy::Latest);
    }

    #[test]
    fn order_by_rejects_unknown_values() {
        let err = "trending".parse::<OrderBy>().unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument { name: "order_by", .. }));
        // Membership is exact, not case-insensitive.
        assert!("Latest".parse::<OrderBy>().is_err());
    }

    #[test]
    fn orientation_round_trips_through_str() {
        for o in Orientation::ALL {
            assert_eq!(o.as_str().parse::<Orientation>().unwrap(), o);
        }
        assert!("square".parse::<Orientation>().is_err());
    }

    #[test]
    fn resolution_only_accepts_days() {
        assert_eq!("days".parse::<Resolution>().unwrap(), Resolution::Days);
        let err = "weeks".parse::<Resolution>().unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument { name: "resolution", .. }));
    }

    #[test]
    fn photo_ignores_unknown_fields() {
        let body = r#"{
            "id": "twukN12EN7c",
            "width": 4000,
            "height": 3000,
            "likes": 12,
            "urls": {"raw": "r", "full": "f", "regular": "g", "small": "s", "thumb": "t"}
        }"#;
        let photo: Photo = serde_json::from_str(body).unwrap();
        assert_eq!(photo.id, "twukN12EN7c");
        assert!(photo.color.is_none());
        assert_eq!(photo.urls.thumb, "t");
    }
}
