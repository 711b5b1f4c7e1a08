//! Async client for the Unsplash photo API.
//!
//! # Overview
//! `UnsplashClient` holds an access key and one HTTP transport configured
//! with the API base URL, a fixed timeout and the `Client-ID` authorization
//! header. `client.photos()` exposes the photo endpoints (search, list,
//! curated, get, random, stats, download). Responses come back unmodified.
//!
//! # Design
//! - Each endpoint has a pure `build_*` step producing an `HttpRequest` and
//!   an async step that sends it, so argument checks never reach the network.
//! - Options are typed structs merged over per-endpoint defaults; anything
//!   not modeled passes through as a raw query parameter.
//! - `Transport` is the I/O seam. `ReqwestTransport` is the default.
//! - No retries, caching or pagination helpers.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod photos;
pub mod transport;
pub mod types;

pub use client::UnsplashClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, QueryParams};
pub use photos::{GetOptions, ListOptions, PhotoQuery, RandomOptions, SearchOptions, StatsOptions};
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    DownloadLink, Historical, HistoricalValue, OrderBy, Orientation, Photo, PhotoStatistics, PhotoUrls, Resolution,
    SearchResults, StatSeries,
};
