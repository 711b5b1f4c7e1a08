//! Photo endpoints.
//!
//! # Design
//! Every operation has the same shape: check the required positional
//! argument, merge the caller's options over the operation's defaults, and
//! issue one GET. Each one is split into a `build_*` method that produces
//! the `HttpRequest` with no I/O, and an async method that builds and then
//! hands the request to the client's transport. Validation failures surface
//! from `build_*`, so they always happen before anything touches the network.
//!
//! Merging is explicit: every option struct has a `defaults()` value and a
//! `merge` that keeps the caller's field when set and falls back otherwise.
//! Parameters the structs don't model go in `extra` and are passed through
//! verbatim; an `extra` entry with a known name wins over the typed field.

use crate::client::UnsplashClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, QueryParams};
use crate::types::{OrderBy, Orientation, Resolution};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_STATS_QUANTITY: u32 = 30;

/// Options for `PhotoQuery::search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Collection id(s) to narrow the search, comma-separated.
    pub collections: Option<String>,
    pub orientation: Option<Orientation>,
    pub extra: Vec<(String, String)>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defaults() -> Self {
        Self {
            page: Some(DEFAULT_PAGE),
            per_page: Some(DEFAULT_PER_PAGE),
            collections: None,
            orientation: None,
            extra: Vec::new(),
        }
    }

    pub fn merge(self, defaults: Self) -> Self {
        Self {
            page: self.page.or(defaults.page),
            per_page: self.per_page.or(defaults.per_page),
            collections: self.collections.or(defaults.collections),
            orientation: self.orientation.or(defaults.orientation),
            extra: self.extra,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn collections(mut self, collections: impl Into<String>) -> Self {
        self.collections = Some(collections.into());
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.extra.push((name.into(), value.to_string()));
        self
    }

    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("per_page", self.per_page);
        query.push_opt("page", self.page);
        query.push_opt("collections", self.collections.as_deref());
        query.push_opt("orientation", self.orientation.map(Orientation::as_str));
        query.apply_extra(&self.extra);
        query
    }
}

/// Options for `PhotoQuery::list` and `PhotoQuery::curated`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub order_by: Option<OrderBy>,
    pub extra: Vec<(String, String)>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defaults() -> Self {
        Self {
            page: Some(DEFAULT_PAGE),
            per_page: Some(DEFAULT_PER_PAGE),
            order_by: Some(OrderBy::Latest),
            extra: Vec::new(),
        }
    }

    pub fn merge(self, defaults: Self) -> Self {
        Self {
            page: self.page.or(defaults.page),
            per_page: self.per_page.or(defaults.per_page),
            order_by: self.order_by.or(defaults.order_by),
            extra: self.extra,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.extra.push((name.into(), value.to_string()));
        self
    }

    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("page", self.page);
        query.push_opt("per_page", self.per_page);
        query.push_opt("order_by", self.order_by.map(OrderBy::as_str));
        query.apply_extra(&self.extra);
        query
    }
}

/// Options for `PhotoQuery::get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    /// Image width in pixels.
    pub w: Option<u32>,
    /// Image height in pixels.
    pub h: Option<u32>,
    /// Crop rectangle as `x,y,width,height`.
    pub rect: Option<String>,
    pub extra: Vec<(String, String)>,
}

impl GetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nothing is set by default; the server renders the original size.
    pub fn defaults() -> Self {
        Self::default()
    }

    pub fn merge(self, defaults: Self) -> Self {
        Self {
            w: self.w.or(defaults.w),
            h: self.h.or(defaults.h),
            rect: self.rect.or(defaults.rect),
            extra: self.extra,
        }
    }

    pub fn w(mut self, w: u32) -> Self {
        self.w = Some(w);
        self
    }

    pub fn h(mut self, h: u32) -> Self {
        self.h = Some(h);
        self
    }

    pub fn rect(mut self, x: u32, y: u32, width: u32, height: u32) -> Self {
        self.rect = Some(format!("{x},{y},{width},{height}"));
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.extra.push((name.into(), value.to_string()));
        self
    }

    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("w", self.w);
        query.push_opt("h", self.h);
        query.push_opt("rect", self.rect.as_deref());
        query.apply_extra(&self.extra);
        query
    }
}

/// Options for `PhotoQuery::random`. There are no defaults: only what the
/// caller sets is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomOptions {
    pub collections: Option<String>,
    pub featured: Option<bool>,
    pub username: Option<String>,
    pub query: Option<String>,
    pub w: Option<u32>,
    pub h: Option<u32>,
    pub orientation: Option<Orientation>,
    /// Number of photos to return (server default 1, max 30). When set the
    /// server answers with an array instead of a single object.
    pub count: Option<u32>,
    pub extra: Vec<(String, String)>,
}

impl RandomOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defaults() -> Self {
        Self::default()
    }

    pub fn merge(self, defaults: Self) -> Self {
        Self {
            collections: self.collections.or(defaults.collections),
            featured: self.featured.or(defaults.featured),
            username: self.username.or(defaults.username),
            query: self.query.or(defaults.query),
            w: self.w.or(defaults.w),
            h: self.h.or(defaults.h),
            orientation: self.orientation.or(defaults.orientation),
            count: self.count.or(defaults.count),
            extra: self.extra,
        }
    }

    pub fn collections(mut self, collections: impl Into<String>) -> Self {
        self.collections = Some(collections.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn w(mut self, w: u32) -> Self {
        self.w = Some(w);
        self
    }

    pub fn h(mut self, h: u32) -> Self {
        self.h = Some(h);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.extra.push((name.into(), value.to_string()));
        self
    }

    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("collections", self.collections.as_deref());
        query.push_opt("featured", self.featured);
        query.push_opt("username", self.username.as_deref());
        query.push_opt("query", self.query.as_deref());
        query.push_opt("w", self.w);
        query.push_opt("h", self.h);
        query.push_opt("orientation", self.orientation.map(Orientation::as_str));
        query.push_opt("count", self.count);
        query.apply_extra(&self.extra);
        query
    }
}

/// Options for `PhotoQuery::stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsOptions {
    pub resolution: Option<Resolution>,
    /// Number of buckets to return.
    pub quantity: Option<u32>,
    pub extra: Vec<(String, String)>,
}

impl StatsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defaults() -> Self {
        Self {
            resolution: Some(Resolution::Days),
            quantity: Some(DEFAULT_STATS_QUANTITY),
            extra: Vec::new(),
        }
    }

    pub fn merge(self, defaults: Self) -> Self {
        Self {
            resolution: self.resolution.or(defaults.resolution),
            quantity: self.quantity.or(defaults.quantity),
            extra: self.extra,
        }
    }

    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.extra.push((name.into(), value.to_string()));
        self
    }

    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("resolution", self.resolution.map(Resolution::as_str));
        query.push_opt("quantity", self.quantity);
        query.apply_extra(&self.extra);
        query
    }
}

/// Photo queries bound to an `UnsplashClient`.
///
/// Holds nothing but a reference to the client, used to reach its transport.
#[derive(Debug, Clone, Copy)]
pub struct PhotoQuery<'a> {
    client: &'a UnsplashClient,
}

impl<'a> PhotoQuery<'a> {
    pub(crate) fn new(client: &'a UnsplashClient) -> Self {
        Self { client }
    }

    /// The client this query set belongs to.
    pub fn client(&self) -> &'a UnsplashClient {
        self.client
    }

    pub fn build_search(&self, query: &str, options: SearchOptions) -> Result<HttpRequest, ApiError> {
        require("query", query)?;
        let mut params = options.merge(SearchOptions::defaults()).to_query();
        params.set("query", query);
        Ok(HttpRequest::get("/search/photos", params))
    }

    pub fn build_list(&self, options: ListOptions) -> Result<HttpRequest, ApiError> {
        let params = options.merge(ListOptions::defaults()).to_query();
        if let Some(order_by) = params.get("order_by") {
            order_by.parse::<OrderBy>()?;
        }
        Ok(HttpRequest::get("/photos", params))
    }

    pub fn build_curated(&self, options: ListOptions) -> Result<HttpRequest, ApiError> {
        let params = options.merge(ListOptions::defaults()).to_query();
        Ok(HttpRequest::get("/photos/curated", params))
    }

    pub fn build_get(&self, id: &str, options: GetOptions) -> Result<HttpRequest, ApiError> {
        let segment = photo_segment(id)?;
        let mut params = options.merge(GetOptions::defaults()).to_query();
        params.set("id", id);
        Ok(HttpRequest::get(format!("/photos/{segment}"), params))
    }

    pub fn build_random(&self, options: RandomOptions) -> Result<HttpRequest, ApiError> {
        let params = options.merge(RandomOptions::defaults()).to_query();
        Ok(HttpRequest::get("/photos/random", params))
    }

    pub fn build_stats(&self, id: &str, options: StatsOptions) -> Result<HttpRequest, ApiError> {
        let segment = photo_segment(id)?;
        let mut params = options.merge(StatsOptions::defaults()).to_query();
        params.set("id", id);
        Ok(HttpRequest::get(format!("/photos/{segment}/statistics"), params))
    }

    pub fn build_download(&self, id: &str) -> Result<HttpRequest, ApiError> {
        let segment = photo_segment(id)?;
        Ok(HttpRequest::get(
            format!("/photos/{segment}/download"),
            QueryParams::new(),
        ))
    }

    /// Search photos. The body is an object with `total`, `total_pages`
    /// and `results`.
    ///
    /// # Errors
    /// `ApiError::InvalidArgument` if `query` is empty; otherwise whatever
    /// the transport reports.
    pub async fn search(&self, query: &str, options: SearchOptions) -> Result<HttpResponse, ApiError> {
        let request = self.build_search(query, options)?;
        self.client.send(request).await
    }

    /// The latest photos, as an array.
    ///
    /// # Errors
    /// `ApiError::InvalidArgument` if an `order_by` pass-through parameter
    /// is not latest, oldest or popular.
    pub async fn list(&self, options: ListOptions) -> Result<HttpResponse, ApiError> {
        let request = self.build_list(options)?;
        self.client.send(request).await
    }

    /// Curated photos, as an array.
    pub async fn curated(&self, options: ListOptions) -> Result<HttpResponse, ApiError> {
        let request = self.build_curated(options)?;
        self.client.send(request).await
    }

    /// A single photo by id.
    ///
    /// # Errors
    /// `ApiError::InvalidArgument` if `id` is empty.
    pub async fn get(&self, id: &str, options: GetOptions) -> Result<HttpResponse, ApiError> {
        let request = self.build_get(id, options)?;
        self.client.send(request).await
    }

    /// One random photo, or an array of them when `count` is set.
    pub async fn random(&self, options: RandomOptions) -> Result<HttpResponse, ApiError> {
        let request = self.build_random(options)?;
        self.client.send(request).await
    }

    /// Download, view and like statistics for a photo.
    ///
    /// # Errors
    /// `ApiError::InvalidArgument` if `id` is empty.
    pub async fn stats(&self, id: &str, options: StatsOptions) -> Result<HttpResponse, ApiError> {
        let request = self.build_stats(id, options)?;
        self.client.send(request).await
    }

    /// The download link for a photo.
    ///
    /// # Errors
    /// `ApiError::InvalidArgument` if `id` is empty.
    pub async fn download(&self, id: &str) -> Result<HttpResponse, ApiError> {
        let request = self.build_download(id)?;
        self.client.send(request).await
    }
}

fn require(name: &'static str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::invalid_argument(name, "must be defined"));
    }
    Ok(())
}

/// Percent-encode a photo id so it always occupies exactly one path segment.
/// Dot segments would be collapsed by URL normalization, so they are refused.
fn photo_segment(id: &str) -> Result<String, ApiError> {
    require("id", id)?;
    if id == "." || id == ".." {
        return Err(ApiError::invalid_argument("id", format!("`{id}` is not a photo id")));
    }
    Ok(urlencoding::encode(id).into_owned())
}
