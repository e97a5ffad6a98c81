use crate::models::{ContentKind, RawItem, RawVideo, ResultsPage};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::debug;

pub const TMDB_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const ORIGINALS_NETWORK: u32 = 213;

/// The fixed home-screen categories, in row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Originals,
    TrendingMovies,
    PopularMovies,
    PopularSeries,
    TopRatedMovies,
    TrendingSeries,
    UpcomingMovies,
    TopRatedSeries,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Originals,
        Category::TrendingMovies,
        Category::PopularMovies,
        Category::PopularSeries,
        Category::TopRatedMovies,
        Category::TrendingSeries,
        Category::UpcomingMovies,
        Category::TopRatedSeries,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Category::Originals => "/discover/tv",
            Category::TrendingMovies => "/trending/movie/day",
            Category::PopularMovies => "/movie/popular",
            Category::PopularSeries => "/tv/popular",
            Category::TopRatedMovies => "/movie/top_rated",
            Category::TrendingSeries => "/trending/tv/day",
            Category::UpcomingMovies => "/movie/upcoming",
            Category::TopRatedSeries => "/tv/top_rated",
        }
    }

    /// Extra query parameters beyond key and language.
    pub fn extra_query(self) -> Option<String> {
        match self {
            Category::Originals => Some(format!("with_networks={ORIGINALS_NETWORK}")),
            _ => None,
        }
    }

    pub fn kind(self) -> ContentKind {
        match self {
            Category::Originals
            | Category::PopularSeries
            | Category::TrendingSeries
            | Category::TopRatedSeries => ContentKind::Series,
            Category::TrendingMovies
            | Category::PopularMovies
            | Category::TopRatedMovies
            | Category::UpcomingMovies => ContentKind::Movie,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Originals => "Originals",
            Category::TrendingMovies => "Trending Now",
            Category::PopularMovies => "Popular Movies",
            Category::PopularSeries => "Popular TV Shows",
            Category::TopRatedMovies => "Top Rated Movies",
            Category::TrendingSeries => "Trending TV Shows",
            Category::UpcomingMovies => "Coming Soon",
            Category::TopRatedSeries => "Top Rated TV Shows",
        }
    }
}

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_category(&self, category: Category) -> Result<Vec<RawItem>>;
    async fn search(&self, kind: ContentKind, query: &str) -> Result<Vec<RawItem>>;
    async fn fetch_videos(&self, kind: ContentKind, id: i64) -> Result<Vec<RawVideo>>;
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
    language: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        })
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        let api_key = env::var("TMDB_API_KEY").context("TMDB_API_KEY not set")?;
        let base_url = env::var("TMDB_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| TMDB_BASE.to_string());
        let client = Self::new(api_key, base_url)?;
        Ok(match env::var("TMDB_LANGUAGE") {
            Ok(lang) if !lang.is_empty() => client.with_language(lang),
            _ => client,
        })
    }

    fn url(&self, path: &str, extra: Option<&str>) -> String {
        self.url_with_key(path, extra, &self.api_key)
    }

    /// Same URL with the key masked, for logs and error messages.
    fn display_url(&self, path: &str, extra: Option<&str>) -> String {
        self.url_with_key(path, extra, "***")
    }

    fn url_with_key(&self, path: &str, extra: Option<&str>, key: &str) -> String {
        let mut url = format!(
            "{}{path}?api_key={key}&language={}",
            self.base_url, self.language
        );
        if let Some(extra) = extra {
            url.push('&');
            url.push_str(extra);
        }
        url
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        extra: Option<&str>,
    ) -> Result<T> {
        let shown = self.display_url(path, extra);
        debug!("GET {}", shown);
        // reqwest errors embed the full request URL, key included.
        let res = self
            .client
            .get(self.url(path, extra))
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("request failed: {shown}"))?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("reading body failed: {shown}"))?;
        if !status.is_success() {
            return Err(anyhow!("{} -> {}: {}", shown, status, text));
        }
        let parsed: T = serde_json::from_str(&text).context("JSON parse failed")?;
        Ok(parsed)
    }
}

#[async_trait]
impl CatalogApi for TmdbClient {
    async fn fetch_category(&self, category: Category) -> Result<Vec<RawItem>> {
        let extra = category.extra_query();
        let page: ResultsPage<RawItem> = self
            .get_json(category.path(), extra.as_deref())
            .await?;
        Ok(page.results)
    }

    async fn search(&self, kind: ContentKind, query: &str) -> Result<Vec<RawItem>> {
        let path = format!("/search/{}", kind.api_segment());
        let extra = format!("query={}", urlencoding::encode(query));
        let page: ResultsPage<RawItem> = self.get_json(&path, Some(&extra)).await?;
        Ok(page.results)
    }

    async fn fetch_videos(&self, kind: ContentKind, id: i64) -> Result<Vec<RawVideo>> {
        let path = format!("/{}/{id}/videos", kind.api_segment());
        let page: ResultsPage<RawVideo> = self.get_json(&path, None).await?;
        Ok(page.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_table_matches_row_order() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                "Originals",
                "Trending Now",
                "Popular Movies",
                "Popular TV Shows",
                "Top Rated Movies",
                "Trending TV Shows",
                "Coming Soon",
                "Top Rated TV Shows",
            ]
        );
        let series = Category::ALL
            .iter()
            .filter(|c| c.kind() == ContentKind::Series)
            .count();
        assert_eq!(series, 4);
    }

    #[test]
    fn originals_is_a_network_filtered_series_query() {
        assert_eq!(Category::Originals.path(), "/discover/tv");
        assert_eq!(
            Category::Originals.extra_query().as_deref(),
            Some("with_networks=213")
        );
        assert_eq!(Category::PopularMovies.extra_query(), None);
    }

    #[test]
    fn builds_urls_with_key_language_and_extras() {
        let client = TmdbClient::new("k3y", "http://localhost:9/3/").unwrap();
        assert_eq!(
            client.url("/movie/popular", None),
            "http://localhost:9/3/movie/popular?api_key=k3y&language=en-US"
        );
        assert_eq!(
            client.url("/search/tv", Some("query=a%20b")),
            "http://localhost:9/3/search/tv?api_key=k3y&language=en-US&query=a%20b"
        );
    }

    #[test]
    fn display_url_masks_only_the_key_value() {
        let client = TmdbClient::new("k", "http://localhost:9/3").unwrap();
        assert_eq!(
            client.display_url("/search/movie", Some("query=k")),
            "http://localhost:9/3/search/movie?api_key=***&language=en-US&query=k"
        );
    }
}
