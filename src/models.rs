use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";
const BACKDROP_BASE: &str = "https://image.tmdb.org/t/p/original";
const EMBED_BASE: &str = "https://www.youtube.com/embed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Series,
}

impl ContentKind {
    /// Path segment the catalog API uses for this kind.
    pub fn api_segment(self) -> &'static str {
        match self {
            ContentKind::Movie => "movie",
            ContentKind::Series => "tv",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            ContentKind::Movie => "Movie",
            ContentKind::Series => "TV Series",
        }
    }
}

/// Unified movie/series record. API payloads reach it through
/// [`crate::normalize::normalize`]; the built-in catalog and `/trailer` request
/// bodies construct it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
    pub kind: ContentKind,
}

impl ContentItem {
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|p| format!("{POSTER_BASE}{p}"))
    }

    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_ref()
            .map(|p| format!("{BACKDROP_BASE}{p}"))
    }

    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// A labelled row of items. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub label: String,
    pub items: Vec<ContentItem>,
}

impl CategoryRow {
    /// Returns `None` for an empty item list so empty rows can't be built.
    pub fn new(label: impl Into<String>, items: Vec<ContentItem>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            label: label.into(),
            items,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub featured: Option<ContentItem>,
    pub rows: Vec<CategoryRow>,
    /// Set when at least one category request failed.
    pub degraded: bool,
    pub from_fallback: bool,
}

/// Movie matches first, then series matches, capped at [`SearchResult::MAX_ITEMS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResult {
    pub items: Vec<ContentItem>,
}

impl SearchResult {
    pub const MAX_ITEMS: usize = 20;

    pub fn merge(movies: Vec<ContentItem>, series: Vec<ContentItem>) -> Self {
        let items = movies
            .into_iter()
            .chain(series)
            .take(Self::MAX_ITEMS)
            .collect();
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailerSelection {
    pub item: ContentItem,
    pub video_key: String,
}

impl TrailerSelection {
    pub fn embed_url(&self) -> String {
        format!(
            "{EMBED_BASE}/{}?autoplay=1&rel=0&modestbranding=1",
            self.video_key
        )
    }
}

/// Catalog API item as it comes off the wire. Movies carry `title`/`release_date`,
/// series carry `name`/`first_air_date`/`original_name`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawItem {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawVideo {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub video_type: String,
}

/// `{ "results": [...] }` envelope shared by list, search and video endpoints.
#[derive(Debug, Deserialize)]
pub struct ResultsPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, kind: ContentKind) -> ContentItem {
        ContentItem {
            id,
            title: format!("Item {id}"),
            overview: String::new(),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
            vote_average: Some(7.5),
            release_date: Some("2021-09-17".to_string()),
            kind,
        }
    }

    #[test]
    fn builds_image_urls_from_relative_paths() {
        let it = item(1, ContentKind::Movie);
        assert_eq!(
            it.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
        assert_eq!(it.backdrop_url(), None);
    }

    #[test]
    fn release_year_ignores_malformed_dates() {
        let mut it = item(1, ContentKind::Series);
        assert_eq!(it.release_year(), Some(2021));
        it.release_date = Some(String::new());
        assert_eq!(it.release_year(), None);
        it.release_date = None;
        assert_eq!(it.release_year(), None);
    }

    #[test]
    fn empty_rows_are_never_built() {
        assert!(CategoryRow::new("Empty", Vec::new()).is_none());
        let row = CategoryRow::new("One", vec![item(1, ContentKind::Movie)]).unwrap();
        assert_eq!(row.items.len(), 1);
    }

    #[test]
    fn merge_keeps_movies_first_and_caps() {
        let movies = (0..15).map(|i| item(i, ContentKind::Movie)).collect();
        let series = (100..115).map(|i| item(i, ContentKind::Series)).collect();
        let merged = SearchResult::merge(movies, series);
        assert_eq!(merged.len(), SearchResult::MAX_ITEMS);
        assert!(merged.items[..15].iter().all(|i| i.kind == ContentKind::Movie));
        assert!(merged.items[15..].iter().all(|i| i.kind == ContentKind::Series));
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&ContentKind::Series).unwrap();
        assert_eq!(json, "\"series\"");
    }

    #[test]
    fn missing_results_array_is_empty() {
        let page: ResultsPage<RawItem> = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
    }
}
