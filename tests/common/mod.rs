#![allow(dead_code)]

use cinerow::models::{ContentKind, RawItem, RawVideo};
use cinerow::tmdb::{CatalogApi, Category};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory catalog. `None` entries fail with an error.
#[derive(Default)]
pub struct FakeCatalog {
    pub categories: HashMap<Category, Option<Vec<RawItem>>>,
    pub movie_search: Option<Vec<RawItem>>,
    pub series_search: Option<Vec<RawItem>>,
    pub videos: Option<Vec<RawVideo>>,
    pub search_delays: HashMap<String, Duration>,
    pub category_calls: Mutex<Vec<Category>>,
    pub search_calls: Mutex<Vec<(ContentKind, String)>>,
    pub video_calls: Mutex<Vec<(ContentKind, i64)>>,
}

impl FakeCatalog {
    pub fn with_category(mut self, category: Category, items: Vec<RawItem>) -> Self {
        self.categories.insert(category, Some(items));
        self
    }

    pub fn failing_category(mut self, category: Category) -> Self {
        self.categories.insert(category, None);
        self
    }

    pub fn all_failing() -> Self {
        Category::ALL
            .iter()
            .fold(Self::default(), |fake, c| fake.failing_category(*c))
    }

    pub fn dispatched_queries(&self, kind: ContentKind) -> Vec<String> {
        self.search_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, q)| q.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl CatalogApi for FakeCatalog {
    async fn fetch_category(&self, category: Category) -> anyhow::Result<Vec<RawItem>> {
        self.category_calls.lock().unwrap().push(category);
        match self.categories.get(&category) {
            Some(Some(items)) => Ok(items.clone()),
            Some(None) => Err(anyhow::anyhow!("{} -> 503", category.path())),
            None => Ok(Vec::new()),
        }
    }

    async fn search(&self, kind: ContentKind, query: &str) -> anyhow::Result<Vec<RawItem>> {
        self.search_calls
            .lock()
            .unwrap()
            .push((kind, query.to_string()));
        if let Some(delay) = self.search_delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        let source = match kind {
            ContentKind::Movie => &self.movie_search,
            ContentKind::Series => &self.series_search,
        };
        source
            .clone()
            .ok_or_else(|| anyhow::anyhow!("search/{} -> timeout", kind.api_segment()))
    }

    async fn fetch_videos(&self, kind: ContentKind, id: i64) -> anyhow::Result<Vec<RawVideo>> {
        self.video_calls.lock().unwrap().push((kind, id));
        self.videos
            .clone()
            .ok_or_else(|| anyhow::anyhow!("videos -> 404"))
    }
}

pub fn movie(id: i64, title: &str) -> RawItem {
    RawItem {
        id,
        title: Some(title.to_string()),
        overview: Some(format!("{title} overview")),
        poster_path: Some(format!("/{id}.jpg")),
        vote_average: Some(7.0),
        release_date: Some("2024-03-01".to_string()),
        ..RawItem::default()
    }
}

pub fn show(id: i64, name: &str) -> RawItem {
    RawItem {
        id,
        name: Some(name.to_string()),
        original_name: Some(name.to_string()),
        overview: Some(format!("{name} overview")),
        first_air_date: Some("2023-10-05".to_string()),
        ..RawItem::default()
    }
}

pub fn video(video_type: &str, site: &str, key: &str) -> RawVideo {
    RawVideo {
        key: key.to_string(),
        site: site.to_string(),
        video_type: video_type.to_string(),
    }
}
