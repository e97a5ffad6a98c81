use crate::fallback::fallback_catalog;
use crate::models::{Catalog, CategoryRow, ContentItem, RawItem};
use crate::normalize::{infer_kind, normalize, normalize_all};
use crate::tmdb::{CatalogApi, Category};
use tracing::{info, warn};

/// Categories consulted for the hero slot, highest priority first.
const FEATURED_PRIORITY: [Category; 3] = [
    Category::Originals,
    Category::TrendingMovies,
    Category::PopularMovies,
];

/// Fetches every category concurrently and assembles the home screen.
/// Never fails: failed categories count as empty and set `degraded`.
pub async fn load_catalog(api: &dyn CatalogApi) -> Catalog {
    let [c0, c1, c2, c3, c4, c5, c6, c7] = Category::ALL;
    let results = tokio::join!(
        fetch_settled(api, c0),
        fetch_settled(api, c1),
        fetch_settled(api, c2),
        fetch_settled(api, c3),
        fetch_settled(api, c4),
        fetch_settled(api, c5),
        fetch_settled(api, c6),
        fetch_settled(api, c7),
    );
    let fetched = vec![
        results.0, results.1, results.2, results.3, results.4, results.5, results.6, results.7,
    ];

    let degraded = fetched.iter().any(|f| f.failed);
    let featured = select_featured(&fetched);

    let rows: Vec<CategoryRow> = fetched
        .into_iter()
        .filter_map(|f| {
            CategoryRow::new(
                f.category.label(),
                normalize_all(f.items, f.category.kind()),
            )
        })
        .collect();

    if rows.is_empty() {
        warn!("All catalog categories empty, serving built-in catalog");
        return fallback_catalog(degraded);
    }

    info!(
        "Catalog loaded: {} rows, featured={:?}, degraded={}",
        rows.len(),
        featured.as_ref().map(|f| f.title.as_str()),
        degraded
    );
    Catalog {
        featured,
        rows,
        degraded,
        from_fallback: false,
    }
}

struct Fetched {
    category: Category,
    items: Vec<RawItem>,
    failed: bool,
}

async fn fetch_settled(api: &dyn CatalogApi, category: Category) -> Fetched {
    match api.fetch_category(category).await {
        Ok(items) => Fetched {
            category,
            items,
            failed: false,
        },
        Err(e) => {
            warn!("Category '{}' failed: {:#}", category.label(), e);
            Fetched {
                category,
                items: Vec::new(),
                failed: true,
            }
        }
    }
}

fn select_featured(fetched: &[Fetched]) -> Option<ContentItem> {
    FEATURED_PRIORITY.iter().find_map(|wanted| {
        fetched
            .iter()
            .find(|f| f.category == *wanted)
            .and_then(|f| f.items.first())
            .map(|raw| normalize(raw.clone(), infer_kind(raw)))
    })
}
