//! Maps raw catalog payloads into [`ContentItem`]. Nothing past this module reads
//! the kind-specific wire fields.
use crate::models::{ContentItem, ContentKind, RawItem};

/// Total: every raw item yields a record, missing optional fields stay `None`.
pub fn normalize(raw: RawItem, kind: ContentKind) -> ContentItem {
    let (title, release_date) = match kind {
        ContentKind::Movie => (raw.title.or(raw.name), raw.release_date),
        ContentKind::Series => (raw.name.or(raw.title), raw.first_air_date),
    };
    ContentItem {
        id: raw.id,
        title: title.unwrap_or_default(),
        overview: raw.overview.unwrap_or_default(),
        poster_path: raw.poster_path,
        backdrop_path: raw.backdrop_path,
        vote_average: raw.vote_average,
        release_date,
        kind,
    }
}

pub fn normalize_all(raw: Vec<RawItem>, kind: ContentKind) -> Vec<ContentItem> {
    raw.into_iter().map(|r| normalize(r, kind)).collect()
}

/// Series payloads carry `original_name`; movies don't. A movie that happens to
/// carry the field is tagged as a series.
pub fn infer_kind(raw: &RawItem) -> ContentKind {
    if raw.original_name.is_some() {
        ContentKind::Series
    } else {
        ContentKind::Movie
    }
}
