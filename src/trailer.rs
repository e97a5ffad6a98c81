use crate::models::{ContentItem, RawVideo, TrailerSelection};
use crate::tmdb::CatalogApi;
use tracing::{debug, warn};

pub const FALLBACK_VIDEO_KEY: &str = "dQw4w9WgXcQ";
const TRAILER_TYPE: &str = "Trailer";
const VIDEO_SITE: &str = "YouTube";

/// Always resolves: no match or a failed lookup yields [`FALLBACK_VIDEO_KEY`].
pub async fn resolve_trailer(api: &dyn CatalogApi, item: ContentItem) -> TrailerSelection {
    let key = match api.fetch_videos(item.kind, item.id).await {
        Ok(videos) => select_trailer(&videos),
        Err(e) => {
            warn!("Video lookup for '{}' failed: {:#}", item.title, e);
            None
        }
    };
    let video_key = key.unwrap_or_else(|| {
        debug!("No trailer for '{}', using fallback clip", item.title);
        FALLBACK_VIDEO_KEY.to_string()
    });
    TrailerSelection { item, video_key }
}

/// First trailer hosted on YouTube, in API order. A blank key on that entry counts
/// as no trailer; later entries are not consulted.
pub fn select_trailer(videos: &[RawVideo]) -> Option<String> {
    videos
        .iter()
        .find(|v| v.video_type == TRAILER_TYPE && v.site == VIDEO_SITE)
        .filter(|v| !v.key.is_empty())
        .map(|v| v.key.clone())
}
