//! Run the catalog pipeline against the live API and print what the front end would get.
//! Usage:
//!   cargo run --bin catalog_props -- catalog
//!   cargo run --bin catalog_props -- search <query>
//!   cargo run --bin catalog_props -- trailer <movie|series> <tmdb_id>
//! Requires TMDB_API_KEY in the environment (.env supported).

use anyhow::{bail, Context, Result};
use cinerow::aggregate::load_catalog;
use cinerow::models::{ContentItem, ContentKind};
use cinerow::search::search;
use cinerow::tmdb::TmdbClient;
use cinerow::trailer::resolve_trailer;
use dotenvy::dotenv;
use serde_json::json;
use std::env;

fn parse_kind(s: &str) -> Result<ContentKind> {
    match s.to_lowercase().as_str() {
        "movie" => Ok(ContentKind::Movie),
        "series" | "tv" => Ok(ContentKind::Series),
        _ => bail!("kind must be 'movie' or 'series'"),
    }
}

fn summary(item: &ContentItem) -> serde_json::Value {
    json!({
        "id": item.id,
        "title": item.title,
        "kind": item.kind.display_label(),
        "year": item.release_year(),
        "rating": item.vote_average,
        "poster": item.poster_url(),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args: Vec<String> = env::args().skip(1).collect();
    let client = TmdbClient::from_env()?;

    let output = match args.first().map(String::as_str) {
        Some("catalog") => {
            let catalog = load_catalog(&client).await;
            json!({
                "featured": catalog.featured.as_ref().map(summary),
                "degraded": catalog.degraded,
                "from_fallback": catalog.from_fallback,
                "rows": catalog.rows.iter().map(|r| json!({
                    "label": r.label,
                    "count": r.items.len(),
                    "first": r.items.first().map(summary),
                })).collect::<Vec<_>>(),
            })
        }
        Some("search") => {
            let query = args[1..].join(" ");
            let result = search(&client, &query).await;
            json!({
                "query": query,
                "count": result.len(),
                "items": result.items.iter().map(summary).collect::<Vec<_>>(),
            })
        }
        Some("trailer") => {
            let kind = parse_kind(args.get(1).context("missing kind")?)?;
            let id: i64 = args
                .get(2)
                .context("missing id")?
                .parse()
                .context("id must be numeric")?;
            let item = ContentItem {
                id,
                title: format!("#{id}"),
                overview: String::new(),
                poster_path: None,
                backdrop_path: None,
                vote_average: None,
                release_date: None,
                kind,
            };
            let selection = resolve_trailer(&client, item).await;
            json!({
                "key": selection.video_key,
                "embed": selection.embed_url(),
            })
        }
        _ => bail!("usage: catalog_props <catalog|search <query>|trailer <kind> <id>>"),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
