//! Built-in catalog used when every live category comes back empty.
use crate::models::{Catalog, CategoryRow, ContentItem, ContentKind};
use once_cell::sync::Lazy;

pub const FALLBACK_ROW_LABEL: &str = "Popular on Cinerow";

static FALLBACK_ITEMS: Lazy<Vec<ContentItem>> = Lazy::new(|| {
    vec![
        entry(1, "Stranger Things", "When a young boy vanishes, a small town uncovers a mystery involving secret experiments, terrifying supernatural forces and one strange little girl.", "/49WJfeN0moxb9IPfGn8AIqMGskD.jpg", "/56v2KjBlU4XaOv9rVYEQypROD7P.jpg", 8.6, "2016-07-15", ContentKind::Series),
        entry(2, "The Irishman", "Pennsylvania, 1956. Frank Sheeran, a war veteran of Irish origin who works as a truck driver, accidentally meets mobster Russell Bufalino.", "/mbm8k3GFhXS0ROd9AD1gqYbIFbM.jpg", "/6mc6Cxg6r3Dz5CLy9PJEgJD1aNh.jpg", 7.6, "2019-11-01", ContentKind::Movie),
        entry(3, "The Crown", "The gripping, decades-spanning inside story of Her Majesty Queen Elizabeth II and the Prime Ministers who shaped Britain's post-war destiny.", "/1M876KPjulVwppEpldhdc8V4o68.jpg", "/9iAmB9tH5s6S4xx6Q7FQyakjx8K.jpg", 8.2, "2016-11-04", ContentKind::Series),
        entry(4, "Roma", "In 1970s Mexico City, two domestic workers help a mother of four while her husband is away for an extended period of time.", "/dtIIyQyALk57ko5bjac7hi01YQ.jpg", "/uyJgTzAsp3Za2TaPiZt2yaKYRIR.jpg", 7.7, "2018-11-21", ContentKind::Movie),
        entry(5, "Money Heist", "To carry out the biggest heist in history, a mysterious man called The Professor recruits a band of eight robbers.", "/reEMJA1uzscCbkpeRJeTT2bjqUp.jpg", "/gFZriCkpJYsApPZEF3jhxL4yLzG.jpg", 8.2, "2017-05-02", ContentKind::Series),
        entry(6, "Marriage Story", "A stage director and his actor wife struggle through a grueling, coast-to-coast divorce that pushes them to their personal extremes.", "/2JRyCKaRKyJAVpsIHeLvPw5nHmw.jpg", "/jauI01vUIkPA0xVsamGj0Gs1nNL.jpg", 7.7, "2019-11-06", ContentKind::Movie),
        entry(7, "The Witcher", "Geralt of Rivia, a mutated monster-hunter for hire, journeys toward his destiny in a turbulent world where people often prove more wicked than beasts.", "/7vjaCdMw15FEbXyLQTVa04URsPm.jpg", "/jBJWaqoSCiARWtfV0GlqHrcdidd.jpg", 8.1, "2019-12-20", ContentKind::Series),
        entry(8, "Extraction", "Tyler Rake, a fearless mercenary who offers his services on the black market, embarks on a dangerous mission to rescue a kidnapped boy.", "/nygOUcBKPHFTbxsYRFZVePqgPK6.jpg", "/1R6cvRtZgsYCkh8UFuWFN33xBP4.jpg", 7.3, "2020-04-24", ContentKind::Movie),
        entry(9, "Dark", "A missing child causes four families to help each other for answers. What they could not imagine is that this mystery would be connected to innumerable other secrets of the small town.", "/apbrbWs8M9lyOpJYU5WXrpFbk1Z.jpg", "/3lBDg3i6nn5R2NKFCJ6oKyUo2j5.jpg", 8.4, "2017-12-01", ContentKind::Series),
        entry(10, "The Old Guard", "Four undying warriors who've secretly protected humanity for centuries become targeted for their mysterious powers just as they discover a new immortal.", "/cjr4NWURcVN3gW5FlHeabgBHLrY.jpg", "/m0ObOaJBerZ3Unc74l471ar8Iiy.jpg", 7.2, "2020-07-10", ContentKind::Movie),
    ]
});

#[allow(clippy::too_many_arguments)]
fn entry(
    id: i64,
    title: &str,
    overview: &str,
    poster: &str,
    backdrop: &str,
    rating: f64,
    date: &str,
    kind: ContentKind,
) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        overview: overview.to_string(),
        poster_path: Some(poster.to_string()),
        backdrop_path: Some(backdrop.to_string()),
        vote_average: Some(rating),
        release_date: Some(date.to_string()),
        kind,
    }
}

pub fn fallback_items() -> &'static [ContentItem] {
    &FALLBACK_ITEMS
}

/// Featured is always the first built-in item; one row holds all of them.
pub fn fallback_catalog(degraded: bool) -> Catalog {
    let items = fallback_items().to_vec();
    let featured = items.first().cloned();
    Catalog {
        featured,
        rows: CategoryRow::new(FALLBACK_ROW_LABEL, items).into_iter().collect(),
        degraded,
        from_fallback: true,
    }
}
