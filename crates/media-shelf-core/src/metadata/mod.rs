//! Movie and TV identification lookups.
//!
//! Lookups are sequential request/response calls with no retry and no cache.
//! Both "nothing matched" and "the request failed" come back as `None`; the
//! difference only shows up in the logs.

mod format;
mod tmdb;

pub use format::{describe, NO_RESULTS};
pub use tmdb::{TmdbClient, TMDB_BASE_URL};

use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieMatch {
    pub title: String,
    pub original_title: String,
    /// First four characters of `release_date`, or `"Unknown"`.
    pub year: String,
    pub id: u64,
    pub overview: String,
    pub release_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowMatch {
    pub name: String,
    pub original_name: String,
    pub year: String,
    pub id: u64,
    pub overview: String,
    pub first_air_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeInfo {
    pub episode_number: u32,
    pub name: String,
    pub air_date: String,
    pub year: String,
    pub overview: String,
    pub season_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonInfo {
    pub season_number: u32,
    pub name: String,
    pub air_date: String,
    pub episodes: Vec<EpisodeInfo>,
    pub episode_count: usize,
}

/// A show together with one season's (or one episode's) details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeLookup {
    pub show_name: String,
    pub show_year: String,
    pub show_id: u64,
    pub season_number: u32,
    pub episodes: Vec<EpisodeInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Tv,
}

impl From<&str> for MediaKind {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tv" | "tv_show" => MediaKind::Tv,
            _ => MediaKind::Movie,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaQuery {
    pub kind: MediaKind,
    pub name: String,
}

impl MediaQuery {
    pub fn new(kind: impl Into<MediaKind>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchHit {
    Movie(MovieMatch),
    Show(ShowMatch),
}

pub trait MetadataProvider {
    /// Best (first) movie match for a free-text title.
    fn search_movie(&self, title: &str) -> Option<MovieMatch>;

    /// Best (first) show match for a free-text name.
    fn search_tv_show(&self, name: &str) -> Option<ShowMatch>;

    fn season_info(&self, show_id: u64, season_number: u32) -> Option<SeasonInfo>;

    /// Resolve a show by name, then fetch one season. With `episode_number`
    /// the result is narrowed to that single episode, and a missing episode
    /// yields `None`.
    fn episode_info(
        &self,
        show_name: &str,
        season_number: u32,
        episode_number: Option<u32>,
    ) -> Option<EpisodeLookup> {
        let show = self.search_tv_show(show_name)?;
        let season = self.season_info(show.id, season_number)?;

        let episodes = match episode_number {
            Some(number) => {
                let episodes: Vec<EpisodeInfo> = season
                    .episodes
                    .into_iter()
                    .filter(|ep| ep.episode_number == number)
                    .collect();
                if episodes.is_empty() {
                    warn!("Episode {} not found in season {}", number, season_number);
                    return None;
                }
                episodes
            }
            None => season.episodes,
        };

        Some(EpisodeLookup {
            show_name: show.name,
            show_year: show.year,
            show_id: show.id,
            season_number: season.season_number,
            episodes,
        })
    }

    /// Run each query in order. Empty names produce `None` without a request.
    fn batch_search(&self, queries: &[MediaQuery]) -> Vec<Option<SearchHit>> {
        queries
            .iter()
            .map(|query| {
                if query.name.is_empty() {
                    return None;
                }
                match query.kind {
                    MediaKind::Tv => self.search_tv_show(&query.name).map(SearchHit::Show),
                    MediaKind::Movie => self.search_movie(&query.name).map(SearchHit::Movie),
                }
            })
            .collect()
    }
}

/// Leading four characters of a TMDB date, or `"Unknown"` when it is empty.
pub(crate) fn year_of(date: &str) -> String {
    if date.is_empty() {
        "Unknown".to_string()
    } else {
        date.chars().take(4).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn episode(number: u32, name: &str) -> EpisodeInfo {
        EpisodeInfo {
            episode_number: number,
            name: name.to_string(),
            air_date: "2008-01-20".to_string(),
            year: "2008".to_string(),
            overview: String::new(),
            season_number: 1,
        }
    }

    /// Canned provider that records which lookups were made.
    struct FakeProvider {
        calls: RefCell<Vec<String>>,
    }

    impl FakeProvider {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl MetadataProvider for FakeProvider {
        fn search_movie(&self, title: &str) -> Option<MovieMatch> {
            self.calls.borrow_mut().push(format!("movie:{title}"));
            (title == "Inception").then(|| MovieMatch {
                title: "Inception".to_string(),
                original_title: "Inception".to_string(),
                year: "2010".to_string(),
                id: 27205,
                overview: String::new(),
                release_date: "2010-07-15".to_string(),
            })
        }

        fn search_tv_show(&self, name: &str) -> Option<ShowMatch> {
            self.calls.borrow_mut().push(format!("tv:{name}"));
            (name == "Breaking Bad").then(|| ShowMatch {
                name: "Breaking Bad".to_string(),
                original_name: "Breaking Bad".to_string(),
                year: "2008".to_string(),
                id: 1396,
                overview: String::new(),
                first_air_date: "2008-01-20".to_string(),
            })
        }

        fn season_info(&self, show_id: u64, season_number: u32) -> Option<SeasonInfo> {
            self.calls
                .borrow_mut()
                .push(format!("season:{show_id}:{season_number}"));
            (season_number == 1).then(|| SeasonInfo {
                season_number: 1,
                name: "Season 1".to_string(),
                air_date: "2008-01-20".to_string(),
                episodes: vec![episode(1, "Pilot"), episode(2, "Cat's in the Bag...")],
                episode_count: 2,
            })
        }
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2010-07-15"), "2010");
        assert_eq!(year_of(""), "Unknown");
        assert_eq!(year_of("19"), "19");
    }

    #[test]
    fn test_media_kind_from_str() {
        assert_eq!(MediaKind::from("tv"), MediaKind::Tv);
        assert_eq!(MediaKind::from("TV_SHOW"), MediaKind::Tv);
        assert_eq!(MediaKind::from("movie"), MediaKind::Movie);
        assert_eq!(MediaKind::from("documentary"), MediaKind::Movie);
    }

    #[test]
    fn test_episode_info_whole_season() {
        let provider = FakeProvider::new();
        let lookup = provider.episode_info("Breaking Bad", 1, None).unwrap();
        assert_eq!(lookup.show_id, 1396);
        assert_eq!(lookup.show_year, "2008");
        assert_eq!(lookup.season_number, 1);
        assert_eq!(lookup.episodes.len(), 2);
        assert_eq!(
            *provider.calls.borrow(),
            vec!["tv:Breaking Bad".to_string(), "season:1396:1".to_string()]
        );
    }

    #[test]
    fn test_episode_info_single_episode() {
        let provider = FakeProvider::new();
        let lookup = provider.episode_info("Breaking Bad", 1, Some(2)).unwrap();
        assert_eq!(lookup.episodes.len(), 1);
        assert_eq!(lookup.episodes[0].name, "Cat's in the Bag...");
    }

    #[test]
    fn test_episode_info_absent_cases() {
        let provider = FakeProvider::new();
        assert!(provider.episode_info("Breaking Bad", 1, Some(9)).is_none());
        assert!(provider.episode_info("Breaking Bad", 7, None).is_none());

        let provider = FakeProvider::new();
        assert!(provider.episode_info("Unknown Show", 1, None).is_none());
        // No season request once the show lookup comes back empty.
        assert_eq!(provider.calls.borrow().len(), 1);
    }

    #[test]
    fn test_batch_search_preserves_order_and_skips_empty_names() {
        let provider = FakeProvider::new();
        let queries = vec![
            MediaQuery::new("movie", "Inception"),
            MediaQuery::new("tv", ""),
            MediaQuery::new("tv_show", "Breaking Bad"),
            MediaQuery::new("movie", "Nothing Here"),
        ];
        let results = provider.batch_search(&queries);

        assert_eq!(results.len(), 4);
        assert!(matches!(&results[0], Some(SearchHit::Movie(m)) if m.id == 27205));
        assert!(results[1].is_none());
        assert!(matches!(&results[2], Some(SearchHit::Show(s)) if s.id == 1396));
        assert!(results[3].is_none());
        assert_eq!(provider.calls.borrow().len(), 3);
    }
}
