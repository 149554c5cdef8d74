use super::{year_of, EpisodeInfo, MetadataProvider, MovieMatch, SeasonInfo, ShowMatch};
use crate::error::Error;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info, warn};

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the TMDB v3 API.
pub struct TmdbClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: TMDB_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// GET `endpoint` and decode the JSON body. Transport, status and decode
    /// failures are logged and turned into `None`.
    fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Option<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let result = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json::<T>());

        match result {
            Ok(body) => Some(body),
            Err(err) => {
                // The URL carries the api key; keep it out of the logs.
                error!("TMDB API request failed for {}: {}", endpoint, err.without_url());
                None
            }
        }
    }
}

impl MetadataProvider for TmdbClient {
    fn search_movie(&self, title: &str) -> Option<MovieMatch> {
        info!("Searching for movie: {}", title);
        let response: SearchResponse<RawMovie> =
            self.get("/search/movie", &[("query", title), ("include_adult", "false")])?;

        match response.results.into_iter().next() {
            Some(raw) => {
                let movie = MovieMatch::from(raw);
                info!("Found movie: {} ({}) [ID: {}]", movie.title, movie.year, movie.id);
                Some(movie)
            }
            None => {
                warn!("No movie found for: {}", title);
                None
            }
        }
    }

    fn search_tv_show(&self, name: &str) -> Option<ShowMatch> {
        info!("Searching for TV show: {}", name);
        let response: SearchResponse<RawShow> = self.get("/search/tv", &[("query", name)])?;

        match response.results.into_iter().next() {
            Some(raw) => {
                let show = ShowMatch::from(raw);
                info!("Found TV show: {} ({}) [ID: {}]", show.name, show.year, show.id);
                Some(show)
            }
            None => {
                warn!("No TV show found for: {}", name);
                None
            }
        }
    }

    fn season_info(&self, show_id: u64, season_number: u32) -> Option<SeasonInfo> {
        info!("Fetching season {} info for show ID: {}", season_number, show_id);
        let endpoint = format!("/tv/{}/season/{}", show_id, season_number);

        match self.get::<RawSeason>(&endpoint, &[]) {
            Some(raw) => {
                let season = SeasonInfo::from(raw);
                info!(
                    "Found {} episodes for season {}",
                    season.episode_count, season_number
                );
                Some(season)
            }
            None => {
                warn!(
                    "No season info found for show ID {}, season {}",
                    show_id, season_number
                );
                None
            }
        }
    }
}

// ── Wire types ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMovie {
    id: u64,
    title: Option<String>,
    original_title: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawShow {
    id: u64,
    name: Option<String>,
    original_name: Option<String>,
    overview: Option<String>,
    first_air_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSeason {
    season_number: Option<u32>,
    name: Option<String>,
    air_date: Option<String>,
    episodes: Vec<RawEpisode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEpisode {
    episode_number: Option<u32>,
    name: Option<String>,
    air_date: Option<String>,
    overview: Option<String>,
    season_number: Option<u32>,
}

impl From<RawMovie> for MovieMatch {
    fn from(raw: RawMovie) -> Self {
        let release_date = raw.release_date.unwrap_or_default();
        MovieMatch {
            title: raw.title.unwrap_or_default(),
            original_title: raw.original_title.unwrap_or_default(),
            year: year_of(&release_date),
            id: raw.id,
            overview: raw.overview.unwrap_or_default(),
            release_date,
        }
    }
}

impl From<RawShow> for ShowMatch {
    fn from(raw: RawShow) -> Self {
        let first_air_date = raw.first_air_date.unwrap_or_default();
        ShowMatch {
            name: raw.name.unwrap_or_default(),
            original_name: raw.original_name.unwrap_or_default(),
            year: year_of(&first_air_date),
            id: raw.id,
            overview: raw.overview.unwrap_or_default(),
            first_air_date,
        }
    }
}

impl From<RawEpisode> for EpisodeInfo {
    fn from(raw: RawEpisode) -> Self {
        let air_date = raw.air_date.unwrap_or_default();
        EpisodeInfo {
            episode_number: raw.episode_number.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            year: year_of(&air_date),
            air_date,
            overview: raw.overview.unwrap_or_default(),
            season_number: raw.season_number.unwrap_or_default(),
        }
    }
}

impl From<RawSeason> for SeasonInfo {
    fn from(raw: RawSeason) -> Self {
        let episodes: Vec<EpisodeInfo> = raw.episodes.into_iter().map(EpisodeInfo::from).collect();
        SeasonInfo {
            season_number: raw.season_number.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            air_date: raw.air_date.unwrap_or_default(),
            episode_count: episodes.len(),
            episodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_search_takes_first_result() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 27205, "title": "Inception", "original_title": "Inception",
                 "overview": "A thief...", "release_date": "2010-07-15"},
                {"id": 1, "title": "Other", "release_date": "1999-01-01"}
            ],
            "total_results": 2
        }"#;
        let response: SearchResponse<RawMovie> = serde_json::from_str(body).unwrap();
        let movie = MovieMatch::from(response.results.into_iter().next().unwrap());

        assert_eq!(movie.id, 27205);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, "2010");
        assert_eq!(movie.release_date, "2010-07-15");
    }

    #[test]
    fn test_missing_dates_become_unknown_year() {
        let body = r#"{"results": [{"id": 7, "name": "Pilot Show", "first_air_date": null}]}"#;
        let response: SearchResponse<RawShow> = serde_json::from_str(body).unwrap();
        let show = ShowMatch::from(response.results.into_iter().next().unwrap());

        assert_eq!(show.name, "Pilot Show");
        assert_eq!(show.original_name, "");
        assert_eq!(show.first_air_date, "");
        assert_eq!(show.year, "Unknown");
    }

    #[test]
    fn test_empty_search_response() {
        let response: SearchResponse<RawMovie> = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_season_mapping() {
        let body = r#"{
            "season_number": 1,
            "name": "Season 1",
            "air_date": "2008-01-20",
            "episodes": [
                {"episode_number": 1, "name": "Pilot", "air_date": "2008-01-20",
                 "overview": "", "season_number": 1},
                {"episode_number": 2, "name": "Cat's in the Bag...", "air_date": "",
                 "season_number": 1}
            ]
        }"#;
        let season = SeasonInfo::from(serde_json::from_str::<RawSeason>(body).unwrap());

        assert_eq!(season.season_number, 1);
        assert_eq!(season.episode_count, 2);
        assert_eq!(season.episodes[0].year, "2008");
        assert_eq!(season.episodes[1].year, "Unknown");
        assert_eq!(season.episodes[1].overview, "");
    }

    #[test]
    fn test_unreachable_upstream_is_absence() {
        // Port 9 (discard) is closed on test machines; the connection is refused.
        let client = TmdbClient::new("test-key")
            .unwrap()
            .with_base_url("http://127.0.0.1:9/3/");
        assert!(client.search_movie("Inception").is_none());
        assert!(client.search_tv_show("Breaking Bad").is_none());
        assert!(client.season_info(1396, 1).is_none());
    }
}
