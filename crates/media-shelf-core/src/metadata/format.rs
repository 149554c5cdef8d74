use super::{EpisodeLookup, MovieMatch, SearchHit, ShowMatch};
use std::fmt;

pub const NO_RESULTS: &str = "No results found in TMDB.";

/// Human-readable summary of a lookup result, or [`NO_RESULTS`].
pub fn describe<T: fmt::Display>(result: Option<&T>) -> String {
    match result {
        Some(value) => value.to_string(),
        None => NO_RESULTS.to_string(),
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "Unknown"
    } else {
        value
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

impl fmt::Display for MovieMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Movie: {} ({})", self.title, self.year)?;
        writeln!(f, "Original Title: {}", or_na(&self.original_title))?;
        writeln!(f, "Release Date: {}", or_unknown(&self.release_date))?;
        write!(f, "TMDB ID: {}", self.id)
    }
}

impl fmt::Display for ShowMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TV Show: {} ({})", self.name, self.year)?;
        writeln!(f, "Original Name: {}", or_na(&self.original_name))?;
        writeln!(f, "First Air Date: {}", or_unknown(&self.first_air_date))?;
        write!(f, "TMDB ID: {}", self.id)
    }
}

impl fmt::Display for EpisodeLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Show: {} ({})", self.show_name, self.show_year)?;
        writeln!(f, "Season {} Episodes:", self.season_number)?;
        for ep in &self.episodes {
            writeln!(
                f,
                "  E{:02}: {} (Aired: {})",
                ep.episode_number,
                ep.name,
                or_unknown(&ep.air_date)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchHit::Movie(movie) => fmt::Display::fmt(movie, f),
            SearchHit::Show(show) => fmt::Display::fmt(show, f),
        }
    }
}
