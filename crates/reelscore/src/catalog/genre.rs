use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-specific genre identifier (TMDB numbering).
pub type GenreId = u32;

/// Canonical genre keys used to select criteria and descriptive metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    Western,
}

impl Genre {
    /// Genre used whenever a movie carries no recognised genre id.
    pub const DEFAULT: Genre = Genre::Drama;

    pub const fn ordered() -> [Self; 14] {
        [
            Self::Action,
            Self::Adventure,
            Self::Animation,
            Self::Comedy,
            Self::Crime,
            Self::Documentary,
            Self::Drama,
            Self::Fantasy,
            Self::Horror,
            Self::Mystery,
            Self::Romance,
            Self::SciFi,
            Self::Thriller,
            Self::Western,
        ]
    }

    /// Canonical key, e.g. `"SciFi"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Animation => "Animation",
            Self::Comedy => "Comedy",
            Self::Crime => "Crime",
            Self::Documentary => "Documentary",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::SciFi => "SciFi",
            Self::Thriller => "Thriller",
            Self::Western => "Western",
        }
    }

    /// Human-facing label; only differs from the key for science fiction.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SciFi => "Science Fiction",
            other => other.as_str(),
        }
    }

    /// Parses a canonical key or display label, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("science fiction") || name.eq_ignore_ascii_case("sci-fi") {
            return Some(Self::SciFi);
        }

        Self::ordered()
            .into_iter()
            .find(|genre| genre.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_keys_labels_and_case_variants() {
        assert_eq!(Genre::from_name("Comedy"), Some(Genre::Comedy));
        assert_eq!(Genre::from_name("  horror "), Some(Genre::Horror));
        assert_eq!(Genre::from_name("SCIFI"), Some(Genre::SciFi));
        assert_eq!(Genre::from_name("Science Fiction"), Some(Genre::SciFi));
        assert_eq!(Genre::from_name("Musical"), None);
    }

    #[test]
    fn labels_round_trip_through_from_name() {
        for genre in Genre::ordered() {
            assert_eq!(Genre::from_name(genre.label()), Some(genre));
            assert_eq!(Genre::from_name(genre.as_str()), Some(genre));
        }
    }
}
