use super::genre::Genre;
use serde::Serialize;

/// Sidebar copy shown while previewing or rating a movie of a given genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreInfo {
    pub description: &'static str,
    pub focus_areas: &'static [&'static str],
}

const ACTION: GenreInfo = GenreInfo {
    description: "High-energy films focused on physical feats, chases, and combat",
    focus_areas: &[
        "Action choreography",
        "Stunt work quality",
        "Visual clarity",
        "Tension & stakes",
    ],
};

const ADVENTURE: GenreInfo = GenreInfo {
    description: "Journey-driven stories of exploration and discovery",
    focus_areas: &[
        "Sense of adventure",
        "World exploration",
        "Epic scale",
        "Discovery moments",
    ],
};

const ANIMATION: GenreInfo = GenreInfo {
    description: "Animated films across all styles and techniques",
    focus_areas: &[
        "Animation quality",
        "Art direction",
        "Voice performances",
        "Visual creativity",
    ],
};

const COMEDY: GenreInfo = GenreInfo {
    description: "Films designed to entertain and make you laugh",
    focus_areas: &[
        "Humor effectiveness",
        "Comedic timing",
        "Joke consistency",
        "Entertainment value",
    ],
};

const CRIME: GenreInfo = GenreInfo {
    description: "Stories centered on criminal activities and consequences",
    focus_areas: &[
        "Plot complexity",
        "Moral questions",
        "Authenticity",
        "Character motivations",
    ],
};

const DOCUMENTARY: GenreInfo = GenreInfo {
    description: "Non-fiction films exploring real subjects and events",
    focus_areas: &[
        "Information value",
        "Perspective clarity",
        "Storytelling approach",
        "Subject depth",
    ],
};

const DRAMA: GenreInfo = GenreInfo {
    description: "Character-driven stories exploring human experiences",
    focus_areas: &[
        "Character development",
        "Dialogue quality",
        "Emotional depth",
        "Thematic exploration",
    ],
};

const FANTASY: GenreInfo = GenreInfo {
    description: "Imaginative worlds with magical and supernatural elements",
    focus_areas: &[
        "World immersion",
        "Magic consistency",
        "Visual spectacle",
        "Fantasy elements",
    ],
};

const HORROR: GenreInfo = GenreInfo {
    description: "Films designed to frighten, disturb, or unsettle",
    focus_areas: &[
        "Atmosphere building",
        "Scare effectiveness",
        "Visual tension",
        "Sound design",
    ],
};

const MYSTERY: GenreInfo = GenreInfo {
    description: "Puzzle-focused narratives with secrets to uncover",
    focus_areas: &[
        "Mystery engagement",
        "Clue fairness",
        "Solution satisfaction",
        "Unpredictability",
    ],
};

const ROMANCE: GenreInfo = GenreInfo {
    description: "Love stories and romantic relationships at the forefront",
    focus_areas: &[
        "Lead chemistry",
        "Romance believability",
        "Emotional moments",
        "Relationship development",
    ],
};

const SCIFI: GenreInfo = GenreInfo {
    description: "Speculative fiction exploring futuristic or scientific concepts",
    focus_areas: &[
        "World building",
        "Concept exploration",
        "Visual effects",
        "Scientific ideas",
    ],
};

const THRILLER: GenreInfo = GenreInfo {
    description: "Suspenseful narratives designed to keep you on edge",
    focus_areas: &[
        "Tension building",
        "Plot twists",
        "Unpredictability",
        "Pacing momentum",
    ],
};

const WESTERN: GenreInfo = GenreInfo {
    description: "Stories set in the American frontier or inspired by its themes",
    focus_areas: &[
        "Western atmosphere",
        "Moral conflicts",
        "Period authenticity",
        "Frontier setting",
    ],
};

impl Genre {
    pub const fn info(self) -> &'static GenreInfo {
        match self {
            Self::Action => &ACTION,
            Self::Adventure => &ADVENTURE,
            Self::Animation => &ANIMATION,
            Self::Comedy => &COMEDY,
            Self::Crime => &CRIME,
            Self::Documentary => &DOCUMENTARY,
            Self::Drama => &DRAMA,
            Self::Fantasy => &FANTASY,
            Self::Horror => &HORROR,
            Self::Mystery => &MYSTERY,
            Self::Romance => &ROMANCE,
            Self::SciFi => &SCIFI,
            Self::Thriller => &THRILLER,
            Self::Western => &WESTERN,
        }
    }
}
