use super::criterion::Criterion;
use crate::catalog::Genre;

pub(super) fn universal_criteria() -> Vec<Criterion> {
    vec![
        Criterion::new(
            "story",
            "How compelling was the narrative and plot progression?",
            1.2,
            &["Plot structure", "Story engagement", "Narrative flow", "Setup & payoff"],
        ),
        Criterion::new(
            "pacing",
            "Did the film maintain good momentum throughout?",
            0.9,
            &["Scene transitions", "Runtime feel", "No dragging parts", "Energy consistency"],
        ),
        Criterion::new(
            "acting",
            "How believable and engaging were the performances?",
            1.1,
            &["Character believability", "Emotional delivery", "Chemistry", "Performance range"],
        ),
        Criterion::new(
            "visuals",
            "How appealing was the overall visual presentation?",
            0.9,
            &["Shot composition", "Color palette", "Visual style", "Image quality"],
        ),
        Criterion::new(
            "soundtrack",
            "How well did the music enhance the experience?",
            0.8,
            &["Music fitting", "Emotional enhancement", "Memorable themes", "Audio balance"],
        ),
        Criterion::new(
            "emotional",
            "How deeply did the film impact you emotionally?",
            1.1,
            &["Emotional resonance", "Connection to story", "Memorable moments", "Lasting impact"],
        ),
        Criterion::new(
            "originality",
            "How fresh did the film feel to you?",
            1.0,
            &["Unique ideas", "Fresh perspective", "Avoiding clichés", "Creative choices"],
        ),
        Criterion::new(
            "satisfaction",
            "How satisfied were you with the ending?",
            1.0,
            &["Resolution quality", "Emotional closure", "Loose ends tied", "Satisfying conclusion"],
        ),
    ]
}

pub(super) fn genre_criteria(genre: Genre) -> Vec<Criterion> {
    match genre {
        Genre::Action => vec![
            Criterion::new(
                "choreography",
                "How exciting were the action sequences?",
                1.4,
                &["Fight choreography", "Creativity", "Spectacle", "Intensity"],
            ),
            Criterion::new(
                "clarity",
                "Could you follow what was happening in action scenes?",
                1.1,
                &["Shot clarity", "Spatial awareness", "Camera steadiness", "Visual coherence"],
            ),
            Criterion::new(
                "stakes",
                "Did you feel genuine tension during action moments?",
                1.1,
                &["Danger felt real", "Consequences clear", "Investment in outcome", "Suspense"],
            ),
        ],
        Genre::Drama => vec![
            Criterion::new(
                "character_depth",
                "How well-developed did the characters feel?",
                1.4,
                &["Character arcs", "Motivations clear", "Complexity", "Growth shown"],
            ),
            Criterion::new(
                "dialogue",
                "How natural and meaningful was the dialogue?",
                1.2,
                &["Realistic speech", "Subtext", "Memorable lines", "Character voices"],
            ),
            Criterion::new(
                "themes",
                "How thought-provoking were the themes explored?",
                1.1,
                &["Theme clarity", "Depth of exploration", "Relevance", "Subtlety"],
            ),
        ],
        Genre::Horror => vec![
            Criterion::new(
                "atmosphere",
                "How effectively did it build dread and unease?",
                1.4,
                &["Constant tension", "Uncomfortable feeling", "Building dread", "Mood consistency"],
            ),
            Criterion::new(
                "scares",
                "How effective were the frightening moments?",
                1.2,
                &["Jump scares", "Disturbing imagery", "Psychological fear", "Lasting unease"],
            ),
            Criterion::new(
                "cinematography",
                "How well did lighting and camera work create tension?",
                1.3,
                &["Shadows & lighting", "Camera angles", "Visual mystery", "Composition"],
            ),
            Criterion::new(
                "sound_design",
                "How unsettling was the audio and sound design?",
                1.1,
                &["Creepy sounds", "Silence use", "Audio cues", "Ambient noise"],
            ),
        ],
        Genre::Comedy => vec![
            Criterion::new(
                "humor",
                "How funny did you find it?",
                1.5,
                &["Laugh frequency", "Joke quality", "Humor style", "Personal enjoyment"],
            ),
            Criterion::new(
                "timing",
                "How well-timed were the comedic moments?",
                1.2,
                &["Punchline delivery", "Beat timing", "Rhythm", "Setup execution"],
            ),
            Criterion::new(
                "consistency",
                "Did it maintain comedic quality throughout?",
                1.0,
                &["Consistent laughs", "No dead zones", "Energy maintained", "Quality steady"],
            ),
        ],
        Genre::SciFi => vec![
            Criterion::new(
                "worldbuilding",
                "How immersive was the sci-fi world?",
                1.3,
                &["World details", "Believability", "Consistency", "Depth of lore"],
            ),
            Criterion::new(
                "concepts",
                "How interesting were the sci-fi ideas presented?",
                1.2,
                &["Concept originality", "Exploration depth", "Thought-provoking", "Imagination"],
            ),
            Criterion::new(
                "effects",
                "How impressive were the visual effects?",
                1.1,
                &["CGI quality", "Effect believability", "Visual creativity", "Technical execution"],
            ),
        ],
        Genre::Romance => vec![
            Criterion::new(
                "chemistry",
                "How believable was the chemistry between leads?",
                1.5,
                &["Actor chemistry", "Natural connection", "Spark visible", "Relationship feel"],
            ),
            Criterion::new(
                "believability",
                "Did the romance feel genuine and earned?",
                1.2,
                &["Relationship development", "Realistic progression", "Earned moments", "Not forced"],
            ),
            Criterion::new(
                "emotional_beats",
                "How affecting were the romantic moments?",
                1.1,
                &["Emotional impact", "Key scene power", "Heartfelt moments", "Touching scenes"],
            ),
        ],
        Genre::Thriller => vec![
            Criterion::new(
                "suspense",
                "How tense and gripping was the experience?",
                1.4,
                &["Edge of seat", "Tension building", "Sustained anxiety", "Gripping feel"],
            ),
            Criterion::new(
                "twists",
                "How satisfying were the plot revelations?",
                1.2,
                &["Twist quality", "Surprise level", "Earned reveals", "Foreshadowing"],
            ),
            Criterion::new(
                "unpredictability",
                "How unpredictable was the story?",
                1.1,
                &["Surprise factor", "Avoided clichés", "Kept guessing", "Fresh turns"],
            ),
        ],
        Genre::Mystery => vec![
            Criterion::new(
                "puzzle",
                "How engaging was the central mystery?",
                1.4,
                &["Mystery intrigue", "Question hook", "Puzzle complexity", "Investigation interest"],
            ),
            Criterion::new(
                "clues",
                "Did you feel you had a fair chance to solve it?",
                1.2,
                &["Clue clarity", "Fair play", "No cheating", "Solvable puzzle"],
            ),
            Criterion::new(
                "resolution",
                "How satisfying was the mystery's solution?",
                1.3,
                &["Answer quality", "Makes sense", "Worth the wait", "Clever solution"],
            ),
        ],
        Genre::Animation => vec![
            Criterion::new(
                "animation_quality",
                "How impressive was the animation quality?",
                1.3,
                &["Movement fluidity", "Frame quality", "Technical skill", "Detail level"],
            ),
            Criterion::new(
                "art_style",
                "How appealing was the visual art style?",
                1.2,
                &["Style uniqueness", "Visual beauty", "Design consistency", "Aesthetic appeal"],
            ),
            Criterion::new(
                "voice_acting",
                "How well did the voice performances work?",
                1.0,
                &["Voice fitting", "Emotional delivery", "Character match", "Performance quality"],
            ),
        ],
        Genre::Fantasy => vec![
            Criterion::new(
                "world",
                "How immersive was the fantasy world?",
                1.3,
                &["World depth", "Believability", "Immersion level", "Lore richness"],
            ),
            Criterion::new(
                "magic_system",
                "Did the magical elements feel consistent?",
                1.0,
                &["Magic rules", "System logic", "Consistency", "Power clarity"],
            ),
            Criterion::new(
                "spectacle",
                "How visually stunning were the fantasy elements?",
                1.1,
                &["Visual wow factor", "Magical effects", "Epic moments", "Fantasy imagery"],
            ),
        ],
        Genre::Documentary => vec![
            Criterion::new(
                "information",
                "How informative and educational was it?",
                1.4,
                &["Learning value", "Information depth", "Facts presented", "Knowledge gained"],
            ),
            Criterion::new(
                "perspective",
                "How interesting was the perspective presented?",
                1.2,
                &["Viewpoint clarity", "Argument strength", "Balance/bias", "Angle uniqueness"],
            ),
            Criterion::new(
                "engagement",
                "How engaging was the storytelling approach?",
                1.1,
                &["Narrative flow", "Maintains interest", "Pacing", "Story structure"],
            ),
        ],
        Genre::Crime => vec![
            Criterion::new(
                "plot_intricacy",
                "How intricate and clever was the criminal plot?",
                1.3,
                &["Plot complexity", "Scheme cleverness", "Details matter", "Layered story"],
            ),
            Criterion::new(
                "moral_complexity",
                "How thought-provoking were the moral questions?",
                1.2,
                &["Ethical dilemmas", "Gray areas", "Moral depth", "Questions raised"],
            ),
            Criterion::new(
                "realism",
                "How authentic did the crime world feel?",
                1.0,
                &["World authenticity", "Procedural accuracy", "Realistic feel", "Believability"],
            ),
        ],
        Genre::Western => vec![
            Criterion::new(
                "setting",
                "How immersive was the Western atmosphere?",
                1.2,
                &["Frontier feel", "Setting authenticity", "Atmosphere", "Time period"],
            ),
            Criterion::new(
                "morality",
                "How compelling were the moral conflicts?",
                1.1,
                &["Moral dilemmas", "Code of honor", "Right vs wrong", "Character ethics"],
            ),
            Criterion::new(
                "authenticity",
                "How authentic did the period feel?",
                0.9,
                &["Historical accuracy", "Period details", "Costume/props", "Era feeling"],
            ),
        ],
        Genre::Adventure => vec![
            Criterion::new(
                "journey",
                "How exciting was the adventure journey?",
                1.3,
                &["Journey excitement", "Quest engagement", "Travel appeal", "Adventure feel"],
            ),
            Criterion::new(
                "scale",
                "How epic did the adventure feel?",
                1.1,
                &["Scope & scale", "Grand moments", "Epic feeling", "Size impression"],
            ),
            Criterion::new(
                "discovery",
                "How rewarding were the discoveries made?",
                1.0,
                &["Discovery payoff", "Reveal satisfaction", "Finding value", "Worth the journey"],
            ),
        ],
    }
}
