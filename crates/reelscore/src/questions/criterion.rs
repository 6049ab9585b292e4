use serde::Serialize;

/// A single weighted rating question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub id: &'static str,
    pub text: &'static str,
    pub weight: f64,
    pub focus_areas: &'static [&'static str],
}

impl Criterion {
    pub const fn new(
        id: &'static str,
        text: &'static str,
        weight: f64,
        focus_areas: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            text,
            weight,
            focus_areas,
        }
    }
}
