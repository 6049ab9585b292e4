use metrics_exporter_prometheus::PrometheusHandle;
use reelscore::catalog::Genre;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_genre(raw: &str) -> Result<Genre, String> {
    Genre::from_name(raw).ok_or_else(|| {
        let known: Vec<&str> = Genre::ordered().iter().map(|genre| genre.label()).collect();
        format!("unknown genre '{raw}' (expected one of: {})", known.join(", "))
    })
}

/// Parses `criterion_id=value`, e.g. `story=4.5`.
pub(crate) fn parse_answer(raw: &str) -> Result<(String, f64), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected criterion_id=value, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing criterion id in '{raw}'"));
    }

    let value: f64 = value
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{value}' as a number ({err})"))?;
    if !reelscore::scoring::is_valid_answer(value) {
        return Err(format!("answer for '{id}' must be between 0 and 5"));
    }

    Ok((id.to_string(), value))
}
