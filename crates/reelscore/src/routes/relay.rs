use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::{error, warn};

use crate::provider::{RelayRequest, TmdbClient};

const RELAY_FAILURE: &str = "Failed to fetch";

/// Router builder for the credential-holding `/api/movies` relay.
/// Without a client every request fails the same way an upstream outage does.
pub fn relay_router(client: Option<Arc<TmdbClient>>) -> Router {
    Router::new()
        .route("/api/movies", get(relay_movies))
        .with_state(client)
}

pub(crate) async fn relay_movies(
    State(client): State<Option<Arc<TmdbClient>>>,
    Query(request): Query<RelayRequest>,
) -> Response {
    let Some(client) = client else {
        error!("relay request rejected: TMDB_API_KEY is not configured");
        return failure();
    };

    match client.forward(&request).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            warn!(code = err.code(), error = %err, "relay upstream request failed");
            failure()
        }
    }
}

fn failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": RELAY_FAILURE })),
    )
        .into_response()
}
