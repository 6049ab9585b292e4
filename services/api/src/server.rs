use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_reelscore_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use reelscore::catalog::GenreCatalog;
use reelscore::config::{AppConfig, ProviderConfig};
use reelscore::error::AppError;
use reelscore::provider::TmdbClient;
use reelscore::questions::QuestionBank;
use reelscore::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let tmdb = relay_upstream(&config.provider)?;
    let relay_configured = tmdb.is_some();

    let app = with_reelscore_routes(
        Arc::new(GenreCatalog::standard()),
        Arc::new(QuestionBank::standard()),
        tmdb,
    )
    .layer(Extension(app_state))
    .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        relay_configured,
        tmdb_base_url = %config.provider.tmdb_base_url,
        debounce_ms = config.search.debounce.as_millis() as u64,
        popular_limit = config.search.popular_limit,
        "reelscore api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the TMDB client behind `/api/movies`, or `None` when no key is configured.
fn relay_upstream(config: &ProviderConfig) -> Result<Option<Arc<TmdbClient>>, AppError> {
    let client = TmdbClient::from_config(config)?.map(Arc::new);
    if client.is_none() {
        warn!("TMDB_API_KEY is not set; /api/movies will answer with failures");
    }
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn provider_config(api_key: Option<&str>) -> ProviderConfig {
        ProviderConfig {
            tmdb_api_key: api_key.map(str::to_string),
            tmdb_base_url: "http://127.0.0.1:9".to_string(),
            relay_base_url: "http://127.0.0.1:3000".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn relay_upstream_requires_an_api_key() {
        let missing = relay_upstream(&provider_config(None)).expect("missing key is not fatal");
        assert!(missing.is_none());

        let configured =
            relay_upstream(&provider_config(Some("secret"))).expect("client builds");
        assert!(configured.is_some());
    }
}
