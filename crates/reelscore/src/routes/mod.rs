//! HTTP routers exposed by the library. The service binary adds probes and metrics.

mod catalog;
mod relay;

pub use catalog::{
    catalog_router, CatalogState, CriteriaResponse, GenreSelector, ScoreRequest, ScoreResponse,
};
pub use relay::relay_router;
