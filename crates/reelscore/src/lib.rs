//! ReelScore: genre-aware weighted movie ratings.

pub mod browse;
pub mod catalog;
pub mod config;
pub mod error;
pub mod provider;
pub mod questions;
pub mod routes;
pub mod scoring;
pub mod search;
pub mod telemetry;
pub mod workflow;
