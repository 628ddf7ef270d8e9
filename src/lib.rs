//! Champions Club web client: a Yew single-page site over the club JSON API.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod router;
pub mod state;
pub mod views;

#[cfg(test)]
mod fixtures;
