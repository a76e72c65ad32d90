//! SymptoTrack backend library.
//!
//! Patient symptom tracking over HTTP: account registration, login
//! (identity resolution across patient and clinician accounts),
//! symptom journaling, and clinician data-sharing, backed by SQLite.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod models;
