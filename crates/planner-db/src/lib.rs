//! Postgres task store.

pub mod db;
pub mod error;
pub mod model;
