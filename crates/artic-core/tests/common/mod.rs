//! Shared test helpers

#![allow(dead_code)]

pub mod fixtures;
pub mod server;
pub mod sources;
