//! Flutter bridge for the Astrolabe date engine.

pub mod api;
