#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared data models for the Reclaim compliance console.
//!
//! These types mirror the JSON contracts of the Reclaim backend REST API and
//! are consumed by the web frontend. Nothing in here performs I/O.

pub mod models;
