//! HTTP request handlers.

pub mod resource;
