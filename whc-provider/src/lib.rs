//! All internal logic for turning a search/filter intent into a catalog
//! request and converting the raw response into typed records.
//!
//! The catalog exposes two wire protocols: an unauthenticated HTML-backed
//! browse protocol and an authenticated JSON API protocol. The
//! [`CatalogClient`](client::CatalogClient) picks one per call based on the
//! requested purity filters, checks the credential gate, builds the URL,
//! dispatches the request and hands the payload to a [`Parser`](parse::Parser).

extern crate whc_common;

pub mod auth;
pub mod catalog_config;
pub mod client;
pub mod error;
pub mod network;
pub mod parse;
pub mod prefs;
pub mod prelude;
pub mod protocol;
pub mod request;
pub mod url;
