//! Infrastructure adapters: the HTTP auth server client and settings loading.

pub mod backend;
pub mod config;
