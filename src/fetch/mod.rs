// src/fetch/mod.rs
// =============================================================================
// Page fetching.
//
// A single Fetcher owns the reqwest Client (connection pooling), the retry
// policy and the politeness delay. Everything that talks to the network
// goes through it.
// =============================================================================

mod client;

pub use client::Fetcher;
