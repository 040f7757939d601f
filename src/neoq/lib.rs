//! # neoq Architecture
//!
//! neoq explores near-Earth objects (NEOs) and their close approaches to Earth.
//! Like most tools of its kind it is a **library with a CLI client**: everything
//! from loading data to answering queries lives here, and the binary only parses
//! arguments and prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, prints results        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded database, normalizes inputs              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - inspect, query, export; returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Layer                                                 │
//! │  - extract (CSV/JSON in), database (link + lazy query),     │
//! │    filters (predicates), limit, write (CSV/JSON out)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Query Pipeline
//!
//! ```text
//! FilterCriteria ─► create_filters ─► Vec<Box<dyn Predicate>>
//!                                              │
//!              NeoDatabase::query (lazy, AND) ◄┘
//!                          │
//!                        limit ─► render / write_results
//! ```
//!
//! Every stage after `create_filters` is a plain iterator, so capping the
//! results with [`limit::limit`] also stops the database scan.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each command
//! - [`config`]: Data file locations and display defaults
//! - [`database`]: Linked in-memory NEO/approach collections and the query engine
//! - [`error`]: Error types
//! - [`extract`]: Loading the JPL CSV/JSON data files
//! - [`filters`]: Attribute predicates and the criteria compiler
//! - [`limit`]: Lazy result truncation
//! - [`model`]: `NearEarthObject` and `CloseApproach`
//! - [`write`]: CSV/JSON output

pub mod api;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod filters;
pub mod limit;
pub mod model;
pub mod write;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
