//! MySQL leading-index auditor.
//!
//! Checks every table of a schema for a given column and for an index that
//! starts with it, reports what it found, and adds the missing indexes once
//! the user agrees.
//!
//! # Modules
//!
//! - `config`: Command line flags and run configuration.
//! - `errors`: Error types and exit codes.
//! - `db`: MySQL connection and catalog access.
//! - `catalog`: Schema introspection seam and metadata query.
//! - `classify`: Partitioning tables into buckets.
//! - `report`: Plain-text report.
//! - `prompt`: Interactive confirmation.
//! - `builder`: Index naming and creation.
//! - `workflow`: The end-to-end run.

pub mod builder;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod db;
pub mod errors;
pub mod prompt;
pub mod report;
pub mod workflow;
