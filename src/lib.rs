//! `cotizador-conocer` library crate.
//!
//! The binary (`cotiza`) is a thin wrapper around this library so that:
//!
//! - pricing and layout are testable without spawning processes
//! - any front end (CLI today) drives the same pure pipeline
//!
//! Data flow: `catalog` → `quote` (price + tiers) → `report` (layout, PDF) → `io`.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod quote;
pub mod report;
