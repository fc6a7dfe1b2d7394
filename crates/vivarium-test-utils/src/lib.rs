//! Test utilities and mock types for Vivarium development.
//!
//! Provides deterministic [`Chooser`](vivarium_core::Chooser)
//! implementations, mock behaviours that record how often they are
//! consulted, and map fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod choosers;
pub mod fixtures;

pub use choosers::{FirstChoice, LastChoice, ScriptedChoice};
pub use fixtures::{
    obstacle_grid, CallCounter, FixedHeading, Scripted, HEADING, SCRIPTED, WALL,
};
