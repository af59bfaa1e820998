//! TokBoard core library.
//!
//! CSV ingestion, shorthand cleaning, the derived engagement metric,
//! filtering, aggregation and the view model consumed by the egui shell.
//! Everything outside `gui`/`charts` is UI-agnostic and test-driven.

pub mod charts;
pub mod data;
pub mod gui;
pub mod stats;
pub mod view;
