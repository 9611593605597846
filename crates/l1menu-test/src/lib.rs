//! Shared test fixtures for L1Menu crates.
//!
//! This crate provides samples and triggers for testing the rate engine.
//! It depends on `l1menu-core` only, so every other crate can use it as a
//! dev-dependency.
//!
//! - [`scripted`] - samples where the passing triggers of each event are listed by name
//! - [`random`] - seeded random samples for property tests
//! - [`dpg`] - detector event builders for concrete triggers
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! l1menu-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use l1menu_test::{ScriptedSample, ScriptedTrigger};
//!
//! let sample = ScriptedSample::new(10.0)
//!     .with_event(1.0, &["A"])
//!     .with_event(1.0, &["A", "B"]);
//! ```

pub mod dpg;
pub mod random;
pub mod scripted;

pub use random::{random_dpg_sample, random_scripted_sample, RandomSampleSpec};
pub use scripted::{ScriptedEvent, ScriptedSample, ScriptedTrigger};
