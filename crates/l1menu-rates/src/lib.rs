//! Menu rate engine for L1Menu.
//!
//! [`MenuRateEngine`] runs every trigger of a [`l1menu_core::TriggerMenu`]
//! over a weighted [`l1menu_core::Sample`] in one pass and returns a
//! [`MenuRate`]: menu totals plus one [`TriggerRate`] per trigger, each with
//! a fraction, a rate, a pure rate and their statistical errors.
//!
//! # Example
//!
//! ```
//! use l1menu_core::{DpgEvent, DpgSample, TriggerMenu, TriggerTable};
//! use l1menu_rates::MenuRateEngine;
//!
//! let mut table = TriggerTable::new();
//! l1menu_triggers::register_all(&mut table).unwrap();
//!
//! let mut menu = TriggerMenu::new();
//! menu.add_trigger(&table, "L1_HTM").unwrap();
//!
//! let mut sample = DpgSample::new(10.0);
//! let mut event = DpgEvent::zero_bias(1.0);
//! event.data.sums.tk_htm = 80.0;
//! sample.push(event);
//! sample.push(DpgEvent::zero_bias(1.0));
//!
//! let rate = MenuRateEngine::default().compute(&menu, &sample).unwrap();
//! assert_eq!(rate.total_rate(), 5.0);
//! ```

pub mod engine;
pub mod error;
pub mod menu_rate;
pub mod sums;
pub mod trigger_rate;

#[cfg(test)]
mod engine_tests;

pub use engine::MenuRateEngine;
pub use error::RateError;
pub use menu_rate::MenuRate;
pub use sums::{TriggerSums, WeightSums};
pub use trigger_rate::{RateFigures, TriggerRate, TriggerRateView};
