//! L1Menu - trigger menu rate studies in Rust
//!
//! Build a menu from the process-wide trigger table, run it over a weighted
//! sample and read back total, per-trigger and pure rates.
//!
//! # Example
//!
//! ```rust
//! use l1menu::prelude::*;
//!
//! let mut menu = TriggerMenu::new();
//! menu.add_trigger(l1menu::trigger_table(), "L1_SingleMu").unwrap();
//! menu.trigger_mut(0).unwrap().set_parameter("threshold1", 15.0).unwrap();
//!
//! let mut sample = DpgSample::new(40.0);
//! let mut event = DpgEvent::zero_bias(1.0);
//! event.data.muons.push(Muon::new(18.0, 0.3, 4));
//! sample.push(event);
//!
//! let rate = MenuRate::compute(&menu, &sample).unwrap();
//! assert_eq!(rate.total_rate(), 40.0);
//! ```

// Core types
pub use l1menu_core::{
    normalise_requested_rates, CachedTrigger, ConstraintType, DpgEvent, DpgSample, Event,
    FrozenTrigger, L1MenuError, RequestedRate, Result, Sample, SuggestedBinning, Trigger,
    TriggerConstraint, TriggerDescription, TriggerMenu, TriggerTable,
};

// Event model
pub use l1menu_core::event;

// Parameter name helpers
pub use l1menu_core::tools;

// Concrete triggers
pub use l1menu_triggers as triggers;

// Configuration
pub use l1menu_config::{ConfigError, Parallelism, RateConfig};

// Rate engine
pub use l1menu_rates::{
    MenuRate, MenuRateEngine, RateError, RateFigures, TriggerRate, TriggerRateView, TriggerSums,
};

#[cfg(feature = "console")]
pub mod console;

mod table;
pub use table::trigger_table;

pub mod prelude {
    pub use super::{
        ConstraintType, DpgEvent, DpgSample, MenuRate, MenuRateEngine, Parallelism, RateConfig,
        Sample, Trigger, TriggerConstraint, TriggerDescription, TriggerMenu, TriggerTable,
    };
    pub use super::event::{CaloObject, Muon, TkElectron, TkJet};
    pub use super::trigger_table;
}
