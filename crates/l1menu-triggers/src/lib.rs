//! Concrete L1 triggers.
//!
//! Each family implements [`l1menu_core::Trigger`] for a handful of versions.
//! [`register_all`] puts every version into a [`TriggerTable`] together with
//! the suggested plotting ranges of its thresholds.

#[macro_use]
mod macros;
mod common;

pub mod cross;
pub mod electron;
pub mod hadronic;
pub mod muon;
pub mod tau;

pub use cross::{CrossTrigger, TkEleTkMu};
pub use electron::{DoubleTkEm, SingleTkEleEta, TkEleEg};
pub use hadronic::{Htm, MultiTkJet};
pub use muon::{SingleIsoTkMuEta, SingleMuEta};
pub use tau::SingleTkTauEta;

use l1menu_core::{Result, Trigger, TriggerTable};
use tracing::debug;

fn boxed<T>(constructor: fn() -> T) -> impl Fn() -> Box<dyn Trigger> + Send + Sync
where
    T: Trigger + 'static,
{
    move || Box::new(constructor())
}

/// Registers every trigger version of this crate.
///
/// # Errors
///
/// Returns [`l1menu_core::L1MenuError::DuplicateRegistration`] if any of the
/// triggers is already present in `table`.
pub fn register_all(table: &mut TriggerTable) -> Result<()> {
    let before = table.len();

    table.register_trigger(boxed(SingleMuEta::v0))?;
    table.register_trigger(boxed(SingleIsoTkMuEta::v0))?;
    table.register_trigger(boxed(SingleTkEleEta::v0))?;
    table.register_trigger(boxed(SingleTkEleEta::v1))?;
    table.register_trigger(boxed(DoubleTkEm::v0))?;
    table.register_trigger(boxed(TkEleEg::v0))?;
    table.register_trigger(boxed(TkEleEg::v1))?;
    table.register_trigger(boxed(SingleTkTauEta::v0))?;
    table.register_trigger(boxed(Htm::v0))?;
    table.register_trigger(boxed(Htm::v1))?;
    table.register_trigger(boxed(MultiTkJet::v0))?;
    table.register_trigger(boxed(MultiTkJet::v1))?;
    table.register_trigger(boxed(TkEleTkMu::v0))?;
    table.register_trigger(boxed(TkEleTkMu::v1))?;
    table.register_trigger(boxed(TkEleTkMu::v2))?;
    table.register_trigger(boxed(CrossTrigger::tk_tau_mu_v0))?;
    table.register_trigger(boxed(CrossTrigger::mu_tk_tau_v0))?;
    table.register_trigger(boxed(CrossTrigger::single_mu_htm_v0))?;
    table.register_trigger(boxed(CrossTrigger::single_mu_htm_v1))?;

    register_binning(table);

    debug!(
        event = "triggers_registered",
        registered = table.len() - before,
    );
    Ok(())
}

fn register_binning(table: &mut TriggerTable) {
    table.register_suggested_binning(SingleMuEta::NAME, "threshold1", 140, 0.0, 140.0);
    table.register_suggested_binning(SingleIsoTkMuEta::NAME, "threshold1", 140, 0.0, 140.0);
    table.register_suggested_binning(SingleTkEleEta::NAME, "threshold1", 100, 0.0, 100.0);
    table.register_suggested_binning(SingleTkTauEta::NAME, "threshold1", 100, 0.0, 200.0);
    table.register_suggested_binning(Htm::NAME, "threshold1", 100, 0.0, 300.0);
    for threshold in ["threshold1", "threshold2", "threshold3", "threshold4"] {
        table.register_suggested_binning(MultiTkJet::NAME, threshold, 100, 0.0, 200.0);
    }

    for name in [DoubleTkEm::NAME, TkEleEg::NAME, TkEleTkMu::NAME] {
        table.register_suggested_binning(name, "leg1threshold1", 100, 0.0, 100.0);
        table.register_suggested_binning(name, "leg2threshold1", 100, 0.0, 100.0);
    }
    for name in ["L1_TkTau_Mu", "L1_Mu_TkTau"] {
        table.register_suggested_binning(name, "leg1threshold1", 100, 0.0, 100.0);
        table.register_suggested_binning(name, "leg2threshold1", 100, 0.0, 100.0);
    }
    table.register_suggested_binning("L1_SingleMu_HTM", "leg1threshold1", 100, 0.0, 100.0);
    table.register_suggested_binning("L1_SingleMu_HTM", "leg2threshold1", 100, 0.0, 300.0);
}
