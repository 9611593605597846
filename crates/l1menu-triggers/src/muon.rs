//! Single muon triggers.

use l1menu_core::{DpgEvent, Muon};

use crate::common::{passes_quality, within_eta};

fn any_muon_passes(
    muons: &[Muon],
    threshold: f32,
    quality: f32,
    eta_cut: f32,
    isolated: bool,
) -> bool {
    muons.iter().any(|muon| {
        muon.bx == 0
            && (!isolated || muon.isolated)
            && passes_quality(muon.quality, quality)
            && within_eta(muon.eta, eta_cut)
            && muon.pt >= threshold
    })
}

/// `L1_SingleMu`: one stand-alone muon above threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleMuEta {
    version: u32,
    threshold1: f32,
    muon_quality: f32,
    eta_cut: f32,
}

impl SingleMuEta {
    pub fn v0() -> Self {
        Self {
            version: 0,
            threshold1: 20.0,
            muon_quality: 4.0,
            eta_cut: 2.1,
        }
    }

    fn passes(&self, event: &DpgEvent) -> bool {
        event.is_zero_bias()
            && any_muon_passes(
                &event.data.muons,
                self.threshold1,
                self.muon_quality,
                self.eta_cut,
                false,
            )
    }
}

impl_trigger!(SingleMuEta, "L1_SingleMu", correlated = false, {
    threshold1 => "threshold1",
    muon_quality => "muonQuality",
    eta_cut => "etaCut",
});

/// `L1_SingleIsoTkMu`: one isolated track muon above threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleIsoTkMuEta {
    version: u32,
    threshold1: f32,
    muon_quality: f32,
    eta_cut: f32,
}

impl SingleIsoTkMuEta {
    pub fn v0() -> Self {
        Self {
            version: 0,
            threshold1: 20.0,
            muon_quality: 4.0,
            eta_cut: 2.1,
        }
    }

    fn passes(&self, event: &DpgEvent) -> bool {
        event.is_zero_bias()
            && any_muon_passes(
                &event.data.tk_muons,
                self.threshold1,
                self.muon_quality,
                self.eta_cut,
                true,
            )
    }
}

impl_trigger!(SingleIsoTkMuEta, "L1_SingleIsoTkMu", correlated = false, {
    threshold1 => "threshold1",
    muon_quality => "muonQuality",
    eta_cut => "etaCut",
});

#[cfg(test)]
mod tests {
    use l1menu_core::{Trigger, TriggerDescription};

    use super::*;

    fn event_with(muons: Vec<Muon>, tk_muons: Vec<Muon>) -> DpgEvent {
        let mut event = DpgEvent::zero_bias(1.0);
        event.data.muons = muons;
        event.data.tk_muons = tk_muons;
        event
    }

    #[test]
    fn test_single_mu_cuts() {
        let trigger = SingleMuEta::v0();
        assert!(trigger.apply(&event_with(vec![Muon::new(20.0, 1.0, 4)], vec![])));
        assert!(!trigger.apply(&event_with(vec![Muon::new(19.9, 1.0, 4)], vec![])));
        assert!(!trigger.apply(&event_with(vec![Muon::new(30.0, 2.5, 4)], vec![])));
        assert!(!trigger.apply(&event_with(vec![Muon::new(30.0, 1.0, 3)], vec![])));

        let mut out_of_time = Muon::new(30.0, 1.0, 4);
        out_of_time.bx = -1;
        assert!(!trigger.apply(&event_with(vec![out_of_time], vec![])));
    }

    #[test]
    fn test_requires_zero_bias() {
        let trigger = SingleMuEta::v0();
        let mut event = event_with(vec![Muon::new(50.0, 0.0, 7)], vec![]);
        event.physics_bits = 0;
        assert!(!trigger.apply(&event));
    }

    #[test]
    fn test_iso_tk_mu_requires_isolation() {
        let trigger = SingleIsoTkMuEta::v0();
        let mut muon = Muon::new(25.0, 0.3, 4);
        assert!(!trigger.apply(&event_with(vec![], vec![muon])));

        muon.isolated = true;
        assert!(trigger.apply(&event_with(vec![], vec![muon])));
        // Stand-alone muons are ignored
        assert!(!trigger.apply(&event_with(vec![muon], vec![])));
    }

    #[test]
    fn test_parameters() {
        let mut trigger = SingleMuEta::v0();
        assert_eq!(trigger.name(), "L1_SingleMu");
        assert_eq!(
            trigger.parameter_names(),
            vec!["threshold1", "muonQuality", "etaCut"]
        );
        trigger.set_parameter("muonQuality", 3.0).unwrap();
        assert!(trigger.apply(&event_with(vec![Muon::new(30.0, 1.0, 3)], vec![])));
        assert!(trigger.parameter("regionCut").unwrap_err().is_invalid_parameter());
    }
}
