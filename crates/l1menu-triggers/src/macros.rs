//! Declarative macros for trigger boilerplate.
//!
//! Every single-object trigger family stores its parameters as plain `f32`
//! fields and a `version`. The name-keyed accessors, `clone_box` and the
//! `Trigger` plumbing are identical across families, so they are generated.

/// Generates `TriggerDescription` and `Trigger` for a trigger family.
///
/// The family must be `Clone + Debug`, have a `version: u32` field, and an
/// inherent `fn passes(&self, event: &DpgEvent) -> bool`.
///
/// # Usage
/// ```ignore
/// impl_trigger!(SingleMuEta, "L1_SingleMu", correlated = false, {
///     threshold1 => "threshold1",
///     muon_quality => "muonQuality",
///     eta_cut => "etaCut",
/// });
/// ```
macro_rules! impl_trigger {
    (
        $type:ident,
        $name:literal,
        correlated = $correlated:expr,
        { $($field:ident => $param:literal),+ $(,)? }
    ) => {
        impl $type {
            /// Trigger name shared by every version.
            pub const NAME: &'static str = $name;

            /// Parameter names in their fixed order.
            pub const PARAMETER_NAMES: &'static [&'static str] = &[$($param),+];
        }

        impl l1menu_core::TriggerDescription for $type {
            fn name(&self) -> &str {
                $name
            }

            fn version(&self) -> u32 {
                self.version
            }

            fn parameter_names(&self) -> Vec<String> {
                Self::PARAMETER_NAMES.iter().map(|name| name.to_string()).collect()
            }

            fn parameter(&self, name: &str) -> l1menu_core::Result<f32> {
                match name {
                    $($param => Ok(self.$field),)+
                    _ => Err(l1menu_core::L1MenuError::invalid_parameter($name, name)),
                }
            }
        }

        impl l1menu_core::Trigger for $type {
            fn parameter_mut(&mut self, name: &str) -> l1menu_core::Result<&mut f32> {
                match name {
                    $($param => Ok(&mut self.$field),)+
                    _ => Err(l1menu_core::L1MenuError::invalid_parameter($name, name)),
                }
            }

            fn apply(&self, event: &l1menu_core::DpgEvent) -> bool {
                self.passes(event)
            }

            fn thresholds_are_correlated(&self) -> bool {
                $correlated
            }

            fn clone_box(&self) -> Box<dyn l1menu_core::Trigger> {
                Box::new(self.clone())
            }
        }
    };
}
