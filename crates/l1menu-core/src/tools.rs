//! Helpers shared by menu I/O and fitting code.

use crate::trigger::TriggerDescription;

/// Names of the threshold parameters of `trigger`, in parameter order.
///
/// Single-object triggers use `threshold1`, `threshold2`..., cross triggers
/// prefix them with the leg (`leg1threshold1`, `leg2threshold1`).
pub fn threshold_names<D>(trigger: &D) -> Vec<String>
where
    D: TriggerDescription + ?Sized,
{
    trigger
        .parameter_names()
        .into_iter()
        .filter(|name| name.contains("threshold"))
        .collect()
}

/// Reads the first parameter in `candidates` the trigger actually has.
///
/// Legacy tables store one eta or region column for triggers whose
/// parameter is called differently; each name is tried in turn.
pub fn first_parameter<D>(trigger: &D, candidates: &[&str]) -> Option<(String, f32)>
where
    D: TriggerDescription + ?Sized,
{
    candidates.iter().find_map(|name| {
        trigger
            .parameter(name)
            .ok()
            .map(|value| (name.to_string(), value))
    })
}
