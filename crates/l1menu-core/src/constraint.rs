//! Fit constraints attached to each menu position.
//!
//! A constraint tells a menu fitter how it may move a trigger's thresholds
//! when scaling the menu to a target total rate. The core only stores it.

/// How a trigger's thresholds may be adjusted when fitting.
///
/// # Example
///
/// ```
/// use l1menu_core::ConstraintType;
///
/// assert_eq!(ConstraintType::default(), ConstraintType::FixedThresholds);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ConstraintType {
    /// Thresholds must not be altered.
    #[default]
    FixedThresholds,
    /// `value` is an absolute target rate.
    FixedRate,
    /// `value` is a target fraction (0 to 1) of the total menu bandwidth.
    FractionOfBandwidth,
}

/// A constraint type plus its numeric value.
///
/// # Example
///
/// ```
/// use l1menu_core::{ConstraintType, TriggerConstraint};
///
/// let mut constraint = TriggerConstraint::default();
/// assert_eq!(constraint.constraint_type(), ConstraintType::FixedThresholds);
///
/// constraint.set_constraint_type(ConstraintType::FixedRate);
/// constraint.set_value(4.5);
/// assert_eq!(constraint, TriggerConstraint::fixed_rate(4.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerConstraint {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    constraint_type: ConstraintType,
    value: f64,
}

impl TriggerConstraint {
    /// Creates a constraint of the given type and value.
    pub fn new(constraint_type: ConstraintType, value: f64) -> Self {
        Self {
            constraint_type,
            value,
        }
    }

    /// Thresholds locked; the value is unused.
    pub fn fixed_thresholds() -> Self {
        Self::default()
    }

    /// Target an absolute rate.
    pub fn fixed_rate(rate: f64) -> Self {
        Self::new(ConstraintType::FixedRate, rate)
    }

    /// Target a fraction of the total bandwidth.
    pub fn fraction_of_bandwidth(fraction: f64) -> Self {
        Self::new(ConstraintType::FractionOfBandwidth, fraction)
    }

    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    pub fn set_constraint_type(&mut self, constraint_type: ConstraintType) {
        self.constraint_type = constraint_type;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Returns true when a fitter must leave the thresholds alone.
    pub fn thresholds_are_fixed(&self) -> bool {
        self.constraint_type == ConstraintType::FixedThresholds
    }
}

/// Requested bandwidth for one trigger as written in legacy menu tables.
///
/// Legacy tables store an absolute requested rate per trigger and a lock
/// flag. [`crate::TriggerMenu::apply_requested_rates`] turns them into
/// constraints once the total is known.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestedRate {
    pub thresholds_locked: bool,
    pub rate: f64,
}

impl RequestedRate {
    pub fn new(thresholds_locked: bool, rate: f64) -> Self {
        Self {
            thresholds_locked,
            rate,
        }
    }
}

/// Converts requested rates into constraints.
///
/// Locked entries become [`ConstraintType::FixedThresholds`]; the rest
/// become [`ConstraintType::FractionOfBandwidth`] with their share of the
/// sum of every requested rate (locked entries included).
pub fn normalise_requested_rates(requests: &[RequestedRate]) -> Vec<TriggerConstraint> {
    let total: f64 = requests.iter().map(|request| request.rate).sum();
    requests
        .iter()
        .map(|request| {
            if request.thresholds_locked {
                TriggerConstraint::fixed_thresholds()
            } else {
                TriggerConstraint::fraction_of_bandwidth(request.rate / total)
            }
        })
        .collect()
}
