//! Error types for L1Menu

use thiserror::Error;

/// Main error type for trigger, registry and menu operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum L1MenuError {
    /// A parameter name outside the trigger's fixed parameter set.
    #[error("Not a valid parameter name: \"{parameter}\" for trigger {trigger}")]
    InvalidParameter { trigger: String, parameter: String },

    /// No factory registered for the requested trigger identity.
    #[error("{}", unregistered_message(.name, .version))]
    UnregisteredTrigger { name: String, version: Option<u32> },

    /// A (name, version) pair was registered twice.
    #[error("Trigger {name} version {version} is already registered")]
    DuplicateRegistration { name: String, version: u32 },

    /// Menu position outside `[0, len)`.
    #[error("Position {position} is out of range for a menu of {len} triggers")]
    PositionOutOfRange { position: usize, len: usize },

    /// Constraint bookkeeping does not line up with the triggers it describes.
    #[error("Inconsistent constraints: {triggers} triggers but {constraints} constraints")]
    InconsistentConstraints { triggers: usize, constraints: usize },

    /// The sample carries no weight, so fractions are undefined.
    #[error("The sample has zero total weight")]
    DegenerateSample,
}

fn unregistered_message(name: &str, version: &Option<u32>) -> String {
    match version {
        Some(version) => format!("Trigger {name} version {version} is not registered"),
        None => format!("Trigger {name} is not registered"),
    }
}

impl L1MenuError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(trigger: impl Into<String>, parameter: impl Into<String>) -> Self {
        L1MenuError::InvalidParameter {
            trigger: trigger.into(),
            parameter: parameter.into(),
        }
    }

    /// Returns true for [`L1MenuError::InvalidParameter`].
    ///
    /// Callers probing optional parameter names ignore exactly this error.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, L1MenuError::InvalidParameter { .. })
    }
}

/// Result type alias for L1Menu operations
pub type Result<T> = std::result::Result<T, L1MenuError>;
