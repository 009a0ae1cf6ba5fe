//! Common error infrastructure for skirmish-core.
//!
//! Every public operation either succeeds completely or fails with a
//! [`SkirmishError`] before touching the board. The taxonomy is closed: each
//! variant names exactly one violated precondition.
//!
//! # Design Principles
//!
//! - **Reject before mutate**: errors are raised by validation, never mid-sweep
//! - **Rich Context**: variants carry the offending position or quantities
//! - **Severity Classification**: errors are categorized for controller handling

use crate::state::Position;

/// Severity level of an error, used for categorization by controllers.
///
/// - **Recoverable**: the same unit may succeed with a different command
///   (another destination, a reload first, a closer target)
/// - **Validation**: the command or construction input itself is malformed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry with an alternative command.
    ///
    /// Examples: destination occupied, target out of range, no ammo
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: coordinates off the board, negative unit stats
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all skirmish-core errors.
///
/// Provides a uniform interface for classification and stable identifiers
/// that controllers can log or match on without parsing messages.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Closed set of illegal actions surfaced to the caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkirmishError {
    /// Invalid construction parameters (board dimensions, unit stats, rules).
    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    /// Coordinate outside board bounds.
    #[error("cell {position} is outside the board")]
    IllegalCell { position: Position },

    /// The operation needed an occupied cell.
    #[error("cell {position} is empty")]
    CellEmpty { position: Position },

    /// Placement or move destination already holds a unit.
    #[error("cell {position} is occupied")]
    CellOccupied { position: Position },

    /// Move distance exceeds the unit's movement allowance.
    #[error("move distance {distance} exceeds movement allowance {allowance}")]
    MoveTooFar { distance: i32, allowance: i32 },

    /// Attack distance fails the attacker's range check.
    #[error("target {target} at distance {distance} is out of range")]
    OutOfRange { target: Position, distance: i32 },

    /// Attacker lacks the ammo this attack requires.
    #[error("attack needs {cost} ammo but only {ammo} left")]
    OutOfAmmo { ammo: i32, cost: i32 },

    /// Target fails the attacker's eligibility rule.
    #[error("cell {target} is not a legal target")]
    IllegalTarget { target: Position },
}

impl SkirmishError {
    pub(crate) fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }
}

impl GameError for SkirmishError {
    fn severity(&self) -> ErrorSeverity {
        use SkirmishError::*;
        match self {
            IllegalArgument(_) | IllegalCell { .. } | IllegalTarget { .. } => {
                ErrorSeverity::Validation
            }
            CellEmpty { .. } | CellOccupied { .. } | MoveTooFar { .. } => {
                ErrorSeverity::Recoverable
            }
            OutOfRange { .. } | OutOfAmmo { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use SkirmishError::*;
        match self {
            IllegalArgument(_) => "ILLEGAL_ARGUMENT",
            IllegalCell { .. } => "ILLEGAL_CELL",
            CellEmpty { .. } => "CELL_EMPTY",
            CellOccupied { .. } => "CELL_OCCUPIED",
            MoveTooFar { .. } => "MOVE_TOO_FAR",
            OutOfRange { .. } => "OUT_OF_RANGE",
            OutOfAmmo { .. } => "OUT_OF_AMMO",
            IllegalTarget { .. } => "ILLEGAL_TARGET",
        }
    }
}

/// Result alias used throughout the crate.
pub type SkirmishResult<T> = Result<T, SkirmishError>;
