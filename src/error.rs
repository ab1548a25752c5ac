//! Error type for the checked entry points of the crate.
//!
//! The geometry itself is total over valid numbers and never fails. Errors
//! only come from the places where a host asks for validation: strict
//! rotation parsing, checked surface construction, and config loading.

/// Error returned by checked constructors and config loading.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoxDrawError {
    /// A rotation other than 0, 90, 180 or 270 degrees.
    #[error("invalid rotation: {0} (expected 0, 90, 180 or 270)")]
    InvalidRotation(i32),
    /// A surface with a non-positive or non-finite size.
    #[error("invalid surface size {width}x{height}: both sides must be positive and finite")]
    InvalidSurface { width: f64, height: f64 },
    /// A config variable that is present but unusable.
    #[error("invalid value for {var}: {value:?}")]
    InvalidConfig { var: String, value: String },
}
