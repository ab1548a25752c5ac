//! Shared constants for the box geometry engine.

// ── Paths ───────────────────────────────────────────────────────

/// Closed unit-square outline. Every box renders with this path; placement
/// and size come from the view box and transform only.
pub const UNIT_SQUARE_PATH: &str = "M0 0 H1 V1 H0 Z";

// ── Gestures ────────────────────────────────────────────────────

/// Side of the square a click (rather than a drag) snaps to, in surface pixels.
pub const DEFAULT_CLICK_SIDE_PX: f64 = 100.0;

/// A gesture whose pixel extent is at most this in both axes counts as a click.
pub const DEFAULT_CANCEL_THRESHOLD_PX: f64 = 2.0;

// ── Display ─────────────────────────────────────────────────────

/// Scale used by display rounding: four decimal places.
pub const DISPLAY_PRECISION: f64 = 10_000.0;

// ── Serialization ───────────────────────────────────────────────

/// Move-to marker placed before each corner in a serialized outline.
pub const OUTLINE_MARKER: [f64; 4] = [f64::NAN; 4];
