/// Retry budget for the constraint solver. An empirical ceiling, not a
/// convergence guarantee; see the `calibrate` subcommand for measuring it.
pub const MAX_ATTEMPTS: u32 = 60;

/// Upper bound on the random candidate subsample drawn per meal slot.
pub const SLOT_SAMPLE_SIZE: usize = 30;

/// Portion clamp in grams.
pub const MIN_PORTION_G: u32 = 100;
pub const MAX_PORTION_G: u32 = 400;

/// Food names are truncated to this width in plan output.
pub const NAME_TRUNCATE_LEN: usize = 25;

// ─────────────────────────────────────────────────────────────────────────────
// Anthropometrics
// ─────────────────────────────────────────────────────────────────────────────

/// Centimeters to inches, for the US Navy body-fat formula.
pub const CM_TO_IN: f64 = 0.393701;

/// Body-fat percentage clamp.
pub const MIN_BODY_FAT_PCT: f64 = 5.0;
pub const MAX_BODY_FAT_PCT: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog numeric ranges (per 100 g, half-open)
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_RANGE: (u32, u32) = (80, 450);
pub const PROTEIN_RANGE_G: (f64, f64) = (3.0, 25.0);
pub const CARB_RANGE_G: (f64, f64) = (10.0, 70.0);
pub const FAT_RANGE_G: (f64, f64) = (2.0, 20.0);
pub const FIBER_RANGE_G: (f64, f64) = (0.0, 8.0);
