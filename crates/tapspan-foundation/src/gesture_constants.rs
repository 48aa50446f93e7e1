//! Shared gesture constants for press handling.
//!
//! Values are in logical pixels.

/// Press slop in logical pixels.
///
/// If the pointer travels further than this from the press position the
/// press is cancelled and the release will not fire a click.
/// Matches the common platform touch slop (Android uses ~8dp).
pub const DRAG_THRESHOLD: f32 = 8.0;
