//! Pure geometry of the score track: value to pointer offset, cursor
//! position back to value. The owning screen holds the value itself; nothing
//! here keeps state.

/// Upper bound of the health score. Scores are clamped, never rejected.
pub const SCORE_MAX: u32 = 3000;

/// Spacing of the numeric markings under the track.
pub const TICK_STEP: u32 = 600;

/// Fractional distance of a score along the track, in [0, 1].
pub fn normalized(value: u32) -> f32 {
    value.min(SCORE_MAX) as f32 / SCORE_MAX as f32
}

/// Pointer offset in pixels for a score on a track of the given width.
pub fn pointer_offset(value: u32, track_width: f32) -> f32 {
    normalized(value) * track_width
}

/// Score for an absolute cursor x relative to the track origin. The cursor
/// is clamped to the track bounds first, so dragging past either end pins
/// the score to 0 or [`SCORE_MAX`].
pub fn drag_value(pointer_x: f32, track_origin: f32, track_width: f32) -> u32 {
    if track_width <= f32::EPSILON {
        return 0;
    }
    let relative = (pointer_x - track_origin).clamp(0.0, track_width);
    ((relative / track_width) * SCORE_MAX as f32).round() as u32
}

/// Marking values rendered beneath the track: 0, 600, .., 3000.
pub fn tick_values() -> impl Iterator<Item = u32> {
    (0..=SCORE_MAX).step_by(TICK_STEP as usize)
}
