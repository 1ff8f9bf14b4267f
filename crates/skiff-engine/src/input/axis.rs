/// Maps a pair of opposing held keys to a movement component.
///
/// `+1` for positive only, `-1` for negative only, `0` for both or neither.
#[inline]
pub fn axis_from_keys(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
