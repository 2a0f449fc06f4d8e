//! Picks which handle a gesture grabs.

/// Index of the handle nearest to `target` (a value, not a pixel).
///
/// When several handles share the minimum distance, only the first and last
/// tied indices are considered: if the target lies to the right of the first
/// tied handle the last tied one wins, otherwise the first. Stacked handles
/// therefore peel off in the direction the pointer sits.
///
/// Called once per gesture; the result is held for the whole drag so a
/// handle never changes identity while crossing its neighbors.
pub fn select_nearest(values: &[f32], target: f32) -> usize {
    if values.len() <= 1 {
        return 0;
    }

    let mut min_diff = f32::INFINITY;
    let mut first_idx = 0;
    let mut last_idx = 0;
    for (i, value) in values.iter().enumerate() {
        let diff = (value - target).abs();
        if diff < min_diff {
            min_diff = diff;
            first_idx = i;
            last_idx = i;
        } else if diff == min_diff {
            last_idx = i;
        }
    }

    if first_idx == last_idx {
        first_idx
    } else if target > values[first_idx] {
        last_idx
    } else {
        first_idx
    }
}
