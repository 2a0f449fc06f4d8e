//! Gesture state machine for dragging one handle at a time.

use crate::selector::select_nearest;
use crate::value_space::{snap, ValueSpace};

/// Handle drag interaction state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A handle is grabbed
    Dragging {
        /// Index of the grabbed handle, fixed for the whole gesture
        index: usize,
        /// Last list emitted during this gesture
        last: Vec<f32>,
    },
}

impl DragState {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Index of the grabbed handle, if any
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { index, .. } => Some(*index),
        }
    }
}

/// Notification produced by a gesture step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Started,
    Changed,
    Ended,
}

/// Result of feeding one gesture event to the controller.
///
/// `values` is always a fresh list; the caller's slice is never mutated.
/// Every entry in `events` refers to `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome {
    pub values: Vec<f32>,
    pub events: Vec<DragEvent>,
}

impl DragOutcome {
    fn unchanged(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
            events: Vec::new(),
        }
    }

    /// True when the step was ignored.
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}

/// Tracks the grabbed handle across start / update / end.
///
/// Holds no value list beyond the current gesture. Update and end without a
/// preceding start are silently ignored, since a cancelled gesture may
/// deliver its pointer events out of order.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index()
    }

    /// Grab the handle nearest to `pointer_x` and move it there.
    ///
    /// Emits `Started` then `Changed`, both carrying the moved list.
    /// A degenerate value space refuses the gesture.
    pub fn start(
        &mut self,
        values: &[f32],
        pointer_x: f32,
        space: &ValueSpace,
        divisions: Option<u32>,
    ) -> DragOutcome {
        if values.is_empty() || space.is_degenerate() {
            log::trace!("Refusing drag start: no handles or degenerate geometry");
            return DragOutcome::unchanged(values);
        }

        let target = space.pixel_to_value(pointer_x);
        let index = select_nearest(values, target);
        log::debug!("Drag start: handle {} grabbed at value {}", index, target);

        self.state = DragState::Dragging {
            index,
            last: values.to_vec(),
        };

        let mut outcome = self.update(values, pointer_x, space, divisions);
        outcome.events.insert(0, DragEvent::Started);
        outcome
    }

    /// Move the grabbed handle to `pointer_x`, bounded by its neighbors.
    pub fn update(
        &mut self,
        values: &[f32],
        pointer_x: f32,
        space: &ValueSpace,
        divisions: Option<u32>,
    ) -> DragOutcome {
        let DragState::Dragging { index, last } = &mut self.state else {
            return DragOutcome::unchanged(values);
        };
        let index = *index;
        if index >= values.len() || space.is_degenerate() {
            log::trace!("Ignoring drag update for handle {}", index);
            return DragOutcome::unchanged(values);
        }

        let raw = space.pixel_to_value(pointer_x);
        let lower = if index == 0 {
            space.min()
        } else {
            values[index - 1]
        };
        let upper = if index == values.len() - 1 {
            space.max()
        } else {
            values[index + 1]
        };
        let clamped = raw.max(lower).min(upper);

        let mut next = values.to_vec();
        next[index] = clamped;

        if let Some(divisions) = divisions.filter(|d| *d > 0) {
            let (min, max) = (space.min(), space.max());
            for value in &mut next {
                *value = snap(*value, min, max, divisions).clamp(min, max);
            }
        }

        log::trace!("Drag update: handle {} -> {:?}", index, next);
        last.clone_from(&next);

        DragOutcome {
            values: next,
            events: vec![DragEvent::Changed],
        }
    }

    /// Release the grabbed handle, reporting the last list of the gesture.
    pub fn end(&mut self, values: &[f32]) -> DragOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Idle => DragOutcome::unchanged(values),
            DragState::Dragging { index, last } => {
                log::debug!("Drag end: handle {} released at {:?}", index, last);
                DragOutcome {
                    values: last,
                    events: vec![DragEvent::Ended],
                }
            }
        }
    }

    /// Drop the gesture without emitting anything.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// 0..100 mapped onto pixels 0..100 (no padding) for easy reading.
    fn unit_space() -> ValueSpace {
        ValueSpace::new(0.0, 100.0, 0.0, 100.0)
    }

    fn is_sorted_within(values: &[f32], min: f32, max: f32) -> bool {
        values.windows(2).all(|w| w[0] <= w[1]) && values.iter().all(|v| *v >= min && *v <= max)
    }

    #[test]
    fn test_start_emits_start_then_change() {
        let mut drag = DragController::new();
        let outcome = drag.start(&[10.0, 20.0, 30.0], 12.0, &unit_space(), None);

        assert_eq!(outcome.events, vec![DragEvent::Started, DragEvent::Changed]);
        assert_eq!(drag.selected_index(), Some(0));
        assert!(approx_eq(outcome.values[0], 12.0));
    }

    #[test]
    fn test_update_clamps_to_upper_neighbor() {
        let mut drag = DragController::new();
        let values = [10.0, 20.0, 30.0];
        drag.start(&values, 21.0, &unit_space(), None);
        assert_eq!(drag.selected_index(), Some(1));

        let outcome = drag.update(&values, 35.0, &unit_space(), None);
        assert_eq!(outcome.values, vec![10.0, 30.0, 30.0]);
    }

    #[test]
    fn test_update_clamps_to_min() {
        let space = ValueSpace::new(0.0, 100.0, 10.0, 120.0);
        let mut drag = DragController::new();
        let values = [10.0, 20.0, 30.0];
        drag.start(&values, space.value_to_pixel(10.0), &space, None);

        let outcome = drag.update(&values, -50.0, &space, None);
        assert_eq!(outcome.values[0], 0.0);
    }

    #[test]
    fn test_update_clamps_last_handle_to_max() {
        let mut drag = DragController::new();
        let values = [10.0, 20.0, 30.0];
        drag.start(&values, 31.0, &unit_space(), None);

        let outcome = drag.update(&values, 500.0, &unit_space(), None);
        assert_eq!(outcome.values, vec![10.0, 20.0, 100.0]);
    }

    #[test]
    fn test_selection_is_held_across_neighbors() {
        let mut drag = DragController::new();
        let mut values = vec![10.0, 20.0, 30.0];
        values = drag.start(&values, 19.0, &unit_space(), None).values;
        assert_eq!(drag.selected_index(), Some(1));

        // Pointer moves right on top of handle 2; handle 1 stays grabbed
        for x in [25.0, 29.0, 31.0, 45.0] {
            values = drag.update(&values, x, &unit_space(), None).values;
            assert_eq!(drag.selected_index(), Some(1));
        }
        assert_eq!(values, vec![10.0, 30.0, 30.0]);
    }

    #[test]
    fn test_divisions_snap_every_value() {
        let mut drag = DragController::new();
        let values = [11.0, 52.0, 88.0];
        let outcome = drag.start(&values, 49.0, &unit_space(), Some(10));

        assert_eq!(drag.selected_index(), Some(1));
        assert_eq!(outcome.values, vec![10.0, 50.0, 90.0]);
    }

    #[test]
    fn test_update_does_not_mutate_input() {
        let mut drag = DragController::new();
        let values = vec![10.0, 20.0, 30.0];
        drag.start(&values, 20.0, &unit_space(), None);
        let _ = drag.update(&values, 25.0, &unit_space(), None);
        assert_eq!(values, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_update_without_start_is_noop() {
        let mut drag = DragController::new();
        let values = [10.0, 20.0];
        let outcome = drag.update(&values, 90.0, &unit_space(), None);
        assert!(outcome.is_noop());
        assert_eq!(outcome.values, values.to_vec());
    }

    #[test]
    fn test_end_without_start_is_noop() {
        let mut drag = DragController::new();
        let outcome = drag.end(&[1.0, 2.0]);
        assert!(outcome.is_noop());
        assert_eq!(outcome.values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_end_reports_last_emitted_list() {
        let mut drag = DragController::new();
        let values = [10.0, 20.0, 30.0];
        drag.start(&values, 10.0, &unit_space(), None);
        let moved = drag.update(&values, 15.0, &unit_space(), None).values;

        // Host passes a stale list on release; the last emitted list wins
        let outcome = drag.end(&values);
        assert_eq!(outcome.events, vec![DragEvent::Ended]);
        assert_eq!(outcome.values, moved);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_degenerate_space_refuses_start() {
        let mut drag = DragController::new();
        let space = ValueSpace::new(3.0, 3.0, 0.0, 100.0);
        let outcome = drag.start(&[3.0, 3.0], 50.0, &space, None);
        assert!(outcome.is_noop());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_random_walk_keeps_order_and_bounds() {
        let space = ValueSpace::new(-10.0, 10.0, 12.0, 212.0);
        let mut drag = DragController::new();
        let mut values = vec![-8.0, -2.0, 0.0, 0.0, 7.5];

        // Deterministic pseudo-random pointer positions, including off-track
        let mut seed: u32 = 12345;
        for gesture in 0..40 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let press = (seed % 260) as f32 - 20.0;
            let divisions = if gesture % 3 == 0 { Some(8) } else { None };
            values = drag.start(&values, press, &space, divisions).values;
            for _ in 0..10 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let x = (seed % 300) as f32 - 40.0;
                values = drag.update(&values, x, &space, divisions).values;
                assert!(is_sorted_within(&values, -10.0, 10.0), "{:?}", values);
            }
            values = drag.end(&values).values;
        }
    }
}
