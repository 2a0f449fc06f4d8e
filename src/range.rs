//! Track partitioning and active/inactive classification.
//!
//! The track is split at every handle into contiguous ranges, including the
//! two caps before the first and after the last handle. A host predicate
//! decides which ranges are painted as active. Ranges are recomputed on
//! every paint and never stored.

use std::fmt;

use crate::value_space::snap;

/// A closed interval `[start, end]` of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub start: f32,
    pub end: f32,
    pub index: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl Range {
    /// Inclusive on both ends.
    pub fn contains(&self, x: f32) -> bool {
        x >= self.start && x <= self.end
    }

    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0.0
    }
}

/// Split `[start, end]` at each position.
///
/// With `divisions`, every position is first snapped onto the grid spanning
/// `[start, end]`; pass pixel bounds with pixel positions, value bounds with
/// values. Always yields `positions.len() + 1` ranges.
pub fn partition(positions: &[f32], start: f32, end: f32, divisions: Option<u32>) -> Vec<Range> {
    let mut edges = Vec::with_capacity(positions.len() + 2);
    edges.push(start);
    edges.extend(positions.iter().map(|&p| match divisions {
        Some(d) if d > 0 => snap(p, start, end, d),
        _ => p,
    }));
    edges.push(end);

    let last = edges.len() - 2;
    edges
        .windows(2)
        .enumerate()
        .map(|(index, pair)| Range {
            start: pair[0],
            end: pair[1],
            index,
            is_first: index == 0,
            is_last: index == last,
        })
        .collect()
}

/// Default classification: only ranges between two handles are active.
pub fn default_classify(range: &Range) -> bool {
    !range.is_first && !range.is_last
}

/// Host-supplied predicate deciding whether a range is painted active.
///
/// The predicate must be pure: it may be queried more than once for the
/// same range within a single paint.
pub struct Classifier {
    f: Option<Box<dyn Fn(&Range) -> bool>>,
}

impl Classifier {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Range) -> bool + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Use [`default_classify`].
    pub fn none() -> Self {
        Self { f: None }
    }

    pub fn is_custom(&self) -> bool {
        self.f.is_some()
    }

    pub fn is_active(&self, range: &Range) -> bool {
        match &self.f {
            Some(f) => f(range),
            None => default_classify(range),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("custom", &self.is_custom())
            .finish()
    }
}
