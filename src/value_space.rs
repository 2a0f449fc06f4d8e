//! Value <-> pixel mapping and discrete-step snapping.
//!
//! The mapping is linear between `[min, max]` and
//! `[padding, track_width - padding]`. Pixels are relative to the left edge
//! of the widget.

/// Linear mapping between logical values and horizontal pixel offsets.
///
/// Built fresh from the current bounds on every event and paint, since the
/// host layout may change the track width between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueSpace {
    min: f32,
    max: f32,
    padding: f32,
    track_width: f32,
}

impl ValueSpace {
    /// Create a value space for the given bounds and track geometry.
    pub fn new(min: f32, max: f32, padding: f32, track_width: f32) -> Self {
        Self {
            min,
            max,
            padding,
            track_width,
        }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// `max - min`.
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// Pixel offset of the start of the usable track.
    pub fn track_start(&self) -> f32 {
        self.padding
    }

    /// Pixel offset of the end of the usable track.
    pub fn track_end(&self) -> f32 {
        self.track_width - self.padding
    }

    /// Usable track length in pixels.
    pub fn usable_width(&self) -> f32 {
        self.track_width - 2.0 * self.padding
    }

    /// True when the value range is empty or the track has no usable length.
    ///
    /// In that case the slider is disabled and the conversions below fall
    /// back to the track start / `min` instead of dividing by zero.
    pub fn is_degenerate(&self) -> bool {
        self.range() <= 0.0 || self.usable_width() <= 0.0
    }

    /// Map a value to its pixel offset.
    pub fn value_to_pixel(&self, value: f32) -> f32 {
        if self.range() <= 0.0 {
            return self.padding;
        }
        (value - self.min) * self.usable_width() / self.range() + self.padding
    }

    /// Map a pixel offset back to a value. Not clamped to `[min, max]`.
    pub fn pixel_to_value(&self, pixel: f32) -> f32 {
        let usable = self.usable_width();
        if usable <= 0.0 {
            return self.min;
        }
        (pixel - self.padding) * self.range() / usable + self.min
    }
}

/// Quantize `value` onto `divisions` equal steps spanning `[start, end]`.
///
/// Works in whichever space the caller passes: value space
/// (`start = min, end = max`) when quantizing dragged values, pixel space
/// (`start = track_start, end = track_end`) when partitioning the track for
/// painting. Rounds half away from zero on the step quotient.
pub fn snap(value: f32, start: f32, end: f32, divisions: u32) -> f32 {
    if divisions == 0 {
        return value;
    }
    let step = (end - start) / divisions as f32;
    if step == 0.0 {
        return start;
    }
    start + ((value - start) / step).round() * step
}
