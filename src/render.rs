//! Paints the track, tick marks and thumbs onto a [`Canvas`].
//!
//! Order is fixed: end caps, track segments, tick marks, then per handle the
//! selection halo, the value label and the thumb disc. Thumbs are therefore
//! never covered by track art.

use std::f32::consts::PI;

use crate::canvas::{Canvas, Shadow};
use crate::color::Color;
use crate::config::{IndicatorConfig, SliderStyle, TrackColors};
use crate::layout::Point;
use crate::range::{partition, Classifier, Range};
use crate::value_space::{snap, ValueSpace};

/// Halo radius relative to the thumb radius.
const HALO_SCALE: f32 = 2.0;
/// Halo opacity over the active track color.
const HALO_ALPHA: f32 = 0.25;
/// Tick radius relative to the track thickness it sits on.
const TICK_SCALE: f32 = 0.25;

/// Per-frame input to [`TrackRenderer::paint`].
#[derive(Debug, Clone, Copy)]
pub struct TrackFrame<'a> {
    pub values: &'a [f32],
    /// Mapping for the current bounds, relative to `origin.x`
    pub space: ValueSpace,
    /// Left edge of the widget and vertical center of the track
    pub origin: Point,
    pub divisions: Option<u32>,
    /// Handle grabbed by the active gesture
    pub selected: Option<usize>,
}

/// Stateless painter for one slider.
pub struct TrackRenderer<'a> {
    style: &'a SliderStyle,
    indicator: &'a IndicatorConfig,
    classifier: &'a Classifier,
    formatter: Option<&'a dyn Fn(f32) -> String>,
    colors: TrackColors,
    enabled: bool,
}

impl<'a> TrackRenderer<'a> {
    pub fn new(
        style: &'a SliderStyle,
        indicator: &'a IndicatorConfig,
        classifier: &'a Classifier,
        enabled: bool,
    ) -> Self {
        Self {
            style,
            indicator,
            classifier,
            formatter: None,
            colors: style.colors(enabled),
            enabled,
        }
    }

    /// Use a host formatter for value labels instead of the fixed-precision default.
    pub fn formatter(mut self, formatter: Option<&'a dyn Fn(f32) -> String>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Issue all draw calls for one frame.
    pub fn paint(&self, canvas: &mut dyn Canvas, frame: &TrackFrame<'_>) {
        let space = &frame.space;
        if space.usable_width() <= 0.0 {
            // No room for a track
            return;
        }

        let positions: Vec<f32> = frame
            .values
            .iter()
            .map(|&v| space.value_to_pixel(v))
            .collect();
        let ranges = partition(
            &positions,
            space.track_start(),
            space.track_end(),
            frame.divisions,
        );

        self.paint_caps(canvas, frame.origin, &ranges);
        self.paint_segments(canvas, frame.origin, &ranges);
        if let Some(divisions) = frame.divisions.filter(|d| *d > 0) {
            self.paint_ticks(canvas, frame.origin, space, &ranges, divisions);
        }
        self.paint_handles(canvas, frame, &ranges);
    }

    /// Active/inactive color and thickness from the classification alone.
    fn range_style(&self, range: &Range) -> (Color, f32) {
        let active = self.classifier.is_active(range);
        let color = if active {
            self.colors.active
        } else {
            self.colors.inactive
        };
        (color, self.style.track_size(active))
    }

    /// Like [`Self::range_style`], but a per-range override wins while enabled.
    fn segment_style(&self, range: &Range) -> (Color, f32) {
        let (color, size) = self.range_style(range);
        let color = match self.style.range_color(range.index) {
            Some(custom) if self.enabled => custom,
            _ => color,
        };
        (color, size)
    }

    fn paint_caps(&self, canvas: &mut dyn Canvas, origin: Point, ranges: &[Range]) {
        let (Some(first), Some(last)) = (ranges.first(), ranges.last()) else {
            return;
        };

        let (color, size) = self.range_style(first);
        canvas.draw_arc(
            Point::new(origin.x + first.start, origin.y),
            size / 2.0,
            PI / 2.0,
            PI,
            color,
        );

        let (color, size) = self.range_style(last);
        canvas.draw_arc(
            Point::new(origin.x + last.end, origin.y),
            size / 2.0,
            -PI / 2.0,
            PI,
            color,
        );
    }

    fn paint_segments(&self, canvas: &mut dyn Canvas, origin: Point, ranges: &[Range]) {
        for range in ranges.iter().filter(|r| !r.is_empty()) {
            let (color, size) = self.segment_style(range);
            canvas.draw_line(
                Point::new(origin.x + range.start, origin.y),
                Point::new(origin.x + range.end, origin.y),
                size,
                color,
            );
        }
    }

    fn paint_ticks(
        &self,
        canvas: &mut dyn Canvas,
        origin: Point,
        space: &ValueSpace,
        ranges: &[Range],
        divisions: u32,
    ) {
        let (start, end) = (space.track_start(), space.track_end());
        let step = (end - start) / divisions as f32;
        for i in 0..=divisions {
            let x = (start + i as f32 * step).clamp(start, end);
            // A tick on a handle belongs to the range below it
            let Some(range) = ranges.iter().find(|r| r.contains(x)) else {
                continue;
            };
            let active = self.classifier.is_active(range);
            // Ticks contrast with the track they sit on
            let color = if active {
                self.colors.inactive
            } else {
                self.colors.active
            };
            canvas.draw_circle(
                Point::new(origin.x + x, origin.y),
                self.style.track_size(active) * TICK_SCALE,
                color,
                None,
            );
        }
    }

    fn paint_handles(&self, canvas: &mut dyn Canvas, frame: &TrackFrame<'_>, ranges: &[Range]) {
        let radius = self.style.thumb_radius;
        let shadow = (self.style.thumb_elevation > 0.0).then_some(Shadow {
            color: self.style.shadow_color,
            elevation: self.style.thumb_elevation,
        });

        let space = &frame.space;
        for (i, &value) in frame.values.iter().enumerate() {
            // Range i ends at handle i, already snapped when divisions are set
            let Some(range) = ranges.get(i) else {
                break;
            };
            let center = Point::new(frame.origin.x + range.end, frame.origin.y);

            if self.style.selected_halo && frame.selected == Some(i) {
                canvas.draw_circle(
                    center,
                    radius * HALO_SCALE,
                    self.colors.active.with_alpha(HALO_ALPHA),
                    None,
                );
            }

            if self.indicator.show {
                // Label what the thumb shows, not the raw host value
                let value = match frame.divisions {
                    Some(d) if d > 0 => {
                        snap(value, space.min(), space.max(), d).clamp(space.min(), space.max())
                    }
                    _ => value,
                };
                let text = match self.formatter {
                    Some(format) => format(value),
                    None => self.indicator.format(value),
                };
                canvas.draw_text(
                    &text,
                    Point::new(center.x, center.y - radius - self.indicator.gap),
                    self.indicator.font_size,
                    self.indicator.color,
                );
            }

            canvas.draw_circle(center, radius, self.colors.thumb, shadow);
        }
    }
}
