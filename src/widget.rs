//! The multi-handle slider widget.
//!
//! Ties the value space, handle selection, drag state machine and track
//! renderer to a host event loop. The host owns the value list: the widget
//! reports new lists through its callbacks and only sees them again when the
//! host calls [`MultiSlider::set_values`].

use crate::callback::Callback;
use crate::canvas::Canvas;
use crate::config::SliderConfig;
use crate::drag::{DragController, DragEvent, DragOutcome};
use crate::error::ConfigError;
use crate::event::{Event, MouseButton};
use crate::layout::{Point, Rectangle, Size};
use crate::range::{Classifier, Range};
use crate::render::{TrackFrame, TrackRenderer};
use crate::value_space::ValueSpace;

/// A horizontal slider carrying several ordered, draggable values.
pub struct MultiSlider<Message> {
    config: SliderConfig,
    /// Current values, as last handed over by the host
    values: Vec<f32>,
    drag: DragController,
    on_drag_start: Callback<Vec<f32>, Message>,
    on_change: Callback<Vec<f32>, Message>,
    on_drag_end: Callback<Vec<f32>, Message>,
    classifier: Classifier,
    formatter: Option<Box<dyn Fn(f32) -> String>>,
}

impl<Message> MultiSlider<Message> {
    /// Create a slider, rejecting invalid configs and value lists.
    pub fn new(config: SliderConfig, values: impl Into<Vec<f32>>) -> Result<Self, ConfigError> {
        let values = values.into();
        config.validate()?;
        config.validate_values(&values)?;

        Ok(Self {
            config,
            values,
            drag: DragController::new(),
            on_drag_start: Callback::none(),
            on_change: Callback::none(),
            on_drag_end: Callback::none(),
            classifier: Classifier::none(),
            formatter: None,
        })
    }

    /// Set the callback when a drag starts.
    pub fn on_drag_start<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<f32>) -> Message + 'static,
    {
        self.on_drag_start = Callback::new(f);
        self
    }

    /// Set the callback when values change. Without it the slider is disabled.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<f32>) -> Message + 'static,
    {
        self.on_change = Callback::new(f);
        self
    }

    /// Set the callback when a drag ends.
    pub fn on_drag_end<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<f32>) -> Message + 'static,
    {
        self.on_drag_end = Callback::new(f);
        self
    }

    /// Decide which ranges are painted active.
    pub fn classify<F>(mut self, f: F) -> Self
    where
        F: Fn(&Range) -> bool + 'static,
    {
        self.classifier = Classifier::new(f);
        self
    }

    /// Format value labels.
    pub fn label_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(f32) -> String + 'static,
    {
        self.formatter = Some(Box::new(f));
        self
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Hand over the host's current list. The handle count is fixed.
    pub fn set_values(&mut self, values: &[f32]) -> Result<(), ConfigError> {
        if values.len() != self.values.len() {
            return Err(ConfigError::LengthMismatch {
                expected: self.values.len(),
                found: values.len(),
            });
        }
        self.config.validate_values(values)?;
        self.values.clear();
        self.values.extend_from_slice(values);
        Ok(())
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.drag.selected_index()
    }

    /// False when the value range is empty or nobody listens for changes.
    pub fn is_enabled(&self) -> bool {
        self.config.range() > 0.0 && self.on_change.is_some()
    }

    /// Enabled and the bounds leave room for a track.
    pub fn is_interactive(&self, bounds: Rectangle) -> bool {
        self.is_enabled() && !self.value_space(bounds).is_degenerate()
    }

    /// Value mapping for the given bounds, relative to `bounds.x`.
    pub fn value_space(&self, bounds: Rectangle) -> ValueSpace {
        ValueSpace::new(
            self.config.min,
            self.config.max,
            self.config.horizontal_padding,
            bounds.width,
        )
    }

    /// Preferred size: all of the available width, configured height.
    pub fn size(&self, available_width: f32) -> Size {
        Size::new(available_width.max(0.0), self.config.height)
    }

    /// Feed a pointer event, returning the notifications it produced.
    ///
    /// A press starts a gesture when it hits `bounds`; moves update it;
    /// release or cancel ends it. Start produces the start and change
    /// messages, update the change message, end the end message.
    pub fn on_event(&mut self, event: &Event, bounds: Rectangle) -> Vec<Message> {
        if !self.is_interactive(bounds) {
            if self.drag.is_dragging() {
                log::trace!("Slider became non-interactive mid-drag, dropping gesture");
                self.drag.reset();
            }
            return Vec::new();
        }

        let space = self.value_space(bounds);
        let divisions = self.config.divisions;

        let outcome = match *event {
            Event::PointerPressed {
                button: MouseButton::Left,
                position,
            } if bounds.contains(position) => {
                self.drag
                    .start(&self.values, bounds.local_x(position), &space, divisions)
            }
            Event::PointerMoved { position } => {
                self.drag
                    .update(&self.values, bounds.local_x(position), &space, divisions)
            }
            Event::PointerReleased {
                button: MouseButton::Left,
                ..
            }
            | Event::PointerCancelled => self.drag.end(&self.values),
            _ => return Vec::new(),
        };

        self.notify(outcome)
    }

    fn notify(&self, outcome: DragOutcome) -> Vec<Message> {
        outcome
            .events
            .iter()
            .filter_map(|event| {
                let values = outcome.values.clone();
                match event {
                    DragEvent::Started => self.on_drag_start.call(values),
                    DragEvent::Changed => self.on_change.call(values),
                    DragEvent::Ended => self.on_drag_end.call(values),
                }
            })
            .collect()
    }

    /// Paint the slider into `bounds`.
    pub fn draw(&self, canvas: &mut dyn Canvas, bounds: Rectangle) {
        let frame = TrackFrame {
            values: &self.values,
            space: self.value_space(bounds),
            origin: Point::new(bounds.x, bounds.center_y()),
            divisions: self.config.divisions,
            selected: self.drag.selected_index(),
        };

        TrackRenderer::new(
            &self.config.style,
            &self.config.indicator,
            &self.classifier,
            self.is_interactive(bounds),
        )
        .formatter(self.formatter.as_deref())
        .paint(canvas, &frame);
    }
}

impl<Message> std::fmt::Debug for MultiSlider<Message> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiSlider")
            .field("values", &self.values)
            .field("drag", self.drag.state())
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, DrawList};

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Start(Vec<f32>),
        Change(Vec<f32>),
        End(Vec<f32>),
    }

    /// 0..100 over a 220 px wide widget at x = 50: track runs 60..260, 2 px per unit.
    fn bounds() -> Rectangle {
        Rectangle::new(50.0, 0.0, 220.0, 45.0)
    }

    fn config() -> SliderConfig {
        SliderConfig {
            min: 0.0,
            max: 100.0,
            horizontal_padding: 10.0,
            ..Default::default()
        }
    }

    fn at(value: f32) -> Point {
        Point::new(60.0 + value * 2.0, 20.0)
    }

    fn press(value: f32) -> Event {
        Event::PointerPressed {
            button: MouseButton::Left,
            position: at(value),
        }
    }

    fn move_to(value: f32) -> Event {
        Event::PointerMoved {
            position: at(value),
        }
    }

    fn release() -> Event {
        Event::PointerReleased {
            button: MouseButton::Left,
            position: Point::zero(),
        }
    }

    fn slider(values: &[f32]) -> MultiSlider<Message> {
        MultiSlider::new(config(), values)
            .unwrap()
            .on_drag_start(Message::Start)
            .on_change(Message::Change)
            .on_drag_end(Message::End)
    }

    /// Apply messages the way a host would: adopt the latest list.
    fn apply(slider: &mut MultiSlider<Message>, messages: &[Message]) {
        for message in messages {
            let values = match message {
                Message::Start(v) | Message::Change(v) | Message::End(v) => v,
            };
            slider.set_values(values).unwrap();
        }
    }

    #[test]
    fn test_full_gesture() {
        let mut slider = slider(&[10.0, 20.0, 30.0]);

        let messages = slider.on_event(&press(19.0), bounds());
        assert_eq!(
            messages,
            vec![
                Message::Start(vec![10.0, 19.0, 30.0]),
                Message::Change(vec![10.0, 19.0, 30.0]),
            ]
        );
        assert_eq!(slider.selected_index(), Some(1));
        apply(&mut slider, &messages);

        let messages = slider.on_event(&move_to(25.0), bounds());
        assert_eq!(messages, vec![Message::Change(vec![10.0, 25.0, 30.0])]);
        apply(&mut slider, &messages);

        let messages = slider.on_event(&release(), bounds());
        assert_eq!(messages, vec![Message::End(vec![10.0, 25.0, 30.0])]);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_drag_past_neighbor_clamps() {
        let mut slider = slider(&[10.0, 20.0, 30.0]);
        let messages = slider.on_event(&press(20.0), bounds());
        apply(&mut slider, &messages);

        let messages = slider.on_event(&move_to(35.0), bounds());
        assert_eq!(messages, vec![Message::Change(vec![10.0, 30.0, 30.0])]);
    }

    #[test]
    fn test_first_handle_clamps_to_min() {
        let mut slider = slider(&[10.0, 20.0, 30.0]);
        slider.on_event(&press(10.0), bounds());
        let messages = slider.on_event(
            &Event::PointerMoved {
                position: Point::new(0.0, 20.0),
            },
            bounds(),
        );
        assert_eq!(messages, vec![Message::Change(vec![0.0, 20.0, 30.0])]);
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let mut slider = slider(&[10.0, 20.0]);
        assert!(slider.on_event(&move_to(50.0), bounds()).is_empty());
        assert!(slider.on_event(&release(), bounds()).is_empty());
    }

    #[test]
    fn test_press_outside_bounds_is_ignored() {
        let mut slider = slider(&[10.0, 20.0]);
        let outside = Event::PointerPressed {
            button: MouseButton::Left,
            position: Point::new(10.0, 20.0),
        };
        assert!(slider.on_event(&outside, bounds()).is_empty());
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_right_button_does_not_start() {
        let mut slider = slider(&[10.0, 20.0]);
        let right = Event::PointerPressed {
            button: MouseButton::Right,
            position: at(15.0),
        };
        assert!(slider.on_event(&right, bounds()).is_empty());
    }

    #[test]
    fn test_cancel_ends_gesture() {
        let mut slider = slider(&[10.0, 20.0]);
        slider.on_event(&press(12.0), bounds());
        let messages = slider.on_event(&Event::PointerCancelled, bounds());
        assert_eq!(messages, vec![Message::End(vec![12.0, 20.0])]);
    }

    #[test]
    fn test_divisions_snap_all_values() {
        let config = SliderConfig {
            divisions: Some(10),
            ..config()
        };
        let mut slider = MultiSlider::new(config, vec![12.0, 47.0])
            .unwrap()
            .on_change(Message::Change);
        let messages = slider.on_event(&press(33.0), bounds());
        assert_eq!(messages, vec![Message::Change(vec![10.0, 30.0])]);
    }

    #[test]
    fn test_track_width_is_reread_each_event() {
        let mut slider = slider(&[50.0]);
        let wide = Rectangle::new(0.0, 0.0, 420.0, 45.0);
        // 400 px usable: 4 px per unit, x = 10 + 4 * 75
        let messages = slider.on_event(
            &Event::PointerPressed {
                button: MouseButton::Left,
                position: Point::new(310.0, 20.0),
            },
            wide,
        );
        assert_eq!(messages.last(), Some(&Message::Change(vec![75.0])));
    }

    #[test]
    fn test_disabled_without_on_change() {
        let mut slider: MultiSlider<Message> = MultiSlider::new(config(), vec![10.0, 20.0])
            .unwrap()
            .on_drag_start(Message::Start);
        assert!(!slider.is_enabled());
        assert!(slider.on_event(&press(10.0), bounds()).is_empty());
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_disabled_with_zero_range() {
        let config = SliderConfig {
            min: 5.0,
            max: 5.0,
            ..config()
        };
        let mut slider = MultiSlider::new(config, vec![5.0, 5.0])
            .unwrap()
            .on_change(Message::Change);
        assert!(!slider.is_enabled());
        assert!(slider.on_event(&press(0.0), bounds()).is_empty());

        let mut list = DrawList::new();
        slider.draw(&mut list, bounds());
        match list.commands().last() {
            Some(DrawCommand::Circle { color, .. }) => {
                assert_eq!(*color, slider.config().style.disabled_thumb_color);
            }
            other => panic!("expected thumb, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_bounds_drop_active_gesture() {
        let mut slider = slider(&[10.0, 20.0]);
        slider.on_event(&press(10.0), bounds());
        assert!(slider.is_dragging());

        let squashed = Rectangle::new(50.0, 0.0, 15.0, 45.0);
        assert!(slider.on_event(&move_to(15.0), squashed).is_empty());
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_construction_rejects_bad_values() {
        assert!(matches!(
            MultiSlider::<Message>::new(config(), vec![30.0, 20.0]),
            Err(ConfigError::NotAscending { .. })
        ));
        assert!(matches!(
            MultiSlider::<Message>::new(config(), Vec::new()),
            Err(ConfigError::EmptyValues)
        ));
        assert!(matches!(
            MultiSlider::<Message>::new(config(), vec![-1.0]),
            Err(ConfigError::OutOfRange { .. })
        ));
        let bad = SliderConfig {
            divisions: Some(0),
            ..config()
        };
        assert!(matches!(
            MultiSlider::<Message>::new(bad, vec![1.0]),
            Err(ConfigError::ZeroDivisions)
        ));
    }

    #[test]
    fn test_set_values_keeps_handle_count() {
        let mut slider = slider(&[10.0, 20.0]);
        assert!(matches!(
            slider.set_values(&[1.0, 2.0, 3.0]),
            Err(ConfigError::LengthMismatch {
                expected: 2,
                found: 3
            })
        ));
        slider.set_values(&[40.0, 60.0]).unwrap();
        assert_eq!(slider.values(), &[40.0, 60.0]);
    }

    #[test]
    fn test_draw_shows_halo_while_dragging() {
        let mut slider = slider(&[10.0, 90.0]);
        let mut idle = DrawList::new();
        slider.draw(&mut idle, bounds());

        slider.on_event(&press(88.0), bounds());
        let mut dragging = DrawList::new();
        slider.draw(&mut dragging, bounds());

        assert_eq!(dragging.len(), idle.len() + 1);
    }

    #[test]
    fn test_custom_classify_changes_paint() {
        let slider = slider(&[10.0, 90.0]).classify(|range: &Range| range.is_first);
        let mut list = DrawList::new();
        slider.draw(&mut list, bounds());

        let style = &slider.config().style;
        let first_line = list.commands().iter().find_map(|c| match c {
            DrawCommand::Line { color, width, .. } => Some((*color, *width)),
            _ => None,
        });
        assert_eq!(
            first_line,
            Some((style.active_color, style.active_track_size))
        );
    }

    #[test]
    fn test_size() {
        let slider = slider(&[10.0]);
        assert_eq!(slider.size(300.0), Size::new(300.0, 45.0));
    }
}
