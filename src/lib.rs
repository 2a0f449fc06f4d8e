//! multislider - an interactive multi-handle slider core
//!
//! A horizontal track carries an ordered list of values, one draggable thumb
//! per value. This crate maps pointer gestures to new value lists and paints
//! the track onto an abstract [`Canvas`]:
//!
//! - [`ValueSpace`] converts between values and pixels and snaps to divisions.
//! - [`select_nearest`] picks the handle a gesture grabs.
//! - [`DragController`] runs the start / update / end state machine, keeping
//!   values ordered and within bounds.
//! - [`partition`] and [`Classifier`] split the track into ranges and decide
//!   which are painted active.
//! - [`TrackRenderer`] issues the draw calls.
//! - [`MultiSlider`] wires all of the above to host events and callbacks.
//!
//! # Example
//!
//! ```
//! use multislider::{DrawList, Event, MouseButton, MultiSlider, Point, Rectangle, SliderConfig};
//!
//! let config = SliderConfig { min: 0.0, max: 100.0, ..Default::default() };
//! let mut slider = MultiSlider::new(config, vec![20.0, 80.0])
//!     .unwrap()
//!     .on_change(|values| values);
//!
//! let bounds = Rectangle::new(0.0, 0.0, 252.0, 45.0);
//! let press = Event::PointerPressed {
//!     button: MouseButton::Left,
//!     position: Point::new(126.0, 20.0),
//! };
//! let changes = slider.on_event(&press, bounds);
//! assert_eq!(changes, vec![vec![20.0, 50.0]]);
//!
//! let mut canvas = DrawList::new();
//! slider.draw(&mut canvas, bounds);
//! assert!(!canvas.is_empty());
//! ```

mod callback;
mod canvas;
mod color;
mod config;
mod drag;
mod error;
mod event;
mod layout;
mod range;
mod render;
mod selector;
mod value_space;
mod widget;

pub use callback::Callback;
pub use canvas::{Canvas, DrawCommand, DrawList, Shadow};
pub use color::Color;
pub use config::{IndicatorConfig, LogLevel, SliderConfig, SliderStyle, TrackColors};
pub use drag::{DragController, DragEvent, DragOutcome, DragState};
pub use error::ConfigError;
pub use event::{Event, MouseButton};
pub use layout::{Point, Rectangle, Size};
pub use range::{default_classify, partition, Classifier, Range};
pub use render::{TrackFrame, TrackRenderer};
pub use selector::select_nearest;
pub use value_space::{snap, ValueSpace};
pub use widget::MultiSlider;
