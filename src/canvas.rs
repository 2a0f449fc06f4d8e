//! Abstract 2D drawing surface.
//!
//! The slider issues a deterministic sequence of calls against [`Canvas`]
//! on every paint and owns no graphics resources. [`DrawList`] records the
//! calls so they can be inspected or replayed onto a real backend.

use crate::color::Color;
use crate::layout::Point;

/// Drop shadow under a filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    /// Elevation in pixels; backends translate this into blur and offset.
    pub elevation: f32,
}

/// The primitives a backend must provide.
pub trait Canvas {
    /// Stroke a straight line with butt ends.
    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Color);

    /// Fill a circular sector. Angles are in radians, clockwise from +x.
    fn draw_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    );

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color, shadow: Option<Shadow>);

    /// Draw text centered horizontally on `position`, baseline at `position.y`.
    fn draw_text(&mut self, text: &str, position: Point, size: f32, color: Color);
}

/// A draw command to be executed during rendering
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    },
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Color,
        shadow: Option<Shadow>,
    },
    Text {
        text: String,
        position: Point,
        size: f32,
        color: Color,
    },
}

/// Canvas that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear draw commands from last frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Issue the recorded calls, in order, against another canvas.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => canvas.draw_line(*from, *to, *width, *color),
                DrawCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                    color,
                } => canvas.draw_arc(*center, *radius, *start_angle, *sweep_angle, *color),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                    shadow,
                } => canvas.draw_circle(*center, *radius, *color, *shadow),
                DrawCommand::Text {
                    text,
                    position,
                    size,
                    color,
                } => canvas.draw_text(text, *position, *size, *color),
            }
        }
    }
}

impl Canvas for DrawList {
    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn draw_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
            color,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color, shadow: Option<Shadow>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            shadow,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            size,
            color,
        });
    }
}
