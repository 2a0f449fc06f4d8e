use crate::layout::Point;

/// Pointer events the slider responds to.
///
/// Positions are absolute, in the same coordinate space as the bounds the
/// host passes alongside the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer button pressed.
    PointerPressed { button: MouseButton, position: Point },
    /// Pointer moved, pressed or not.
    PointerMoved { position: Point },
    /// Pointer button released.
    PointerReleased { button: MouseButton, position: Point },
    /// The platform abandoned the gesture (focus loss, capture stolen).
    PointerCancelled,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}
