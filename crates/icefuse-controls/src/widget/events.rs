//! Widget event types.
//!
//! Events are delivered to widgets through [`crate::widget::Widget::event`].
//! Each event carries an [`EventBase`] with an accepted flag; accepting an
//! event stops propagation to the widget behind it.

use icefuse_controls_core::TimerId;
use icefuse_controls_render::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Keyboard keys relevant to control interaction.
///
/// Printable input arrives through [`KeyPressEvent::text`]; the key code
/// identifies navigation and editing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Numbers (main keyboard)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Navigation
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    Home, End, PageUp, PageDown,

    // Editing
    Backspace, Delete,
    Enter, Tab,

    // Whitespace
    Space,

    // Control
    Escape,

    // Unknown/unmapped key
    Unknown(u16),
}

impl Key {
    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp
                | Key::ArrowDown
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Home
                | Key::End
                | Key::PageUp
                | Key::PageDown
        )
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(
        button: MouseButton,
        local_pos: Point,
        window_pos: Point,
        modifiers: KeyboardModifiers,
    ) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            window_pos,
            modifiers,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(
        button: MouseButton,
        local_pos: Point,
        window_pos: Point,
        modifiers: KeyboardModifiers,
    ) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            window_pos,
            modifiers,
        }
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point, window_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            window_pos,
            modifiers,
        }
    }
}

/// Mouse wheel (scroll) event.
#[derive(Debug, Clone, Copy)]
pub struct WheelEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
    /// Horizontal scroll delta (positive = right).
    pub delta_x: f32,
    /// Vertical scroll delta (positive = up/away from user).
    pub delta_y: f32,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl WheelEvent {
    /// Create a new wheel event.
    pub fn new(
        local_pos: Point,
        window_pos: Point,
        delta_x: f32,
        delta_y: f32,
        modifiers: KeyboardModifiers,
    ) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            window_pos,
            delta_x,
            delta_y,
            modifiers,
        }
    }
}

/// Key press event.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (empty for non-printable keys).
    pub text: String,
    /// Whether this is a key repeat (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(
        key: Key,
        modifiers: KeyboardModifiers,
        text: impl Into<String>,
        is_repeat: bool,
    ) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
            is_repeat,
        }
    }

    /// A plain, modifier-free press of `key` with no text.
    pub fn plain(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, "", false)
    }

    /// A printable character press.
    pub fn character(key: Key, ch: char) -> Self {
        Self::new(key, KeyboardModifiers::NONE, ch.to_string(), false)
    }
}

/// Reason for a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to mouse click.
    #[default]
    Mouse,
    /// Focus changed due to Tab navigation.
    Tab,
    /// Focus changed programmatically.
    Other,
}

/// Focus out event, sent when the widget loses keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was lost.
    pub reason: FocusReason,
}

impl FocusOutEvent {
    /// Create a new focus out event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Mouse enter event.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnterEvent {
    /// Base event data.
    pub base: EventBase,
}

/// Mouse leave event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveEvent {
    /// Base event data.
    pub base: EventBase,
}

/// Timer event, sent when a widget-owned timer fires.
#[derive(Debug, Clone, Copy)]
pub struct TimerEvent {
    /// Base event data.
    pub base: EventBase,
    /// The ID of the timer that fired.
    pub id: TimerId,
}

impl TimerEvent {
    /// Create a new timer event.
    pub fn new(id: TimerId) -> Self {
        Self {
            base: EventBase::new(),
            id,
        }
    }
}

/// The events a widget can receive.
#[derive(Debug)]
pub enum WidgetEvent {
    /// Mouse press event.
    MousePress(MousePressEvent),
    /// Mouse release event.
    MouseRelease(MouseReleaseEvent),
    /// Mouse move event.
    MouseMove(MouseMoveEvent),
    /// Mouse wheel event.
    Wheel(WheelEvent),
    /// Key press event.
    KeyPress(KeyPressEvent),
    /// Focus out event.
    FocusOut(FocusOutEvent),
    /// Mouse enter event.
    Enter(EnterEvent),
    /// Mouse leave event.
    Leave(LeaveEvent),
    /// Timer event for a widget-owned timer.
    Timer(TimerEvent),
}

impl WidgetEvent {
    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::MousePress(e) => e.base.is_accepted(),
            Self::MouseRelease(e) => e.base.is_accepted(),
            Self::MouseMove(e) => e.base.is_accepted(),
            Self::Wheel(e) => e.base.is_accepted(),
            Self::KeyPress(e) => e.base.is_accepted(),
            Self::FocusOut(e) => e.base.is_accepted(),
            Self::Enter(e) => e.base.is_accepted(),
            Self::Leave(e) => e.base.is_accepted(),
            Self::Timer(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::MousePress(e) => e.base.accept(),
            Self::MouseRelease(e) => e.base.accept(),
            Self::MouseMove(e) => e.base.accept(),
            Self::Wheel(e) => e.base.accept(),
            Self::KeyPress(e) => e.base.accept(),
            Self::FocusOut(e) => e.base.accept(),
            Self::Enter(e) => e.base.accept(),
            Self::Leave(e) => e.base.accept(),
            Self::Timer(e) => e.base.accept(),
        }
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        match self {
            Self::MousePress(e) => e.base.ignore(),
            Self::MouseRelease(e) => e.base.ignore(),
            Self::MouseMove(e) => e.base.ignore(),
            Self::Wheel(e) => e.base.ignore(),
            Self::KeyPress(e) => e.base.ignore(),
            Self::FocusOut(e) => e.base.ignore(),
            Self::Enter(e) => e.base.ignore(),
            Self::Leave(e) => e.base.ignore(),
            Self::Timer(e) => e.base.ignore(),
        }
    }

    /// Check if this event should propagate to the widget behind it.
    ///
    /// Input events propagate while unaccepted; focus, enter/leave and timer
    /// events are specific to their widget and never propagate.
    pub fn should_propagate(&self) -> bool {
        match self {
            Self::MousePress(_)
            | Self::MouseRelease(_)
            | Self::MouseMove(_)
            | Self::Wheel(_)
            | Self::KeyPress(_) => !self.is_accepted(),
            Self::FocusOut(_) | Self::Enter(_) | Self::Leave(_) | Self::Timer(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_stops_propagation() {
        let mut event = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::ZERO,
            Point::ZERO,
            KeyboardModifiers::NONE,
        ));
        assert!(event.should_propagate());
        event.accept();
        assert!(event.is_accepted());
        assert!(!event.should_propagate());
        event.ignore();
        assert!(event.should_propagate());
    }

    #[test]
    fn timer_events_never_propagate() {
        let event = WidgetEvent::Timer(TimerEvent::new(TimerId::default()));
        assert!(!event.should_propagate());
    }

    #[test]
    fn modifier_queries() {
        assert!(KeyboardModifiers::NONE.none());
        assert!(KeyboardModifiers::SHIFT.any());
        assert!(Key::ArrowDown.is_navigation());
        assert!(!Key::Escape.is_navigation());
    }
}
