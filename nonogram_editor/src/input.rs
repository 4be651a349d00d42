// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

bitflags::bitflags! {
    /// Pointer buttons held down.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        /// Primary (usually left) button.
        const PRIMARY   = 0b0000_0001;
        /// Secondary (usually right) button.
        const SECONDARY = 0b0000_0010;
        /// Middle button or wheel click.
        const MIDDLE    = 0b0000_0100;
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Alt / Option key.
        const ALT   = 0b0000_0100;
        /// Super / Command key.
        const META  = 0b0000_1000;
    }
}

/// The button a press or release is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button or wheel click.
    Middle,
}

impl PointerButton {
    /// The matching [`Buttons`] flag.
    #[must_use]
    pub const fn flag(self) -> Buttons {
        match self {
            Self::Primary => Buttons::PRIMARY,
            Self::Secondary => Buttons::SECONDARY,
            Self::Middle => Buttons::MIDDLE,
        }
    }
}

/// A pointer event in screen coordinates.
///
/// `buttons` is the set of buttons held *after* the event, so a press of
/// the primary button arrives with [`Buttons::PRIMARY`] set and its release
/// with it cleared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed.
    Down {
        /// Pointer position.
        pos: Point,
        /// Button pressed.
        button: PointerButton,
        /// Buttons held, including `button`.
        buttons: Buttons,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// The pointer moved.
    Move {
        /// Pointer position.
        pos: Point,
        /// Buttons held.
        buttons: Buttons,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// A button was released.
    Up {
        /// Pointer position.
        pos: Point,
        /// Button released.
        button: PointerButton,
        /// Buttons still held.
        buttons: Buttons,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// The wheel turned.
    Wheel {
        /// Pointer position.
        pos: Point,
        /// Whole notches; positive away from the user.
        delta: i32,
        /// Modifiers held.
        modifiers: Modifiers,
    },
}

impl PointerEvent {
    /// A press with no other buttons or modifiers held.
    #[must_use]
    pub fn down(pos: Point, button: PointerButton) -> Self {
        Self::Down {
            pos,
            button,
            buttons: button.flag(),
            modifiers: Modifiers::empty(),
        }
    }

    /// A move with `buttons` held and no modifiers.
    #[must_use]
    pub fn moved(pos: Point, buttons: Buttons) -> Self {
        Self::Move {
            pos,
            buttons,
            modifiers: Modifiers::empty(),
        }
    }

    /// A release leaving no buttons held.
    #[must_use]
    pub fn up(pos: Point, button: PointerButton) -> Self {
        Self::Up {
            pos,
            button,
            buttons: Buttons::empty(),
            modifiers: Modifiers::empty(),
        }
    }

    /// A wheel turn by `delta` notches.
    #[must_use]
    pub fn wheel(pos: Point, delta: i32, modifiers: Modifiers) -> Self {
        Self::Wheel {
            pos,
            delta,
            modifiers,
        }
    }

    /// Pointer position.
    #[must_use]
    pub fn pos(&self) -> Point {
        match *self {
            Self::Down { pos, .. }
            | Self::Move { pos, .. }
            | Self::Up { pos, .. }
            | Self::Wheel { pos, .. } => pos,
        }
    }
}

/// What handling an event changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// Something visible changed; the host should redraw.
    pub redraw: bool,
    /// The cell size changed and the layout was recomputed.
    pub relayout: bool,
    /// Board cells written by a committed draft.
    pub cells_committed: usize,
    /// Clue slots written by a committed tick gesture.
    pub ticks_committed: usize,
}

impl EventOutcome {
    /// Nothing happened.
    pub const IGNORED: Self = Self {
        redraw: false,
        relayout: false,
        cells_committed: 0,
        ticks_committed: 0,
    };

    /// Only a redraw is needed.
    pub const REDRAW: Self = Self {
        redraw: true,
        ..Self::IGNORED
    };

    /// `REDRAW` if `changed`, `IGNORED` otherwise.
    #[must_use]
    pub const fn redraw_if(changed: bool) -> Self {
        if changed { Self::REDRAW } else { Self::IGNORED }
    }

    /// Returns `true` if the event had no effect.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        *self == Self::IGNORED
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Buttons, EventOutcome, PointerButton, PointerEvent};

    #[test]
    fn shorthand_constructors_fill_button_sets() {
        let p = Point::new(1.0, 2.0);
        match PointerEvent::down(p, PointerButton::Middle) {
            PointerEvent::Down { buttons, .. } => assert_eq!(buttons, Buttons::MIDDLE),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(PointerEvent::up(p, PointerButton::Primary).pos(), p);
    }

    #[test]
    fn outcome_helpers() {
        assert!(EventOutcome::IGNORED.is_ignored());
        assert!(EventOutcome::redraw_if(true).redraw);
        assert!(EventOutcome::redraw_if(false).is_ignored());
    }
}
