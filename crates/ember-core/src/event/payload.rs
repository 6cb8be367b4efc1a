// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Payload fragments shared between several event kinds, and the small
//! enumerations carried inside event payloads.

use std::fmt;

use crate::ember_bitflags;

/// Position data shared by every mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseData {
    /// The mouse instance that produced the event.
    pub mouse_id: u32,
    /// The window with mouse focus, or 0.
    pub window_id: u32,
    /// Cursor X position in window pixels.
    pub x: i32,
    /// Cursor Y position in window pixels.
    pub y: i32,
}

impl fmt::Display for MouseData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.mouse_id, self.window_id, self.x, self.y
        )
    }
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// The left button.
    Left,
    /// The middle button or wheel click.
    Middle,
    /// The right button.
    Right,
    /// The first extra button (usually "back").
    X1,
    /// The second extra button (usually "forward").
    X2,
    /// Any other button.
    #[default]
    Unknown,
}

impl MouseButton {
    /// Maps a host button index (1 = left, 2 = middle, 3 = right, 4 = x1,
    /// 5 = x2) to a button.
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            4 => MouseButton::X1,
            5 => MouseButton::X2,
            _ => MouseButton::Unknown,
        }
    }

    /// The host button index, or 0 for [`MouseButton::Unknown`].
    pub fn index(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
            MouseButton::X1 => 4,
            MouseButton::X2 => 5,
            MouseButton::Unknown => 0,
        }
    }

    /// The lowercase name used when rendering events.
    pub fn name(self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Middle => "middle",
            MouseButton::Right => "right",
            MouseButton::X1 => "x1",
            MouseButton::X2 => "x2",
            MouseButton::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

ember_bitflags! {
    /// The set of mouse buttons held down during a motion event.
    pub struct MouseButtonState: u32 {
        /// Left button held.
        const LEFT = 1 << 0;
        /// Middle button held.
        const MIDDLE = 1 << 1;
        /// Right button held.
        const RIGHT = 1 << 2;
        /// First extra button held.
        const X1 = 1 << 3;
        /// Second extra button held.
        const X2 = 1 << 4;
    }
}

impl MouseButtonState {
    /// The state bit for `button`, empty for unknown buttons.
    pub fn for_button(button: MouseButton) -> Self {
        match button.index() {
            0 => Self::EMPTY,
            index => Self::from_bits_retain(1 << (index - 1)),
        }
    }
}

ember_bitflags! {
    /// Keyboard modifier keys, using the host layer's bit layout.
    pub struct KeyModifiers: u16 {
        /// Left shift.
        const LSHIFT = 0x0001;
        /// Right shift.
        const RSHIFT = 0x0002;
        /// Left control.
        const LCTRL = 0x0040;
        /// Right control.
        const RCTRL = 0x0080;
        /// Left alt.
        const LALT = 0x0100;
        /// Right alt.
        const RALT = 0x0200;
        /// Left GUI (Windows/Command) key.
        const LGUI = 0x0400;
        /// Right GUI key.
        const RGUI = 0x0800;
        /// Num lock active.
        const NUM = 0x1000;
        /// Caps lock active.
        const CAPS = 0x2000;
        /// AltGr held.
        const MODE = 0x4000;
        /// Scroll lock active.
        const SCROLL = 0x8000;
    }
}

/// Physical and logical identity of a key, plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySym {
    /// Position-based key code (USB HID usage).
    pub scancode: u32,
    /// Layout-dependent key code.
    pub keycode: i32,
    /// Modifiers held when the key changed state.
    pub modifiers: KeyModifiers,
}

/// The kind of audio device in a hotplug event.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioDeviceType {
    /// A playback device.
    Output = 1,
    /// A recording device.
    Capture = 2,
}

/// The orientation of a display.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayOrientation {
    /// Orientation cannot be determined.
    #[default]
    Unknown = 0,
    /// Landscape, right side up.
    Landscape = 1,
    /// Landscape, upside down.
    LandscapeFlipped = 2,
    /// Portrait, right side up.
    Portrait = 3,
    /// Portrait, upside down.
    PortraitFlipped = 4,
}

impl DisplayOrientation {
    /// Maps the host value, `None` when out of range.
    pub fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            0 => DisplayOrientation::Unknown,
            1 => DisplayOrientation::Landscape,
            2 => DisplayOrientation::LandscapeFlipped,
            3 => DisplayOrientation::Portrait,
            4 => DisplayOrientation::PortraitFlipped,
            _ => return None,
        })
    }
}

/// Position of a joystick hat, using the host layer's bit values.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HatPosition {
    /// Neutral.
    #[default]
    Centered = 0x00,
    /// Up.
    Up = 0x01,
    /// Right.
    Right = 0x02,
    /// Down.
    Down = 0x04,
    /// Left.
    Left = 0x08,
    /// Up and right.
    RightUp = 0x03,
    /// Down and right.
    RightDown = 0x06,
    /// Up and left.
    LeftUp = 0x09,
    /// Down and left.
    LeftDown = 0x0C,
}

impl HatPosition {
    /// Maps the host value, `None` for impossible combinations.
    pub fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0x00 => HatPosition::Centered,
            0x01 => HatPosition::Up,
            0x02 => HatPosition::Right,
            0x04 => HatPosition::Down,
            0x08 => HatPosition::Left,
            0x03 => HatPosition::RightUp,
            0x06 => HatPosition::RightDown,
            0x09 => HatPosition::LeftUp,
            0x0C => HatPosition::LeftDown,
            _ => return None,
        })
    }

    /// The name used when rendering events.
    pub fn name(self) -> &'static str {
        match self {
            HatPosition::Centered => "centered",
            HatPosition::Up => "up",
            HatPosition::Right => "right",
            HatPosition::Down => "down",
            HatPosition::Left => "left",
            HatPosition::RightUp => "right-up",
            HatPosition::RightDown => "right-down",
            HatPosition::LeftUp => "left-up",
            HatPosition::LeftDown => "left-down",
        }
    }
}

/// Power level reported by a joystick.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoystickPowerLevel {
    /// The level is not known.
    #[default]
    Unknown = -1,
    /// Below 5%.
    Empty = 0,
    /// Below 20%.
    Low = 1,
    /// Below 70%.
    Medium = 2,
    /// Up to 100%.
    Full = 3,
    /// Running on wired power.
    Wired = 4,
}

impl JoystickPowerLevel {
    /// Maps the host value, `None` when out of range.
    pub fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            -1 => JoystickPowerLevel::Unknown,
            0 => JoystickPowerLevel::Empty,
            1 => JoystickPowerLevel::Low,
            2 => JoystickPowerLevel::Medium,
            3 => JoystickPowerLevel::Full,
            4 => JoystickPowerLevel::Wired,
            _ => return None,
        })
    }

    /// The name used when rendering events.
    pub fn name(self) -> &'static str {
        match self {
            JoystickPowerLevel::Unknown => "unknown",
            JoystickPowerLevel::Empty => "empty",
            JoystickPowerLevel::Low => "low",
            JoystickPowerLevel::Medium => "medium",
            JoystickPowerLevel::Full => "full",
            JoystickPowerLevel::Wired => "wired",
        }
    }
}

/// Identifies one finger on one touchpad of one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchpadData {
    /// The controller instance.
    pub controller_id: i32,
    /// The touchpad index on the controller.
    pub touchpad: i32,
    /// The finger index on the touchpad.
    pub finger: i32,
}

impl fmt::Display for TouchpadData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}]",
            self.controller_id, self.touchpad, self.finger
        )
    }
}

/// Identifies one finger on one touch device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerData {
    /// The touch device.
    pub touch_id: i64,
    /// The finger on that device.
    pub finger_id: i64,
    /// The window underneath the finger, or 0.
    pub window_id: u32,
}

impl fmt::Display for FingerData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}]",
            self.touch_id, self.finger_id, self.window_id
        )
    }
}
