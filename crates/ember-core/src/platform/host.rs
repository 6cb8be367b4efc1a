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

//! The native event model of the host multimedia layer and the contract the
//! layer implements so the engine can switch event classes on and off.
//!
//! Numbering follows the SDL2 layout so that a backend wrapping SDL can pass
//! its event types through unchanged.

use std::rc::Rc;

use crate::event::{EventError, KeySym};

macro_rules! host_kinds {
    ($($(#[$doc:meta])* $variant:ident = $value:literal,)*) => {
        /// A native event class of the host layer.
        #[repr(u32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum HostEventKind {
            $($(#[$doc])* $variant = $value,)*
        }

        impl HostEventKind {
            /// Every host kind, in numeric order.
            pub const ALL: &'static [HostEventKind] = &[$(HostEventKind::$variant,)*];

            /// Looks a host kind up by its raw event type.
            pub fn from_raw(raw: u32) -> Option<Self> {
                match raw {
                    $($value => Some(HostEventKind::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

host_kinds! {
    /// The user requested to quit.
    Quit = 0x100,
    /// The OS is terminating the application.
    AppTerminating = 0x101,
    /// The OS is low on memory.
    AppLowMemory = 0x102,
    /// The application is about to enter the background.
    AppWillEnterBackground = 0x103,
    /// The application entered the background.
    AppDidEnterBackground = 0x104,
    /// The application is about to enter the foreground.
    AppWillEnterForeground = 0x105,
    /// The application entered the foreground.
    AppDidEnterForeground = 0x106,
    /// The user's locale preferences changed.
    LocaleChanged = 0x107,
    /// Display state change, qualified by a [`DisplayEventId`].
    DisplayEvent = 0x150,
    /// Window state change, qualified by a [`WindowEventId`].
    WindowEvent = 0x200,
    /// Platform-specific window manager message.
    SysWmEvent = 0x201,
    /// Key pressed.
    KeyDown = 0x300,
    /// Key released.
    KeyUp = 0x301,
    /// Input method composition.
    TextEditing = 0x302,
    /// Text input.
    TextInput = 0x303,
    /// Keyboard layout changed.
    KeymapChanged = 0x304,
    /// Extended input method composition.
    TextEditingExt = 0x305,
    /// Mouse moved.
    MouseMotion = 0x400,
    /// Mouse button pressed.
    MouseButtonDown = 0x401,
    /// Mouse button released.
    MouseButtonUp = 0x402,
    /// Mouse wheel motion.
    MouseWheel = 0x403,
    /// Joystick axis motion.
    JoyAxisMotion = 0x600,
    /// Joystick trackball motion.
    JoyBallMotion = 0x601,
    /// Joystick hat position change.
    JoyHatMotion = 0x602,
    /// Joystick button pressed.
    JoyButtonDown = 0x603,
    /// Joystick button released.
    JoyButtonUp = 0x604,
    /// Joystick connected.
    JoyDeviceAdded = 0x605,
    /// Joystick disconnected.
    JoyDeviceRemoved = 0x606,
    /// Joystick battery level change.
    JoyBatteryUpdated = 0x607,
    /// Controller axis motion.
    ControllerAxisMotion = 0x650,
    /// Controller button pressed.
    ControllerButtonDown = 0x651,
    /// Controller button released.
    ControllerButtonUp = 0x652,
    /// Controller connected.
    ControllerDeviceAdded = 0x653,
    /// Controller disconnected.
    ControllerDeviceRemoved = 0x654,
    /// Controller mapping updated.
    ControllerDeviceRemapped = 0x655,
    /// Controller touchpad touched.
    ControllerTouchpadDown = 0x656,
    /// Controller touchpad finger moved.
    ControllerTouchpadMotion = 0x657,
    /// Controller touchpad released.
    ControllerTouchpadUp = 0x658,
    /// Controller sensor update.
    ControllerSensorUpdate = 0x659,
    /// Touch started.
    FingerDown = 0x700,
    /// Touch ended.
    FingerUp = 0x701,
    /// Touch moved.
    FingerMotion = 0x702,
    /// Dollar gesture recognized.
    DollarGesture = 0x800,
    /// Dollar gesture recorded.
    DollarRecord = 0x801,
    /// Multi-finger gesture.
    MultiGesture = 0x802,
    /// Clipboard changed.
    ClipboardUpdate = 0x900,
    /// File dropped.
    DropFile = 0x1000,
    /// Text dropped.
    DropText = 0x1001,
    /// Drop session started.
    DropBegin = 0x1002,
    /// Drop session finished.
    DropComplete = 0x1003,
    /// Audio device connected.
    AudioDeviceAdded = 0x1100,
    /// Audio device disconnected.
    AudioDeviceRemoved = 0x1101,
    /// Raw sensor update, outside of any controller.
    SensorUpdate = 0x1200,
    /// Render targets reset.
    RenderTargetsReset = 0x2000,
    /// Render device reset.
    RenderDeviceReset = 0x2001,
    /// Internal marker of the host's poll loop.
    PollSentinel = 0x7F00,
    /// Application-defined host event.
    UserEvent = 0x8000,
}

impl HostEventKind {
    /// Host kinds the engine recognizes but never translates.
    pub const UNSUPPORTED: &'static [HostEventKind] = &[
        HostEventKind::SysWmEvent,
        HostEventKind::TextEditingExt,
        HostEventKind::SensorUpdate,
        HostEventKind::PollSentinel,
        HostEventKind::UserEvent,
    ];

    /// The raw event type value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Returns `true` if native events of this kind are discarded on arrival.
    pub fn is_unsupported(self) -> bool {
        Self::UNSUPPORTED.contains(&self)
    }
}

/// Sub-kinds of [`HostEventKind::WindowEvent`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum WindowEventId {
    Shown = 1,
    Hidden = 2,
    Exposed = 3,
    Moved = 4,
    Resized = 5,
    SizeChanged = 6,
    Minimized = 7,
    Maximized = 8,
    Restored = 9,
    Enter = 10,
    Leave = 11,
    FocusGained = 12,
    FocusLost = 13,
    Close = 14,
    TakeFocus = 15,
    HitTest = 16,
    IccProfileChanged = 17,
    DisplayChanged = 18,
}

impl WindowEventId {
    /// Maps the raw sub-kind, `None` for 0 ("none") and unknown values.
    pub fn from_raw(raw: u8) -> Option<Self> {
        use WindowEventId as W;
        Some(match raw {
            1 => W::Shown,
            2 => W::Hidden,
            3 => W::Exposed,
            4 => W::Moved,
            5 => W::Resized,
            6 => W::SizeChanged,
            7 => W::Minimized,
            8 => W::Maximized,
            9 => W::Restored,
            10 => W::Enter,
            11 => W::Leave,
            12 => W::FocusGained,
            13 => W::FocusLost,
            14 => W::Close,
            15 => W::TakeFocus,
            16 => W::HitTest,
            17 => W::IccProfileChanged,
            18 => W::DisplayChanged,
            _ => return None,
        })
    }
}

/// Sub-kinds of [`HostEventKind::DisplayEvent`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum DisplayEventId {
    Orientation = 1,
    Connected = 2,
    Disconnected = 3,
}

impl DisplayEventId {
    /// Maps the raw sub-kind, `None` for 0 ("none") and unknown values.
    pub fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            1 => DisplayEventId::Orientation,
            2 => DisplayEventId::Connected,
            3 => DisplayEventId::Disconnected,
            _ => return None,
        })
    }
}

/// The union-like payload of a native event. Which variant is valid depends
/// on the event's type; a mismatch is a translation failure.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum NativePayload {
    /// Carried by types that have no data of their own.
    Empty,
    Display {
        display: u32,
        event: u8,
        data1: i32,
    },
    Window {
        window_id: u32,
        event: u8,
        data1: i32,
        data2: i32,
    },
    Keyboard {
        window_id: u32,
        repeat: bool,
        keysym: KeySym,
    },
    TextEditing {
        window_id: u32,
        text: String,
        start: i32,
        length: i32,
    },
    TextInput { window_id: u32, text: String },
    MouseMotion {
        which: u32,
        window_id: u32,
        state: u32,
        x: i32,
        y: i32,
        xrel: i32,
        yrel: i32,
    },
    MouseButton {
        which: u32,
        window_id: u32,
        button: u8,
        clicks: u8,
        x: i32,
        y: i32,
    },
    MouseWheel {
        which: u32,
        window_id: u32,
        x: i32,
        y: i32,
        flipped: bool,
        mouse_x: i32,
        mouse_y: i32,
    },
    JoyAxis {
        which: i32,
        axis: u8,
        value: i16,
    },
    JoyBall {
        which: i32,
        ball: u8,
        xrel: i16,
        yrel: i16,
    },
    JoyHat { which: i32, hat: u8, value: u8 },
    JoyButton { which: i32, button: u8 },
    JoyDevice { which: i32 },
    JoyBattery { which: i32, level: i32 },
    ControllerAxis {
        which: i32,
        axis: u8,
        value: i16,
    },
    ControllerButton { which: i32, button: u8 },
    ControllerDevice { which: i32 },
    ControllerTouchpad {
        which: i32,
        touchpad: i32,
        finger: i32,
        x: f32,
        y: f32,
        pressure: f32,
    },
    ControllerSensor {
        which: i32,
        sensor: i32,
        data: [f32; 3],
    },
    TouchFinger {
        touch_id: i64,
        finger_id: i64,
        window_id: u32,
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
        pressure: f32,
    },
    DollarGesture {
        touch_id: i64,
        gesture_id: i64,
        num_fingers: u32,
        error: f32,
        x: f32,
        y: f32,
    },
    MultiGesture {
        touch_id: i64,
        d_theta: f32,
        d_dist: f32,
        x: f32,
        y: f32,
        num_fingers: u16,
    },
    Drop {
        window_id: u32,
        file: Option<String>,
    },
    AudioDevice { which: u32, is_capture: bool },
}

/// One event as delivered by the host layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeEvent {
    /// The raw event type, normally a [`HostEventKind`] value.
    pub event_type: u32,
    /// Host milliseconds at which the event was produced.
    pub timestamp: u32,
    /// The event data.
    pub payload: NativePayload,
}

impl NativeEvent {
    /// Builds a native event of a known kind.
    pub fn new(kind: HostEventKind, timestamp: u32, payload: NativePayload) -> Self {
        Self {
            event_type: kind.raw(),
            timestamp,
            payload,
        }
    }

    /// The host kind of the event, `None` if the type is not recognized.
    pub fn kind(&self) -> Option<HostEventKind> {
        HostEventKind::from_raw(self.event_type)
    }
}

/// The callback through which the host layer hands native events to the
/// engine. Errors raised by engine handlers are returned to the host pump.
pub type EventWatch = Rc<dyn Fn(&NativeEvent) -> Result<(), EventError>>;

/// The subset of the host multimedia layer the event subsystem drives.
///
/// All calls happen on the thread that owns the host event pump.
pub trait HostEventSource {
    /// Enables or ignores a class of native events. Ignored events are
    /// dropped by the host before reaching the watch.
    fn set_event_enabled(&self, kind: HostEventKind, enabled: bool);

    /// Returns `true` if the class is currently enabled.
    fn is_event_enabled(&self, kind: HostEventKind) -> bool;

    /// Installs the callback that receives every enabled native event,
    /// replacing any previous one.
    fn set_event_watch(&self, watch: EventWatch);
}
