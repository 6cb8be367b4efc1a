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

//! The concrete event type: a timestamp plus one payload variant per kind.

use std::fmt;
use std::sync::Arc;

use super::payload::{
    AudioDeviceType, DisplayOrientation, FingerData, HatPosition, JoystickPowerLevel, KeySym,
    MouseButton, MouseButtonState, MouseData, TouchpadData,
};
use super::{EventCategory, EventKind};
use crate::utils::clock;

/// An event shared read-only between every handler that receives it.
pub type SharedEvent = Arc<Event>;

/// The data carried by an event. There is exactly one variant per
/// [`EventKind`]; the kind of an event is the kind of its payload.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum EventPayload {
    Quit,
    LocaleChanged,
    ClipboardUpdate,
    DropFile { window_id: u32, file: String },
    DropText { window_id: u32, text: String },
    DropBegin { window_id: u32 },
    DropComplete { window_id: u32 },

    AudioDeviceAdded { device_id: u32, device_type: AudioDeviceType },
    AudioDeviceRemoved { device_id: u32, device_type: AudioDeviceType },

    AppTerminating,
    AppLowMemory,
    AppEnteringBackground,
    AppEnteredBackground,
    AppEnteringForeground,
    AppEnteredForeground,
    AppTick,
    AppUpdated,
    AppRendered,

    DisplayOrientation { display_index: u32, orientation: DisplayOrientation },
    DisplayConnected { display_index: u32 },
    DisplayDisconnected { display_index: u32 },

    WindowShown { window_id: u32 },
    WindowHidden { window_id: u32 },
    WindowExposed { window_id: u32 },
    WindowMoved { window_id: u32, x: i32, y: i32 },
    WindowResized { window_id: u32, width: i32, height: i32 },
    WindowSizeChanged { window_id: u32, width: i32, height: i32 },
    WindowMinimized { window_id: u32 },
    WindowMaximized { window_id: u32 },
    WindowRestored { window_id: u32 },
    WindowEnter { window_id: u32 },
    WindowLeave { window_id: u32 },
    WindowFocusGained { window_id: u32 },
    WindowFocusLost { window_id: u32 },
    WindowTakeFocus { window_id: u32 },
    WindowHitTest { window_id: u32 },
    WindowIccProfileChanged { window_id: u32 },
    WindowDisplayChanged { window_id: u32, display_index: i32 },
    WindowClosed { window_id: u32 },

    LayerPushed { layer: String },
    LayerPopped { layer: String },
    LayerUpdated { layer: String },
    LayerAttached { layer: String },
    LayerDetached { layer: String },

    KeyDown { window_id: u32, keysym: KeySym, repeat: bool },
    KeyUp { window_id: u32, keysym: KeySym, repeat: bool },
    TextEditing { window_id: u32, text: String, start: i32, length: i32 },
    TextInput { window_id: u32, text: String },
    KeyMapChanged,

    MouseMotion { mouse: MouseData, state: MouseButtonState, dx: i32, dy: i32 },
    MouseButtonDown { mouse: MouseData, button: MouseButton },
    MouseButtonUp { mouse: MouseData, button: MouseButton },
    MouseButtonClicked { mouse: MouseData, button: MouseButton, clicks: u8 },
    MouseWheel { mouse: MouseData, scroll_x: i32, scroll_y: i32, flipped: bool },

    JoyAxisMotion { joystick_id: i32, axis: u8, value: i16 },
    JoyBallMotion { joystick_id: i32, ball: u8, dx: i16, dy: i16 },
    JoyHatMotion { joystick_id: i32, hat: u8, position: HatPosition },
    JoyButtonDown { joystick_id: i32, button: u8 },
    JoyButtonUp { joystick_id: i32, button: u8 },
    JoyDeviceAdded { device_index: i32 },
    JoyDeviceRemoved { joystick_id: i32 },
    JoyBatteryUpdated { joystick_id: i32, level: JoystickPowerLevel },

    ControllerAxisMotion { controller_id: i32, axis: u8, value: i16 },
    ControllerButtonDown { controller_id: i32, button: u8 },
    ControllerButtonUp { controller_id: i32, button: u8 },
    ControllerDeviceAdded { controller_id: i32 },
    ControllerDeviceRemoved { controller_id: i32 },
    ControllerDeviceRemapped { controller_id: i32 },
    ControllerTouchpadMotion { touchpad: TouchpadData, x: f32, y: f32 },
    ControllerTouchpadDown { touchpad: TouchpadData, pressure: f32 },
    ControllerTouchpadUp { touchpad: TouchpadData, pressure: f32 },
    ControllerSensorUpdate { controller_id: i32, sensor: i32, data: [f32; 3] },

    FingerDown { finger: FingerData, x: f32, y: f32, pressure: f32 },
    FingerUp { finger: FingerData, x: f32, y: f32, pressure: f32 },
    FingerMotion { finger: FingerData, x: f32, y: f32, dx: f32, dy: f32, pressure: f32 },

    DollarGesture { touch_id: i64, gesture_id: i64, fingers: u32, error: f32, x: f32, y: f32 },
    DollarRecord { touch_id: i64, gesture_id: i64 },
    MultiGesture { touch_id: i64, fingers: u16, d_theta: f32, d_dist: f32, x: f32, y: f32 },

    RenderTargetsReset,
    RenderDeviceReset,
}

impl EventPayload {
    /// The kind of event this payload belongs to.
    pub fn kind(&self) -> EventKind {
        use EventPayload as P;
        match self {
            P::Quit => EventKind::Quit,
            P::LocaleChanged => EventKind::LocaleChanged,
            P::ClipboardUpdate => EventKind::ClipboardUpdate,
            P::DropFile { .. } => EventKind::DropFile,
            P::DropText { .. } => EventKind::DropText,
            P::DropBegin { .. } => EventKind::DropBegin,
            P::DropComplete { .. } => EventKind::DropComplete,
            P::AudioDeviceAdded { .. } => EventKind::AudioDeviceAdded,
            P::AudioDeviceRemoved { .. } => EventKind::AudioDeviceRemoved,
            P::AppTerminating => EventKind::AppTerminating,
            P::AppLowMemory => EventKind::AppLowMemory,
            P::AppEnteringBackground => EventKind::AppEnteringBackground,
            P::AppEnteredBackground => EventKind::AppEnteredBackground,
            P::AppEnteringForeground => EventKind::AppEnteringForeground,
            P::AppEnteredForeground => EventKind::AppEnteredForeground,
            P::AppTick => EventKind::AppTick,
            P::AppUpdated => EventKind::AppUpdated,
            P::AppRendered => EventKind::AppRendered,
            P::DisplayOrientation { .. } => EventKind::DisplayOrientation,
            P::DisplayConnected { .. } => EventKind::DisplayConnected,
            P::DisplayDisconnected { .. } => EventKind::DisplayDisconnected,
            P::WindowShown { .. } => EventKind::WindowShown,
            P::WindowHidden { .. } => EventKind::WindowHidden,
            P::WindowExposed { .. } => EventKind::WindowExposed,
            P::WindowMoved { .. } => EventKind::WindowMoved,
            P::WindowResized { .. } => EventKind::WindowResized,
            P::WindowSizeChanged { .. } => EventKind::WindowSizeChanged,
            P::WindowMinimized { .. } => EventKind::WindowMinimized,
            P::WindowMaximized { .. } => EventKind::WindowMaximized,
            P::WindowRestored { .. } => EventKind::WindowRestored,
            P::WindowEnter { .. } => EventKind::WindowEnter,
            P::WindowLeave { .. } => EventKind::WindowLeave,
            P::WindowFocusGained { .. } => EventKind::WindowFocusGained,
            P::WindowFocusLost { .. } => EventKind::WindowFocusLost,
            P::WindowTakeFocus { .. } => EventKind::WindowTakeFocus,
            P::WindowHitTest { .. } => EventKind::WindowHitTest,
            P::WindowIccProfileChanged { .. } => EventKind::WindowIccProfileChanged,
            P::WindowDisplayChanged { .. } => EventKind::WindowDisplayChanged,
            P::WindowClosed { .. } => EventKind::WindowClosed,
            P::LayerPushed { .. } => EventKind::LayerPushed,
            P::LayerPopped { .. } => EventKind::LayerPopped,
            P::LayerUpdated { .. } => EventKind::LayerUpdated,
            P::LayerAttached { .. } => EventKind::LayerAttached,
            P::LayerDetached { .. } => EventKind::LayerDetached,
            P::KeyDown { .. } => EventKind::KeyDown,
            P::KeyUp { .. } => EventKind::KeyUp,
            P::TextEditing { .. } => EventKind::TextEditing,
            P::TextInput { .. } => EventKind::TextInput,
            P::KeyMapChanged => EventKind::KeyMapChanged,
            P::MouseMotion { .. } => EventKind::MouseMotion,
            P::MouseButtonDown { .. } => EventKind::MouseButtonDown,
            P::MouseButtonUp { .. } => EventKind::MouseButtonUp,
            P::MouseButtonClicked { .. } => EventKind::MouseButtonClicked,
            P::MouseWheel { .. } => EventKind::MouseWheel,
            P::JoyAxisMotion { .. } => EventKind::JoyAxisMotion,
            P::JoyBallMotion { .. } => EventKind::JoyBallMotion,
            P::JoyHatMotion { .. } => EventKind::JoyHatMotion,
            P::JoyButtonDown { .. } => EventKind::JoyButtonDown,
            P::JoyButtonUp { .. } => EventKind::JoyButtonUp,
            P::JoyDeviceAdded { .. } => EventKind::JoyDeviceAdded,
            P::JoyDeviceRemoved { .. } => EventKind::JoyDeviceRemoved,
            P::JoyBatteryUpdated { .. } => EventKind::JoyBatteryUpdated,
            P::ControllerAxisMotion { .. } => EventKind::ControllerAxisMotion,
            P::ControllerButtonDown { .. } => EventKind::ControllerButtonDown,
            P::ControllerButtonUp { .. } => EventKind::ControllerButtonUp,
            P::ControllerDeviceAdded { .. } => EventKind::ControllerDeviceAdded,
            P::ControllerDeviceRemoved { .. } => EventKind::ControllerDeviceRemoved,
            P::ControllerDeviceRemapped { .. } => EventKind::ControllerDeviceRemapped,
            P::ControllerTouchpadMotion { .. } => EventKind::ControllerTouchpadMotion,
            P::ControllerTouchpadDown { .. } => EventKind::ControllerTouchpadDown,
            P::ControllerTouchpadUp { .. } => EventKind::ControllerTouchpadUp,
            P::ControllerSensorUpdate { .. } => EventKind::ControllerSensorUpdate,
            P::FingerDown { .. } => EventKind::FingerDown,
            P::FingerUp { .. } => EventKind::FingerUp,
            P::FingerMotion { .. } => EventKind::FingerMotion,
            P::DollarGesture { .. } => EventKind::DollarGesture,
            P::DollarRecord { .. } => EventKind::DollarRecord,
            P::MultiGesture { .. } => EventKind::MultiGesture,
            P::RenderTargetsReset => EventKind::RenderTargetsReset,
            P::RenderDeviceReset => EventKind::RenderDeviceReset,
        }
    }

    /// The window this payload refers to, for payloads that carry one.
    pub fn window_id(&self) -> Option<u32> {
        use EventPayload as P;
        match self {
            P::DropFile { window_id, .. }
            | P::DropText { window_id, .. }
            | P::DropBegin { window_id }
            | P::DropComplete { window_id }
            | P::WindowShown { window_id }
            | P::WindowHidden { window_id }
            | P::WindowExposed { window_id }
            | P::WindowMoved { window_id, .. }
            | P::WindowResized { window_id, .. }
            | P::WindowSizeChanged { window_id, .. }
            | P::WindowMinimized { window_id }
            | P::WindowMaximized { window_id }
            | P::WindowRestored { window_id }
            | P::WindowEnter { window_id }
            | P::WindowLeave { window_id }
            | P::WindowFocusGained { window_id }
            | P::WindowFocusLost { window_id }
            | P::WindowTakeFocus { window_id }
            | P::WindowHitTest { window_id }
            | P::WindowIccProfileChanged { window_id }
            | P::WindowDisplayChanged { window_id, .. }
            | P::WindowClosed { window_id }
            | P::KeyDown { window_id, .. }
            | P::KeyUp { window_id, .. }
            | P::TextEditing { window_id, .. }
            | P::TextInput { window_id, .. } => Some(*window_id),
            P::FingerDown { finger, .. }
            | P::FingerUp { finger, .. }
            | P::FingerMotion { finger, .. } => Some(finger.window_id),
            _ => self.mouse().map(|mouse| mouse.window_id),
        }
    }

    /// The shared mouse fragment of mouse payloads.
    pub fn mouse(&self) -> Option<&MouseData> {
        match self {
            EventPayload::MouseMotion { mouse, .. }
            | EventPayload::MouseButtonDown { mouse, .. }
            | EventPayload::MouseButtonUp { mouse, .. }
            | EventPayload::MouseButtonClicked { mouse, .. }
            | EventPayload::MouseWheel { mouse, .. } => Some(mouse),
            _ => None,
        }
    }

    /// The key fragment of key payloads.
    pub fn keysym(&self) -> Option<&KeySym> {
        match self {
            EventPayload::KeyDown { keysym, .. } | EventPayload::KeyUp { keysym, .. } => {
                Some(keysym)
            }
            _ => None,
        }
    }

    /// Writes the fields that follow the event name, without the separator.
    /// Payload-free variants write nothing.
    fn render_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EventPayload as P;
        match self {
            P::Quit
            | P::LocaleChanged
            | P::ClipboardUpdate
            | P::AppTerminating
            | P::AppLowMemory
            | P::AppEnteringBackground
            | P::AppEnteredBackground
            | P::AppEnteringForeground
            | P::AppEnteredForeground
            | P::AppTick
            | P::AppUpdated
            | P::AppRendered
            | P::KeyMapChanged
            | P::RenderTargetsReset
            | P::RenderDeviceReset => {}

            P::DropFile { window_id, file: value } | P::DropText { window_id, text: value } => {
                write!(f, "[{window_id}], [{value}]")?
            }
            P::DropBegin { window_id } | P::DropComplete { window_id } => {
                write!(f, "[{window_id}]")?
            }

            P::AudioDeviceAdded { device_id, device_type }
            | P::AudioDeviceRemoved { device_id, device_type } => {
                write!(f, "{device_id} {}", *device_type as u8)?
            }

            P::DisplayOrientation { display_index, orientation } => {
                write!(f, "{display_index}, {}", *orientation as u8)?
            }
            P::DisplayConnected { display_index } | P::DisplayDisconnected { display_index } => {
                write!(f, "{display_index}")?
            }

            P::WindowMoved { window_id, x, y } => write!(f, "[{window_id}], [{x}, {y}]")?,
            P::WindowResized { window_id, width, height }
            | P::WindowSizeChanged { window_id, width, height } => {
                write!(f, "[{window_id}], [{width}, {height}]")?
            }
            P::WindowDisplayChanged { window_id, display_index } => {
                write!(f, "[{window_id}], [{display_index}]")?
            }
            P::WindowShown { window_id }
            | P::WindowHidden { window_id }
            | P::WindowExposed { window_id }
            | P::WindowMinimized { window_id }
            | P::WindowMaximized { window_id }
            | P::WindowRestored { window_id }
            | P::WindowEnter { window_id }
            | P::WindowLeave { window_id }
            | P::WindowFocusGained { window_id }
            | P::WindowFocusLost { window_id }
            | P::WindowTakeFocus { window_id }
            | P::WindowHitTest { window_id }
            | P::WindowIccProfileChanged { window_id }
            | P::WindowClosed { window_id } => write!(f, "[{window_id}]")?,

            P::LayerPushed { layer }
            | P::LayerPopped { layer }
            | P::LayerUpdated { layer }
            | P::LayerAttached { layer }
            | P::LayerDetached { layer } => write!(f, "[{layer}]")?,

            P::KeyDown { window_id, keysym, repeat } | P::KeyUp { window_id, keysym, repeat } => {
                write!(
                    f,
                    "[{window_id}, {} ({}), {}, {repeat}]",
                    keysym.scancode,
                    keysym.keycode,
                    keysym.modifiers.bits()
                )?
            }
            P::TextEditing { window_id, text, start, length } => {
                write!(f, "[{window_id}], [{text}, {start}, {length}]")?
            }
            P::TextInput { window_id, text } => write!(f, "[{window_id}], [{text}]")?,

            P::MouseMotion { mouse, state, dx, dy } => {
                write!(f, "{mouse}, [{}, ({dx}, {dy})]", state.bits())?
            }
            P::MouseButtonDown { mouse, button } | P::MouseButtonUp { mouse, button } => {
                write!(f, "{mouse}, [{button}]")?
            }
            P::MouseButtonClicked { mouse, button, clicks } => {
                write!(f, "{mouse}, [{button}], [{clicks}]")?
            }
            P::MouseWheel { mouse, scroll_x, scroll_y, flipped } => {
                // Widened so that flipping i32::MIN cannot overflow.
                let (sx, sy) = (i64::from(*scroll_x), i64::from(*scroll_y));
                let (sx, sy) = if *flipped { (-sx, -sy) } else { (sx, sy) };
                write!(f, "{mouse}, [({sx}, {sy}), {flipped}]")?
            }

            P::JoyAxisMotion { joystick_id, axis, value } => {
                write!(f, "[{joystick_id}], [{axis}, {value}]")?
            }
            P::JoyBallMotion { joystick_id, ball, dx, dy } => {
                write!(f, "[{joystick_id}], [{ball}, ({dx}, {dy})]")?
            }
            P::JoyHatMotion { joystick_id, hat, position } => {
                write!(f, "[{joystick_id}], [{hat}, {}]", position.name())?
            }
            P::JoyButtonDown { joystick_id, button } | P::JoyButtonUp { joystick_id, button } => {
                write!(f, "[{joystick_id}], [{button}]")?
            }
            P::JoyDeviceAdded { device_index } => write!(f, "{device_index}")?,
            P::JoyDeviceRemoved { joystick_id } => write!(f, "{joystick_id}")?,
            P::JoyBatteryUpdated { joystick_id, level } => {
                write!(f, "[{joystick_id}], [{}]", level.name())?
            }

            P::ControllerAxisMotion { controller_id, axis, value } => {
                write!(f, "[{controller_id}], [{axis}, {value}]")?
            }
            P::ControllerButtonDown { controller_id, button }
            | P::ControllerButtonUp { controller_id, button } => {
                write!(f, "[{controller_id}], [{button}]")?
            }
            P::ControllerDeviceAdded { controller_id }
            | P::ControllerDeviceRemoved { controller_id }
            | P::ControllerDeviceRemapped { controller_id } => write!(f, "{controller_id}")?,
            P::ControllerTouchpadMotion { touchpad, x, y } => {
                write!(f, "{touchpad}, [({x}, {y})]")?
            }
            P::ControllerTouchpadDown { touchpad, pressure }
            | P::ControllerTouchpadUp { touchpad, pressure } => {
                write!(f, "{touchpad}, [{pressure}]")?
            }
            P::ControllerSensorUpdate { controller_id, sensor, data } => write!(
                f,
                "[{controller_id}, {sensor}], [({}, {}, {})]",
                data[0], data[1], data[2]
            )?,

            P::FingerDown { finger, x, y, pressure } | P::FingerUp { finger, x, y, pressure } => {
                write!(f, "{finger}, [({x}, {y}), {pressure}]")?
            }
            P::FingerMotion { finger, x, y, dx, dy, pressure } => {
                write!(f, "{finger}, [({x}, {y}), ({dx}, {dy}), {pressure}]")?
            }

            P::DollarGesture { touch_id, gesture_id, fingers, error, x, y } => {
                write!(f, "[{touch_id}, {gesture_id}], [{fingers}, {error}, ({x}, {y})]")?
            }
            P::DollarRecord { touch_id, gesture_id } => write!(f, "[{touch_id}, {gesture_id}]")?,
            P::MultiGesture { touch_id, fingers, d_theta, d_dist, x, y } => {
                write!(f, "[{touch_id}], [{fingers}, {d_theta}, {d_dist}, ({x}, {y})]")?
            }
        }
        Ok(())
    }
}

/// An immutable engine event.
///
/// The kind, name and category mask are properties of the payload variant;
/// only the payload and the construction timestamp are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    timestamp_ms: u64,
    payload: EventPayload,
}

impl Event {
    /// Creates an event stamped with the current process clock.
    pub fn new(payload: EventPayload) -> Self {
        Self::with_timestamp(payload, clock::now_ms())
    }

    /// Creates an event with an explicit timestamp.
    pub fn with_timestamp(payload: EventPayload, timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            payload,
        }
    }

    /// Wraps the event for shared, read-only delivery.
    pub fn into_shared(self) -> SharedEvent {
        Arc::new(self)
    }

    /// The kind tag of this event.
    #[inline]
    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    /// The categories this event belongs to.
    #[inline]
    pub fn category_mask(&self) -> EventCategory {
        self.kind().category_mask()
    }

    /// Returns `true` if this event belongs to any of the given categories.
    #[inline]
    pub fn is_in_category(&self, category: EventCategory) -> bool {
        self.kind().is_in_category(category)
    }

    /// Milliseconds since the process clock's epoch at construction.
    #[inline]
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    /// The short human-readable name of the event.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// The event's payload.
    #[inline]
    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }
}

impl From<EventPayload> for Event {
    fn from(payload: EventPayload) -> Self {
        Event::new(payload)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        // Fields are rendered into a scratch buffer so that payload-free
        // events print their bare name.
        let fields = RenderedFields(&self.payload).to_string();
        if !fields.is_empty() {
            write!(f, ": {fields}")?;
        }
        Ok(())
    }
}

struct RenderedFields<'a>(&'a EventPayload);

impl fmt::Display for RenderedFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render_fields(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::payload::KeyModifiers;

    fn render(payload: EventPayload) -> String {
        Event::with_timestamp(payload, 0).to_string()
    }

    fn mouse(mouse_id: u32, window_id: u32, x: i32, y: i32) -> MouseData {
        MouseData {
            mouse_id,
            window_id,
            x,
            y,
        }
    }

    #[test]
    fn payload_free_events_render_their_name() {
        assert_eq!(render(EventPayload::Quit), "EventQuit");
        assert_eq!(render(EventPayload::AppTick), "EventAppTick");
        assert_eq!(render(EventPayload::RenderDeviceReset), "EventRenderDeviceReset");
        assert_eq!(render(EventPayload::KeyMapChanged), "EventKeyMapChanged");
    }

    #[test]
    fn mouse_events_render_shared_fragment() {
        assert_eq!(
            render(EventPayload::MouseMotion {
                mouse: mouse(1, 2, 30, 40),
                state: MouseButtonState::LEFT | MouseButtonState::RIGHT,
                dx: -3,
                dy: 4,
            }),
            "EventMouseMotion: [1, 2, 30, 40], [5, (-3, 4)]"
        );
        assert_eq!(
            render(EventPayload::MouseButtonDown {
                mouse: mouse(2, 3, 11, 12),
                button: MouseButton::Left,
            }),
            "EventMouseButtonDown: [2, 3, 11, 12], [left]"
        );
        assert_eq!(
            render(EventPayload::MouseButtonClicked {
                mouse: mouse(2, 3, 11, 12),
                button: MouseButton::X2,
                clicks: 2,
            }),
            "EventMouseButtonClicked: [2, 3, 11, 12], [x2], [2]"
        );
    }

    #[test]
    fn flipped_wheel_renders_negated_deltas() {
        assert_eq!(
            render(EventPayload::MouseWheel {
                mouse: mouse(5, 6, 41, 42),
                scroll_x: 101,
                scroll_y: 102,
                flipped: true,
            }),
            "EventMouseWheel: [5, 6, 41, 42], [(-101, -102), true]"
        );
        assert_eq!(
            render(EventPayload::MouseWheel {
                mouse: mouse(5, 6, 41, 42),
                scroll_x: 101,
                scroll_y: -1,
                flipped: false,
            }),
            "EventMouseWheel: [5, 6, 41, 42], [(101, -1), false]"
        );
    }

    #[test]
    fn flipped_wheel_at_the_integer_limit_renders_without_overflow() {
        assert_eq!(
            render(EventPayload::MouseWheel {
                mouse: mouse(5, 6, 41, 42),
                scroll_x: i32::MIN,
                scroll_y: 1,
                flipped: true,
            }),
            "EventMouseWheel: [5, 6, 41, 42], [(2147483648, -1), true]"
        );
    }

    #[test]
    fn keyboard_events_render_keysym() {
        let keysym = KeySym {
            scancode: 4,
            keycode: 97,
            modifiers: KeyModifiers::LSHIFT | KeyModifiers::LCTRL,
        };
        assert_eq!(
            render(EventPayload::KeyDown {
                window_id: 7,
                keysym,
                repeat: false,
            }),
            "EventKeyboardDown: [7, 4 (97), 65, false]"
        );
        assert_eq!(
            render(EventPayload::KeyUp {
                window_id: 7,
                keysym,
                repeat: true,
            }),
            "EventKeyboardUp: [7, 4 (97), 65, true]"
        );
    }

    #[test]
    fn device_and_display_events_render_ordinals() {
        assert_eq!(
            render(EventPayload::AudioDeviceAdded {
                device_id: 3,
                device_type: AudioDeviceType::Capture,
            }),
            "EventAudioDeviceAdded: 3 2"
        );
        assert_eq!(
            render(EventPayload::DisplayOrientation {
                display_index: 1,
                orientation: DisplayOrientation::Portrait,
            }),
            "EventDisplayOrientation: 1, 3"
        );
    }

    #[test]
    fn window_events_render_id_and_extras() {
        assert_eq!(
            render(EventPayload::WindowMoved {
                window_id: 9,
                x: -10,
                y: 20,
            }),
            "EventWindowMoved: [9], [-10, 20]"
        );
        assert_eq!(
            render(EventPayload::WindowResized {
                window_id: 9,
                width: 800,
                height: 600,
            }),
            "EventWindowResized: [9], [800, 600]"
        );
        assert_eq!(
            render(EventPayload::WindowFocusLost { window_id: 9 }),
            "EventWindowFocusLost: [9]"
        );
    }

    #[test]
    fn joystick_and_controller_events_render() {
        assert_eq!(
            render(EventPayload::JoyHatMotion {
                joystick_id: 0,
                hat: 1,
                position: HatPosition::LeftUp,
            }),
            "EventJoyHatMotion: [0], [1, left-up]"
        );
        assert_eq!(
            render(EventPayload::JoyBatteryUpdated {
                joystick_id: 2,
                level: JoystickPowerLevel::Low,
            }),
            "EventJoyBatteryUpdated: [2], [low]"
        );
        let touchpad = TouchpadData {
            controller_id: 1,
            touchpad: 0,
            finger: 2,
        };
        assert_eq!(
            render(EventPayload::ControllerTouchpadMotion {
                touchpad,
                x: 0.5,
                y: 0.25,
            }),
            "EventControllerTouchpadMotion: [1, 0, 2], [(0.5, 0.25)]"
        );
        assert_eq!(
            render(EventPayload::ControllerTouchpadUp {
                touchpad,
                pressure: 0.75,
            }),
            "EventControllerTouchpadUp: [1, 0, 2], [0.75]"
        );
        assert_eq!(
            render(EventPayload::ControllerSensorUpdate {
                controller_id: 1,
                sensor: 2,
                data: [1.5, -2.0, 0.0],
            }),
            "EventControllerSensorUpdate: [1, 2], [(1.5, -2, 0)]"
        );
    }

    #[test]
    fn drop_events_render_window_and_value() {
        assert_eq!(
            render(EventPayload::DropFile {
                window_id: 4,
                file: "/tmp/level.map".into(),
            }),
            "EventDropFile: [4], [/tmp/level.map]"
        );
        assert_eq!(
            render(EventPayload::DropBegin { window_id: 4 }),
            "EventDropBegin: [4]"
        );
    }

    #[test]
    fn event_exposes_static_properties() {
        let event = Event::with_timestamp(EventPayload::WindowShown { window_id: 1 }, 42);
        assert_eq!(event.kind(), EventKind::WindowShown);
        assert_eq!(event.name(), "EventWindowShown");
        assert_eq!(event.timestamp_ms(), 42);
        assert!(event.is_in_category(EventCategory::WINDOW));
        assert!(!event.is_in_category(EventCategory::INPUT));
        assert_eq!(event.payload().window_id(), Some(1));
    }

    #[test]
    fn layer_events_render_layer_name() {
        let event = Event::new(EventPayload::LayerPushed {
            layer: "debug-overlay".into(),
        });
        assert_eq!(event.to_string(), "EventLayerPushed: [debug-overlay]");
        assert_eq!(event.payload().mouse(), None);
    }
}
