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

//! Native event to engine event translation.

use crate::event::payload::{
    AudioDeviceType, DisplayOrientation, FingerData, HatPosition, JoystickPowerLevel, MouseButton,
    MouseButtonState, MouseData, TouchpadData,
};
use crate::event::{Event, EventPayload, TranslateError};
use crate::platform::{DisplayEventId, HostEventKind, NativeEvent, NativePayload, WindowEventId};

/// A mouse button release with at least this many clicks is reported as a
/// click instead of a plain release.
pub const MULTI_CLICK_THRESHOLD: u8 = 2;

/// Translates one native event into exactly one engine event.
///
/// The returned event is timestamped with the engine clock at translation
/// time; the host timestamp is not carried over.
pub fn translate(native: &NativeEvent) -> Result<Event, TranslateError> {
    let kind = native
        .kind()
        .ok_or(TranslateError::UnknownKind(native.event_type))?;
    if kind.is_unsupported() {
        return Err(TranslateError::Unsupported(kind));
    }
    translate_payload(kind, &native.payload).map(Event::new)
}

fn translate_payload(
    kind: HostEventKind,
    payload: &NativePayload,
) -> Result<EventPayload, TranslateError> {
    use EventPayload as E;
    use HostEventKind as H;
    use NativePayload as N;

    let mismatch = || TranslateError::PayloadMismatch(kind);

    let translated = match (kind, payload) {
        (H::Quit, N::Empty) => E::Quit,
        (H::LocaleChanged, N::Empty) => E::LocaleChanged,
        (H::ClipboardUpdate, N::Empty) => E::ClipboardUpdate,
        (H::KeymapChanged, N::Empty) => E::KeyMapChanged,
        (H::RenderTargetsReset, N::Empty) => E::RenderTargetsReset,
        (H::RenderDeviceReset, N::Empty) => E::RenderDeviceReset,
        (H::AppTerminating, N::Empty) => E::AppTerminating,
        (H::AppLowMemory, N::Empty) => E::AppLowMemory,
        (H::AppWillEnterBackground, N::Empty) => E::AppEnteringBackground,
        (H::AppDidEnterBackground, N::Empty) => E::AppEnteredBackground,
        (H::AppWillEnterForeground, N::Empty) => E::AppEnteringForeground,
        (H::AppDidEnterForeground, N::Empty) => E::AppEnteredForeground,

        (H::DropFile, N::Drop { window_id, file }) => E::DropFile {
            window_id: *window_id,
            file: file.clone().ok_or_else(mismatch)?,
        },
        (H::DropText, N::Drop { window_id, file }) => E::DropText {
            window_id: *window_id,
            text: file.clone().ok_or_else(mismatch)?,
        },
        (H::DropBegin, N::Drop { window_id, .. }) => E::DropBegin {
            window_id: *window_id,
        },
        (H::DropComplete, N::Drop { window_id, .. }) => E::DropComplete {
            window_id: *window_id,
        },

        (H::AudioDeviceAdded, N::AudioDevice { which, is_capture }) => E::AudioDeviceAdded {
            device_id: *which,
            device_type: audio_device_type(*is_capture),
        },
        (H::AudioDeviceRemoved, N::AudioDevice { which, is_capture }) => E::AudioDeviceRemoved {
            device_id: *which,
            device_type: audio_device_type(*is_capture),
        },

        (H::DisplayEvent, N::Display { display, event, data1 }) => {
            translate_display(kind, *display, *event, *data1)?
        }
        (H::WindowEvent, N::Window { window_id, event, data1, data2 }) => {
            translate_window(kind, *window_id, *event, *data1, *data2)?
        }

        (H::KeyDown, N::Keyboard { window_id, repeat, keysym }) => E::KeyDown {
            window_id: *window_id,
            keysym: *keysym,
            repeat: *repeat,
        },
        (H::KeyUp, N::Keyboard { window_id, repeat, keysym }) => E::KeyUp {
            window_id: *window_id,
            keysym: *keysym,
            repeat: *repeat,
        },
        (H::TextEditing, N::TextEditing { window_id, text, start, length }) => E::TextEditing {
            window_id: *window_id,
            text: text.clone(),
            start: *start,
            length: *length,
        },
        (H::TextInput, N::TextInput { window_id, text }) => E::TextInput {
            window_id: *window_id,
            text: text.clone(),
        },

        (H::MouseMotion, N::MouseMotion { which, window_id, state, x, y, xrel, yrel }) => {
            E::MouseMotion {
                mouse: mouse_data(*which, *window_id, *x, *y),
                state: MouseButtonState::from_bits_retain(*state),
                dx: *xrel,
                dy: *yrel,
            }
        }
        (H::MouseButtonDown, N::MouseButton { which, window_id, button, x, y, .. }) => {
            E::MouseButtonDown {
                mouse: mouse_data(*which, *window_id, *x, *y),
                button: MouseButton::from_index(*button),
            }
        }
        (H::MouseButtonUp, N::MouseButton { which, window_id, button, clicks, x, y }) => {
            let mouse = mouse_data(*which, *window_id, *x, *y);
            let button = MouseButton::from_index(*button);
            if *clicks >= MULTI_CLICK_THRESHOLD {
                E::MouseButtonClicked {
                    mouse,
                    button,
                    clicks: *clicks,
                }
            } else {
                E::MouseButtonUp { mouse, button }
            }
        }
        (H::MouseWheel, N::MouseWheel { which, window_id, x, y, flipped, mouse_x, mouse_y }) => {
            E::MouseWheel {
                mouse: mouse_data(*which, *window_id, *mouse_x, *mouse_y),
                scroll_x: *x,
                scroll_y: *y,
                flipped: *flipped,
            }
        }

        (H::JoyAxisMotion, N::JoyAxis { which, axis, value }) => E::JoyAxisMotion {
            joystick_id: *which,
            axis: *axis,
            value: *value,
        },
        (H::JoyBallMotion, N::JoyBall { which, ball, xrel, yrel }) => E::JoyBallMotion {
            joystick_id: *which,
            ball: *ball,
            dx: *xrel,
            dy: *yrel,
        },
        (H::JoyHatMotion, N::JoyHat { which, hat, value }) => E::JoyHatMotion {
            joystick_id: *which,
            hat: *hat,
            position: HatPosition::from_raw(*value).ok_or(TranslateError::InvalidSubKind {
                kind,
                value: i64::from(*value),
            })?,
        },
        (H::JoyButtonDown, N::JoyButton { which, button }) => E::JoyButtonDown {
            joystick_id: *which,
            button: *button,
        },
        (H::JoyButtonUp, N::JoyButton { which, button }) => E::JoyButtonUp {
            joystick_id: *which,
            button: *button,
        },
        (H::JoyDeviceAdded, N::JoyDevice { which }) => E::JoyDeviceAdded {
            device_index: *which,
        },
        (H::JoyDeviceRemoved, N::JoyDevice { which }) => E::JoyDeviceRemoved {
            joystick_id: *which,
        },
        (H::JoyBatteryUpdated, N::JoyBattery { which, level }) => E::JoyBatteryUpdated {
            joystick_id: *which,
            level: JoystickPowerLevel::from_raw(*level).ok_or(TranslateError::InvalidSubKind {
                kind,
                value: i64::from(*level),
            })?,
        },

        (H::ControllerAxisMotion, N::ControllerAxis { which, axis, value }) => {
            E::ControllerAxisMotion {
                controller_id: *which,
                axis: *axis,
                value: *value,
            }
        }
        (H::ControllerButtonDown, N::ControllerButton { which, button }) => {
            E::ControllerButtonDown {
                controller_id: *which,
                button: *button,
            }
        }
        (H::ControllerButtonUp, N::ControllerButton { which, button }) => E::ControllerButtonUp {
            controller_id: *which,
            button: *button,
        },
        (H::ControllerDeviceAdded, N::ControllerDevice { which }) => E::ControllerDeviceAdded {
            controller_id: *which,
        },
        (H::ControllerDeviceRemoved, N::ControllerDevice { which }) => {
            E::ControllerDeviceRemoved {
                controller_id: *which,
            }
        }
        (H::ControllerDeviceRemapped, N::ControllerDevice { which }) => {
            E::ControllerDeviceRemapped {
                controller_id: *which,
            }
        }
        (
            H::ControllerTouchpadMotion,
            N::ControllerTouchpad { which, touchpad, finger, x, y, .. },
        ) => E::ControllerTouchpadMotion {
            touchpad: touchpad_data(*which, *touchpad, *finger),
            x: *x,
            y: *y,
        },
        (
            H::ControllerTouchpadDown,
            N::ControllerTouchpad { which, touchpad, finger, pressure, .. },
        ) => E::ControllerTouchpadDown {
            touchpad: touchpad_data(*which, *touchpad, *finger),
            pressure: *pressure,
        },
        (
            H::ControllerTouchpadUp,
            N::ControllerTouchpad { which, touchpad, finger, pressure, .. },
        ) => E::ControllerTouchpadUp {
            touchpad: touchpad_data(*which, *touchpad, *finger),
            pressure: *pressure,
        },
        (H::ControllerSensorUpdate, N::ControllerSensor { which, sensor, data }) => {
            E::ControllerSensorUpdate {
                controller_id: *which,
                sensor: *sensor,
                data: *data,
            }
        }

        (
            H::FingerDown,
            N::TouchFinger { touch_id, finger_id, window_id, x, y, pressure, .. },
        ) => E::FingerDown {
            finger: finger_data(*touch_id, *finger_id, *window_id),
            x: *x,
            y: *y,
            pressure: *pressure,
        },
        (H::FingerUp, N::TouchFinger { touch_id, finger_id, window_id, x, y, pressure, .. }) => {
            E::FingerUp {
                finger: finger_data(*touch_id, *finger_id, *window_id),
                x: *x,
                y: *y,
                pressure: *pressure,
            }
        }
        (
            H::FingerMotion,
            N::TouchFinger { touch_id, finger_id, window_id, x, y, dx, dy, pressure },
        ) => E::FingerMotion {
            finger: finger_data(*touch_id, *finger_id, *window_id),
            x: *x,
            y: *y,
            dx: *dx,
            dy: *dy,
            pressure: *pressure,
        },

        (
            H::DollarGesture,
            N::DollarGesture { touch_id, gesture_id, num_fingers, error, x, y },
        ) => E::DollarGesture {
            touch_id: *touch_id,
            gesture_id: *gesture_id,
            fingers: *num_fingers,
            error: *error,
            x: *x,
            y: *y,
        },
        (H::DollarRecord, N::DollarGesture { touch_id, gesture_id, .. }) => E::DollarRecord {
            touch_id: *touch_id,
            gesture_id: *gesture_id,
        },
        (H::MultiGesture, N::MultiGesture { touch_id, d_theta, d_dist, x, y, num_fingers }) => {
            E::MultiGesture {
                touch_id: *touch_id,
                fingers: *num_fingers,
                d_theta: *d_theta,
                d_dist: *d_dist,
                x: *x,
                y: *y,
            }
        }

        _ => return Err(mismatch()),
    };
    Ok(translated)
}

fn translate_display(
    kind: HostEventKind,
    display_index: u32,
    event: u8,
    data1: i32,
) -> Result<EventPayload, TranslateError> {
    let invalid = |value: i64| TranslateError::InvalidSubKind { kind, value };
    let id = DisplayEventId::from_raw(event).ok_or_else(|| invalid(i64::from(event)))?;
    Ok(match id {
        DisplayEventId::Orientation => EventPayload::DisplayOrientation {
            display_index,
            orientation: DisplayOrientation::from_raw(data1)
                .ok_or_else(|| invalid(i64::from(data1)))?,
        },
        DisplayEventId::Connected => EventPayload::DisplayConnected { display_index },
        DisplayEventId::Disconnected => EventPayload::DisplayDisconnected { display_index },
    })
}

fn translate_window(
    kind: HostEventKind,
    window_id: u32,
    event: u8,
    data1: i32,
    data2: i32,
) -> Result<EventPayload, TranslateError> {
    use EventPayload as E;
    use WindowEventId as W;

    let id = WindowEventId::from_raw(event).ok_or(TranslateError::InvalidSubKind {
        kind,
        value: i64::from(event),
    })?;
    Ok(match id {
        W::Shown => E::WindowShown { window_id },
        W::Hidden => E::WindowHidden { window_id },
        W::Exposed => E::WindowExposed { window_id },
        W::Moved => E::WindowMoved {
            window_id,
            x: data1,
            y: data2,
        },
        W::Resized => E::WindowResized {
            window_id,
            width: data1,
            height: data2,
        },
        W::SizeChanged => E::WindowSizeChanged {
            window_id,
            width: data1,
            height: data2,
        },
        W::Minimized => E::WindowMinimized { window_id },
        W::Maximized => E::WindowMaximized { window_id },
        W::Restored => E::WindowRestored { window_id },
        W::Enter => E::WindowEnter { window_id },
        W::Leave => E::WindowLeave { window_id },
        W::FocusGained => E::WindowFocusGained { window_id },
        W::FocusLost => E::WindowFocusLost { window_id },
        W::Close => E::WindowClosed { window_id },
        W::TakeFocus => E::WindowTakeFocus { window_id },
        W::HitTest => E::WindowHitTest { window_id },
        W::IccProfileChanged => E::WindowIccProfileChanged { window_id },
        W::DisplayChanged => E::WindowDisplayChanged {
            window_id,
            display_index: data1,
        },
    })
}

fn audio_device_type(is_capture: bool) -> AudioDeviceType {
    if is_capture {
        AudioDeviceType::Capture
    } else {
        AudioDeviceType::Output
    }
}

fn mouse_data(mouse_id: u32, window_id: u32, x: i32, y: i32) -> MouseData {
    MouseData {
        mouse_id,
        window_id,
        x,
        y,
    }
}

fn touchpad_data(controller_id: i32, touchpad: i32, finger: i32) -> TouchpadData {
    TouchpadData {
        controller_id,
        touchpad,
        finger,
    }
}

fn finger_data(touch_id: i64, finger_id: i64, window_id: u32) -> FingerData {
    FingerData {
        touch_id,
        finger_id,
        window_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::payload::KeyModifiers;
    use crate::event::{EventKind, KeySym};
    use approx::assert_relative_eq;

    fn native(kind: HostEventKind, payload: NativePayload) -> NativeEvent {
        NativeEvent::new(kind, 0, payload)
    }

    fn button(kind: HostEventKind, button: u8, clicks: u8) -> NativeEvent {
        native(
            kind,
            NativePayload::MouseButton {
                which: 2,
                window_id: 3,
                button,
                clicks,
                x: 11,
                y: 12,
            },
        )
    }

    #[test]
    fn unknown_and_unsupported_types_are_rejected() {
        let unknown = NativeEvent {
            event_type: 0x4242,
            timestamp: 0,
            payload: NativePayload::Empty,
        };
        assert_eq!(
            translate(&unknown).unwrap_err(),
            TranslateError::UnknownKind(0x4242)
        );
        assert_eq!(
            translate(&native(HostEventKind::SysWmEvent, NativePayload::Empty)).unwrap_err(),
            TranslateError::Unsupported(HostEventKind::SysWmEvent)
        );
    }

    #[test]
    fn mismatched_payload_is_rejected() {
        let event = native(HostEventKind::KeyDown, NativePayload::Empty);
        assert_eq!(
            translate(&event).unwrap_err(),
            TranslateError::PayloadMismatch(HostEventKind::KeyDown)
        );
    }

    #[test]
    fn mouse_button_release_becomes_click_on_multi_click() {
        let down = translate(&button(HostEventKind::MouseButtonDown, 1, 1)).unwrap();
        assert_eq!(down.to_string(), "EventMouseButtonDown: [2, 3, 11, 12], [left]");

        let up = translate(&button(HostEventKind::MouseButtonUp, 3, 1)).unwrap();
        assert_eq!(up.kind(), EventKind::MouseButtonUp);

        let clicked = translate(&button(HostEventKind::MouseButtonUp, 3, 2)).unwrap();
        assert_eq!(clicked.kind(), EventKind::MouseButtonClicked);
        assert_eq!(
            clicked.to_string(),
            "EventMouseButtonClicked: [2, 3, 11, 12], [right], [2]"
        );
    }

    #[test]
    fn mouse_wheel_uses_cursor_position() {
        let event = translate(&native(
            HostEventKind::MouseWheel,
            NativePayload::MouseWheel {
                which: 5,
                window_id: 6,
                x: 101,
                y: 102,
                flipped: true,
                mouse_x: 41,
                mouse_y: 42,
            },
        ))
        .unwrap();
        assert_eq!(
            event.to_string(),
            "EventMouseWheel: [5, 6, 41, 42], [(-101, -102), true]"
        );
    }

    #[test]
    fn keyboard_fields_are_lifted() {
        let keysym = KeySym {
            scancode: 4,
            keycode: 97,
            modifiers: KeyModifiers::LSHIFT,
        };
        let event = translate(&native(
            HostEventKind::KeyDown,
            NativePayload::Keyboard {
                window_id: 1,
                repeat: true,
                keysym,
            },
        ))
        .unwrap();
        assert_eq!(event.payload().keysym(), Some(&keysym));
        assert_eq!(event.payload().window_id(), Some(1));
    }

    #[test]
    fn window_sub_kinds_select_the_event() {
        let window = |event: u8, data1: i32, data2: i32| {
            translate(&native(
                HostEventKind::WindowEvent,
                NativePayload::Window {
                    window_id: 9,
                    event,
                    data1,
                    data2,
                },
            ))
        };
        assert_eq!(
            window(WindowEventId::Moved as u8, 10, 20).unwrap().to_string(),
            "EventWindowMoved: [9], [10, 20]"
        );
        assert_eq!(
            window(WindowEventId::Close as u8, 0, 0).unwrap().kind(),
            EventKind::WindowClosed
        );
        assert_eq!(
            window(WindowEventId::DisplayChanged as u8, 1, 0)
                .unwrap()
                .to_string(),
            "EventWindowDisplayChanged: [9], [1]"
        );
        assert_eq!(
            window(0, 0, 0).unwrap_err(),
            TranslateError::InvalidSubKind {
                kind: HostEventKind::WindowEvent,
                value: 0
            }
        );
    }

    #[test]
    fn display_orientation_is_validated() {
        let display = |event: u8, data1: i32| {
            translate(&native(
                HostEventKind::DisplayEvent,
                NativePayload::Display {
                    display: 1,
                    event,
                    data1,
                },
            ))
        };
        assert_eq!(
            display(DisplayEventId::Orientation as u8, 3).unwrap().payload(),
            &EventPayload::DisplayOrientation {
                display_index: 1,
                orientation: DisplayOrientation::Portrait
            }
        );
        assert!(display(DisplayEventId::Orientation as u8, 9).is_err());
        assert_eq!(
            display(DisplayEventId::Disconnected as u8, 0).unwrap().kind(),
            EventKind::DisplayDisconnected
        );
    }

    #[test]
    fn hat_and_battery_values_are_validated() {
        let hat = |value: u8| {
            translate(&native(
                HostEventKind::JoyHatMotion,
                NativePayload::JoyHat {
                    which: 0,
                    hat: 1,
                    value,
                },
            ))
        };
        assert_eq!(hat(0x03).unwrap().to_string(), "EventJoyHatMotion: [0], [1, right-up]");
        assert!(hat(0x05).is_err());

        let battery = translate(&native(
            HostEventKind::JoyBatteryUpdated,
            NativePayload::JoyBattery { which: 4, level: 4 },
        ))
        .unwrap();
        assert_eq!(battery.to_string(), "EventJoyBatteryUpdated: [4], [wired]");
    }

    #[test]
    fn drop_file_requires_a_path() {
        let missing = native(
            HostEventKind::DropFile,
            NativePayload::Drop {
                window_id: 1,
                file: None,
            },
        );
        assert!(translate(&missing).is_err());

        let begin = native(
            HostEventKind::DropBegin,
            NativePayload::Drop {
                window_id: 1,
                file: None,
            },
        );
        assert_eq!(translate(&begin).unwrap().to_string(), "EventDropBegin: [1]");
    }

    #[test]
    fn touchpad_and_finger_floats_are_preserved() {
        let touchpad = translate(&native(
            HostEventKind::ControllerTouchpadDown,
            NativePayload::ControllerTouchpad {
                which: 1,
                touchpad: 0,
                finger: 2,
                x: 0.25,
                y: 0.75,
                pressure: 0.5,
            },
        ))
        .unwrap();
        match touchpad.payload() {
            EventPayload::ControllerTouchpadDown { touchpad, pressure } => {
                assert_eq!(touchpad.finger, 2);
                assert_relative_eq!(*pressure, 0.5);
            }
            other => panic!("unexpected payload {other:?}"),
        }

        let finger = translate(&native(
            HostEventKind::FingerMotion,
            NativePayload::TouchFinger {
                touch_id: 7,
                finger_id: 8,
                window_id: 9,
                x: 0.1,
                y: 0.2,
                dx: 0.01,
                dy: -0.02,
                pressure: 1.0,
            },
        ))
        .unwrap();
        match finger.payload() {
            EventPayload::FingerMotion { finger, dy, .. } => {
                assert_eq!(finger.window_id, 9);
                assert_relative_eq!(*dy, -0.02);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn every_translatable_host_kind_maps_to_its_engine_kind() {
        for kind in EventKind::ALL {
            if let Some(host) = kind.host_kind() {
                assert!(!host.is_unsupported(), "{kind} maps to an unsupported host kind");
            }
        }
    }
}
