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

//! Translation from `winit` window events to the host layer's native events.
//!
//! `winit` reports less than the engine's host model expects: no relative
//! mouse motion, no click counts, no drop sessions. [`InputState`] keeps the
//! little state needed to fill those in.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use ember_core::event::{KeyModifiers, KeySym, MouseButton, MouseButtonState};
use ember_core::platform::{HostEventKind, NativeEvent, NativePayload, WindowEventId};
use winit::event::{
    ElementState, Ime, KeyEvent, Modifiers, MouseButton as WinitMouseButton, MouseScrollDelta,
    Touch, TouchPhase, WindowEvent,
};
use winit::keyboard::{Key, KeyCode, ModifiersKeyState, NamedKey, PhysicalKey};

/// Presses of the same button closer together than this count as one
/// multi-click.
pub const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(500);

/// Keycodes of keys without a character are their scancode with this bit set.
pub const SCANCODE_MASK: i32 = 1 << 30;

/// The mouse instance reported for every pointer event.
const POINTER_ID: u32 = 0;

#[derive(Debug, Clone, Copy)]
struct ClickTracker {
    button: u8,
    at: Instant,
    clicks: u8,
}

/// Per-window input state needed to build complete native events.
#[derive(Debug)]
pub struct InputState {
    epoch: Instant,
    cursor: HashMap<u32, (i32, i32)>,
    buttons: MouseButtonState,
    modifiers: KeyModifiers,
    last_click: Option<ClickTracker>,
    sizes: HashMap<u32, (u32, u32)>,
    fingers: HashMap<u64, (f32, f32)>,
    drops: Vec<u32>,
}

impl InputState {
    /// Creates an empty state whose timestamps count from now.
    pub fn new() -> Self {
        Self::with_epoch(Instant::now())
    }

    /// Creates an empty state whose timestamps count from `epoch`.
    pub fn with_epoch(epoch: Instant) -> Self {
        Self {
            epoch,
            cursor: HashMap::new(),
            buttons: MouseButtonState::EMPTY,
            modifiers: KeyModifiers::EMPTY,
            last_click: None,
            sizes: HashMap::new(),
            fingers: HashMap::new(),
            drops: Vec::new(),
        }
    }

    /// Host milliseconds at `now`, wrapping like the host's 32-bit clock.
    pub fn timestamp(&self, now: Instant) -> u32 {
        now.saturating_duration_since(self.epoch).as_millis() as u32
    }

    /// The modifiers currently held.
    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    /// The mouse buttons currently held.
    pub fn buttons(&self) -> MouseButtonState {
        self.buttons
    }

    /// Translates one `winit` event for `window_id` into zero or more native
    /// events, in the order the host would report them.
    pub fn translate(
        &mut self,
        window_id: u32,
        event: &WindowEvent,
        now: Instant,
    ) -> Vec<NativeEvent> {
        let timestamp = self.timestamp(now);
        let native = |kind: HostEventKind, payload: NativePayload| {
            NativeEvent::new(kind, timestamp, payload)
        };
        let window = |id: WindowEventId, data1: i32, data2: i32| {
            native(
                HostEventKind::WindowEvent,
                NativePayload::Window {
                    window_id,
                    event: id as u8,
                    data1,
                    data2,
                },
            )
        };

        match event {
            WindowEvent::KeyboardInput { event, .. } => self.keyboard(window_id, event, timestamp),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = map_modifiers(modifiers);
                Vec::new()
            }
            WindowEvent::Ime(Ime::Preedit(text, cursor)) => {
                let (start, length) = cursor
                    .map(|(start, end)| (start as i32, end.saturating_sub(start) as i32))
                    .unwrap_or((0, 0));
                vec![native(
                    HostEventKind::TextEditing,
                    NativePayload::TextEditing {
                        window_id,
                        text: text.clone(),
                        start,
                        length,
                    },
                )]
            }
            WindowEvent::Ime(Ime::Commit(text)) => vec![native(
                HostEventKind::TextInput,
                NativePayload::TextInput {
                    window_id,
                    text: text.clone(),
                },
            )],

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x.round() as i32, position.y.round() as i32);
                let (xrel, yrel) = match self.cursor.insert(window_id, (x, y)) {
                    Some((last_x, last_y)) => (x - last_x, y - last_y),
                    None => (0, 0),
                };
                vec![native(
                    HostEventKind::MouseMotion,
                    NativePayload::MouseMotion {
                        which: POINTER_ID,
                        window_id,
                        state: self.buttons.bits(),
                        x,
                        y,
                        xrel,
                        yrel,
                    },
                )]
            }
            WindowEvent::CursorEntered { .. } => vec![window(WindowEventId::Enter, 0, 0)],
            WindowEvent::CursorLeft { .. } => vec![window(WindowEventId::Leave, 0, 0)],
            WindowEvent::MouseInput { state, button, .. } => {
                vec![self.mouse_button(window_id, *state, *button, now, timestamp)]
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (x.round() as i32, y.round() as i32),
                    MouseScrollDelta::PixelDelta(position) => {
                        (position.x.round() as i32, position.y.round() as i32)
                    }
                };
                if x == 0 && y == 0 {
                    return Vec::new();
                }
                let (mouse_x, mouse_y) = self.cursor_in(window_id);
                vec![native(
                    HostEventKind::MouseWheel,
                    NativePayload::MouseWheel {
                        which: POINTER_ID,
                        window_id,
                        x,
                        y,
                        flipped: false,
                        mouse_x,
                        mouse_y,
                    },
                )]
            }
            WindowEvent::Touch(touch) => vec![self.touch(window_id, touch, timestamp)],

            WindowEvent::Focused(true) => vec![window(WindowEventId::FocusGained, 0, 0)],
            WindowEvent::Focused(false) => vec![window(WindowEventId::FocusLost, 0, 0)],
            WindowEvent::Occluded(true) => vec![window(WindowEventId::Hidden, 0, 0)],
            WindowEvent::Occluded(false) => vec![
                window(WindowEventId::Shown, 0, 0),
                window(WindowEventId::Exposed, 0, 0),
            ],
            WindowEvent::Moved(position) => {
                vec![window(WindowEventId::Moved, position.x, position.y)]
            }
            WindowEvent::Resized(size) => {
                let (width, height) = (size.width as i32, size.height as i32);
                let mut events = Vec::with_capacity(2);
                let previous = self.sizes.insert(window_id, (size.width, size.height));
                if previous != Some((size.width, size.height)) {
                    events.push(window(WindowEventId::SizeChanged, width, height));
                }
                events.push(window(WindowEventId::Resized, width, height));
                events
            }
            WindowEvent::CloseRequested => vec![window(WindowEventId::Close, 0, 0)],
            WindowEvent::Destroyed => {
                self.cursor.remove(&window_id);
                self.sizes.remove(&window_id);
                Vec::new()
            }

            WindowEvent::HoveredFile(_) => {
                let mut events = Vec::new();
                self.begin_drop(window_id, timestamp, &mut events);
                events
            }
            WindowEvent::DroppedFile(path) => {
                let mut events = Vec::new();
                self.begin_drop(window_id, timestamp, &mut events);
                events.push(native(
                    HostEventKind::DropFile,
                    NativePayload::Drop {
                        window_id,
                        file: Some(path.to_string_lossy().into_owned()),
                    },
                ));
                events
            }
            WindowEvent::HoveredFileCancelled => self.complete_drop(window_id, timestamp),

            _ => Vec::new(),
        }
    }

    /// Closes every open drop session. Called once the host has delivered a
    /// batch of events, since `winit` never reports the end of a drop.
    pub fn finish_batch(&mut self, now: Instant) -> Vec<NativeEvent> {
        let timestamp = self.timestamp(now);
        self.drops
            .drain(..)
            .map(|window_id| {
                NativeEvent::new(
                    HostEventKind::DropComplete,
                    timestamp,
                    NativePayload::Drop {
                        window_id,
                        file: None,
                    },
                )
            })
            .collect()
    }

    fn begin_drop(&mut self, window_id: u32, timestamp: u32, events: &mut Vec<NativeEvent>) {
        if !self.drops.contains(&window_id) {
            self.drops.push(window_id);
            events.push(NativeEvent::new(
                HostEventKind::DropBegin,
                timestamp,
                NativePayload::Drop {
                    window_id,
                    file: None,
                },
            ));
        }
    }

    fn complete_drop(&mut self, window_id: u32, timestamp: u32) -> Vec<NativeEvent> {
        let Some(index) = self.drops.iter().position(|id| *id == window_id) else {
            return Vec::new();
        };
        self.drops.swap_remove(index);
        vec![NativeEvent::new(
            HostEventKind::DropComplete,
            timestamp,
            NativePayload::Drop {
                window_id,
                file: None,
            },
        )]
    }

    fn cursor_in(&self, window_id: u32) -> (i32, i32) {
        self.cursor.get(&window_id).copied().unwrap_or((0, 0))
    }

    fn keyboard(&mut self, window_id: u32, event: &KeyEvent, timestamp: u32) -> Vec<NativeEvent> {
        let scancode = match event.physical_key {
            PhysicalKey::Code(code) => map_scancode(code),
            PhysicalKey::Unidentified(_) => 0,
        };
        let keysym = KeySym {
            scancode,
            keycode: map_keycode(&event.logical_key, scancode),
            modifiers: self.modifiers,
        };
        let kind = match event.state {
            ElementState::Pressed => HostEventKind::KeyDown,
            ElementState::Released => HostEventKind::KeyUp,
        };

        let mut events = vec![NativeEvent::new(
            kind,
            timestamp,
            NativePayload::Keyboard {
                window_id,
                repeat: event.repeat,
                keysym,
            },
        )];
        if event.state == ElementState::Pressed {
            if let Some(text) = event.text.as_ref().filter(|text| is_printable(text)) {
                events.push(NativeEvent::new(
                    HostEventKind::TextInput,
                    timestamp,
                    NativePayload::TextInput {
                        window_id,
                        text: text.to_string(),
                    },
                ));
            }
        }
        events
    }

    fn mouse_button(
        &mut self,
        window_id: u32,
        state: ElementState,
        button: WinitMouseButton,
        now: Instant,
        timestamp: u32,
    ) -> NativeEvent {
        let index = map_mouse_button(button);
        let bit = MouseButtonState::for_button(MouseButton::from_index(index));
        let (x, y) = self.cursor_in(window_id);

        let (kind, clicks) = match state {
            ElementState::Pressed => {
                self.buttons.insert(bit);
                let clicks = match self.last_click {
                    Some(last)
                        if last.button == index
                            && now.saturating_duration_since(last.at) <= DOUBLE_CLICK_INTERVAL =>
                    {
                        last.clicks.saturating_add(1)
                    }
                    _ => 1,
                };
                self.last_click = Some(ClickTracker {
                    button: index,
                    at: now,
                    clicks,
                });
                (HostEventKind::MouseButtonDown, clicks)
            }
            ElementState::Released => {
                self.buttons.remove(bit);
                let clicks = match self.last_click {
                    Some(last) if last.button == index => last.clicks,
                    _ => 1,
                };
                (HostEventKind::MouseButtonUp, clicks)
            }
        };

        NativeEvent::new(
            kind,
            timestamp,
            NativePayload::MouseButton {
                which: POINTER_ID,
                window_id,
                button: index,
                clicks,
                x,
                y,
            },
        )
    }

    fn touch(&mut self, window_id: u32, touch: &Touch, timestamp: u32) -> NativeEvent {
        let (width, height) = self.sizes.get(&window_id).copied().unwrap_or((1, 1));
        let x = (touch.location.x / f64::from(width.max(1))) as f32;
        let y = (touch.location.y / f64::from(height.max(1))) as f32;
        let pressure = touch.force.map(|force| force.normalized() as f32).unwrap_or(1.0);

        let (kind, dx, dy) = match touch.phase {
            TouchPhase::Started => {
                self.fingers.insert(touch.id, (x, y));
                (HostEventKind::FingerDown, 0.0, 0.0)
            }
            TouchPhase::Moved => {
                let (last_x, last_y) = self.fingers.insert(touch.id, (x, y)).unwrap_or((x, y));
                (HostEventKind::FingerMotion, x - last_x, y - last_y)
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.fingers.remove(&touch.id);
                (HostEventKind::FingerUp, 0.0, 0.0)
            }
        };

        NativeEvent::new(
            kind,
            timestamp,
            NativePayload::TouchFinger {
                touch_id: 0,
                finger_id: touch.id as i64,
                window_id,
                x,
                y,
                dx,
                dy,
                pressure,
            },
        )
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn is_printable(text: &str) -> bool {
    !text.is_empty() && !text.chars().any(char::is_control)
}

/// Maps a `winit` mouse button to the host's button index (0 when the button
/// has no host equivalent).
pub fn map_mouse_button(button: WinitMouseButton) -> u8 {
    match button {
        WinitMouseButton::Left => 1,
        WinitMouseButton::Middle => 2,
        WinitMouseButton::Right => 3,
        WinitMouseButton::Back => 4,
        WinitMouseButton::Forward => 5,
        WinitMouseButton::Other(_) => 0,
    }
}

/// Maps `winit` modifier state to the host's modifier bits. When a platform
/// does not report which side is held, the left key is assumed.
pub fn map_modifiers(modifiers: &Modifiers) -> KeyModifiers {
    let state = modifiers.state();
    let mut bits = KeyModifiers::EMPTY;
    set_sided(
        &mut bits,
        state.shift_key(),
        (modifiers.lshift_state(), modifiers.rshift_state()),
        (KeyModifiers::LSHIFT, KeyModifiers::RSHIFT),
    );
    set_sided(
        &mut bits,
        state.control_key(),
        (modifiers.lcontrol_state(), modifiers.rcontrol_state()),
        (KeyModifiers::LCTRL, KeyModifiers::RCTRL),
    );
    set_sided(
        &mut bits,
        state.alt_key(),
        (modifiers.lalt_state(), modifiers.ralt_state()),
        (KeyModifiers::LALT, KeyModifiers::RALT),
    );
    set_sided(
        &mut bits,
        state.super_key(),
        (modifiers.lsuper_state(), modifiers.rsuper_state()),
        (KeyModifiers::LGUI, KeyModifiers::RGUI),
    );
    bits
}

fn set_sided(
    bits: &mut KeyModifiers,
    held: bool,
    (left, right): (ModifiersKeyState, ModifiersKeyState),
    (left_bit, right_bit): (KeyModifiers, KeyModifiers),
) {
    if !held {
        return;
    }
    let right = right == ModifiersKeyState::Pressed;
    bits.set(left_bit, left == ModifiersKeyState::Pressed || !right);
    bits.set(right_bit, right);
}

/// Maps a layout-dependent key to the host keycode: the lowercase character
/// for printable keys, a few control characters, otherwise the scancode with
/// [`SCANCODE_MASK`] set.
pub fn map_keycode(key: &Key, scancode: u32) -> i32 {
    match key {
        Key::Character(text) => match text.chars().next() {
            Some(c) => c.to_lowercase().next().unwrap_or(c) as i32,
            None => SCANCODE_MASK | scancode as i32,
        },
        Key::Named(NamedKey::Enter) => '\r' as i32,
        Key::Named(NamedKey::Escape) => 0x1B,
        Key::Named(NamedKey::Backspace) => 0x08,
        Key::Named(NamedKey::Tab) => '\t' as i32,
        Key::Named(NamedKey::Space) => ' ' as i32,
        Key::Named(NamedKey::Delete) => 0x7F,
        _ => SCANCODE_MASK | scancode as i32,
    }
}

/// Maps a physical key to its USB HID usage id, 0 when unknown.
pub fn map_scancode(code: KeyCode) -> u32 {
    use KeyCode as K;
    match code {
        K::KeyA => 4,
        K::KeyB => 5,
        K::KeyC => 6,
        K::KeyD => 7,
        K::KeyE => 8,
        K::KeyF => 9,
        K::KeyG => 10,
        K::KeyH => 11,
        K::KeyI => 12,
        K::KeyJ => 13,
        K::KeyK => 14,
        K::KeyL => 15,
        K::KeyM => 16,
        K::KeyN => 17,
        K::KeyO => 18,
        K::KeyP => 19,
        K::KeyQ => 20,
        K::KeyR => 21,
        K::KeyS => 22,
        K::KeyT => 23,
        K::KeyU => 24,
        K::KeyV => 25,
        K::KeyW => 26,
        K::KeyX => 27,
        K::KeyY => 28,
        K::KeyZ => 29,
        K::Digit1 => 30,
        K::Digit2 => 31,
        K::Digit3 => 32,
        K::Digit4 => 33,
        K::Digit5 => 34,
        K::Digit6 => 35,
        K::Digit7 => 36,
        K::Digit8 => 37,
        K::Digit9 => 38,
        K::Digit0 => 39,
        K::Enter => 40,
        K::Escape => 41,
        K::Backspace => 42,
        K::Tab => 43,
        K::Space => 44,
        K::Minus => 45,
        K::Equal => 46,
        K::BracketLeft => 47,
        K::BracketRight => 48,
        K::Backslash => 49,
        K::Semicolon => 51,
        K::Quote => 52,
        K::Backquote => 53,
        K::Comma => 54,
        K::Period => 55,
        K::Slash => 56,
        K::CapsLock => 57,
        K::F1 => 58,
        K::F2 => 59,
        K::F3 => 60,
        K::F4 => 61,
        K::F5 => 62,
        K::F6 => 63,
        K::F7 => 64,
        K::F8 => 65,
        K::F9 => 66,
        K::F10 => 67,
        K::F11 => 68,
        K::F12 => 69,
        K::PrintScreen => 70,
        K::ScrollLock => 71,
        K::Pause => 72,
        K::Insert => 73,
        K::Home => 74,
        K::PageUp => 75,
        K::Delete => 76,
        K::End => 77,
        K::PageDown => 78,
        K::ArrowRight => 79,
        K::ArrowLeft => 80,
        K::ArrowDown => 81,
        K::ArrowUp => 82,
        K::NumLock => 83,
        K::NumpadDivide => 84,
        K::NumpadMultiply => 85,
        K::NumpadSubtract => 86,
        K::NumpadAdd => 87,
        K::NumpadEnter => 88,
        K::Numpad1 => 89,
        K::Numpad2 => 90,
        K::Numpad3 => 91,
        K::Numpad4 => 92,
        K::Numpad5 => 93,
        K::Numpad6 => 94,
        K::Numpad7 => 95,
        K::Numpad8 => 96,
        K::Numpad9 => 97,
        K::Numpad0 => 98,
        K::NumpadDecimal => 99,
        K::ControlLeft => 224,
        K::ShiftLeft => 225,
        K::AltLeft => 226,
        K::SuperLeft => 227,
        K::ControlRight => 228,
        K::ShiftRight => 229,
        K::AltRight => 230,
        K::SuperRight => 231,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{DeviceId, TouchPhase};
    use winit::keyboard::ModifiersState;

    fn device() -> DeviceId {
        // SAFETY: the dummy id is only compared, never handed back to winit.
        unsafe { DeviceId::dummy() }
    }

    fn moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn press(state: ElementState, button: WinitMouseButton) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device(),
            state,
            button,
        }
    }

    fn payload(events: &[NativeEvent]) -> &NativePayload {
        assert_eq!(events.len(), 1, "expected one native event, got {events:?}");
        &events[0].payload
    }

    #[test]
    fn test_map_scancode_uses_hid_usage_ids() {
        assert_eq!(map_scancode(KeyCode::KeyA), 4);
        assert_eq!(map_scancode(KeyCode::Digit0), 39);
        assert_eq!(map_scancode(KeyCode::ShiftRight), 229);
        assert_eq!(map_scancode(KeyCode::F24), 0);
    }

    #[test]
    fn test_map_keycode_characters_and_named_keys() {
        assert_eq!(map_keycode(&Key::Character("A".into()), 4), 'a' as i32);
        assert_eq!(map_keycode(&Key::Named(NamedKey::Escape), 41), 0x1B);
        assert_eq!(
            map_keycode(&Key::Named(NamedKey::ArrowUp), 82),
            SCANCODE_MASK | 82
        );
    }

    #[test]
    fn test_map_mouse_button_indices() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), 1);
        assert_eq!(map_mouse_button(WinitMouseButton::Right), 3);
        assert_eq!(map_mouse_button(WinitMouseButton::Forward), 5);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(9)), 0);
    }

    #[test]
    fn test_map_modifiers_defaults_to_left_side() {
        let modifiers = Modifiers::from(ModifiersState::SHIFT | ModifiersState::CONTROL);
        let bits = map_modifiers(&modifiers);
        assert!(bits.contains(KeyModifiers::LSHIFT | KeyModifiers::LCTRL));
        assert!(!bits.intersects(KeyModifiers::RSHIFT | KeyModifiers::LALT));
    }

    #[test]
    fn test_cursor_motion_reports_relative_deltas() {
        let now = Instant::now();
        let mut input = InputState::with_epoch(now);

        let first = input.translate(7, &moved(10.0, 20.0), now);
        assert!(matches!(
            payload(&first),
            NativePayload::MouseMotion { x: 10, y: 20, xrel: 0, yrel: 0, .. }
        ));

        let second = input.translate(7, &moved(15.0, 18.0), now);
        assert!(matches!(
            payload(&second),
            NativePayload::MouseMotion { x: 15, y: 18, xrel: 5, yrel: -2, .. }
        ));
    }

    #[test]
    fn test_button_state_is_tracked_in_motion() {
        let now = Instant::now();
        let mut input = InputState::with_epoch(now);
        input.translate(1, &press(ElementState::Pressed, WinitMouseButton::Right), now);
        let motion = input.translate(1, &moved(1.0, 1.0), now);
        match payload(&motion) {
            NativePayload::MouseMotion { state, .. } => {
                assert_eq!(*state, MouseButtonState::RIGHT.bits())
            }
            other => panic!("unexpected payload {other:?}"),
        }

        input.translate(1, &press(ElementState::Released, WinitMouseButton::Right), now);
        assert!(input.buttons().is_empty());
    }

    #[test]
    fn test_quick_presses_count_as_multi_click() {
        let start = Instant::now();
        let mut input = InputState::with_epoch(start);
        let click = |input: &mut InputState, at: Instant| {
            input.translate(1, &press(ElementState::Pressed, WinitMouseButton::Left), at);
            let released = press(ElementState::Released, WinitMouseButton::Left);
            let up = input.translate(1, &released, at);
            match payload(&up) {
                NativePayload::MouseButton { clicks, .. } => *clicks,
                other => panic!("unexpected payload {other:?}"),
            }
        };

        assert_eq!(click(&mut input, start), 1);
        assert_eq!(click(&mut input, start + Duration::from_millis(200)), 2);
        assert_eq!(click(&mut input, start + Duration::from_millis(2_000)), 1);
    }

    #[test]
    fn test_resize_reports_size_change_once() {
        let now = Instant::now();
        let mut input = InputState::with_epoch(now);
        let resize = WindowEvent::Resized(PhysicalSize::new(800, 600));

        let first = input.translate(3, &resize, now);
        assert_eq!(first.len(), 2);
        let repeated = input.translate(3, &resize, now);
        assert_eq!(repeated.len(), 1);
        assert!(matches!(
            repeated[0].payload,
            NativePayload::Window { event, data1: 800, data2: 600, .. }
                if event == WindowEventId::Resized as u8
        ));
    }

    #[test]
    fn test_dropped_files_form_one_session() {
        let now = Instant::now();
        let mut input = InputState::with_epoch(now);
        let a = input.translate(2, &WindowEvent::DroppedFile("a.png".into()), now);
        let b = input.translate(2, &WindowEvent::DroppedFile("b.png".into()), now);
        let done = input.finish_batch(now);

        let kinds: Vec<_> = a
            .iter()
            .chain(&b)
            .chain(&done)
            .filter_map(NativeEvent::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                HostEventKind::DropBegin,
                HostEventKind::DropFile,
                HostEventKind::DropFile,
                HostEventKind::DropComplete,
            ]
        );
        assert!(input.finish_batch(now).is_empty());
    }

    #[test]
    fn test_touch_positions_are_normalized() {
        let now = Instant::now();
        let mut input = InputState::with_epoch(now);
        input.translate(4, &WindowEvent::Resized(PhysicalSize::new(200, 100)), now);

        let touch = |phase: TouchPhase, x: f64, y: f64| {
            WindowEvent::Touch(Touch {
                device_id: device(),
                phase,
                location: PhysicalPosition::new(x, y),
                force: None,
                id: 3,
            })
        };
        input.translate(4, &touch(TouchPhase::Started, 100.0, 50.0), now);
        let moved = input.translate(4, &touch(TouchPhase::Moved, 150.0, 50.0), now);
        match payload(&moved) {
            NativePayload::TouchFinger { x, dx, dy, pressure, .. } => {
                assert_relative_eq!(*x, 0.75);
                assert_relative_eq!(*dx, 0.25);
                assert_relative_eq!(*dy, 0.0);
                assert_relative_eq!(*pressure, 1.0);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_focus_and_close_map_to_window_sub_kinds() {
        let now = Instant::now();
        let mut input = InputState::with_epoch(now);
        let focus = input.translate(5, &WindowEvent::Focused(true), now);
        assert!(matches!(
            payload(&focus),
            NativePayload::Window { window_id: 5, event, .. }
                if *event == WindowEventId::FocusGained as u8
        ));
        let close = input.translate(5, &WindowEvent::CloseRequested, now);
        assert!(matches!(
            payload(&close),
            NativePayload::Window { event, .. } if *event == WindowEventId::Close as u8
        ));
    }
}
