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

//! Coarse classification bits attached to every event kind.

use crate::ember_bitflags;

ember_bitflags! {
    /// Orthogonal category bits an event may belong to.
    ///
    /// Categories are meant for coarse filtering in application code; the
    /// dispatchers route on [`EventKind`](super::EventKind) only.
    pub struct EventCategory: u32 {
        /// Application and process lifecycle.
        const APPLICATION = 1 << 0;
        /// Any user input.
        const INPUT = 1 << 1;
        /// Device hotplug and device state.
        const DEVICE = 1 << 2;
        /// Window state.
        const WINDOW = 1 << 3;
        /// Display state.
        const DISPLAY = 1 << 4;
        /// Audio devices.
        const AUDIO = 1 << 5;
        /// Keyboard and text input.
        const KEYBOARD = 1 << 6;
        /// Mouse input.
        const MOUSE = 1 << 7;
        /// Game controllers.
        const CONTROLLER = 1 << 8;
        /// Raw joysticks.
        const JOYSTICK = 1 << 9;
        /// Button presses of any device.
        const BUTTON = 1 << 10;
        /// Axis motion of any device.
        const AXIS = 1 << 11;
        /// Touch surfaces.
        const TOUCH = 1 << 12;
        /// Joystick hats.
        const HAT = 1 << 13;
        /// Joystick trackballs.
        const BALL = 1 << 14;
        /// Motion sensors.
        const SENSOR = 1 << 15;
        /// Last bit reserved by the engine. Applications may define their own
        /// categories starting at `ENGINE_LAST << 1`.
        const ENGINE_LAST = 1 << 16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_orthogonal() {
        let all = [
            EventCategory::APPLICATION,
            EventCategory::INPUT,
            EventCategory::DEVICE,
            EventCategory::WINDOW,
            EventCategory::DISPLAY,
            EventCategory::AUDIO,
            EventCategory::KEYBOARD,
            EventCategory::MOUSE,
            EventCategory::CONTROLLER,
            EventCategory::JOYSTICK,
            EventCategory::BUTTON,
            EventCategory::AXIS,
            EventCategory::TOUCH,
            EventCategory::HAT,
            EventCategory::BALL,
            EventCategory::SENSOR,
        ];
        let mut seen = EventCategory::EMPTY;
        for category in all {
            assert_eq!(category.bits().count_ones(), 1);
            assert!(!seen.intersects(category));
            seen |= category;
        }
        assert!(EventCategory::ENGINE_LAST.bits() > seen.bits());
    }

    #[test]
    fn application_defined_bits_survive() {
        let custom = EventCategory::from_bits_retain(EventCategory::ENGINE_LAST.bits() << 1);
        let mask = EventCategory::INPUT | custom;
        assert!(mask.contains(custom));
        assert_eq!(format!("{mask:?}"), "EventCategory { INPUT | UNKNOWN(0x20000) }");
    }
}
