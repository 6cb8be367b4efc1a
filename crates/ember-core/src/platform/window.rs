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

/// A trait that abstracts the behavior of a window.
///
/// Any windowing backend can implement this trait to be driven by the
/// engine.
pub trait EmberWindow {
    /// Returns the physical dimensions (width, height) of the window's inner area.
    fn inner_size(&self) -> (u32, u32);

    /// Requests that the window be redrawn.
    fn request_redraw(&self);

    /// Returns the identifier carried in the `window_id` field of events
    /// that concern this window.
    fn id(&self) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct HeadlessWindow {
        redraws: Cell<u32>,
    }

    impl EmberWindow for HeadlessWindow {
        fn inner_size(&self) -> (u32, u32) {
            (320, 200)
        }

        fn request_redraw(&self) {
            self.redraws.set(self.redraws.get() + 1);
        }

        fn id(&self) -> u32 {
            3
        }
    }

    #[test]
    fn windows_without_native_handles_can_be_driven() {
        let headless = HeadlessWindow {
            redraws: Cell::new(0),
        };
        let window: &dyn EmberWindow = &headless;

        window.request_redraw();
        window.request_redraw();

        assert_eq!(window.inner_size(), (320, 200));
        assert_eq!(window.id(), 3);
        assert_eq!(headless.redraws.get(), 2);
    }
}
