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

//! A `winit`-based implementation of the `EmberWindow` trait.

use ember_core::platform::EmberWindow;
use std::sync::Arc;
use winit::{dpi::LogicalSize, error::OsError, event_loop::ActiveEventLoop, window::Window};

use crate::platform::engine_window_id;

/// A wrapper around a `winit::window::Window` that implements the `EmberWindow` trait.
///
/// Cloning is cheap; clones refer to the same native window.
#[derive(Debug, Clone)]
pub struct WinitWindow {
    inner: Arc<Window>,
}

impl WinitWindow {
    /// Returns `true` if `id` designates this window.
    pub fn is(&self, id: winit::window::WindowId) -> bool {
        self.inner.id() == id
    }
}

/// A builder for creating `WinitWindow` instances.
pub struct WinitWindowBuilder {
    title: String,
    width: u32,
    height: u32,
}

impl WinitWindowBuilder {
    /// Creates a new `WinitWindowBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            title: "Ember".to_string(),
            width: 1024,
            height: 768,
        }
    }

    /// Sets the title of the window to be built.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial inner dimensions of the window to be built.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builds the `WinitWindow` using the provided `winit` event loop.
    ///
    /// # Errors
    /// Returns an `OsError` if the underlying `winit` window creation fails.
    pub fn build(self, event_loop: &ActiveEventLoop) -> Result<WinitWindow, OsError> {
        log::info!(
            "Building window with title: '{}' and size: {}x{}",
            self.title,
            self.width,
            self.height
        );

        let window_attributes = Window::default_attributes()
            .with_title(self.title)
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_visible(true);

        let window = event_loop.create_window(window_attributes)?;

        log::info!(
            "Winit window created (engine id: {}).",
            engine_window_id(window.id())
        );
        Ok(WinitWindow {
            inner: Arc::new(window),
        })
    }
}

impl Default for WinitWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmberWindow for WinitWindow {
    fn inner_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        (size.width, size.height)
    }

    fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    fn id(&self) -> u32 {
        engine_window_id(self.inner.id())
    }
}
