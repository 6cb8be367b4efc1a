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

//! The `winit`-backed host layer.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::time::Instant;

use ember_core::event::EventError;
use ember_core::platform::{
    EventWatch, HostEventKind, HostEventSource, NativeEvent, NativePayload,
};
use winit::event::WindowEvent;

use super::input::InputState;

/// A host layer fed by a `winit` event loop.
///
/// The owner of the event loop forwards window events and lifecycle
/// callbacks; the host turns them into native events, drops the ones whose
/// class is disabled and hands the rest to the installed watch. Every class
/// starts enabled.
pub struct WinitHost {
    disabled: RefCell<HashSet<HostEventKind>>,
    watch: RefCell<Option<EventWatch>>,
    input: RefCell<InputState>,
    suspended: Cell<bool>,
}

impl WinitHost {
    /// Creates a host with every event class enabled and no watch.
    pub fn new() -> Self {
        Self {
            disabled: RefCell::new(HashSet::new()),
            watch: RefCell::new(None),
            input: RefCell::new(InputState::new()),
            suspended: Cell::new(false),
        }
    }

    /// Delivers one native event to the watch if its class is enabled.
    /// Events of unknown type always reach the watch.
    pub fn push(&self, native: NativeEvent) -> Result<(), EventError> {
        if let Some(kind) = native.kind() {
            if self.disabled.borrow().contains(&kind) {
                log::trace!("Host event {kind:?} ignored.");
                return Ok(());
            }
        }
        let watch = self.watch.borrow().clone();
        match watch {
            Some(watch) => watch(&native),
            None => Ok(()),
        }
    }

    fn push_all(&self, events: Vec<NativeEvent>) -> Result<(), EventError> {
        for native in events {
            self.push(native)?;
        }
        Ok(())
    }

    fn push_lifecycle(&self, kinds: &[HostEventKind]) -> Result<(), EventError> {
        let timestamp = self.input.borrow().timestamp(Instant::now());
        for kind in kinds {
            self.push(NativeEvent::new(*kind, timestamp, NativePayload::Empty))?;
        }
        Ok(())
    }

    /// Translates and delivers a `winit` window event for the window with
    /// engine id `window_id`.
    pub fn handle_window_event(
        &self,
        window_id: u32,
        event: &WindowEvent,
    ) -> Result<(), EventError> {
        let events = self
            .input
            .borrow_mut()
            .translate(window_id, event, Instant::now());
        self.push_all(events)
    }

    /// Closes the pending drop sessions. Call once per event loop iteration,
    /// after the window events have been forwarded.
    pub fn finish_batch(&self) -> Result<(), EventError> {
        let events = self.input.borrow_mut().finish_batch(Instant::now());
        self.push_all(events)
    }

    /// The application is moving to the background.
    pub fn suspended(&self) -> Result<(), EventError> {
        self.suspended.set(true);
        self.push_lifecycle(&[
            HostEventKind::AppWillEnterBackground,
            HostEventKind::AppDidEnterBackground,
        ])
    }

    /// The application is back in the foreground. The first resume of a
    /// run is the application start and reports nothing.
    pub fn resumed(&self) -> Result<(), EventError> {
        if !self.suspended.replace(false) {
            return Ok(());
        }
        self.push_lifecycle(&[
            HostEventKind::AppWillEnterForeground,
            HostEventKind::AppDidEnterForeground,
        ])
    }

    /// The OS reported memory pressure.
    pub fn memory_warning(&self) -> Result<(), EventError> {
        self.push_lifecycle(&[HostEventKind::AppLowMemory])
    }

    /// The event loop is exiting.
    pub fn exiting(&self) -> Result<(), EventError> {
        self.push_lifecycle(&[HostEventKind::AppTerminating])
    }

    /// The user asked the application to quit.
    pub fn quit_requested(&self) -> Result<(), EventError> {
        self.push_lifecycle(&[HostEventKind::Quit])
    }
}

impl Default for WinitHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostEventSource for WinitHost {
    fn set_event_enabled(&self, kind: HostEventKind, enabled: bool) {
        let mut disabled = self.disabled.borrow_mut();
        if enabled {
            disabled.remove(&kind);
        } else {
            disabled.insert(kind);
        }
    }

    fn is_event_enabled(&self, kind: HostEventKind) -> bool {
        !self.disabled.borrow().contains(&kind)
    }

    fn set_event_watch(&self, watch: EventWatch) {
        *self.watch.borrow_mut() = Some(watch);
    }
}
