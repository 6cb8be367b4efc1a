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

//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::Once;

use ember_core::event::EventError;
use ember_core::platform::{EventWatch, HostEventKind, HostEventSource, NativeEvent};

/// A host layer that records every enable/disable call and forwards
/// emitted native events to the installed watch when their class is enabled.
#[derive(Default)]
pub struct RecordingHost {
    enabled: RefCell<HashSet<HostEventKind>>,
    calls: RefCell<Vec<(HostEventKind, bool)>>,
    watch: RefCell<Option<EventWatch>>,
}

impl RecordingHost {
    /// Enable/disable calls made since the last [`RecordingHost::forget_calls`].
    pub fn calls(&self) -> Vec<(HostEventKind, bool)> {
        self.calls.borrow().clone()
    }

    pub fn calls_for(&self, kind: HostEventKind) -> Vec<bool> {
        self.calls
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, enabled)| *enabled)
            .collect()
    }

    pub fn forget_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Pumps one native event. Ignored classes never reach the watch.
    pub fn emit(&self, native: NativeEvent) -> Result<(), EventError> {
        if let Some(kind) = native.kind() {
            if !self.enabled.borrow().contains(&kind) {
                return Ok(());
            }
        }
        let watch = self.watch.borrow().clone();
        match watch {
            Some(watch) => watch(&native),
            None => Ok(()),
        }
    }
}

impl HostEventSource for RecordingHost {
    fn set_event_enabled(&self, kind: HostEventKind, enabled: bool) {
        self.calls.borrow_mut().push((kind, enabled));
        if enabled {
            self.enabled.borrow_mut().insert(kind);
        } else {
            self.enabled.borrow_mut().remove(&kind);
        }
    }

    fn is_event_enabled(&self, kind: HostEventKind) -> bool {
        self.enabled.borrow().contains(&kind)
    }

    fn set_event_watch(&self, watch: EventWatch) {
        *self.watch.borrow_mut() = Some(watch);
    }
}

thread_local! {
    static CAPTURED: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        CAPTURED.with(|captured| {
            captured
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Installs the capturing logger once per test binary and clears the
/// current thread's captured records.
pub fn capture_logs() {
    INSTALL.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    CAPTURED.with(|captured| captured.borrow_mut().clear());
}

/// Records captured on the current thread at exactly `level`.
pub fn captured(level: log::Level) -> Vec<String> {
    CAPTURED.with(|captured| {
        captured
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}
