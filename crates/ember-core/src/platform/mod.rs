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

//! Provides abstractions over the host multimedia layer.
//!
//! This module contains the contracts the engine expects from the layer that
//! owns windows and the native event pump: the native event model, the
//! per-kind enable switch and the watch callback through which native events
//! reach the engine, plus the window trait used by the application glue.

pub mod host;
pub mod window;

pub use host::{
    DisplayEventId, EventWatch, HostEventKind, HostEventSource, NativeEvent, NativePayload,
    WindowEventId,
};
pub use window::EmberWindow;
