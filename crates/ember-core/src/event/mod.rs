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

//! The engine's event model and its delivery machinery.
//!
//! Events flow either from the host layer through the [`HostEventBridge`] or
//! from engine and application code, into the [`EventHub`]. The hub hands each
//! event to the [`SyncDispatcher`] immediately and to the [`AsyncQueue`] for
//! delivery when the queue is drained. [`EventSystem`] bundles all of it for
//! application code.

mod bridge;
mod category;
mod dispatcher;
mod error;
#[allow(clippy::module_inception)]
mod event;
mod handlers;
mod hub;
mod kind;
pub mod payload;
mod queue;
mod registry;
mod system;

pub use bridge::{translate, HostEventBridge, MULTI_CLICK_THRESHOLD};
pub use category::EventCategory;
pub use dispatcher::SyncDispatcher;
pub use error::{EventError, TranslateError};
pub use event::{Event, EventPayload, SharedEvent};
pub use handlers::{EventHandler, HandlerHandle};
pub use hub::EventHub;
pub use kind::EventKind;
pub use payload::{
    AudioDeviceType, DisplayOrientation, FingerData, HatPosition, JoystickPowerLevel,
    KeyModifiers, KeySym, MouseButton, MouseButtonState, MouseData, TouchpadData,
};
pub use queue::{AsyncQueue, AsyncSender};
pub use registry::{ListenerEntry, ListenerFlavor, ListenerId, ListenerRegistry};
pub use system::{EventSystem, WeakEventSystem};
