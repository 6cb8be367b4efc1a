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

//! The application-facing handle over the whole event subsystem.

use std::rc::{Rc, Weak};

use super::{
    AsyncSender, Event, EventError, EventHub, EventKind, HostEventBridge, ListenerId,
    ListenerRegistry, SharedEvent,
};
use crate::platform::{HostEventKind, HostEventSource};

/// A cloneable handle to the event subsystem: the hub, the host bridge and
/// the listener registry.
///
/// Handlers that need to reach the system from inside a callback should
/// capture a [`WeakEventSystem`]; capturing the handle itself creates a
/// reference cycle that keeps the subsystem alive forever.
#[derive(Clone)]
pub struct EventSystem {
    bridge: Rc<HostEventBridge>,
}

impl EventSystem {
    /// Creates the subsystem and attaches it to `host`. Every host event
    /// class starts disabled.
    ///
    /// ## Arguments
    /// * `host` - The host layer whose native events feed the subsystem.
    ///
    /// ## Returns
    /// A handle sharing the hub, bridge and registry just created.
    pub fn new(host: Rc<dyn HostEventSource>) -> Self {
        let hub = Rc::new(EventHub::new());
        Self {
            bridge: HostEventBridge::install(hub, host),
        }
    }

    /// A handle that does not keep the subsystem alive.
    pub fn downgrade(&self) -> WeakEventSystem {
        WeakEventSystem {
            bridge: Rc::downgrade(&self.bridge),
        }
    }

    /// The dispatch entry.
    pub fn hub(&self) -> &EventHub {
        self.bridge.hub()
    }

    /// The listener registry.
    pub fn registry(&self) -> &ListenerRegistry {
        self.bridge.registry()
    }

    /// The host bridge.
    pub fn bridge(&self) -> &HostEventBridge {
        &self.bridge
    }

    /// Registers a handler invoked during dispatch.
    pub fn add_sync<F>(&self, kind: EventKind, handler: F) -> ListenerId
    where
        F: Fn(&Event) -> anyhow::Result<()> + 'static,
    {
        self.registry().add_sync(kind, handler)
    }

    /// Registers a handler invoked when the queue is drained.
    pub fn add_async<F>(&self, kind: EventKind, handler: F) -> ListenerId
    where
        F: Fn(&Event) -> anyhow::Result<()> + 'static,
    {
        self.registry().add_async(kind, handler)
    }

    /// Removes a listener. Returns `false` for an unknown id.
    pub fn remove(&self, id: ListenerId) -> bool {
        self.registry().remove(id)
    }

    /// Removes every synchronous listener.
    pub fn remove_all_sync(&self) {
        self.registry().remove_all_sync();
    }

    /// Removes every asynchronous listener.
    pub fn remove_all_async(&self) {
        self.registry().remove_all_async();
    }

    /// Removes every listener.
    pub fn remove_all(&self) {
        self.registry().remove_all();
    }

    /// Resets the synchronous path to its initial state.
    pub fn init_sync(&self) {
        self.remove_all_sync();
        log::debug!("Synchronous event path initialized.");
    }

    /// Resets the asynchronous path to its initial state, discarding any
    /// pending events.
    pub fn init_async(&self) {
        self.remove_all_async();
        let discarded = self.clear();
        log::debug!("Asynchronous event path initialized ({discarded} pending events discarded).");
    }

    /// Sends the event through both paths. A synchronous failure is returned
    /// and the event is not enqueued.
    pub fn dispatch(&self, event: impl Into<SharedEvent>) -> Result<(), EventError> {
        self.hub().dispatch(event.into())
    }

    /// Sends the event to the synchronous handlers only.
    pub fn dispatch_sync(&self, event: &Event) -> Result<(), EventError> {
        self.hub().dispatch_sync(event)
    }

    /// Enqueues the event for the asynchronous handlers only.
    pub fn dispatch_async(&self, event: impl Into<SharedEvent>) {
        self.hub().dispatch_async(event.into());
    }

    /// Delivers the oldest pending event. See [`AsyncQueue::process_one`].
    ///
    /// [`AsyncQueue::process_one`]: super::AsyncQueue::process_one
    pub fn process_one(&self) -> Result<bool, EventError> {
        self.hub().queue().process_one()
    }

    /// Delivers the events pending at the time of the call.
    pub fn process_all(&self) -> Result<(), EventError> {
        self.hub().queue().process_all()
    }

    /// Discards every pending event and returns how many were dropped.
    pub fn clear(&self) -> usize {
        self.hub().queue().clear()
    }

    /// Returns `true` if no event is pending.
    pub fn is_queue_empty(&self) -> bool {
        self.hub().queue().is_empty()
    }

    /// The number of pending events.
    pub fn queue_len(&self) -> usize {
        self.hub().queue().len()
    }

    /// A handle that can enqueue events from other threads.
    pub fn sender(&self) -> AsyncSender {
        self.hub().queue().sender()
    }

    /// The number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry().listener_count()
    }

    /// The number of listeners that need the host class `kind` enabled.
    pub fn subscriber_count(&self, kind: HostEventKind) -> u32 {
        self.registry().subscriber_count(kind)
    }
}

/// A non-owning [`EventSystem`] handle.
#[derive(Clone, Default)]
pub struct WeakEventSystem {
    bridge: Weak<HostEventBridge>,
}

impl WeakEventSystem {
    /// Returns the system if it is still alive.
    pub fn upgrade(&self) -> Option<EventSystem> {
        self.bridge.upgrade().map(|bridge| EventSystem { bridge })
    }
}
