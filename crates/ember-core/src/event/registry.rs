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

//! Process-wide listener identifiers and the subscriber counts that decide
//! which host event classes are enabled.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::handlers::{EventHandler, HandlerHandle};
use super::{Event, EventHub, EventKind};
use crate::platform::{HostEventKind, HostEventSource};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one registered listener for the lifetime of the process.
/// Identifiers are strictly increasing and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// The reserved "no listener" value.
    pub const NONE: ListenerId = ListenerId(0);

    fn next() -> Self {
        ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identifier.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which delivery path a listener is registered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerFlavor {
    /// The synchronous dispatcher.
    Sync,
    /// The asynchronous queue.
    Async,
}

/// Where a listener lives, sufficient to remove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerEntry {
    /// The owning path.
    pub flavor: ListenerFlavor,
    /// The kind the listener is registered for.
    pub kind: EventKind,
    /// The handle inside the owning path's handler list.
    pub handle: HandlerHandle,
}

#[derive(Default)]
struct RegistryState {
    entries: BTreeMap<ListenerId, ListenerEntry>,
    subscribers: HashMap<HostEventKind, u32>,
}

/// Tracks every listener registered through it and keeps the host layer's
/// enabled event classes in step with them: a host class is enabled exactly
/// while at least one listener needs it.
pub struct ListenerRegistry {
    hub: Rc<EventHub>,
    host: Rc<dyn HostEventSource>,
    state: RefCell<RegistryState>,
}

impl ListenerRegistry {
    /// Creates an empty registry over `hub` that drives `host`.
    pub fn new(hub: Rc<EventHub>, host: Rc<dyn HostEventSource>) -> Self {
        Self {
            hub,
            host,
            state: RefCell::new(RegistryState::default()),
        }
    }

    /// The hub whose paths listeners are registered on.
    pub fn hub(&self) -> &Rc<EventHub> {
        &self.hub
    }

    /// The host layer whose event classes this registry drives.
    pub fn host(&self) -> &Rc<dyn HostEventSource> {
        &self.host
    }

    /// Registers a synchronous listener for `kind`. The first listener of a
    /// kind enables its host event class.
    ///
    /// ## Arguments
    /// * `kind` - The event kind the handler listens to.
    /// * `handler` - Invoked during dispatch, before the dispatch call returns.
    ///
    /// ## Returns
    /// The id under which the listener can later be removed.
    pub fn add_sync<F>(&self, kind: EventKind, handler: F) -> ListenerId
    where
        F: Fn(&Event) -> anyhow::Result<()> + 'static,
    {
        self.add(ListenerFlavor::Sync, kind, Rc::new(handler))
    }

    /// Registers an asynchronous listener for `kind`.
    pub fn add_async<F>(&self, kind: EventKind, handler: F) -> ListenerId
    where
        F: Fn(&Event) -> anyhow::Result<()> + 'static,
    {
        self.add(ListenerFlavor::Async, kind, Rc::new(handler))
    }

    fn add(&self, flavor: ListenerFlavor, kind: EventKind, handler: EventHandler) -> ListenerId {
        let handle = match flavor {
            ListenerFlavor::Sync => self.hub.sync().append_shared(kind, handler),
            ListenerFlavor::Async => self.hub.queue().append_shared(kind, handler),
        };
        let id = ListenerId::next();
        self.state.borrow_mut().entries.insert(
            id,
            ListenerEntry {
                flavor,
                kind,
                handle,
            },
        );
        log::trace!("Listener {id} added ({flavor:?}, {kind}).");

        if let Some(host_kind) = kind.host_kind() {
            self.subscribe(host_kind);
        }
        id
    }

    /// Removes a listener. An unknown id is reported with a warning and
    /// leaves every piece of state untouched.
    ///
    /// ## Arguments
    /// * `id` - The id returned when the listener was added.
    ///
    /// ## Returns
    /// `true` if a listener was removed.
    pub fn remove(&self, id: ListenerId) -> bool {
        let Some(entry) = self.state.borrow_mut().entries.remove(&id) else {
            log::warn!("Attempted to remove unknown listener {id}.");
            return false;
        };

        let removed = match entry.flavor {
            ListenerFlavor::Sync => self.hub.sync().remove_handler(entry.kind, entry.handle),
            ListenerFlavor::Async => self.hub.queue().remove_handler(entry.kind, entry.handle),
        };
        if !removed {
            log::error!(
                "Listener {id} was registered but its {:?} handler for {} was already gone.",
                entry.flavor,
                entry.kind
            );
        }
        log::trace!("Listener {id} removed ({:?}, {}).", entry.flavor, entry.kind);

        if let Some(host_kind) = entry.kind.host_kind() {
            self.unsubscribe(host_kind);
        }
        true
    }

    /// Removes every synchronous listener.
    pub fn remove_all_sync(&self) {
        self.remove_matching(|entry| entry.flavor == ListenerFlavor::Sync);
    }

    /// Removes every asynchronous listener.
    pub fn remove_all_async(&self) {
        self.remove_matching(|entry| entry.flavor == ListenerFlavor::Async);
    }

    /// Removes every listener.
    pub fn remove_all(&self) {
        self.remove_matching(|_| true);
    }

    fn remove_matching(&self, predicate: impl Fn(&ListenerEntry) -> bool) {
        let ids: Vec<ListenerId> = self
            .state
            .borrow()
            .entries
            .iter()
            .filter(|(_, entry)| predicate(entry))
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            self.remove(id);
        }
    }

    /// The location of a registered listener.
    pub fn entry(&self, id: ListenerId) -> Option<ListenerEntry> {
        self.state.borrow().entries.get(&id).copied()
    }

    /// The number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// The number of listeners that currently need `kind` enabled.
    pub fn subscriber_count(&self, kind: HostEventKind) -> u32 {
        self.state
            .borrow()
            .subscribers
            .get(&kind)
            .copied()
            .unwrap_or(0)
    }

    fn subscribe(&self, kind: HostEventKind) {
        let count = {
            let mut state = self.state.borrow_mut();
            let count = state.subscribers.entry(kind).or_insert(0);
            *count += 1;
            *count
        };
        if count == 1 {
            log::debug!("Enabling host event class {kind:?}.");
            self.host.set_event_enabled(kind, true);
        }
    }

    fn unsubscribe(&self, kind: HostEventKind) {
        let remaining = {
            let mut state = self.state.borrow_mut();
            match state.subscribers.get_mut(&kind) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    let remaining = *count;
                    if remaining == 0 {
                        state.subscribers.remove(&kind);
                    }
                    Some(remaining)
                }
                _ => None,
            }
        };
        match remaining {
            Some(0) => {
                log::debug!("Disabling host event class {kind:?}.");
                self.host.set_event_enabled(kind, false);
            }
            Some(_) => {}
            None => log::error!("Subscriber count for host event class {kind:?} is already zero."),
        }
    }
}
