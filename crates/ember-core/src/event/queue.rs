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

//! The asynchronous path: events are stored now and delivered later, from
//! the thread that owns the queue, when the application drains it.

use std::cell::RefCell;
use std::panic::Location;
use std::rc::Rc;

use super::handlers::{EventHandler, HandlerHandle, HandlerTable};
use super::{Event, EventError, EventKind, SharedEvent};

/// A FIFO of shared events plus the handlers that consume them.
///
/// The FIFO is an unbounded `flume` channel. The queue keeps both ends, so
/// enqueueing from the owning thread never fails; [`AsyncQueue::sender`] hands
/// out producer handles for other threads.
///
/// Handlers are looked up when an event is delivered, not when it is
/// enqueued: a handler added before the drain sees events that were already
/// pending, and a handler removed before the drain does not.
pub struct AsyncQueue {
    handlers: RefCell<HandlerTable>,
    sender: flume::Sender<SharedEvent>,
    receiver: flume::Receiver<SharedEvent>,
}

impl AsyncQueue {
    /// Creates an empty queue with no handlers, backed by an unbounded channel.
    ///
    /// ## Returns
    /// A new, empty `AsyncQueue`.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::debug!("Async event queue initialized.");
        Self {
            handlers: RefCell::new(HandlerTable::default()),
            sender,
            receiver,
        }
    }

    /// Appends `handler` at the tail of the list for `kind`.
    pub fn append_handler<F>(&self, kind: EventKind, handler: F) -> HandlerHandle
    where
        F: Fn(&Event) -> anyhow::Result<()> + 'static,
    {
        self.append_shared(kind, Rc::new(handler))
    }

    pub(crate) fn append_shared(&self, kind: EventKind, handler: EventHandler) -> HandlerHandle {
        self.handlers.borrow_mut().append(kind, handler)
    }

    /// Removes a handler. Returns `false` if it was not registered for `kind`.
    pub fn remove_handler(&self, kind: EventKind, handle: HandlerHandle) -> bool {
        self.handlers.borrow_mut().remove(kind, handle)
    }

    /// Removes every handler. Pending events are kept.
    pub fn clear_handlers(&self) {
        self.handlers.borrow_mut().clear();
    }

    /// The number of handlers registered for `kind`.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.borrow().len(kind)
    }

    /// Stores an event at the tail of the FIFO.
    pub fn enqueue(&self, event: SharedEvent) {
        log::trace!("Enqueueing {}.", event.kind());
        // Cannot fail: `self.receiver` keeps the channel connected.
        let _ = self.sender.send(event);
    }

    /// Returns a producer handle that can enqueue from any thread.
    /// Delivery still happens on the thread that drains the queue.
    ///
    /// ## Returns
    /// A cloneable `AsyncSender` feeding this queue.
    pub fn sender(&self) -> AsyncSender {
        AsyncSender {
            inner: self.sender.clone(),
        }
    }

    /// The number of pending events.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Returns `true` if no event is pending.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Drops every pending event without invoking handlers. Returns how many
    /// events were discarded.
    pub fn clear(&self) -> usize {
        let dropped = self.receiver.drain().count();
        if dropped > 0 {
            log::debug!("Discarded {dropped} pending event(s).");
        }
        dropped
    }

    /// Delivers the oldest pending event, if any, and reports whether the
    /// queue is empty afterwards. On an empty queue this does nothing and
    /// returns `Ok(true)`.
    ///
    /// If a handler fails, the event is consumed, its remaining handlers are
    /// skipped and the rest of the FIFO is left for the next drain.
    pub fn process_one(&self) -> Result<bool, EventError> {
        if let Ok(event) = self.receiver.try_recv() {
            self.deliver(&event)?;
        }
        Ok(self.receiver.is_empty())
    }

    /// Delivers every event that was pending when the call started, in FIFO
    /// order. Events enqueued while draining wait for the next drain.
    ///
    /// A handler failure aborts the drain; undelivered events stay queued.
    pub fn process_all(&self) -> Result<(), EventError> {
        let pending = self.receiver.len();
        if pending > 0 {
            log::trace!("Draining {pending} pending event(s).");
        }
        for _ in 0..pending {
            match self.receiver.try_recv() {
                Ok(event) => self.deliver(&event)?,
                Err(_) => break,
            }
        }
        Ok(())
    }

    fn deliver(&self, event: &Event) -> Result<(), EventError> {
        let kind = event.kind();
        let handlers = self.handlers.borrow().snapshot(kind);
        for handler in handlers {
            handler(event).map_err(|source| EventError::Handler { kind, source })?;
        }
        Ok(())
    }
}

impl Default for AsyncQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable handle that enqueues events onto an [`AsyncQueue`] from any
/// thread. Delivery still happens on the queue's owning thread.
#[derive(Debug, Clone)]
pub struct AsyncSender {
    inner: flume::Sender<SharedEvent>,
}

impl AsyncSender {
    /// Enqueues an event. If the queue has been dropped the event is
    /// discarded and the caller's location is logged.
    #[track_caller]
    pub fn send(&self, event: impl Into<SharedEvent>) {
        let event = event.into();
        let kind = event.kind();
        if let Err(e) = self.inner.send(event) {
            let caller = Location::caller();
            log::error!(
                "Failed to enqueue {kind} at {}:{}: {e}. Queue likely dropped.",
                caller.file(),
                caller.line()
            );
        }
    }

    /// Returns `true` if the owning queue has been dropped.
    pub fn is_disconnected(&self) -> bool {
        self.inner.is_disconnected()
    }
}
