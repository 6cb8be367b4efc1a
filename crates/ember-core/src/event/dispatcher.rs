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

//! The synchronous path: handlers run in the caller's context before
//! [`SyncDispatcher::dispatch`] returns.

use std::cell::RefCell;
use std::rc::Rc;

use super::handlers::{EventHandler, HandlerHandle, HandlerTable};
use super::{Event, EventError, EventKind};

/// Routes events to the handlers registered for their kind, immediately and
/// in registration order.
///
/// Delivery is fail-fast: the first handler returning `Err` stops the fan-out
/// and the error is returned to the dispatching code.
#[derive(Default)]
pub struct SyncDispatcher {
    handlers: RefCell<HandlerTable>,
}

impl SyncDispatcher {
    /// Creates a dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
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

    /// Removes every handler.
    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }

    /// The number of handlers registered for `kind`.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.borrow().len(kind)
    }

    /// Invokes every handler registered for the event's kind.
    ///
    /// The handler list is captured on entry: handlers added or removed by a
    /// handler take effect from the next dispatch. Handlers may dispatch
    /// further events; the nested fan-out completes before control returns
    /// to the outer one.
    pub fn dispatch(&self, event: &Event) -> Result<(), EventError> {
        let kind = event.kind();
        let handlers = self.handlers.borrow().snapshot(kind);
        log::trace!("Sync dispatch of {} to {} handler(s).", kind, handlers.len());

        for handler in handlers {
            handler(event).map_err(|source| EventError::Handler { kind, source })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventPayload;
    use std::cell::{Cell, RefCell};

    fn tick() -> Event {
        Event::new(EventPayload::AppTick)
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let dispatcher = SyncDispatcher::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        for label in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            dispatcher.append_handler(EventKind::AppTick, move |_| {
                calls.borrow_mut().push(label);
                Ok(())
            });
        }

        dispatcher.dispatch(&tick()).expect("dispatch should succeed");
        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn handlers_of_other_kinds_are_not_invoked() {
        let dispatcher = SyncDispatcher::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        dispatcher.append_handler(EventKind::AppRendered, move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });

        dispatcher.dispatch(&tick()).expect("dispatch should succeed");
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn failing_handler_stops_the_fan_out() {
        let dispatcher = SyncDispatcher::new();
        let reached = Rc::new(Cell::new(false));
        dispatcher.append_handler(EventKind::AppTick, |_| anyhow::bail!("refused"));
        let flag = Rc::clone(&reached);
        dispatcher.append_handler(EventKind::AppTick, move |_| {
            flag.set(true);
            Ok(())
        });

        let error = dispatcher.dispatch(&tick()).unwrap_err();
        assert_eq!(error.kind(), EventKind::AppTick);
        assert!(!reached.get());
    }

    #[test]
    fn removed_handler_no_longer_runs() {
        let dispatcher = SyncDispatcher::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let handle = dispatcher.append_handler(EventKind::AppTick, move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });

        dispatcher.dispatch(&tick()).expect("dispatch should succeed");
        assert!(dispatcher.remove_handler(EventKind::AppTick, handle));
        dispatcher.dispatch(&tick()).expect("dispatch should succeed");
        assert_eq!(hits.get(), 1);
        assert_eq!(dispatcher.handler_count(EventKind::AppTick), 0);
    }

    #[test]
    fn handler_added_during_dispatch_runs_from_next_event() {
        let dispatcher = Rc::new(SyncDispatcher::new());
        let late_hits = Rc::new(Cell::new(0));
        let registered = Rc::new(Cell::new(false));

        let weak = Rc::downgrade(&dispatcher);
        let counter = Rc::clone(&late_hits);
        let once = Rc::clone(&registered);
        dispatcher.append_handler(EventKind::AppTick, move |_| {
            if !once.replace(true) {
                let counter = Rc::clone(&counter);
                if let Some(dispatcher) = weak.upgrade() {
                    dispatcher.append_handler(EventKind::AppTick, move |_| {
                        counter.set(counter.get() + 1);
                        Ok(())
                    });
                }
            }
            Ok(())
        });

        dispatcher.dispatch(&tick()).expect("dispatch should succeed");
        assert_eq!(late_hits.get(), 0);
        dispatcher.dispatch(&tick()).expect("dispatch should succeed");
        assert_eq!(late_hits.get(), 1);
    }

    #[test]
    fn nested_dispatch_completes_before_outer_continues() {
        let dispatcher = Rc::new(SyncDispatcher::new());
        let order = Rc::new(RefCell::new(Vec::new()));

        let weak = Rc::downgrade(&dispatcher);
        let log = Rc::clone(&order);
        dispatcher.append_handler(EventKind::AppTick, move |_| {
            log.borrow_mut().push("tick:start");
            if let Some(dispatcher) = weak.upgrade() {
                dispatcher.dispatch(&Event::new(EventPayload::AppUpdated))?;
            }
            log.borrow_mut().push("tick:end");
            Ok(())
        });
        let log = Rc::clone(&order);
        dispatcher.append_handler(EventKind::AppUpdated, move |_| {
            log.borrow_mut().push("updated");
            Ok(())
        });

        dispatcher.dispatch(&tick()).expect("dispatch should succeed");
        assert_eq!(*order.borrow(), vec!["tick:start", "updated", "tick:end"]);
    }
}
