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

//! The generic dispatch entry shared by the engine and application code.

use super::{AsyncQueue, Event, EventError, SharedEvent, SyncDispatcher};

/// Owns both delivery paths and sends events through them.
#[derive(Default)]
pub struct EventHub {
    sync: SyncDispatcher,
    queue: AsyncQueue,
}

impl EventHub {
    /// Creates a hub with empty handler lists and an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// The synchronous dispatcher.
    pub fn sync(&self) -> &SyncDispatcher {
        &self.sync
    }

    /// The asynchronous queue.
    pub fn queue(&self) -> &AsyncQueue {
        &self.queue
    }

    /// Delivers the event to the synchronous handlers, then enqueues it for
    /// the asynchronous ones.
    ///
    /// A synchronous failure is returned and the event is not enqueued.
    pub fn dispatch(&self, event: SharedEvent) -> Result<(), EventError> {
        self.sync.dispatch(&event)?;
        self.queue.enqueue(event);
        Ok(())
    }

    /// Delivers the event to the synchronous handlers only.
    pub fn dispatch_sync(&self, event: &Event) -> Result<(), EventError> {
        self.sync.dispatch(event)
    }

    /// Enqueues the event for the asynchronous handlers only.
    pub fn dispatch_async(&self, event: SharedEvent) {
        self.queue.enqueue(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventKind, EventPayload};
    use std::cell::Cell;
    use std::rc::Rc;

    fn rendered() -> SharedEvent {
        Event::new(EventPayload::AppRendered).into_shared()
    }

    #[test]
    fn dispatch_feeds_both_paths() {
        let hub = EventHub::new();
        let sync_hits = Rc::new(Cell::new(0));
        let async_hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&sync_hits);
        hub.sync().append_handler(EventKind::AppRendered, move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });
        let counter = Rc::clone(&async_hits);
        hub.queue().append_handler(EventKind::AppRendered, move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });

        hub.dispatch(rendered()).expect("dispatch should succeed");
        assert_eq!((sync_hits.get(), async_hits.get()), (1, 0));
        assert_eq!(hub.queue().len(), 1);

        hub.queue().process_all().expect("drain should succeed");
        assert_eq!((sync_hits.get(), async_hits.get()), (1, 1));
    }

    #[test]
    fn sync_failure_prevents_enqueue() {
        let hub = EventHub::new();
        hub.sync()
            .append_handler(EventKind::AppRendered, |_| anyhow::bail!("veto"));

        assert!(hub.dispatch(rendered()).is_err());
        assert!(hub.queue().is_empty());
    }

    #[test]
    fn single_path_entries_stay_on_their_path() {
        let hub = EventHub::new();
        let sync_hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&sync_hits);
        hub.sync().append_handler(EventKind::AppRendered, move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });

        hub.dispatch_async(rendered());
        assert_eq!(sync_hits.get(), 0);
        assert_eq!(hub.queue().len(), 1);

        hub.dispatch_sync(&rendered()).expect("dispatch should succeed");
        assert_eq!(sync_hits.get(), 1);
        assert_eq!(hub.queue().len(), 1);
    }
}
