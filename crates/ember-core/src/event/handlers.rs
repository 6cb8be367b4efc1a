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

//! Per-kind ordered handler lists shared by the synchronous dispatcher and
//! the asynchronous queue.

use std::collections::HashMap;
use std::rc::Rc;

use super::{Event, EventKind};

/// A registered event handler. Returning `Err` stops delivery of the current
/// event and surfaces the error to the caller of the dispatch or drain.
pub type EventHandler = Rc<dyn Fn(&Event) -> anyhow::Result<()>>;

/// Identifies one handler inside one handler table. Valid until removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerHandle(u64);

impl HandlerHandle {
    /// The raw token value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Handlers grouped by kind, each list kept in registration order.
#[derive(Default)]
pub(crate) struct HandlerTable {
    next_token: u64,
    lists: HashMap<EventKind, Vec<(HandlerHandle, EventHandler)>>,
}

impl HandlerTable {
    pub(crate) fn append(&mut self, kind: EventKind, handler: EventHandler) -> HandlerHandle {
        self.next_token += 1;
        let handle = HandlerHandle(self.next_token);
        self.lists.entry(kind).or_default().push((handle, handler));
        handle
    }

    pub(crate) fn remove(&mut self, kind: EventKind, handle: HandlerHandle) -> bool {
        let Some(list) = self.lists.get_mut(&kind) else {
            return false;
        };
        let Some(position) = list.iter().position(|(h, _)| *h == handle) else {
            return false;
        };
        list.remove(position);
        if list.is_empty() {
            self.lists.remove(&kind);
        }
        true
    }

    /// Clones the handler list of `kind` so it can be iterated while the
    /// table itself is mutated by the handlers.
    pub(crate) fn snapshot(&self, kind: EventKind) -> Vec<EventHandler> {
        self.lists
            .get(&kind)
            .map(|list| list.iter().map(|(_, handler)| Rc::clone(handler)).collect())
            .unwrap_or_default()
    }

    pub(crate) fn len(&self, kind: EventKind) -> usize {
        self.lists.get(&kind).map_or(0, Vec::len)
    }

    pub(crate) fn total(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.lists.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> EventHandler {
        Rc::new(|_: &Event| -> anyhow::Result<()> { Ok(()) })
    }

    #[test]
    fn handles_are_unique_across_kinds() {
        let mut table = HandlerTable::default();
        let a = table.append(EventKind::KeyDown, noop());
        let b = table.append(EventKind::KeyUp, noop());
        let c = table.append(EventKind::KeyDown, noop());
        assert!(a < b && b < c);
        assert_eq!(table.len(EventKind::KeyDown), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn remove_requires_matching_kind() {
        let mut table = HandlerTable::default();
        let handle = table.append(EventKind::KeyDown, noop());
        assert!(!table.remove(EventKind::KeyUp, handle));
        assert!(table.remove(EventKind::KeyDown, handle));
        assert!(!table.remove(EventKind::KeyDown, handle));
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn snapshot_of_unknown_kind_is_empty() {
        let table = HandlerTable::default();
        assert!(table.snapshot(EventKind::Quit).is_empty());
    }
}
