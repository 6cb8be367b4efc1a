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

//! Feeds native host events into the engine's dispatch paths.

mod translate;

pub use translate::{translate, MULTI_CLICK_THRESHOLD};

use std::rc::Rc;

use super::{EventError, EventHub, ListenerRegistry, TranslateError};
use crate::platform::{HostEventKind, HostEventSource, NativeEvent};

/// Watches the host layer and turns each native event into one engine event.
///
/// On installation every host event class is disabled; classes are enabled
/// again by the [`ListenerRegistry`] as listeners appear. The watch is
/// installed once and holds only a weak reference, so dropping the bridge
/// silences it.
pub struct HostEventBridge {
    hub: Rc<EventHub>,
    registry: ListenerRegistry,
}

impl HostEventBridge {
    /// Disables every host event class and installs the bridge's watch.
    pub fn install(hub: Rc<EventHub>, host: Rc<dyn HostEventSource>) -> Rc<Self> {
        for kind in HostEventKind::ALL {
            host.set_event_enabled(*kind, false);
        }

        let bridge = Rc::new(Self {
            hub: hub.clone(),
            registry: ListenerRegistry::new(hub, host.clone()),
        });

        let weak = Rc::downgrade(&bridge);
        host.set_event_watch(Rc::new(move |native: &NativeEvent| match weak.upgrade() {
            Some(bridge) => bridge.on_native_event(native),
            None => Ok(()),
        }));
        log::debug!("Host event bridge installed.");
        bridge
    }

    /// The registry that owns the listeners fed by this bridge.
    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    /// The hub events are dispatched to.
    pub fn hub(&self) -> &Rc<EventHub> {
        &self.hub
    }

    /// Translates and dispatches one native event. Events that cannot be
    /// translated are logged and dropped; handler failures are returned.
    pub fn on_native_event(&self, native: &NativeEvent) -> Result<(), EventError> {
        match translate(native) {
            Ok(event) => self.hub.dispatch(event.into_shared()),
            Err(TranslateError::Unsupported(kind)) => {
                log::debug!("Ignoring unsupported host event {kind:?}.");
                Ok(())
            }
            Err(error) => {
                log::error!("Dropping host event: {error}.");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;

    use crate::event::{Event, EventKind};
    use crate::platform::{EventWatch, NativePayload};

    #[derive(Default)]
    struct FakeHost {
        enabled: RefCell<HashSet<HostEventKind>>,
        disable_calls: Cell<usize>,
        watch: RefCell<Option<EventWatch>>,
    }

    impl FakeHost {
        fn emit(&self, native: NativeEvent) -> Result<(), EventError> {
            let enabled = match native.kind() {
                Some(kind) => self.enabled.borrow().contains(&kind),
                None => true,
            };
            let watch = self.watch.borrow().clone();
            match watch {
                Some(watch) if enabled => watch(&native),
                _ => Ok(()),
            }
        }
    }

    impl HostEventSource for FakeHost {
        fn set_event_enabled(&self, kind: HostEventKind, enabled: bool) {
            if enabled {
                self.enabled.borrow_mut().insert(kind);
            } else {
                self.disable_calls.set(self.disable_calls.get() + 1);
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

    fn install() -> (Rc<HostEventBridge>, Rc<FakeHost>) {
        let host = Rc::new(FakeHost::default());
        let bridge = HostEventBridge::install(Rc::new(EventHub::new()), host.clone());
        (bridge, host)
    }

    fn quit() -> NativeEvent {
        NativeEvent::new(HostEventKind::Quit, 0, NativePayload::Empty)
    }

    #[test]
    fn install_disables_every_host_kind() {
        let (_bridge, host) = install();
        assert_eq!(host.disable_calls.get(), HostEventKind::ALL.len());
        assert!(host.watch.borrow().is_some());
    }

    #[test]
    fn enabled_events_reach_both_paths() {
        let (bridge, host) = install();
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        bridge.registry().add_sync(EventKind::Quit, move |_: &Event| {
            counter.set(counter.get() + 1);
            Ok(())
        });

        host.emit(quit()).unwrap();
        assert_eq!(seen.get(), 1);
        assert_eq!(bridge.hub().queue().len(), 1);
    }

    #[test]
    fn disabled_events_never_arrive() {
        let (bridge, host) = install();
        host.emit(quit()).unwrap();
        assert!(bridge.hub().queue().is_empty());
    }

    #[test]
    fn untranslatable_events_are_dropped() {
        let (bridge, _host) = install();
        let unknown = NativeEvent {
            event_type: 0x4242,
            timestamp: 0,
            payload: NativePayload::Empty,
        };
        bridge.on_native_event(&unknown).unwrap();
        let unsupported = NativeEvent::new(HostEventKind::UserEvent, 0, NativePayload::Empty);
        bridge.on_native_event(&unsupported).unwrap();
        assert!(bridge.hub().queue().is_empty());
    }

    #[test]
    fn handler_failures_propagate_to_the_host() {
        let (bridge, host) = install();
        bridge
            .registry()
            .add_sync(EventKind::Quit, |_: &Event| Err(anyhow::anyhow!("refused")));
        let error = host.emit(quit()).unwrap_err();
        assert_eq!(error.kind(), EventKind::Quit);
        assert!(bridge.hub().queue().is_empty());
    }

    #[test]
    fn dropped_bridge_silences_the_watch() {
        let (bridge, host) = install();
        drop(bridge);
        let watch = host.watch.borrow().clone().expect("watch installed");
        assert!(watch(&quit()).is_ok());
    }
}
