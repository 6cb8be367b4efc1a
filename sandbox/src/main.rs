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

// Ember Sandbox
// Registers logging listeners on the event subsystem and runs an empty window.

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use ember_sdk::prelude::*;

const CONFIG_PATH: &str = "sandbox.json";
const LAYER: &str = "sandbox";

const REPORT_EVERY: u64 = 600;

struct SandboxApp {
    events: EventSystem,
    frames: Rc<Cell<u64>>,
    next_report: u64,
}

impl Application for SandboxApp {
    fn new(context: EngineContext) -> Self {
        let events = context.events.clone();
        let (width, height) = context.window.inner_size();
        log::info!(
            "SandboxApp: window {} is {width}x{height}.",
            context.window.id()
        );

        let mut listeners = Vec::new();
        let log_sync = |event: &Event| -> anyhow::Result<()> {
            log::info!("{event}");
            Ok(())
        };
        for kind in EventKind::ALL
            .iter()
            .filter(|kind| kind.is_in_category(EventCategory::WINDOW | EventCategory::INPUT))
            .filter(|kind| **kind != EventKind::MouseMotion)
        {
            listeners.push(events.add_sync(*kind, log_sync));
        }
        listeners.push(events.add_async(EventKind::Quit, |event: &Event| {
            log::info!("Quit requested at {} ms.", event.timestamp_ms());
            Ok(())
        }));

        let frames = Rc::new(Cell::new(0));
        let counter = frames.clone();
        listeners.push(events.add_async(EventKind::AppRendered, move |_: &Event| {
            counter.set(counter.get() + 1);
            Ok(())
        }));

        let weak = events.downgrade();
        listeners.push(events.add_sync(EventKind::KeyDown, move |event: &Event| {
            let Some(keysym) = event.payload().keysym() else {
                return Ok(());
            };
            if keysym.keycode == 0x1B {
                if let Some(events) = weak.upgrade() {
                    events.dispatch(Event::new(EventPayload::LayerPopped {
                        layer: LAYER.to_string(),
                    }))?;
                }
            }
            Ok(())
        }));
        listeners.push(events.add_sync(EventKind::LayerPopped, log_sync));
        listeners.push(events.add_sync(EventKind::LayerPushed, log_sync));

        if let Err(e) = events.dispatch(Event::new(EventPayload::LayerPushed {
            layer: LAYER.to_string(),
        })) {
            log::error!("Layer listeners failed: {e}");
        }

        log::info!("SandboxApp: {} listeners registered.", listeners.len());
        Self {
            events,
            frames,
            next_report: REPORT_EVERY,
        }
    }

    fn update(&mut self) {
        let frames = self.frames.get();
        if frames >= self.next_report {
            self.next_report = frames + REPORT_EVERY;
            log::info!(
                "SandboxApp: {frames} frames rendered, {} listeners active.",
                self.events.listener_count()
            );
        }
    }
}

fn main() -> Result<()> {
    let config = if Path::new(CONFIG_PATH).exists() {
        EngineConfig::load(CONFIG_PATH)?
    } else {
        EngineConfig {
            window: WindowConfig {
                title: "Ember Sandbox".to_string(),
                ..WindowConfig::default()
            },
            ..EngineConfig::default()
        }
    };
    Engine::run_with_config::<SandboxApp>(config)
}
