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

//! The public-facing SDK of the Ember engine.
//!
//! [`Engine::run`] opens a window, connects the host layer to the event
//! subsystem and drives an [`Application`] once per frame.

mod config;
mod frame;

pub use config::{EngineConfig, WindowConfig};

use std::rc::Rc;

use anyhow::Result;
use ember_core::event::{EventError, EventSystem};
use ember_core::platform::EmberWindow;
use ember_infra::logging::init_logger;
use ember_infra::platform::engine_window_id;
use ember_infra::{WinitHost, WinitWindow, WinitWindowBuilder};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::WindowId;

pub mod prelude {
    //! The types most applications need.
    pub use crate::{Application, Engine, EngineConfig, EngineContext, WindowConfig};
    pub use ember_core::event::{
        Event, EventCategory, EventKind, EventPayload, EventSystem, ListenerId, WeakEventSystem,
    };
    pub use ember_core::platform::EmberWindow;
}

/// What an application receives when it is created.
pub struct EngineContext<'a> {
    /// The engine's event subsystem. Clone it to keep it.
    pub events: &'a EventSystem,
    /// The main window.
    pub window: &'a dyn EmberWindow,
}

/// A game or tool driven by the engine.
pub trait Application: Sized + 'static {
    /// Called once, after the window exists, to create the initial state.
    fn new(context: EngineContext) -> Self;

    /// Called every frame for game logic updates.
    fn update(&mut self);

    /// Called every frame after [`Application::update`].
    fn render(&mut self) {}
}

/// The internal state of the running engine, managed by the winit event loop.
struct EngineState<A: Application> {
    config: EngineConfig,
    host: Rc<WinitHost>,
    events: EventSystem,
    window: Option<WinitWindow>,
    app: Option<A>,
}

impl<A: Application> EngineState<A> {
    fn new(config: EngineConfig) -> Self {
        let host = Rc::new(WinitHost::new());
        let events = EventSystem::new(host.clone());
        Self {
            config,
            host,
            events,
            window: None,
            app: None,
        }
    }
}

/// Handler failures surface at the host pump; the loop logs them and carries on.
fn report(what: &str, result: Result<(), EventError>) {
    if let Err(e) = result {
        log::error!("Event handler failed during {what}: {e}");
    }
}

impl<A: Application> Drop for EngineState<A> {
    fn drop(&mut self) {
        log::info!("EngineState is being dropped. Removing listeners...");
        self.events.init_sync();
        self.events.init_async();
    }
}

impl<A: Application> ApplicationHandler for EngineState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            report("resume", self.host.resumed());
            return;
        }

        log::info!("Application resumed. Creating window and application...");
        let window = match WinitWindowBuilder::new()
            .with_title(self.config.window.title.clone())
            .with_dimensions(self.config.window.width, self.config.window.height)
            .build(event_loop)
        {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to create the main window: {e}");
                event_loop.exit();
                return;
            }
        };

        let context = EngineContext {
            events: &self.events,
            window: &window,
        };
        self.app = Some(A::new(context));
        self.window = Some(window);
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        report("suspend", self.host.suspended());
    }

    fn memory_warning(&mut self, _event_loop: &ActiveEventLoop) {
        report("memory warning", self.host.memory_warning());
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        report("exit", self.host.exiting().and_then(|()| self.events.process_all()));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        if !window.is(id) {
            return;
        }

        match event {
            WindowEvent::RedrawRequested => {
                if let Some(app) = self.app.as_mut() {
                    report("frame", frame::run_frame(&self.events, &self.config, app));
                }
            }
            WindowEvent::CloseRequested => {
                let closed = self
                    .host
                    .handle_window_event(engine_window_id(id), &event)
                    .and_then(|()| self.host.quit_requested());
                report("close", closed);
                log::info!("Shutdown requested, exiting event loop...");
                event_loop.exit();
            }
            other => {
                report("input", self.host.handle_window_event(engine_window_id(id), &other));
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        report("drop completion", self.host.finish_batch());
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// The public entry point for the Ember engine.
pub struct Engine;

impl Engine {
    /// Runs `A` with the default configuration, blocking until the
    /// application exits.
    pub fn run<A: Application>() -> Result<()> {
        Self::run_with_config::<A>(EngineConfig::default())
    }

    /// Runs `A` with `config`, blocking until the application exits.
    pub fn run_with_config<A: Application>(config: EngineConfig) -> Result<()> {
        if init_logger(&config.log_filter).is_err() {
            log::debug!("A logger is already installed; keeping it.");
        }
        log::info!("Ember SDK: Starting...");

        let event_loop = EventLoop::new()?;
        let mut state = EngineState::<A>::new(config);
        event_loop.run_app(&mut state)?;
        Ok(())
    }
}
