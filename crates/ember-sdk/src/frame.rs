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

//! One iteration of the application loop.

use ember_core::event::{Event, EventError, EventPayload, EventSystem};

use crate::{Application, EngineConfig};

/// Runs one frame of `app`: tick, update, render, then the queue drain.
///
/// Frame events are dispatched on both paths, so their asynchronous
/// listeners run during the drain of the same frame.
pub(crate) fn run_frame<A: Application>(
    events: &EventSystem,
    config: &EngineConfig,
    app: &mut A,
) -> Result<(), EventError> {
    let emit = |payload: EventPayload| -> Result<(), EventError> {
        if config.emit_frame_events {
            events.dispatch(Event::new(payload))?;
        }
        Ok(())
    };

    emit(EventPayload::AppTick)?;
    app.update();
    emit(EventPayload::AppUpdated)?;
    app.render();
    emit(EventPayload::AppRendered)?;

    if config.drain_async_each_frame {
        events.process_all()?;
    }
    Ok(())
}
