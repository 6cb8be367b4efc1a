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

//! Platform-specific implementations, backed by `winit`.

pub mod host;
pub mod input;
pub mod window;

pub use host::WinitHost;
pub use window::{WinitWindow, WinitWindowBuilder};

use winit::window::WindowId;

/// Folds a `winit` window id into the 32-bit id carried by engine events.
pub fn engine_window_id(id: WindowId) -> u32 {
    let raw = u64::from(id);
    (raw ^ (raw >> 32)) as u32
}
