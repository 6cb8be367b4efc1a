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

//! Error types of the event subsystem.

use std::fmt;

use super::EventKind;
use crate::platform::HostEventKind;

/// An error surfaced by a dispatch or drain operation.
#[derive(Debug)]
pub enum EventError {
    /// A handler returned an error. Handlers after it were not invoked.
    Handler {
        /// The kind of the event being delivered.
        kind: EventKind,
        /// The error returned by the handler.
        source: anyhow::Error,
    },
}

impl EventError {
    /// The kind of the event whose delivery failed.
    pub fn kind(&self) -> EventKind {
        match self {
            EventError::Handler { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventError::Handler { kind, source } => {
                write!(f, "Handler for '{kind}' failed: {source}")
            }
        }
    }
}

impl std::error::Error for EventError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EventError::Handler { source, .. } => Some(source.as_ref()),
        }
    }
}

/// Why a native host event could not be turned into an engine event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The native event type is not a known host kind.
    UnknownKind(u32),
    /// The host kind is known but deliberately not translated.
    Unsupported(HostEventKind),
    /// A sub-discriminator (window event id, hat value, ...) is out of range.
    InvalidSubKind {
        /// The host kind being translated.
        kind: HostEventKind,
        /// The offending raw value.
        value: i64,
    },
    /// The payload does not match the host kind.
    PayloadMismatch(HostEventKind),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::UnknownKind(raw) => write!(f, "Unknown host event type {raw:#x}"),
            TranslateError::Unsupported(kind) => {
                write!(f, "Host event type {kind:?} is not supported")
            }
            TranslateError::InvalidSubKind { kind, value } => {
                write!(f, "Invalid sub-kind {value} for host event type {kind:?}")
            }
            TranslateError::PayloadMismatch(kind) => {
                write!(f, "Payload does not match host event type {kind:?}")
            }
        }
    }
}

impl std::error::Error for TranslateError {}
