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

//! The closed set of event kinds and their static properties.
//!
//! Every kind is one row of the table below: its tag value, the name used when
//! rendering events, its category bits and the host kind that must be enabled
//! for the bridge to produce it. Kinds that only the engine emits have no host
//! kind.

use std::fmt;

use super::EventCategory;
use crate::platform::HostEventKind as Host;

macro_rules! event_kinds {
    (
        $(
            $(#[$doc:meta])*
            $variant:ident = $value:literal => $name:literal, [$($category:ident)|+], $host:expr;
        )*
    ) => {
        /// Identifies the concrete variant of an [`Event`](super::Event).
        #[repr(u16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub enum EventKind {
            /// No event. Never produced by the engine.
            #[default]
            None = 0,
            $(
                $(#[$doc])*
                $variant = $value,
            )*
        }

        impl EventKind {
            /// Every kind except [`EventKind::None`], in tag order.
            pub const ALL: &'static [EventKind] = &[$(EventKind::$variant,)*];

            /// The name used when rendering events of this kind.
            pub const fn name(self) -> &'static str {
                match self {
                    EventKind::None => "EventNone",
                    $(EventKind::$variant => $name,)*
                }
            }

            /// The category bits shared by all events of this kind.
            pub const fn category_mask(self) -> EventCategory {
                match self {
                    EventKind::None => EventCategory::EMPTY,
                    $(EventKind::$variant => EventCategory::EMPTY$(.with(EventCategory::$category))+,)*
                }
            }

            /// The host event kind that feeds this kind, if any.
            pub const fn host_kind(self) -> Option<Host> {
                match self {
                    EventKind::None => None,
                    $(EventKind::$variant => $host,)*
                }
            }

            /// Looks a kind up by its raw tag.
            pub fn from_raw(raw: u16) -> Option<Self> {
                match raw {
                    0 => Some(EventKind::None),
                    $($value => Some(EventKind::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

event_kinds! {
    /// The application was asked to quit.
    Quit = 0x100 => "EventQuit", [APPLICATION], Some(Host::Quit);
    /// The user's preferred locales changed.
    LocaleChanged = 0x101 => "EventLocaleChanged", [APPLICATION], Some(Host::LocaleChanged);
    /// The system clipboard changed.
    ClipboardUpdate = 0x102 => "EventClipboardUpdate", [APPLICATION], Some(Host::ClipboardUpdate);
    /// A file was dropped on a window.
    DropFile = 0x103 => "EventDropFile", [APPLICATION | INPUT], Some(Host::DropFile);
    /// Text was dropped on a window.
    DropText = 0x104 => "EventDropText", [APPLICATION | INPUT], Some(Host::DropText);
    /// A drag-and-drop session started.
    DropBegin = 0x105 => "EventDropBegin", [APPLICATION | INPUT], Some(Host::DropBegin);
    /// A drag-and-drop session finished.
    DropComplete = 0x106 => "EventDropComplete", [APPLICATION | INPUT], Some(Host::DropComplete);

    /// An audio device was plugged in.
    AudioDeviceAdded = 0x200 => "EventAudioDeviceAdded", [DEVICE | AUDIO], Some(Host::AudioDeviceAdded);
    /// An audio device was removed.
    AudioDeviceRemoved = 0x201 => "EventAudioDeviceRemoved", [DEVICE | AUDIO], Some(Host::AudioDeviceRemoved);

    /// The operating system is terminating the application.
    AppTerminating = 0x300 => "EventAppTerminating", [APPLICATION], Some(Host::AppTerminating);
    /// The operating system is low on memory.
    AppLowMemory = 0x301 => "EventAppLowMemory", [APPLICATION], Some(Host::AppLowMemory);
    /// The application is about to move to the background.
    AppEnteringBackground = 0x302 => "EventAppEnteringBackground", [APPLICATION], Some(Host::AppWillEnterBackground);
    /// The application moved to the background.
    AppEnteredBackground = 0x303 => "EventAppEnteredBackground", [APPLICATION], Some(Host::AppDidEnterBackground);
    /// The application is about to move to the foreground.
    AppEnteringForeground = 0x304 => "EventAppEnteringForeground", [APPLICATION], Some(Host::AppWillEnterForeground);
    /// The application moved to the foreground.
    AppEnteredForeground = 0x305 => "EventAppEnteredForeground", [APPLICATION], Some(Host::AppDidEnterForeground);
    /// A new frame starts.
    AppTick = 0x306 => "EventAppTick", [APPLICATION], None;
    /// The frame's update step finished.
    AppUpdated = 0x307 => "EventAppUpdated", [APPLICATION], None;
    /// The frame's render step finished.
    AppRendered = 0x308 => "EventAppRendered", [APPLICATION], None;

    /// A display changed orientation.
    DisplayOrientation = 0x400 => "EventDisplayOrientation", [DISPLAY], Some(Host::DisplayEvent);
    /// A display was connected.
    DisplayConnected = 0x401 => "EventDisplayConnected", [DISPLAY], Some(Host::DisplayEvent);
    /// A display was disconnected.
    DisplayDisconnected = 0x402 => "EventDisplayDisconnected", [DISPLAY], Some(Host::DisplayEvent);

    /// A window was shown.
    WindowShown = 0x500 => "EventWindowShown", [WINDOW], Some(Host::WindowEvent);
    /// A window was hidden.
    WindowHidden = 0x501 => "EventWindowHidden", [WINDOW], Some(Host::WindowEvent);
    /// A window was exposed and should be redrawn.
    WindowExposed = 0x502 => "EventWindowExposed", [WINDOW], Some(Host::WindowEvent);
    /// A window was moved.
    WindowMoved = 0x503 => "EventWindowMoved", [WINDOW], Some(Host::WindowEvent);
    /// A window was resized by the user or the window manager.
    WindowResized = 0x504 => "EventWindowResized", [WINDOW], Some(Host::WindowEvent);
    /// A window's size changed for any reason.
    WindowSizeChanged = 0x505 => "EventWindowSizeChanged", [WINDOW], Some(Host::WindowEvent);
    /// A window was minimized.
    WindowMinimized = 0x506 => "EventWindowMinimized", [WINDOW], Some(Host::WindowEvent);
    /// A window was maximized.
    WindowMaximized = 0x507 => "EventWindowMaximized", [WINDOW], Some(Host::WindowEvent);
    /// A window was restored to its normal size.
    WindowRestored = 0x508 => "EventWindowRestored", [WINDOW], Some(Host::WindowEvent);
    /// The mouse entered a window.
    WindowEnter = 0x509 => "EventWindowEnter", [WINDOW], Some(Host::WindowEvent);
    /// The mouse left a window.
    WindowLeave = 0x50A => "EventWindowLeave", [WINDOW], Some(Host::WindowEvent);
    /// A window gained keyboard focus.
    WindowFocusGained = 0x50B => "EventWindowFocusGained", [WINDOW], Some(Host::WindowEvent);
    /// A window lost keyboard focus.
    WindowFocusLost = 0x50C => "EventWindowFocusLost", [WINDOW], Some(Host::WindowEvent);
    /// A window is being offered focus.
    WindowTakeFocus = 0x50D => "EventWindowTakeFocus", [WINDOW], Some(Host::WindowEvent);
    /// A window had a hit test that was not a normal hit.
    WindowHitTest = 0x50E => "EventWindowHitTest", [WINDOW], Some(Host::WindowEvent);
    /// A window's ICC profile changed.
    WindowIccProfileChanged = 0x50F => "EventWindowIccProfileChanged", [WINDOW], Some(Host::WindowEvent);
    /// A window moved to another display.
    WindowDisplayChanged = 0x510 => "EventWindowDisplayChanged", [WINDOW], Some(Host::WindowEvent);
    /// A window was asked to close.
    WindowClosed = 0x511 => "EventWindowClosed", [WINDOW], Some(Host::WindowEvent);

    /// A layer was pushed onto the layer stack.
    LayerPushed = 0x600 => "EventLayerPushed", [APPLICATION], None;
    /// A layer was popped from the layer stack.
    LayerPopped = 0x601 => "EventLayerPopped", [APPLICATION], None;
    /// A layer finished its update step.
    LayerUpdated = 0x602 => "EventLayerUpdated", [APPLICATION], None;
    /// A layer was attached.
    LayerAttached = 0x603 => "EventLayerAttached", [APPLICATION], None;
    /// A layer was detached.
    LayerDetached = 0x604 => "EventLayerDetached", [APPLICATION], None;

    /// A key was pressed.
    KeyDown = 0x700 => "EventKeyboardDown", [INPUT | KEYBOARD | BUTTON], Some(Host::KeyDown);
    /// A key was released.
    KeyUp = 0x701 => "EventKeyboardUp", [INPUT | KEYBOARD | BUTTON], Some(Host::KeyUp);
    /// The input method's composition text changed.
    TextEditing = 0x702 => "EventTextEditing", [INPUT | KEYBOARD], Some(Host::TextEditing);
    /// Text was committed.
    TextInput = 0x703 => "EventTextInput", [INPUT | KEYBOARD], Some(Host::TextInput);
    /// The keyboard layout changed.
    KeyMapChanged = 0x704 => "EventKeyMapChanged", [INPUT | KEYBOARD], Some(Host::KeymapChanged);

    /// The mouse moved.
    MouseMotion = 0x800 => "EventMouseMotion", [INPUT | MOUSE], Some(Host::MouseMotion);
    /// A mouse button was pressed.
    MouseButtonDown = 0x801 => "EventMouseButtonDown", [INPUT | MOUSE | BUTTON], Some(Host::MouseButtonDown);
    /// A mouse button was released.
    MouseButtonUp = 0x802 => "EventMouseButtonUp", [INPUT | MOUSE | BUTTON], Some(Host::MouseButtonUp);
    /// A mouse button was released as part of a multi-click.
    MouseButtonClicked = 0x803 => "EventMouseButtonClicked", [INPUT | MOUSE | BUTTON], Some(Host::MouseButtonUp);
    /// The mouse wheel scrolled.
    MouseWheel = 0x804 => "EventMouseWheel", [INPUT | MOUSE | AXIS], Some(Host::MouseWheel);

    /// A joystick axis moved.
    JoyAxisMotion = 0x900 => "EventJoyAxisMotion", [INPUT | JOYSTICK | AXIS], Some(Host::JoyAxisMotion);
    /// A joystick trackball moved.
    JoyBallMotion = 0x901 => "EventJoyBallMotion", [INPUT | JOYSTICK | BALL], Some(Host::JoyBallMotion);
    /// A joystick hat changed position.
    JoyHatMotion = 0x902 => "EventJoyHatMotion", [INPUT | JOYSTICK | HAT], Some(Host::JoyHatMotion);
    /// A joystick button was pressed.
    JoyButtonDown = 0x903 => "EventJoyButtonDown", [INPUT | JOYSTICK | BUTTON], Some(Host::JoyButtonDown);
    /// A joystick button was released.
    JoyButtonUp = 0x904 => "EventJoyButtonUp", [INPUT | JOYSTICK | BUTTON], Some(Host::JoyButtonUp);
    /// A joystick was connected.
    JoyDeviceAdded = 0x905 => "EventJoyDeviceAdded", [DEVICE | JOYSTICK], Some(Host::JoyDeviceAdded);
    /// A joystick was disconnected.
    JoyDeviceRemoved = 0x906 => "EventJoyDeviceRemoved", [DEVICE | JOYSTICK], Some(Host::JoyDeviceRemoved);
    /// A joystick's battery level changed.
    JoyBatteryUpdated = 0x907 => "EventJoyBatteryUpdated", [DEVICE | JOYSTICK], Some(Host::JoyBatteryUpdated);

    /// A controller axis moved.
    ControllerAxisMotion = 0xA00 => "EventControllerAxisMotion", [INPUT | CONTROLLER | AXIS], Some(Host::ControllerAxisMotion);
    /// A controller button was pressed.
    ControllerButtonDown = 0xA01 => "EventControllerButtonDown", [INPUT | CONTROLLER | BUTTON], Some(Host::ControllerButtonDown);
    /// A controller button was released.
    ControllerButtonUp = 0xA02 => "EventControllerButtonUp", [INPUT | CONTROLLER | BUTTON], Some(Host::ControllerButtonUp);
    /// A controller was connected.
    ControllerDeviceAdded = 0xA03 => "EventControllerDeviceAdded", [DEVICE | CONTROLLER], Some(Host::ControllerDeviceAdded);
    /// A controller was disconnected.
    ControllerDeviceRemoved = 0xA04 => "EventControllerDeviceRemoved", [DEVICE | CONTROLLER], Some(Host::ControllerDeviceRemoved);
    /// A controller's mapping was updated.
    ControllerDeviceRemapped = 0xA05 => "EventControllerDeviceRemapped", [DEVICE | CONTROLLER], Some(Host::ControllerDeviceRemapped);
    /// A finger moved on a controller touchpad.
    ControllerTouchpadMotion = 0xA06 => "EventControllerTouchpadMotion", [INPUT | CONTROLLER | TOUCH], Some(Host::ControllerTouchpadMotion);
    /// A finger touched a controller touchpad.
    ControllerTouchpadDown = 0xA07 => "EventControllerTouchpadDown", [INPUT | CONTROLLER | TOUCH], Some(Host::ControllerTouchpadDown);
    /// A finger left a controller touchpad.
    ControllerTouchpadUp = 0xA08 => "EventControllerTouchpadUp", [INPUT | CONTROLLER | TOUCH], Some(Host::ControllerTouchpadUp);
    /// A controller sensor reported new data.
    ControllerSensorUpdate = 0xA09 => "EventControllerSensorUpdate", [INPUT | CONTROLLER | SENSOR], Some(Host::ControllerSensorUpdate);

    /// A finger touched a touch surface.
    FingerDown = 0xB00 => "EventFingerDown", [INPUT | TOUCH], Some(Host::FingerDown);
    /// A finger left a touch surface.
    FingerUp = 0xB01 => "EventFingerUp", [INPUT | TOUCH], Some(Host::FingerUp);
    /// A finger moved on a touch surface.
    FingerMotion = 0xB02 => "EventFingerMotion", [INPUT | TOUCH], Some(Host::FingerMotion);

    /// A recorded dollar gesture was recognized.
    DollarGesture = 0xC00 => "EventDollarGesture", [INPUT | TOUCH], Some(Host::DollarGesture);
    /// A dollar gesture was recorded.
    DollarRecord = 0xC01 => "EventDollarRecord", [INPUT | TOUCH], Some(Host::DollarRecord);
    /// A multi-finger gesture moved.
    MultiGesture = 0xC02 => "EventMultiGesture", [INPUT | TOUCH], Some(Host::MultiGesture);

    /// The render targets were reset and their contents must be recreated.
    RenderTargetsReset = 0xD00 => "EventRenderTargetsReset", [APPLICATION], Some(Host::RenderTargetsReset);
    /// The render device was reset and all textures must be recreated.
    RenderDeviceReset = 0xD01 => "EventRenderDeviceReset", [APPLICATION], Some(Host::RenderDeviceReset);
}

impl EventKind {
    /// Returns the raw tag of this kind.
    #[inline]
    pub const fn raw(self) -> u16 {
        self as u16
    }

    /// Returns `true` if events of this kind belong to `category`.
    #[inline]
    pub const fn is_in_category(self, category: EventCategory) -> bool {
        self.category_mask().intersects(category)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
