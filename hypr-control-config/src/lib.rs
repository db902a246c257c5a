//! Hyprland input settings as read and written through `hyprctl`.
//!
//! [`OptionStore`] wraps a [`Transport`](hypr_control_ipc::Transport) with typed, infallible
//! reads and fire-and-forget writes. The modules named after settings pages define the options
//! shown on them. [`Session`] holds the state the panel tracks itself: the selected keyboard
//! layouts and the layout switch binding.

#[macro_use]
extern crate tracing;

pub mod cursor;
pub mod gestures;
pub mod input;
pub mod keybind;
pub mod keyboard;
pub mod layout_list;
pub mod layouts;
pub mod options;
pub mod session;
pub mod store;
pub mod touchpad;

#[cfg(test)]
mod testing;

pub use crate::keybind::LayoutSwitchBind;
pub use crate::layout_list::LayoutList;
pub use crate::options::{BoolOption, Choice, FloatOption, IntOption, IntSwitchOption};
pub use crate::session::Session;
pub use crate::store::{OptionStore, OptionValue};
