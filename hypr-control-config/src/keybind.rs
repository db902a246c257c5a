//! The keybinding that cycles through the selected keyboard layouts.

use std::fmt;

use hypr_control_ipc::binds::{self, BindInfo};
use hypr_control_ipc::modifiers::ModifierCombo;
use hypr_control_ipc::{switch_layout_bind, Request, Transport, SWITCH_LAYOUT_COMMAND};

use crate::store::OptionStore;

/// Layout switch binding managed by the panel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LayoutSwitchBind {
    #[default]
    Unbound,
    Bound {
        modifier: ModifierCombo,
        key: String,
    },
}

impl LayoutSwitchBind {
    /// `MODIFIER, key` as used by `bind` and `unbind`, if bound.
    pub fn descriptor(&self) -> Option<String> {
        match self {
            LayoutSwitchBind::Unbound => None,
            LayoutSwitchBind::Bound { modifier, key } => Some(format!("{}, {key}", modifier.name())),
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, LayoutSwitchBind::Bound { .. })
    }

    /// Reconstructs the state from a registered binding.
    ///
    /// Only the eight known modifier combinations are recognized. A binding using any other
    /// modifiers stays invisible and reads as unbound.
    pub fn from_bind(bind: &BindInfo) -> Self {
        if bind.key.is_empty() {
            info!("layout switch binding has no key, ignoring it");
            return Self::Unbound;
        }

        let Some(modifier) = bind.modifier_combo() else {
            info!(
                "layout switch binding on {} uses unsupported modmask {}, ignoring it",
                bind.key, bind.modmask
            );
            return Self::Unbound;
        };

        Self::Bound {
            modifier,
            key: bind.key.clone(),
        }
    }

    /// Finds the layout switch binding among Hyprland's registered bindings.
    ///
    /// The JSON listing is tried first, then the text one.
    pub fn load<T: Transport>(store: &OptionStore<T>) -> Self {
        let transport = store.transport();
        let marker = format!("{} {SWITCH_LAYOUT_COMMAND}", transport.program());

        let binds = match transport.send(&Request::Binds { json: true }) {
            Ok(reply) => match binds::parse_json(&reply) {
                Ok(binds) => Some(binds),
                Err(err) => {
                    debug!("error parsing JSON binds listing: {err}");
                    None
                }
            },
            Err(err) => {
                debug!("error listing binds as JSON: {err:?}");
                None
            }
        };

        let binds = match binds {
            Some(binds) => binds,
            None => match transport.send(&Request::Binds { json: false }) {
                Ok(reply) => binds::parse_text(&reply),
                Err(err) => {
                    warn!("error listing binds: {err:?}");
                    return Self::Unbound;
                }
            },
        };

        let state = binds::find_by_arg(&binds, &marker).map_or(Self::Unbound, Self::from_bind);
        debug!("layout switch binding: {state}");
        state
    }

    /// Binds `modifier_index` + `key` to cycle layouts, unbinding the previous binding first.
    ///
    /// Does nothing and returns `false` if the key is empty or the modifier index is out of range.
    pub fn apply<T: Transport>(
        &mut self,
        store: &OptionStore<T>,
        modifier_index: usize,
        key: &str,
    ) -> bool {
        let key = key.trim();
        if key.is_empty() {
            return false;
        }
        let Some(modifier) = ModifierCombo::from_index(modifier_index) else {
            return false;
        };

        if let Some(old) = self.descriptor() {
            store.keyword("unbind", &old);
        }

        *self = Self::Bound {
            modifier,
            key: key.to_owned(),
        };

        if let Some(descriptor) = self.descriptor() {
            let program = store.transport().program();
            store.keyword("bind", &switch_layout_bind(&descriptor, program));
        }

        true
    }

    /// Unbinds the tracked binding.
    ///
    /// Returns `false` if nothing was bound.
    pub fn remove<T: Transport>(&mut self, store: &OptionStore<T>) -> bool {
        let Some(old) = self.descriptor() else {
            return false;
        };

        store.keyword("unbind", &old);
        *self = Self::Unbound;
        true
    }
}

impl fmt::Display for LayoutSwitchBind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.descriptor() {
            Some(descriptor) => f.write_str(&descriptor),
            None => f.write_str("unbound"),
        }
    }
}
