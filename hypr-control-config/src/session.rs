use hypr_control_ipc::Transport;

use crate::keybind::LayoutSwitchBind;
use crate::layout_list::LayoutList;
use crate::store::OptionStore;

/// State the panel keeps for the lifetime of its window.
///
/// Everything else is read from Hyprland when shown and written back when changed. The selected
/// layouts and the layout switch binding are loaded once and afterwards only change through this
/// session, which writes every change through to Hyprland.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    layouts: LayoutList,
    switch_bind: LayoutSwitchBind,
    modifier_index: usize,
}

impl Session {
    pub fn load<T: Transport>(store: &OptionStore<T>) -> Self {
        let layouts = LayoutList::load(store);
        let switch_bind = LayoutSwitchBind::load(store);
        let modifier_index = match &switch_bind {
            LayoutSwitchBind::Bound { modifier, .. } => modifier.index(),
            LayoutSwitchBind::Unbound => 0,
        };

        Self {
            layouts,
            switch_bind,
            modifier_index,
        }
    }

    pub fn layouts(&self) -> &LayoutList {
        &self.layouts
    }

    pub fn switch_bind(&self) -> &LayoutSwitchBind {
        &self.switch_bind
    }

    pub fn modifier_index(&self) -> usize {
        self.modifier_index
    }

    /// Adds a layout and writes the list if it changed.
    pub fn add_layout<T: Transport>(&mut self, store: &OptionStore<T>, code: &str) -> bool {
        if !self.layouts.add(code) {
            return false;
        }

        self.layouts.flush(store);
        true
    }

    /// Removes a layout and writes the list if it changed.
    pub fn remove_layout<T: Transport>(&mut self, store: &OptionStore<T>, code: &str) -> bool {
        if !self.layouts.remove(code) {
            return false;
        }

        self.layouts.flush(store);
        true
    }

    pub fn set_modifier_index(&mut self, index: usize) {
        self.modifier_index = index;
    }

    /// Binds the selected modifier + `key` to cycle layouts.
    pub fn apply_switch_bind<T: Transport>(&mut self, store: &OptionStore<T>, key: &str) -> bool {
        self.switch_bind.apply(store, self.modifier_index, key)
    }

    pub fn remove_switch_bind<T: Transport>(&mut self, store: &OptionStore<T>) -> bool {
        self.switch_bind.remove(store)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::ScriptedTransport;

    #[test]
    fn load() {
        let store = OptionStore::new(
            ScriptedTransport::new()
                .reply("getoption input:kb_layout", "str: us,de\nset: true\n")
                .reply(
                    "-j binds",
                    r#"[{"modmask": 8, "key": "F1", "arg": "hyprctl switchxkblayout all next"}]"#,
                ),
        );
        let session = Session::load(&store);

        assert_eq!(session.layouts().iter().collect::<Vec<_>>(), ["us", "de"]);
        assert_eq!(session.switch_bind().descriptor().as_deref(), Some("ALT, F1"));
        assert_eq!(session.modifier_index(), 1);
    }

    #[test]
    fn duplicate_add_writes_nothing() {
        let store = OptionStore::new(ScriptedTransport::new());
        let mut session = Session::default();

        assert!(session.add_layout(&store, "de"));
        assert!(!session.add_layout(&store, "de"));
        assert!(!session.remove_layout(&store, "fr"));
        assert_eq!(store.transport().calls(), ["keyword input:kb_layout de"]);
    }

    #[test]
    fn removing_last_layout_writes_fallback() {
        let store = OptionStore::new(ScriptedTransport::new());
        let mut session = Session::default();

        session.add_layout(&store, "de");
        session.remove_layout(&store, "de");
        assert_eq!(
            store.transport().calls(),
            ["keyword input:kb_layout de", "keyword input:kb_layout us"]
        );
    }

    #[test]
    fn switch_bind_uses_selected_modifier() {
        let store = OptionStore::new(ScriptedTransport::new());
        let mut session = Session::default();

        session.set_modifier_index(4);
        assert!(session.apply_switch_bind(&store, "Space"));
        assert!(session.remove_switch_bind(&store));
        assert_eq!(
            store.transport().calls(),
            [
                "keyword bind SUPER_SHIFT, Space, exec, hyprctl switchxkblayout all next",
                "keyword unbind SUPER_SHIFT, Space",
            ]
        );
    }
}
