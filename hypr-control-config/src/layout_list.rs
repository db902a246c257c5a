use hypr_control_ipc::Transport;

use crate::keyboard::KB_LAYOUT;
use crate::store::OptionStore;

/// Value written to `input:kb_layout` when no layout is selected.
pub const FALLBACK_LAYOUT: &str = "us";

/// Ordered, duplicate-free list of selected keyboard layout codes.
///
/// The first layout is the primary one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LayoutList {
    codes: Vec<String>,
}

impl LayoutList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated `input:kb_layout` value.
    ///
    /// Leading whitespace of every code is dropped, as are empty codes and repeated ones.
    pub fn from_kb_layout(value: &str) -> Self {
        let mut list = Self::new();
        for code in value.split(',') {
            let code = code.trim_start();
            if !code.is_empty() {
                list.add(code);
            }
        }
        list
    }

    /// Reads the currently configured layouts.
    pub fn load<T: Transport>(store: &OptionStore<T>) -> Self {
        let list = Self::from_kb_layout(&store.read_string(KB_LAYOUT));
        debug!("loaded keyboard layouts: {:?}", list.codes);
        list
    }

    /// Appends a layout unless it is already in the list.
    ///
    /// Returns whether the list changed.
    pub fn add(&mut self, code: &str) -> bool {
        if self.contains(code) {
            return false;
        }

        self.codes.push(code.to_owned());
        true
    }

    /// Removes a layout from the list.
    ///
    /// Returns whether the list changed.
    pub fn remove(&mut self, code: &str) -> bool {
        let Some(idx) = self.codes.iter().position(|c| c == code) else {
            return false;
        };

        self.codes.remove(idx);
        true
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Value of `input:kb_layout` for this list.
    pub fn kb_layout_value(&self) -> String {
        if self.codes.is_empty() {
            String::from(FALLBACK_LAYOUT)
        } else {
            self.codes.join(",")
        }
    }

    /// Writes the list to `input:kb_layout`.
    pub fn flush<T: Transport>(&self, store: &OptionStore<T>) {
        store.write(KB_LAYOUT, self.kb_layout_value());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::ScriptedTransport;

    fn codes(list: &LayoutList) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn parse_kb_layout() {
        assert_eq!(codes(&LayoutList::from_kb_layout("us,de")), ["us", "de"]);
        assert_eq!(codes(&LayoutList::from_kb_layout("us, de,  fr")), ["us", "de", "fr"]);
        assert_eq!(codes(&LayoutList::from_kb_layout("us,,de,")), ["us", "de"]);
        assert_eq!(codes(&LayoutList::from_kb_layout("us,de,us")), ["us", "de"]);
        assert!(LayoutList::from_kb_layout("").is_empty());
    }

    #[test]
    fn add_is_idempotent() {
        let mut list = LayoutList::new();
        assert!(list.add("de"));
        assert!(!list.add("de"));
        assert_eq!(codes(&list), ["de"]);
    }

    #[test]
    fn add_and_remove_keep_order() {
        let mut list = LayoutList::new();
        list.add("a");
        list.add("b");
        list.add("c");
        assert!(list.remove("a"));
        assert!(!list.remove("a"));
        assert_eq!(codes(&list), ["b", "c"]);
        assert_eq!(list.kb_layout_value(), "b,c");
    }

    #[test]
    fn empty_list_flushes_fallback() {
        let store = OptionStore::new(ScriptedTransport::new());
        LayoutList::new().flush(&store);
        assert_eq!(store.transport().calls(), ["keyword input:kb_layout us"]);
    }

    #[test]
    fn load_reads_kb_layout() {
        let store = OptionStore::new(
            ScriptedTransport::new().reply("getoption input:kb_layout", "str: us,ru\nset: true\n"),
        );
        let list = LayoutList::load(&store);
        assert_eq!(codes(&list), ["us", "ru"]);
        assert!(list.contains("ru"));
        assert!(!list.contains("r"));
    }

    #[test]
    fn load_without_hyprland() {
        let store = OptionStore::new(ScriptedTransport::new().failing());
        assert!(LayoutList::load(&store).is_empty());
    }
}
