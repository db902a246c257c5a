use std::cell::RefCell;
use std::io;

use hypr_control_config::{keyboard, OptionStore, Session};
use hypr_control_ipc::Transport;
use insta::assert_debug_snapshot;
use pretty_assertions::assert_eq;

/// Fake Hyprland answering `getoption`, `keyword` and `binds` from an in-memory layout value.
#[derive(Default)]
struct FakeHyprland {
    kb_layout: RefCell<String>,
    calls: RefCell<Vec<String>>,
}

impl Transport for FakeHyprland {
    fn call(&self, args: &[String]) -> io::Result<String> {
        self.calls.borrow_mut().push(args.join(" "));

        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args[..] {
            ["getoption", "input:kb_layout"] => {
                Ok(format!("str: {}\nset: true\n", self.kb_layout.borrow()))
            }
            ["keyword", "input:kb_layout", value] => {
                *self.kb_layout.borrow_mut() = value.to_owned();
                Ok(String::from("ok"))
            }
            ["keyword", ..] => Ok(String::from("ok")),
            ["-j", "binds"] => Ok(String::from("[]")),
            _ => Err(io::Error::from(io::ErrorKind::Unsupported)),
        }
    }
}

#[test]
fn layouts_end_to_end() {
    let store = OptionStore::new(FakeHyprland::default());
    let mut session = Session::load(&store);
    assert!(session.layouts().is_empty());

    session.add_layout(&store, "de");
    session.add_layout(&store, "fr");
    assert_eq!(store.transport().kb_layout.borrow().as_str(), "de,fr");

    session.remove_layout(&store, "de");
    assert_eq!(store.transport().kb_layout.borrow().as_str(), "fr");

    // A fresh session sees what the previous one wrote.
    let reloaded = Session::load(&store);
    assert_eq!(reloaded.layouts().iter().collect::<Vec<_>>(), ["fr"]);
    assert_eq!(store.read_string(keyboard::KB_LAYOUT), "fr");
}

#[test]
fn keybind_end_to_end() {
    let store = OptionStore::new(FakeHyprland::default());
    let mut session = Session::load(&store);
    assert!(!session.switch_bind().is_bound());

    session.set_modifier_index(0);
    assert!(session.apply_switch_bind(&store, "Space"));
    session.set_modifier_index(7);
    assert!(session.apply_switch_bind(&store, "K"));
    assert!(session.remove_switch_bind(&store));
    assert!(!session.remove_switch_bind(&store));

    assert_debug_snapshot!(store.transport().calls.borrow(), @r#"
    [
        "getoption input:kb_layout",
        "-j binds",
        "keyword bind SUPER, Space, exec, hyprctl switchxkblayout all next",
        "keyword unbind SUPER, Space",
        "keyword bind SUPER_ALT, K, exec, hyprctl switchxkblayout all next",
        "keyword unbind SUPER_ALT, K",
    ]
    "#);
}
