use std::rc::Rc;

use adw::prelude::*;
use gtk::glib;
use hypr_control_config::{keyboard, layouts, LayoutSwitchBind};
use hypr_control_ipc::modifiers::ModifierCombo;

use super::rows::{self, Range};
use super::{layout_dialog, AppState};

pub fn page(state: &Rc<AppState>) -> adw::PreferencesPage {
    let page = adw::PreferencesPage::builder()
        .title("Keyboard")
        .icon_name("input-keyboard-symbolic")
        .build();

    page.add(&layouts_group(state));
    page.add(&switch_bind_group(state));

    let repeat = rows::group("Key Repeat");
    repeat.add(&rows::int_option(
        state,
        keyboard::REPEAT_RATE,
        Range::new(10., 100., 5.),
        "Repeat Rate",
        "Keys per second when held",
    ));
    repeat.add(&rows::int_option(
        state,
        keyboard::REPEAT_DELAY,
        Range::new(100., 1000., 50.),
        "Repeat Delay",
        "Milliseconds before repeat starts",
    ));
    page.add(&repeat);

    let options = rows::group("Options");
    options.add(&rows::bool_option(
        state,
        keyboard::NUMLOCK_BY_DEFAULT,
        "Numlock by Default",
        "Enable numlock on startup",
    ));
    options.add(&rows::bool_option(
        state,
        keyboard::RESOLVE_BINDS_BY_SYM,
        "Resolve Binds by Symbol",
        "Use keysym instead of keycode",
    ));
    page.add(&options);

    page
}

fn boxed_list() -> gtk::ListBox {
    let list = gtk::ListBox::new();
    list.add_css_class("boxed-list");
    list.set_selection_mode(gtk::SelectionMode::None);
    list
}

fn suffix_button(icon_name: &str) -> gtk::Button {
    let button = gtk::Button::from_icon_name(icon_name);
    button.add_css_class("flat");
    button.add_css_class("circular");
    button.set_valign(gtk::Align::Center);
    button
}

fn layouts_group(state: &Rc<AppState>) -> adw::PreferencesGroup {
    let group = rows::group("Layouts");

    let list = boxed_list();
    fill_layouts(&list, state);
    group.add(&list);

    let add_row = adw::ActionRow::builder()
        .title("Add Layout")
        .subtitle("Add a new keyboard layout")
        .activatable(true)
        .build();
    add_row.add_suffix(&gtk::Image::from_icon_name("list-add-symbolic"));
    add_row.connect_activated({
        let list = list.downgrade();
        let state = state.clone();
        move |row| {
            let list = list.clone();
            let state_ = state.clone();
            layout_dialog::present(row, &state, move || {
                // The dialog is still handling the activation at this point.
                let list = list.clone();
                let state = state_.clone();
                glib::idle_add_local_once(move || {
                    if let Some(list) = list.upgrade() {
                        fill_layouts(&list, &state);
                    }
                });
            });
        }
    });
    group.add(&add_row);

    group
}

fn fill_layouts(list: &gtk::ListBox, state: &Rc<AppState>) {
    list.remove_all();

    let session = state.session.borrow();
    for code in session.layouts().iter() {
        let row = adw::ActionRow::builder()
            .title(layouts::row_title(code))
            .use_markup(false)
            .build();

        let remove = suffix_button("window-close-symbolic");
        remove.connect_clicked({
            let list = list.downgrade();
            let state = state.clone();
            let code = code.to_owned();
            move |_| {
                let Some(list) = list.upgrade() else {
                    return;
                };

                let removed = state.session.borrow_mut().remove_layout(&state.store, &code);
                if removed {
                    fill_layouts(&list, &state);
                }
            }
        });
        row.add_suffix(&remove);

        list.append(&row);
    }

    list.set_visible(!session.layouts().is_empty());
}

fn switch_bind_group(state: &Rc<AppState>) -> adw::PreferencesGroup {
    let group = rows::group("Layout Switching");
    group.set_description(Some("Set a keybind to cycle through layouts"));

    let labels: Vec<&str> = ModifierCombo::ALL.iter().map(|combo| combo.label()).collect();
    let selected = state.session.borrow().modifier_index();
    group.add(&rows::combo(
        "Modifier",
        "Key modifier for shortcut",
        &labels,
        u32::try_from(selected).unwrap_or(0),
        {
            let state = state.clone();
            move |index| {
                state
                    .session
                    .borrow_mut()
                    .set_modifier_index(index as usize);
            }
        },
    ));

    let entry = gtk::Entry::new();
    entry.set_placeholder_text(Some("Space"));
    entry.set_size_request(120, -1);
    entry.set_valign(gtk::Align::Center);
    if let LayoutSwitchBind::Bound { key, .. } = state.session.borrow().switch_bind() {
        entry.set_text(key);
    }

    let key_row = adw::ActionRow::builder()
        .title("Key")
        .subtitle("Key to press (e.g., Space, Tab, grave)")
        .build();
    key_row.add_suffix(&entry);
    group.add(&key_row);

    let bind_list = boxed_list();

    let apply_row = adw::ActionRow::builder()
        .title("Apply Keybind")
        .subtitle("Set the keyboard layout switch shortcut")
        .activatable(true)
        .build();
    apply_row.add_suffix(&gtk::Image::from_icon_name("emblem-ok-symbolic"));
    apply_row.connect_activated({
        let entry = entry.downgrade();
        let bind_list = bind_list.downgrade();
        let state = state.clone();
        move |_| {
            let (Some(entry), Some(bind_list)) = (entry.upgrade(), bind_list.upgrade()) else {
                return;
            };

            let key = entry.text();
            let applied = state
                .session
                .borrow_mut()
                .apply_switch_bind(&state.store, &key);
            if !applied {
                debug!("not applying layout switch binding with key {key:?}");
            }
            fill_switch_bind(&bind_list, &state);
        }
    });
    group.add(&apply_row);

    fill_switch_bind(&bind_list, state);
    group.add(&bind_list);

    group
}

fn fill_switch_bind(list: &gtk::ListBox, state: &Rc<AppState>) {
    list.remove_all();

    let descriptor = state.session.borrow().switch_bind().descriptor();
    let row = match descriptor {
        Some(descriptor) => {
            let row = adw::ActionRow::builder()
                .title(descriptor)
                .subtitle("Layout Switch Keybind")
                .use_markup(false)
                .build();

            let remove = suffix_button("user-trash-symbolic");
            remove.connect_clicked({
                let list = list.downgrade();
                let state = state.clone();
                move |_| {
                    let Some(list) = list.upgrade() else {
                        return;
                    };

                    let removed = state.session.borrow_mut().remove_switch_bind(&state.store);
                    if removed {
                        fill_switch_bind(&list, &state);
                    }
                }
            });
            row.add_suffix(&remove);
            row
        }
        None => adw::ActionRow::builder()
            .title("No active keybind")
            .subtitle("Add one above")
            .build(),
    };

    list.append(&row);
}
