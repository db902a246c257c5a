use std::cell::RefCell;
use std::rc::Rc;

use adw::prelude::*;
use hypr_control_config::{OptionStore, Session};
use hypr_control_ipc::Hyprctl;

mod keyboard;
mod layout_dialog;
mod mouse;
mod rows;
mod touchpad;

/// State shared by every page of the window.
pub struct AppState {
    pub store: OptionStore<Hyprctl>,
    pub session: RefCell<Session>,
}

impl AppState {
    pub fn load() -> Self {
        let store = OptionStore::new(Hyprctl::from_env());
        let session = RefCell::new(Session::load(&store));
        Self { store, session }
    }
}

pub fn build_ui(app: &adw::Application) {
    if let Some(window) = app.active_window() {
        window.present();
        return;
    }

    let state = Rc::new(AppState::load());

    let stack = adw::ViewStack::new();
    stack.add_titled_with_icon(
        &mouse::page(&state),
        Some("mouse"),
        "Mouse",
        "input-mouse-symbolic",
    );
    stack.add_titled_with_icon(
        &touchpad::page(&state),
        Some("touchpad"),
        "Touchpad",
        "input-touchpad-symbolic",
    );
    stack.add_titled_with_icon(
        &keyboard::page(&state),
        Some("keyboard"),
        "Keyboard",
        "input-keyboard-symbolic",
    );

    let switcher = adw::ViewSwitcher::builder()
        .stack(&stack)
        .policy(adw::ViewSwitcherPolicy::Wide)
        .build();
    let header = adw::HeaderBar::new();
    header.set_title_widget(Some(&switcher));

    let switcher_bar = adw::ViewSwitcherBar::builder()
        .stack(&stack)
        .reveal(true)
        .build();

    let view = adw::ToolbarView::new();
    view.add_top_bar(&header);
    view.add_bottom_bar(&switcher_bar);
    view.set_content(Some(&stack));

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Hypr Control")
        .default_width(600)
        .default_height(750)
        .content(&view)
        .build();
    window.present();
}
