use std::rc::Rc;

use adw::prelude::*;
use hypr_control_config::layouts::LAYOUTS;

use super::AppState;

/// Shows the list of known layouts; activating one adds it and closes the dialog.
///
/// `on_added` runs after a layout was actually added.
pub fn present(
    parent: &impl IsA<gtk::Widget>,
    state: &Rc<AppState>,
    on_added: impl Fn() + 'static,
) {
    let dialog = adw::Dialog::builder()
        .title("Add Keyboard Layout")
        .content_width(360)
        .content_height(500)
        .build();

    let list = gtk::ListBox::new();
    list.add_css_class("boxed-list");
    list.set_margin_start(12);
    list.set_margin_end(12);
    list.set_margin_top(12);
    list.set_margin_bottom(12);

    {
        let session = state.session.borrow();
        for &(code, name) in LAYOUTS {
            let row = adw::ActionRow::builder()
                .title(name)
                .subtitle(code)
                .activatable(true)
                .build();

            if session.layouts().contains(code) {
                row.add_suffix(&gtk::Image::from_icon_name("emblem-ok-symbolic"));
                row.set_sensitive(false);
            }

            list.append(&row);
        }
    }

    list.connect_row_activated({
        let dialog = dialog.downgrade();
        let state = state.clone();
        move |_, row| {
            let layout = usize::try_from(row.index())
                .ok()
                .and_then(|idx| LAYOUTS.get(idx));
            if let Some(&(code, _)) = layout {
                let added = state.session.borrow_mut().add_layout(&state.store, code);
                if added {
                    on_added();
                }
            }

            if let Some(dialog) = dialog.upgrade() {
                dialog.close();
            }
        }
    });

    let scrolled = gtk::ScrolledWindow::builder()
        .vexpand(true)
        .child(&list)
        .build();

    let view = adw::ToolbarView::new();
    view.add_top_bar(&adw::HeaderBar::new());
    view.set_content(Some(&scrolled));

    dialog.set_child(Some(&view));
    dialog.present(Some(parent));
}
