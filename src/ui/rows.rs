//! Preference rows bound to Hyprland options.
//!
//! Every row gets its initial value before its change handler is connected, so building a page
//! never writes anything.

use std::rc::Rc;

use adw::prelude::*;
use hypr_control_config::{BoolOption, Choice, FloatOption, IntOption, IntSwitchOption};

use super::AppState;

const SCALE_WIDTH: i32 = 180;

/// Bounds and step of a slider.
#[derive(Debug, Clone, Copy)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }
}

pub fn group(title: &str) -> adw::PreferencesGroup {
    adw::PreferencesGroup::builder().title(title).build()
}

pub fn switch(
    title: &str,
    subtitle: &str,
    active: bool,
    on_toggled: impl Fn(bool) + 'static,
) -> adw::SwitchRow {
    let row = adw::SwitchRow::builder()
        .title(title)
        .subtitle(subtitle)
        .active(active)
        .build();
    row.connect_active_notify(move |row| on_toggled(row.is_active()));
    row
}

pub fn scale(
    title: &str,
    subtitle: &str,
    range: Range,
    value: f64,
    on_changed: impl Fn(f64) + 'static,
) -> adw::ActionRow {
    let scale = gtk::Scale::with_range(
        gtk::Orientation::Horizontal,
        range.min,
        range.max,
        range.step,
    );
    scale.set_draw_value(true);
    scale.set_value_pos(gtk::PositionType::Left);
    scale.set_size_request(SCALE_WIDTH, -1);
    scale.set_valign(gtk::Align::Center);
    scale.set_value(value);
    scale.connect_value_changed(move |scale| on_changed(scale.value()));

    let row = adw::ActionRow::builder().title(title).subtitle(subtitle).build();
    row.add_suffix(&scale);
    row
}

pub fn combo(
    title: &str,
    subtitle: &str,
    labels: &[&str],
    selected: u32,
    on_selected: impl Fn(u32) + 'static,
) -> adw::ComboRow {
    let row = adw::ComboRow::builder()
        .title(title)
        .subtitle(subtitle)
        .model(&gtk::StringList::new(labels))
        .build();
    row.set_selected(selected);
    row.connect_selected_notify(move |row| on_selected(row.selected()));
    row
}

pub fn bool_option(
    state: &Rc<AppState>,
    option: BoolOption,
    title: &str,
    subtitle: &str,
) -> adw::SwitchRow {
    let active = option.get(&state.store);
    let state = state.clone();
    switch(title, subtitle, active, move |active| {
        option.set(&state.store, active);
    })
}

pub fn int_switch_option(
    state: &Rc<AppState>,
    option: IntSwitchOption,
    title: &str,
    subtitle: &str,
) -> adw::SwitchRow {
    let active = option.get(&state.store);
    let state = state.clone();
    switch(title, subtitle, active, move |active| {
        option.set(&state.store, active);
    })
}

pub fn int_option(
    state: &Rc<AppState>,
    option: IntOption,
    range: Range,
    title: &str,
    subtitle: &str,
) -> adw::ActionRow {
    let value = f64::from(option.get(&state.store));
    let state = state.clone();
    scale(title, subtitle, range, value, move |value| {
        option.set(&state.store, value.round() as i32);
    })
}

pub fn float_option(
    state: &Rc<AppState>,
    option: FloatOption,
    range: Range,
    title: &str,
    subtitle: &str,
) -> adw::ActionRow {
    let value = option.get(&state.store);
    let state = state.clone();
    scale(title, subtitle, range, value, move |value| {
        option.set(&state.store, value);
    })
}

/// Combo row listing the choices of `C`.
///
/// A current value matching none of them shows the first one.
pub fn choice<C: Choice>(state: &Rc<AppState>, title: &str, subtitle: &str) -> adw::ComboRow {
    let selected = C::read(&state.store).map_or(0, C::index);
    let state = state.clone();
    combo(title, subtitle, C::LABELS, selected, move |index| {
        match C::from_index(index) {
            Some(choice) => choice.write(&state.store),
            None => debug!("ignoring out of range selection {index}"),
        }
    })
}
