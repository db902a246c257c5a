use std::rc::Rc;

use adw::prelude::*;
use hypr_control_config::cursor;
use hypr_control_config::input::{self, AccelProfile, FollowMouse, ScrollMethod};

use super::rows::{self, Range};
use super::AppState;

pub fn page(state: &Rc<AppState>) -> adw::PreferencesPage {
    let page = adw::PreferencesPage::builder()
        .title("Mouse")
        .icon_name("input-mouse-symbolic")
        .build();

    let general = rows::group("General");
    general.add(&rows::float_option(
        state,
        input::SENSITIVITY,
        Range::new(-1., 1., 0.05),
        "Sensitivity",
        "Mouse cursor speed multiplier",
    ));
    general.add(&rows::choice::<AccelProfile>(
        state,
        "Acceleration Profile",
        "Pointer acceleration curve",
    ));
    general.add(&rows::bool_option(
        state,
        input::FORCE_NO_ACCEL,
        "Disable Acceleration",
        "Force no pointer acceleration",
    ));
    general.add(&rows::bool_option(
        state,
        input::LEFT_HANDED,
        "Left Handed Mode",
        "Swap left and right buttons",
    ));
    page.add(&general);

    let scrolling = rows::group("Scrolling");
    scrolling.add(&rows::bool_option(
        state,
        input::NATURAL_SCROLL,
        "Natural Scrolling",
        "Invert scroll direction",
    ));
    scrolling.add(&rows::choice::<ScrollMethod>(
        state,
        "Scroll Method",
        "How scrolling is triggered",
    ));
    page.add(&scrolling);

    let focus = rows::group("Focus Behavior");
    focus.add(&rows::choice::<FollowMouse>(
        state,
        "Follow Mouse",
        "Window focus follows mouse cursor",
    ));
    focus.add(&rows::int_switch_option(
        state,
        input::FLOAT_SWITCH_OVERRIDE_FOCUS,
        "Float Switch Override Focus",
        "Focus floats on mouse hover",
    ));
    focus.add(&rows::bool_option(
        state,
        input::SPECIAL_FALLTHROUGH,
        "Special Fallthrough",
        "Click through special workspaces",
    ));
    page.add(&focus);

    let cursor_group = rows::group("Cursor");
    cursor_group.add(&rows::int_option(
        state,
        cursor::INACTIVE_TIMEOUT,
        Range::new(0., 60., 1.),
        "Hide Timeout",
        "Seconds before cursor hides (0 = never)",
    ));
    cursor_group.add(&rows::float_option(
        state,
        cursor::ZOOM_FACTOR,
        Range::new(1., 4., 0.1),
        "Zoom Factor",
        "Cursor size multiplier",
    ));
    cursor_group.add(&rows::bool_option(
        state,
        cursor::HIDE_ON_KEY_PRESS,
        "Hide on Key Press",
        "Hide cursor when typing",
    ));
    cursor_group.add(&rows::bool_option(
        state,
        cursor::HIDE_ON_TOUCH,
        "Hide on Touch",
        "Hide cursor when touching screen",
    ));
    page.add(&cursor_group);

    page
}
