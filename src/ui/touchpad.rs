use std::rc::Rc;

use adw::prelude::*;
use hypr_control_config::gestures::{self, SwipeFingers};
use hypr_control_config::touchpad::{self, ClickMethod};

use super::rows::{self, Range};
use super::AppState;

pub fn page(state: &Rc<AppState>) -> adw::PreferencesPage {
    let page = adw::PreferencesPage::builder()
        .title("Touchpad")
        .icon_name("input-touchpad-symbolic")
        .build();

    let device = rows::group("Device");
    device.add(&rows::bool_option(
        state,
        touchpad::ENABLED,
        "Touchpad Enabled",
        "Enable or disable touchpad",
    ));
    device.add(&rows::bool_option(
        state,
        touchpad::TOUCHSCREEN_ENABLED,
        "Touchscreen Enabled",
        "Enable or disable touchscreen",
    ));
    page.add(&device);

    let tapping = rows::group("Tapping");
    tapping.add(&rows::bool_option(
        state,
        touchpad::TAP_TO_CLICK,
        "Tap to Click",
        "Tap the touchpad to click",
    ));
    tapping.add(&rows::bool_option(
        state,
        touchpad::TAP_AND_DRAG,
        "Tap and Drag",
        "Tap and hold to drag",
    ));
    tapping.add(&rows::bool_option(
        state,
        touchpad::DRAG_LOCK,
        "Drag Lock",
        "Continue drag after lifting finger",
    ));
    tapping.add(&rows::choice::<ClickMethod>(
        state,
        "Click Method",
        "How right/middle click is detected",
    ));
    tapping.add(&rows::bool_option(
        state,
        touchpad::MIDDLE_BUTTON_EMULATION,
        "Middle Button Emulation",
        "Press left+right for middle click",
    ));
    page.add(&tapping);

    let scrolling = rows::group("Scrolling");
    scrolling.add(&rows::bool_option(
        state,
        touchpad::NATURAL_SCROLL,
        "Natural Scrolling",
        "Content follows finger direction",
    ));
    scrolling.add(&rows::float_option(
        state,
        touchpad::SCROLL_FACTOR,
        Range::new(0.1, 3., 0.1),
        "Scroll Speed",
        "Scroll distance multiplier",
    ));
    page.add(&scrolling);

    let behavior = rows::group("Behavior");
    behavior.add(&rows::bool_option(
        state,
        touchpad::DISABLE_WHILE_TYPING,
        "Disable While Typing",
        "Ignore touchpad while typing",
    ));
    page.add(&behavior);

    let gestures_group = rows::group("Gestures");
    gestures_group.add(&rows::bool_option(
        state,
        gestures::WORKSPACE_SWIPE,
        "Workspace Swipe",
        "Swipe to change workspaces",
    ));
    gestures_group.add(&rows::choice::<SwipeFingers>(
        state,
        "Swipe Fingers",
        "Number of fingers for gesture",
    ));
    gestures_group.add(&rows::int_option(
        state,
        gestures::WORKSPACE_SWIPE_DISTANCE,
        Range::new(100., 500., 10.),
        "Swipe Distance",
        "Pixels needed for workspace switch",
    ));
    gestures_group.add(&rows::bool_option(
        state,
        gestures::WORKSPACE_SWIPE_INVERT,
        "Invert Swipe",
        "Reverse swipe direction",
    ));
    gestures_group.add(&rows::bool_option(
        state,
        gestures::WORKSPACE_SWIPE_FOREVER,
        "Continuous Swipe",
        "Keep swiping through all workspaces",
    ));
    page.add(&gestures_group);

    page
}
