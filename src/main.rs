#[macro_use]
extern crate tracing;

use std::env;

use gtk::prelude::{ApplicationExt, ApplicationExtManual};
use gtk::{gio, glib};
use tracing_subscriber::EnvFilter;

mod ui;
mod utils;

const APP_ID: &str = "com.github.hyprcontrol";

fn main() -> glib::ExitCode {
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| {
        "hypr_control=debug,hypr_control_config=debug,hypr_control_ipc=debug,info".to_owned()
    });
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .init();

    info!("starting Hypr Control {}", utils::version());

    if let Err(err) = utils::check_hyprland_instance() {
        warn!("Hyprland does not seem to be running, settings will show defaults: {err:?}");
    }

    let app = adw::Application::new(Some(APP_ID), gio::ApplicationFlags::empty());
    app.connect_activate(ui::build_ui);
    app.run()
}
