use std::env;

use anyhow::{ensure, Context};
use git_version::git_version;
use hypr_control_ipc::INSTANCE_SIGNATURE_ENV;

pub fn version() -> String {
    format!(
        "{} ({})",
        env!("CARGO_PKG_VERSION"),
        git_version!(fallback = "unknown commit"),
    )
}

/// Checks that we were started inside a Hyprland session.
pub fn check_hyprland_instance() -> anyhow::Result<()> {
    let signature = env::var(INSTANCE_SIGNATURE_ENV)
        .with_context(|| format!("error reading {INSTANCE_SIGNATURE_ENV}"))?;
    ensure!(!signature.is_empty(), "{INSTANCE_SIGNATURE_ENV} is empty");
    Ok(())
}
