//! Helper for blocking communication with Hyprland through `hyprctl`.

use std::env;
use std::io;
use std::process::{Command, Stdio};

use crate::Request;

/// Name of the environment variable overriding the control executable.
pub const PROGRAM_ENV: &str = "HYPR_CONTROL_HYPRCTL";

/// Control executable used when [`PROGRAM_ENV`] is not set.
pub const DEFAULT_PROGRAM: &str = "hyprctl";

/// Name of the environment variable Hyprland sets for processes running inside it.
pub const INSTANCE_SIGNATURE_ENV: &str = "HYPRLAND_INSTANCE_SIGNATURE";

/// Something that can carry a [`Request`] to Hyprland and bring back the textual reply.
pub trait Transport {
    /// Runs the control executable with `args` and returns everything it printed to stdout.
    fn call(&self, args: &[String]) -> io::Result<String>;

    /// Name or path of the control executable, as it should appear in spawned bindings.
    fn program(&self) -> &str {
        DEFAULT_PROGRAM
    }

    /// Sends a request and returns the raw reply.
    fn send(&self, request: &Request) -> io::Result<String> {
        let args = request.to_args();
        trace!("{} {}", self.program(), args.join(" "));
        self.call(&args)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn call(&self, args: &[String]) -> io::Result<String> {
        (**self).call(args)
    }

    fn program(&self) -> &str {
        (**self).program()
    }
}

/// [`Transport`] that spawns the `hyprctl` executable for every request.
///
/// Each call blocks until the process exits. The exit status is logged but otherwise ignored:
/// `hyprctl` reports most failures on stdout, and callers decide what an unexpected reply means.
#[derive(Debug, Clone)]
pub struct Hyprctl {
    program: String,
}

impl Hyprctl {
    /// Uses the given executable name or path.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Uses the executable from [`PROGRAM_ENV`], falling back to [`DEFAULT_PROGRAM`].
    pub fn from_env() -> Self {
        match env::var(PROGRAM_ENV) {
            Ok(program) if !program.is_empty() => Self::new(program),
            _ => Self::new(DEFAULT_PROGRAM),
        }
    }
}

impl Default for Hyprctl {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Transport for Hyprctl {
    fn call(&self, args: &[String]) -> io::Result<String> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        if !output.status.success() {
            debug!(
                "{} {} exited with {}",
                self.program,
                args.join(" "),
                output.status
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn program(&self) -> &str {
        &self.program
    }
}
