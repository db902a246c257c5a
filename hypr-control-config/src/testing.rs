use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use hypr_control_ipc::Transport;

/// Transport replaying canned replies and recording every command it was asked to run.
///
/// Commands are matched on their space-joined arguments. `keyword` commands without a scripted
/// reply answer `ok`; anything else without one fails like a missing executable.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: HashMap<String, String>,
    failing: bool,
    calls: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, command: &str, reply: &str) -> Self {
        self.replies.insert(command.to_owned(), reply.to_owned());
        self
    }

    /// Makes every call fail.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Returns and forgets the commands recorded so far.
    pub fn take_calls(&self) -> Vec<String> {
        self.calls.take()
    }
}

impl Transport for ScriptedTransport {
    fn call(&self, args: &[String]) -> io::Result<String> {
        let command = args.join(" ");
        self.calls.borrow_mut().push(command.clone());

        if self.failing {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }

        if let Some(reply) = self.replies.get(&command) {
            return Ok(reply.clone());
        }

        if args.first().is_some_and(|arg| arg == "keyword") {
            return Ok(String::from("ok"));
        }

        Err(io::Error::from(io::ErrorKind::NotFound))
    }
}
