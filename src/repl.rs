use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::ReplError;
use crate::input::LineSource;
use crate::protocol::{Command, Reply};
use crate::store::Store;

/// Interactive command loop over a shared store
pub struct Repl {
    store: Arc<Store>,
}

impl Repl {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Process one line and return the reply, `None` when the line asks to quit
    fn process_line(&self, line: &str) -> Option<Reply> {
        let command = Command::parse(line);
        debug!("Received command: {}", command.name());
        command.execute(&self.store)
    }

    fn write_reply<W: Write>(out: &mut W, reply: &Reply) -> Result<(), ReplError> {
        out.write_all(reply.encode().as_bytes())
            .and_then(|_| out.flush())
            .map_err(ReplError::Output)
    }

    /// Read, execute and answer lines until quit or end-of-input
    ///
    /// Returns `Ok(())` on a clean finish and an error when the input source
    /// or the output stream fails.
    pub fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<(), ReplError>
    where
        S: LineSource,
        W: Write,
    {
        info!("Command loop started");

        loop {
            let line = match source.read_line()? {
                Some(line) => line,
                None => {
                    info!("End of input");
                    break;
                }
            };

            match self.process_line(&line) {
                Some(reply) => Self::write_reply(out, &reply)?,
                None => {
                    info!("Quit requested");
                    break;
                }
            }
        }

        if self.store.is_empty() {
            info!("Command loop ended, store is empty");
        } else {
            info!("Command loop ended, {} entries in store", self.store.len());
        }
        Ok(())
    }
}
