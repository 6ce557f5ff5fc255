//! Line sources for the command loop
//!
//! A source yields one line at a time and reports end-of-input as `Ok(None)`,
//! separately from a failure of the source itself.

use std::io::BufRead;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::error::InputError;

pub trait LineSource {
    /// Read the next line without its line terminator
    fn read_line(&mut self) -> Result<Option<String>, InputError>;
}

/// Interactive terminal prompt with line editing and history
pub struct Prompt {
    editor: DefaultEditor,
    prompt: String,
}

impl Prompt {
    pub fn new(prompt: impl Into<String>) -> Result<Self, InputError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            prompt: prompt.into(),
        })
    }
}

impl LineSource for Prompt {
    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!("Failed to record history entry: {}", e);
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) => Ok(None),
            // Ctrl-C included: only Ctrl-D ends the session cleanly
            Err(e) => Err(e.into()),
        }
    }
}

/// Lines read from any buffered reader, e.g. piped stdin
///
/// Bytes that are not valid UTF-8 fail the source, they are not a usage error.
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for Lines<R> {
    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
