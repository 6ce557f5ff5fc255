use crate::protocol::get::GetCmd;
use crate::protocol::put::PutCmd;
use crate::protocol::reply::{Reply, Usage};
use crate::store::Store;

/// Upper bound on fields split off a line: command, key and the rest as value
const MAX_FIELDS: usize = 3;

/// Commands accepted at the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// PUT key value
    Put(PutCmd),
    /// GET key
    Get(GetCmd),
    /// EXIT or QUIT
    Quit,
    /// PUT/GET with the wrong number of fields
    Usage(Usage),
    /// Unknown command, carries the trimmed line
    Invalid(String),
}

impl Command {
    /// Parse one input line into a Command
    ///
    /// Keys are assumed to contain no whitespace. This is not checked: the
    /// key ends at the first whitespace character and the rest is the value.
    pub fn parse(line: &str) -> Self {
        let input = line.trim();

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            return Command::Quit;
        }

        let fields: Vec<&str> = input.splitn(MAX_FIELDS, char::is_whitespace).collect();
        match fields[0].to_ascii_uppercase().as_str() {
            "PUT" => PutCmd::parse(&fields),
            "GET" => GetCmd::parse(&fields),
            _ => Command::Invalid(input.to_string()),
        }
    }

    /// Execute the command on the given store
    ///
    /// Returns `None` for `Quit`, which produces no output.
    pub fn execute(&self, store: &Store) -> Option<Reply> {
        match self {
            Command::Put(cmd) => Some(cmd.execute(store)),
            Command::Get(cmd) => Some(cmd.execute(store)),
            Command::Quit => None,
            Command::Usage(usage) => Some(Reply::Usage(*usage)),
            Command::Invalid(line) => Some(Reply::Invalid(line.clone())),
        }
    }

    /// Short name for log lines; never includes the value
    pub fn name(&self) -> &'static str {
        match self {
            Command::Put(_) => "PUT",
            Command::Get(_) => "GET",
            Command::Quit => "QUIT",
            Command::Usage(Usage::Put) => "PUT (usage)",
            Command::Usage(Usage::Get) => "GET (usage)",
            Command::Invalid(_) => "INVALID",
        }
    }
}
