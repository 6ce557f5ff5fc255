use crate::protocol::command::Command;
use crate::protocol::reply::{Reply, Usage};
use crate::store::Store;

/// PUT command: PUT key value
///
/// The value is the remainder of the line after the key, so it may contain
/// whitespace. Keys cannot.
#[derive(Debug, Clone, PartialEq)]
pub struct PutCmd {
    pub key: String,
    pub value: String,
}

impl PutCmd {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse PUT command from the split line fields
    pub fn parse(fields: &[&str]) -> Command {
        match fields {
            [_, key, value] => Command::Put(PutCmd::new(*key, *value)),
            _ => Command::Usage(Usage::Put),
        }
    }

    /// Execute the PUT command
    pub fn execute(&self, store: &Store) -> Reply {
        store.put(self.key.as_str(), self.value.as_str());
        Reply::Stored {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_cmd_parse_success() {
        let cmd = PutCmd::parse(&["PUT", "mykey", "my value"]);
        assert_eq!(cmd, Command::Put(PutCmd::new("mykey", "my value")));
    }

    #[test]
    fn test_put_cmd_parse_wrong_args() {
        assert_eq!(PutCmd::parse(&["PUT", "key"]), Command::Usage(Usage::Put));
        assert_eq!(PutCmd::parse(&["PUT"]), Command::Usage(Usage::Put));
    }

    #[test]
    fn test_put_cmd_execute() {
        let store = Store::new();
        let result = PutCmd::new("key", "value").execute(&store);

        assert_eq!(
            result,
            Reply::Stored {
                key: "key".to_string(),
                value: "value".to_string()
            }
        );
        assert_eq!(store.get("key"), Ok("value".to_string()));
    }
}
