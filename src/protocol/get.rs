use crate::error::StoreError;
use crate::protocol::command::Command;
use crate::protocol::reply::{Reply, Usage};
use crate::store::Store;

/// GET command: GET key
#[derive(Debug, Clone, PartialEq)]
pub struct GetCmd {
    pub key: String,
}

impl GetCmd {
    /// Create a new GET command
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Parse GET command from the split line fields
    pub fn parse(fields: &[&str]) -> Command {
        match fields {
            [_, key] => Command::Get(GetCmd::new(*key)),
            _ => Command::Usage(Usage::Get),
        }
    }

    /// Execute the GET command
    pub fn execute(&self, store: &Store) -> Reply {
        match store.get(&self.key) {
            Ok(value) => Reply::Value(value),
            Err(StoreError::NotFound { key }) => Reply::NotFound(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cmd_parse() {
        assert_eq!(GetCmd::parse(&["GET", "mykey"]), Command::Get(GetCmd::new("mykey")));
    }

    #[test]
    fn test_get_cmd_parse_wrong_args() {
        assert_eq!(GetCmd::parse(&["GET"]), Command::Usage(Usage::Get));
        assert_eq!(
            GetCmd::parse(&["GET", "my", "key"]),
            Command::Usage(Usage::Get)
        );
    }

    #[test]
    fn test_get_cmd_execute() {
        let store = Store::new();
        store.put("testkey", "testvalue");

        let result = GetCmd::new("testkey").execute(&store);

        assert_eq!(result, Reply::Value("testvalue".to_string()));
    }

    #[test]
    fn test_get_cmd_execute_not_found() {
        let store = Store::new();
        let result = GetCmd::new("nonexistent").execute(&store);

        assert_eq!(result, Reply::NotFound("nonexistent".to_string()));
    }
}
