use std::fmt::Write;

/// Reply to a single input line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
  /// A PUT was applied
  Stored { key: String, value: String },
  /// Value returned by a GET
  Value(String),
  /// GET of a key with no entry
  NotFound(String),
  /// Malformed PUT/GET, carries the expected syntax
  Usage(Usage),
  /// First token is not a known command; carries the whole line
  Invalid(String),
}

/// Commands that have a fixed argument count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
  Put,
  Get,
}

impl Usage {
  fn syntax(self) -> &'static str {
    match self {
      Usage::Put => "Invalid PUT: Syntax is PUT <KEY> <VALUE>",
      Usage::Get => "Invalid GET: Syntax is GET <KEY>",
    }
  }
}

impl Reply {
  /// Render the reply as the text written to the user, one `\n` per line
  pub fn encode(&self) -> String {
    let mut buf = String::new();
    self.encode_to(&mut buf);
    buf
  }

  fn encode_to(&self, buf: &mut String) {
    match self {
      Reply::Stored { key, value } => {
        let _ = writeln!(buf, "Success: {}=\"{}\"", key, value);
      }
      Reply::Value(value) => {
        buf.push_str(value);
        buf.push('\n');
      }
      Reply::NotFound(key) => {
        let _ = writeln!(buf, "Key {} not found in cache", key);
      }
      Reply::Usage(usage) => {
        buf.push_str(usage.syntax());
        buf.push('\n');
        buf.push_str("Keys must not contain spaces\n");
      }
      Reply::Invalid(line) => {
        let _ = writeln!(buf, "Invalid command: \"{}\"", line);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_encode_stored() {
    let reply = Reply::Stored {
      key: "foo".to_string(),
      value: "bar baz".to_string(),
    };
    assert_eq!(reply.encode(), "Success: foo=\"bar baz\"\n");
  }

  #[test]
  fn test_encode_value() {
    assert_eq!(Reply::Value("bar".to_string()).encode(), "bar\n");
    assert_eq!(Reply::Value(String::new()).encode(), "\n");
  }

  #[test]
  fn test_encode_not_found() {
    let reply = Reply::NotFound("missing".to_string());
    assert_eq!(reply.encode(), "Key missing not found in cache\n");
  }

  #[test]
  fn test_encode_usage() {
    assert_eq!(
      Reply::Usage(Usage::Put).encode(),
      "Invalid PUT: Syntax is PUT <KEY> <VALUE>\nKeys must not contain spaces\n"
    );
    assert_eq!(
      Reply::Usage(Usage::Get).encode(),
      "Invalid GET: Syntax is GET <KEY>\nKeys must not contain spaces\n"
    );
  }

  #[test]
  fn test_encode_invalid() {
    let reply = Reply::Invalid("DEL foo".to_string());
    assert_eq!(reply.encode(), "Invalid command: \"DEL foo\"\n");
  }
}
