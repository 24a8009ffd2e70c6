//! Dispatcher Module
//!
//! Executes parsed commands against the store.
//!
//! ## Responsibilities
//! - Map each command to exactly one store call
//! - Turn the outcome into a `Response`, including in-band errors
//!
//! | Command | Store call      | Success           | Failure         |
//! |---------|-----------------|-------------------|-----------------|
//! | SET     | `set`           | `OK`              | -               |
//! | GET     | `get`           | `OK <value>`      | `KEY_NOT_FOUND` |
//! | DELETE  | `remove`        | `OK`              | `KEY_NOT_FOUND` |
//! | EXISTS  | `exists`        | `OK 1` / `OK 0`   | -               |
//! | invalid | none            | -                 | parser's code   |

use crate::protocol::{Command, ErrorCode, Response};
use crate::store::Store;

/// Execute a command against `store`
pub fn execute(store: &mut Store, command: Command) -> Response {
    match command {
        Command::Set { key, value } => {
            store.set(key, value);
            Response::ok()
        }
        Command::Get { key } => match store.get(&key) {
            Some(value) => Response::ok_with(value),
            None => Response::error(ErrorCode::KeyNotFound),
        },
        Command::Delete { key } => {
            if store.remove(&key) {
                Response::ok()
            } else {
                Response::error(ErrorCode::KeyNotFound)
            }
        }
        Command::Exists { key } => {
            let flag: &[u8] = if store.exists(&key) { b"1" } else { b"0" };
            Response::ok_with(flag)
        }
        Command::Invalid(code) => Response::error(code),
    }
}

/// Parse one non-empty line and execute it
pub fn execute_line(store: &mut Store, line: &[u8]) -> Response {
    let command = Command::parse(line);
    tracing::trace!("Executing {}", command.verb());
    execute(store, command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_line_round_trip() {
        let mut store = Store::new();

        assert_eq!(execute_line(&mut store, b"SET name Alice"), Response::ok());
        assert_eq!(
            execute_line(&mut store, b"GET name"),
            Response::ok_with(&b"Alice"[..])
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_invalid_lines_do_not_touch_store() {
        let mut store = Store::new();
        store.set(b"k".to_vec(), b"v".to_vec());

        assert_eq!(
            execute_line(&mut store, b"SET k"),
            Response::error(ErrorCode::MissingArguments)
        );
        assert_eq!(
            execute_line(&mut store, b"DROP k"),
            Response::error(ErrorCode::InvalidCommand)
        );
        assert_eq!(store.get(b"k"), Some(&b"v"[..]));
    }
}
