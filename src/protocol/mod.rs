//! Prompt command protocol
//!
//! This module turns an input line into a `Command` and the result of
//! running it against the store into a `Reply`.

pub mod command;
pub mod get;
pub mod put;
pub mod reply;

pub use command::Command;
pub use reply::Reply;
