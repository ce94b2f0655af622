//! Host runtime wire types: the request read from stdin and the denial written to stdout.

pub mod input;
pub mod output;

pub use input::{InvocationRequest, ToolInput};
pub use output::{HookOutput, HookSpecificOutput};
