//! Error reporting.

use std::fmt::Display;

pub use anyhow::{anyhow, Result};
pub use log::*;

pub trait ResultNote<R> {
    /// Note which scripted operation produced an error.
    fn with_op_context<O: Display>(self, op: O) -> Result<R>;
}

impl<R, E> ResultNote<R> for Result<R, E>
where
    E: Into<anyhow::Error> + Display,
{
    fn with_op_context<O: Display>(self, op: O) -> Result<R> {
        self.map_err(|e| anyhow!("operation {} failed: {}", op, e))
    }
}
