//! Prelude for common imports used throughout the JuXin crates

pub use crate::error::{Error, Result};
pub use tracing::{debug, error, info, instrument, trace, warn};
