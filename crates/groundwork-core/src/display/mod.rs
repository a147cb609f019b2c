//! Display formatting for quotes, jobs and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get newtype wrappers so the same data
//! can be formatted differently by context. Everything renders as markdown,
//! which the CLI passes through its terminal renderer.
//!
//! Nothing in here feeds back into pricing or storage: currency and unit
//! strings are produced only at this layer.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod money;
pub mod results;

pub use collections::{JobBoard, Jobs};
pub use datetime::LocalDateTime;
pub use money::Currency;
pub use results::{ClearResult, CreateResult, TransitionResult};
