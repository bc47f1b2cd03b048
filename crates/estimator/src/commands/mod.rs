//! Command implementations for the estimator
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check;
mod estimate;
mod list;
mod weapons;

pub use check::Check;
pub use estimate::Estimate;
pub use list::List;
pub use weapons::Weapons;
