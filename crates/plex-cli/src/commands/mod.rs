//! CLI command implementations.

mod check;
mod eval;
mod render;

pub use check::{run_check, CheckArgs};
pub use eval::{run_eval, EvalArgs};
pub use render::{run_render, RenderArgs};
