//! Shared command handling: Ctrl-C cancellation and following outcomes

mod interrupt;
mod route;

pub use interrupt::interruptible;
pub use route::{follow, login_hint};
