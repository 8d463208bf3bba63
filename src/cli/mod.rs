//! Command-line interface.
//!
//! | Command   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `check`   | Validate the declaration, report all violations  |
//! | `emit`    | Print the generator-facing configuration as JSON |
//! | `resolve` | Show the sidebar scope for a page path           |

mod args;
pub mod check;
pub mod emit;
pub mod resolve;

pub use args::{Cli, Commands};
