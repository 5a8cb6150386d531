//! Command implementations for the vuepack CLI.
//!
//! Each command takes its parsed arguments plus the environment snapshot taken
//! in `main`, so nothing below reads process state directly.

pub mod check;
pub mod print;
pub(crate) mod utils;
pub mod write;

pub use check::execute as check_execute;
pub use print::execute as print_execute;
pub use write::execute as write_execute;
