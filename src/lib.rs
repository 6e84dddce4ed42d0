//! websim - a simulated web terminal shell
//!
//! This library provides an in-memory filesystem, a fixed command set,
//! history recall and tab completion behind a single session object.

pub mod apt;
pub mod commands;
pub mod complete;
pub mod fs;
pub mod history;
pub mod shell;

pub use complete::Completion;
pub use fs::{FsError, MemFs};
pub use shell::{Output, Shell};
