//! Command implementations for the termux-setup CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod suite;
pub mod version;
