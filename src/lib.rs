pub mod bootstrap;
pub mod commands;
pub mod delegate;
pub mod paths;
pub mod ui;

// Re-export commonly used types
pub use delegate::{DelegateSource, Launcher, NodeSource};
