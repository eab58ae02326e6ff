//! Event handlers for feed activity

pub mod composite;
pub mod console;

// Re-export for convenience
pub use composite::CompositeEventHandler;
pub use console::ConsoleEventHandler;
