// Adapters layer: concrete implementations of the domain ports.

pub mod console;
pub mod memory;

pub use console::ConsoleNotificationService;
pub use memory::{InMemoryRaceRepository, InMemoryRunnerRepository};
