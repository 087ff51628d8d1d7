pub mod control;
pub mod hook;
pub mod shared;
pub mod step;

// Re-export key types for easier access from other modules (and lib.rs)
pub use control::{Direction, TourEvent, TourStatus};
pub use hook::{Hook, HookFuture};
pub use shared::Shared;
pub use step::{Step, StepBuilder, StepKey};
