// uitour/src/host/mod.rs

//! Collaborators owned by the host UI and invoked by the engine at defined pipeline points.

pub mod backdrop;
pub mod element;
pub mod scheduler;

pub use backdrop::Backdrop;
pub use element::{Element, ElementRef};
pub use scheduler::{DetachedTask, Scheduler, TokioScheduler};
