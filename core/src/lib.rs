// src/lib.rs

//! uitour: the orchestration engine behind guided, step-by-step UI walkthroughs.
//!
//! A tour is an ordered sequence of highlighted UI elements ("steps"), shown and hidden
//! in turn:
//!  - Steps register and deregister themselves as the host UI mounts and unmounts them.
//!  - Playback is `Off`, `On` or `Paused`, driven by `start`/`end`/`pause`/`resume`.
//!  - `next`/`prev` run a strictly sequential async pipeline of hooks, element
//!    notifications, backdrop updates and a render yield point.
//!  - Steps that only exist after a navigation are reached with `wait_for`.
//!
//! The host supplies three collaborators: an `Element` per step, the shared `Backdrop`
//! and a `Scheduler` providing the render yield point.

pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod pipeline;
pub mod registry;
pub mod tour;

// --- Re-exports for the Public API ---

pub use crate::core::control::{Direction, TourEvent, TourStatus};
pub use crate::core::hook::{Hook, HookFuture};
pub use crate::core::step::{Step, StepBuilder, StepKey};

pub use crate::config::{ConfigProvider, OptionValue, Options, TourConfig};
pub use crate::host::{Backdrop, DetachedTask, Element, ElementRef, Scheduler, TokioScheduler};

pub use crate::error::{TourError, TourResult};

// The engine itself
pub use crate::tour::Tour;

/*
    Typical wiring:
    1. Build a `Tour` from a `ConfigProvider` (global defaults), a `Backdrop` and a
       `Scheduler`, then `init` it with per-instance overrides (tour-level hooks etc.).
    2. As elements mount, build a `Step` per element and `add_step` it; `remove_step`
       when it unmounts, `reorder_step` after changing its order.
    3. `start().await`, then call `next().await` / `prev().await` from the UI controls.
    4. For a step behind a navigation, declare `next_step("id")` on the step before it and,
       in its `onNext` hook, call `tour.wait_for("id")` before navigating.
*/
