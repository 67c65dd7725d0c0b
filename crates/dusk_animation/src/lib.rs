//! Dusk Animation System
//!
//! Explicit per-frame interpolation of scalar values.
//!
//! # Features
//!
//! - **Timings**: single eased legs from the current value to a target
//! - **Oscillations**: alternating legs between two bounds, finite or infinite
//! - **Animated scalars**: a value plus the transition currently driving it
//! - **Scheduler**: owns scalars and advances them on a logical clock
//! - **Interruptible**: a new transition starts from the in-flight value

pub mod animated;
pub mod easing;
pub mod oscillation;
pub mod scheduler;
pub mod timing;

pub use animated::{AnimatedScalar, Transition, TransitionTarget};
pub use easing::{Easing, EasingParseError};
pub use oscillation::{Iterations, Oscillation};
pub use scheduler::{AnimationScheduler, ScalarId};
pub use timing::{Timing, TimingConfig};
