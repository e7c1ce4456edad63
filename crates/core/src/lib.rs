//! A mixed-radix counter over named dials.
//!
//! Each dial holds a finite, ordered list of allowed values. An [`Odometer`]
//! enumerates every combination of dial values exactly once by incrementing
//! the least significant dial and carrying into more significant dials as
//! they wrap, like the wheels of a car's odometer.
//!
//! - [`Dial`] — a named value list with a cursor and a carrying increment
//! - [`Layout`] — ordered dial definitions, most significant first
//! - [`Combination`] — an ordered record of dial names to values
//! - [`Odometer`] — a stateful, restartable enumerator over a set of dials
//! - [`next_combination`] — a pure step function for callers that keep their
//!   own state, supporting partially specified combinations
//! - [`sweep`] — drives an odometer while reporting to an [`Observer`]

mod combination;
mod dial;
mod layout;
mod observer;
mod odometer;
mod step;

pub mod sweep;

pub use combination::Combination;
pub use dial::{Dial, DialError};
pub use layout::Layout;
pub use observer::Observer;
pub use odometer::{Odometer, OdometerError};
pub use step::{StepError, next_combination};
