//! Domain types for the timetable generator.
//!
//! These are the immutable value records the upstream loaders construct and
//! the ordering/rendering core consumes read-only. The core derives only
//! the station order and the output rows; it creates no persistent entities
//! of its own.

mod commands;
mod consist;
mod error;
mod station;
mod stop;
mod timetable;
mod trip;

pub use commands::CommandOverrides;
pub use consist::ConsistComponent;
pub use error::DomainError;
pub use station::Station;
pub use stop::Stop;
pub use timetable::{SpeedUnit, Timetable};
pub use trip::{Trip, TripFields};
