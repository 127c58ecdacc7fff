//! Timetable grid generator.
//!
//! Turns a set of scheduled train trips into a single tab-delimited
//! timetable document with trips as columns and stations as rows. The two
//! interesting pieces are the station order resolver, which folds every
//! trip's stop sequence into one shared row order, and the renderer, which
//! projects the trips onto that order as the fixed grid the timetable
//! format expects.

pub mod domain;
pub mod input;
pub mod order;
pub mod render;
pub mod writer;
