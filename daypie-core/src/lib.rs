//! Core types for daypie.
//!
//! This crate turns a day's scheduled tasks into a gapless, ordered partition
//! of the 24-hour cycle, ready to be drawn as sectors of a pie:
//! - `time` converts between "HH:MM" text, minute offsets and "START-END" keys
//! - `partition` builds the ordered segment sequence for one day
//! - `store` is the capability that supplies a day's task records

pub mod agenda;
pub mod config;
pub mod constants;
pub mod error;
pub mod interval;
pub mod partition;
pub mod store;
pub mod time;

pub use agenda::agenda_lines;
pub use error::{DayPieError, DayPieResult};
pub use interval::{DayKey, Interval, TaskRecord, TaskSpan};
pub use partition::{Fill, Segment, build_partition, prepare_intervals};
pub use store::{IntervalStore, MemoryStore, ScheduleFile};
