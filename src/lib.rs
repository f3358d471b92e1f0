//! The analysis library that the demo-parsing executable links against.
//!
//! The executable decodes a `.dem` file into [`DemoData`] and hands it (or
//! single ticks during a scan) to the entry points in [`analysis`]:
//! [`analyze_demo`], [`analyze_tick`] and [`generate_grouping`]. Everything in
//! here is a synchronous pass over already-decoded, read-only data; parsing
//! and file handling stay on the executable's side of the boundary.

pub mod types;
pub mod analysis;

pub use types::demo::{DemoData, TickData};
pub use types::game::{Class, Round, Team};
pub use types::game::entities::Player;

pub use analysis::{analyze_demo, analyze_tick, generate_grouping};
pub use analysis::grouping::GroupingType;
