//! The data types the demo-parsing executable constructs and the analysis
//! reads. Everything here is built once per loaded demo by the parser and is
//! read-only to the analysis core.

pub mod math;
pub mod game;
pub mod demo;
