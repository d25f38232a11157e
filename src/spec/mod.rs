//! The JSON spec describing which INI file to create and what to ask.
//!
//! Shape of the argument:
//!
//! ```json
//! {
//!     "file": "conf/database.ini",
//!     "input": {
//!         "host": { "question": "MySQL hostname:" },
//!         "port": { "question": "MySQL port (default is 3306):", "default": "3306" }
//!     }
//! }
//! ```
//!
//! Field options are resolved to their defaults while decoding, so the rest
//! of the crate only sees [`Field`] values with a concrete question and default.

mod model;
mod operations;
pub mod render;


pub use model::{Field, Fields, RawSpec};
pub use render::{Answer, LINE_ENDING, render};
