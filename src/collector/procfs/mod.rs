//! Parsers and collectors for the Linux `/proc` filesystem.

pub mod parser;
pub mod system;

pub use parser::ParseError;
pub use system::SystemCollector;
