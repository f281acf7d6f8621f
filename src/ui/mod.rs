pub mod commands;

pub use commands::parse_line;
