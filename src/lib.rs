//! Report the apparent size of files and directories.
//!
//! [`scanner::Sizer`] walks one path and sums file sizes,
//! [`utils::format_size`] renders byte counts and [`reporter::Reporter`]
//! ties them together over a list of paths.

pub mod cli;
pub mod reporter;
pub mod scanner;
pub mod types;
pub mod utils;
