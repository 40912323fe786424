//! Helper for the Advent of Code archive: scaffolds new challenge files and
//! downloads puzzle inputs into the data directory.

pub mod banner;
pub mod cli;
pub mod download;
pub mod event;
pub mod exitcode;
pub mod prompt;
pub mod scaffold;
pub mod session;
