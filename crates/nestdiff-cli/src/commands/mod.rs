pub mod covers;
pub mod diff;
pub mod paths;
