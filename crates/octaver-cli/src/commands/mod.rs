pub mod analyze;
pub mod generate;
pub mod info;
pub mod process;
