pub mod monitor;
pub mod process;
