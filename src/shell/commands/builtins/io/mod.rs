pub mod clear;
pub mod echo;
pub mod help;
