pub mod cd;
pub mod pwd;
