pub mod archive;
pub mod find;
pub mod ls;
pub mod mkdir;
pub mod rm;
pub mod rmdir;
pub mod touch;
