pub mod completion;
pub mod parse;
pub mod repl;
pub mod run;
pub mod session;
