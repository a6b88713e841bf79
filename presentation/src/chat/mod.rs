//! Interactive chat REPL and profile form

pub mod form;
pub mod repl;

pub use repl::ChatRepl;
