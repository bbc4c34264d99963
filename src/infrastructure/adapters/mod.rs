//! Front-ends other than HTTP

pub mod console;

pub use console::ConsoleAdapter;
