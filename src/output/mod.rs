// Output module - terminal reporting

pub mod terminal;

pub use terminal::ConsoleReporter;
