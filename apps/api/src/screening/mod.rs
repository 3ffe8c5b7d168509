// Screening conversation: field intake, technical questions, answer collection.
// The engine is the only writer of `Session`; handlers and views read it.

pub mod engine;
pub mod fields;
pub mod handlers;
pub mod report;
pub mod session;
pub mod store;
pub mod validation;
pub mod view;
