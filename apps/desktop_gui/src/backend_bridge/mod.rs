//! Bridge between the UI thread and the background effect runtime.

pub mod runtime;
