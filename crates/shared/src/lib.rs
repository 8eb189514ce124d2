pub mod content;
pub mod domain;
pub mod error;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
