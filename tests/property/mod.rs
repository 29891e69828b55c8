//! Property-based tests for parsing and resolution laws

mod parse_laws;
mod resolution_laws;
