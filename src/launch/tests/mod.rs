//! Unit tests for launch resolution.

mod helpers;

mod errors;
