//! Command-level tests

mod test_create;
