//! Test modules for the order book core.

#[cfg(test)]
mod test_helpers;

mod validation_tests;
