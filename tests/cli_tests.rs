//! Integration tests for the flightpath CLI
//!
//! These tests run the flightpath binary against temporary datasets.

mod cli;
