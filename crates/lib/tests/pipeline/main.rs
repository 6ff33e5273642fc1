//! End-to-end pipeline tests against a simulated downstream project.

#![cfg(unix)]

mod common;
mod run_tests;
