//! Revstamp Control - command-line client for the revision annotator.
//!
//! Runs the same annotation the build hook performs, for CI scripts and
//! for checking a working tree before a docs build.

pub mod commands;
