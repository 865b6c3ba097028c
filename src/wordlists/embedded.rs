//! Embedded word lists
//!
//! Generated by `build.rs` from the files under `data/`.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
