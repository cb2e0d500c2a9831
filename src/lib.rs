#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod location;
pub mod model;
pub mod submit;
pub mod tui;
