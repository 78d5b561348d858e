//! gaitview: load one gait-trial recording (16-channel inertial signal plus a
//! metadata record with detected footstep intervals), dump a text report and
//! render one annotated SVG plot per requested channel.

pub mod app;
pub mod channel;
pub mod cli;
pub mod config;
pub mod error;
pub mod plot;
pub mod report;
pub mod trial;
