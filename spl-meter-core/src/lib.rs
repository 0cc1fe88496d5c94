//! Turn blocks of raw microphone ADC codes into a smoothed, A-weighted sound pressure level.
//!
//! Sample source -> [handoff::BlockHandoff] -> [audio::SplMeter::process] -> [audio::SplMeter::smoothed_level] -> transport
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod audio;
pub mod config;
pub mod errors;
pub mod handoff;
pub mod logging;
#[cfg(any(feature = "std", feature = "embassy"))]
pub mod rate;
pub mod windows;
