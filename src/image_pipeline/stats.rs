//! Pixel statistics module
//!
//! Reduces a decoded capture to the mean intensity of each colour channel.

mod collector;
pub mod types;

pub use collector::collect_channel_averages;
pub use types::{Channel, ChannelAverages};
