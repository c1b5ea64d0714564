pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod physics;
pub mod render;
pub mod scale;
pub mod shapes;
pub mod units;
