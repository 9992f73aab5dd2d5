#![warn(clippy::all)]

mod driver;
mod engine;
mod export;
mod grid;
mod gui;
mod pattern;
mod stats;
mod utils;

pub use driver::{Driver, RunSettings, RunSummary};
pub use engine::GridEngine;
pub use export::{frame_image, save_gif, write_gif};
pub use grid::Grid;
pub use gui::App;
pub use pattern::Pattern;
pub use stats::{save_csv, write_csv, PopulationStats};
pub use utils::{Config, Error, Result};
