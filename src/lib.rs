pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use app::pipelines::RenderPipeline;
pub use config::FractalConfig;
pub use core::{engine::LSystemEngine, fractal::FractalEngine};
pub use utils::error::{FractalError, Result};
