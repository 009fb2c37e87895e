pub mod animation;
pub mod controller;
pub mod engine;
pub mod fractal;
pub mod random;
pub mod rules;
pub mod symbols;
pub mod turtle;

pub use crate::domain::model::{Frame, RenderResult};
pub use crate::domain::ports::{ConfigProvider, LSystemRule, Pipeline, Storage};
pub use crate::utils::error::Result;
