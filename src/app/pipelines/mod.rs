pub mod render_pipeline;

pub use render_pipeline::RenderPipeline;
