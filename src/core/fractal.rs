use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct FractalEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FractalEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("🌱 Starting L-system run...");

        // Generate
        let frames = self.pipeline.generate().await?;
        tracing::info!("Generated {} frame(s)", frames.len());

        // Render
        let rendered = self.pipeline.render(frames).await?;
        tracing::info!("Rendered {} SVG document(s)", rendered.frames.len());

        // Load
        let output_path = self.pipeline.load(rendered).await?;
        tracing::info!(
            "📁 Output saved to: {} ({:?})",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}
