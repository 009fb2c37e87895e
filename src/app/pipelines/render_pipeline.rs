use crate::core::animation::Animation;
use crate::core::controller::RuleController;
use crate::core::random::SeededRandom;
use crate::core::rules::find_rule;
use crate::core::{ConfigProvider, Frame, LSystemRule, Pipeline, RenderResult, Storage};
use crate::domain::model::{FrameManifest, FrameSummary, RenderedFrame};
use crate::render::segments_csv;
use crate::utils::error::{FractalError, Result};
use std::io::Write;
use std::sync::Arc;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const SEGMENTS_FILE: &str = "segments.csv";
pub const MANIFEST_FILE: &str = "manifest.json";

pub fn frame_file_name(iteration: usize) -> String {
    format!("frame_{:03}.svg", iteration)
}

/// Generates the frames of one rule, renders them to SVG and stores them.
pub struct RenderPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    rule: Arc<dyn LSystemRule>,
}

impl<S: Storage, C: ConfigProvider> RenderPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let rule = find_rule(config.rule_name()).ok_or_else(|| FractalError::UnknownRuleError {
            name: config.rule_name().to_string(),
        })?;
        Ok(Self {
            storage,
            config,
            rule,
        })
    }

    fn random(&self) -> SeededRandom {
        match self.config.seed() {
            Some(seed) => SeededRandom::with_seed(seed),
            None => SeededRandom::from_time(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RenderPipeline<S, C> {
    async fn generate(&self) -> Result<Vec<Frame>> {
        let iterations = self.config.iterations();
        let mut controller = RuleController::new();
        controller.select(self.rule.name())?;
        let mut animation = Animation::new(controller, self.random(), iterations);

        tracing::debug!(
            "Generating '{}' for {} iteration(s) with seed {}",
            self.rule.name(),
            iterations,
            animation.engine().random().seed()
        );

        if self.config.single_frame() {
            for _ in 0..iterations {
                animation.tick()?;
            }
            return Ok(vec![animation.frame()]);
        }

        let mut frames = Vec::with_capacity(iterations + 1);
        frames.push(animation.frame());
        for _ in 0..iterations {
            animation.tick()?;
            frames.push(animation.frame());
        }

        Ok(frames)
    }

    async fn render(&self, frames: Vec<Frame>) -> Result<RenderResult> {
        let renderer = self.config.renderer();
        let interpreter = self.config.interpreter_for(self.rule.as_ref());
        let start = (
            f64::from(renderer.width) / 2.0,
            f64::from(renderer.height),
        );

        let seed = frames.first().map(|f| f.seed).unwrap_or_default();
        let mut rendered = Vec::with_capacity(frames.len());
        let mut summaries = Vec::with_capacity(frames.len());
        let mut segments_output = segments_csv(&Default::default())?;

        for (index, frame) in frames.iter().enumerate() {
            let path = interpreter.interpret(&frame.instructions, start)?;
            let file_name = frame_file_name(frame.iteration);

            tracing::debug!(
                "Frame {}: {} symbols, {}",
                frame.iteration,
                frame.instructions.len(),
                path
            );

            rendered.push(RenderedFrame {
                file_name: file_name.clone(),
                svg: renderer.render_path(&path, frame.iteration, frame.seed)?,
            });
            summaries.push(FrameSummary {
                iteration: frame.iteration,
                file: file_name,
                symbols: frame.instructions.chars().count(),
                segments: path.line_count(),
                total_length: path.total_length(),
            });

            // 只輸出最後一幀的線段表
            if index + 1 == frames.len() {
                segments_output = segments_csv(&path)?;
            }
        }

        Ok(RenderResult {
            frames: rendered,
            segments_csv: segments_output,
            manifest: FrameManifest {
                rule: self.rule.name().to_string(),
                seed,
                generated_at: chrono::Utc::now(),
                frames: summaries,
            },
        })
    }

    async fn load(&self, result: RenderResult) -> Result<String> {
        let manifest = serde_json::to_string_pretty(&result.manifest)?;

        if let Some(archive_name) = self.config.archive_name() {
            tracing::debug!(
                "Creating ZIP file with {} files",
                result.frames.len() + 2
            );

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for frame in &result.frames {
                    zip.start_file(frame.file_name.as_str(), SimpleFileOptions::default())?;
                    zip.write_all(frame.svg.as_bytes())?;
                }

                zip.start_file(SEGMENTS_FILE, SimpleFileOptions::default())?;
                zip.write_all(result.segments_csv.as_bytes())?;

                zip.start_file(MANIFEST_FILE, SimpleFileOptions::default())?;
                zip.write_all(manifest.as_bytes())?;

                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(archive_name, &zip_data).await?;

            return Ok(format!("{}/{}", self.config.output_path(), archive_name));
        }

        for frame in &result.frames {
            self.storage
                .write_file(&frame.file_name, frame.svg.as_bytes())
                .await?;
        }
        self.storage
            .write_file(SEGMENTS_FILE, result.segments_csv.as_bytes())
            .await?;
        self.storage
            .write_file(MANIFEST_FILE, manifest.as_bytes())
            .await?;

        Ok(self.config.output_path().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::FractalConfig;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }

        async fn file_names(&self) -> Vec<String> {
            let files = self.files.lock().await;
            let mut names: Vec<String> = files.keys().cloned().collect();
            names.sort();
            names
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn config(rule: &str, iterations: usize) -> FractalConfig {
        let mut config = FractalConfig::default();
        config.animation.rule = rule.to_string();
        config.animation.iterations = iterations;
        config.random.seed = Some(42);
        config.output.path = "mem".to_string();
        config
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        let result = RenderPipeline::new(MockStorage::default(), config("dragon", 1));
        assert!(matches!(
            result.err(),
            Some(FractalError::UnknownRuleError { .. })
        ));
    }

    #[tokio::test]
    async fn test_generate_frames_from_axiom() {
        let pipeline =
            RenderPipeline::new(MockStorage::default(), config("binary-tree", 2)).unwrap();
        let frames = pipeline.generate().await.unwrap();

        let strings: Vec<&str> = frames.iter().map(|f| f.instructions.as_str()).collect();
        assert_eq!(
            strings,
            vec!["0", "F[+F0]-F0", "FF[+FFF[+F0]-F0]-FFF[+F0]-F0"]
        );
        assert!(frames.iter().all(|f| f.seed == 42 && f.rule == "binary-tree"));
    }

    #[tokio::test]
    async fn test_runaway_growth_stops_generation() {
        let pipeline =
            RenderPipeline::new(MockStorage::default(), config("koch-snowflake", 16)).unwrap();
        let err = pipeline.generate().await.unwrap_err();
        assert!(matches!(err, FractalError::LStringTooLongError { .. }));
    }

    #[tokio::test]
    async fn test_single_frame_mode() {
        let mut config = config("koch-snowflake", 3);
        config.animation.single_frame = true;
        let pipeline = RenderPipeline::new(MockStorage::default(), config).unwrap();

        let frames = pipeline.generate().await.unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].iteration, 3);
    }

    #[tokio::test]
    async fn test_load_loose_files() {
        let storage = MockStorage::default();
        let pipeline = RenderPipeline::new(storage.clone(), config("simple-plant", 1)).unwrap();

        let frames = pipeline.generate().await.unwrap();
        let rendered = pipeline.render(frames).await.unwrap();
        assert_eq!(rendered.manifest.frames.len(), 2);
        assert_eq!(rendered.manifest.frames[1].segments, 3);

        let location = pipeline.load(rendered).await.unwrap();
        assert_eq!(location, "mem");
        assert_eq!(
            storage.file_names().await,
            vec!["frame_000.svg", "frame_001.svg", "manifest.json", "segments.csv"]
        );

        let manifest: serde_json::Value =
            serde_json::from_slice(&storage.get_file(MANIFEST_FILE).await.unwrap()).unwrap();
        assert_eq!(manifest["rule"], "simple-plant");
        assert_eq!(manifest["seed"], 42);
    }

    #[tokio::test]
    async fn test_load_archive() {
        let storage = MockStorage::default();
        let mut config = config("stochastic-tree", 2);
        config.output.archive = true;
        let pipeline = RenderPipeline::new(storage.clone(), config).unwrap();

        let frames = pipeline.generate().await.unwrap();
        let rendered = pipeline.render(frames).await.unwrap();
        let location = pipeline.load(rendered).await.unwrap();
        assert_eq!(location, "mem/frames.zip");

        let zip_data = storage.get_file("frames.zip").await.unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "frame_000.svg",
                "frame_001.svg",
                "frame_002.svg",
                "manifest.json",
                "segments.csv"
            ]
        );
    }
}
