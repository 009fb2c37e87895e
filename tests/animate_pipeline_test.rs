use fractal::{FractalConfig, FractalEngine, LocalStorage, RenderPipeline};
use std::io::Read;
use tempfile::TempDir;

fn config(rule: &str, iterations: usize, output_path: &str) -> FractalConfig {
    let mut config = FractalConfig::default();
    config.animation.rule = rule.to_string();
    config.animation.iterations = iterations;
    config.random.seed = Some(1234);
    config.output.path = output_path.to_string();
    config
}

#[tokio::test]
async fn test_end_to_end_animation_to_directory() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RenderPipeline::new(storage, config("koch-snowflake", 3, &output_path))?;
    let location = FractalEngine::new(pipeline).run().await?;
    assert_eq!(location, output_path);

    for iteration in 0..=3 {
        let frame = temp_dir.path().join(format!("frame_{:03}.svg", iteration));
        assert!(frame.exists(), "missing {}", frame.display());
        let svg = std::fs::read_to_string(frame)?;
        assert!(svg.contains(&format!("Iteration: {}", iteration)));
        assert!(svg.contains("Seed: 1234"));
    }

    // Koch: 3 sides × 4^3 segments on the last frame
    let csv_content = std::fs::read_to_string(temp_dir.path().join("segments.csv"))?;
    let mut lines = csv_content.lines();
    assert_eq!(lines.next(), Some("x1,y1,x2,y2"));
    assert_eq!(lines.count(), 3 * 64);

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join("manifest.json"))?)?;
    assert_eq!(manifest["rule"], "koch-snowflake");
    assert_eq!(manifest["frames"].as_array().map(Vec::len), Some(4));
    assert_eq!(manifest["frames"][0]["segments"], 3);

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_animation_to_archive() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = config("parametric-tree", 2, &output_path);
    config.output.archive = true;
    config.output.archive_name = "tree.zip".to_string();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RenderPipeline::new(storage, config)?;
    let location = FractalEngine::new(pipeline).run().await?;
    assert_eq!(location, format!("{}/tree.zip", output_path));

    let file = std::fs::File::open(temp_dir.path().join("tree.zip"))?;
    let mut archive = zip::ZipArchive::new(file)?;
    assert_eq!(archive.len(), 5);

    let mut svg = String::new();
    archive.by_name("frame_002.svg")?.read_to_string(&mut svg)?;
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Iteration: 2"));

    Ok(())
}

#[tokio::test]
async fn test_same_seed_renders_same_stochastic_tree() -> anyhow::Result<()> {
    let first = TempDir::new()?;
    let second = TempDir::new()?;

    for dir in [&first, &second] {
        let output_path = dir.path().to_str().unwrap().to_string();
        let storage = LocalStorage::new(output_path.clone());
        let pipeline = RenderPipeline::new(storage, config("stochastic-tree", 4, &output_path))?;
        FractalEngine::new(pipeline).run().await?;
    }

    let a = std::fs::read_to_string(first.path().join("segments.csv"))?;
    let b = std::fs::read_to_string(second.path().join("segments.csv"))?;
    assert_eq!(a, b);

    Ok(())
}
