use crate::core::turtle::TurtleInterpreter;
use crate::core::{ConfigProvider, LSystemRule};
use crate::render::Renderer;
use crate::utils::error::{FractalError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_RULE: &str = "koch-snowflake";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    pub render: RenderConfig,
    pub animation: AnimationConfig,
    pub random: RandomConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub step_size: f64,
    /// 覆蓋規則自帶的轉角
    pub angle_degrees: Option<f64>,
    pub stroke_width: f64,
    pub padding: f64,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let renderer = Renderer::default();
        let interpreter = TurtleInterpreter::default();
        Self {
            width: renderer.width,
            height: renderer.height,
            step_size: interpreter.step_size(),
            angle_degrees: None,
            stroke_width: renderer.stroke_width,
            padding: renderer.padding,
            background: renderer.background,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub rule: String,
    pub iterations: usize,
    /// 只輸出最後一個 iteration
    pub single_frame: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rule: DEFAULT_RULE.to_string(),
            iterations: crate::core::animation::DEFAULT_MAX_ITERATIONS,
            single_frame: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub archive: bool,
    pub archive_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./output".to_string(),
            archive: false,
            archive_name: "frames.zip".to_string(),
        }
    }
}

impl FractalConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FractalError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FractalError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FRACTAL_SEED})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FractalError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("animation.rule", &self.animation.rule)?;
        validation::validate_range("animation.iterations", self.animation.iterations, 0, 16)?;

        validation::validate_positive_number("render.width", self.render.width as usize, 1)?;
        validation::validate_positive_number("render.height", self.render.height as usize, 1)?;
        validation::validate_range("render.step_size", self.render.step_size, 0.01, 10_000.0)?;
        validation::validate_range("render.stroke_width", self.render.stroke_width, 0.1, 100.0)?;
        validation::validate_range("render.padding", self.render.padding, 0.0, 10_000.0)?;
        if let Some(angle) = self.render.angle_degrees {
            validation::validate_range("render.angle_degrees", angle, -360.0, 360.0)?;
        }
        validation::validate_hex_color("render.background", &self.render.background)?;

        validation::validate_path("output.path", &self.output.path)?;
        if self.output.archive {
            validation::validate_path("output.archive_name", &self.output.archive_name)?;
        }

        Ok(())
    }

    pub fn renderer(&self) -> Renderer {
        Renderer {
            width: self.render.width,
            height: self.render.height,
            stroke_width: self.render.stroke_width,
            padding: self.render.padding,
            background: self.render.background.clone(),
        }
    }

    pub fn interpreter_for(&self, rule: &dyn LSystemRule) -> TurtleInterpreter {
        let angle = self.render.angle_degrees.unwrap_or_else(|| rule.angle_degrees());
        TurtleInterpreter::new(angle, self.render.step_size)
    }
}

impl ConfigProvider for FractalConfig {
    fn rule_name(&self) -> &str {
        &self.animation.rule
    }

    fn iterations(&self) -> usize {
        self.animation.iterations
    }

    fn single_frame(&self) -> bool {
        self.animation.single_frame
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn archive_name(&self) -> Option<&str> {
        self.output.archive.then_some(self.output.archive_name.as_str())
    }

    fn seed(&self) -> Option<u64> {
        self.random.seed
    }

    fn renderer(&self) -> Renderer {
        FractalConfig::renderer(self)
    }

    fn interpreter_for(&self, rule: &dyn LSystemRule) -> TurtleInterpreter {
        FractalConfig::interpreter_for(self, rule)
    }
}

impl Validate for FractalConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
