pub mod toml_config;

pub use toml_config::FractalConfig;

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fractal", version)]
#[command(about = "L-system fractal generator")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the available rules
    List,

    /// Show the axiom and productions of a rule
    Describe { rule: String },

    /// Print the L-system string after N iterations
    Generate(RunArgs),

    /// Render one iteration to an SVG file
    Render {
        #[command(flatten)]
        run: RunArgs,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render every iteration from the axiom up to N
    Animate {
        #[command(flatten)]
        run: RunArgs,

        /// Output directory (overrides [output] path)
        #[arg(short, long)]
        output: Option<String>,

        /// Bundle the frames into a single ZIP archive
        #[arg(long)]
        zip: bool,
    },

    /// Write the line segments of one iteration as CSV
    Export {
        #[command(flatten)]
        run: RunArgs,

        #[arg(short, long)]
        output: PathBuf,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Rule name, see `fractal list`
    #[arg(short, long)]
    pub rule: Option<String>,

    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// Seed for stochastic rules (default: time based)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Turn angle in degrees, overrides the rule's own
    #[arg(long, allow_hyphen_values = true)]
    pub angle: Option<f64>,

    #[arg(long)]
    pub step: Option<f64>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,
}

#[cfg(feature = "cli")]
impl RunArgs {
    /// 命令列參數覆蓋檔案設定
    pub fn apply(&self, config: &mut FractalConfig) {
        if let Some(rule) = &self.rule {
            config.animation.rule = rule.clone();
        }
        if let Some(iterations) = self.iterations {
            config.animation.iterations = iterations;
        }
        if let Some(seed) = self.seed {
            config.random.seed = Some(seed);
        }
        if let Some(angle) = self.angle {
            config.render.angle_degrees = Some(angle);
        }
        if let Some(step) = self.step {
            config.render.step_size = step;
        }
        if let Some(width) = self.width {
            config.render.width = width;
        }
        if let Some(height) = self.height {
            config.render.height = height;
        }
    }
}
