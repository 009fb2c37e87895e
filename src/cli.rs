use crate::adapters::LocalStorage;
use crate::app::pipelines::RenderPipeline;
use crate::config::{CliConfig, Command, FractalConfig, RunArgs};
use crate::core::engine::LSystemEngine;
use crate::core::fractal::FractalEngine;
use crate::core::random::SeededRandom;
use crate::core::rules::find_rule;
use crate::core::{ConfigProvider, LSystemRule};
use crate::render::segments_csv;
use crate::utils::error::{FractalError, Result};
use crate::utils::logger;
use crate::utils::validation::Validate;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::sync::Arc;

/// Parses `args` (program name first), runs the command and writes its
/// report to stdout. With no command the rule catalogue is listed.
pub async fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match CliConfig::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            print!("{}", e);
            return Ok(());
        }
        Err(e) => {
            return Err(FractalError::ConfigError {
                message: e.to_string(),
            })
        }
    };

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let mut stdout = std::io::stdout().lock();
    execute(&cli, &mut stdout).await
}

/// Runs an already parsed command line, writing reports to `out`.
pub async fn execute(cli: &CliConfig, out: &mut dyn Write) -> Result<()> {
    let base = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            FractalConfig::from_file(path)?
        }
        None => FractalConfig::default(),
    };

    match &cli.command {
        None | Some(Command::List) => list_rules(out),
        Some(Command::Describe { rule }) => describe_rule(rule, out),
        Some(Command::Generate(run)) => {
            let config = prepare(base, run)?;
            let instructions = generate(&config)?;
            writeln!(out, "{}", instructions)?;
            Ok(())
        }
        Some(Command::Render { run, output }) => {
            let config = prepare(base, run)?;
            let rule = lookup(config.rule_name())?;
            let (instructions, seed) = generate_with_seed(&config, &rule)?;

            let svg = config.renderer().render(
                &config.interpreter_for(rule.as_ref()),
                &instructions,
                config.iterations(),
                seed,
            )?;
            tokio::fs::write(output, svg).await?;

            tracing::info!("✅ Rendered '{}' to {}", rule.name(), output.display());
            writeln!(out, "{}", output.display())?;
            Ok(())
        }
        Some(Command::Animate { run, output, zip }) => {
            let mut config = prepare(base, run)?;
            if let Some(path) = output {
                config.output.path = path.clone();
            }
            if *zip {
                config.output.archive = true;
            }
            config.validate()?;

            let storage = LocalStorage::new(config.output_path().to_string());
            let pipeline = RenderPipeline::new(storage, config)?;
            let location = FractalEngine::new(pipeline).run().await?;

            writeln!(out, "{}", location)?;
            Ok(())
        }
        Some(Command::Export { run, output }) => {
            let config = prepare(base, run)?;
            let rule = lookup(config.rule_name())?;
            let (instructions, _) = generate_with_seed(&config, &rule)?;

            let renderer = config.renderer();
            let start = (f64::from(renderer.width) / 2.0, f64::from(renderer.height));
            let path = config
                .interpreter_for(rule.as_ref())
                .interpret(&instructions, start)?;
            tokio::fs::write(output, segments_csv(&path)?).await?;

            tracing::info!("✅ Exported {} to {}", path, output.display());
            writeln!(out, "{}", output.display())?;
            Ok(())
        }
    }
}

fn prepare(mut config: FractalConfig, run: &RunArgs) -> Result<FractalConfig> {
    run.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn lookup(name: &str) -> Result<Arc<dyn LSystemRule>> {
    find_rule(name).ok_or_else(|| FractalError::UnknownRuleError {
        name: name.to_string(),
    })
}

fn generate(config: &FractalConfig) -> Result<String> {
    let rule = lookup(config.rule_name())?;
    generate_with_seed(config, &rule).map(|(instructions, _)| instructions)
}

fn generate_with_seed(
    config: &FractalConfig,
    rule: &Arc<dyn LSystemRule>,
) -> Result<(String, u64)> {
    let random = match config.seed() {
        Some(seed) => SeededRandom::with_seed(seed),
        None => SeededRandom::from_time(),
    };
    let mut engine = LSystemEngine::with_random(Arc::clone(rule), random);
    let seed = engine.random().seed();
    let instructions = engine.generate(config.iterations())?;
    tracing::debug!(
        "Generated '{}' x{} (seed {}): {} symbols",
        rule.name(),
        config.iterations(),
        seed,
        instructions.len()
    );
    Ok((instructions, seed))
}

fn list_rules(out: &mut dyn Write) -> Result<()> {
    let controller = crate::core::controller::RuleController::new();
    for rule in controller.rules() {
        writeln!(out, "{:<16} {}", rule.name(), rule.description())?;
    }
    Ok(())
}

fn describe_rule(name: &str, out: &mut dyn Write) -> Result<()> {
    let rule = lookup(name)?;

    writeln!(out, "Rule:        {}", rule.name())?;
    writeln!(out, "Description: {}", rule.description())?;
    writeln!(out, "Axiom:       {}", rule.axiom())?;
    writeln!(out, "Angle:       {}°", rule.angle_degrees())?;
    writeln!(out, "Parametric:  {}", rule.is_parametric())?;

    writeln!(out, "Productions:")?;
    for production in rule.productions() {
        writeln!(out, "  {}", production)?;
    }
    Ok(())
}
