use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use labelwrap::export::{self, DEFAULT_FILENAME_TEMPLATE};
use labelwrap::{Command, Config, Sketch};
use std::fs;
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("LABELWRAP_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "labelwrap")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Decorate text labels with layered borders"
)]
struct Cli {
    /// Command to apply after the script, e.g. "select 2" or "add glow" (repeatable)
    #[arg(long, short = 'c', value_name = "CMD")]
    command: Vec<String>,

    /// Read commands from a file, one per line ('#' starts a comment)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the final frame to this PNG file
    #[arg(long, short = 'o', value_name = "PNG", conflicts_with = "trace")]
    output: Option<PathBuf>,

    /// Also write a frame after setup and after every command into this directory
    #[arg(long, value_name = "DIR")]
    frames: Option<PathBuf>,

    /// Print the final frame's draw calls as JSON instead of writing a PNG
    #[arg(long, action = ArgAction::SetTrue)]
    trace: bool,

    /// Use this configuration file instead of ~/.config/labelwrap/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the example configuration file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file(cli.config.as_deref())?;
        println!("Wrote example configuration to {}", path.display());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let commands = collect_commands(&cli)?;

    let mut sketch = Sketch::setup(&config);
    let (width, height) = sketch.size();

    if let Some(dir) = &cli.frames {
        save_numbered_frame(&sketch, dir, 0)?;
    }

    for (index, command) in commands.iter().enumerate() {
        sketch.apply(*command);
        if let Some(dir) = &cli.frames {
            save_numbered_frame(&sketch, dir, index + 1)?;
        }
    }

    let frame = sketch.record_frame();

    if cli.trace {
        println!("{}", serde_json::to_string_pretty(&frame)?);
        return Ok(());
    }

    let output = cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(export::generate_filename(DEFAULT_FILENAME_TEMPLATE, "png"))
    });
    export::save_png(&frame, width, height, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    println!("{}", output.display());

    Ok(())
}

/// Script commands first, then `--command` arguments in the order given.
fn collect_commands(cli: &Cli) -> Result<Vec<Command>> {
    let mut commands = Vec::new();

    if let Some(path) = &cli.script {
        let script = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        commands.extend(
            Command::parse_script(&script)
                .with_context(|| format!("Invalid script {}", path.display()))?,
        );
    }

    for raw in &cli.command {
        let command = raw
            .parse::<Command>()
            .with_context(|| format!("Invalid command '{}'", raw))?;
        commands.push(command);
    }

    log::debug!("{} commands to apply", commands.len());
    Ok(commands)
}

fn save_numbered_frame(sketch: &Sketch, dir: &Path, number: usize) -> Result<()> {
    let (width, height) = sketch.size();
    let path = dir.join(format!("frame_{number:03}.png"));
    export::save_png(&sketch.record_frame(), width, height, &path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(())
}
