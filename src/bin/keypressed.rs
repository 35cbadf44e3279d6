// Keypressed Replay CLI
// Feeds a recorded host event script through the tracker and prints each step

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use keypressed_core::{Key, KeyChange, Keyboard, Layout, OneOf, Script, Settings};

/// Replay keyboard events and show the pressed keys
#[derive(Parser, Debug)]
#[command(name = "keypressed")]
#[command(version)]
#[command(about = "Replay keyboard events and show the pressed keys", long_about = None)]
struct Args {
    /// TOML event script ([[event]] entries with type = keydown/keyup/blur)
    #[arg(value_name = "SCRIPT", required_unless_present = "print_default_config")]
    script: Option<PathBuf>,

    /// TOML settings file (defaults to ~/.config/keypressed/settings.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Direction layout, overrides the settings file
    #[arg(short, long, value_name = "LAYOUT")]
    layout: Option<Layout>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the default settings file and exit
    #[arg(long)]
    print_default_config: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load_default().context("failed to load default settings")?,
    };
    if let Some(layout) = args.layout {
        settings.set_layout(layout);
    }
    Ok(settings)
}

fn format_change(change: Option<&KeyChange>) -> String {
    match change {
        Some(KeyChange::KeyDown(key)) => format!("down {}", key),
        Some(KeyChange::KeyUp(key)) => format!("up {}", key),
        None => "-".to_string(),
    }
}

fn format_pressed(keys: &[Key]) -> String {
    let names: Vec<String> = keys.iter().map(|key| format!("{:?}", key.to_string())).collect();
    format!("[{}]", names.join(", "))
}

fn run(args: &Args) -> Result<()> {
    let settings = load_settings(args)?;
    debug!(
        "Tracking categories {:?}, uppercase = {}, layout = {}",
        settings.categories(),
        settings.uppercase(),
        settings.layout()
    );

    let script_path = args.script.as_ref().context("no script given")?;
    let script = Script::from_file(script_path)
        .with_context(|| format!("failed to load script {}", script_path.display()))?;
    info!("Replaying {} event(s) from {}", script.len(), script_path.display());

    let mut keyboard: Keyboard<OneOf> = settings.keyboard();
    for (index, event) in script.events.iter().cloned().enumerate() {
        let change = keyboard.handle_host(event);
        println!(
            "{:>4}  {:<24} {:<40} {}",
            index + 1,
            format_change(change.as_ref()),
            format_pressed(&keyboard.pressed().to_vec()),
            keyboard.direction(settings.layout())
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", keypressed_core::settings::default_settings_content());
        return Ok(());
    }

    init_logging(args.verbose);
    run(&args)
}
