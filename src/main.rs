use anyhow::Context;
use clap::Parser;
use pillsplitter::Config;
use pillsplitter::input::InputState;
use pillsplitter::replay::{parse_script, replay};
use pillsplitter::util::Rect;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pillsplitter")]
#[command(version, about = "Draw, drag and split rounded rectangles on a 2D surface")]
struct Cli {
    /// Config file to use instead of ~/.config/pillsplitter/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the pill color picker (reproducible output)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Gesture script to replay ("-" reads standard input)
    #[arg(long, short = 's', value_name = "PATH")]
    script: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let Some(script) = cli.script else {
        println!("pillsplitter: draw, drag and split rounded rectangles");
        println!();
        println!("Usage:");
        println!("  pillsplitter --script FILE     Replay a gesture script and print the result");
        println!("  pillsplitter --script -        Read the script from standard input");
        println!("  pillsplitter --print-config    Show the effective configuration");
        println!("  pillsplitter --help            Show help");
        println!();
        println!("Script commands (T = milliseconds since start):");
        println!("  down X Y T [left|right|middle]");
        println!("  move X Y T");
        println!("  up X Y T [left|right|middle]");
        println!("  surface X Y [W H]");
        println!("  nosurface");
        return Ok(());
    };

    let source = if script == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read script from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(&script)
            .with_context(|| format!("Failed to read script {script}"))?
    };

    let commands = parse_script(&source).with_context(|| format!("Invalid script {script}"))?;

    let mut state = InputState::new(config.input_settings(), config.color_picker(cli.seed));
    state.update_surface(Some(Rect::default()));
    let handled = replay(&mut state, &commands, Instant::now());
    log::info!("Handled {} pointer event(s)", handled);

    println!("{}", serde_json::to_string_pretty(&state.render_model())?);
    Ok(())
}
