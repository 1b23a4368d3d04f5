//! Mokugyo CLI — generate a long-form track of sparse wooden-fish knocks.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mokugyo::dsp::renderer;
use mokugyo::error::MokugyoError;
use mokugyo::{encode, schedule};

#[derive(Parser)]
#[command(name = "mokugyo")]
#[command(about = "Generate a long audio track of randomly spaced wooden-fish knocks", version)]
struct Cli {
    /// Output file name; non-.wav destinations are transcoded via ffmpeg
    /// when available, with a WAV fallback under the same name
    #[arg(short, long, default_value = "ding.mp3")]
    output: PathBuf,

    /// Track duration in minutes
    #[arg(short, long, default_value_t = 90)]
    duration: u32,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = 22050)]
    sample_rate: u32,

    /// Seed for the prompt schedule (drawn from OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the prompt schedule as JSON instead of plain text
    #[arg(long)]
    schedule_json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), MokugyoError> {
    let seed = cli.seed.unwrap_or_else(rand::random);

    println!(
        "Generating {}-minute track with random knock prompts...",
        cli.duration
    );

    let triggers = schedule::schedule_seeded(cli.duration as f64 * 60.0, seed);
    let wav = renderer::render_wav(&triggers, cli.duration, cli.sample_rate)?;
    encode::deliver(&cli.output, &wav)?;

    println!("Successfully generated {}", cli.output.display());
    println!("Generated {} knock prompts (seed {seed})", triggers.len());

    if cli.schedule_json {
        let json = serde_json::to_string_pretty(&triggers).expect("schedule serializes");
        println!("{json}");
    } else {
        for (i, trigger) in triggers.iter().enumerate() {
            println!(
                "Prompt {}: at {:.1} seconds (2 knocks in sequence)",
                i + 1,
                trigger.instant
            );
        }
    }

    Ok(())
}
