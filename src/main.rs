use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use petbase::random::{RandomSource, SeededRandom, ThreadRandom};
use petbase::{
    find_preset, Concept, Element, ElementLevels, GenerationRequest, GenerationResult,
    GeneratorConfig, GeneratorSession, PRESETS,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "petbase")]
#[command(about = "Pet stat initializer and enemybase record generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Generate a stat split, base stats and the enemybase record
    Generate(GenerateArgs),
    /// List the element presets
    Presets,
    /// List the concepts and their weights
    Concepts,
}

#[derive(Args)]
struct GenerateArgs {
    /// JSON file with generator defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Creature name (empty writes the placeholder name)
    #[arg(long, default_value = "")]
    name: String,
    /// Temporary id (empty writes 9999)
    #[arg(long, default_value = "")]
    temp_id: String,
    /// Image id embedded in the record
    #[arg(long)]
    image_id: Option<String>,
    /// Total stat budget
    #[arg(long)]
    total: Option<u32>,
    /// Initial value, in percent
    #[arg(long)]
    initial_value: Option<u32>,
    /// Concept label or name; unknown labels fall back to balanced
    #[arg(long)]
    concept: Option<String>,
    /// Capture difficulty (0-10)
    #[arg(long, default_value_t = 0)]
    capture_difficulty: u8,
    /// Rarity (0-2)
    #[arg(long, default_value_t = 0)]
    rarity: u8,
    /// Element levels as earth,water,fire,wind
    #[arg(long)]
    elements: Option<ElementLevels>,
    /// Start from a named preset
    #[arg(long)]
    preset: Option<String>,
    /// Slider edit `element=value`, applied in order after preset/elements
    #[arg(long = "set", value_parser = parse_edit)]
    edits: Vec<(Element, u8)>,
    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_edit(s: &str) -> Result<(Element, u8), String> {
    let (element, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected element=value, got '{s}'"))?;
    let element = element.parse::<Element>()?;
    let value = value
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("invalid level '{value}'"))?;
    Ok((element, value))
}

fn load_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

/// Config values first, then any flag given on the command line.
fn build_request(args: &GenerateArgs, config: &GeneratorConfig) -> GenerationRequest {
    let mut request = GenerationRequest::from_config(config);
    request.name = args.name.clone();
    request.temp_id = args.temp_id.clone();
    if let Some(image_id) = &args.image_id {
        request.image_id = image_id.clone();
    }
    if let Some(total) = args.total {
        request.total = total;
    }
    if let Some(initial_value) = args.initial_value {
        request.initial_value = initial_value;
    }
    if let Some(label) = &args.concept {
        request.concept = Concept::from_label_lenient(label);
    }
    request.capture_difficulty = args.capture_difficulty;
    request.rarity = args.rarity;
    request
}

/// Apply preset, explicit levels and `--set` edits, in that order.
///
/// Returns the session and the notices raised by rejected edits.
fn prepare_session(
    args: &GenerateArgs,
    config: &GeneratorConfig,
) -> Result<(GeneratorSession, Vec<String>)> {
    let mut session = GeneratorSession::new(config);
    let mut rejected = Vec::new();

    if let Some(name) = &args.preset {
        let preset = find_preset(name).with_context(|| format!("unknown preset '{name}'"))?;
        session.apply_preset(preset)?;
    }
    if let Some(levels) = args.elements {
        session.set_levels(levels);
    }
    for &(element, value) in &args.edits {
        // A rejected edit is reported and skipped, the way a slider snaps back.
        if session.edit_element(element, value).is_err() {
            if let Some(notice) = session.notice(Instant::now()) {
                rejected.push(notice.message.clone());
            }
        }
    }
    tracing::debug!(levels = %session.levels(), "element levels ready");
    Ok((session, rejected))
}

fn print_result(result: &GenerationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("Stat split  -> {}", result.split);
        println!("Base stats  -> {}", result.base_stats);
        println!("Elements    -> {}", result.elements);
        println!("{}", result.record);
    }
    Ok(())
}

fn run_generate(
    session: &mut GeneratorSession,
    request: &GenerationRequest,
    rng: &mut impl RandomSource,
) -> Result<GenerationResult> {
    match session.generate(request, rng) {
        Ok(result) => Ok(result.clone()),
        Err(err) => bail!("generation failed: {err}"),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let config = load_config(&args)?;
    let request = build_request(&args, &config);
    let (mut session, rejected) = prepare_session(&args, &config)?;
    for message in &rejected {
        eprintln!("{message}");
    }

    let result = match args.seed {
        Some(seed) => run_generate(&mut session, &request, &mut SeededRandom::new(seed))?,
        None => run_generate(&mut session, &request, &mut ThreadRandom)?,
    };
    print_result(&result, args.json)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "petbase=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Generate(args) => generate(args)?,
        Cmd::Presets => {
            for preset in &PRESETS {
                println!("{:<14} {}", preset.name, preset.levels);
            }
        }
        Cmd::Concepts => {
            for concept in Concept::ALL {
                let w = concept.weights();
                println!(
                    "{:<15} {:<6} VIT {:.1} STR {:.1} TGH {:.1} DEX {:.1}",
                    concept.name(),
                    concept.label(),
                    w[0],
                    w[1],
                    w[2],
                    w[3]
                );
            }
        }
    }
    Ok(())
}
