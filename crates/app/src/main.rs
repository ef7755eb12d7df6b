use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;

use signflow_app::config::AppConfig;
use signflow_app::pipeline::GesturePipeline;
use signflow_app::source::{ObservationSource, TraceSource};
use signflow_gesture::SignEvent;
use signflow_quiz::{Difficulty, QuizSession, Verdict};
use signflow_telemetry::PipelineMetrics;

#[derive(Parser)]
#[command(name = "signflow", about = "Fingerspelling recognition pipeline")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "SIGNFLOW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a recorded observation trace through the resolver
    Replay {
        /// JSON-lines trace of classifier output
        trace: PathBuf,
    },
    /// Run a typed practice session in the terminal
    Quiz {
        /// easy, medium or hard (overrides the config file)
        #[arg(long)]
        difficulty: Option<String>,
        /// Number of prompts (overrides the config file)
        #[arg(long)]
        prompts: Option<u32>,
    },
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("logs")?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, "logs", "signflow.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr.and(non_blocking_file))
        .with_env_filter(log_level)
        .init();
    std::mem::forget(_guard);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging().map_err(|e| anyhow::anyhow!("logging init failed: {e}"))?;

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli.command {
        Command::Replay { trace } => replay(config, trace).await,
        Command::Quiz {
            difficulty,
            prompts,
        } => quiz(config, difficulty, prompts),
    }
}

async fn replay(config: AppConfig, trace: PathBuf) -> anyhow::Result<()> {
    let mut source =
        TraceSource::open(&trace).with_context(|| format!("opening {}", trace.display()))?;

    let metrics = Arc::new(PipelineMetrics::default());
    let (obs_tx, obs_rx) = mpsc::channel(64);
    let (_cmd_tx, cmd_rx) = mpsc::channel(8);
    let (event_tx, mut event_rx) = mpsc::channel(64);

    let pipeline = GesturePipeline::new(config.resolver, obs_rx, cmd_rx, event_tx, metrics.clone());
    let word = pipeline.word_handle();
    let handle = pipeline.spawn();

    let printer = tokio::spawn(async move {
        while let Some(SignEvent::LetterAppended { text, word, .. }) = event_rx.recv().await {
            println!("+{text}  [{word}]");
        }
    });

    while let Some(obs) = source.next_observation()? {
        if obs_tx.send(obs).await.is_err() {
            bail!("pipeline stopped unexpectedly");
        }
    }
    drop(obs_tx);

    handle.await?;
    printer.await?;

    let snap = metrics.snapshot();
    println!("resolved word: {}", word.lock());
    println!(
        "frames: {} ({} without a gesture), letters: {} ({} movement-confirmed)",
        snap.frames_in, snap.frames_no_gesture, snap.letters_emitted, snap.dynamic_matches
    );
    Ok(())
}

fn quiz(
    config: AppConfig,
    difficulty: Option<String>,
    prompts: Option<u32>,
) -> anyhow::Result<()> {
    let mut session_config = config.quiz;
    if let Some(d) = difficulty {
        session_config.difficulty = match d.to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => bail!("unknown difficulty '{other}' (expected easy, medium or hard)"),
        };
    }
    if let Some(n) = prompts {
        session_config.total_prompts = n;
    }

    let mut rng = rand::thread_rng();
    let mut session = QuizSession::new(session_config, &mut rng);
    let stdin = io::stdin();

    println!("Type the prompted word ('!skip' to pass, '!quit' to stop).");
    while !session.is_finished() {
        print!("sign: {}\n> ", session.prompt());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "!quit" => break,
            "!skip" => session.skip(&mut rng),
            answer => match session.submit(answer, &mut rng) {
                Verdict::Correct { points } => println!("correct, +{points} points"),
                Verdict::Incorrect => println!("not quite, try again"),
                Verdict::Finished => break,
            },
        }
    }

    println!(
        "session over: {} points across {} prompts",
        session.score(),
        session.completed()
    );
    Ok(())
}
