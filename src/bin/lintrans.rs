use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use lintrans::{
    CpuRenderer, FrameOutcome, InteractionMode, MatrixInput, RecordingRenderer, Session,
    VisualizerConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lintrans", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate from the identity frame to a matrix, optionally writing PNG frames.
    Play(PlayArgs),
    /// Render the resting state of a matrix as a single PNG.
    Frame(FrameArgs),
    /// Print the basis after every animation frame as JSON lines.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Target matrix in row order: "a,b,c,d" means [[a, b], [c, d]].
    #[arg(long, allow_hyphen_values = true)]
    matrix: String,

    /// Optional JSON config; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window width in pixels (the canvas adds the configured padding).
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Give up after this many frames.
    #[arg(long, default_value_t = 100_000)]
    max_frames: u64,
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Directory for PNG frames. Nothing is rasterized when omitted.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Write every N-th frame (the last frame is always written).
    #[arg(long, default_value_t = 1)]
    every: u64,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct TraceArgs {
    #[command(flatten)]
    session: SessionArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<VisualizerConfig> {
    match path {
        Some(p) => {
            VisualizerConfig::from_path(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(VisualizerConfig::default()),
    }
}

/// A session in matrix-input mode with playback already started.
fn start_session(args: &SessionArgs) -> anyhow::Result<Session> {
    let config = read_config(args.config.as_deref())?;
    let mut session = Session::with_window(config, args.width, args.height)?;
    session.set_mode(InteractionMode::MatrixInput);
    session.set_input(MatrixInput::from_csv(&args.matrix));
    session
        .play()
        .with_context(|| format!("start playback of '{}'", args.matrix))?;
    tracing::info!(
        frames_hint = session.scheduler().frames_remaining_hint(),
        "playback started"
    );
    Ok(session)
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let mut session = start_session(&args.session)?;
    let every = args.every.max(1);
    let mut cpu = CpuRenderer::new();
    let mut rec = RecordingRenderer::new();
    let mut frames = 0u64;

    loop {
        if frames >= args.session.max_frames {
            anyhow::bail!("animation did not settle within {frames} frames");
        }
        let outcome = match &args.frames_dir {
            Some(_) => session.frame(&mut cpu)?,
            None => session.frame(&mut rec)?,
        };
        let FrameOutcome::Rendered { pending, .. } = outcome else {
            break;
        };

        if let Some(dir) = &args.frames_dir
            && (frames % every == 0 || !pending)
        {
            let frame = cpu
                .take_frame()
                .context("renderer produced no frame")?;
            let path = dir.join(format!("frame_{frames:05}.png"));
            frame.save_png(&path)?;
            tracing::debug!(path = %path.display(), "wrote frame");
        }

        frames += 1;
        if !pending {
            break;
        }
    }

    tracing::info!(frames, "animation finished");
    let summary = serde_json::json!({
        "frames": frames,
        "matrix": session.readout().rows,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut session = start_session(&args.session)?;
    let mut rec = RecordingRenderer::new();
    let mut frames = 0u64;
    while session.scheduler().is_animating() {
        if frames >= args.session.max_frames {
            anyhow::bail!("animation did not settle within {frames} frames");
        }
        session.frame(&mut rec)?;
        frames += 1;
    }

    let mut cpu = CpuRenderer::new();
    session.paint(&mut cpu)?;
    let frame = cpu.take_frame().context("renderer produced no frame")?;
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let mut session = start_session(&args.session)?;
    let mut rec = RecordingRenderer::new();
    let mut frames = 0u64;

    while let FrameOutcome::Rendered { phase, pending } = session.frame(&mut rec)? {
        let basis = session.basis();
        let line = serde_json::json!({
            "frame": frames,
            "phase": phase,
            "axis0": [basis.axis0.x, basis.axis0.y],
            "axis1": [basis.axis1.x, basis.axis1.y],
        });
        println!("{line}");
        frames += 1;
        if !pending {
            break;
        }
        if frames >= args.session.max_frames {
            anyhow::bail!("animation did not settle within {frames} frames");
        }
    }
    Ok(())
}
