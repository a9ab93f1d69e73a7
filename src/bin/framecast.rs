use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "framecast", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a scene JSON file and report every problem.
    Validate(ValidateArgs),
    /// Print the state of one frame as JSON.
    Frame(FrameArgs),
    /// Write frame states as JSON lines.
    Render(RenderArgs),
    /// Print the topic and outro flag for a piece of caption text.
    Classify(ClassifyArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Static asset root (defaults to the scene file's directory).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    /// Static asset root (defaults to the scene file's directory).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames scheduled per batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Render only these frames, e.g. `0,5,9`.
    #[arg(long, value_delimiter = ',')]
    frames: Option<Vec<u64>>,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Caption text.
    #[arg(long)]
    text: String,

    /// Brand name for the `visit <brand>` outro cue.
    #[arg(long, default_value = "lunary")]
    brand: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Classify(args) => cmd_classify(args),
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let def = framecast::SceneDef::from_path(&args.in_path)?;
    def.validate()?;
    println!(
        "ok: {} frames at {}/{} fps, {} segments",
        def.duration,
        def.fps.num,
        def.fps.den,
        def.segments.len()
    );
    Ok(())
}

fn load_scene(in_path: &Path, assets: Option<&Path>) -> anyhow::Result<framecast::Scene> {
    let def = framecast::SceneDef::from_path(in_path)?;
    let root = match assets {
        Some(root) => root,
        None => in_path.parent().unwrap_or_else(|| Path::new(".")),
    };
    let table = framecast::AssetTable::scan_dir(root)
        .with_context(|| format!("scan asset root '{}'", root.display()))?;
    Ok(framecast::Scene::new(def, table)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path, args.assets.as_deref())?;
    let state = framecast::Evaluator::eval_frame(&scene, framecast::FrameIndex(args.frame))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &state)?;
    } else {
        serde_json::to_writer(&mut out, &state)?;
    }
    writeln!(out)?;
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path, args.assets.as_deref())?;
    let opts = framecast::RenderSessionOpts {
        threading: framecast::RenderThreading {
            parallel: args.parallel,
            chunk_size: args.chunk_size,
            threads: args.threads,
        },
    };
    let session = framecast::RenderSession::new(scene, opts)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let file = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut sink = framecast::JsonLinesSink::new(BufWriter::new(file));

    let stats = match &args.frames {
        Some(frames) => {
            let frames: Vec<_> = frames.iter().copied().map(framecast::FrameIndex).collect();
            session.render_frame_set(&frames, &mut sink)?
        }
        None => session.render_all(&mut sink)?,
    };
    session.release();

    eprintln!(
        "wrote {} ({} frames, digest {:016x}{:016x})",
        args.out.display(),
        stats.frames_total,
        stats.digest.hi,
        stats.digest.lo
    );
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let topic = framecast::classify_text(&args.text);
    let segments = [framecast::Segment::new(args.text, 0.0, 1.0)];
    let outro = framecast::is_outro(&segments, 0.5, &args.brand);
    let out = serde_json::json!({ "topic": topic, "outro": outro });
    println!("{out}");
    Ok(())
}
