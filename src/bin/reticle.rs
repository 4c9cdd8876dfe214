use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reticle", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scene and print every frame as a JSON line.
    Replay(ReplayArgs),
    /// Render the cursor at one point in time as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input scene JSON.
    #[arg(long)]
    scene: PathBuf,

    /// Cursor config JSON. Missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON lines path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long)]
    scene: PathBuf,

    /// Scene time in milliseconds.
    #[arg(long)]
    at_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Cursor config JSON. Missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<reticle::CursorConfig> {
    let Some(path) = path else {
        return Ok(reticle::CursorConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    Ok(reticle::CursorConfig::from_json_str(&s)?)
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let scene = reticle::Scene::from_path(&args.scene)?;
    let cfg = read_config(args.config.as_deref())?;
    let frames = reticle::replay(&scene, &cfg)?;

    let mut out: Box<dyn std::io::Write> = match &args.out {
        Some(path) => {
            create_parent(path)?;
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    for frame in &frames {
        serde_json::to_writer(&mut out, frame).with_context(|| "serialize frame")?;
        out.write_all(b"\n").with_context(|| "write frame")?;
    }
    out.flush().with_context(|| "flush output")?;

    if let Some(path) = &args.out {
        eprintln!("wrote {} frames to {}", frames.len(), path.display());
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = reticle::Scene::from_path(&args.scene)?;
    let cfg = read_config(args.config.as_deref())?;

    let opts = reticle::RasterOpts {
        width: scene.viewport.width.ceil() as u32,
        height: scene.viewport.height.ceil() as u32,
        background: scene.background,
    };
    let mut replay = reticle::Replay::new(scene, cfg)?;
    let at = replay.run_until(args.at_ms)?;
    let cursor = at.cursor.unwrap_or_else(|| replay.cursor().frame());
    let frame = reticle::rasterize(&cursor, &opts)?;

    create_parent(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn create_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
