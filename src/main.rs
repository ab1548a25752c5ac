use std::path::{Path, PathBuf};

use boxdraw::config::{CANCEL_THRESHOLD_PX_VAR, CLICK_SIDE_PX_VAR};
use boxdraw::{BoundingBox, BoxDrawError, DrawConfig, DrawGesture, PageBox, RenderProps, Rotation, Shape, Surface};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    BoxDraw(#[from] BoxDrawError),
}

#[derive(Parser, Debug)]
#[command(name = "boxdraw", about = "Replay box drawing gestures and serialize boxes")]
struct Cli {
    /// Side of the square a click snaps to, in pixels.
    #[arg(long, global = true, env = "BOXDRAW_CLICK_SIDE_PX")]
    click_side_px: Option<String>,

    /// Largest drag, in pixels, still treated as a click.
    #[arg(long, global = true, env = "BOXDRAW_CANCEL_THRESHOLD_PX")]
    cancel_threshold_px: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a gesture script and print every render update as a JSON line.
    Replay {
        script: PathBuf,

        #[arg(long, default_value_t = false)]
        for_copy: bool,

        /// Drop gestures that never grew past the click threshold instead of snapping them.
        #[arg(long, default_value_t = false)]
        discard_clicks: bool,
    },
    /// Serialize a single box onto a page.
    Serialize {
        #[arg(long = "box", value_parser = parse_quad, help = "x,y,width,height in normalized units")]
        bbox: [f64; 4],

        #[arg(long, value_parser = parse_quad, help = "x,y,width,height in page units")]
        page: [f64; 4],

        #[arg(long, default_value_t = 0, value_parser = parse_rotation)]
        rotation: i32,

        #[arg(long, default_value_t = false)]
        for_copy: bool,
    },
}

/// A recorded gesture plus the edits applied to the resulting shape.
#[derive(Debug, Deserialize)]
struct Script {
    surface: Surface,
    page: PageBox,
    start: [f64; 2],
    #[serde(default)]
    samples: Vec<[f64; 2]>,
    end: [f64; 2],
    #[serde(default)]
    ops: Vec<Op>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Op {
    Rotate {
        rotation: Rotation,
    },
    PreviewResize {
        #[serde(rename = "box")]
        bbox: BoundingBox,
    },
    Resize {
        #[serde(rename = "box")]
        bbox: BoundingBox,
    },
    Translate {
        x: f64,
        y: f64,
    },
}

impl Op {
    fn name(&self) -> &'static str {
        match self {
            Self::Rotate { .. } => "rotate",
            Self::PreviewResize { .. } => "preview_resize",
            Self::Resize { .. } => "resize",
            Self::Translate { .. } => "translate",
        }
    }

    fn apply(&self, shape: &mut Shape) -> RenderProps {
        match *self {
            Self::Rotate { rotation } => shape.set_rotation(rotation),
            Self::PreviewResize { bbox } => shape.preview_resize(bbox),
            Self::Resize { bbox } => shape.commit_resize(bbox),
            Self::Translate { x, y } => shape.commit_translate(x, y),
        }
    }
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::debug!(click_side_px = config.click_side_px, cancel_threshold_px = config.cancel_threshold_px, "config loaded");

    match cli.command {
        Command::Replay { script, for_copy, discard_clicks } => run_replay(config, &script, for_copy, discard_clicks),
        Command::Serialize { bbox, page, rotation, for_copy } => {
            let mut shape = Shape::new(BoundingBox::from(bbox));
            shape.set_rotation(Rotation::from_degrees(rotation));
            print_json(&shape.serialize(PageBox::from(page), for_copy))
        }
    }
}

/// clap has already merged flags over the environment; unset values fall
/// back to the defaults.
fn load_config(cli: &Cli) -> Result<DrawConfig, BoxDrawError> {
    DrawConfig::from_lookup(|key| match key {
        CLICK_SIDE_PX_VAR => cli.click_side_px.clone(),
        CANCEL_THRESHOLD_PX_VAR => cli.cancel_threshold_px.clone(),
        _ => None,
    })
}

fn run_replay(config: DrawConfig, path: &Path, for_copy: bool, discard_clicks: bool) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
    let script: Script = serde_json::from_str(&raw)?;

    let [x, y] = script.start;
    let mut gesture = DrawGesture::with_config(x, y, script.surface, config);
    emit("start", &gesture.default_render_properties())?;
    for [x, y] in script.samples {
        emit("sample", &gesture.add_sample(x, y))?;
    }
    let [x, y] = script.end;
    emit("finalize", &gesture.finalize(x, y))?;

    if discard_clicks && gesture.is_cancellable() {
        tracing::info!("gesture below click threshold, discarded");
        return print_json(&json!({ "event": "cancelled" }));
    }

    let mut shape = gesture.to_shape();
    emit("shape", &shape.render_properties())?;
    for op in &script.ops {
        emit(op.name(), &op.apply(&mut shape))?;
    }

    print_json(&json!({ "event": "serialized", "record": shape.serialize(script.page, for_copy) }))
}

fn emit(event: &str, props: &RenderProps) -> Result<(), CliError> {
    print_json(&json!({ "event": event, "props": props }))
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn parse_quad(raw: &str) -> Result<[f64; 4], String> {
    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    <[f64; 4]>::try_from(values).map_err(|v| format!("expected 4 comma-separated numbers, got {}", v.len()))
}

fn parse_rotation(raw: &str) -> Result<i32, String> {
    let degrees = raw.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Rotation::try_from(degrees).map(i32::from).map_err(|e| e.to_string())
}
