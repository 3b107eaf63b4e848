//! Mindmap View CLI
//!
//! Usage:
//!   mindmap-view [OPTIONS] [FILE]
//!
//! Reads a JSON node tree and prints the laid-out mind map as SVG.
//!
//! Options:
//!   -o, --options <FILE>     Options file (TOML format)
//!   -t, --theme <NAME>       Theme applied to the container
//!   -s, --select <ID>        Node to select
//!   -c, --collapse <ID>      Node to collapse (repeatable)
//!   -v, --viewport <WxH>     Viewport size, e.g. 1024x768
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mindmap_view::{
    render_svg, HeadlessCanvas, HeadlessSurface, Mind, MindMap, MindMapError, MindMapOptions,
    NodeId, NodeTree, Size,
};

#[derive(Parser)]
#[command(name = "mindmap-view")]
#[command(about = "Lay out a mind-map tree and render it as SVG")]
struct Cli {
    /// Input JSON file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Options file (TOML format)
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Theme applied to the container; overrides the options file
    #[arg(short, long)]
    theme: Option<String>,

    /// Node to select after loading
    #[arg(short, long)]
    select: Option<String>,

    /// Node to collapse after loading
    #[arg(short, long)]
    collapse: Vec<String>,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(short, long, default_value = "800x600", value_parser = parse_viewport)]
    viewport: Size,
}

fn parse_viewport(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let width: f64 = w.trim().parse().map_err(|e| format!("bad width: {}", e))?;
    let height: f64 = h.trim().parse().map_err(|e| format!("bad height: {}", e))?;
    if width <= 0.0 || height <= 0.0 {
        return Err("viewport must not be empty".to_string());
    }
    Ok(Size::new(width, height))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = match &cli.options {
        Some(path) => match MindMapOptions::from_file(path) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Error loading options '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => MindMapOptions::default(),
    };
    if let Some(theme) = &cli.theme {
        options = options.with_theme(theme.as_str());
    }

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match render(&cli, &source, options) {
        Ok(svg) => println!("{}", svg),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn render(cli: &Cli, source: &str, options: MindMapOptions) -> Result<String, MindMapError> {
    let tree = NodeTree::from_json(source)?;
    let mind = Mind::from_tree(&tree)?;
    let mut map = MindMap::new(
        mind,
        HeadlessSurface::new(cli.viewport),
        HeadlessCanvas::new(),
        options,
    );
    map.init()?;

    for id in &cli.collapse {
        map.collapse_node(&NodeId::new(id.as_str()))?;
    }
    if let Some(id) = &cli.select {
        map.select_node(&NodeId::new(id.as_str()))?;
    }

    let view = map.view();
    Ok(render_svg(view.surface(), view.canvas(), &map.options().export))
}
