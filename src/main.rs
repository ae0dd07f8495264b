//! Frame Constraints CLI
//!
//! Usage:
//!   frame-constraints [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --pixel-align        Snap resolved rectangles to whole pixels
//!       --viewport <WxH>     Viewport size for fixed-position nodes
//!   -v, --verbose            Log resolution details to stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use frame_constraints::{render_report, ResolveConfig, Scene, Size};

#[derive(Parser)]
#[command(name = "frame-constraints")]
#[command(about = "Resolve constraint layouts into pixel rectangles")]
struct Cli {
    /// Scene file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Snap resolved rectangles to whole pixels
    #[arg(short, long)]
    pixel_align: bool,

    /// Viewport size used by fixed-position nodes, e.g. 1280x800
    #[arg(long, value_parser = parse_size)]
    viewport: Option<Size>,

    /// Log resolution details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_size(value: &str) -> Result<Size, String> {
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;
    let width: f64 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{}'", width))?;
    let height: f64 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{}'", height))?;
    Ok(Size::new(width, height))
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .init();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let scene = match Scene::from_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    let mut config = ResolveConfig::new().with_pixel_align(cli.pixel_align);
    if let Some(viewport) = cli.viewport {
        config = config.with_viewport(viewport.width, viewport.height);
    }

    print!("{}", render_report(&scene.resolve(&config)));
}

fn print_intro() {
    println!(
        r#"Frame Constraints - resolve constraint layouts into pixel rectangles

USAGE:
    frame-constraints [OPTIONS] [FILE]
    cat scene.toml | frame-constraints

OPTIONS:
    -p, --pixel-align      Snap rectangles to whole pixels
    --viewport <WxH>       Viewport for fixed-position nodes
    -v, --verbose          Log resolution details
    -h, --help             Print help

QUICK START:
    printf 'width = 320\nheight = 200\n[[nodes]]\nid = "bar"\nleft = 10\nright = 10\nheight = 40\n' | frame-constraints"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1280x800"), Ok(Size::new(1280.0, 800.0)));
        assert_eq!(parse_size("10.5 x 20"), Ok(Size::new(10.5, 20.0)));
        assert!(parse_size("1280").is_err());
        assert!(parse_size("ax800").is_err());
    }
}
