//! binary font tool.
//!
//! `pack` turns a TOML font source into the glyph and translation tables
//! loaded by the terminal firmware; `rotate` produces the rotated variant of
//! a packed 8x8 font.

use std::path::PathBuf;

use clap::Parser;
use font_blob::{pack_source, rotate_file, Error, FontSource, GlyphSize, PackOptions};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Write font<W>x<H>.fnt and xlat<W>x<H>.bin from a font source
    Pack {
        /// The TOML font source
        source: PathBuf,
        /// Directory to write the packed tables into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        /// Glyph width in pixels, overriding the font source
        #[arg(long, requires = "height")]
        width: Option<u16>,
        /// Glyph height in pixels, overriding the font source
        #[arg(long, requires = "width")]
        height: Option<u16>,
    },
    /// Rotate every glyph of a packed 8x8 font a quarter turn
    Rotate {
        /// The packed 8x8 font
        #[arg(short, long, default_value = font_blob::rotate::DEFAULT_INPUT)]
        input: PathBuf,
        /// Where to write the rotated font
        #[arg(short, long, default_value = font_blob::rotate::DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(args.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Pack {
            source,
            out_dir,
            width,
            height,
        } => {
            let options = PackOptions {
                out_dir,
                size: width.zip(height).map(|(w, h)| GlyphSize::new(w, h)),
            };
            pack_source(FontSource::load(&source)?, &options).map(drop)
        }
        Command::Rotate { input, output } => rotate_file(&input, &output).map(drop),
    }
}
