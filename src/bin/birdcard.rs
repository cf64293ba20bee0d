use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use birdcard::OutputSink as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "birdcard", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a card from a photo and write it as PNG.
    Render(RenderArgs),
    /// List catalog species whose name contains a query.
    Search(SearchArgs),
    /// List the font files in a directory.
    Fonts(FontsArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input photo (JPEG or PNG).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Species catalog JSON.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Exact species name to caption the card with (requires --catalog).
    #[arg(long, requires = "catalog")]
    species: Option<String>,

    /// Where the photo was taken.
    #[arg(long, default_value = "")]
    location: String,

    /// When the photo was taken (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    date: Option<chrono::NaiveDate>,

    /// Photographer credit printed before the location.
    #[arg(long, default_value = "")]
    author: String,

    /// Directory holding the selectable fonts.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Font file for CJK ideographs, digits and '.' (name inside --fonts-dir).
    #[arg(long, requires = "fonts_dir")]
    primary_font: Option<String>,

    /// Font file for everything else (name inside --fonts-dir).
    #[arg(long, requires = "fonts_dir")]
    secondary_font: Option<String>,

    /// JSON file with render parameters; missing fields take defaults.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output directory; the file name is derived from species, location and date.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Leave the QR code off.
    #[arg(long)]
    no_qr: bool,

    /// Print which font files were used (path + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Species catalog JSON.
    #[arg(long)]
    catalog: PathBuf,

    /// Substring of the species name.
    #[arg(long)]
    query: String,
}

#[derive(Args, Debug)]
struct FontsArgs {
    /// Font directory.
    #[arg(long)]
    dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Search(args) => cmd_search(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_params_json(path: &Path) -> anyhow::Result<birdcard::RenderParams> {
    let f = File::open(path).with_context(|| format!("open params '{}'", path.display()))?;
    let params: birdcard::RenderParams = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse params JSON '{}'", path.display()))?;
    Ok(params)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut params = match &args.params {
        Some(path) => read_params_json(path)?,
        None => birdcard::RenderParams::default(),
    };
    if args.no_qr {
        params.include_qr = false;
    }
    params.validate()?;

    let species = match (&args.catalog, &args.species) {
        (Some(path), Some(name)) => {
            let catalog = birdcard::Catalog::load(path)?;
            let record = catalog
                .find(name)
                .with_context(|| format!("species '{name}' not in '{}'", path.display()))?;
            Some(record.clone())
        }
        _ => None,
    };

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut request = birdcard::CardRequest::new(args.location.clone(), date)
        .with_author(args.author.clone());
    request.species = species;
    request.primary_font = args.primary_font.clone();
    request.secondary_font = args.secondary_font.clone();

    let library = match &args.fonts_dir {
        Some(dir) => Some(birdcard::FontLibrary::open(dir)?),
        None => None,
    };
    let fonts = request.resolve_fonts(library.as_ref())?;
    if args.dump_fonts {
        dump_font_diagnostics(&fonts)?;
    }

    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read photo '{}'", args.in_path.display()))?;
    let card = birdcard::compose_upload(&bytes, &params, &request, &fonts)?;
    for w in &card.warnings {
        eprintln!("warning: {w}");
    }

    let mut sink = birdcard::DirSink::new(args.out_dir.clone());
    if let Some(path) = sink.deliver(&card)? {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_search(args: SearchArgs) -> anyhow::Result<()> {
    let catalog = birdcard::Catalog::load(&args.catalog)?;
    for r in catalog.search(&args.query) {
        println!("{}\t{}\t{}\t{}", r.species, r.order, r.family, r.href);
    }
    Ok(())
}

fn cmd_fonts(args: FontsArgs) -> anyhow::Result<()> {
    let library = birdcard::FontLibrary::open(&args.dir)?;
    for name in library.files() {
        println!("{name}");
    }
    Ok(())
}

fn dump_font_diagnostics(fonts: &birdcard::FontPair) -> anyhow::Result<()> {
    eprintln!("font diagnostics:");
    for (label, class) in [
        ("primary", birdcard::ScriptClass::Wide),
        ("secondary", birdcard::ScriptClass::Other),
    ] {
        let (source, sha) = match fonts.origin(class) {
            birdcard::FontOrigin::File(path) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("read font '{}'", path.display()))?;
                (path.display().to_string(), sha256_hex(&bytes))
            }
            birdcard::FontOrigin::Builtin => (
                "builtin".to_owned(),
                sha256_hex(birdcard::BUILTIN_FONT_BYTES),
            ),
        };
        eprintln!("  {label}:");
        eprintln!("    source: {source}");
        eprintln!("    sha256: {sha}");
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
