use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use parallax_backdrop::{
    BackgroundConfig, ClientPayload, ConfigResolver, FsMediaLibrary, InMemoryMediaLibrary,
    LocaleNormalizer, LocaleTable, OptionTables, PageOpts, RawOptions, ScrollState, Size,
    compute_transform, eligibility, prepare_page,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "parallax-backdrop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve stored page options into the client payload.
    Resolve(ResolveArgs),
    /// Compute the frame transform for a payload and page metrics.
    Transform(TransformArgs),
    /// Report whether an image qualifies for parallax.
    CheckImage(CheckImageArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Raw options JSON object.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory the attachment reference is resolved against.
    #[arg(long)]
    media_root: Option<PathBuf>,

    /// URL prefix for images found under `--media-root`.
    #[arg(long, default_value = "")]
    media_url: String,

    /// Active locale for display-string matching.
    #[arg(long, default_value = "en")]
    locale: String,

    /// Extra locale table JSON (repeatable).
    #[arg(long = "locale-table")]
    locale_tables: Vec<PathBuf>,

    /// Option tables JSON overriding allowed values and defaults.
    #[arg(long)]
    option_tables: Option<PathBuf>,

    /// URL prefix for overlay pattern files.
    #[arg(long, default_value = "")]
    overlay_path: String,
}

#[derive(Parser, Debug)]
struct TransformArgs {
    /// Client payload JSON, as printed by `resolve`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport size, `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_size)]
    viewport: Size,

    /// Document size, `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_size)]
    document: Size,

    #[arg(long, default_value_t = 0.0)]
    scroll_top: f64,

    #[arg(long, default_value_t = 0.0)]
    scroll_left: f64,
}

#[derive(Parser, Debug)]
struct CheckImageArgs {
    /// Library root directory.
    #[arg(long)]
    root: PathBuf,

    /// Image path relative to the root.
    path: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Transform(args) => cmd_transform(args),
        Command::CheckImage(args) => cmd_check_image(args),
    }
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    Ok(Size::new(w, h))
}

fn build_resolver(args: &ResolveArgs) -> anyhow::Result<ConfigResolver> {
    let mut normalizer = LocaleNormalizer::builtin(args.locale.clone())?;
    for path in &args.locale_tables {
        let table = LocaleTable::from_path(path)
            .with_context(|| format!("load locale table '{}'", path.display()))?;
        normalizer = normalizer.with_table(table)?;
    }
    let tables = match &args.option_tables {
        Some(path) => OptionTables::from_path(path)
            .with_context(|| format!("load option tables '{}'", path.display()))?,
        None => OptionTables::builtin(),
    };
    Ok(ConfigResolver::new(normalizer, tables))
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let resolver = build_resolver(&args)?;
    let raw = RawOptions::from_path(&args.in_path)
        .with_context(|| format!("read options '{}'", args.in_path.display()))?;
    let opts = PageOpts {
        overlay_path: args.overlay_path.clone(),
    };

    let page = match &args.media_root {
        Some(root) => {
            let media = FsMediaLibrary::new(root, args.media_url.clone());
            prepare_page(&resolver, &media, &raw, &opts)
        }
        None => prepare_page(&resolver, &InMemoryMediaLibrary::new(), &raw, &opts),
    };

    eprintln!("eligibility: {}", serde_json::to_string(&page.eligibility)?);
    println!("{}", serde_json::to_string_pretty(&page.payload)?);
    Ok(())
}

fn cmd_transform(args: TransformArgs) -> anyhow::Result<()> {
    let payload = read_payload(&args.in_path)?;
    let config = BackgroundConfig::try_from(payload).context("decode client payload")?;
    let state = ScrollState::new(args.viewport, args.document)
        .with_scroll(args.scroll_top, args.scroll_left);

    let transform = compute_transform(&config, config.image_size(), &state);
    let out = serde_json::json!({
        "mode": if config.is_parallax() { "parallax" } else { "static" },
        "transform": transform,
        "css": transform.css_transform(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_check_image(args: CheckImageArgs) -> anyhow::Result<()> {
    let media = FsMediaLibrary::new(&args.root, "");
    let meta = media
        .probe(&args.path)
        .with_context(|| format!("probe image '{}'", args.path))?;
    let status = eligibility(Some(&meta));
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "path": meta.attachment_ref,
            "width": meta.width,
            "height": meta.height,
            "eligibility": status,
        }))?
    );
    Ok(())
}

fn read_payload(path: &Path) -> anyhow::Result<ClientPayload> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read payload '{}'", path.display()))?;
    ClientPayload::from_json_str(&s).context("parse payload JSON")
}
