//! Inspect the dictionary catalog for a search-path configuration.
//!
//! Usage:
//!   spellcat modules
//!   spellcat --dict-dir /usr/lib/aspell dicts --code en
//!   spellcat resolve en_US
//!   spellcat decode en-GB-ize-80.multi --module default

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use spellcat::catalog::{self, DIRECT_EXTENSION};
use spellcat::{CatalogCache, CatalogConfig, CatalogSnapshot, DictionaryEntry, resolve};
use std::env;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellcat")]
#[command(about = "List spell-checker modules and dictionaries found in the search directories")]
struct Cli {
    /// JSON config file with `data-dir` and `dict-dir` lists.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Replace the data-dir list (repeatable).
    #[arg(long = "data-dir", global = true)]
    data_dir: Vec<String>,
    /// Replace the dict-dir list (repeatable).
    #[arg(long = "dict-dir", global = true)]
    dict_dir: Vec<String>,
    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List modules in catalog order.
    Modules,
    /// List dictionaries in catalog order.
    Dicts {
        /// Only dictionaries with this code or language.
        #[arg(long)]
        code: Option<String>,
    },
    /// Print the main word list and flags for a dictionary name.
    Resolve { name: String },
    /// Decode a dictionary filename without touching the filesystem.
    Decode {
        filename: String,
        /// Module owning the file's extension; omit for direct names.
        #[arg(long)]
        module: Option<String>,
    },
    /// List definitions and files dropped while building the catalog.
    Rejected,
}

#[derive(Serialize)]
struct ModuleView<'a> {
    name: &'a str,
    order_num: f64,
    lib_dir: Option<&'a str>,
    dict_dirs: &'a [String],
    dict_exts: &'a [String],
}

#[derive(Serialize)]
struct DictView<'a> {
    name: &'a str,
    code: &'a str,
    jargon: &'a str,
    size: &'a str,
    module: &'a str,
    direct: bool,
    info_file: String,
}

impl<'a> From<&'a DictionaryEntry> for DictView<'a> {
    fn from(entry: &'a DictionaryEntry) -> Self {
        Self {
            name: &entry.name,
            code: &entry.code,
            jargon: &entry.jargon,
            size: &entry.size_str,
            module: &entry.module.name,
            direct: entry.direct,
            info_file: entry.info_file.display().to_string(),
        }
    }
}

#[derive(Serialize)]
struct ResolvedView {
    name: String,
    main_word_list: String,
    flags: String,
}

#[derive(Serialize)]
struct DecodedView {
    name: String,
    code: String,
    jargon: String,
    size: String,
    module: Option<String>,
}

#[derive(Serialize)]
struct RejectedView<'a> {
    source: &'a str,
    kind: &'a str,
    reason: &'a str,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut cache = CatalogCache::new();

    match &cli.command {
        Command::Modules => list_modules(build(&cli, &mut cache)?, cli.json),
        Command::Dicts { code } => list_dicts(build(&cli, &mut cache)?, code.as_deref(), cli.json),
        Command::Resolve { name } => resolve_name(build(&cli, &mut cache)?, name, cli.json),
        Command::Rejected => list_rejected(build(&cli, &mut cache)?, cli.json),
        Command::Decode { filename, module } => decode(filename, module.as_deref(), cli.json),
    }
}

fn build<'a>(cli: &Cli, cache: &'a mut CatalogCache) -> Result<&'a CatalogSnapshot> {
    let config = load_config(cli)?;
    cache
        .get(&config.search_dirs())
        .context("building dictionary catalog")
}

/// Defaults, then `--config`, then env overrides, then explicit flags.
fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    config.apply_overrides(|name| env::var(name).ok());
    if !cli.data_dir.is_empty() {
        config.data_dir = cli.data_dir.clone();
    }
    if !cli.dict_dir.is_empty() {
        config.dict_dir = cli.dict_dir.clone();
    }
    Ok(config)
}

fn list_modules(snapshot: &CatalogSnapshot, json: bool) -> Result<()> {
    let views: Vec<ModuleView> = snapshot
        .modules()
        .iter()
        .map(|m| ModuleView {
            name: &m.name,
            order_num: m.order_num,
            lib_dir: m.lib_dir.as_deref(),
            dict_dirs: &m.dict_dirs,
            dict_exts: &m.dict_exts,
        })
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }
    for view in views {
        println!(
            "{:<16} {:.3}  exts: {}  dirs: {}",
            view.name,
            view.order_num,
            view.dict_exts.join(","),
            view.dict_dirs.join(",")
        );
    }
    Ok(())
}

fn list_dicts(snapshot: &CatalogSnapshot, code: Option<&str>, json: bool) -> Result<()> {
    let dictionaries = snapshot.dictionaries();
    let views: Vec<DictView> = match code {
        Some(code) => dictionaries.for_code(code).map(DictView::from).collect(),
        None => dictionaries.iter().map(DictView::from).collect(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }
    for view in views {
        println!(
            "{:<24} {:<6} {:<12} {} {:<10} {}",
            view.name,
            view.code,
            view.jargon,
            view.size,
            view.module,
            view.info_file
        );
    }
    Ok(())
}

fn resolve_name(snapshot: &CatalogSnapshot, name: &str, json: bool) -> Result<()> {
    let Some(entry) = snapshot.dictionaries().find(name) else {
        bail!("no dictionary named '{name}' in the catalog");
    };
    let resolved = resolve(entry)?;
    let view = ResolvedView {
        name: entry.name.clone(),
        main_word_list: resolved.main_word_list.display().to_string(),
        flags: resolved.flags,
    };
    if json {
        println!("{}", serde_json::to_string(&view)?);
    } else if view.flags.is_empty() {
        println!("{}", view.main_word_list);
    } else {
        println!("{} {}", view.main_word_list, view.flags);
    }
    Ok(())
}

fn list_rejected(snapshot: &CatalogSnapshot, json: bool) -> Result<()> {
    let views: Vec<RejectedView> = snapshot
        .rejections()
        .iter()
        .map(|r| RejectedView {
            source: &r.source,
            kind: r.kind,
            reason: &r.reason,
        })
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }
    for view in views {
        println!("{}: {} ({})", view.source, view.reason, view.kind);
    }
    Ok(())
}

fn decode(filename: &str, module: Option<&str>, json: bool) -> Result<()> {
    let base = match filename.rfind('.') {
        Some(dot) if dot > 0 => &filename[..dot],
        _ => filename,
    };
    let module = if filename.ends_with(DIRECT_EXTENSION) {
        None
    } else {
        module
    };
    let Some(decoded) = catalog::decode(base, module) else {
        bail!("'{filename}' is not a dictionary name");
    };
    let view = DecodedView {
        module: decoded
            .module_name
            .or_else(|| module.map(str::to_string)),
        name: decoded.name,
        code: decoded.code,
        jargon: decoded.jargon,
        size: decoded.size_str,
    };
    if json {
        println!("{}", serde_json::to_string(&view)?);
    } else {
        println!("name:   {}", view.name);
        println!("code:   {}", view.code);
        println!("jargon: {}", view.jargon);
        println!("size:   {}", view.size);
        println!("module: {}", view.module.as_deref().unwrap_or(""));
    }
    Ok(())
}
