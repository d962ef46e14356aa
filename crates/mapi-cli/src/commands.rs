use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use mapi_core::{Source, TagTable, fetch_sources, full_pipeline};
use mapi_model::NormalizationOptions;
use mapi_normalize::{Normalizer, classify};
use tracing::{debug, info, info_span};

use crate::cli::{CheckArgs, ConvertArgs, NormalizeArgs, SourceArgs};
use crate::sources::JsonFileSource;
use crate::types::{CheckResult, ConvertResult, FetchResult, NormalizedName};

/// Builds the normalizer, loading the segmentation model when one is given.
pub fn build_normalizer(options: &NormalizationOptions) -> Result<Normalizer> {
    let normalizer = Normalizer::from_options(options).context("build normalizer")?;
    debug!(
        segmentation = options.segmentation_enabled(),
        sort_candidates = options.sort_candidates,
        "normalizer ready"
    );
    Ok(normalizer)
}

pub fn run_normalize(args: &NormalizeArgs, normalizer: &Normalizer) -> Vec<NormalizedName> {
    args.names
        .iter()
        .map(|raw| NormalizedName {
            raw: raw.clone(),
            kind: classify(raw).0,
            name: normalizer.normalize(raw),
        })
        .collect()
}

pub fn run_fetch(args: &SourceArgs, cache_dir: &Path) -> Result<FetchResult> {
    let sources = open_sources(args, cache_dir)?;
    fetch_sources(sources.iter().map(as_source), cache_dir)?;
    Ok(FetchResult {
        cache_dir: cache_dir.to_path_buf(),
        fetched: sources.iter().map(|s| s.name().to_string()).collect(),
    })
}

pub fn run_convert(
    args: &ConvertArgs,
    cache_dir: &Path,
    normalizer: &Normalizer,
    options: &NormalizationOptions,
) -> Result<ConvertResult> {
    let start = Instant::now();
    let seed = match &args.table {
        Some(path) => load_table(path)?,
        None => TagTable::new(),
    };
    let sources = open_sources(&args.sources, cache_dir)?;

    let table = info_span!("convert", cache_dir = %cache_dir.display())
        .in_scope(|| full_pipeline(seed, sources.iter().map(as_source), cache_dir, normalizer))?;

    match &args.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            write_table(&table, io::BufWriter::new(file))
                .with_context(|| format!("write {}", path.display()))?;
        }
        None => write_table(&table, io::stdout().lock()).context("write table to stdout")?,
    }

    info!(
        tag_count = table.len(),
        unresolved = table.unresolved_count(),
        duration_ms = start.elapsed().as_millis(),
        "convert complete"
    );
    Ok(ConvertResult {
        output: args.output.clone(),
        source_count: table.sources().len(),
        tag_count: table.len(),
        unresolved: table.non_unique_names(normalizer, options.sort_candidates),
    })
}

pub fn run_check(
    args: &CheckArgs,
    normalizer: &Normalizer,
    options: &NormalizationOptions,
) -> Result<CheckResult> {
    let table = load_table(&args.table)?;
    Ok(CheckResult {
        table: args.table.clone(),
        tag_count: table.len(),
        unresolved: table.non_unique_names(normalizer, options.sort_candidates),
        stale: table.invariant_violations(normalizer),
    })
}

pub fn load_table(path: &Path) -> Result<TagTable> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse tag table {}", path.display()))
}

fn write_table<W: Write>(table: &TagTable, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, table)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn open_sources(args: &SourceArgs, cache_dir: &Path) -> Result<Vec<JsonFileSource>> {
    args.sources
        .iter()
        .map(|relative| {
            JsonFileSource::open(cache_dir, relative)
                .with_context(|| format!("open source {}", relative.display()))
        })
        .collect()
}

fn as_source(source: &JsonFileSource) -> &dyn Source {
    source
}
