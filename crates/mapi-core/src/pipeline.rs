//! Driving sources through the table.

use std::path::Path;
use std::time::Instant;

use mapi_model::CanonicalName;
use mapi_normalize::Normalizer;
use tracing::{info, info_span, warn};

use crate::error::CoreError;
use crate::source::Source;
use crate::table::{MergeStats, TagTable};

/// Fetches every source's documents into `cache_dir`, stopping at the first
/// failure.
pub fn fetch_sources<'a, I>(sources: I, cache_dir: &Path) -> Result<(), CoreError>
where
    I: IntoIterator<Item = &'a dyn Source>,
{
    for source in sources {
        let span = info_span!("fetch", source = source.name());
        let start = Instant::now();
        span.in_scope(|| source.fetch(cache_dir))
            .map_err(|e| CoreError::from_source(source.name(), e))?;
        info!(
            source = source.name(),
            duration_ms = start.elapsed().as_millis(),
            "fetch complete"
        );
    }
    Ok(())
}

/// Fetches, parses and merges one source, then records its provenance.
pub fn merge_source_into_table(
    table: &mut TagTable,
    source: &dyn Source,
    cache_dir: &Path,
    normalizer: &Normalizer,
) -> Result<MergeStats, CoreError> {
    let span = info_span!("source", source = source.name());
    let _guard = span.enter();
    let start = Instant::now();

    source
        .fetch(cache_dir)
        .map_err(|e| CoreError::from_source(source.name(), e))?;
    let parsed = source
        .parse_enum_values(cache_dir)
        .map_err(|e| CoreError::from_source(source.name(), e))?;

    let stats = table.merge_source(normalizer, &parsed);
    table.insert_source(source.uri(), source.license());
    info!(
        tag_count = stats.tags,
        new_tags = stats.new_tags,
        unresolved = stats.unresolved,
        duration_ms = start.elapsed().as_millis(),
        "source merged"
    );
    Ok(stats)
}

/// Merges every source in order, then runs the resolution pass.
///
/// Tags still unresolved at the end are logged as warnings; they are part
/// of the result, not an error.
pub fn full_pipeline<'a, I>(
    mut table: TagTable,
    sources: I,
    cache_dir: &Path,
    normalizer: &Normalizer,
) -> Result<TagTable, CoreError>
where
    I: IntoIterator<Item = &'a dyn Source>,
{
    let start = Instant::now();
    for source in sources {
        merge_source_into_table(&mut table, source, cache_dir, normalizer)?;
    }

    table.sort_by_key();
    let resolved = info_span!("normalize_unique_names")
        .in_scope(|| table.normalize_unique_names(normalizer));

    for unresolved in table.non_unique_names(normalizer, true) {
        let candidates: Vec<&str> = unresolved
            .candidates
            .iter()
            .map(CanonicalName::as_str)
            .collect();
        warn!(
            tag = %unresolved.tag,
            reason = unresolved.reason().as_str(),
            orig_ids = ?unresolved.orig_ids,
            candidates = ?candidates,
            "tag has no single canonical name"
        );
    }
    info!(
        tag_count = table.len(),
        resolved,
        unresolved = table.unresolved_count(),
        duration_ms = start.elapsed().as_millis(),
        "aggregation complete"
    );
    Ok(table)
}
