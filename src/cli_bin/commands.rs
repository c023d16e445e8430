//! CLI command handlers that bridge CLI arguments to library operations

use crate::cli_bin::args::*;
use anyhow::{Context, Result};
use jaxon::{
    select_item, select_items, DocumentFormat, DocumentReader, FileResolver, QueryPath,
    ReaderConfig, ResolvedFile, ResolverConfig, Segment,
};
use log::{debug, info, warn};
use serde_json::Value;
use std::io::Read;

/// A decoded input document and the name it is reported under
struct Source {
    label: String,
    document: Value,
}

/// Execute the get command
pub fn get_command(args: GetArgs) -> Result<()> {
    debug!("Executing get command with args: {:?}", args);

    let sources = load_sources(&args.input)?;
    let results = select_single(&sources, &args.query)?;
    emit(&render_single(&results, args.format)?);
    Ok(())
}

/// Execute the items command
pub fn items_command(args: ItemsArgs) -> Result<()> {
    debug!("Executing items command with args: {:?}", args);

    let sources = load_sources(&args.input)?;
    let results = select_many(&sources, &args.query)?;
    if results.iter().all(|(_, items)| items.is_empty()) {
        info!("No matching items found");
    }
    emit(&render_items(&results, args.format, args.count)?);
    Ok(())
}

/// Execute the check command
pub fn check_command(args: CheckArgs) -> Result<()> {
    debug!("Executing check command");

    emit(&render_check(&args.queries)?);
    info!("All {} path(s) are valid", args.queries.len());
    Ok(())
}

// Helper functions

fn load_sources(input: &InputOptions) -> Result<Vec<Source>> {
    load_sources_from(input, std::io::stdin().lock())
}

/// Decode every input; `stdin` is only read when no files are given
fn load_sources_from<R: Read>(input: &InputOptions, stdin: R) -> Result<Vec<Source>> {
    let reader = DocumentReader::with_config(ReaderConfig {
        format: input.input.into(),
        ..Default::default()
    });

    if input.files.is_empty() {
        debug!("Reading document from standard input");
        let document = reader
            .read_from(stdin)
            .context("failed to read document from standard input")?;
        return Ok(vec![Source {
            label: "-".to_string(),
            document,
        }]);
    }

    let files = resolve_files(input)?;
    if files.is_empty() {
        warn!("No files found to process");
    }

    files
        .into_iter()
        .map(|file| {
            let format = match reader.config().format {
                DocumentFormat::Auto => file.format(),
                explicit => explicit,
            };
            debug!("Processing file: {} as {:?}", file.path().display(), format);
            let document = reader
                .read_file_as(file.path(), format)
                .with_context(|| format!("failed to read {}", file.path().display()))?;
            Ok(Source {
                label: file.path().display().to_string(),
                document,
            })
        })
        .collect()
}

fn resolve_files(input: &InputOptions) -> Result<Vec<ResolvedFile>> {
    let defaults = ResolverConfig::default();
    let config = ResolverConfig {
        follow_links: input.follow_links,
        max_depth: input.max_depth,
        include_hidden: input.include_hidden,
        include_extensions: if input.extensions.is_empty() {
            defaults.include_extensions
        } else {
            input.extensions.clone()
        },
    };

    Ok(FileResolver::with_config(config).resolve_paths(input.files.as_slice())?)
}

fn select_single(sources: &[Source], query: &str) -> Result<Vec<(String, String)>> {
    sources
        .iter()
        .map(|source| {
            let item = select_item(&source.document, query)
                .with_context(|| format!("query '{}' failed for {}", query, source.label))?;
            Ok((source.label.clone(), item))
        })
        .collect()
}

fn select_many(sources: &[Source], query: &str) -> Result<Vec<(String, Vec<String>)>> {
    sources
        .iter()
        .map(|source| {
            let items = select_items(&source.document, query)
                .with_context(|| format!("query '{}' failed for {}", query, source.label))?;
            Ok((source.label.clone(), items))
        })
        .collect()
}

/// Render one item per source; labels appear once there is more than one source
fn render_single(results: &[(String, String)], format: OutputFormat) -> Result<String> {
    let labelled = results.len() > 1;
    match format {
        OutputFormat::Lines => Ok(results
            .iter()
            .map(|(label, item)| line(labelled, label, item))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let output = if labelled {
                Value::Object(
                    results
                        .iter()
                        .map(|(label, item)| (label.clone(), Value::String(item.clone())))
                        .collect(),
                )
            } else {
                results
                    .first()
                    .map(|(_, item)| Value::String(item.clone()))
                    .unwrap_or(Value::Null)
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

fn render_items(
    results: &[(String, Vec<String>)],
    format: OutputFormat,
    count: bool,
) -> Result<String> {
    let labelled = results.len() > 1;
    if count {
        return Ok(results
            .iter()
            .map(|(label, items)| line(labelled, label, &items.len().to_string()))
            .collect::<Vec<_>>()
            .join("\n"));
    }

    match format {
        OutputFormat::Lines => Ok(results
            .iter()
            .flat_map(|(label, items)| items.iter().map(move |item| line(labelled, label, item)))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let output = if labelled {
                Value::Object(
                    results
                        .iter()
                        .map(|(label, items)| (label.clone(), string_array(items)))
                        .collect(),
                )
            } else {
                results
                    .first()
                    .map(|(_, items)| string_array(items))
                    .unwrap_or_else(|| Value::Array(Vec::new()))
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

/// Describe each path segment by segment, stopping at the first invalid path
fn render_check(queries: &[String]) -> Result<String> {
    let mut lines = Vec::new();
    for query in queries {
        let path = QueryPath::parse(query)?;
        if path.has_wildcard() {
            lines.push(format!("{} (may select several items)", path));
        } else {
            lines.push(path.to_string());
        }
        for (i, segment) in path.segments().iter().enumerate() {
            lines.push(format!("  {}: {}", i + 1, describe_segment(segment)));
        }
    }
    Ok(lines.join("\n"))
}

fn emit(output: &str) {
    if !output.is_empty() {
        println!("{}", output);
    }
}

fn line(labelled: bool, label: &str, item: &str) -> String {
    if labelled {
        format!("{}: {}", label, item)
    } else {
        item.to_string()
    }
}

fn string_array(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

fn describe_segment(segment: &Segment) -> String {
    match segment {
        Segment::Key(key) => format!("key {:?}", key),
        Segment::Index { index, key: None } => format!("index {}", index),
        Segment::Index {
            index,
            key: Some(key),
        } => format!("key {:?} then index {}", key, index),
        Segment::Wildcard { key: None } => "every element".to_string(),
        Segment::Wildcard { key: Some(key) } => format!("key {:?} then every element", key),
    }
}
