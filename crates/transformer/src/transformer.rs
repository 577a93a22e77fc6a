use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use shmin_core::{validate_identifier, KEYWORDS};

use crate::{
    collector::IdentCollector,
    filter::{
        IdentFilterPlugin, IdentFilterPluginAdapter, IdentItem, NamingConventionFilter,
        PreserveNamesFilter, ProtectedNamesFilter,
    },
    lexer::tokenize,
    replacer::IdentReplacer,
    stripper::{
        collapse_punctuation_space, compact_segments, join_segments, strip_comments,
        trim_and_drop_blank, LineKind, ESCAPED_NEWLINE,
    },
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOption {
    /// Shorten user identifiers. Defaults to `true`.
    pub rename: Option<bool>,
    /// Skip `uTime`-shaped and all-uppercase names. Defaults to `true`.
    pub naming_convention: Option<bool>,
    /// Extra names that must keep their spelling.
    pub preserve_names: Vec<String>,
    /// Join output lines with a literal `\n` escape rather than a line
    /// break. Defaults to `true`.
    pub escape_newlines: Option<bool>,
}

impl TransformOption {
    fn validate(&self) -> Result<()> {
        for name in &self.preserve_names {
            validate_identifier(name).context("invalid entry in `preserveNames`")?;
        }

        Ok(())
    }

    fn separator(&self) -> &'static str {
        if self.escape_newlines.unwrap_or(true) {
            ESCAPED_NEWLINE
        } else {
            "\n"
        }
    }
}

#[derive(Debug, Default)]
pub struct TransformOutput {
    pub content: String,
    /// `(original, alias)` pairs ordered by original name.
    pub ident_map: Vec<(String, String)>,
}

/// Renames every unprotected identifier of `source` to a short alias.
///
/// `source` should already be free of comments. Candidates are collected
/// from rename sites, dropped when `filter` claims them, sorted, and
/// given aliases in that order. The aliases avoid keywords, protected names
/// and every name that keeps its spelling somewhere in the output. The
/// rewrite is a single pass, so an alias may reuse the spelling of another
/// candidate.
pub fn identifier_minify(
    source: &str,
    filter: &dyn IdentFilterPlugin,
) -> (String, IdentReplacer) {
    let tokens = tokenize(source);

    // collection
    let mut collector = IdentCollector::new();
    collector.collect(&tokens);

    let IdentCollector {
        protected,
        field,
        used_ident,
        fixed_ident,
    } = collector;

    // filter does not have to be replaced
    let protected_filter = ProtectedNamesFilter(&protected);
    let candidates = field
        .iter()
        .filter(|(ident, sites)| {
            let item = IdentItem {
                ident: ident.as_str(),
                sites: **sites,
            };

            let keep = protected_filter.filter_ident(&item) || filter.filter_ident(&item);
            if keep {
                trace!(ident = item.ident, sites = item.sites, "keep original spelling");
            }
            !keep
        })
        .map(|(ident, _)| ident.as_str())
        .sorted()
        .collect::<Vec<_>>();

    debug!(
        sites = field.values().sum::<usize>(),
        candidates = candidates.len(),
        "collected rename candidates"
    );

    // everything that survives the rewrite unchanged
    let candidate_set = candidates.iter().copied().collect::<FxHashSet<_>>();
    let survivors = used_ident
        .into_iter()
        .filter(|ident| !candidate_set.contains(ident.as_str()))
        .chain(fixed_ident);

    // replace ident
    let mut replacer = IdentReplacer::new();
    replacer.extend_used_ident(KEYWORDS.iter().map(|k| k.to_string()));
    replacer.extend_used_ident(protected.iter().cloned());
    replacer.extend_used_ident(survivors);

    for ident in candidates {
        replacer.alloc_ident(ident);
    }

    let content = replacer.replace(&tokens);

    (content, replacer)
}

pub fn transform(content: String, options: TransformOption) -> Result<TransformOutput> {
    transform_with_plugins(content, options, vec![])
}

/// Runs the whole pipeline; `plugins` are consulted in addition to the
/// filters the options enable.
pub fn transform_with_plugins(
    content: String,
    options: TransformOption,
    plugins: Vec<Box<dyn IdentFilterPlugin>>,
) -> Result<TransformOutput> {
    options.validate()?;

    // pass 1: comments and blank lines
    let stripped = strip_comments(&content);
    let source = trim_and_drop_blank(stripped.split('\n')).join("\n");
    debug!(bytes = source.len(), "stripped comments");

    // rename
    let (source, ident_map) = if options.rename.unwrap_or(true) {
        let mut filter = IdentFilterPluginAdapter::new(plugins)
            .with_plugin(Box::new(PreserveNamesFilter::new(options.preserve_names.clone())));

        if options.naming_convention.unwrap_or(true) {
            filter = filter.with_plugin(Box::new(NamingConventionFilter));
        }

        let (renamed, replacer) = identifier_minify(&source, &filter);
        (renamed, replacer.alias_table())
    } else {
        (source, vec![])
    };

    // pass 2: compaction
    let lines = trim_and_drop_blank(source.split('\n'));
    let mut segments = compact_segments(&lines);

    for segment in segments.iter_mut().filter(|s| s.kind == LineKind::Code) {
        segment.text = collapse_punctuation_space(&segment.text);
    }

    let content = join_segments(&segments, options.separator());
    debug!(
        segments = segments.len(),
        renamed = ident_map.len(),
        bytes = content.len(),
        "minified"
    );

    Ok(TransformOutput { content, ident_map })
}
