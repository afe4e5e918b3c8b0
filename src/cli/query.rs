//! Query command implementation.
//!
//! Prints metadata records as JSON, either as authored or after the
//! fallback rules have been applied.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::args::QueryArgs;
use crate::log;
use crate::page::PageKey;
use crate::seo::meta::lookup;
use crate::seo::{MetadataRecord, ResolvedMeta};
use crate::utils::plural_count;

/// Metadata as authored or after fallback resolution
#[derive(Debug)]
pub enum QueryMeta {
    Raw(&'static MetadataRecord),
    Resolved(ResolvedMeta<'static>),
}

impl Serialize for QueryMeta {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            QueryMeta::Raw(record) => record.serialize(serializer),
            QueryMeta::Resolved(meta) => meta.serialize(serializer),
        }
    }
}

/// Result for a single queried page
#[derive(Debug, Serialize)]
pub struct PageQueryResult {
    pub key: PageKey,
    pub path: Option<&'static str>,
    #[serde(flatten)]
    pub meta: QueryMeta,
}

/// Execute query command
pub fn run_query(args: &QueryArgs) -> Result<()> {
    let results = query_keys(&args.keys, args.resolved);
    log!("query"; "found {}", plural_count(results.len(), "record"));

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Look up every key (all pages when `keys` is empty).
///
/// Unknown keys get the not-found record, same as the registry lookup.
fn query_keys(keys: &[String], resolved: bool) -> Vec<PageQueryResult> {
    let pages: Vec<(PageKey, &'static MetadataRecord)> = if keys.is_empty() {
        PageKey::ALL
            .into_iter()
            .map(|page| (page, page.metadata()))
            .collect()
    } else {
        keys.iter()
            .map(|key| {
                let page = PageKey::from_key(key).unwrap_or_else(|| {
                    log!("warning"; "unknown page key `{}`, using {}", key, PageKey::NotFound);
                    PageKey::NotFound
                });
                (page, lookup(key))
            })
            .collect()
    };

    pages
        .into_iter()
        .map(|(key, record)| PageQueryResult {
            key,
            path: key.path(),
            meta: if resolved {
                QueryMeta::Resolved(record.resolve())
            } else {
                QueryMeta::Raw(record)
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as JsonValue;
    use tempfile::TempDir;

    fn to_json(results: &[PageQueryResult]) -> JsonValue {
        serde_json::to_value(results).unwrap()
    }

    #[test]
    fn test_query_all_pages() {
        let json = to_json(&query_keys(&[], false));
        let pages = json.as_array().unwrap();

        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0]["key"], "home");
        assert_eq!(pages[0]["path"], "/");
        assert_eq!(pages[3]["key"], "not-found");
        assert!(pages[3]["path"].is_null());
    }

    #[test]
    fn test_query_raw_keeps_absent_fields_out() {
        let json = to_json(&query_keys(&["not-found".to_string()], false));
        assert!(json[0].get("ogUrl").is_none());
        assert_eq!(json[0]["ogTitle"], "404 - Page Not Found");
    }

    #[test]
    fn test_query_resolved_fills_defaults() {
        let json = to_json(&query_keys(&["about".to_string()], true));
        assert_eq!(json[0]["twitterTitle"], "React Landing App - About Us");
        assert_eq!(json[0]["ogType"], "website");
        assert_eq!(json[0]["ogUrl"], "https://example.com/about");
    }

    #[test]
    fn test_query_unknown_key_falls_back() {
        let results = query_keys(&["pricing".to_string()], false);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key, PageKey::NotFound);
    }

    #[test]
    fn test_query_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("meta.json");
        let args = QueryArgs {
            keys: vec!["contact".to_string()],
            resolved: false,
            pretty: true,
            output: Some(output.clone()),
        };

        run_query(&args).unwrap();

        let json: JsonValue = serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json[0]["title"], "Contact Us - React Landing App");
    }
}
