//! Filter command implementation
//!
//! Reads a contact CSV, applies the tag selection and either prints the
//! matches as a table or writes them to a CSV file.

use std::path::Path;

use crate::AppError;
use crate::cli::SelectionArgs;
use crate::config::AppConfig;
use crate::contacts::{ContactCollection, export, ingest};
use crate::filter::{ContactFilterExt, FilterSelection};
use crate::output;

type Result<T> = std::result::Result<T, AppError>;

/// Outcome of reading and filtering one contact list
#[derive(Debug, Clone)]
pub struct FilterRun {
    pub selection: FilterSelection,
    pub total: usize,
    pub matched: ContactCollection,
}

/// Read `input` and filter it by the requested tags
///
/// Returns `Ok(None)` when no tags were requested; nothing is read in that
/// case and an informational message is printed unless `quiet`.
///
/// # Errors
///
/// Returns `AppError` if:
/// - A tag is not in the configured vocabulary
/// - The CSV cannot be read or lacks a `display_name` column
pub fn run(
    input: &Path,
    args: &SelectionArgs,
    config: &AppConfig,
    quiet: bool,
) -> Result<Option<FilterRun>> {
    if args.tags.is_empty() {
        if !quiet {
            println!("Select at least one tag to filter contacts (use -t TAG).");
        }
        return Ok(None);
    }

    let selection = config
        .vocabulary()
        .selection(&args.tags, args.mode(config.default_mode))?;

    let contacts = ingest::read_csv(input)?;
    let matched = contacts.filter_tags(&selection)?;

    Ok(Some(FilterRun {
        selection,
        total: contacts.len(),
        matched,
    }))
}

/// Execute the filter command
///
/// # Errors
///
/// Returns `AppError` if the contacts cannot be read or filtered, or the
/// export file cannot be written.
pub fn execute(
    input: &Path,
    args: &SelectionArgs,
    output_path: Option<&Path>,
    config: &AppConfig,
    quiet: bool,
) -> Result<()> {
    let Some(result) = run(input, args, config, quiet)? else {
        return Ok(());
    };

    if !quiet {
        println!(
            "{}",
            output::match_summary(result.matched.len(), result.total)
        );
    }

    if let Some(path) = output_path {
        export::write_csv_file(path, &result.matched)?;
        if !quiet {
            println!("Exported to {}", path.display());
        }
    } else {
        for line in output::contact_table(result.matched.as_slice(), quiet) {
            println!("{line}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TagMode;
    use crate::testing::write_sample_csv;

    fn args(tags: &[&str], any: bool) -> SelectionArgs {
        SelectionArgs {
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            any,
            all: false,
        }
    }

    #[test]
    fn test_run_without_tags_reads_nothing() {
        let config = AppConfig::default();
        let result = run(Path::new("/nonexistent.csv"), &args(&[], false), &config, true).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_run_filters_csv() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_sample_csv(dir.path());
        let config = AppConfig::default();

        let and = run(&csv, &args(&["+mini", "+hdy"], false), &config, true)
            .unwrap()
            .unwrap();
        assert_eq!(and.total, 3);
        assert_eq!(and.selection.mode(), TagMode::All);
        assert_eq!(and.matched.names(), vec!["carol+mini+hdy"]);

        let or = run(&csv, &args(&["+mini", "+hdy"], true), &config, true)
            .unwrap()
            .unwrap();
        assert_eq!(or.matched.len(), 3);
    }

    #[test]
    fn test_run_uses_configured_default_mode() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_sample_csv(dir.path());
        let config = AppConfig {
            default_mode: TagMode::Any,
            ..AppConfig::default()
        };

        let result = run(&csv, &args(&["+mini", "+hdy"], false), &config, true)
            .unwrap()
            .unwrap();
        assert_eq!(result.matched.len(), 3);
    }

    #[test]
    fn test_run_rejects_unknown_tag() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_sample_csv(dir.path());
        let err = run(&csv, &args(&["+nope"], false), &AppConfig::default(), true).unwrap_err();
        assert!(matches!(err, AppError::FilterError(_)));
    }

    #[test]
    fn test_execute_writes_export() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_sample_csv(dir.path());
        let out = dir.path().join("filtered.csv");

        execute(&csv, &args(&["+hdy"], false), Some(&out), &AppConfig::default(), true).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            written,
            "display_name,country\nbob+hdy,UK\ncarol+mini+hdy,CA\n"
        );
    }
}
