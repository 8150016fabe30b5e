use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use indicatif::ProgressBar;
use tracing::{info, info_span, warn};

use caserec_cli::pipeline::{CleanContext, clean_file, load_schema};
use caserec_ingest::concat_tables;
use caserec_model::{CaseFold, ChoiceValidity, DatetimeLeniency, VocabularyRegistry};
use caserec_report::write_table;
use caserec_vocab::{default_registry, load_registry};

use crate::cli::{CleanArgs, VocabArgs};
use crate::summary::apply_table_style;
use crate::types::CleanResult;

/// Column appended to concatenated output naming each row's source file.
const SOURCE_COLUMN: &str = "ARCHIVO_ORIGEN";

pub fn run_vocab(args: &VocabArgs) -> Result<()> {
    let registry = build_registry(args.vocab_dir.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Vocabulary", "Values", "Aliases", "Case", "Code prefix"]);
    apply_table_style(&mut table);
    for name in registry.names() {
        let Some(vocabulary) = registry.get(name) else {
            continue;
        };
        let case = match vocabulary.case_fold {
            CaseFold::Upper => "upper",
            CaseFold::Lower => "lower",
        };
        table.add_row(vec![
            name.to_string(),
            vocabulary.values.len().to_string(),
            vocabulary.aliases.len().to_string(),
            case.to_string(),
            if vocabulary.strip_code_prefix { "stripped" } else { "-" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let mut schema = load_schema(&args.schema)?;
    if args.permissive {
        schema.options.choice_validity = ChoiceValidity::Permissive;
    }
    if args.strict_dates {
        schema.options.datetime_leniency = DatetimeLeniency::Strict;
    }
    let registry = build_registry(args.vocab_dir.as_deref())?;

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.inputs[0]
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default()
            .join("cleaned")
    });

    let run_span = info_span!("clean", schema = %schema.version);
    let _run_guard = run_span.enter();
    info!(
        schema = %schema.version,
        files = args.inputs.len(),
        output_dir = %output_dir.display(),
        "cleaning run started"
    );

    let context = CleanContext {
        schema: &schema,
        registry: &registry,
        output_dir: &output_dir,
        dry_run: args.dry_run,
    };

    let progress = if args.inputs.len() > 1 {
        Some(ProgressBar::new(args.inputs.len() as u64))
    } else {
        None
    };

    let mut files = Vec::new();
    let mut cleaned = Vec::new();
    let mut errors = Vec::new();
    for input in &args.inputs {
        if let Some(bar) = &progress {
            bar.set_message(input.display().to_string());
        }
        match clean_file(input, &context) {
            Ok((report, table)) => {
                let label = input
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("unknown")
                    .to_string();
                cleaned.push((label, table));
                files.push(report);
            }
            Err(error) => {
                warn!(file = %input.display(), %error, "file skipped");
                errors.push(format!("{}: {error:#}", input.display()));
            }
        }
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    let mut concat_output = None;
    if let Some(path) = &args.concat
        && !args.dry_run
        && !cleaned.is_empty()
    {
        let combined = concat_tables(&cleaned, SOURCE_COLUMN);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create concat dir: {}", parent.display()))?;
        }
        write_table(&combined, path, schema.delimiter)?;
        concat_output = Some(path.clone());
    }

    let has_failures = !errors.is_empty();
    Ok(CleanResult {
        schema_version: schema.version,
        output_dir,
        files,
        concat_output,
        errors,
        has_failures,
    })
}

fn build_registry(vocab_dir: Option<&std::path::Path>) -> Result<VocabularyRegistry> {
    match vocab_dir {
        Some(dir) => load_registry(dir),
        None => Ok(default_registry()),
    }
}
