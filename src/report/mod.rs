//! Per-sample clinical report
//!
//! Parses a clinical run's variant export (tab-delimited), looks each
//! reported variant up through the matcher, and renders the matched
//! interpretations as an HTML report. One malformed variant row fails only
//! its own lookup; the row is annotated in the report and the batch
//! continues.

use std::fs::File;
use std::path::Path;

use minijinja::{context, Environment};
use serde::Serialize;
use tracing::{info, warn};

use crate::matcher::TierOrder;
use crate::model::{KnowledgeBase, SampleVariant};
use crate::{Error, Result};

/// Embedded report template.
const TEMPLATE: &str = include_str!("../../templates/report.html");

/// Required sample-file columns.
const COL_GENE: &str = "Gene";
const COL_VARIANT: &str = "Variant";
/// Optional context columns.
const COL_TUMOR: &str = "Tumor Type";
const COL_TISSUE: &str = "Tissue Type";

/// Read a tab-delimited sample variant file.
///
/// Requires `Gene` and `Variant` columns; `Tumor Type` and `Tissue Type`
/// columns, when present and non-empty, become the match contexts.
///
/// # Errors
///
/// Returns `Error::Storage` if the file cannot be opened and
/// `Error::InputFormat` if a required column is missing.
pub fn read_sample_tsv<P: AsRef<Path>>(path: P) -> Result<Vec<SampleVariant>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::Storage(format!("cannot open sample file {path:?}: {e}")))?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(ToString::to_string).collect();
    let find = |name: &str| headers.iter().position(|h| h == name);
    let gene_col = find(COL_GENE)
        .ok_or_else(|| Error::InputFormat(format!("required column {COL_GENE:?} not found")))?;
    let variant_col = find(COL_VARIANT)
        .ok_or_else(|| Error::InputFormat(format!("required column {COL_VARIANT:?} not found")))?;
    let tumor_col = find(COL_TUMOR);
    let tissue_col = find(COL_TISSUE);

    let cell = |record: &csv::StringRecord, col: usize| -> String {
        record.get(col).unwrap_or("").trim().to_string()
    };

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut builder =
            SampleVariant::builder(cell(&record, gene_col), cell(&record, variant_col));
        if let Some(col) = tumor_col {
            let tumor = cell(&record, col);
            if !tumor.is_empty() {
                builder = builder.tumor_context(tumor);
            }
        }
        if let Some(col) = tissue_col {
            let tissue = cell(&record, col);
            if !tissue.is_empty() {
                builder = builder.tissue_context(tissue);
            }
        }
        samples.push(builder.build());
    }
    info!(variants = samples.len(), path = %path.display(), "parsed sample file");
    Ok(samples)
}

/// One matched interpretation, shaped for the template.
#[derive(Debug, Clone, Serialize)]
pub struct ReportInterpretation {
    /// Source row id in the knowledge base.
    pub source_id: u64,
    /// Interpretation text.
    pub text: String,
    /// Citations, one per line in the knowledge base.
    pub citations: Vec<String>,
}

/// One sample variant with its lookup outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    /// Gene symbol as reported.
    pub gene: String,
    /// Variant descriptor as reported.
    pub variant: String,
    /// Tumor context, if reported.
    pub tumor_context: Option<String>,
    /// Tissue context, if reported.
    pub tissue_context: Option<String>,
    /// Matched interpretations, in tier order.
    pub interpretations: Vec<ReportInterpretation>,
    /// Lookup error annotation, when this row's lookup failed.
    pub error: Option<String>,
}

/// A rendered-ready report: one row per reported variant.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Name of the sample export the report was built from.
    pub source: String,
    /// Generation timestamp (UTC).
    pub generated: String,
    /// Per-variant rows.
    pub rows: Vec<ReportRow>,
}

/// Look up every sample variant and assemble the report.
///
/// Per-row lookup failures (e.g. a row with no variant description) are
/// annotated on the row and logged; they never abort the batch.
#[must_use]
pub fn build_report(kb: &KnowledgeBase, samples: &[SampleVariant], source: &str) -> Report {
    let rows = samples
        .iter()
        .map(|sample| {
            let (interpretations, error) =
                match kb.find_interpretations(sample, TierOrder::default()) {
                    Ok(found) => {
                        let shaped = found
                            .iter()
                            .map(|interp| ReportInterpretation {
                                source_id: interp.source_id(),
                                text: interp.text().to_string(),
                                citations: interp
                                    .citations()
                                    .lines()
                                    .map(ToString::to_string)
                                    .collect(),
                            })
                            .collect();
                        (shaped, None)
                    }
                    Err(err) => {
                        warn!(
                            gene = sample.gene(),
                            "lookup failed for sample variant: {err}"
                        );
                        (Vec::new(), Some(err.to_string()))
                    }
                };
            ReportRow {
                gene: sample.gene().to_string(),
                variant: sample.variant_description().to_string(),
                tumor_context: sample.tumor_context().map(ToString::to_string),
                tissue_context: sample.tissue_context().map(ToString::to_string),
                interpretations,
                error,
            }
        })
        .collect();

    Report {
        source: source.to_string(),
        generated: chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
        rows,
    }
}

/// Render the report as HTML.
///
/// # Errors
///
/// Returns `Error::Template` if the template fails to render.
pub fn render_html(report: &Report) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("report.html", TEMPLATE)?;
    let template = env.get_template("report.html")?;
    Ok(template.render(context! { report => report })?)
}
