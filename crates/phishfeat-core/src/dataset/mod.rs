//! CSV input and output tables.
//!
//! Input needs a `URL` column and may carry a `Label` column. Output has
//! `Domain`, the feature columns in order and, when labels were present, a
//! lowercase `label` column.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::heuristics::{FeatureVector, FEATURE_NAMES};

pub const URL_COLUMN: &str = "URL";
pub const LABEL_COLUMN: &str = "Label";
pub const DOMAIN_OUTPUT_COLUMN: &str = "Domain";
pub const LABEL_OUTPUT_COLUMN: &str = "label";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("The CSV file must contain a '{0}' column.")]
    MissingColumn(&'static str),
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

/// One input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub url: String,
    pub label: Option<String>,
}

/// Records loaded from an input table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<UrlRecord>,
    /// True when the input had a `Label` column.
    pub has_labels: bool,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One output row: the record's URL and label travel with its features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    pub url: String,
    pub features: FeatureVector,
    pub label: Option<String>,
}

pub fn read_records(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_records_from(file)
}

/// Reads records from any CSV source with a header row.
pub fn read_records_from<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let url_idx = headers
        .iter()
        .position(|h| h.trim() == URL_COLUMN)
        .ok_or(DatasetError::MissingColumn(URL_COLUMN))?;
    let label_idx = headers.iter().position(|h| h.trim() == LABEL_COLUMN);

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let url = row.get(url_idx).unwrap_or("").to_string();
        let label = label_idx.map(|i| row.get(i).unwrap_or("").to_string());
        records.push(UrlRecord { url, label });
    }

    Ok(Dataset {
        records,
        has_labels: label_idx.is_some(),
    })
}

pub fn output_header(with_label: bool) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(FEATURE_NAMES.len() + 2);
    header.push(DOMAIN_OUTPUT_COLUMN);
    header.extend(FEATURE_NAMES);
    if with_label {
        header.push(LABEL_OUTPUT_COLUMN);
    }
    header
}

pub fn write_rows(path: &Path, rows: &[FeatureRow], with_label: bool) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| DatasetError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_rows_to(file, rows, with_label)
}

pub fn write_rows_to<W: Write>(
    writer: W,
    rows: &[FeatureRow],
    with_label: bool,
) -> Result<(), DatasetError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(output_header(with_label))?;
    for row in rows {
        let mut fields: Vec<String> = Vec::with_capacity(FEATURE_NAMES.len() + 2);
        fields.push(row.url.clone());
        fields.extend(row.features.values().iter().map(u32::to_string));
        if with_label {
            fields.push(row.label.clone().unwrap_or_default());
        }
        wtr.write_record(&fields)?;
    }
    wtr.flush().map_err(|source| DatasetError::Io {
        path: "output".to_string(),
        source,
    })?;
    Ok(())
}
