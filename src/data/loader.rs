use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use log::{debug, info};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::error::DataLoadError;
use super::model::{
    LaunchDataset, LaunchRecord, Outcome, COL_BOOSTER_CATEGORY, COL_BOOSTER_VERSION, COL_CLASS,
    COL_FLIGHT_NUMBER, COL_PAYLOAD, COL_PAYLOAD_SOURCE, COL_SITE,
};

type Result<T> = std::result::Result<T, DataLoadError>;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, one launch per line (the usual source)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – one column per attribute
///
/// The `Payload Mass (kg)` column is renamed to `PayloadMass` on the way in.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => {
            return Err(DataLoadError::UnsupportedFormat {
                extension: other.to_string(),
            })
        }
    };

    let dataset = LaunchDataset::from_records(records)?;
    let bounds = dataset.payload_bounds();
    info!(
        "Loaded {} launches from {} ({} sites, payload {}..={} kg)",
        dataset.len(),
        path.display(),
        dataset.sites().len(),
        bounds.min,
        bounds.max
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Column resolution
// ---------------------------------------------------------------------------

/// Positions of the known columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    site: usize,
    payload: usize,
    booster_category: usize,
    class: usize,
    flight_number: Option<usize>,
    booster_version: Option<usize>,
}

impl ColumnIndex {
    fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.as_ref().trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| DataLoadError::MissingColumn {
                column: name.to_string(),
            })
        };

        let payload = find(COL_PAYLOAD_SOURCE)
            .or_else(|| find(COL_PAYLOAD))
            .ok_or_else(|| DataLoadError::MissingColumn {
                column: COL_PAYLOAD_SOURCE.to_string(),
            })?;

        Ok(ColumnIndex {
            site: require(COL_SITE)?,
            payload,
            booster_category: require(COL_BOOSTER_CATEGORY)?,
            class: require(COL_CLASS)?,
            flight_number: find(COL_FLIGHT_NUMBER),
            booster_version: find(COL_BOOSTER_VERSION),
        })
    }
}

// ---------------------------------------------------------------------------
// Cell validation shared by all formats
// ---------------------------------------------------------------------------

fn require_text(row: usize, column: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(DataLoadError::EmptyCell {
            row,
            column: column.to_string(),
        }),
    }
}

fn validate_payload(row: usize, value: Option<f64>, raw: &dyn Fn() -> String) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(DataLoadError::InvalidPayload { row, value: raw() }),
    }
}

fn validate_class(row: usize, value: Option<f64>, raw: &dyn Fn() -> String) -> Result<Outcome> {
    value
        .filter(|v| v.fract() == 0.0)
        .and_then(|v| Outcome::from_class(v as i64))
        .ok_or_else(|| DataLoadError::InvalidOutcome { row, value: raw() })
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn optional_flight(value: Option<f64>) -> Option<u32> {
    value
        .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
        .map(|v| v as u32)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per record.
/// Columns other than the known ones (e.g. a pandas index column) are ignored.
fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file)
}

/// Parse launch records from any CSV reader.
pub fn read_csv<R: std::io::Read>(input: R) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let cols = ColumnIndex::resolve(&headers)?;
    debug!("CSV columns resolved: {cols:?}");

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).map(|s| s.to_string());
        let number = |idx: usize| record.get(idx).and_then(|s| s.trim().parse::<f64>().ok());

        let payload_raw = || record.get(cols.payload).unwrap_or("").to_string();
        let class_raw = || record.get(cols.class).unwrap_or("").to_string();

        records.push(LaunchRecord {
            site: require_text(row_no, COL_SITE, cell(cols.site))?,
            payload_mass: validate_payload(row_no, number(cols.payload), &payload_raw)?,
            booster_category: require_text(
                row_no,
                COL_BOOSTER_CATEGORY,
                cell(cols.booster_category),
            )?,
            outcome: validate_class(row_no, number(cols.class), &class_raw)?,
            flight_number: optional_flight(cols.flight_number.and_then(number)),
            booster_version: optional_text(cols.booster_version.and_then(cell)),
        });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "Booster Version Category": "v1.0",
///     "class": 0
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&text)
}

/// Parse launch records from a records-oriented JSON document.
pub fn parse_json(text: &str) -> Result<Vec<LaunchRecord>> {
    let root: JsonValue = serde_json::from_str(text)?;
    let rows: Vec<Map<String, JsonValue>> = serde_json::from_value(root)?;

    rows.iter()
        .enumerate()
        .map(|(row_no, obj)| json_record(row_no, obj))
        .collect()
}

fn json_record(row: usize, obj: &Map<String, JsonValue>) -> Result<LaunchRecord> {
    let field = |name: &str| {
        obj.get(name).ok_or_else(|| DataLoadError::MissingColumn {
            column: name.to_string(),
        })
    };
    let payload = obj
        .get(COL_PAYLOAD_SOURCE)
        .or_else(|| obj.get(COL_PAYLOAD))
        .ok_or_else(|| DataLoadError::MissingColumn {
            column: COL_PAYLOAD_SOURCE.to_string(),
        })?;
    let class = field(COL_CLASS)?;

    Ok(LaunchRecord {
        site: require_text(row, COL_SITE, json_text(field(COL_SITE)?))?,
        payload_mass: validate_payload(row, json_number(payload), &|| payload.to_string())?,
        booster_category: require_text(
            row,
            COL_BOOSTER_CATEGORY,
            json_text(field(COL_BOOSTER_CATEGORY)?),
        )?,
        outcome: validate_class(row, json_number(class), &|| class.to_string())?,
        flight_number: optional_flight(obj.get(COL_FLIGHT_NUMBER).and_then(json_number)),
        booster_version: optional_text(obj.get(COL_BOOSTER_VERSION).and_then(json_text)),
    })
}

fn json_text(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

fn json_number(val: &JsonValue) -> Option<f64> {
    match val {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per attribute.
///
/// Numeric columns may be any integer or float type and text columns Utf8 or
/// LargeUtf8: every column is cast to Float64 / Utf8 before reading. Works
/// with files written by both **Pandas** and **Polars**.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        let cols = ColumnIndex::resolve(&names)?;

        let site = cast(batch.column(cols.site), &DataType::Utf8)?;
        let payload = cast(batch.column(cols.payload), &DataType::Float64)?;
        let category = cast(batch.column(cols.booster_category), &DataType::Utf8)?;
        let class = cast(batch.column(cols.class), &DataType::Float64)?;
        let flight = cols
            .flight_number
            .map(|i| cast(batch.column(i), &DataType::Float64))
            .transpose()?;
        let version = cols
            .booster_version
            .map(|i| cast(batch.column(i), &DataType::Utf8))
            .transpose()?;

        let offset = records.len();
        for i in 0..batch.num_rows() {
            let row = offset + i;
            let payload_v = arrow_number(&payload, i);
            let class_v = arrow_number(&class, i);

            records.push(LaunchRecord {
                site: require_text(row, COL_SITE, arrow_text(&site, i))?,
                payload_mass: validate_payload(row, payload_v, &|| format_cell(payload_v))?,
                booster_category: require_text(
                    row,
                    COL_BOOSTER_CATEGORY,
                    arrow_text(&category, i),
                )?,
                outcome: validate_class(row, class_v, &|| format_cell(class_v))?,
                flight_number: optional_flight(flight.as_ref().and_then(|a| arrow_number(a, i))),
                booster_version: optional_text(version.as_ref().and_then(|a| arrow_text(a, i))),
            });
        }
    }

    Ok(records)
}

/// Read a cell from an array already cast to Utf8.
fn arrow_text(col: &ArrayRef, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    Some(col.as_string::<i32>().value(row).to_string())
}

/// Read a cell from an array already cast to Float64.
fn arrow_number(col: &ArrayRef, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    Some(col.as_primitive::<Float64Type>().value(row))
}

fn format_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}
