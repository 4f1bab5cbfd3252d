use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster generation: category, version prefix, payload ceiling, success rate.
const BOOSTERS: [(&str, &str, f64, f64); 5] = [
    ("v1.0", "F9 v1.0", 700.0, 0.2),
    ("v1.1", "F9 v1.1", 4500.0, 0.35),
    ("FT", "F9 FT", 7000.0, 0.75),
    ("B4", "F9 B4", 9600.0, 0.6),
    ("B5", "F9 B5", 9600.0, 0.9),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

struct Launch {
    flight: i64,
    site: &'static str,
    class: i64,
    payload: f64,
    booster_version: String,
    category: &'static str,
}

fn generate(n: usize, rng: &mut SimpleRng) -> Vec<Launch> {
    (0..n)
        .map(|i| {
            // Later flights use later booster generations.
            let era = (i * BOOSTERS.len()) / n;
            let (category, prefix, ceiling, success) = BOOSTERS[era];
            let payload = (rng.next_f64() * ceiling).round();
            Launch {
                flight: i as i64 + 1,
                site: *rng.pick(&SITES),
                class: i64::from(rng.next_f64() < success),
                payload,
                booster_version: format!("{prefix}  B{:04}", 1001 + i),
                category,
            }
        })
        .collect()
}

fn write_csv(path: &Path, launches: &[Launch]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer.write_record([
        "",
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;
    for (i, l) in launches.iter().enumerate() {
        writer.write_record([
            i.to_string(),
            l.flight.to_string(),
            l.site.to_string(),
            l.class.to_string(),
            format!("{:.1}", l.payload),
            l.booster_version.clone(),
            l.category.to_string(),
        ])?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &Path, launches: &[Launch]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.flight))),
        Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.site))),
        Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.class))),
        Arc::new(Float64Array::from_iter_values(launches.iter().map(|l| l.payload))),
        Arc::new(StringArray::from_iter_values(
            launches.iter().map(|l| l.booster_version.as_str()),
        )),
        Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.category))),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = std::fs::File::create(path).context("creating Parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

#[derive(Parser, Debug)]
#[command(about = "Write a synthetic launch table")]
struct Args {
    /// Output file; a .parquet / .pq extension writes Parquet, anything else CSV
    #[arg(default_value = "spacex_launch_dash.csv")]
    output: PathBuf,

    /// Number of launches to generate
    #[arg(long, default_value_t = 56)]
    launches: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let path = args.output.as_path();

    let mut rng = SimpleRng::new(args.seed);
    let launches = generate(args.launches.max(1), &mut rng);

    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") | Some("pq") => write_parquet(path, &launches)?,
        _ => write_csv(path, &launches)?,
    }

    println!("Wrote {} launches to {}", launches.len(), path.display());
    Ok(())
}
