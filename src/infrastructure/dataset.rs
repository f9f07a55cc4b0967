//! Fare record dataset I/O and synthetic generation
//!
//! CSV layout: `Distance_km,Fuel_Price,Time_of_Day,Weather,Vehicle_Type,Actual_Fare_PHP`.
//! The generator produces seeded synthetic records for trying the pipeline
//! end to end before real survey data is available.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, VOCABULARY};

/// One labeled trip record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareRecord {
    #[serde(rename = "Distance_km")]
    pub distance_km: f64,

    #[serde(rename = "Fuel_Price")]
    pub fuel_price: String,

    #[serde(rename = "Time_of_Day")]
    pub time_of_day: String,

    #[serde(rename = "Weather")]
    pub weather: String,

    #[serde(rename = "Vehicle_Type")]
    pub vehicle_type: String,

    #[serde(rename = "Actual_Fare_PHP")]
    pub actual_fare_php: f64,
}

/// Read a training dataset from a CSV file
pub fn read_csv(path: &Path) -> Result<Vec<FareRecord>, DomainError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DomainError::dataset(format!("cannot open {}: {e}", path.display())))?;

    reader
        .deserialize()
        .map(|record| {
            record.map_err(|e| DomainError::dataset(format!("bad record in {}: {e}", path.display())))
        })
        .collect()
}

/// Write a dataset to a CSV file
pub fn write_csv(path: &Path, records: &[FareRecord]) -> Result<(), DomainError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| DomainError::dataset(format!("cannot create {}: {e}", path.display())))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| DomainError::dataset(format!("cannot write record: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| DomainError::dataset(format!("cannot flush {}: {e}", path.display())))
}

/// Parameters for synthetic dataset generation
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    pub samples: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            samples: 500,
            seed: 42,
        }
    }
}

/// Generate seeded synthetic fare records
///
/// Fare formula: base 10 + 8 per km + 0.1 per peso of the fuel bracket floor
/// + time/weather/vehicle surcharges + N(0, 2) noise, floored at the minimum
/// fare of 10 and rounded to centavos.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<FareRecord>, DomainError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let noise = Normal::new(0.0, 2.0)
        .map_err(|e| DomainError::internal(format!("noise distribution: {e}")))?;

    let mut records = Vec::with_capacity(config.samples);

    for _ in 0..config.samples {
        let distance_km = round2(rng.gen_range(0.5..15.0));
        let fuel_price = pick(&mut rng, VOCABULARY[0].accepted);
        let time_of_day = pick(&mut rng, VOCABULARY[1].accepted);
        let weather = pick(&mut rng, VOCABULARY[2].accepted);
        let vehicle_type = pick(&mut rng, VOCABULARY[3].accepted);

        let fare = 10.0
            + distance_km * 8.0
            + bracket_floor(&fuel_price) * 0.1
            + time_surcharge(&time_of_day)
            + weather_surcharge(&weather)
            + vehicle_surcharge(&vehicle_type)
            + noise.sample(&mut rng);

        records.push(FareRecord {
            distance_km,
            fuel_price,
            time_of_day,
            weather,
            vehicle_type,
            actual_fare_php: round2(fare.max(10.0)),
        });
    }

    Ok(records)
}

fn pick(rng: &mut StdRng, values: &[&str]) -> String {
    values[rng.gen_range(0..values.len())].to_string()
}

/// Lower bound of a fuel price bracket, in pesos
fn bracket_floor(label: &str) -> f64 {
    if label == "100&up" {
        return 100.0;
    }
    label
        .split('-')
        .next()
        .and_then(|lower| lower.parse().ok())
        .unwrap_or(0.0)
}

fn time_surcharge(label: &str) -> f64 {
    match label {
        "Rush Hour Morning" => 5.0,
        "Rush Hour Evening" => 7.0,
        _ => 0.0,
    }
}

fn weather_surcharge(label: &str) -> f64 {
    if label == "Rainy" { 5.0 } else { 0.0 }
}

fn vehicle_surcharge(label: &str) -> f64 {
    if label == "Tricycle" { 5.0 } else { 0.0 }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn temp_csv(name: &str) -> std::path::PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "fare-dataset-{}-{}-{}.csv",
            std::process::id(),
            name,
            unique
        ))
    }

    #[test]
    fn test_generator_is_deterministic_per_seed() {
        let config = GeneratorConfig {
            samples: 50,
            seed: 42,
        };
        let first = generate(&config).unwrap();
        let second = generate(&config).unwrap();
        assert_eq!(first, second);

        let other_seed = generate(&GeneratorConfig {
            samples: 50,
            seed: 7,
        })
        .unwrap();
        assert_ne!(first, other_seed);
    }

    #[test]
    fn test_generated_records_are_in_domain() {
        let records = generate(&GeneratorConfig {
            samples: 200,
            seed: 42,
        })
        .unwrap();

        assert_eq!(records.len(), 200);
        for record in &records {
            assert!(record.distance_km >= 0.5 && record.distance_km < 15.0);
            assert!(record.actual_fare_php >= 10.0);
            assert!(VOCABULARY[0].accepted.contains(&record.fuel_price.as_str()));
            assert!(VOCABULARY[1].accepted.contains(&record.time_of_day.as_str()));
            assert!(VOCABULARY[2].accepted.contains(&record.weather.as_str()));
            assert!(VOCABULARY[3].accepted.contains(&record.vehicle_type.as_str()));
        }
    }

    #[test]
    fn test_bracket_floor() {
        assert_eq!(bracket_floor("20-29"), 20.0);
        assert_eq!(bracket_floor("90-99"), 90.0);
        assert_eq!(bracket_floor("100&up"), 100.0);
    }

    #[test]
    fn test_csv_round_trip() {
        let path = temp_csv("round-trip");
        let records = generate(&GeneratorConfig {
            samples: 25,
            seed: 42,
        })
        .unwrap();

        write_csv(&path, &records).unwrap();
        let restored = read_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(restored, records);
    }

    #[test]
    fn test_read_missing_file_is_a_dataset_error() {
        let error = read_csv(Path::new("/nonexistent/fares.csv")).unwrap_err();
        assert!(matches!(error, DomainError::Dataset { .. }));
    }
}
