use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INPUT_FILE: &str = "numbas.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "dummy_contacts_20k.csv";
pub const DEFAULT_NUM_CONTACTS: usize = 20_000;
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1_000;

/// Labels a generated contact can be assigned to.
pub const CATEGORIES: [&str; 10] = [
    "Beast Picks",
    "Picksy",
    "Hot Leads",
    "Cold Leads",
    "VIP",
    "Newsletter",
    "Prospects",
    "Customers",
    "Trial Users",
    "Premium Members",
];

pub struct CounterConfig {
    pub input: PathBuf,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
        }
    }
}

pub struct GeneratorConfig {
    pub num_contacts: usize,
    pub output_file: PathBuf,
    pub categories: &'static [&'static str],
    /// Emit a progress line every this many records
    pub progress_interval: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            num_contacts: DEFAULT_NUM_CONTACTS,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            categories: &CATEGORIES,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Header row of the contacts file, matching the field order of `ContactRecord`.
pub const CSV_HEADERS: [&str; 5] = ["first_name", "last_name", "phone", "email", "category"];

/// One row of the generated contacts file. Field order is the CSV column order.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub category: String,
}
