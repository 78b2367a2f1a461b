//! Seeded value producers.
//!
//! Every producer draws from the factory's own [`StdRng`], so a factory built from
//! a seed yields the same sequence of values on every run. Text content comes from
//! the `fake` crate driven by that RNG.

use chrono::{DateTime, Datelike, Duration, SecondsFormat, Utc};
use fake::faker::address::en::{BuildingNumber, CityName, CountryName, StateName, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{DomainSuffix, Password, Username};
use fake::faker::job::en::Title as JobTitle;
use fake::faker::lorem::en::{Paragraph, Word, Words};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

/// Domain every generated email address ends with.
pub const EMAIL_DOMAIN: &str = "gmail.com";

/// Width of the window that past timestamps are drawn from, ending at the anchor.
const PAST_WINDOW_MS: i64 = 365 * 24 * 60 * 60 * 1000;

const HUMAN_COLORS: &[&str] = &[
    "azure", "black", "blue", "cyan", "fuchsia", "gold", "green", "grey", "indigo",
    "ivory", "lavender", "lime", "magenta", "maroon", "mint green", "olive", "orange",
    "orchid", "pink", "plum", "purple", "red", "salmon", "silver", "sky blue", "tan",
    "teal", "turquoise", "violet", "white", "yellow",
];

/// Start of the current UTC day.
pub fn default_anchor() -> DateTime<Utc> {
    let now = Utc::now();
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now)
}

pub struct ValueFactory {
    rng: StdRng,
    anchor: DateTime<Utc>,
}

impl ValueFactory {
    /// Seeded when `seed` is given, otherwise seeded from OS entropy.
    pub fn new(seed: Option<u64>, anchor: DateTime<Utc>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, anchor }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed), default_anchor())
    }

    /// Upper bound of generated timestamps and of the "year" range.
    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// Uniform float in `[min, max]` rounded to two decimal places.
    pub fn money(&mut self, min: f64, max: f64) -> f64 {
        let raw: f64 = self.rng.gen_range(min..=max);
        (raw * 100.0).round() / 100.0
    }

    pub fn boolean(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Length of a generated array: 1, 2 or 3.
    pub fn array_len(&mut self) -> usize {
        self.rng.gen_range(1..=3)
    }

    pub fn handle(&mut self) -> String {
        Username().fake_with_rng(&mut self.rng)
    }

    pub fn email(&mut self) -> String {
        format!("{}@{}", self.handle().to_lowercase(), EMAIL_DOMAIN)
    }

    pub fn phone(&mut self) -> String {
        PhoneNumber().fake_with_rng(&mut self.rng)
    }

    pub fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    pub fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    pub fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    /// RFC 4122 version 4 UUID built from RNG bytes.
    pub fn uuid(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.gen();
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }

    pub fn url(&mut self) -> String {
        let host: String = Word().fake_with_rng(&mut self.rng);
        let suffix: String = DomainSuffix().fake_with_rng(&mut self.rng);
        format!("https://{}.{}/", host.to_lowercase(), suffix)
    }

    pub fn street_address(&mut self) -> String {
        let number: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        format!("{number} {street}")
    }

    pub fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    pub fn country(&mut self) -> String {
        CountryName().fake_with_rng(&mut self.rng)
    }

    pub fn state(&mut self) -> String {
        StateName().fake_with_rng(&mut self.rng)
    }

    pub fn company(&mut self) -> String {
        CompanyName().fake_with_rng(&mut self.rng)
    }

    pub fn job_title(&mut self) -> String {
        JobTitle().fake_with_rng(&mut self.rng)
    }

    pub fn paragraph(&mut self) -> String {
        Paragraph(3..6).fake_with_rng(&mut self.rng)
    }

    pub fn password(&mut self) -> String {
        Password(15..16).fake_with_rng(&mut self.rng)
    }

    pub fn color(&mut self) -> String {
        HUMAN_COLORS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("red")
            .to_string()
    }

    /// `min..=max` lorem words joined by single spaces.
    pub fn words(&mut self, min: usize, max: usize) -> String {
        let words: Vec<String> = Words(min..max + 1).fake_with_rng(&mut self.rng);
        words.join(" ")
    }

    pub fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    /// ISO-8601 UTC timestamp with millisecond precision within the year before the anchor.
    pub fn past_timestamp(&mut self) -> String {
        let offset = self.rng.gen_range(1..=PAST_WINDOW_MS);
        (self.anchor - Duration::milliseconds(offset)).to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Year between 1900 and the anchor's year.
    pub fn year(&mut self) -> i64 {
        let current = i64::from(self.anchor.year());
        self.int(1900, current)
    }

    /// A small object with one to three lorem-word keys. Values are a short word
    /// sequence, an integer in `0..=100` or a boolean, picked uniformly.
    pub fn opaque_object(&mut self) -> Value {
        let size = self.rng.gen_range(1..=3);
        let mut object = Map::new();
        for _ in 0..size {
            let key = self.word();
            let value = match self.rng.gen_range(0..3) {
                0 => Value::String(self.words(1, 2)),
                1 => json!(self.int(0, 100)),
                _ => Value::Bool(self.boolean()),
            };
            object.insert(key, value);
        }
        Value::Object(object)
    }
}
