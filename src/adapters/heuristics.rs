//! Field-name heuristics.
//!
//! Content is chosen by two ordered rule tables keyed on substrings of the
//! lower-cased field name. Tables are scanned top to bottom and the first rule
//! whose predicate holds produces the value; when nothing matches, a default
//! generator applies, so resolution never fails.

use crate::adapters::value_factory::ValueFactory;
use crate::domain::{PrimitiveKind, Shape};
use serde_json::{json, Value};

/// A `(predicate, generator)` pair in the field-name table.
pub struct FieldRule {
    pub label: &'static str,
    pub matches: fn(&str) -> bool,
    pub generate: fn(&mut ValueFactory, &str) -> Value,
}

/// A numeric rule: fires when the field name contains any of `patterns`.
pub struct NumberRule {
    pub label: &'static str,
    pub patterns: &'static [&'static str],
    pub generate: fn(&mut ValueFactory) -> Value,
}

fn contains_any(name: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| name.contains(needle))
}

const NUMERIC_HINTS: &[&str] = &[
    "age", "year", "count", "quantity", "price", "amount", "rating", "score",
];

pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        label: "email",
        matches: |name: &str| contains_any(name, &["email", "mail"]),
        generate: |f: &mut ValueFactory, _: &str| json!(f.email()),
    },
    FieldRule {
        label: "phone",
        matches: |name: &str| contains_any(name, &["phone", "mobile", "tel"]),
        generate: |f: &mut ValueFactory, _: &str| json!(f.phone()),
    },
    FieldRule {
        label: "name",
        matches: |name: &str| name.contains("name"),
        generate: generate_name,
    },
    FieldRule {
        label: "id",
        matches: |name: &str| name.contains("id") && !name.contains("email"),
        generate: |f: &mut ValueFactory, _: &str| json!(f.uuid()),
    },
    FieldRule {
        label: "url",
        matches: |name: &str| contains_any(name, &["url", "link", "website"]),
        generate: |f: &mut ValueFactory, _: &str| json!(f.url()),
    },
    FieldRule {
        label: "address",
        matches: |name: &str| name.contains("address"),
        generate: |f: &mut ValueFactory, _: &str| json!(f.street_address()),
    },
    FieldRule {
        label: "city",
        matches: |name: &str| name.contains("city"),
        generate: |f: &mut ValueFactory, _: &str| json!(f.city()),
    },
    FieldRule {
        label: "country",
        matches: |name: &str| name.contains("country"),
        generate: |f: &mut ValueFactory, _: &str| json!(f.country()),
    },
    FieldRule {
        label: "state",
        matches: |name: &str| name.contains("state"),
        generate: |f: &mut ValueFactory, _: &str| json!(f.state()),
    },
    FieldRule {
        label: "company",
        matches: |name: &str| contains_any(name, &["company", "organization"]),
        generate: |f: &mut ValueFactory, _: &str| json!(f.company()),
    },
    FieldRule {
        label: "job_title",
        matches: |name: &str| contains_any(name, &["title", "job", "position"]),
        generate: |f: &mut ValueFactory, _: &str| json!(f.job_title()),
    },
    FieldRule {
        label: "description",
        matches: |name: &str| contains_any(name, &["description", "desc", "bio", "content"]),
        generate: |f: &mut ValueFactory, _: &str| json!(f.paragraph()),
    },
    FieldRule {
        label: "password",
        matches: |name: &str| contains_any(name, &["password", "pwd"]),
        generate: |f: &mut ValueFactory, _: &str| json!(f.password()),
    },
    FieldRule {
        label: "color",
        matches: |name: &str| name.contains("color"),
        generate: |f: &mut ValueFactory, _: &str| json!(f.color()),
    },
    FieldRule {
        label: "numeric",
        matches: |name: &str| contains_any(name, NUMERIC_HINTS),
        generate: |f: &mut ValueFactory, name: &str| resolve_number_by_field_name(f, name),
    },
    // "at" catches createdAt/updatedAt, and also category, status, ...
    FieldRule {
        label: "timestamp",
        matches: |name: &str| contains_any(name, &["date", "time", "at"]),
        generate: |f: &mut ValueFactory, _: &str| json!(f.past_timestamp()),
    },
    FieldRule {
        label: "flag",
        matches: |name: &str| {
            name.starts_with("is")
                || name.starts_with("has")
                || name.starts_with("can")
                || contains_any(name, &["active", "enabled", "verified"])
        },
        generate: |f: &mut ValueFactory, _: &str| json!(f.boolean()),
    },
];

pub static NUMBER_RULES: &[NumberRule] = &[
    NumberRule {
        label: "age",
        patterns: &["age"],
        generate: |f: &mut ValueFactory| json!(f.int(18, 80)),
    },
    NumberRule {
        label: "money",
        patterns: &["price", "cost", "amount"],
        generate: |f: &mut ValueFactory| json!(f.money(0.0, 1000.0)),
    },
    NumberRule {
        label: "quantity",
        patterns: &["quantity", "count"],
        generate: |f: &mut ValueFactory| json!(f.int(1, 100)),
    },
    NumberRule {
        label: "year",
        patterns: &["year"],
        generate: |f: &mut ValueFactory| json!(f.year()),
    },
    NumberRule {
        label: "month",
        patterns: &["month"],
        generate: |f: &mut ValueFactory| json!(f.int(1, 12)),
    },
    NumberRule {
        label: "day",
        patterns: &["day"],
        generate: |f: &mut ValueFactory| json!(f.int(1, 31)),
    },
    NumberRule {
        label: "hour",
        patterns: &["hour"],
        generate: |f: &mut ValueFactory| json!(f.int(0, 23)),
    },
    NumberRule {
        label: "minute",
        patterns: &["minute", "second"],
        generate: |f: &mut ValueFactory| json!(f.int(0, 59)),
    },
    NumberRule {
        label: "percent",
        patterns: &["percentage", "percent"],
        generate: |f: &mut ValueFactory| json!(f.int(0, 100)),
    },
    NumberRule {
        label: "rating",
        patterns: &["rating", "score"],
        generate: |f: &mut ValueFactory| json!(f.int(1, 5)),
    },
];

fn generate_name(f: &mut ValueFactory, name: &str) -> Value {
    if contains_any(name, &["first", "fname"]) {
        json!(f.first_name())
    } else if contains_any(name, &["last", "lname"]) {
        json!(f.last_name())
    } else if name.contains("user") {
        json!(f.handle())
    } else {
        json!(f.full_name())
    }
}

/// First field rule matching `name`, which must already be lower-cased.
pub fn field_rule_for(name: &str) -> Option<&'static FieldRule> {
    FIELD_RULES.iter().find(|rule| (rule.matches)(name))
}

/// First numeric rule matching `name`, which must already be lower-cased.
pub fn number_rule_for(name: &str) -> Option<&'static NumberRule> {
    NUMBER_RULES
        .iter()
        .find(|rule| contains_any(name, rule.patterns))
}

/// Generate a value from the field name alone.
///
/// Falls back to one to three lorem words when no rule matches.
pub fn resolve_by_field_name(f: &mut ValueFactory, field_name: &str) -> Value {
    let name = field_name.to_lowercase();
    match field_rule_for(&name) {
        Some(rule) => {
            tracing::trace!(field = field_name, rule = rule.label, "field rule matched");
            (rule.generate)(f, &name)
        }
        None => json!(f.words(1, 3)),
    }
}

/// Generate a number from the field name. Defaults to an integer in `0..=10000`.
pub fn resolve_number_by_field_name(f: &mut ValueFactory, field_name: &str) -> Value {
    let name = field_name.to_lowercase();
    match number_rule_for(&name) {
        Some(rule) => (rule.generate)(f),
        None => json!(f.int(0, 10_000)),
    }
}

fn resolve_primitive(f: &mut ValueFactory, field_name: &str, kind: PrimitiveKind) -> Value {
    match kind {
        PrimitiveKind::String => resolve_by_field_name(f, field_name),
        PrimitiveKind::Number => resolve_number_by_field_name(f, field_name),
        PrimitiveKind::Boolean => json!(f.boolean()),
        PrimitiveKind::Date | PrimitiveKind::DateTime => json!(f.past_timestamp()),
        PrimitiveKind::Uuid => json!(f.uuid()),
        PrimitiveKind::Url => json!(f.url()),
    }
}

/// Produce the value for one field given its resolved shape.
///
/// Array elements and unresolved shapes fall back to the field-name heuristics;
/// arrays hold one to three such elements.
pub fn resolve_value(f: &mut ValueFactory, field_name: &str, shape: &Shape) -> Value {
    match shape {
        Shape::Array => {
            let len = f.array_len();
            Value::Array(
                (0..len)
                    .map(|_| resolve_by_field_name(f, field_name))
                    .collect(),
            )
        }
        Shape::Opaque => f.opaque_object(),
        other => match other.primitive() {
            Some(kind) => resolve_primitive(f, field_name, kind),
            None => resolve_by_field_name(f, field_name),
        },
    }
}
