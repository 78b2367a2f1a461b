//! Type-expression interpretation.
//!
//! A type expression is the declared type of a field as written in the source
//! declaration (`string`, `number[]`, `"a" | "b" | string`, `Record<string, any>`,
//! `{ x: number }`, ...). There is no grammar here: the expression is classified
//! by a fixed sequence of textual checks and the first check that fires decides
//! the [`Shape`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type keywords that map directly onto a value generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    Date,
    DateTime,
    Uuid,
    Url,
}

impl PrimitiveKind {
    /// Exact keyword match against an already normalized (lower-cased, trimmed) token.
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "date" => Some(Self::Date),
            "datetime" => Some(Self::DateTime),
            "uuid" => Some(Self::Uuid),
            "url" => Some(Self::Url),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Uuid => "uuid",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Structural classification of a type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// `T[]` or `Array<T>`. Elements are generated from the field name alone.
    Array,
    /// `a | b | c`. `resolved` is the first alternative that is a primitive keyword.
    Union {
        candidates: Vec<String>,
        resolved: Option<PrimitiveKind>,
    },
    Primitive(PrimitiveKind),
    /// `Record<..>`, `object`, `any`, `{}` or an inline `{ ... }` literal.
    Opaque,
    Unresolved,
}

impl Shape {
    /// The primitive a value should be generated for, if the shape pins one down.
    pub fn primitive(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(kind) => Some(*kind),
            Self::Union { resolved, .. } => *resolved,
            _ => None,
        }
    }
}

/// Classify a type expression.
///
/// Rules are applied in order and the first hit wins:
/// array marker, union marker, optional-stripped primitive keyword,
/// opaque/record marker, and finally [`Shape::Unresolved`].
///
/// The array, union and opaque checks are substring checks, so an expression that
/// merely contains `[]`, `|`, `object` or `any` is classified accordingly. Only the
/// primitive check demands an exact keyword.
pub fn resolve_shape(type_expression: &str) -> Shape {
    let normalized = type_expression.trim().to_lowercase();

    if normalized.is_empty() {
        return Shape::Unresolved;
    }

    if normalized.contains("[]") || normalized.starts_with("array") {
        return Shape::Array;
    }

    if normalized.contains('|') {
        let candidates: Vec<String> = normalized
            .split('|')
            .map(|candidate| candidate.trim().to_string())
            .collect();
        let resolved = candidates
            .iter()
            .find_map(|candidate| PrimitiveKind::from_keyword(candidate));
        return Shape::Union {
            candidates,
            resolved,
        };
    }

    let stripped = strip_optional(&normalized);

    if let Some(kind) = PrimitiveKind::from_keyword(&stripped) {
        return Shape::Primitive(kind);
    }

    if stripped.contains("record<")
        || stripped.contains("object")
        || stripped.contains("any")
        || stripped == "{}"
        || stripped.starts_with('{')
    {
        return Shape::Opaque;
    }

    Shape::Unresolved
}

/// Remove every `?` and every `undefined` token, then trim.
fn strip_optional(expression: &str) -> String {
    expression
        .replace("undefined", "")
        .replace('?', "")
        .trim()
        .to_string()
}
