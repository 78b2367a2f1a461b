use crate::adapters::heuristics::resolve_value;
use crate::adapters::value_factory::{default_anchor, ValueFactory};
use crate::domain::{resolve_shape, MockObject, Schema, SchemaSource, SynthError};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Zero-argument producer that replaces type-directed generation for one field.
pub type CustomGenerator = Arc<dyn Fn() -> Value + Send + Sync>;

/// Per-call synthesis options.
#[derive(Clone, Default)]
pub struct SynthesisOptions {
    /// Seed for this call's private RNG. Entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Field name to override generator. Overrides win over any declared type.
    pub custom_generators: HashMap<String, CustomGenerator>,
    /// Upper bound for generated timestamps. Defaults to the start of the current UTC day.
    pub anchor: Option<DateTime<Utc>>,
}

impl SynthesisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_generator<F>(mut self, field: impl Into<String>, generator: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.custom_generators.insert(field.into(), Arc::new(generator));
        self
    }

    /// Always emit `value` for `field`.
    pub fn with_constant(self, field: impl Into<String>, value: Value) -> Self {
        self.with_generator(field, move || value.clone())
    }

    fn anchor_or_default(&self) -> DateTime<Utc> {
        self.anchor.unwrap_or_else(default_anchor)
    }
}

impl fmt::Debug for SynthesisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut overridden: Vec<&String> = self.custom_generators.keys().collect();
        overridden.sort();
        f.debug_struct("SynthesisOptions")
            .field("seed", &self.seed)
            .field("custom_generators", &overridden)
            .field("anchor", &self.anchor)
            .finish()
    }
}

/// Synthesize one mock object for `schema`.
///
/// A fresh RNG is built for every call, so a fixed seed reproduces the same object
/// no matter what other calls ran before or concurrently.
pub fn synthesize(schema: &Schema, options: &SynthesisOptions) -> Result<MockObject, SynthError> {
    let mut factory = ValueFactory::new(options.seed, options.anchor_or_default());
    debug!(fields = schema.len(), seed = ?options.seed, "synthesizing mock object");
    synthesize_with(&mut factory, schema, &options.custom_generators)
}

/// Synthesize `count` objects.
///
/// With a base seed `S`, object `i` is exactly what [`synthesize`] yields for seed
/// `S + i`. Without one, a single entropy-seeded stream feeds the whole batch.
pub fn synthesize_many(
    schema: &Schema,
    count: usize,
    options: &SynthesisOptions,
) -> Result<Vec<MockObject>, SynthError> {
    if count == 0 {
        return Err(SynthError::InvalidCount(0));
    }
    if schema.is_empty() {
        return Err(SynthError::EmptySchema);
    }

    let anchor = options.anchor_or_default();
    debug!(count, fields = schema.len(), seed = ?options.seed, "synthesizing mock batch");

    match options.seed {
        Some(base) => (0..count)
            .map(|index| {
                let seed = base.wrapping_add(index as u64);
                let mut factory = ValueFactory::new(Some(seed), anchor);
                synthesize_with(&mut factory, schema, &options.custom_generators)
            })
            .collect(),
        None => {
            let mut factory = ValueFactory::new(None, anchor);
            (0..count)
                .map(|_| synthesize_with(&mut factory, schema, &options.custom_generators))
                .collect()
        }
    }
}

/// Load schema `name` from `source` and synthesize one object.
pub fn synthesize_from_source<S: SchemaSource + ?Sized>(
    source: &S,
    name: &str,
    options: &SynthesisOptions,
) -> Result<MockObject, SynthError> {
    let schema = source.load_schema(name)?;
    synthesize(&schema, options)
}

/// Load schema `name` from `source` and synthesize `count` objects.
pub fn synthesize_many_from_source<S: SchemaSource + ?Sized>(
    source: &S,
    name: &str,
    count: usize,
    options: &SynthesisOptions,
) -> Result<Vec<MockObject>, SynthError> {
    if count == 0 {
        return Err(SynthError::InvalidCount(0));
    }
    let schema = source.load_schema(name)?;
    synthesize_many(&schema, count, options)
}

fn synthesize_with(
    factory: &mut ValueFactory,
    schema: &Schema,
    custom_generators: &HashMap<String, CustomGenerator>,
) -> Result<MockObject, SynthError> {
    if schema.is_empty() {
        return Err(SynthError::EmptySchema);
    }

    let mut object = MockObject::new();
    for field in schema.fields() {
        let value = match custom_generators.get(&field.name) {
            Some(generator) => {
                trace!(field = %field.name, "custom generator");
                generator()
            }
            None => {
                let shape = resolve_shape(&field.type_expression);
                trace!(field = %field.name, ?shape, "resolved shape");
                resolve_value(factory, &field.name, &shape)
            }
        };
        object.insert(field.name.clone(), value);
    }
    Ok(object)
}
