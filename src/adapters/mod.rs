pub mod heuristics;
pub mod output;
pub mod synthesizer;
pub mod ts_parser;
pub mod value_factory;

#[cfg(test)]
mod ts_parser_test;
