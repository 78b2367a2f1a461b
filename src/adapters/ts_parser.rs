//! Schema extraction from TypeScript sources.
//!
//! Parses the file with tree-sitter and looks up `interface Name { ... }` or
//! `type Name = { ... }` anywhere in the tree (exported, ambient or nested in a
//! namespace). Each property signature becomes `name -> type text`, with the
//! optional marker dropped and whitespace collapsed. Method, index, call and
//! construct signatures are skipped.

use crate::domain::{Schema, SchemaSource, SynthError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::{Node, Parser};

/// Reads schemas from a TypeScript file on every lookup.
#[derive(Debug, Clone)]
pub struct TsInterfaceSource {
    path: PathBuf,
}

impl TsInterfaceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaSource for TsInterfaceSource {
    fn load_schema(&self, name: &str) -> Result<Schema, SynthError> {
        let source = fs::read_to_string(&self.path).map_err(|e| SynthError::io(&self.path, e))?;
        let schema = parse_ts_interface(&source, name)?.ok_or_else(|| SynthError::SchemaNotFound {
            name: name.to_string(),
            source_path: self.path.display().to_string(),
        })?;
        debug!(interface = name, fields = schema.len(), path = %self.path.display(), "extracted schema");
        Ok(schema)
    }
}

/// Extract the property map of declaration `name` from TypeScript `source`.
///
/// Returns `Ok(None)` when no interface or object type alias with that name exists.
pub fn parse_ts_interface(source: &str, name: &str) -> Result<Option<Schema>, SynthError> {
    let mut parser = Parser::new();
    parser
        .set_language(&arborium_typescript::language().into())
        .map_err(|e| SynthError::Parse(format!("tree-sitter init: {}", e)))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| SynthError::Parse("failed to parse TypeScript".into()))?;

    let ctx = ExtractContext::new(source);
    Ok(ctx
        .find_declaration(tree.root_node(), name)
        .map(|body| ctx.extract_members(body)))
}

struct ExtractContext<'a> {
    source: &'a str,
}

impl<'a> ExtractContext<'a> {
    fn new(source: &'a str) -> Self {
        Self { source }
    }

    fn node_text(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// First matching declaration body in document order.
    fn find_declaration<'t>(&self, node: Node<'t>, name: &str) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if let Some(body) = self.declaration_body(child, name) {
                return Some(body);
            }
            if let Some(body) = self.find_declaration(child, name) {
                return Some(body);
            }
        }
        None
    }

    fn declaration_body<'t>(&self, node: Node<'t>, name: &str) -> Option<Node<'t>> {
        let field = match node.kind() {
            "interface_declaration" => "body",
            "type_alias_declaration" => "value",
            _ => return None,
        };
        let declared = node.child_by_field_name("name")?;
        if self.node_text(declared) != name {
            return None;
        }
        let body = node.child_by_field_name(field)?;
        // `type Name = string` and friends carry no properties
        (field == "body" || body.kind() == "object_type").then_some(body)
    }

    fn extract_members(&self, body: Node) -> Schema {
        let mut cursor = body.walk();
        let schema = body
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "property_signature")
            .filter_map(|member| self.extract_property_signature(member))
            .collect();
        schema
    }

    fn extract_property_signature(&self, node: Node) -> Option<(String, String)> {
        let name = node.child_by_field_name("name")?;
        let name_str = match name.kind() {
            "computed_property_name" => return None,
            "string" => self.node_text(name).trim_matches(|c| c == '"' || c == '\''),
            _ => self.node_text(name),
        };
        if name_str.is_empty() {
            return None;
        }

        // Untyped properties are implicitly `any`
        let type_text = node
            .child_by_field_name("type")
            .and_then(|annotation| self.annotated_type(annotation))
            .unwrap_or_else(|| "any".to_string());

        Some((name_str.to_string(), type_text))
    }

    fn annotated_type(&self, annotation: Node) -> Option<String> {
        let mut cursor = annotation.walk();
        let ty = annotation
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment")?;

        let collapsed = self
            .node_text(ty)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        // leading `|` of a multi-line union
        let text = collapsed
            .strip_prefix('|')
            .map(|t| t.trim_start().to_string())
            .unwrap_or(collapsed);
        (!text.is_empty()).then_some(text)
    }
}
