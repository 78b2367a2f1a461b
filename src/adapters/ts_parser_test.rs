use super::ts_parser::{parse_ts_interface, TsInterfaceSource};
use crate::domain::{SchemaSource, SynthError};
use std::fs;
use tempfile::TempDir;

const SOURCE: &str = r#"
// Basic User Interface
interface User {
  id: number;
  name: string;
  email: string;
  isActive: boolean;
  createdAt: Date;
}

/* profile with optional fields */
export interface UserProfile extends Base {
  readonly id: string;
  phone?: string; // trailing comment
  socialMedia?: {
    twitter?: string;
    github?: string;
  };
  theme: "light" | "dark";
  roles: string[];
  metadata?: Record<string, any>;
  address: UserAddress;
}

interface CustomerOrder {
  orderStatus:
    | "pending"
    | "confirmed"
    | "refunded";
  callback: (value: string) => void;
  format(input: string): string;
  [key: string]: unknown;
  notes: string
  total: number
}

interface ApiResponse<T> {
  success: boolean;
  data?: T;
}

type Point = {
  x: number,
  y: number,
};

type Alias = string;

interface Empty {}

interface UserAddress2 {
  city: string;
}
"#;

fn entries(name: &str) -> Vec<(String, String)> {
    parse_ts_interface(SOURCE, name)
        .unwrap()
        .unwrap_or_else(|| panic!("{name} not found"))
        .fields()
        .map(|f| (f.name.clone(), f.type_expression.clone()))
        .collect()
}

fn pair(name: &str, ty: &str) -> (String, String) {
    (name.to_string(), ty.to_string())
}

#[test]
fn test_basic_interface() {
    assert_eq!(
        entries("User"),
        vec![
            pair("id", "number"),
            pair("name", "string"),
            pair("email", "string"),
            pair("isActive", "boolean"),
            pair("createdAt", "Date"),
        ]
    );
}

#[test]
fn test_optional_nested_and_modifiers() {
    assert_eq!(
        entries("UserProfile"),
        vec![
            pair("id", "string"),
            pair("phone", "string"),
            pair("socialMedia", "{ twitter?: string; github?: string; }"),
            pair("theme", "\"light\" | \"dark\""),
            pair("roles", "string[]"),
            pair("metadata", "Record<string, any>"),
            pair("address", "UserAddress"),
        ]
    );
}

#[test]
fn test_multiline_union_methods_and_missing_semicolons() {
    assert_eq!(
        entries("CustomerOrder"),
        vec![
            pair("orderStatus", "\"pending\" | \"confirmed\" | \"refunded\""),
            pair("callback", "(value: string) => void"),
            pair("notes", "string"),
            pair("total", "number"),
        ]
    );
}

#[test]
fn test_generic_interface_and_type_alias() {
    assert_eq!(
        entries("ApiResponse"),
        vec![pair("success", "boolean"), pair("data", "T")]
    );
    assert_eq!(entries("Point"), vec![pair("x", "number"), pair("y", "number")]);
}

#[test]
fn test_name_must_match_whole_word() {
    // "User" must not resolve to UserProfile or UserAddress2
    assert_eq!(entries("User").len(), 5);
    assert_eq!(entries("UserAddress2"), vec![pair("city", "string")]);
    assert!(parse_ts_interface(SOURCE, "UserAddress").unwrap().is_none());
}

#[test]
fn test_missing_and_non_object_declarations() {
    assert!(parse_ts_interface(SOURCE, "Nope").unwrap().is_none());
    assert!(parse_ts_interface(SOURCE, "Alias").unwrap().is_none());
    assert!(parse_ts_interface(SOURCE, "").unwrap().is_none());
    assert!(parse_ts_interface(SOURCE, "Empty").unwrap().unwrap().is_empty());
}

#[test]
fn test_generic_extends_clause_is_not_the_body() {
    let source = "interface Tagged extends Base<{ x: number }> {\n  label: string;\n  count: number;\n}";
    let schema = parse_ts_interface(source, "Tagged").unwrap().unwrap();
    let names: Vec<&str> = schema.field_names().collect();
    assert_eq!(names, vec!["label", "count"]);
}

#[test]
fn test_nested_and_ambient_declarations() {
    let source = r#"
declare global {
  interface Window {
    appVersion: string;
  }
}

export namespace Billing {
  export interface Invoice {
    /* amount in cents */
    total: number;
    'line-items': string[];
    "due date"?: Date;
    memo;
  }
}
"#;
    let window = parse_ts_interface(source, "Window").unwrap().unwrap();
    assert_eq!(window.get("appVersion"), Some("string"));

    let invoice = parse_ts_interface(source, "Invoice").unwrap().unwrap();
    let fields: Vec<(&str, &str)> = invoice
        .fields()
        .map(|f| (f.name.as_str(), f.type_expression.as_str()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("total", "number"),
            ("line-items", "string[]"),
            ("due date", "Date"),
            ("memo", "any"),
        ]
    );
}

#[test]
fn test_braces_inside_string_literals() {
    let source = r#"interface Label { text: "{" | "}"; size: number; }"#;
    let schema = parse_ts_interface(source, "Label").unwrap().unwrap();
    assert_eq!(schema.get("text"), Some("\"{\" | \"}\""));
    assert_eq!(schema.get("size"), Some("number"));
}

#[test]
fn test_source_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("types.ts");
    fs::write(&path, SOURCE).unwrap();

    let source = TsInterfaceSource::new(&path);
    assert_eq!(source.load_schema("User").unwrap().len(), 5);

    let missing = source.load_schema("Ghost");
    assert!(matches!(missing, Err(SynthError::SchemaNotFound { .. })));
}

#[test]
fn test_source_missing_file() {
    let dir = TempDir::new().unwrap();
    let source = TsInterfaceSource::new(dir.path().join("absent.ts"));
    assert!(matches!(source.load_schema("User"), Err(SynthError::Io { .. })));
}
