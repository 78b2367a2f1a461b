use mockstruct::adapters::output::{self, OutputFormat};
use mockstruct::adapters::synthesizer::{
    synthesize_from_source, synthesize_many_from_source, SynthesisOptions,
};
use mockstruct::adapters::ts_parser::TsInterfaceSource;
use mockstruct::domain::SynthError;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

const TYPES: &str = r#"
interface UserProfile {
  id: string;
  firstName: string;
  lastName: string;
  email: string;
  phone?: string;
  age: number;
  isEmailVerified: boolean;
  website?: string;
  socialMedia?: {
    twitter?: string;
    github?: string;
  };
  roles: string[];
  metadata?: Record<string, any>;
  updatedAt: Date;
}

interface Empty {}
"#;

fn fixture() -> (TempDir, TsInterfaceSource) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("types.ts");
    fs::write(&path, TYPES).unwrap();
    (dir, TsInterfaceSource::new(path))
}

#[test]
fn test_profile_from_typescript() {
    let (_dir, source) = fixture();
    let options = SynthesisOptions::new().with_seed(2024);
    let profile = synthesize_from_source(&source, "UserProfile", &options).unwrap();

    let keys: Vec<&str> = profile.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "id", "firstName", "lastName", "email", "phone", "age", "isEmailVerified",
            "website", "socialMedia", "roles", "metadata", "updatedAt",
        ]
    );

    assert!(uuid::Uuid::parse_str(profile["id"].as_str().unwrap()).is_ok());
    assert!(profile["email"].as_str().unwrap().ends_with("@gmail.com"));
    // "isEmailVerified" contains "mail"
    assert!(profile["isEmailVerified"].as_str().unwrap().ends_with("@gmail.com"));
    let age = profile["age"].as_i64().unwrap();
    assert!((18..=80).contains(&age));
    assert!(profile["website"].as_str().unwrap().starts_with("https://"));
    assert!(profile["socialMedia"].is_object());
    assert!(profile["metadata"].is_object());
    let roles = profile["roles"].as_array().unwrap();
    assert!((1..=3).contains(&roles.len()));
    assert!(chrono::DateTime::parse_from_rfc3339(profile["updatedAt"].as_str().unwrap()).is_ok());

    let again = synthesize_from_source(&source, "UserProfile", &options).unwrap();
    assert_eq!(profile, again);
}

#[test]
fn test_batch_from_typescript_with_override() {
    let (_dir, source) = fixture();
    let options = SynthesisOptions::new()
        .with_seed(1)
        .with_constant("roles", json!(["admin"]));
    let users = synthesize_many_from_source(&source, "UserProfile", 5, &options).unwrap();

    assert_eq!(users.len(), 5);
    for user in &users {
        assert_eq!(user["roles"], json!(["admin"]));
    }
}

#[test]
fn test_extraction_boundary_errors() {
    let (_dir, source) = fixture();
    let options = SynthesisOptions::new();

    assert!(matches!(
        synthesize_from_source(&source, "Missing", &options),
        Err(SynthError::SchemaNotFound { .. })
    ));
    assert!(matches!(
        synthesize_from_source(&source, "Empty", &options),
        Err(SynthError::EmptySchema)
    ));
    assert!(matches!(
        synthesize_many_from_source(&source, "UserProfile", 0, &options),
        Err(SynthError::InvalidCount(0))
    ));
}

#[test]
fn test_generated_data_round_trips_through_json_file() {
    let (dir, source) = fixture();
    let users = synthesize_many_from_source(&source, "UserProfile", 3, &SynthesisOptions::new())
        .unwrap();
    let data = Value::Array(users.into_iter().map(Value::Object).collect());

    let target = output::validate_output_path(&dir.path().join("out/users.json")).unwrap();
    output::save_to_file(&data, &target, OutputFormat::Pretty).unwrap();

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(parsed, data);
}
