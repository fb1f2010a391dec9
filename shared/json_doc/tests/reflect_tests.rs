//! Struct and enum mapping through the reflect macros

use json_doc::{
    FromJson, JsonValue, ToJson, from_str, parse, reflect_json, reflect_json_enum, to_string,
};
use std::collections::HashMap;

#[derive(Debug, PartialEq)]
enum Role {
    Admin,
    User,
    Guest,
}

reflect_json_enum! {
    Role {
        Admin,
        User,
        Guest,
    }
}

#[derive(Debug, PartialEq)]
struct Person {
    name: String,
    age: i32,
    email: Option<String>,
    role: Role,
    scores: Vec<i32>,
}

impl Default for Person {
    fn default() -> Self {
        Person {
            name: String::new(),
            age: 0,
            email: None,
            role: Role::Guest,
            scores: Vec::new(),
        }
    }
}

reflect_json! {
    Person {
        name: String,
        age: i32,
        email: Option<String>,
        role: Role,
        scores: Vec<i32>,
    }
}

#[derive(Debug, Default, PartialEq)]
struct Team {
    title: String,
    members: Vec<Person>,
    labels: HashMap<String, String>,
}

reflect_json! {
    Team {
        title: String,
        members: Vec<Person>,
        labels: HashMap<String, String>,
    }
}

#[test]
fn test_struct_roundtrip() {
    let person = Person {
        name: "Alice".to_string(),
        age: 30,
        email: Some("alice@example.com".to_string()),
        role: Role::Admin,
        scores: vec![85, 92, 78],
    };

    let json = to_string(&person);
    let parsed: Person = from_str(&json).unwrap();

    assert_eq!(parsed, person);
}

#[test]
fn test_struct_output_is_key_ordered() {
    let person = Person {
        name: "Bob".to_string(),
        age: 25,
        email: None,
        role: Role::User,
        scores: vec![1],
    };

    assert_eq!(
        to_string(&person),
        r#"{"age":25,"email":null,"name":"Bob","role":"User","scores":[1]}"#
    );
}

#[test]
fn test_missing_and_null_fields_keep_defaults() {
    let parsed: Person = from_str(r#"{"name":"Carol","role":null}"#).unwrap();

    assert_eq!(parsed.name, "Carol");
    assert_eq!(parsed.age, 0);
    assert_eq!(parsed.email, None);
    assert_eq!(parsed.role, Role::Guest);
    assert!(parsed.scores.is_empty());
}

#[test]
fn test_lenient_member_assignment() {
    let parsed: Person = from_str(r#"{"name":7,"age":"41","scores":["3",4.9]}"#).unwrap();

    assert_eq!(parsed.name, "7");
    assert_eq!(parsed.age, 41);
    assert_eq!(parsed.scores, vec![3, 4]);
}

#[test]
fn test_structural_mismatches_fail() {
    assert!(from_str::<Person>("[1,2]").is_err());
    assert!(from_str::<Person>(r#"{"scores":{"a":1}}"#).is_err());
    assert!(from_str::<Person>(r#"{"role":"Owner"}"#).is_err());
    assert!(from_str::<Person>(r#"{"role":3}"#).is_err());
}

#[test]
fn test_escaped_text_is_decoded() {
    let parsed: Person = from_str(r#"{"name":"Ann \"The Hammer\"\nSmith"}"#).unwrap();
    assert_eq!(parsed.name, "Ann \"The Hammer\"\nSmith");

    let back = to_string(&parsed);
    assert!(back.contains(r#""name":"Ann \"The Hammer\"\nSmith""#));
}

#[test]
fn test_nested_structs() {
    let json = r#"{
        "title": "core",
        "members": [
            {"name": "Alice", "role": "Admin"},
            {"name": "Bob", "scores": [10, 20]}
        ],
        "labels": {"lead": "Alice"}
    }"#;

    let team: Team = from_str(json).unwrap();
    assert_eq!(team.title, "core");
    assert_eq!(team.members.len(), 2);
    assert_eq!(team.members[0].role, Role::Admin);
    assert_eq!(team.members[1].scores, vec![10, 20]);
    assert_eq!(team.labels.get("lead").map(String::as_str), Some("Alice"));

    let reparsed: Team = from_str(&to_string(&team)).unwrap();
    assert_eq!(reparsed, team);
}

#[test]
fn test_mapping_through_document_nodes() {
    let mut doc = parse(r#"{"owner":{"name":"Dana","age":50}}"#).unwrap();
    let owner = Person::from_json(&doc["owner"]).unwrap();
    assert_eq!(owner.age, 50);

    doc["owner"] = Person {
        age: 51,
        ..owner
    }
    .to_json();
    assert_eq!(doc["owner"]["age"].to_int(), 51);
    assert_eq!(doc["owner"]["role"], "Guest");
}

#[test]
fn test_field_names() {
    assert_eq!(
        Person::field_names(),
        ["name", "age", "email", "role", "scores"]
    );
    assert_eq!(Team::field_names(), ["title", "members", "labels"]);
}

#[test]
fn test_document_value_member() {
    #[derive(Debug, Default)]
    struct Envelope {
        kind: String,
        payload: JsonValue,
    }

    reflect_json! {
        Envelope {
            kind: String,
            payload: JsonValue,
        }
    }

    let envelope: Envelope = from_str(r#"{"kind":"raw","payload":{"x":[1,2]}}"#).unwrap();
    assert_eq!(envelope.kind, "raw");
    assert_eq!(envelope.payload["x"][1], 2i64);
}
