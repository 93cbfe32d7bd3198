//! Generators selected through `build_generator`, used as trait objects.

use casegen_config::OpenAiConfig;
use casegen_core::{ErrorKind, InputCase, Specification};
use casegen_provider::{ProviderKind, build_generator};
use serde_json::json;

fn spec() -> Specification {
    Specification {
        title: "Parse date".into(),
        subject: "parse_date".into(),
        inputs: vec![InputCase::from_record(json!({"name": "iso", "input": "2024-01-31"}))],
        edge_cases: vec![InputCase::from_record(json!({"name": "garbage", "input": "31/31/31"}))],
        ..Specification::default()
    }
}

#[tokio::test]
async fn local_generator_through_trait_object() {
    let generator = build_generator(ProviderKind::Local, &OpenAiConfig::default());

    let cases = generator.generate(&spec()).await.expect("local never fails");

    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].name, "parse_date_case_1");
    assert_eq!(cases[0].steps[0].action, "Call function:parse_date");
    assert_eq!(cases[1].name, "parse_date_edge_2");
}

#[tokio::test]
async fn remote_generator_without_key_is_configuration_error() {
    let config = OpenAiConfig {
        api_key: String::new(),
        // Unroutable; the request must never be attempted.
        base_url: "http://127.0.0.1:9/v1".into(),
        ..OpenAiConfig::default()
    };
    let generator = build_generator(ProviderKind::Remote, &config);

    let err = generator
        .generate(&spec())
        .await
        .expect_err("missing credential must fail");

    assert_eq!(err.kind(), ErrorKind::Configuration);
}
