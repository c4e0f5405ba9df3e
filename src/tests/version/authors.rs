use http::StatusCode;
use insta::assert_snapshot;
use serde_json::json;

use crate::fixtures::{CrateBuilder, VersionBuilder};
use crate::tests::util::TestApp;

#[tokio::test]
async fn returns_404_for_unknown_crates() {
    let app = TestApp::init();

    let response = app.get("/api/v1/crates/foo/1.0.0/authors").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_snapshot!(response.text(), @r#"{"errors":[{"detail":"Not Found"}]}"#);
}

#[tokio::test]
async fn returns_200_for_unknown_versions() {
    let app = TestApp::init();
    app.with_store(|store| {
        CrateBuilder::new("rand").build(store);
    });

    let response = app.get("/api/v1/crates/rand/1.0.0/authors").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_snapshot!(response.text(), @r#"{"errors":[{"detail":"crate `rand` does not have a version `1.0.0`"}]}"#);
}

#[tokio::test]
async fn returns_an_empty_list_if_there_are_no_authors() {
    let app = TestApp::init();
    app.with_store(|store| {
        let krate = CrateBuilder::new("rand").build(store);
        VersionBuilder::new(krate.id).num("1.0.0").build(store);
    });

    let response = app.get("/api/v1/crates/rand/1.0.0/authors").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "meta": { "names": [] },
            "users": [],
        })
    );
}

#[tokio::test]
async fn returns_the_authors_of_the_version() {
    let app = TestApp::init();
    app.with_store(|store| {
        let krate = CrateBuilder::new("rand").build(store);
        VersionBuilder::new(krate.id)
            .num("1.0.0")
            .author("John Doe <johnnydee@gmail.com>")
            .author("The Rust Project Developers")
            .build(store);
    });

    let response = app.get("/api/v1/crates/rand/1.0.0/authors").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "meta": {
                "names": ["John Doe <johnnydee@gmail.com>", "The Rust Project Developers"],
            },
            "users": [],
        })
    );
}
