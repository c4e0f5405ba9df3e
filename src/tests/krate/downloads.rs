use http::StatusCode;
use insta::assert_snapshot;
use serde_json::json;

use crate::fixtures::{CrateBuilder, VersionBuilder, VersionDownloadBuilder};
use crate::tests::util::TestApp;

#[tokio::test]
async fn returns_404_for_unknown_crates() {
    let app = TestApp::init();

    let response = app.get("/api/v1/crates/foo/downloads").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_snapshot!(response.text(), @r#"{"errors":[{"detail":"Not Found"}]}"#);
}

#[tokio::test]
async fn returns_an_empty_list_if_there_are_no_downloads() {
    let app = TestApp::init();
    app.with_store(|store| {
        CrateBuilder::new("rand").build(store);
    });

    let response = app.get("/api/v1/crates/rand/downloads").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "version_downloads": [],
            "meta": { "extra_downloads": [] },
        })
    );
}

#[tokio::test]
async fn returns_the_downloads_of_all_versions() {
    let app = TestApp::init();
    app.with_store(|store| {
        let krate = CrateBuilder::new("rand").build(store);
        let version1 = VersionBuilder::new(krate.id).num("1.0.0").build(store);
        let version2 = VersionBuilder::new(krate.id).num("2.0.0").build(store);
        VersionDownloadBuilder::new(version1.id, "2020-01-13").build(store);
        VersionDownloadBuilder::new(version2.id, "2020-01-14").build(store);
        VersionDownloadBuilder::new(version2.id, "2020-01-15").build(store);
    });

    let response = app.get("/api/v1/crates/rand/downloads").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "version_downloads": [
                {
                    "date": "2020-01-13",
                    "downloads": 9_380,
                    "version": "1",
                },
                {
                    "date": "2020-01-14",
                    "downloads": 16_415,
                    "version": "2",
                },
                {
                    "date": "2020-01-15",
                    "downloads": 23_450,
                    "version": "2",
                },
            ],
            "meta": { "extra_downloads": [] },
        })
    );
}
