use http::StatusCode;
use insta::assert_snapshot;
use serde_json::json;

use crate::fixtures::{CategoryBuilder, CrateBuilder, KeywordBuilder, VersionBuilder};
use crate::tests::util::TestApp;

#[tokio::test]
async fn returns_404_for_unknown_crates() {
    let app = TestApp::init();

    let response = app.get("/api/v1/crates/foo").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_snapshot!(response.text(), @r#"{"errors":[{"detail":"Not Found"}]}"#);
}

#[tokio::test]
async fn returns_a_crate_object_for_known_crates() {
    let app = TestApp::init();
    app.with_store(|store| {
        let krate = CrateBuilder::new("rand").build(store);
        VersionBuilder::new(krate.id)
            .num("1.0.0-beta.1")
            .build(store);
    });

    let response = app.get("/api/v1/crates/rand").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "categories": [],
            "crate": {
                "badges": [],
                "categories": [],
                "created_at": "2010-06-16T21:30:45Z",
                "description": "This is the description for the crate called \"rand\"",
                "documentation": null,
                "downloads": 0,
                "homepage": null,
                "id": "rand",
                "keywords": [],
                "links": {
                    "owner_team": "/api/v1/crates/rand/owner_team",
                    "owner_user": "/api/v1/crates/rand/owner_user",
                    "reverse_dependencies": "/api/v1/crates/rand/reverse_dependencies",
                    "version_downloads": "/api/v1/crates/rand/downloads",
                    "versions": "/api/v1/crates/rand/versions",
                },
                "max_version": "1.0.0-beta.1",
                "max_stable_version": null,
                "name": "rand",
                "newest_version": "1.0.0-beta.1",
                "repository": null,
                "updated_at": "2017-02-24T12:34:56Z",
                "versions": ["1"],
            },
            "keywords": [],
            "versions": [
                {
                    "id": "1",
                    "crate": "rand",
                    "crate_size": 0,
                    "created_at": "2010-06-16T21:30:45Z",
                    "dl_path": "/api/v1/crates/rand/1.0.0-beta.1/download",
                    "downloads": 0,
                    "license": "MIT/Apache-2.0",
                    "links": {
                        "authors": "/api/v1/crates/rand/1.0.0-beta.1/authors",
                        "dependencies": "/api/v1/crates/rand/1.0.0-beta.1/dependencies",
                        "version_downloads": "/api/v1/crates/rand/1.0.0-beta.1/downloads",
                    },
                    "num": "1.0.0-beta.1",
                    "published_by": null,
                    "updated_at": "2017-02-24T12:34:56Z",
                    "yanked": false,
                },
            ],
        })
    );
}

#[tokio::test]
async fn includes_related_versions() {
    let app = TestApp::init();
    app.with_store(|store| {
        let krate = CrateBuilder::new("rand").build(store);
        VersionBuilder::new(krate.id).num("1.0.0").build(store);
        VersionBuilder::new(krate.id).num("1.1.0").build(store);
        VersionBuilder::new(krate.id).num("1.2.0").build(store);
    });

    let response = app.get("/api/v1/crates/rand").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response.json();
    assert_eq!(json["crate"]["versions"], json!(["1", "2", "3"]));
    assert_eq!(
        json["versions"],
        json!([
            {
                "id": "1",
                "crate": "rand",
                "crate_size": 0,
                "created_at": "2010-06-16T21:30:45Z",
                "dl_path": "/api/v1/crates/rand/1.0.0/download",
                "downloads": 0,
                "license": "MIT/Apache-2.0",
                "links": {
                    "authors": "/api/v1/crates/rand/1.0.0/authors",
                    "dependencies": "/api/v1/crates/rand/1.0.0/dependencies",
                    "version_downloads": "/api/v1/crates/rand/1.0.0/downloads",
                },
                "num": "1.0.0",
                "published_by": null,
                "updated_at": "2017-02-24T12:34:56Z",
                "yanked": false,
            },
            {
                "id": "2",
                "crate": "rand",
                "crate_size": 162_963,
                "created_at": "2010-06-16T21:30:45Z",
                "dl_path": "/api/v1/crates/rand/1.1.0/download",
                "downloads": 3_702,
                "license": "MIT",
                "links": {
                    "authors": "/api/v1/crates/rand/1.1.0/authors",
                    "dependencies": "/api/v1/crates/rand/1.1.0/dependencies",
                    "version_downloads": "/api/v1/crates/rand/1.1.0/downloads",
                },
                "num": "1.1.0",
                "published_by": null,
                "updated_at": "2017-02-24T12:34:56Z",
                "yanked": false,
            },
            {
                "id": "3",
                "crate": "rand",
                "crate_size": 325_926,
                "created_at": "2010-06-16T21:30:45Z",
                "dl_path": "/api/v1/crates/rand/1.2.0/download",
                "downloads": 7_404,
                "license": "Apache-2.0",
                "links": {
                    "authors": "/api/v1/crates/rand/1.2.0/authors",
                    "dependencies": "/api/v1/crates/rand/1.2.0/dependencies",
                    "version_downloads": "/api/v1/crates/rand/1.2.0/downloads",
                },
                "num": "1.2.0",
                "published_by": null,
                "updated_at": "2017-02-24T12:34:56Z",
                "yanked": false,
            },
        ])
    );
}

#[tokio::test]
async fn includes_related_categories() {
    let app = TestApp::init();
    app.with_store(|store| {
        let no_std = CategoryBuilder::new("no-std").build(store);
        CategoryBuilder::new("cli").build(store);
        let krate = CrateBuilder::new("rand").category(&no_std).build(store);
        VersionBuilder::new(krate.id).build(store);
    });

    let response = app.get("/api/v1/crates/rand").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response.json();
    assert_eq!(json["crate"]["categories"], json!(["no-std"]));
    assert_eq!(
        json["categories"],
        json!([
            {
                "id": "no-std",
                "category": "no-std",
                "crates_cnt": 1,
                "created_at": "2010-06-16T21:30:45Z",
                "description": "This is the description for the category called \"no-std\"",
                "slug": "no-std",
            },
        ])
    );
}

#[tokio::test]
async fn includes_related_keywords() {
    let app = TestApp::init();
    app.with_store(|store| {
        let no_std = KeywordBuilder::new("no-std").build(store);
        KeywordBuilder::new("cli").build(store);
        let krate = CrateBuilder::new("rand").keyword(&no_std).build(store);
        VersionBuilder::new(krate.id).build(store);
    });

    let response = app.get("/api/v1/crates/rand").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response.json();
    assert_eq!(json["crate"]["keywords"], json!(["no-std"]));
    assert_eq!(
        json["keywords"],
        json!([
            {
                "crates_cnt": 1,
                "id": "no-std",
                "keyword": "no-std",
            },
        ])
    );
}
