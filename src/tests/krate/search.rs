use http::StatusCode;
use serde_json::json;

use crate::fixtures::{CrateBuilder, UserBuilder, VersionBuilder};
use crate::tests::util::TestApp;

#[tokio::test]
async fn empty_case() {
    let app = TestApp::init();

    let response = app.get("/api/v1/crates").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "crates": [], "meta": { "total": 0 } })
    );
}

#[tokio::test]
async fn returns_a_paginated_crates_list() {
    let app = TestApp::init();
    app.with_store(|store| {
        let krate = CrateBuilder::new("rand").build(store);
        VersionBuilder::new(krate.id).num("1.0.0").build(store);
        VersionBuilder::new(krate.id)
            .num("2.0.0-beta.1")
            .build(store);
    });

    let response = app.get("/api/v1/crates").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "crates": [
                {
                    "id": "rand",
                    "badges": [],
                    "categories": [],
                    "created_at": "2010-06-16T21:30:45Z",
                    "description": "This is the description for the crate called \"rand\"",
                    "documentation": null,
                    "downloads": 0,
                    "homepage": null,
                    "keywords": [],
                    "links": {
                        "owner_team": "/api/v1/crates/rand/owner_team",
                        "owner_user": "/api/v1/crates/rand/owner_user",
                        "reverse_dependencies": "/api/v1/crates/rand/reverse_dependencies",
                        "version_downloads": "/api/v1/crates/rand/downloads",
                        "versions": "/api/v1/crates/rand/versions",
                    },
                    "max_version": "2.0.0-beta.1",
                    "max_stable_version": "1.0.0",
                    "name": "rand",
                    "newest_version": "2.0.0-beta.1",
                    "repository": null,
                    "updated_at": "2017-02-24T12:34:56Z",
                    "versions": ["1", "2"],
                },
            ],
            "meta": { "total": 1 },
        })
    );
}

#[tokio::test]
async fn never_returns_more_than_10_results() {
    let app = TestApp::init();
    app.with_store(|store| {
        let crates = store.create_crates(25, |_| CrateBuilder::default());
        store.create_versions(25, |i| VersionBuilder::new(crates[i].id));
    });

    let response = app.get("/api/v1/crates").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response.json();
    assert_eq!(json["crates"].as_array().unwrap().len(), 10);
    assert_eq!(json["meta"]["total"], 25);
}

#[tokio::test]
async fn supports_page_and_per_page_parameters() {
    let app = TestApp::init();
    app.with_store(|store| {
        let crates = store.create_crates(25, |i| {
            CrateBuilder::new(format!("crate-{:02}", i + 1))
        });
        store.create_versions(25, |i| VersionBuilder::new(crates[i].id));
    });

    let response = app.get("/api/v1/crates?page=2&per_page=5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response.json();
    let ids: Vec<_> = json["crates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        ids,
        ["crate-06", "crate-07", "crate-08", "crate-09", "crate-10"]
    );
    assert_eq!(json["meta"]["total"], 25);
}

#[tokio::test]
async fn supports_a_letter_parameter() {
    let app = TestApp::init();
    app.with_store(|store| {
        for name in ["foo", "bar", "BAZ"] {
            let krate = CrateBuilder::new(name).build(store);
            VersionBuilder::new(krate.id).build(store);
        }
    });

    let response = app.get("/api/v1/crates?letter=b").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response.json();
    let ids: Vec<_> = json["crates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["bar", "BAZ"]);
    assert_eq!(json["meta"]["total"], 2);
}

#[tokio::test]
async fn supports_a_q_parameter() {
    let app = TestApp::init();
    app.with_store(|store| {
        for name in ["123456", "00123", "87654"] {
            let krate = CrateBuilder::new(name).build(store);
            VersionBuilder::new(krate.id).build(store);
        }
    });

    let response = app.get("/api/v1/crates?q=123").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response.json();
    let ids: Vec<_> = json["crates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["123456", "00123"]);
    assert_eq!(json["meta"]["total"], 2);
}

#[tokio::test]
async fn supports_a_user_id_parameter() {
    let app = TestApp::init();
    let user1 = app.with_store(|store| {
        let user1 = UserBuilder::default().build(store);
        let user2 = UserBuilder::default().build(store);

        let foo = CrateBuilder::new("foo").build(store);
        VersionBuilder::new(foo.id).build(store);
        let bar = CrateBuilder::new("bar").build(store);
        store.add_user_owner(&bar, &user1);
        VersionBuilder::new(bar.id).build(store);
        let baz = CrateBuilder::new("baz").build(store);
        store.add_user_owner(&baz, &user2);
        VersionBuilder::new(baz.id).build(store);

        user1
    });

    let response = app
        .get(&format!("/api/v1/crates?user_id={}", user1.id))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response.json();
    assert_eq!(json["crates"].as_array().unwrap().len(), 1);
    assert_eq!(json["crates"][0]["id"], "bar");
    assert_eq!(json["meta"]["total"], 1);
}

#[tokio::test]
async fn supports_a_team_id_parameter() {
    use crate::fixtures::TeamBuilder;

    let app = TestApp::init();
    let team1 = app.with_store(|store| {
        let team1 = TeamBuilder::default().build(store);
        let team2 = TeamBuilder::default().build(store);

        let foo = CrateBuilder::new("foo").build(store);
        VersionBuilder::new(foo.id).build(store);
        let bar = CrateBuilder::new("bar").build(store);
        store.add_team_owner(&bar, &team1);
        VersionBuilder::new(bar.id).build(store);
        let baz = CrateBuilder::new("baz").build(store);
        store.add_team_owner(&baz, &team2);
        VersionBuilder::new(baz.id).build(store);

        team1
    });

    let response = app
        .get(&format!("/api/v1/crates?team_id={}", team1.id))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response.json();
    assert_eq!(json["crates"].as_array().unwrap().len(), 1);
    assert_eq!(json["crates"][0]["id"], "bar");
    assert_eq!(json["meta"]["total"], 1);
}

#[tokio::test]
async fn supports_a_following_parameter() {
    let app = TestApp::init();
    let user = app.with_store(|store| {
        let foo = CrateBuilder::new("foo").build(store);
        VersionBuilder::new(foo.id).build(store);
        let bar = CrateBuilder::new("bar").build(store);
        VersionBuilder::new(bar.id).build(store);

        UserBuilder::default().followed_crate(&bar).build(store)
    });

    let response = app.get_as("/api/v1/crates?following=1", &user).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = response.json();
    assert_eq!(json["crates"].as_array().unwrap().len(), 1);
    assert_eq!(json["crates"][0]["id"], "bar");
    assert_eq!(json["meta"]["total"], 1);
}

#[tokio::test]
async fn following_requires_authentication() {
    let app = TestApp::init();

    let response = app.get("/api/v1/crates?following=1").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    insta::assert_snapshot!(
        response.text(),
        @r#"{"errors":[{"detail":"must be logged in to perform that action"}]}"#
    );
}
