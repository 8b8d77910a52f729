mod common;

use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn list_is_empty_array_when_nothing_stored() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/movies"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_assigns_id_and_get_returns_it() {
    let app = TestApp::spawn().await;

    let created = app.post_movie(json!({ "Title": "Inception" })).await;
    let id = created["Id"].as_str().expect("Id missing from response");
    assert!(!id.is_empty());
    assert_eq!(created["Title"], "Inception");

    let response = app
        .client
        .get(app.url(&format!("/api/movies/{}", id)))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let fetched: serde_json::Value = response.json().await.unwrap();
    assert_eq!(fetched["Id"], id);
    assert_eq!(fetched["Title"], "Inception");
}

#[tokio::test]
async fn create_passes_opaque_fields_through() {
    let app = TestApp::spawn().await;

    let body = json!({
        "Title": "Arrival",
        "Genre": "Sci-Fi",
        "Year": 2016,
        "Cast": ["Amy Adams", "Jeremy Renner"]
    });
    let created = app.post_movie(body.clone()).await;

    for key in ["Title", "Genre", "Year", "Cast"] {
        assert_eq!(created[key], body[key]);
    }
}

#[tokio::test]
async fn create_keeps_supplied_id() {
    let app = TestApp::spawn().await;

    let created = app
        .post_movie(json!({ "Id": "tt0137523", "Title": "Fight Club" }))
        .await;
    assert_eq!(created["Id"], "tt0137523");
}

#[tokio::test]
async fn list_returns_every_created_movie_once() {
    let app = TestApp::spawn().await;

    let mut ids = Vec::new();
    for title in ["Heat", "Ronin", "Collateral"] {
        let created = app.post_movie(json!({ "Title": title })).await;
        ids.push(created["Id"].as_str().unwrap().to_string());
    }

    let listed: Vec<serde_json::Value> = app
        .client
        .get(app.url("/api/movies"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    assert_eq!(listed.len(), 3);
    for id in &ids {
        assert_eq!(listed.iter().filter(|m| m["Id"] == id.as_str()).count(), 1);
    }
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/movies/never-inserted"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn update_replaces_document_and_forces_path_id() {
    let app = TestApp::spawn().await;

    let created = app
        .post_movie(json!({ "Title": "Blade Runner", "Year": 1982 }))
        .await;
    let id = created["Id"].as_str().unwrap().to_string();

    let response = app
        .client
        .put(app.url(&format!("/api/movies/{}", id)))
        .json(&json!({ "Id": "something-else", "Title": "Blade Runner 2049" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["Id"], id.as_str());
    assert_eq!(updated["Title"], "Blade Runner 2049");

    let fetched: serde_json::Value = app
        .client
        .get(app.url(&format!("/api/movies/{}", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["Title"], "Blade Runner 2049");
    // Whole-document replace: fields not resent are gone
    assert!(fetched.get("Year").is_none());

    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn update_unknown_id_returns_404_without_creating() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .put(app.url("/api/movies/does-not-exist"))
        .json(&json!({ "Title": "Ghost" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn delete_existing_then_get_returns_404() {
    let app = TestApp::spawn().await;

    let created = app.post_movie(json!({ "Title": "Memento" })).await;
    let id = created["Id"].as_str().unwrap().to_string();
    let url = app.url(&format!("/api/movies/{}", id));

    let response = app
        .client
        .delete(&url)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().is_empty());

    let response = app.client.get(&url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    // A second delete no longer finds the movie
    let response = app.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn delete_unknown_id_leaves_other_movies_alone() {
    let app = TestApp::spawn().await;
    app.post_movie(json!({ "Title": "Tenet" })).await;

    let response = app
        .client
        .delete(app.url("/api/movies/does-not-exist"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn malformed_json_is_rejected_as_client_error() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/movies"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_client_error());
    assert!(app.store.is_empty().await);
}
