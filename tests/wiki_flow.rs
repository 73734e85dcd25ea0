//! End-to-end tests against a live server over real TCP.

mod common;

use common::{client, spawn_file_server, spawn_sqlite_server};

#[tokio::test]
async fn missing_page_redirects_to_edit() {
    let server = spawn_file_server().await;

    let res = client()
        .get(format!("{}/view/NoSuchPage", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "/edit/NoSuchPage");
}

#[tokio::test]
async fn save_then_view_round_trips_with_links() {
    let server = spawn_file_server().await;
    let client = client();

    let res = client
        .post(format!("{}/save/Home", server.base_url))
        .form(&[("body", "see [Other] page")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "/view/Home");

    let res = client
        .get(format!("{}/view/Home", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let html = res.text().await.unwrap();
    assert!(html.contains("<h1>Home</h1>"));
    assert!(html.contains("see <a href=\"/view/Other\">Other</a> page"));
}

#[tokio::test]
async fn edit_then_save_creates_a_page() {
    let server = spawn_file_server().await;
    let client = client();

    // The edit form for a nonexistent page is the create flow.
    let res = client
        .get(format!("{}/edit/Fresh", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let html = res.text().await.unwrap();
    assert!(html.contains("action=\"/save/Fresh\""));
    assert!(html.contains("></textarea>"));

    let res = client
        .post(format!("{}/save/Fresh", server.base_url))
        .form(&[("body", "now it exists")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 302);

    let res = client
        .get(format!("{}/view/Fresh", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("now it exists"));
}

#[tokio::test]
async fn sqlite_backend_replaces_on_resave() {
    let server = spawn_sqlite_server().await;
    let client = client();

    for body in ["first draft", "second draft"] {
        let res = client
            .post(format!("{}/save/Home", server.base_url))
            .form(&[("body", body)])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 302);
    }

    let res = client
        .get(format!("{}/view/Home", server.base_url))
        .send()
        .await
        .unwrap();
    let html = res.text().await.unwrap();
    assert!(html.contains("second draft"));
    assert!(!html.contains("first draft"));
}

#[tokio::test]
async fn malformed_path_falls_back_to_test_page() {
    let server = spawn_file_server().await;
    let client = client();

    let bad = client
        .get(format!("{}/view/bad!title", server.base_url))
        .send()
        .await
        .unwrap();
    let canonical = client
        .get(format!("{}/view/TestPage", server.base_url))
        .send()
        .await
        .unwrap();

    // Malformed paths never 404; they resolve exactly like the fallback page.
    assert_eq!(bad.status(), canonical.status());
    assert_eq!(
        bad.headers().get("location"),
        canonical.headers().get("location")
    );
}

#[tokio::test]
async fn root_level_title_is_viewed() {
    let server = spawn_file_server().await;
    let client = client();

    client
        .post(format!("{}/save/Front", server.base_url))
        .form(&[("body", "front matter")])
        .send()
        .await
        .unwrap();

    // The empty-action form "//Front" views the page.
    let res = client
        .get(format!("{}//Front", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("front matter"));
}
