//! A full pass against a mock endpoint.

use crate::prelude::*;

#[tokio::test(flavor = "multi_thread")]
async fn every_post_deleted() {
    let server = accepting_server().await;
    let ws = Workspace::with_tweets(&["1", "2", "3"]);

    cli()
        .workspace(&ws)
        .server(&server)
        .passes_async()
        .await
        .stderr_has("Loaded 3 tweets")
        .stderr_has("Setup 3 tweets with 0 already deleted")
        .stderr_has("Total 3 tweets, 3 deleted, 0 to go");

    similar_asserts::assert_eq!(ws.cache_text(), r#"{"1":2,"2":2,"3":2}"#);
    assert_eq!(requested_ids(&server).await, vec!["1", "2", "3"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn request_carries_credentials_and_query() {
    let server = accepting_server().await;
    let ws = Workspace::with_tweets(&["42"]);

    cli().workspace(&ws).server(&server).passes_async().await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.headers["authorization"], "Bearer AAAA");
    assert_eq!(req.headers["x-csrf-token"], "csrf123");
    let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "variables": { "tweet_id": "42", "dark_request": false },
            "queryId": "VaenaVgh5q5ih7kvyVjgtg"
        })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_post_stays_pending() {
    let server = MockServer::start().await;
    mount_delete(&server, "2", 403, r#"{"errors":[{"message":"nope"}]}"#).await;
    mount_delete(&server, "1", 200, "{}").await;
    mount_delete(&server, "3", 200, "{}").await;
    let ws = Workspace::with_tweets(&["1", "2", "3"]);

    cli()
        .workspace(&ws)
        .server(&server)
        .passes_async()
        .await
        .stderr_has(r#"Could not delete 2: {"errors":[{"message":"nope"}]}"#);

    similar_asserts::assert_eq!(ws.cache_text(), r#"{"1":2,"2":1,"3":2}"#);
}

#[tokio::test(flavor = "multi_thread")]
async fn debug_flag_logs_requests() {
    let server = accepting_server().await;
    let ws = Workspace::with_tweets(&["7"]);

    cli()
        .args(&["-d"])
        .workspace(&ws)
        .server(&server)
        .passes_async()
        .await
        .stderr_has("sending delete request")
        .stderr_has("Saving state to cache file")
        .stderr_lacks("Bearer AAAA");
}

#[tokio::test(flavor = "multi_thread")]
async fn checkpoint_interval_from_environment() {
    let server = accepting_server().await;
    let ws = Workspace::with_tweets(&["1", "2", "3", "4", "5"]);

    cli()
        .args(&["-d"])
        .workspace(&ws)
        .server(&server)
        .env("DELTWEET_CHECKPOINT_EVERY", "2")
        .env("DELTWEET_STATS_EVERY", "2")
        .passes_async()
        .await
        .stderr_has("Total 5 tweets, 2 deleted, 3 to go")
        .stderr_has("Total 5 tweets, 4 deleted, 1 to go");

    assert_eq!(ws.cache()["5"], 2);
}
