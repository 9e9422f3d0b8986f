use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vqlite_client::{TrainOptions, VqliteClient};

fn ok_body() -> serde_json::Value {
    json!({"status": "ok"})
}

#[tokio::test]
async fn create_collection_posts_name_and_dim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collection/test"))
        .and(body_json(json!({"name": "test", "dim": 128})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = VqliteClient::new(server.uri()).unwrap();
    let value = client.create_collection("test", 128).await.unwrap();
    assert_eq!(value["status"], "ok");
}

#[tokio::test]
async fn drop_collection_issues_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/collection/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = VqliteClient::new(server.uri()).unwrap();
    client.drop_collection("test").await.unwrap();
}

#[tokio::test]
async fn train_collection_sends_default_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collection/test/train"))
        .and(body_json(json!({"threads": 0, "ignore_check": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = VqliteClient::new(server.uri()).unwrap();
    client
        .train_collection("test", TrainOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn train_collection_sends_overridden_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collection/test/train"))
        .and(body_json(json!({"threads": 4, "ignore_check": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = VqliteClient::new(server.uri()).unwrap();
    client
        .train_collection("test", TrainOptions::default().threads(4).ignore_check(true))
        .await
        .unwrap();
}

#[tokio::test]
async fn dump_routes_cover_index_and_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collection/test/dump"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/collection/test/dump/index"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/collection/test/dump/metadata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = VqliteClient::new(server.uri()).unwrap();
    client.dump_collection("test").await.unwrap();
    client.dump_collection_index("test").await.unwrap();
    client.dump_collection_metadata("test").await.unwrap();
}

#[tokio::test]
async fn load_collection_posts_to_load_route() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collection/test/load"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = VqliteClient::new(server.uri()).unwrap();
    client.load_collection("test").await.unwrap();
}

#[tokio::test]
async fn statistics_and_stat_alias_hit_statistics_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statistics"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok", "data": {"collection_count": 0}})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = VqliteClient::new(server.uri()).unwrap();
    let value = client.statistics().await.unwrap();
    assert_eq!(value["data"]["collection_count"], 0);

    let alias = client.stat().await.unwrap();
    assert_eq!(alias["status"], "ok");
}

#[tokio::test]
async fn ping_hits_health_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = VqliteClient::new(server.uri()).unwrap();
    client.ping().await.unwrap();
}

#[tokio::test]
async fn collection_names_are_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collection/my%20col/load"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = VqliteClient::new(server.uri()).unwrap();
    client.load_collection("my col").await.unwrap();
}
