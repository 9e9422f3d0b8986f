use reqwest::header::HeaderMap;
use reqwest::{Method, Response};
use serde::Serialize;
use serde_json::Value;

use crate::client::VqliteHttpClient;
use crate::types::{
    BatchAddDocumentsRequest, CreateCollectionRequest, DeleteDocumentRequest, SearchRequest,
};
use crate::{
    Document, DocumentUpdate, SearchOptions, TrainOptions, VqliteClientBuilder, VqliteError,
};

/// Client for the VQLite REST API.
///
/// Every operation serializes its payload, delegates to the transport
/// client, and decodes the JSON response body into a generic
/// [`serde_json::Value`]. HTTP statuses are not interpreted: the server's
/// `{"status": ...}` / `{"error": ...}` envelopes come back as ordinary
/// values for the caller to inspect.
#[derive(Clone, Debug)]
pub struct VqliteClient {
    client: VqliteHttpClient,
}

impl VqliteClient {
    pub fn builder() -> VqliteClientBuilder {
        VqliteClientBuilder::new()
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self, VqliteError> {
        Self::builder().base_url(base_url).build()
    }

    pub(crate) fn from_http_client(client: VqliteHttpClient) -> Self {
        Self { client }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// The underlying transport, for callers that need the raw response.
    pub fn http_client(&self) -> &VqliteHttpClient {
        &self.client
    }

    pub async fn ping(&self) -> Result<Value, VqliteError> {
        self.get("/ping").await
    }

    pub async fn statistics(&self) -> Result<Value, VqliteError> {
        self.get("/statistics").await
    }

    pub async fn stat(&self) -> Result<Value, VqliteError> {
        self.statistics().await
    }

    pub async fn create_collection(&self, name: &str, dim: u32) -> Result<Value, VqliteError> {
        let request = CreateCollectionRequest { name, dim };
        self.send(
            Method::POST,
            &format!("/collection/{}", encode(name)),
            Some(&request),
        )
        .await
    }

    pub async fn drop_collection(&self, name: &str) -> Result<Value, VqliteError> {
        self.send::<Value>(Method::DELETE, &format!("/collection/{}", encode(name)), None)
            .await
    }

    pub async fn train_collection(
        &self,
        name: &str,
        opt: TrainOptions,
    ) -> Result<Value, VqliteError> {
        let span = tracing::info_span!("vqlite_train", collection = %name, threads = opt.threads);
        let _guard = span.enter();

        self.send(
            Method::POST,
            &format!("/collection/{}/train", encode(name)),
            Some(&opt),
        )
        .await
    }

    pub async fn dump_collection(&self, name: &str) -> Result<Value, VqliteError> {
        self.send::<Value>(
            Method::POST,
            &format!("/collection/{}/dump", encode(name)),
            None,
        )
        .await
    }

    pub async fn dump_collection_index(&self, name: &str) -> Result<Value, VqliteError> {
        self.send::<Value>(
            Method::POST,
            &format!("/collection/{}/dump/index", encode(name)),
            None,
        )
        .await
    }

    pub async fn dump_collection_metadata(&self, name: &str) -> Result<Value, VqliteError> {
        self.send::<Value>(
            Method::POST,
            &format!("/collection/{}/dump/metadata", encode(name)),
            None,
        )
        .await
    }

    pub async fn load_collection(&self, name: &str) -> Result<Value, VqliteError> {
        self.send::<Value>(
            Method::POST,
            &format!("/collection/{}/load", encode(name)),
            None,
        )
        .await
    }

    pub async fn search_collection(
        &self,
        name: &str,
        vectors: &[Vec<f32>],
        opt: SearchOptions,
    ) -> Result<Value, VqliteError> {
        let span = tracing::info_span!(
            "vqlite_search",
            collection = %name,
            vector_count = vectors.len(),
            topk = opt.topk,
        );
        let _guard = span.enter();

        let request = SearchRequest {
            vectors,
            opt: &opt,
        };
        self.send(
            Method::POST,
            &format!("/collection/{}/search", encode(name)),
            Some(&request),
        )
        .await
    }

    pub async fn add_document(
        &self,
        name: &str,
        document: &Document,
    ) -> Result<Value, VqliteError> {
        let span = tracing::info_span!("vqlite_add", collection = %name, vqid = %document.vqid);
        let _guard = span.enter();

        validate_tags(document)?;
        self.send(
            Method::POST,
            &format!("/collection/{}/document", encode(name)),
            Some(document),
        )
        .await
    }

    pub async fn batch_add_documents(
        &self,
        name: &str,
        documents: &[Document],
    ) -> Result<Value, VqliteError> {
        let span = tracing::info_span!(
            "vqlite_batch_add",
            collection = %name,
            batch_size = documents.len(),
        );
        let _guard = span.enter();

        for document in documents {
            validate_tags(document)?;
        }
        let request = BatchAddDocumentsRequest { documents };
        self.send(
            Method::POST,
            &format!("/collection/{}/document/batch", encode(name)),
            Some(&request),
        )
        .await
    }

    pub async fn update_document(
        &self,
        name: &str,
        update: &DocumentUpdate,
    ) -> Result<Value, VqliteError> {
        self.send(
            Method::PUT,
            &format!("/collection/{}/document", encode(name)),
            Some(update),
        )
        .await
    }

    pub async fn delete_document(&self, name: &str, vqid: &str) -> Result<Value, VqliteError> {
        let request = DeleteDocumentRequest { vqid };
        self.send(
            Method::DELETE,
            &format!("/collection/{}/document", encode(name)),
            Some(&request),
        )
        .await
    }

    pub async fn get_document_metadata(
        &self,
        name: &str,
        vqid: Option<&str>,
        all: bool,
    ) -> Result<Value, VqliteError> {
        let mut path = format!("/collection/{}/document", encode(name));
        let mut query = Vec::new();
        if let Some(vqid) = vqid {
            query.push(format!("vqid={}", encode(vqid)));
        }
        if all {
            query.push("all=true".to_string());
        }
        if !query.is_empty() {
            path = format!("{path}?{}", query.join("&"));
        }
        self.get(&path).await
    }

    async fn get(&self, path: &str) -> Result<Value, VqliteError> {
        let url = self.client.endpoint(path);
        let response = self
            .client
            .request::<Value>(Method::GET, &url, HeaderMap::new(), None)
            .await?;
        decode(response).await
    }

    async fn send<Req>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Req>,
    ) -> Result<Value, VqliteError>
    where
        Req: Serialize + ?Sized,
    {
        let url = self.client.endpoint(path);
        let response = self
            .client
            .request(method, &url, HeaderMap::new(), body)
            .await?;
        decode(response).await
    }
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

fn validate_tags(document: &Document) -> Result<(), VqliteError> {
    if let Some(tags) = &document.vectors_tag {
        if tags.len() != document.vectors.len() {
            return Err(VqliteError::TagMismatch {
                vectors: document.vectors.len(),
                tags: tags.len(),
            });
        }
    }
    Ok(())
}

async fn decode(response: Response) -> Result<Value, VqliteError> {
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&body)
        .map_err(|err| VqliteError::Malformed(format!("failed to decode response body: {err}")))
}
