use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A record pairing a document identifier (`vqid`), string metadata, and one
/// or more embedding vectors. `vectors_tag`, when present, carries one tag
/// per vector row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub vqid: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub vectors: Vec<Vec<f32>>,
    #[serde(default)]
    pub vectors_tag: Option<Vec<i64>>,
}

impl Document {
    pub fn new(
        vqid: impl Into<String>,
        metadata: HashMap<String, String>,
        vectors: Vec<Vec<f32>>,
    ) -> Self {
        Self {
            vqid: vqid.into(),
            metadata,
            vectors,
            vectors_tag: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<i64>) -> Self {
        self.vectors_tag = Some(tags);
        self
    }
}

/// Metadata-only partial record for document updates; no vector fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentUpdate {
    pub vqid: String,
    pub metadata: HashMap<String, String>,
}

impl DocumentUpdate {
    pub fn new(vqid: impl Into<String>, metadata: HashMap<String, String>) -> Self {
        Self {
            vqid: vqid.into(),
            metadata,
        }
    }
}

/// Search parameters sent as the `opt` object of a search request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub topk: u32,
    pub nprobe: u32,
    pub reorder: u32,
    pub timeout: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            topk: 30,
            nprobe: 128,
            reorder: 128,
            timeout: 60,
        }
    }
}

impl SearchOptions {
    pub fn topk(mut self, value: u32) -> Self {
        self.topk = value;
        self
    }

    pub fn nprobe(mut self, value: u32) -> Self {
        self.nprobe = value;
        self
    }

    pub fn reorder(mut self, value: u32) -> Self {
        self.reorder = value;
        self
    }

    pub fn timeout(mut self, value: u64) -> Self {
        self.timeout = value;
        self
    }
}

/// Training parameters for a collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainOptions {
    pub threads: u32,
    pub ignore_check: bool,
}

impl TrainOptions {
    pub fn threads(mut self, value: u32) -> Self {
        self.threads = value;
        self
    }

    pub fn ignore_check(mut self, value: bool) -> Self {
        self.ignore_check = value;
        self
    }
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct CreateCollectionRequest<'a> {
    pub name: &'a str,
    pub dim: u32,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub vectors: &'a [Vec<f32>],
    pub opt: &'a SearchOptions,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct BatchAddDocumentsRequest<'a> {
    pub documents: &'a [Document],
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct DeleteDocumentRequest<'a> {
    pub vqid: &'a str,
}
