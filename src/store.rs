//! Browser-side collaborators for the sync channel: an HTTP document store,
//! the JS wall clock and a `spawn_local` spawner.

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use viewer_core::{
    validate_key, Clock, ModelStore, PersistedRecord, Spawner, StoreError, StoredDocument,
    MODELS_COLLECTION,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: JsValue) -> StoreError {
    StoreError::Transport(format!("{e:?}"))
}

/// `GET`/`PUT` of whole JSON documents at `{base}/models/{id}`.
pub struct HttpDocumentStore {
    base_url: String,
}

impl HttpDocumentStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn document_url(&self, id: &str) -> Result<String, StoreError> {
        validate_key(id)?;
        Ok(format!("{}/{}/{}", self.base_url, MODELS_COLLECTION, id))
    }

    async fn send(
        &self,
        method: &str,
        url: &str,
        body: Option<&str>,
    ) -> Result<web::Response, StoreError> {
        let init = web::RequestInit::new();
        init.set_method(method);
        init.set_mode(web::RequestMode::Cors);
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(body));
        }
        let request = web::Request::new_with_str_and_init(url, &init).map_err(js_err)?;
        _ = request.headers().set("Accept", "application/json");
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(js_err)?;
        }
        let window = web::window().ok_or_else(|| StoreError::Transport("no window".into()))?;
        let resp = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        resp.dyn_into::<web::Response>().map_err(js_err)
    }
}

#[async_trait(?Send)]
impl ModelStore for HttpDocumentStore {
    async fn get(&self, id: &str) -> Result<Option<StoredDocument>, StoreError> {
        let url = self.document_url(id)?;
        let resp = self.send("GET", &url, None).await?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(StoreError::Status(resp.status()));
        }
        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?
            .as_string()
            .unwrap_or_default();
        Ok(Some(serde_json::from_str(&text)?))
    }

    async fn put(&self, id: &str, record: &PersistedRecord) -> Result<(), StoreError> {
        let url = self.document_url(id)?;
        let body = serde_json::to_string(record)?;
        let resp = self.send("PUT", &url, Some(&body)).await?;
        if !resp.ok() {
            return Err(StoreError::Status(resp.status()));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// Runs tasks on the browser microtask queue.
#[derive(Clone, Copy, Debug, Default)]
pub struct WasmSpawner;

impl Spawner for WasmSpawner {
    fn spawn_task(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
