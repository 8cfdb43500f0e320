//! Shared fixtures for behavior tests.

#![allow(dead_code)]

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use fxrate_core::{
    ClientConfig, ExchangeRatePipeline, HttpClient, HttpError, HttpRequest, HttpResponse,
    MemorySink,
};

pub const CATALOG_USD_EUR_MDL: &str = r#"{"data": ["USD", "EUR", "MDL", "RON"], "error": null}"#;

pub fn rate_body(from: &str, to: &str, rate: &str, date: &str) -> String {
    format!(
        r#"{{"data": {{"from": "{from}", "to": "{to}", "rate": {rate}, "date": "{date}"}}, "error": null}}"#
    )
}

/// Fake rate service: fixed answers per endpoint plus a log of every call.
#[derive(Debug)]
pub struct FakeRateService {
    catalog: Result<HttpResponse, HttpError>,
    rate: Mutex<Result<HttpResponse, HttpError>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeRateService {
    pub fn new() -> Self {
        Self {
            catalog: Ok(HttpResponse::ok_json(CATALOG_USD_EUR_MDL)),
            rate: Mutex::new(Err(HttpError::new(
                "connection failed: rate endpoint not scripted",
            ))),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_catalog(mut self, response: Result<HttpResponse, HttpError>) -> Self {
        self.catalog = response;
        self
    }

    pub fn with_rate(self, response: Result<HttpResponse, HttpError>) -> Self {
        self.set_rate(response);
        self
    }

    /// Change the rate answer between runs.
    pub fn set_rate(&self, response: Result<HttpResponse, HttpError>) {
        *self.rate.lock().expect("rate script should not be poisoned") = response;
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .clone()
    }

    pub fn catalog_calls(&self) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.url.ends_with("?currencies"))
            .count()
    }

    pub fn rate_calls(&self) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.url.contains("?from="))
            .count()
    }
}

impl HttpClient for FakeRateService {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = if request.url.ends_with("?currencies") {
            self.catalog.clone()
        } else {
            self.rate
                .lock()
                .expect("rate script should not be poisoned")
                .clone()
        };
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .push(request);
        Box::pin(async move { response })
    }
}

pub struct Harness {
    pub service: Arc<FakeRateService>,
    pub sink: Arc<MemorySink>,
    pub pipeline: ExchangeRatePipeline,
    pub output_dir: PathBuf,
}

pub fn harness(service: FakeRateService, output_dir: &Path) -> Harness {
    let service = Arc::new(service);
    let sink = Arc::new(MemorySink::new());
    let config = ClientConfig::default()
        .with_output_dir(output_dir)
        .with_log_file(None);
    let pipeline = ExchangeRatePipeline::from_config(&config, service.clone(), sink.clone());

    Harness {
        service,
        sink,
        pipeline,
        output_dir: output_dir.to_path_buf(),
    }
}

pub fn artifacts(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names = entries
        .map(|entry| {
            entry
                .expect("directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect::<Vec<_>>();
    names.sort();
    names
}
