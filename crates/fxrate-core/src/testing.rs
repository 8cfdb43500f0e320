use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use crate::http_client::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Scripted transport that answers the catalog and rate calls separately and
/// records every request it sees.
#[derive(Debug)]
pub(crate) struct ScriptedHttpClient {
    catalog: Result<HttpResponse, HttpError>,
    rate: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub(crate) fn new() -> Self {
        Self {
            catalog: Err(HttpError::new("connection failed: no catalog scripted")),
            rate: Err(HttpError::new("connection failed: no rate scripted")),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_catalog(mut self, response: Result<HttpResponse, HttpError>) -> Self {
        self.catalog = response;
        self
    }

    pub(crate) fn with_rate(mut self, response: Result<HttpResponse, HttpError>) -> Self {
        self.rate = response;
        self
    }

    pub(crate) fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = if request.url.ends_with("?currencies") {
            self.catalog.clone()
        } else {
            self.rate.clone()
        };
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        Box::pin(async move { response })
    }
}
