//! In-memory HttpTransport for adapter tests.

use crate::domain::error::TransportError;
use crate::domain::ports::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned outcomes in order and records every requested URL.
pub(crate) struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub(crate) fn new(outcomes: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn respond(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(status, body))])
    }

    pub(crate) fn fail(error: TransportError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request to {}", url))
    }
}
