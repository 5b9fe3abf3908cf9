use super::{EmailService, Part};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockEmailClient {
    response: Arc<Mutex<Option<String>>>,
    error: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<Vec<Part>>>>,
}

impl MockEmailClient {
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        *self.response.lock().unwrap() = Some(response);
        self
    }

    /// Make every call fail with `Error::AiProvider(message)`.
    pub fn with_error(self, message: String) -> Self {
        *self.error.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Parts received by each call, oldest first.
    pub fn calls(&self) -> Vec<Vec<Part>> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockEmailClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailClient {
    async fn compose(&self, parts: Vec<Part>) -> Result<String> {
        self.calls.lock().unwrap().push(parts);

        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(Error::AiProvider(message));
        }

        Ok(self
            .response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "ASSUNTO PADRÃO\n\nPrezados(as) Senhores(as) Diretores(as),".to_string()))
    }
}
