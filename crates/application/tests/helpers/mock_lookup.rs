#![allow(dead_code)]

use async_trait::async_trait;
use caa_guard_application::ports::CaaLookup;
use caa_guard_domain::{CaaRecord, DomainError};
use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted lookup port: every name the walker may query must be given a
/// response or an error up front; anything unscripted fails the test with a
/// recognizable error. Records every query it receives, in order.
pub struct MockCaaLookup {
    responses: Mutex<HashMap<String, Vec<CaaRecord>>>,
    errors: Mutex<HashMap<String, DomainError>>,
    queried: Mutex<Vec<String>>,
}

impl MockCaaLookup {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            errors: Mutex::new(HashMap::new()),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn set_records(&self, name: &str, records: Vec<CaaRecord>) {
        self.responses
            .lock()
            .unwrap()
            .insert(name.to_string(), records);
    }

    pub fn set_empty(&self, name: &str) {
        self.set_records(name, Vec::new());
    }

    pub fn set_error(&self, name: &str, error: DomainError) {
        self.errors.lock().unwrap().insert(name.to_string(), error);
    }

    pub fn queries(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.queried.lock().unwrap().len()
    }
}

impl Default for MockCaaLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaaLookup for MockCaaLookup {
    async fn lookup_caa(&self, name: &str) -> Result<Vec<CaaRecord>, DomainError> {
        self.queried.lock().unwrap().push(name.to_string());

        if let Some(error) = self.errors.lock().unwrap().get(name).cloned() {
            return Err(error);
        }

        self.responses
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| {
                DomainError::InvalidDnsResponse(format!("No mock response for {}", name))
            })
    }
}
