use async_trait::async_trait;
use bomsmith::prelude::*;
use bomsmith::shared::error::ScanError;
use std::collections::HashMap;
use std::result::Result;
use std::sync::{Arc, Mutex};

/// Mock LicenseScanService answering from a canned table and counting calls
#[derive(Clone, Default)]
pub struct MockScanService {
    answers: Arc<Mutex<HashMap<String, Result<ScanResult, ScanError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockScanService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(self, coordinate: &str, license: &str, confirmed: bool) -> Self {
        self.answers.lock().unwrap().insert(
            coordinate.to_string(),
            Ok(ScanResult {
                license: LicenseExpression::leaf(license),
                confirmed,
            }),
        );
        self
    }

    pub fn with_unavailable(self, coordinate: &str) -> Self {
        self.answers.lock().unwrap().insert(
            coordinate.to_string(),
            Err(ScanError::Unavailable("connection refused".to_string())),
        );
        self
    }

    pub fn with_status(self, coordinate: &str, status: u16) -> Self {
        self.answers.lock().unwrap().insert(
            coordinate.to_string(),
            Err(ScanError::UnexpectedStatus(status)),
        );
        self
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, coordinate: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == coordinate)
            .count()
    }
}

#[async_trait]
impl LicenseScanService for MockScanService {
    async fn scan(
        &self,
        coordinate: &PackageCoordinate,
        _source_location: Option<&str>,
    ) -> Result<ScanResult, ScanError> {
        let key = coordinate.to_string();
        self.calls.lock().unwrap().push(key.clone());
        self.answers
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or(Ok(ScanResult {
                license: LicenseExpression::None,
                confirmed: false,
            }))
    }
}
