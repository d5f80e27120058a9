use deb_deps::prelude::*;
use deb_deps::shared::error::DepsError;
use std::sync::{Arc, Mutex};

/// Mock IndexFetcher serving fixed bytes and recording requested locators
#[derive(Clone)]
pub struct MockIndexFetcher {
    pub content: Vec<u8>,
    pub should_fail: bool,
    pub requested: Arc<Mutex<Vec<SourceLocator>>>,
}

impl MockIndexFetcher {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: Vec::new(),
            should_fail: true,
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

impl IndexFetcher for MockIndexFetcher {
    fn fetch(&self, locator: &SourceLocator) -> Result<Vec<u8>> {
        self.requested.lock().unwrap().push(locator.clone());
        if self.should_fail {
            return Err(DepsError::SourceUnavailable {
                locator: locator.to_string(),
                details: "Mock fetch failure".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }
}
