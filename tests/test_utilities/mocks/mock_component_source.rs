use async_trait::async_trait;
use bomsmith::prelude::*;
use bomsmith::shared::error::SourceError;
use std::collections::HashMap;
use std::result::Result;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Mock ComponentSource serving a canned component hierarchy
#[derive(Clone)]
pub struct MockComponentSource {
    roots: Arc<Result<Vec<ComponentSummary>, SourceError>>,
    children: Arc<HashMap<i64, Vec<ComponentSummary>>>,
    failing: Arc<Vec<i64>>,
    child_fetches: Arc<Mutex<Vec<i64>>>,
}

impl MockComponentSource {
    pub fn new(roots: Vec<ComponentSummary>) -> Self {
        Self {
            roots: Arc::new(Ok(roots)),
            children: Arc::new(HashMap::new()),
            failing: Arc::new(Vec::new()),
            child_fetches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_root_failure(details: &str) -> Self {
        Self {
            roots: Arc::new(Err(SourceError::Unavailable(details.to_string()))),
            children: Arc::new(HashMap::new()),
            failing: Arc::new(Vec::new()),
            child_fetches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_children(mut self, hierarchical_id: i64, children: Vec<ComponentSummary>) -> Self {
        let mut map = (*self.children).clone();
        map.insert(hierarchical_id, children);
        self.children = Arc::new(map);
        self
    }

    pub fn with_failing_children(mut self, hierarchical_id: i64) -> Self {
        let mut failing = (*self.failing).clone();
        failing.push(hierarchical_id);
        self.failing = Arc::new(failing);
        self
    }

    /// Number of child fetches issued so far
    pub fn child_fetch_count(&self) -> usize {
        self.child_fetches.lock().unwrap().len()
    }
}

#[async_trait]
impl ComponentSource for MockComponentSource {
    async fn fetch_roots(&self) -> Result<Vec<ComponentSummary>, SourceError> {
        (*self.roots).clone()
    }

    async fn fetch_children(
        &self,
        _component_id: Uuid,
        _version_id: Uuid,
        hierarchical_id: i64,
    ) -> Result<Vec<ComponentSummary>, SourceError> {
        self.child_fetches.lock().unwrap().push(hierarchical_id);
        if self.failing.contains(&hierarchical_id) {
            return Err(SourceError::Unavailable("connection reset".to_string()));
        }
        Ok(self
            .children
            .get(&hierarchical_id)
            .cloned()
            .unwrap_or_default())
    }
}
