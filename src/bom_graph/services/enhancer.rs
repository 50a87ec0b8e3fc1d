use crate::bom_graph::domain::{
    BomCondition, BuildReport, ComponentNode, PackageCoordinate, ScanResult,
};
use crate::ports::outbound::{LicenseScanService, ProgressReporter};
use crate::shared::error::ScanError;
use dashmap::DashMap;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;

/// Bound on in-flight scan requests per enhancement pass.
pub const DEFAULT_MAX_CONCURRENT_SCANS: usize = 8;

/// Enriches a built component tree with licenses from the scanning service.
///
/// The same package often appears in many places in the tree; scans are
/// keyed by coordinate and cached, so each distinct coordinate is queried
/// at most once for the lifetime of the enhancer. Failed scans are cached
/// too and not retried.
pub struct KnowledgeBaseEnhancer<'a, S: LicenseScanService> {
    scanner: &'a S,
    cache: DashMap<PackageCoordinate, Result<ScanResult, ScanError>>,
    max_concurrent: usize,
}

impl<'a, S: LicenseScanService> KnowledgeBaseEnhancer<'a, S> {
    pub fn new(scanner: &'a S) -> Self {
        Self {
            scanner,
            cache: DashMap::new(),
            max_concurrent: DEFAULT_MAX_CONCURRENT_SCANS,
        }
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Scans every unresolved coordinate in the tree and folds the results
    /// back into the nodes. Scan failures become report conditions, never
    /// errors; the tree is left as complete as the scanner allowed.
    pub async fn enhance<PR: ProgressReporter>(
        &self,
        roots: &mut [ComponentNode],
        report: &mut BuildReport,
        progress: &PR,
    ) {
        let mut pending: Vec<(PackageCoordinate, Option<String>)> = Vec::new();
        let mut seen: HashSet<PackageCoordinate> = HashSet::new();
        for root in roots.iter() {
            self.collect_pending(root, &mut pending, &mut seen);
        }

        let total = pending.len();
        let mut results = stream::iter(pending)
            .map(|(coordinate, location)| async move {
                let result = self.scanner.scan(&coordinate, location.as_deref()).await;
                (coordinate, result)
            })
            .buffer_unordered(self.max_concurrent);

        let mut scanned = 0;
        while let Some((coordinate, result)) = results.next().await {
            scanned += 1;
            progress.report_progress(scanned, total, Some(&coordinate.to_string()));
            match &result {
                Err(ScanError::Unavailable(details)) => report.record(BomCondition::ScanUnavailable {
                    coordinate: coordinate.to_string(),
                    details: details.clone(),
                }),
                Err(ScanError::UnexpectedStatus(status)) => {
                    report.record(BomCondition::UnexpectedScanResponse {
                        coordinate: coordinate.to_string(),
                        status: *status,
                    })
                }
                Ok(_) => {}
            }
            self.cache.entry(coordinate).or_insert(result);
        }

        let mut contested_reported: HashSet<PackageCoordinate> = HashSet::new();
        for root in roots.iter_mut() {
            self.apply(root, report, &mut contested_reported);
        }
    }

    /// Collects the distinct coordinates that still lack license knowledge
    /// and are not already in the cache.
    fn collect_pending(
        &self,
        node: &ComponentNode,
        pending: &mut Vec<(PackageCoordinate, Option<String>)>,
        seen: &mut HashSet<PackageCoordinate>,
    ) {
        if node.needs_license_knowledge()
            && !node.is_subproject
            && !self.cache.contains_key(&node.coordinate)
            && seen.insert(node.coordinate.clone())
        {
            pending.push((node.coordinate.clone(), node.source_location.clone()));
        }
        for child in &node.children {
            self.collect_pending(child, pending, seen);
        }
    }

    fn apply(
        &self,
        node: &mut ComponentNode,
        report: &mut BuildReport,
        contested_reported: &mut HashSet<PackageCoordinate>,
    ) {
        if node.needs_license_knowledge() && !node.is_subproject {
            if let Some(cached) = self.cache.get(&node.coordinate) {
                if let Ok(scan) = cached.value() {
                    self.apply_scan(node, scan, report, contested_reported);
                }
            }
        }
        for child in &mut node.children {
            self.apply(child, report, contested_reported);
        }
    }

    fn apply_scan(
        &self,
        node: &mut ComponentNode,
        scan: &ScanResult,
        report: &mut BuildReport,
        contested_reported: &mut HashSet<PackageCoordinate>,
    ) {
        if scan.license.is_none() {
            return;
        }
        if node.license.is_none() {
            node.license = scan.license.clone();
            node.license_confirmed = scan.confirmed;
        } else if node.license != scan.license {
            node.license_contested = true;
            node.detected_license = Some(scan.license.clone());
            if contested_reported.insert(node.coordinate.clone()) {
                report.record(BomCondition::ContestedLicense {
                    coordinate: node.coordinate.to_string(),
                    declared: node.license.to_string(),
                    detected: scan.license.to_string(),
                });
            }
        } else {
            // Scanner agrees with the declaration.
            node.license_confirmed = scan.confirmed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_graph::domain::LicenseExpression;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    struct CountingScanner {
        answers: HashMap<String, Result<ScanResult, ScanError>>,
        calls: Mutex<Vec<String>>,
    }

    impl CountingScanner {
        fn new(answers: HashMap<String, Result<ScanResult, ScanError>>) -> Self {
            Self {
                answers,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self, coordinate: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.as_str() == coordinate)
                .count()
        }
    }

    #[async_trait]
    impl LicenseScanService for CountingScanner {
        async fn scan(
            &self,
            coordinate: &PackageCoordinate,
            _source_location: Option<&str>,
        ) -> Result<ScanResult, ScanError> {
            let key = coordinate.to_string();
            self.calls.lock().unwrap().push(key.clone());
            self.answers
                .get(&key)
                .cloned()
                .unwrap_or(Err(ScanError::UnexpectedStatus(404)))
        }
    }

    fn node(name: &str, license: LicenseExpression, children: Vec<ComponentNode>) -> ComponentNode {
        ComponentNode {
            component_id: Uuid::new_v4(),
            version_id: Uuid::new_v4(),
            name: name.to_string(),
            version: "1.0".to_string(),
            coordinate: PackageCoordinate::new("npm", "", name, "1.0"),
            license,
            detected_license: None,
            license_confirmed: false,
            license_contested: false,
            source_location: None,
            usages: vec![],
            hierarchical_id: 0,
            is_subproject: false,
            children,
        }
    }

    fn confirmed(license: &str) -> Result<ScanResult, ScanError> {
        Ok(ScanResult {
            license: LicenseExpression::leaf(license),
            confirmed: true,
        })
    }

    #[tokio::test]
    async fn test_adopts_scanned_license_when_nothing_declared() {
        let scanner = CountingScanner::new(HashMap::from([(
            "pkg:npm/left-pad@1.0".to_string(),
            confirmed("WTFPL"),
        )]));
        let enhancer = KnowledgeBaseEnhancer::new(&scanner);

        let mut roots = vec![node("left-pad", LicenseExpression::None, vec![])];
        let mut report = BuildReport::new();
        enhancer.enhance(&mut roots, &mut report, &SilentReporter).await;

        assert_eq!(roots[0].license.to_string(), "WTFPL");
        assert!(roots[0].license_confirmed);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn test_duplicate_coordinates_are_scanned_once() {
        let scanner = CountingScanner::new(HashMap::from([(
            "pkg:npm/lodash@1.0".to_string(),
            confirmed("MIT"),
        )]));
        let enhancer = KnowledgeBaseEnhancer::new(&scanner);

        let duplicate = node("lodash", LicenseExpression::None, vec![]);
        let mut roots = vec![
            node("a", LicenseExpression::None, vec![duplicate.clone()]),
            duplicate,
        ];
        let mut report = BuildReport::new();
        enhancer.enhance(&mut roots, &mut report, &SilentReporter).await;

        assert_eq!(scanner.call_count("pkg:npm/lodash@1.0"), 1);
        assert_eq!(roots[0].children[0].license.to_string(), "MIT");
        assert_eq!(roots[1].license.to_string(), "MIT");
    }

    #[tokio::test]
    async fn test_cache_survives_across_enhance_calls() {
        let scanner = CountingScanner::new(HashMap::from([(
            "pkg:npm/lodash@1.0".to_string(),
            confirmed("MIT"),
        )]));
        let enhancer = KnowledgeBaseEnhancer::new(&scanner);
        let mut report = BuildReport::new();

        let mut first = vec![node("lodash", LicenseExpression::None, vec![])];
        enhancer.enhance(&mut first, &mut report, &SilentReporter).await;
        let mut second = vec![node("lodash", LicenseExpression::None, vec![])];
        enhancer.enhance(&mut second, &mut report, &SilentReporter).await;

        assert_eq!(scanner.call_count("pkg:npm/lodash@1.0"), 1);
        assert_eq!(second[0].license.to_string(), "MIT");
    }

    #[tokio::test]
    async fn test_disagreement_is_contested_and_keeps_declared() {
        let scanner = CountingScanner::new(HashMap::from([(
            "pkg:npm/chalk@1.0".to_string(),
            confirmed("Apache-2.0"),
        )]));
        let enhancer = KnowledgeBaseEnhancer::new(&scanner);

        let mut roots = vec![node("chalk", LicenseExpression::leaf("MIT"), vec![])];
        let mut report = BuildReport::new();
        enhancer.enhance(&mut roots, &mut report, &SilentReporter).await;

        assert_eq!(roots[0].license.to_string(), "MIT");
        assert_eq!(
            roots[0].detected_license.as_ref().map(|l| l.to_string()),
            Some("Apache-2.0".to_string())
        );
        assert!(roots[0].license_contested);
        assert!(!roots[0].license_confirmed);
        assert!(matches!(
            report.conditions()[0],
            BomCondition::ContestedLicense { .. }
        ));
    }

    #[tokio::test]
    async fn test_agreement_confirms_declared_license() {
        let scanner = CountingScanner::new(HashMap::from([(
            "pkg:npm/chalk@1.0".to_string(),
            confirmed("MIT"),
        )]));
        let enhancer = KnowledgeBaseEnhancer::new(&scanner);

        let mut roots = vec![node("chalk", LicenseExpression::leaf("MIT"), vec![])];
        let mut report = BuildReport::new();
        enhancer.enhance(&mut roots, &mut report, &SilentReporter).await;

        assert!(roots[0].license_confirmed);
        assert!(!roots[0].license_contested);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn test_scan_failures_become_report_conditions() {
        let scanner = CountingScanner::new(HashMap::from([
            (
                "pkg:npm/a@1.0".to_string(),
                Err(ScanError::Unavailable("connection refused".to_string())),
            ),
            (
                "pkg:npm/b@1.0".to_string(),
                Err(ScanError::UnexpectedStatus(500)),
            ),
        ]));
        let enhancer = KnowledgeBaseEnhancer::new(&scanner);

        let mut roots = vec![
            node("a", LicenseExpression::None, vec![]),
            node("b", LicenseExpression::None, vec![]),
        ];
        let mut report = BuildReport::new();
        enhancer.enhance(&mut roots, &mut report, &SilentReporter).await;

        assert_eq!(report.len(), 2);
        assert!(roots[0].license.is_none());
        assert!(roots[1].license.is_none());
    }

    #[tokio::test]
    async fn test_failed_scans_are_not_retried() {
        let scanner = CountingScanner::new(HashMap::from([(
            "pkg:npm/a@1.0".to_string(),
            Err(ScanError::UnexpectedStatus(500)),
        )]));
        let enhancer = KnowledgeBaseEnhancer::new(&scanner);
        let mut report = BuildReport::new();

        let mut first = vec![node("a", LicenseExpression::None, vec![])];
        enhancer.enhance(&mut first, &mut report, &SilentReporter).await;
        let mut second = vec![node("a", LicenseExpression::None, vec![])];
        enhancer.enhance(&mut second, &mut report, &SilentReporter).await;

        assert_eq!(scanner.call_count("pkg:npm/a@1.0"), 1);
        // The failure is reported once, when it happened.
        assert_eq!(report.len(), 1);
    }

    #[tokio::test]
    async fn test_subprojects_are_not_scanned() {
        let scanner = CountingScanner::new(HashMap::new());
        let enhancer = KnowledgeBaseEnhancer::new(&scanner);

        let mut inner = node("inner", LicenseExpression::None, vec![]);
        inner.is_subproject = true;
        let mut roots = vec![inner];
        let mut report = BuildReport::new();
        enhancer.enhance(&mut roots, &mut report, &SilentReporter).await;

        assert_eq!(scanner.calls.lock().unwrap().len(), 0);
        assert!(report.is_clean());
    }
}
