use crate::application::dto::{BomMetadata, BomRequest, BomResponse};
use crate::bom_graph::domain::node_count;
use crate::bom_graph::services::{
    ComponentTreeBuilder, CoordinateResolver, KnowledgeBaseEnhancer, LicenseExpressionBuilder,
};
use crate::ports::outbound::{
    ComponentSource, LicenseIdentifierParser, LicenseScanService, ProgressReporter,
};
use crate::shared::error::BomError;
use crate::shared::Result;

/// BuildBomUseCase - Core use case for BOM graph acquisition
///
/// This use case orchestrates the acquisition workflow using generic
/// dependency injection for all infrastructure dependencies: fetch the
/// root components, rebuild the tree, then enrich unresolved licenses
/// through the scanning service.
///
/// # Type Parameters
/// * `CS` - ComponentSource implementation
/// * `SS` - LicenseScanService implementation
/// * `LP` - LicenseIdentifierParser implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildBomUseCase<CS, SS, LP, PR> {
    source: CS,
    scanner: Option<SS>,
    parser: LP,
    progress_reporter: PR,
}

impl<CS, SS, LP, PR> BuildBomUseCase<CS, SS, LP, PR>
where
    CS: ComponentSource,
    SS: LicenseScanService,
    LP: LicenseIdentifierParser,
    PR: ProgressReporter,
{
    /// Creates a new BuildBomUseCase with injected dependencies
    ///
    /// A `None` scanner disables the enrichment phase entirely.
    pub fn new(source: CS, scanner: Option<SS>, parser: LP, progress_reporter: PR) -> Self {
        Self {
            source,
            scanner,
            parser,
            progress_reporter,
        }
    }

    /// Executes the BOM acquisition use case
    ///
    /// # Errors
    /// Fails only when the root component set cannot be fetched; every
    /// condition below the roots lands in the response's report instead.
    pub async fn execute(&self, request: BomRequest) -> Result<BomResponse> {
        // Step 1: Fetch the root component set
        self.progress_reporter.report("🔍 Fetching root components...");

        let roots = self.source.fetch_roots().await.map_err(|err| {
            BomError::RootFetchFailed {
                details: err.to_string(),
            }
        })?;

        self.progress_reporter
            .report(&format!("✅ Retrieved {} root component(s)", roots.len()));

        // Step 2: Rebuild the hierarchical component tree
        self.progress_reporter
            .report("🌳 Rebuilding component tree...");

        let resolver = CoordinateResolver::new();
        let licenses = LicenseExpressionBuilder::new(&self.parser);
        let builder = ComponentTreeBuilder::new(&self.source, &resolver, &licenses)
            .with_page_limit(request.page_limit);
        let (mut components, mut report) = builder.build(roots).await;

        self.progress_reporter.report(&format!(
            "✅ Rebuilt tree with {} component(s)",
            node_count(&components)
        ));

        // Step 3: Enrich unresolved licenses through the scanner
        if !request.skip_scan {
            if let Some(scanner) = &self.scanner {
                self.progress_reporter
                    .report("🔬 Consulting license scanner...");

                let enhancer = KnowledgeBaseEnhancer::new(scanner)
                    .with_max_concurrent(request.max_concurrent_scans);
                enhancer
                    .enhance(&mut components, &mut report, &self.progress_reporter)
                    .await;
            }
        }

        // Step 4: Surface every recorded condition
        for condition in report.conditions() {
            self.progress_reporter
                .report_error(&format!("⚠️  {}", condition));
        }

        self.progress_reporter.report_completion(&format!(
            "🎉 BOM graph complete: {} component(s), {} condition(s)",
            node_count(&components),
            report.len()
        ));

        Ok(BomResponse::new(
            request.product,
            components,
            report,
            BomMetadata::generate(),
        ))
    }
}
