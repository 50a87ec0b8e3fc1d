use crate::bom_graph::domain::{LicenseExpression, PackageCoordinate, ScanResult};
use crate::ports::outbound::{LicenseIdentifierParser, LicenseScanService};
use crate::shared::error::ScanError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ScanRequestJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ScanResultJson {
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    confirmed: bool,
}

/// LicenseScannerClient adapter for the license-scanning service REST API
///
/// This adapter implements the LicenseScanService port. One request asks
/// the scanner about one package, addressed by its coordinate; the optional
/// source location tells the scanner where to fetch the code from.
pub struct LicenseScannerClient<P: LicenseIdentifierParser> {
    client: reqwest::Client,
    base_url: String,
    parser: P,
}

impl<P: LicenseIdentifierParser> LicenseScannerClient<P> {
    pub fn new(base_url: &str, parser: P) -> Result<Self> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            parser,
        })
    }

    fn scan_url(&self, coordinate: &PackageCoordinate) -> String {
        format!(
            "{}/packages/{}/{}/{}",
            self.base_url,
            urlencoding::encode(coordinate.namespace()),
            urlencoding::encode(coordinate.name()),
            urlencoding::encode(coordinate.version())
        )
    }
}

#[async_trait]
impl<P: LicenseIdentifierParser> LicenseScanService for LicenseScannerClient<P> {
    async fn scan(
        &self,
        coordinate: &PackageCoordinate,
        source_location: Option<&str>,
    ) -> std::result::Result<ScanResult, ScanError> {
        let body = ScanRequestJson {
            location: source_location,
        };

        let response = self
            .client
            .post(self.scan_url(coordinate))
            .json(&body)
            .send()
            .await
            .map_err(|err| ScanError::Unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::UnexpectedStatus(status.as_u16()));
        }

        let result: ScanResultJson = response
            .json()
            .await
            .map_err(|err| ScanError::Unavailable(err.to_string()))?;

        let license = match result.license.as_deref() {
            Some(identifier) if !identifier.trim().is_empty() => self.parser.parse(identifier),
            _ => LicenseExpression::None,
        };

        Ok(ScanResult {
            license,
            confirmed: result.confirmed,
        })
    }
}
