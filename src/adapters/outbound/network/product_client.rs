use crate::bom_graph::domain::{
    ComponentSummary, LicenseCombinator, LicenseDescription, OriginDescriptor, ProductDescriptor,
};
use crate::ports::outbound::ComponentSource;
use crate::shared::error::{BomError, SourceError};
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use uuid::Uuid;

/// Page bound for the root component listing.
const ROOT_PAGE_LIMIT: usize = 9999;
/// Page bound for one children listing.
const CHILD_PAGE_LIMIT: usize = 999;

#[derive(Debug, Deserialize)]
struct ItemsJson<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize, Default)]
struct MetaJson {
    #[serde(default)]
    href: String,
    #[serde(default)]
    links: Vec<LinkJson>,
}

#[derive(Debug, Deserialize)]
struct LinkJson {
    rel: String,
    href: String,
}

#[derive(Debug, Deserialize)]
struct ProjectJson {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "_meta", default)]
    meta: MetaJson,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectVersionJson {
    version_name: String,
    #[serde(default)]
    license: Option<LicenseJson>,
    #[serde(rename = "_meta", default)]
    meta: MetaJson,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentVersionJson {
    component_name: String,
    #[serde(default)]
    component_version_name: String,
    #[serde(default)]
    component_type: String,
    #[serde(default)]
    component_version: Option<String>,
    #[serde(default)]
    usages: Vec<String>,
    #[serde(default)]
    origins: Vec<OriginJson>,
    #[serde(default)]
    licenses: Vec<LicenseJson>,
    #[serde(default)]
    source_location: Option<String>,
    #[serde(rename = "_meta", default)]
    meta: MetaJson,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OriginJson {
    #[serde(default)]
    external_namespace: String,
    #[serde(default)]
    external_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LicenseJson {
    #[serde(default)]
    license_display: String,
    #[serde(default)]
    spdx_id: Option<String>,
    #[serde(default)]
    license_type: Option<String>,
    #[serde(default)]
    licenses: Vec<LicenseJson>,
}

impl LicenseJson {
    fn into_description(self) -> LicenseDescription {
        let combinator = match self.license_type.as_deref() {
            Some("DISJUNCTIVE") => LicenseCombinator::Disjunctive,
            _ => LicenseCombinator::Conjunctive,
        };
        if self.licenses.is_empty() {
            LicenseDescription::single(self.license_display, self.spdx_id)
        } else {
            LicenseDescription::composite(
                combinator,
                self.licenses
                    .into_iter()
                    .map(LicenseJson::into_description)
                    .collect(),
            )
        }
    }
}

impl ComponentVersionJson {
    /// Converts one listing entry into a summary. Entries without a
    /// component version URI carry no usable identity and are dropped.
    fn into_summary(self) -> Option<ComponentSummary> {
        let version_uri = self.component_version.as_deref()?;
        let version_id = uuid_from_uri(version_uri, 0)?;
        let component_id = uuid_from_uri(version_uri, 2)?;

        let hierarchical_id = self
            .meta
            .links
            .iter()
            .find(|link| link.rel == "children")
            .and_then(|link| long_from_uri(&link.href, 1))
            .unwrap_or(0);

        Some(ComponentSummary {
            component_id,
            version_id,
            name: self.component_name,
            version: self.component_version_name,
            component_type: self.component_type,
            usages: self.usages,
            origins: self
                .origins
                .into_iter()
                .map(|origin| OriginDescriptor::new(origin.external_namespace, origin.external_id))
                .collect(),
            declared_license: self
                .licenses
                .into_iter()
                .next()
                .map(LicenseJson::into_description),
            source_location: self.source_location,
            hierarchical_id,
        })
    }
}

/// Extracts a UUID path segment counting from the end of the URI,
/// where offset 0 is the last segment.
fn uuid_from_uri(uri: &str, offset_from_end: usize) -> Option<Uuid> {
    segment_from_end(uri, offset_from_end).and_then(|s| Uuid::parse_str(s).ok())
}

/// Extracts a numeric path segment counting from the end of the URI.
fn long_from_uri(uri: &str, offset_from_end: usize) -> Option<i64> {
    segment_from_end(uri, offset_from_end).and_then(|s| s.parse().ok())
}

fn segment_from_end(uri: &str, offset_from_end: usize) -> Option<&str> {
    let path = uri.split(['?', '#']).next().unwrap_or(uri);
    let segments: Vec<&str> = path.trim_end_matches('/').split('/').collect();
    segments
        .len()
        .checked_sub(1 + offset_from_end)
        .and_then(|index| segments.get(index).copied())
}

/// ProductTrackerClient adapter for the product-tracking service REST API
///
/// This adapter implements the ComponentSource port. Connection setup
/// resolves the requested project and version by name; after that the
/// client serves the hierarchical component listings for that version.
///
/// # Async Support
/// Uses an async reqwest client for non-blocking HTTP requests.
pub struct ProductTrackerClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    project_id: Uuid,
    version_id: Uuid,
    max_retries: u32,
}

impl ProductTrackerClient {
    /// Connects to the service and resolves the selected product version.
    ///
    /// # Errors
    /// * [`BomError::ProjectNotFound`] when no project matches the name exactly
    /// * [`BomError::VersionNotFound`] when the project has no such version
    pub async fn connect(
        base_url: &str,
        token: Option<String>,
        project_name: &str,
        version_name: &str,
    ) -> Result<(Self, ProductDescriptor)> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        let mut this = Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            project_id: Uuid::nil(),
            version_id: Uuid::nil(),
            max_retries: 3,
        };

        let project = this.find_project(project_name).await?;
        let project_id = uuid_from_uri(&project.meta.href, 0).ok_or_else(|| {
            BomError::ProjectNotFound {
                name: project_name.to_string(),
            }
        })?;
        this.project_id = project_id;

        let version = this.find_version(project_name, version_name).await?;
        let version_id = uuid_from_uri(&version.meta.href, 0).ok_or_else(|| {
            BomError::VersionNotFound {
                project: project_name.to_string(),
                version: version_name.to_string(),
            }
        })?;
        this.version_id = version_id;

        let descriptor = ProductDescriptor::ProjectVersion {
            id: version_id,
            name: format!("{} {}", project.name, version.version_name),
            description: project.description,
            declared_license: version.license.map(LicenseJson::into_description),
        };

        Ok((this, descriptor))
    }

    async fn find_project(&self, project_name: &str) -> Result<ProjectJson> {
        let url = format!(
            "{}/api/projects?q=name:{}",
            self.base_url,
            urlencoding::encode(project_name)
        );
        let listing: ItemsJson<ProjectJson> = self.get_json(&url).await?;

        // The query matches by prefix; selection requires an exact name.
        listing
            .items
            .into_iter()
            .find(|project| project.name == project_name)
            .ok_or_else(|| {
                BomError::ProjectNotFound {
                    name: project_name.to_string(),
                }
                .into()
            })
    }

    async fn find_version(
        &self,
        project_name: &str,
        version_name: &str,
    ) -> Result<ProjectVersionJson> {
        let url = format!(
            "{}/api/projects/{}/versions?limit={}",
            self.base_url, self.project_id, ROOT_PAGE_LIMIT
        );
        let listing: ItemsJson<ProjectVersionJson> = self.get_json(&url).await?;

        listing
            .items
            .into_iter()
            .find(|version| version.version_name == version_name)
            .ok_or_else(|| {
                BomError::VersionNotFound {
                    project: project_name.to_string(),
                    version: version_name.to_string(),
                }
                .into()
            })
    }

    /// Fetches a JSON document with retry logic. Only transport failures
    /// are retried; an unexpected HTTP status returns immediately.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, SourceError> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.get_json_once(url).await {
                Ok(result) => return Ok(result),
                Err(err @ SourceError::UnexpectedStatus(_)) => return Err(err),
                Err(err) => {
                    last_error = Some(err);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| SourceError::Unavailable("no attempts made".into())))
    }

    async fn get_json_once<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> std::result::Result<T, SourceError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| SourceError::Unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|err| SourceError::Unavailable(err.to_string()))
    }
}

#[async_trait]
impl ComponentSource for ProductTrackerClient {
    async fn fetch_roots(&self) -> std::result::Result<Vec<ComponentSummary>, SourceError> {
        let url = format!(
            "{}/api/projects/{}/versions/{}/hierarchical-components?limit={}",
            self.base_url, self.project_id, self.version_id, ROOT_PAGE_LIMIT
        );
        let listing: ItemsJson<ComponentVersionJson> = self.get_json(&url).await?;

        Ok(listing
            .items
            .into_iter()
            .filter_map(ComponentVersionJson::into_summary)
            .collect())
    }

    async fn fetch_children(
        &self,
        component_id: Uuid,
        version_id: Uuid,
        hierarchical_id: i64,
    ) -> std::result::Result<Vec<ComponentSummary>, SourceError> {
        let url = format!(
            "{}/api/components/{}/versions/{}/hierarchical-components/{}/children?limit={}",
            self.base_url, component_id, version_id, hierarchical_id, CHILD_PAGE_LIMIT
        );
        let listing: ItemsJson<ComponentVersionJson> = self.get_json(&url).await?;

        Ok(listing
            .items
            .into_iter()
            .filter_map(ComponentVersionJson::into_summary)
            .collect())
    }
}
