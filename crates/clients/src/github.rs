//! GitHub REST client used to publish designs.
//!
//! Files are created through the contents API under the authenticated
//! user's repository. No `sha` is ever sent, so GitHub refuses to replace an
//! existing file (422) instead of updating it.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use mentor_core::{FileUpload, HostingService, ServiceError, ServiceKind};

use crate::http::{agent, base_url, classify, parse_error, urlencoded};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Environment variable consulted for a personal access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

const SERVICE: ServiceKind = ServiceKind::Hosting;
const USER_AGENT: &str = "design-mentor";
const API_VERSION: &str = "2022-11-28";

#[derive(Deserialize)]
struct AuthenticatedUser {
    login: String,
}

#[derive(Serialize)]
struct CreateFileRequest<'a> {
    message: &'a str,
    content: String,
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = base_url(url);
        self
    }

    /// Login of the user that owns `token`.
    ///
    /// GET `/user`
    pub fn login(&self, token: &str) -> Result<String, ServiceError> {
        let url = format!("{}/user", self.base_url);
        let response = agent()
            .get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| classify(e, SERVICE, "authenticated user"))?;

        let user: AuthenticatedUser = response
            .into_body()
            .read_json()
            .map_err(|e| parse_error(SERVICE, e))?;
        Ok(user.login)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HostingService for GitHubClient {
    /// PUT `/repos/{owner}/{repo}/contents/{path}`
    fn create_file(&self, credential: &str, upload: &FileUpload<'_>) -> Result<(), ServiceError> {
        if credential.trim().is_empty() {
            return Err(ServiceError::MissingCredential {
                service: SERVICE,
                hint: format!("pass --token or set {}", TOKEN_ENV),
            });
        }

        let owner = self.login(credential)?;
        let path = upload
            .path
            .split('/')
            .map(urlencoded)
            .collect::<Vec<_>>()
            .join("/");
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url,
            urlencoded(&owner),
            urlencoded(upload.repository),
            path
        );
        tracing::debug!(url = %url, "creating file");

        let body = CreateFileRequest {
            message: upload.message,
            content: BASE64.encode(upload.content),
        };

        agent()
            .put(&url)
            .header("Authorization", &format!("Bearer {}", credential))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT)
            .send_json(&body)
            .map_err(|e| match e {
                ureq::Error::StatusCode(422) => ServiceError::Rejected {
                    service: SERVICE,
                    what: format!("'{}' already exists in {}/{}", upload.path, owner, upload.repository),
                },
                other => classify(
                    other,
                    SERVICE,
                    &format!("repository '{}/{}'", owner, upload.repository),
                ),
            })?;

        tracing::info!(owner = %owner, repository = upload.repository, path = upload.path, "file created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_rejected_before_any_request() {
        let client = GitHubClient::new().with_base_url("http://127.0.0.1:9");
        let err = client
            .create_file(
                "",
                &FileUpload {
                    repository: "r",
                    path: "design_r.png",
                    message: "Upload design",
                    content: b"png",
                },
            )
            .unwrap_err();
        assert!(err.to_string().contains(TOKEN_ENV));
    }

    #[test]
    fn create_body_is_base64() {
        let body = CreateFileRequest {
            message: "Upload design",
            content: BASE64.encode(b"\x89PNG"),
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["content"], "iVBORw==");
        assert_eq!(v["message"], "Upload design");
        assert!(v.get("sha").is_none());
    }
}
