use std::time::Duration;

use url::Url;

pub const DEFAULT_ACCOUNT: &str = "Nico3246";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_WEB_BASE: &str = "https://github.com";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Values the component is parameterized with at mount time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSettings {
    /// GitHub login whose profile and repositories are shown.
    pub account: String,
    pub api_base: String,
    pub web_base: String,
    /// Upper bound for each remote read.
    pub fetch_timeout: Duration,
    pub user_agent: String,
    /// Shown in the hero until (or unless) the profile carries a name.
    pub fallback_name: String,
    pub fallback_bio: String,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            web_base: DEFAULT_WEB_BASE.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: format!("portfolio-viewer/{}", env!("CARGO_PKG_VERSION")),
            fallback_name: "Nicolás Sánchez".to_string(),
            fallback_bio: "Desarrollador de Software".to_string(),
        }
    }
}

impl PortfolioSettings {
    pub fn profile_url(&self) -> String {
        format!("{}/{}", self.web_base.trim_end_matches('/'), self.account)
    }

    /// `{api_base}/users/{account}`
    pub fn profile_endpoint(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.api_base)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["users", self.account.as_str()]);
        Ok(url)
    }

    /// `{api_base}/users/{account}/repos?sort=updated&per_page={limit}`
    pub fn repositories_endpoint(&self, limit: usize) -> Result<Url, url::ParseError> {
        let mut url = self.profile_endpoint()?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push("repos");
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &limit.to_string());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::PortfolioSettings;

    fn settings_for(api_base: &str) -> PortfolioSettings {
        PortfolioSettings {
            account: "octo".to_string(),
            api_base: api_base.to_string(),
            ..PortfolioSettings::default()
        }
    }

    #[test]
    fn builds_profile_and_repository_endpoints() {
        let settings = settings_for("https://api.github.com");
        assert_eq!(
            settings.profile_endpoint().expect("profile url").as_str(),
            "https://api.github.com/users/octo"
        );
        assert_eq!(
            settings
                .repositories_endpoint(6)
                .expect("repos url")
                .as_str(),
            "https://api.github.com/users/octo/repos?sort=updated&per_page=6"
        );
    }

    #[test]
    fn keeps_api_base_path_prefix_and_trailing_slash() {
        let settings = settings_for("http://127.0.0.1:9000/github/");
        assert_eq!(
            settings.profile_endpoint().expect("profile url").as_str(),
            "http://127.0.0.1:9000/github/users/octo"
        );
    }

    #[test]
    fn rejects_relative_api_base() {
        assert!(settings_for("api.github.com").profile_endpoint().is_err());
    }

    #[test]
    fn profile_url_joins_web_base() {
        let settings = PortfolioSettings {
            account: "octo".to_string(),
            web_base: "https://github.com/".to_string(),
            ..PortfolioSettings::default()
        };
        assert_eq!(settings.profile_url(), "https://github.com/octo");
    }
}
