//! Remote asset allow-list for thumbnails and category icons.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPolicy {
    hosts: Vec<String>,
}

impl AssetPolicy {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|host| host.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Only `https` URLs on an allow-listed host may be fetched.
    pub fn is_allowed(&self, raw: &str) -> bool {
        let Ok(url) = Url::parse(raw) else {
            return false;
        };
        if url.scheme() != "https" {
            return false;
        }
        url.host_str()
            .map(|host| {
                let host = host.to_ascii_lowercase();
                self.hosts.iter().any(|allowed| *allowed == host)
            })
            .unwrap_or(false)
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }
}
