// Resource URLs of the remote API

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn box_office(&self) -> String {
        format!("{}/box_office", self.base)
    }

    pub fn event_series(&self) -> String {
        format!("{}/event_series", self.base)
    }

    pub fn event_series_item(&self, series_id: &str) -> String {
        format!("{}/event_series/{}", self.base, series_id)
    }

    pub fn series_events(&self, series_id: &str) -> String {
        format!("{}/event_series/{}/events", self.base, series_id)
    }

    pub fn series_ticket_types(&self, series_id: &str) -> String {
        format!("{}/event_series/{}/ticket_types", self.base, series_id)
    }

    pub fn events(&self) -> String {
        format!("{}/events", self.base)
    }

    pub fn ticket_types(&self) -> String {
        format!("{}/ticket_types", self.base)
    }

    /// Resolves a pagination link, which the API may send as an absolute URL,
    /// a host-relative path (`/v1/events?starting_after=..`) or a base-relative path.
    pub fn resolve_link(&self, link: &str) -> String {
        let link = link.trim();
        if link.starts_with("http://") || link.starts_with("https://") {
            return link.to_string();
        }
        if link.starts_with('/') {
            return format!("{}{}", self.origin(), link);
        }
        format!("{}/{}", self.base, link)
    }

    fn origin(&self) -> &str {
        let after_scheme = self.base.find("://").map(|idx| idx + 3).unwrap_or(0);
        match self.base[after_scheme..].find('/') {
            Some(idx) => &self.base[..after_scheme + idx],
            None => &self.base,
        }
    }
}
