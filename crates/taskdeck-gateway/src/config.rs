use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Which path the PUT of an edited task targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateStyle {
    /// PUT to the collection path (`task.json`), same as create.
    ///
    /// This is what the backend actually serves today, so it is the
    /// default.
    #[default]
    Collection,
    /// PUT to the item path (`task/{id}.json`).
    Item,
}

/// HTTP gateway settings.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the mock REST endpoint, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout. Timed-out requests fail like any other
    /// transport error.
    pub timeout: Duration,
    pub update_style: UpdateStyle,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            update_style: UpdateStyle::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_update_style(mut self, style: UpdateStyle) -> Self {
        self.update_style = style;
        self
    }
}
