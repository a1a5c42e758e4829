use {
    crate::domain::{error::CheckoutError, ports::SdkLoader},
    std::{
        future::Future,
        pin::Pin,
        sync::{Arc, Mutex},
    },
    tokio::sync::OnceCell,
};

/// Page-lifetime state shared by everything on the page: which scripts have
/// been attached and whether the checkout SDK's entry point exists.
///
/// The SDK cell lives here rather than in a loader, so any number of loaders
/// bound to one page still fetch the script at most once.
#[derive(Debug, Default)]
pub struct PageState {
    scripts: Mutex<Vec<String>>,
    sdk: OnceCell<()>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page whose markup already ships the SDK.
    pub fn with_sdk_preloaded() -> Self {
        Self {
            scripts: Mutex::default(),
            sdk: OnceCell::new_with(Some(())),
        }
    }

    pub fn sdk_present(&self) -> bool {
        self.sdk.initialized()
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn attach_sdk(&self, url: &str) {
        let mut scripts = self
            .scripts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if scripts.iter().any(|s| s == url) {
            tracing::debug!(url, "sdk script already attached");
            return;
        }
        scripts.push(url.to_string());
    }
}

/// Fetches the checkout script over HTTP. At most one fetch is in flight per
/// page; concurrent callers, through this loader or another one on the same
/// page, wait on it.
pub struct ScriptLoader {
    http: reqwest::Client,
    url: String,
    page: Arc<PageState>,
}

impl ScriptLoader {
    pub fn new(http: reqwest::Client, url: impl Into<String>, page: Arc<PageState>) -> Self {
        Self {
            http,
            url: url.into(),
            page,
        }
    }

    async fn ensure_loaded_inner(&self) -> Result<(), CheckoutError> {
        if self.page.sdk_present() {
            return Ok(());
        }

        self.page
            .sdk
            .get_or_try_init(|| async {
                tracing::info!(url = %self.url, "loading checkout sdk");
                let resp = self
                    .http
                    .get(&self.url)
                    .send()
                    .await
                    .map_err(|e| CheckoutError::Load(format!("fetch {}: {e}", self.url)))?;

                let status = resp.status();
                if !status.is_success() {
                    return Err(CheckoutError::Load(format!(
                        "{} returned {status}",
                        self.url
                    )));
                }
                resp.bytes()
                    .await
                    .map_err(|e| CheckoutError::Load(format!("read {}: {e}", self.url)))?;

                self.page.attach_sdk(&self.url);
                tracing::info!(url = %self.url, "checkout sdk ready");
                Ok(())
            })
            .await
            .map(|_| ())
    }
}

impl SdkLoader for ScriptLoader {
    fn ensure_loaded(&self) -> Pin<Box<dyn Future<Output = Result<(), CheckoutError>> + Send + '_>> {
        Box::pin(self.ensure_loaded_inner())
    }
}
