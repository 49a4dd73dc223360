//! Asynchronous image loading
//!
//! [`ImageLoader`] starts fire-and-forget fetches on the tokio runtime and
//! publishes their outcome through an observable [`ImageLoadState`]. The
//! [`ImageRequest`] it returns owns the fetch: dropping it (for example when
//! the screen showing the picture is torn down) aborts the task.
//!
//! Failed loads are logged and surfaced as [`ImageLoadState::Failed`]; they
//! are never retried automatically and never cached.

use app_state::StateHandle;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::media::{decode_bitmap, ImageBitmap, ImageLoadState, MediaError, Result, MAX_IMAGE_SIZE};

/// Source of encoded image bytes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch the encoded bytes behind `url`
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP fetcher configuration
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Maximum accepted body size
    pub max_bytes: usize,
    /// User agent header
    pub user_agent: String,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_bytes: MAX_IMAGE_SIZE,
            user_agent: format!("profile-card/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// [`ImageFetcher`] backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: reqwest::Client,
    config: HttpFetcherConfig,
}

impl HttpImageFetcher {
    /// Create a fetcher with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpFetcherConfig::default())
    }

    /// Create a fetcher with custom configuration
    pub fn with_config(config: HttpFetcherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| MediaError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MediaError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaError::Http {
                status: status.as_u16(),
            });
        }

        if let Some(len) = response.content_length() {
            if len as usize > self.config.max_bytes {
                return Err(MediaError::FileTooLarge {
                    size: len as usize,
                    max: self.config.max_bytes,
                });
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| MediaError::Transport(e.to_string()))?;

        if bytes.is_empty() {
            return Err(MediaError::EmptyBody);
        }
        if bytes.len() > self.config.max_bytes {
            return Err(MediaError::FileTooLarge {
                size: bytes.len(),
                max: self.config.max_bytes,
            });
        }

        Ok(bytes.to_vec())
    }
}

type BitmapCache = Arc<Mutex<HashMap<String, Arc<ImageBitmap>>>>;

/// Starts image loads and remembers decoded bitmaps by URL
#[derive(Clone)]
pub struct ImageLoader {
    fetcher: Arc<dyn ImageFetcher>,
    cache: BitmapCache,
}

impl fmt::Debug for ImageLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageLoader")
            .field("cached", &self.cache.lock().len())
            .finish()
    }
}

impl ImageLoader {
    /// Create a loader using `fetcher` for network access
    pub fn new(fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self {
            fetcher,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Start loading `url`
    ///
    /// A cached bitmap resolves immediately without spawning. Otherwise the
    /// fetch runs on the current tokio runtime; outside a runtime the request
    /// resolves to [`ImageLoadState::Failed`].
    pub fn load(&self, url: impl Into<String>) -> ImageRequest {
        let url = url.into();

        if let Some(bitmap) = self.cached(&url) {
            tracing::debug!(%url, "image served from cache");
            return ImageRequest {
                url,
                state: StateHandle::new(ImageLoadState::Loaded(bitmap)),
                task: None,
            };
        }

        let state = StateHandle::new(ImageLoadState::Loading);
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!(%url, "cannot load image outside an async runtime");
                state.set(ImageLoadState::Failed(MediaError::NoRuntime.to_string()));
                return ImageRequest {
                    url,
                    state,
                    task: None,
                };
            }
        };

        let fetcher = Arc::clone(&self.fetcher);
        let cache = Arc::clone(&self.cache);
        let setter = state.setter();
        let task_url = url.clone();

        let task = runtime.spawn(async move {
            tracing::debug!(url = %task_url, "fetching image");
            let outcome = match fetcher.fetch(&task_url).await {
                Ok(bytes) => decode_bitmap(&bytes),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(bitmap) => {
                    let bitmap = Arc::new(bitmap);
                    cache.lock().insert(task_url.clone(), Arc::clone(&bitmap));
                    tracing::debug!(
                        url = %task_url,
                        width = bitmap.width,
                        height = bitmap.height,
                        "image loaded"
                    );
                    setter.set(ImageLoadState::Loaded(bitmap));
                }
                Err(e) => {
                    tracing::warn!(url = %task_url, error = %e, "image load failed");
                    setter.set(ImageLoadState::Failed(e.to_string()));
                }
            }
        });

        ImageRequest {
            url,
            state,
            task: Some(task),
        }
    }

    /// Get a cached bitmap
    pub fn cached(&self, url: &str) -> Option<Arc<ImageBitmap>> {
        self.cache.lock().get(url).cloned()
    }

    /// Forget every cached bitmap
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}

/// Handle to one in-flight or completed image load
///
/// Dropping the request aborts the fetch if it is still running.
pub struct ImageRequest {
    url: String,
    state: StateHandle<ImageLoadState>,
    task: Option<JoinHandle<()>>,
}

impl fmt::Debug for ImageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageRequest")
            .field("url", &self.url)
            .field("state", &self.state)
            .finish()
    }
}

impl ImageRequest {
    /// A request that is already resolved to `state`
    pub fn resolved(url: impl Into<String>, state: ImageLoadState) -> Self {
        Self {
            url: url.into(),
            state: StateHandle::new(state),
            task: None,
        }
    }

    /// The requested URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current load state
    pub fn state(&self) -> ImageLoadState {
        self.state.get()
    }

    /// Subscribe to load state changes
    pub fn subscribe(&self) -> watch::Receiver<ImageLoadState> {
        self.state.subscribe()
    }

    /// Wait until the load resolves
    pub async fn resolved_state(&self) -> ImageLoadState {
        let mut rx = self.state.subscribe();
        let resolved = rx.wait_for(|s| s.is_resolved()).await.map(|state| (*state).clone());
        resolved.unwrap_or_else(|_| self.state.get())
    }

    /// Check whether the background fetch is still running
    pub fn is_in_flight(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Abort the fetch; the state stays at whatever it last was
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::debug!(url = %self.url, "image load cancelled");
            }
            task.abort();
        }
    }
}

impl Drop for ImageRequest {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_load_success() {
        let mut fetcher = MockImageFetcher::new();
        let bytes = png_bytes(8, 4);
        fetcher
            .expect_fetch()
            .times(1)
            .returning(move |_| Ok(bytes.clone()));

        let loader = ImageLoader::new(Arc::new(fetcher));
        let request = loader.load("https://example.com/a.png");

        let state = request.resolved_state().await;
        let bitmap = state.bitmap().expect("bitmap should be loaded");
        assert_eq!((bitmap.width, bitmap.height), (8, 4));
    }

    #[tokio::test]
    async fn test_load_failure_is_not_cached() {
        let mut fetcher = MockImageFetcher::new();
        fetcher
            .expect_fetch()
            .times(2)
            .returning(|_| Err(MediaError::Http { status: 404 }));

        let loader = ImageLoader::new(Arc::new(fetcher));

        let first = loader.load("https://example.com/missing.png");
        let state = first.resolved_state().await;
        assert_eq!(state.error_message(), Some("HTTP error: status 404"));
        assert!(loader.cached("https://example.com/missing.png").is_none());

        // A new request fetches again
        let second = loader.load("https://example.com/missing.png");
        assert!(second.resolved_state().await.error_message().is_some());
    }

    #[tokio::test]
    async fn test_decode_failure_resolves_failed() {
        let mut fetcher = MockImageFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_| Ok(b"<html>not an image</html>".to_vec()));

        let loader = ImageLoader::new(Arc::new(fetcher));
        let request = loader.load("https://example.com/page");
        let state = request.resolved_state().await;
        assert!(matches!(state, ImageLoadState::Failed(_)));
    }

    #[tokio::test]
    async fn test_second_load_hits_cache() {
        let mut fetcher = MockImageFetcher::new();
        let bytes = png_bytes(2, 2);
        fetcher
            .expect_fetch()
            .times(1)
            .returning(move |_| Ok(bytes.clone()));

        let loader = ImageLoader::new(Arc::new(fetcher));
        let first = loader.load("https://example.com/a.png");
        first.resolved_state().await;

        let second = loader.load("https://example.com/a.png");
        assert!(!second.is_in_flight());
        assert!(second.state().bitmap().is_some());

        loader.clear_cache();
        assert!(loader.cached("https://example.com/a.png").is_none());
    }

    struct PendingFetcher;

    #[async_trait]
    impl ImageFetcher for PendingFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_cancel_aborts_fetch() {
        let loader = ImageLoader::new(Arc::new(PendingFetcher));

        let mut request = loader.load("https://example.com/slow.png");
        tokio::task::yield_now().await;
        assert!(request.is_in_flight());

        request.cancel();
        tokio::task::yield_now().await;
        assert!(!request.is_in_flight());
        assert!(request.state().is_loading());
    }

    #[test]
    fn test_load_outside_runtime_fails() {
        let fetcher = MockImageFetcher::new();
        let loader = ImageLoader::new(Arc::new(fetcher));
        let request = loader.load("https://example.com/a.png");
        assert!(matches!(request.state(), ImageLoadState::Failed(_)));
        assert!(!request.is_in_flight());
    }

    #[test]
    fn test_resolved_request() {
        let request = ImageRequest::resolved("u", ImageLoadState::Failed("x".into()));
        assert_eq!(request.url(), "u");
        assert_eq!(request.state().error_message(), Some("x"));
    }
}
