// Shared test helpers: a scripted renderer and resolver construction.
//
// No browser is started by any integration test; the render seam is replaced by
// `ScriptedRenderer`, while the probe uses the real `HttpTransport` against an
// `httptest` server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use redirect_resolver::initialization::init_probe_client;
use redirect_resolver::probe::ProbeStrategy;
use redirect_resolver::render::RenderStrategy;
use redirect_resolver::{Config, HttpTransport, RenderError, Renderer, Resolver};

/// Renderer returning a fixed result and counting its calls.
pub struct ScriptedRenderer {
    result: Result<Url, RenderError>,
    delay: Duration,
    calls: AtomicUsize,
    live: Arc<AtomicUsize>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl ScriptedRenderer {
    pub fn resolving_to(url: &str) -> Arc<Self> {
        Arc::new(Self::new(Ok(Url::parse(url).expect("valid URL")), Duration::ZERO))
    }

    pub fn failing(error: RenderError) -> Arc<Self> {
        Arc::new(Self::new(Err(error), Duration::ZERO))
    }

    pub fn slow(url: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self::new(Ok(Url::parse(url).expect("valid URL")), delay))
    }

    fn new(result: Result<Url, RenderError>, delay: Duration) -> Self {
        Self {
            result,
            delay,
            calls: AtomicUsize::new(0),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Renders currently in flight.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

struct LiveGuard(Arc<AtomicUsize>);

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Shared handle to a `ScriptedRenderer`; a local type is needed because the
/// orphan rule forbids implementing `Renderer` for `Arc<_>` outside the library.
pub struct SharedRenderer(pub Arc<ScriptedRenderer>);

impl std::ops::Deref for SharedRenderer {
    type Target = ScriptedRenderer;

    fn deref(&self) -> &ScriptedRenderer {
        &self.0
    }
}

#[async_trait]
impl Renderer for SharedRenderer {
    async fn render(&self, _url: &Url, _timeout: Duration) -> Result<Url, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        let _guard = LiveGuard(self.live.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.clone()
    }
}

/// Resolver with the real probe and a scripted render.
#[allow(dead_code)]
pub fn resolver_with(
    config: &Config,
    renderer: &Arc<ScriptedRenderer>,
) -> Resolver<HttpTransport, SharedRenderer> {
    let transport = HttpTransport::new(init_probe_client(config).expect("client should build"));
    Resolver::new(
        ProbeStrategy::new(transport, config.probe_timeout()),
        RenderStrategy::new(SharedRenderer(renderer.clone()), config.render_timeout()),
    )
    .with_redirect_policy(config.redirect_policy, config.max_reprobe_hops)
}

/// Configuration with short timeouts for tests.
#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        probe_timeout_seconds: 1,
        render_timeout_seconds: 5,
        ..Config::default()
    }
}
