//! Rendering against a real headless Chromium.
//!
//! Ignored by default: these need Chromium or Chrome on the `PATH` (or set
//! through `CHROME_EXECUTABLE`). Run with:
//! `cargo test --test chrome_render -- --ignored --nocapture`

use std::path::PathBuf;
use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};
use url::Url;

use redirect_resolver::config::BROWSER_PROFILE_PREFIX;
use redirect_resolver::render::{RenderOutcome, RenderStrategy};
use redirect_resolver::{BrowserOptions, ChromeRenderer, RenderError, Renderer};

fn browser_options() -> BrowserOptions {
    BrowserOptions {
        executable: std::env::var_os("CHROME_EXECUTABLE").map(PathBuf::from),
        // Test runners are usually root inside a container
        no_sandbox: true,
    }
}

fn html(body: &str) -> impl httptest::responders::Responder {
    status_code(200)
        .insert_header("Content-Type", "text/html; charset=utf-8")
        .body(format!("<!doctype html><html><body>{}</body></html>", body))
}

/// Command lines of live processes using one of our browser profiles.
fn surviving_browsers() -> Vec<String> {
    let Ok(entries) = std::fs::read_dir("/proc") else {
        return Vec::new();
    };
    entries
        .flatten()
        .filter_map(|entry| std::fs::read(entry.path().join("cmdline")).ok())
        .map(|raw| String::from_utf8_lossy(&raw).replace('\0', " "))
        .filter(|cmdline| cmdline.contains(BROWSER_PROFILE_PREFIX))
        .collect()
}

async fn wait_for_no_surviving_browsers() {
    for _ in 0..50 {
        if surviving_browsers().is_empty() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("browser processes survived the render: {:?}", surviving_browsers());
}

/// Both scenarios run in one test: the leftover-process check would otherwise
/// see the other test's browser.
#[tokio::test]
#[ignore] // Run with: cargo test --test chrome_render -- --ignored --nocapture
async fn test_chrome_renderer_follows_script_redirect_and_tears_down() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/start"))
            .times(1..)
            .respond_with(html("<script>location.replace('/landing');</script>")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/landing"))
            .times(1..)
            .respond_with(html("<h1>Landing</h1>")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/hang"))
            .times(1..)
            .respond_with(delay_and_then(Duration::from_secs(60), html("late"))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/favicon.ico"))
            .times(0..)
            .respond_with(status_code(404)),
    );

    let renderer = ChromeRenderer::new(browser_options());

    // Client-side redirect: the idle of the replaced document must not end the wait
    let start = Url::parse(&server.url_str("/start")).expect("valid URL");
    let rendered = renderer
        .render(&start, Duration::from_secs(30))
        .await
        .expect("render should succeed");
    assert_eq!(rendered.as_str(), server.url_str("/landing"));
    wait_for_no_surviving_browsers().await;

    // A navigation that never settles times out and leaves nothing behind
    let hang = Url::parse(&server.url_str("/hang")).expect("valid URL");
    let outcome = RenderStrategy::new(renderer, Duration::from_secs(5))
        .run(&hang)
        .await;
    assert_eq!(
        outcome,
        RenderOutcome::Failed(RenderError::Timeout(Duration::from_secs(5)))
    );
    wait_for_no_surviving_browsers().await;
}
