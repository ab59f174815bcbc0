// src/browser.rs
//! Rendering the forecast page. The site fills its numbers in client-side, so a
//! plain HTTP GET is not enough: a headless Chromium is driven over CDP and the
//! serialized DOM is handed to `specs`.

use std::error::Error;

use chromiumoxide::cdp::browser_protocol::page::AddScriptToEvaluateOnNewDocumentParams;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::config::consts::{BROWSER_ARGS, HIDE_WEBDRIVER_JS};
use crate::config::options::ScrapeOptions;
use crate::progress::{self, Progress};

/// Source of rendered page HTML. Tests substitute canned pages.
pub trait PageSource {
    fn render(
        &self,
        opts: &ScrapeOptions,
        progress: &mut dyn Progress,
    ) -> Result<String, Box<dyn Error>>;
}

/// Headless Chromium, one fresh browser per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChromeSource;

impl PageSource for ChromeSource {
    fn render(
        &self,
        opts: &ScrapeOptions,
        progress: &mut dyn Progress,
    ) -> Result<String, Box<dyn Error>> {
        // Blocks the caller (the UI thread) until the page is read and the browser is gone.
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        rt.block_on(render_once(opts, progress))
    }
}

async fn render_once(
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<String, Box<dyn Error>> {
    progress::stage(progress, "Launching browser…");
    let mut session = BrowserSession::launch(opts).await?;

    progress::stage(progress, "Loading forecast page…");
    let result = session.load(opts).await;

    session.close().await;
    result
}

/// Owns the browser process for one render. `close()` is the normal exit;
/// if it is never reached, dropping the guard stops the CDP event loop and the
/// browser handle's own drop kills the child process.
struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    closed: bool,
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if !self.closed {
            logw!("Browser: session dropped without close, killing");
        }
        self.handler_task.abort();
    }
}

impl BrowserSession {
    async fn launch(opts: &ScrapeOptions) -> Result<Self, Box<dyn Error>> {
        let mut builder = BrowserConfig::builder()
            .disable_default_args()
            .args(BROWSER_ARGS.iter().copied())
            .no_sandbox()
            .launch_timeout(opts.ready_timeout)
            .request_timeout(opts.ready_timeout);
        if let Some(exe) = &opts.browser_executable {
            builder = builder.chrome_executable(exe);
        }
        let config = builder.build()?;

        let (browser, mut handler) = Browser::launch(config).await?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    logd!("Browser: handler event error: {}", e);
                }
            }
        });
        logf!("Browser: launched (headless)");

        Ok(Self { browser, handler_task, closed: false })
    }

    async fn load(&self, opts: &ScrapeOptions) -> Result<String, Box<dyn Error>> {
        let page = self.browser.new_page("about:blank").await?;

        // Hide navigator.webdriver before the site's scripts run.
        page.execute(AddScriptToEvaluateOnNewDocumentParams::new(HIDE_WEBDRIVER_JS))
            .await?;

        logf!("Browser: goto {}", opts.url);
        match tokio::time::timeout(opts.ready_timeout, page.goto(opts.url.as_str())).await {
            Ok(nav) => {
                nav?;
            }
            Err(_) => logw!(
                "Browser: navigation not finished after {:?}, reading what is there",
                opts.ready_timeout
            ),
        }

        tokio::time::sleep(opts.settle_delay).await;

        let html = page.content().await?;
        logf!("Browser: page content {} bytes", html.len());
        Ok(html)
    }

    async fn close(&mut self) {
        let close_res = self.browser.close().await;
        match Teardown::after_close(&close_res) {
            Teardown::Wait => {
                if let Err(e) = self.browser.wait().await {
                    logw!("Browser: wait failed: {}", e);
                }
            }
            Teardown::Kill => {
                if let Err(e) = &close_res {
                    logw!("Browser: close failed ({}), killing", e);
                }
                if let Some(Err(e)) = self.browser.kill().await {
                    logw!("Browser: kill failed: {}", e);
                }
            }
        }
        self.closed = true;
        logf!("Browser: closed");
    }
}

/// What to do with the child process once the close command has been sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Teardown {
    /// Browser acknowledged; reap the process.
    Wait,
    /// CDP may be gone with the process still alive; waiting could hang.
    Kill,
}

impl Teardown {
    fn after_close<T, E>(closed: &Result<T, E>) -> Self {
        match closed {
            Ok(_) => Teardown::Wait,
            Err(_) => Teardown::Kill,
        }
    }
}
