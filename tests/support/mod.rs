// Shared bootstrap and readiness polling for calculator integration tests.
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

// Attempts and spacing for the `/health` readiness poll.
pub const READY_MAX_RETRIES: u32 = 30;
pub const READY_RETRY_DELAY: Duration = Duration::from_secs(1);

// Global base URL used by all tests once the target is known to be ready.
static SERVER_URL: OnceLock<String> = OnceLock::new();

// Return the base URL of a ready calculator, starting one in-process unless `APP_URL` is set.
pub fn ensure_server() -> &'static str {
    SERVER_URL.get_or_init(|| {
        let base_url = match std::env::var("APP_URL") {
            Ok(url) => url.trim_end_matches('/').to_string(),
            Err(_) => spawn_local_server(),
        };

        // Poll from a dedicated thread; callers are already inside a tokio runtime.
        let poll_url = base_url.clone();
        let ready = std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("readiness runtime");
            runtime.block_on(wait_for_app(&poll_url, READY_MAX_RETRIES, READY_RETRY_DELAY))
        })
        .join()
        .expect("readiness thread panicked");

        if let Err(message) = ready {
            panic!("{message}");
        }

        base_url
    })
}

// Call `/health` until it answers 200 or the retries run out.
pub async fn wait_for_app(base_url: &str, max_retries: u32, delay: Duration) -> Result<u32, String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .map_err(|e| format!("failed to build readiness client: {e}"))?;
    let url = format!("{base_url}/health");

    for attempt in 0..max_retries {
        if let Ok(response) = client.get(&url).send().await {
            if response.status() == reqwest::StatusCode::OK {
                return Ok(attempt);
            }
        }
        if attempt + 1 < max_retries {
            tokio::time::sleep(delay).await;
        }
    }

    Err(format!("App not ready after {max_retries} attempts"))
}

fn spawn_local_server() -> String {
    let published_url = Arc::new(OnceLock::<String>::new());
    let published_url_thread = Arc::clone(&published_url);

    // Own runtime on an OS thread so the server outlives individual `#[tokio::test]` runtimes.
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("test runtime");
        runtime.block_on(async move {
            // Ephemeral port avoids collisions with a locally running instance.
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral test port");
            let addr = listener.local_addr().expect("get local addr");
            let _ = published_url_thread.set(format!("http://{}", addr));
            calculator_server::run(listener).await.expect("server failed");
        });
    });

    loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}
