//! Shared utilities for integration testing.

use testmux::TestServer;

/// Client that never reuses connections, so request order on the wire
/// matches the order requests are issued.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Issue `method path` against the server and return status and body.
pub async fn send(
    client: &reqwest::Client,
    server: &TestServer,
    method: &str,
    path: &str,
) -> (u16, String) {
    let method = reqwest::Method::from_bytes(method.as_bytes()).unwrap();
    let res = client
        .request(method, server.url(path))
        .send()
        .await
        .expect("server unreachable");
    let status = res.status().as_u16();
    (status, res.text().await.unwrap())
}
