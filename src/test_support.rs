//! Throwaway HTTP servers standing in for the chat and image APIs.

use axum::Router;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("stub server has no address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server failed");
    });

    format!("http://{}", addr)
}
