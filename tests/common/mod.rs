//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tempfile::TempDir;
use tokio::net::TcpListener;

use wiki_server::config::WikiConfig;
use wiki_server::store::{FileStore, PageStore, SqliteStore};
use wiki_server::WikiServer;

/// A live wiki server bound to an ephemeral loopback port, backed by a
/// scratch directory that lives as long as this struct.
pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
    _scratch: TempDir,
}

#[allow(dead_code)]
pub async fn spawn_file_server() -> TestServer {
    spawn(false).await
}

#[allow(dead_code)]
pub async fn spawn_sqlite_server() -> TestServer {
    spawn(true).await
}

async fn spawn(sqlite: bool) -> TestServer {
    let scratch = tempfile::tempdir().unwrap();

    let store: Arc<dyn PageStore> = if sqlite {
        Arc::new(
            SqliteStore::open(scratch.path().join("wiki.db"))
                .await
                .unwrap(),
        )
    } else {
        Arc::new(FileStore::open(scratch.path().join("data")).await.unwrap())
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = WikiServer::new(WikiConfig::default(), store);
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    TestServer {
        addr,
        base_url: format!("http://{addr}"),
        _scratch: scratch,
    }
}

/// HTTP client that does not follow redirects, so 302s can be asserted.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
