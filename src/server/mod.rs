// Server module entry point
// Listener setup, connection serving, and shutdown handling

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is exposed as `server_loop`
#[path = "loop.rs"]
pub mod server_loop;

use std::future::Future;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;

use crate::config::AppState;

/// Serve `state` on `listener` until `shutdown` completes.
///
/// Connection tasks are `spawn_local`ed onto a `LocalSet` owned by this call;
/// connections still open at shutdown are dropped with it.
pub async fn serve<S>(listener: TcpListener, state: Arc<AppState>, shutdown: S)
where
    S: Future<Output = ()>,
{
    let active_connections = Arc::new(AtomicUsize::new(0));
    let local = tokio::task::LocalSet::new();
    local
        .run_until(start_server_loop(listener, state, active_connections, shutdown))
        .await;
}
