// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// Accept connections on `listener` until `shutdown` completes.
///
/// Must run inside a `tokio::task::LocalSet`; each connection is served by a
/// local task.
pub async fn start_server_loop<S>(
    listener: TcpListener,
    state: Arc<config::AppState>,
    active_connections: Arc<AtomicUsize>,
    shutdown: S,
) where
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => {
                logger::log_shutdown();
                break;
            }
        }
    }
}
