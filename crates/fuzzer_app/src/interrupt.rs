use std::future::Future;

use fuzzer_logging::fuzz_error;

/// Installs the Ctrl+C handler now and returns a future that resolves on the
/// first interrupt received from this point on.
///
/// Must be called inside the runtime. If the handler cannot be installed the
/// future never resolves.
pub fn listen_for_interrupt() -> impl Future<Output = ()> {
    #[cfg(unix)]
    let listener =
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt());
    #[cfg(windows)]
    let listener = tokio::signal::windows::ctrl_c();

    async move {
        #[cfg(any(unix, windows))]
        match listener {
            Ok(mut listener) => {
                if listener.recv().await.is_some() {
                    return;
                }
            }
            Err(err) => fuzz_error!("Failed to listen for Ctrl+C: {}", err),
        }
        std::future::pending::<()>().await
    }
}
