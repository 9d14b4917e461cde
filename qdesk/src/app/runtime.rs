use std::future::Future;

use super::QdeskCliError;

/// runs a request future to completion on a single-threaded runtime
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, QdeskCliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| QdeskCliError::RuntimeError(e.to_string()))?;
    Ok(runtime.block_on(future))
}
