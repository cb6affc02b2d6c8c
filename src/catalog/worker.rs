//! Catalog worker thread
//!
//! Fetches the font list off the UI loop: requests go in and responses come
//! back over mpsc channels, with a current-thread tokio runtime living
//! inside the worker. The UI polls for responses between events, so a slow
//! or dead catalog service never blocks interaction.

use std::sync::mpsc::{Receiver, Sender, channel};

use super::fetch::{CatalogError, fetch_font_list};
use super::types::FontInfo;

pub enum CatalogRequest {
    FetchList,
}

pub enum CatalogResponse {
    List(Result<Vec<FontInfo>, CatalogError>),
}

/// Handle to the background catalog worker
pub struct CatalogWorker {
    request_tx: Sender<CatalogRequest>,
    response_rx: Receiver<CatalogResponse>,
}

impl CatalogWorker {
    /// Spawn the worker thread against a catalog base URL
    pub fn spawn(base: String) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        std::thread::spawn(move || worker_loop(base, request_rx, response_tx));

        Self {
            request_tx,
            response_rx,
        }
    }

    /// Ask for the font list; the response arrives via `try_recv`
    pub fn request_list(&self) {
        let _ = self.request_tx.send(CatalogRequest::FetchList);
    }

    /// Non-blocking poll for a finished response
    pub fn try_recv(&self) -> Option<CatalogResponse> {
        self.response_rx.try_recv().ok()
    }
}

fn worker_loop(
    base: String,
    request_rx: Receiver<CatalogRequest>,
    response_tx: Sender<CatalogResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            // Report every request as failed rather than going silent
            log::warn!("catalog worker failed to start runtime: {err}");
            let message = err.to_string();
            while let Ok(CatalogRequest::FetchList) = request_rx.recv() {
                let failed = CatalogResponse::List(Err(CatalogError::Network(message.clone())));
                if response_tx.send(failed).is_err() {
                    break;
                }
            }
            return;
        }
    };

    let client = reqwest::Client::new();

    while let Ok(request) = request_rx.recv() {
        match request {
            CatalogRequest::FetchList => {
                let result = runtime.block_on(fetch_font_list(&client, &base));
                if let Err(err) = &result {
                    log::warn!("font list fetch failed: {err}");
                }
                if response_tx.send(CatalogResponse::List(result)).is_err() {
                    break;
                }
            }
        }
    }

    log::debug!("catalog worker shutting down");
}
