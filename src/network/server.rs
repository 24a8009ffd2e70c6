//! TCP Server
//!
//! Accepts connections and serves them one after another.

use std::net::{SocketAddr, TcpListener};
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::error::{KvError, Result};
use crate::store::Store;

use super::Connection;

/// Pause after a failed accept so a persistent error (e.g. EMFILE) cannot spin
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// TCP server for linekv
pub struct Server {
    config: Config,
    listener: TcpListener,
    store: Store,
}

impl Server {
    /// Bind the configured address with an empty store
    ///
    /// A bind failure is returned as `KvError::Bind` and is meant to abort
    /// startup. On Unix the standard library enables `SO_REUSEADDR` on the
    /// listening socket, so quick restarts can rebind the port.
    pub fn bind(config: Config) -> Result<Self> {
        Self::with_store(config, Store::new())
    }

    /// Bind the configured address, serving an existing store
    pub fn with_store(config: Config, store: Store) -> Result<Self> {
        config.validate()?;

        let listener = TcpListener::bind(&config.listen_addr).map_err(|source| KvError::Bind {
            addr: config.listen_addr.clone(),
            source,
        })?;

        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            config,
            listener,
            store,
        })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Start the server (blocking, never returns)
    ///
    /// Accept failures are logged and the loop continues after a short pause.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if let Err(e) = self.serve_next() {
                tracing::warn!("Failed to accept connection: {}", e);
                thread::sleep(ACCEPT_BACKOFF);
            }
        }
    }

    /// Accept one connection and serve it until the client disconnects
    ///
    /// Only an accept failure is returned. Errors on the connection itself
    /// are logged and end that connection alone.
    pub fn serve_next(&mut self) -> Result<()> {
        let (stream, addr) = self.listener.accept()?;
        tracing::info!("Client connected: {}", addr);

        let outcome = match Connection::new(stream, &self.config) {
            Ok(mut connection) => connection.handle(&mut self.store),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => tracing::info!("Client disconnected: {}", addr),
            Err(e) => tracing::warn!("Connection to {} closed with error: {}", addr, e),
        }

        Ok(())
    }

    /// Get the store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get the store mutably (administrative access between connections)
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
