use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use pulse_core::{Msg, ProgressSession, PulseOutcome, SessionConfig};
use pulse_logging::{pulse_debug, pulse_error, pulse_info, pulse_trace, pulse_warn};
use tokio::net::TcpListener;

use crate::{ServerError, ServerSettings};

/// Host-side end of a progress session.
///
/// Every inbound connection on the bound port counts as one unit of
/// progress. Counter updates are forwarded to the display thread over the
/// channel given to [`ProgressServer::open`]; the server never renders.
pub struct ProgressServer {
    shared: Arc<Shared>,
    port: u16,
    accept_thread: Mutex<Option<JoinHandle<()>>>,
}

struct Shared {
    session: Mutex<ProgressSession>,
    keep_going: AtomicBool,
    display_tx: mpsc::Sender<Msg>,
}

impl ProgressServer {
    /// Binds an ephemeral port and starts accepting pulses.
    ///
    /// Returns the server handle together with the bound port, which the
    /// caller hands to its workers.
    pub fn open(
        config: SessionConfig,
        settings: &ServerSettings,
        display_tx: mpsc::Sender<Msg>,
    ) -> Result<(Self, u16), ServerError> {
        config.validate()?;

        let listener = StdTcpListener::bind(SocketAddr::new(settings.bind_address, 0))
            .map_err(ServerError::Bind)?;
        listener.set_nonblocking(true).map_err(ServerError::Bind)?;
        let port = listener.local_addr().map_err(ServerError::Bind)?.port();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_io()
            .enable_time()
            .build()
            .map_err(ServerError::Runtime)?;

        let mut session = ProgressSession::new(config);
        session.set_port(port);
        pulse_info!(
            "Progress session '{}' listening on port {} (total={}, step={})",
            session.config().title,
            port,
            session.config().total_steps,
            session.config().step_size
        );

        let shared = Arc::new(Shared {
            session: Mutex::new(session),
            keep_going: AtomicBool::new(true),
            display_tx,
        });

        let loop_shared = shared.clone();
        let accept_timeout = settings.accept_timeout;
        let handle = thread::Builder::new()
            .name(format!("pulse-accept-{port}"))
            .spawn(move || {
                runtime.block_on(accept_loop(listener, loop_shared, accept_timeout));
            })
            .map_err(ServerError::Spawn)?;

        let server = Self {
            shared,
            port,
            accept_thread: Mutex::new(Some(handle)),
        };
        Ok((server, port))
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn completed(&self) -> u64 {
        self.shared.lock_session().completed()
    }

    pub fn is_closed(&self) -> bool {
        self.shared.lock_session().is_closed()
    }

    /// Counts one unit of progress without a network pulse.
    ///
    /// The session closes itself once the display reaches its maximum.
    /// After close this does nothing.
    pub fn increment(&self) {
        self.shared.increment();
    }

    /// Stops accepting, releases the port and disposes the indicator.
    ///
    /// Safe to call any number of times.
    pub fn close(&self) {
        if self.shared.close() {
            pulse_info!("Progress session on port {} closed", self.port);
        }
        self.join_accept_thread();
    }

    fn join_accept_thread(&self) {
        let handle = self
            .accept_thread
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                pulse_error!("Accept thread for port {} panicked", self.port);
            }
        }
    }
}

impl Drop for ProgressServer {
    fn drop(&mut self) {
        self.close();
    }
}

impl Shared {
    fn lock_session(&self) -> MutexGuard<'_, ProgressSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn increment(&self) {
        let outcome = {
            let mut session = self.lock_session();
            let outcome = session.record_pulse();
            // Sent under the lock so the display sees counts in order.
            match outcome {
                PulseOutcome::Counted { completed } | PulseOutcome::Completed { completed } => {
                    self.notify(Msg::Progress { completed });
                }
                PulseOutcome::Ignored => {}
            }
            outcome
        };

        if let PulseOutcome::Completed { completed } = outcome {
            pulse_info!("Progress session complete after {} pulses", completed);
            self.close();
        }
    }

    /// Returns `true` for the call that actually closed the session.
    fn close(&self) -> bool {
        self.keep_going.store(false, Ordering::SeqCst);
        let mut session = self.lock_session();
        if !session.close() {
            return false;
        }
        self.notify(Msg::Closed);
        true
    }

    fn notify(&self, msg: Msg) {
        if self.display_tx.send(msg).is_err() {
            pulse_debug!("Display channel gone; dropped {:?}", msg);
        }
    }

    fn is_running(&self) -> bool {
        self.keep_going.load(Ordering::SeqCst)
    }
}

async fn accept_loop(listener: StdTcpListener, shared: Arc<Shared>, accept_timeout: Duration) {
    let listener = match TcpListener::from_std(listener) {
        Ok(listener) => listener,
        Err(err) => {
            pulse_error!("Could not register progress listener: {}", err);
            shared.close();
            return;
        }
    };

    while shared.is_running() {
        match tokio::time::timeout(accept_timeout, listener.accept()).await {
            // Idle: nobody connected within the timeout.
            Err(_elapsed) => {}
            Ok(Ok((stream, peer))) => {
                drop(stream);
                pulse_trace!("Pulse from {}", peer);
                shared.increment();
            }
            Ok(Err(err)) => {
                if shared.is_running() {
                    pulse_warn!("Accepting progress pulse failed: {}", err);
                    // Errors like EMFILE repeat immediately; back off for one period.
                    tokio::time::sleep(accept_timeout).await;
                }
            }
        }
    }

    // Dropping the listener here releases the port.
    pulse_debug!("Accept loop stopped");
}
