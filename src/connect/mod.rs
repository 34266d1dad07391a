//! Two-step signer handshake behind the connection screen.
//!
//! `idle -> connecting -> {connected | error}`. The caller owns the
//! [`ConnectionState`] and passes it into [`select_signer`]; the pending
//! counter is restored on every exit path, including the future being
//! dropped or cancelled.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::monitoring::events;
use crate::signer::{SignerError, SignerIface, SignerKind, SignerOptions, SignerProvider};

pub const LOADING_MESSAGE: &str = "Please confirm the connection in Metamask Flask signer";

/// Derivation section of the second extension backed signer.
pub const SECOND_SIGNER_SECTION: u32 = 1;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConnectionState {
    pending: u32,
    errors: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Loading { message: &'static str },
    Errors(&'a [String]),
    Selector,
}

impl ConnectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Loading wins over errors, errors win over the selector.
    pub fn view(&self) -> View<'_> {
        if self.pending > 0 {
            View::Loading {
                message: LOADING_MESSAGE,
            }
        } else if !self.errors.is_empty() {
            View::Errors(&self.errors)
        } else {
            View::Selector
        }
    }
}

pub struct SignerPair {
    pub signer1: Arc<dyn SignerIface>,
    pub signer2: Arc<dyn SignerIface>,
}

impl fmt::Debug for SignerPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerPair")
            .field("signer1", &self.signer1.address())
            .field("signer2", &self.signer2.address())
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error(transparent)]
    Signer(#[from] SignerError),
    #[error("signer acquisition cancelled")]
    Cancelled,
}

struct PendingGuard<'a> {
    state: &'a mut ConnectionState,
}

impl<'a> PendingGuard<'a> {
    fn enter(state: &'a mut ConnectionState) -> Self {
        state.pending += 1;
        Self { state }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state.pending = self.state.pending.saturating_sub(1);
    }
}

/// Requests a primary and a secondary signer of `kind`.
///
/// The second request is only issued after the first one resolved. For the
/// extension backed kind it asks for derivation section
/// [`SECOND_SIGNER_SECTION`]; ephemeral signers are simply requested twice.
/// A failure is logged and its message appended to `state`'s error list; a
/// cancellation is not.
///
/// `on_change` sees the view right after the pending counter went up and
/// again once the request settled.
pub async fn select_signer<P, F>(
    state: &mut ConnectionState,
    provider: &P,
    kind: SignerKind,
    cancel: &CancellationToken,
    mut on_change: F,
) -> Result<SignerPair, ConnectError>
where
    P: SignerProvider + ?Sized,
    F: FnMut(View<'_>),
{
    let outcome = {
        let guard = PendingGuard::enter(state);
        on_change(guard.state.view());
        info!(
            target: "connect",
            kind = kind.as_str(),
            pending = guard.state.pending,
            "connecting signer"
        );

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ConnectError::Cancelled),
            result = acquire_pair(provider, kind) => result.map_err(ConnectError::from),
        };
        if let Err(ConnectError::Signer(err)) = &outcome {
            guard.state.errors.push(err.to_string());
        }
        outcome
    };
    on_change(state.view());

    match outcome {
        Ok(pair) => {
            info!(
                target: "connect",
                kind = kind.as_str(),
                signer1 = %pair.signer1.address(),
                signer2 = %pair.signer2.address(),
                "signers connected"
            );
            Ok(pair)
        }
        Err(ConnectError::Cancelled) => {
            events::signer_cancelled(kind);
            Err(ConnectError::Cancelled)
        }
        Err(err) => {
            let message = err.to_string();
            error!(target: "connect", kind = kind.as_str(), error = %message, "failed to connect signer");
            events::signer_failed(kind, &message);
            Err(err)
        }
    }
}

async fn acquire_pair<P>(provider: &P, kind: SignerKind) -> Result<SignerPair, SignerError>
where
    P: SignerProvider + ?Sized,
{
    let signer1 = provider.get_signer(SignerOptions::new(kind)).await?;
    events::signer_acquired(kind, 1, &signer1.address().to_string());

    let second = match kind {
        SignerKind::MetamaskSnap => {
            SignerOptions::new(kind).with_derivation_section(SECOND_SIGNER_SECTION)
        }
        SignerKind::Ephemeral => SignerOptions::new(kind),
    };
    let signer2 = provider.get_signer(second).await?;
    events::signer_acquired(kind, 2, &signer2.address().to_string());

    Ok(SignerPair { signer1, signer2 })
}
