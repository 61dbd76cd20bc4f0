//! Session reconciliation controller: the single source of truth for "who is
//! the current user".
//!
//! SYSTEM CONTEXT
//! ==============
//! Several asynchronous triggers (initial load, backend auth events, the tab
//! returning to the foreground, cross-tab storage changes) all funnel into
//! one reconciliation routine that re-derives `AuthState` from the backend on
//! every pass. Passes never patch state: each one fully overwrites it, so
//! overlapping passes converge instead of corrupting. A fail-safe deadline
//! bounds how long the UI can sit behind the `loading` flag.
//!
//! Pure state transitions sit at the top of the module so they can be tested
//! without a browser; the hydrate-gated wiring below owns the DOM listeners
//! and async tasks.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::types::{AuthEvent, AuthEventKind, Identity, ProfileRow, User};
use crate::state::auth::AuthState;

/// Upper bound in milliseconds on how long the UI may sit in `loading`
/// before the fail-safe releases it, whether or not a pass has completed.
pub const LOADING_DEADLINE_MS: u64 = 4_000;

// =============================================================
// Pure transitions
// =============================================================

/// Result of one reconciliation pass, derived entirely from the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum Reconciled {
    /// Live identity joined with its profile row.
    SignedIn(User),
    /// No live identity, or an identity without a resolvable profile.
    SignedOut,
}

/// Fail-closed join of the identity check and the profile fetch: anything
/// short of a live identity with a matching profile row is anonymous.
pub fn resolve_user(identity: Option<Identity>, row: Option<ProfileRow>) -> Reconciled {
    match (identity, row) {
        (Some(identity), Some(row)) => Reconciled::SignedIn(User::from_parts(identity, row)),
        _ => Reconciled::SignedOut,
    }
}

/// Apply a completed pass. Every exit path of a pass lands here, so
/// `loading` is always released.
pub fn apply_reconciled(state: &mut AuthState, outcome: Reconciled) {
    state.user = match outcome {
        Reconciled::SignedIn(user) => Some(user),
        Reconciled::SignedOut => None,
    };
    state.loading = false;
}

/// Local sign-out effect. Access is revoked client-side no matter what the
/// backend said; the user must never stay "logged in" because a revocation
/// request failed.
pub fn apply_local_sign_out(state: &mut AuthState) {
    state.user = None;
    state.loading = false;
}

/// Fail-safe release: unblock the UI without touching the current user.
/// Does not cancel an in-flight pass; a late result still lands normally.
pub fn release_loading(state: &mut AuthState) {
    state.loading = false;
}

/// How to respond to a backend auth event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventAction {
    /// Clear to anonymous directly; no network round-trip needed.
    Clear,
    /// Run a full reconciliation pass against the backend.
    Revalidate,
}

/// Sign-out-class events clear immediately. Any other event carrying a live
/// session, including token refreshes and user updates, revalidates in
/// full; events with no session payload clear.
pub fn classify_event(event: &AuthEvent) -> EventAction {
    if event.kind == AuthEventKind::SignedOut {
        return EventAction::Clear;
    }
    if event.session.is_some() {
        EventAction::Revalidate
    } else {
        EventAction::Clear
    }
}

/// One-shot guard making controller start idempotent under repeated mounts.
#[derive(Clone, Debug, Default)]
pub(crate) struct StartGuard(Arc<AtomicBool>);

impl StartGuard {
    /// Returns `true` exactly once across all clones of the guard.
    pub fn acquire(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }
}

// =============================================================
// Reconciliation pass
// =============================================================

/// One full pass: live identity check, then a fresh profile fetch, then a
/// single state write. Failures converge to the anonymous state; a failed
/// identity check also deletes the poisoned local session marker.
async fn reconcile(auth: RwSignal<AuthState>) {
    auth.update(|state| state.loading = true);
    let identity = api::fetch_identity().await;
    if identity.is_none() {
        api::clear_stored_session();
    }
    let row = match &identity {
        Some(identity) => api::fetch_profile(&identity.id).await,
        None => None,
    };
    auth.update(|state| apply_reconciled(state, resolve_user(identity, row)));
}

// =============================================================
// Controller
// =============================================================

/// Owns the session lifecycle: one instance per running client, constructed
/// in `App`, started once, torn down when the application scope ends.
///
/// Consumers read the auth signal and call [`refresh_user`](Self::refresh_user)
/// / [`sign_out`](Self::sign_out); only the controller writes the signal.
#[derive(Clone)]
pub struct SessionController {
    auth: RwSignal<AuthState>,
    started: StartGuard,
    alive: Arc<AtomicBool>,
    #[cfg(feature = "hydrate")]
    events: futures::channel::mpsc::UnboundedSender<AuthEvent>,
    #[cfg(feature = "hydrate")]
    pending_events:
        Rc<std::cell::RefCell<Option<futures::channel::mpsc::UnboundedReceiver<AuthEvent>>>>,
    #[cfg(feature = "hydrate")]
    listeners: Rc<std::cell::RefCell<Vec<DomListener>>>,
}

impl SessionController {
    pub fn new(auth: RwSignal<AuthState>) -> Self {
        #[cfg(feature = "hydrate")]
        let (events, receiver) = futures::channel::mpsc::unbounded();
        Self {
            auth,
            started: StartGuard::default(),
            alive: Arc::new(AtomicBool::new(true)),
            #[cfg(feature = "hydrate")]
            events,
            #[cfg(feature = "hydrate")]
            pending_events: Rc::new(std::cell::RefCell::new(Some(receiver))),
            #[cfg(feature = "hydrate")]
            listeners: Rc::new(std::cell::RefCell::new(Vec::new())),
        }
    }

    /// The auth signal this controller writes.
    pub fn auth(&self) -> RwSignal<AuthState> {
        self.auth
    }

    /// Start the controller: initial reconciliation, the auth-event loop,
    /// the focus/visibility/storage triggers, and the fail-safe deadline.
    /// Idempotent: only the first call registers anything.
    pub fn start(&self) {
        if !self.started.acquire() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            self.spawn_initial_pass();
            self.spawn_event_loop();
            self.register_dom_triggers();
            self.spawn_loading_deadline();
        }
    }

    /// Force one reconciliation pass; resolves once `AuthState` has been
    /// updated. Never fails: all failure paths land on the anonymous state.
    pub async fn refresh_user(&self) {
        reconcile(self.auth).await;
    }

    /// Sign out: revoke the session remotely when possible, but always clear
    /// local state. The user-visible effect of sign-out is loss of access,
    /// not backend confirmation.
    pub async fn sign_out(&self) {
        self.auth.update(|state| state.loading = true);
        if let Err(err) = api::sign_out().await {
            leptos::logging::warn!("sign-out request failed: {err}");
        }
        self.auth.update(apply_local_sign_out);
    }

    /// Push a backend auth event into the controller's event stream.
    pub fn announce(&self, event: AuthEvent) {
        #[cfg(feature = "hydrate")]
        {
            let _ = self.events.unbounded_send(event);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event;
        }
    }

    /// Release every listener and background task together, leaving no
    /// dangling callbacks.
    pub fn shut_down(&self) {
        self.alive.store(false, Ordering::SeqCst);
        #[cfg(feature = "hydrate")]
        {
            self.events.close_channel();
            self.listeners.borrow_mut().clear();
        }
    }
}

#[cfg(feature = "hydrate")]
impl SessionController {
    fn spawn_initial_pass(&self) {
        let auth = self.auth;
        wasm_bindgen_futures::spawn_local(async move {
            reconcile(auth).await;
        });
    }

    fn spawn_event_loop(&self) {
        use futures::StreamExt;

        let Some(mut receiver) = self.pending_events.borrow_mut().take() else {
            return;
        };
        let auth = self.auth;
        let alive = self.alive.clone();
        wasm_bindgen_futures::spawn_local(async move {
            while let Some(event) = receiver.next().await {
                if !alive.load(Ordering::SeqCst) {
                    break;
                }
                match classify_event(&event) {
                    EventAction::Clear => auth.update(apply_local_sign_out),
                    EventAction::Revalidate => reconcile(auth).await,
                }
            }
        });
    }

    fn spawn_loading_deadline(&self) {
        let auth = self.auth;
        let alive = self.alive.clone();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(LOADING_DEADLINE_MS)).await;
            if alive.load(Ordering::SeqCst) {
                auth.update(release_loading);
            }
        });
    }

    fn register_dom_triggers(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let auth = self.auth;
        let mut listeners = self.listeners.borrow_mut();

        // A long-backgrounded tab's belief about the session may be stale
        // relative to token expiry or a sign-out performed elsewhere. Focus
        // and visibilitychange fire in different combinations across
        // platforms; both are wired so the foreground transition is never
        // missed.
        listeners.push(DomListener::attach(window.clone().into(), "focus", move |_| {
            spawn_reconcile(auth);
        }));
        listeners.push(DomListener::attach(
            document.into(),
            "visibilitychange",
            move |_| {
                let visible = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|d| d.visibility_state() == web_sys::VisibilityState::Visible)
                    .unwrap_or(false);
                if visible {
                    spawn_reconcile(auth);
                }
            },
        ));

        // Another tab touching the session marker invalidates this tab's
        // cached belief too.
        listeners.push(DomListener::attach(window.into(), "storage", move |event| {
            if storage_event_matches(&event) {
                spawn_reconcile(auth);
            }
        }));
    }
}

#[cfg(feature = "hydrate")]
fn spawn_reconcile(auth: RwSignal<AuthState>) {
    wasm_bindgen_futures::spawn_local(async move {
        reconcile(auth).await;
    });
}

/// `storage` events carry the mutated key; a `None` key means the whole
/// store was cleared, which covers the marker as well.
#[cfg(feature = "hydrate")]
fn storage_event_matches(event: &web_sys::Event) -> bool {
    use wasm_bindgen::JsCast;

    let Some(storage_event) = event.dyn_ref::<web_sys::StorageEvent>() else {
        return false;
    };
    match storage_event.key() {
        Some(key) => key == api::SESSION_STORAGE_KEY,
        None => true,
    }
}

/// A DOM event subscription that detaches itself when dropped, so clearing
/// the controller's listener list releases every callback at once.
#[cfg(feature = "hydrate")]
struct DomListener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "hydrate")]
impl DomListener {
    fn attach(
        target: web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        use wasm_bindgen::JsCast;

        let callback = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self { target, event, callback }
    }
}

#[cfg(feature = "hydrate")]
impl Drop for DomListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
