use contracts::system::auth::permissions::{self, Actor};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::Cell;

use super::{api, storage};

thread_local! {
    // Lets the HTTP layer end the session on a 401 without a reactive owner.
    static SESSION_SETTER: Cell<Option<WriteSignal<AuthState>>> = const { Cell::new(None) };
}

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub actor: Option<Actor>,
    /// Stored session has been checked against the server.
    pub restored: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.actor.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                set_auth_state.set(AuthState {
                    restored: true,
                    ..AuthState::default()
                });
                return;
            };
            match api::get_current_user().await {
                Ok(payload) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        actor: Actor::from_payload(&payload),
                        restored: true,
                    });
                }
                Err(e) => {
                    log::info!("stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState {
                        restored: true,
                        ..AuthState::default()
                    });
                }
            }
        });
    });

    SESSION_SETTER.with(|cell| cell.set(Some(set_auth_state)));
    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Drops the session after the server rejected the token.
pub fn expire_session() {
    storage::clear_tokens();
    if let Some(set_auth_state) = SESSION_SETTER.with(Cell::get) {
        set_auth_state.set(AuthState {
            restored: true,
            ..AuthState::default()
        });
    }
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Current actor, `None` while logged out.
pub fn use_actor() -> Signal<Option<Actor>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.actor.clone()))
}

/// Reactive `has_access` for the current actor. Fails closed while the
/// actor is unknown.
pub fn use_can(permission: &'static str) -> Signal<bool> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| permissions::has_access(s.actor.as_ref(), permission)))
}

/// Replace the actor with a fresh `/me` answer, e.g. after editing roles.
pub fn reload_actor(set_auth_state: WriteSignal<AuthState>) {
    spawn_local(async move {
        match api::get_current_user().await {
            Ok(payload) => {
                let actor = Actor::from_payload(&payload);
                set_auth_state.update(|s| s.actor = actor);
            }
            Err(e) => log::warn!("reloading current user failed: {}", e),
        }
    });
}

/// Helper: Perform login
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), contracts::shared::api_error::ApiError> {
    let response = api::login(email, password).await?;

    storage::save_access_token(&response.token);
    log::info!("signed in as {}", response.user.name);

    set_auth_state.set(AuthState {
        access_token: Some(response.token),
        actor: Some(Actor::from_user(&response.user)),
        restored: true,
    });

    Ok(())
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout().await {
        log::warn!("logout request failed: {}", e);
    }

    storage::clear_tokens();

    set_auth_state.set(AuthState {
        restored: true,
        ..AuthState::default()
    });
}
