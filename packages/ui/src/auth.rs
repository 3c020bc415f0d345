//! Signed-in user shared through context, plus the login and logout buttons.

use api::UserInfo;
use dioxus::prelude::*;

use crate::bootstrap::{complete_oauth_redirect, restore_session};
use crate::client::use_api;
use crate::platform;
use crate::toast::{toast_error, use_toasts};

/// Who is signed in, and whether the auth modal is showing.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True until the startup session check has settled.
    pub loading: bool,
    /// Whether the login/register modal is open.
    pub show_modal: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            show_modal: false,
        }
    }
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}

/// The auth signal installed by [`AuthProvider`].
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn open_auth_modal(auth: &mut Signal<AuthState>) {
    auth.write().show_modal = true;
}

pub fn close_auth_modal(auth: &mut Signal<AuthState>) {
    auth.write().show_modal = false;
}

/// Replace the signed-in user and close the modal.
pub fn sign_in(auth: &mut Signal<AuthState>, user: UserInfo) {
    let mut state = auth.write();
    state.user = Some(user);
    state.loading = false;
    state.show_modal = false;
}

/// Owns the auth signal for everything below it.
///
/// On mount it restores the stored session and, independently, finishes a
/// Google sign-in left in the URL fragment. Whichever resolves last decides the
/// user shown.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_api();
    let mut auth_state = use_signal(AuthState::default);

    let restore_client = client.clone();
    let _ = use_resource(move || {
        let client = restore_client.clone();
        async move {
            let user = restore_session(&client).await;
            let mut state = auth_state.write();
            state.user = user;
            state.loading = false;
        }
    });

    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            let fragment = platform::location_hash();
            let clean_url = format!("{}{}", platform::location_path(), platform::location_search());
            let user = complete_oauth_redirect(&client, &fragment, || platform::replace_url(&clean_url)).await;
            if let Some(user) = user {
                sign_in(&mut auth_state, user);
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Ends the backend session, then reloads the app at `/`.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_api();
    let mut auth_state = use_auth();
    let mut toasts = use_toasts();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            match client.logout().await {
                Ok(()) => {
                    auth_state.write().user = None;
                    platform::redirect("/");
                }
                Err(e) => toast_error(&mut toasts, e.user_message("Logout failed")),
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Button that opens the login/register modal.
#[component]
pub fn LoginButton(
    #[props(default = "Login".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| open_auth_modal(&mut auth_state),
            "{label}"
        }
    }
}
