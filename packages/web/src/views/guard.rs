//! Route guards. Both wait for the session check to settle, then either render
//! their children or send the visitor home.

use dioxus::prelude::*;

use ui::{use_auth, AuthState};

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Access {
    User,
    Admin,
}

impl Access {
    fn allows(self, state: &AuthState) -> bool {
        match self {
            Access::User => state.user.is_some(),
            Access::Admin => state.is_admin(),
        }
    }
}

#[component]
pub fn RequireUser(children: Element) -> Element {
    rsx! {
        Guard { access: Access::User, {children} }
    }
}

#[component]
pub fn RequireAdmin(children: Element) -> Element {
    rsx! {
        Guard { access: Access::Admin, {children} }
    }
}

#[component]
fn Guard(access: Access, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if !state.loading && !access.allows(&state) {
            tracing::info!("{:?} access required, redirecting home", access);
            nav.replace(Route::Home {});
        }
    });

    let state = auth();
    if state.loading {
        return rsx! { div { class: "loader" } };
    }
    if !access.allows(&state) {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
