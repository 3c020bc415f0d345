use dioxus::prelude::*;

use crate::auth::{use_auth, LoginButton, LogoutButton};

/// Top navigation bar. Links are supplied by the app, which owns the routes.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            a {
                class: "navbar-brand",
                href: "/",
                span { class: "navbar-logo", "⚡" }
                "FundLens"
            }
            {children}
        }
    }
}

/// Avatar with a dropdown for the signed-in user, or a login button.
/// `children` are the dropdown entries above "Logout".
#[component]
pub fn UserMenu(children: Element) -> Element {
    let auth = use_auth();
    let mut open = use_signal(|| false);
    let state = auth();

    if state.loading {
        return rsx! {};
    }

    let Some(user) = state.user else {
        return rsx! {
            LoginButton { class: "primary" }
        };
    };

    let display = user.display_name().to_string();
    let initial = user.initial();

    rsx! {
        div {
            class: "user-menu",
            button {
                class: "avatar",
                title: "{display}",
                onclick: move |_| open.toggle(),
                if let Some(picture) = user.picture.clone() {
                    img { src: "{picture}", alt: "{display}" }
                } else {
                    span { "{initial}" }
                }
            }
            if open() {
                div {
                    class: "user-menu-dropdown",
                    onclick: move |_| open.set(false),
                    div {
                        class: "user-menu-identity",
                        p { class: "user-menu-name", "{display}" }
                        p { class: "user-menu-email", "{user.email}" }
                    }
                    {children}
                    LogoutButton { class: "user-menu-item danger" }
                }
            }
        }
    }
}
