//! Login / register dialog, opened from anywhere through the auth context.

use api::{LoginRequest, RegisterRequest};
use dioxus::prelude::*;

use crate::auth::{close_auth_modal, sign_in, use_auth};
use crate::client::use_api;
use crate::platform;
use crate::toast::{toast_error, toast_success, use_toasts};
use crate::views::ModalOverlay;

#[derive(Clone, Copy, Debug, PartialEq)]
enum AuthTab {
    Login,
    Register,
}

#[component]
pub fn AuthModal() -> Element {
    let mut auth = use_auth();
    let client = use_api();
    let mut toasts = use_toasts();

    let mut tab = use_signal(|| AuthTab::Login);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    if !auth().show_modal {
        return rsx! {};
    }

    let submit_client = client.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = submit_client.clone();
        async move {
            submitting.set(true);
            let result = match tab() {
                AuthTab::Login => client
                    .login(&LoginRequest {
                        email: email(),
                        password: password(),
                    })
                    .await
                    .map_err(|e| e.user_message("Login failed")),
                AuthTab::Register => client
                    .register(&RegisterRequest {
                        email: email(),
                        password: password(),
                        name: name(),
                    })
                    .await
                    .map_err(|e| e.user_message("Registration failed")),
            };
            submitting.set(false);

            match result {
                Ok(session) => {
                    sign_in(&mut auth, session.user);
                    password.set(String::new());
                    let message = match tab() {
                        AuthTab::Login => "Logged in successfully!",
                        AuthTab::Register => "Account created successfully!",
                    };
                    toast_success(&mut toasts, message);
                }
                Err(message) => toast_error(&mut toasts, message),
            }
        }
    };

    let on_google = move |_| {
        let client = client.clone();
        async move {
            match client.google_login_url().await {
                Ok(url) => platform::redirect(&url),
                Err(e) => {
                    tracing::error!("Failed to get login URL: {}", e);
                    toast_error(&mut toasts, "Failed to initiate Google login");
                }
            }
        }
    };

    let is_register = tab() == AuthTab::Register;

    rsx! {
        ModalOverlay {
            title: if is_register { "Create your account" } else { "Welcome back" },
            on_close: move |_| close_auth_modal(&mut auth),

            div {
                class: "auth-tabs",
                button {
                    class: if !is_register { "auth-tab active" } else { "auth-tab" },
                    onclick: move |_| tab.set(AuthTab::Login),
                    "Login"
                }
                button {
                    class: if is_register { "auth-tab active" } else { "auth-tab" },
                    onclick: move |_| tab.set(AuthTab::Register),
                    "Register"
                }
            }

            form {
                class: "auth-form",
                onsubmit: on_submit,
                if is_register {
                    label { "Name" }
                    input {
                        r#type: "text",
                        required: true,
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                label { "Email" }
                input {
                    r#type: "email",
                    required: true,
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                label { "Password" }
                input {
                    r#type: "password",
                    required: true,
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() {
                        "Please wait..."
                    } else if is_register {
                        "Create Account"
                    } else {
                        "Login"
                    }
                }
            }

            div { class: "auth-divider", "or" }

            button {
                class: "google-btn",
                onclick: on_google,
                "Continue with Google"
            }
        }
    }
}
