use dioxus::prelude::*;

use ui::{icons, open_auth_modal, use_auth, Icon, Navbar, UserMenu};

use crate::Route;

/// Navigation bar around every page. Pages wait for the startup session check
/// so guarded routes never see a half-restored user.
#[component]
pub fn AppLayout() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let state = auth();
    let is_admin = state.is_admin();
    let signed_in = state.user.is_some();

    let start_campaign = move |_| {
        if auth.peek().user.is_some() {
            nav.push(Route::CreateCampaign {});
        } else {
            open_auth_modal(&mut auth);
        }
    };

    rsx! {
        Navbar {
            div {
                class: "navbar-links",
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Discover {}, "Discover" }
                if signed_in {
                    Link { to: Route::Analytics {}, "Analytics" }
                }
            }
            div {
                class: "navbar-actions",
                button {
                    class: "primary",
                    onclick: start_campaign,
                    Icon { icon: icons::FaRocket, width: 14, height: 14 }
                    " Start Campaign"
                }
                UserMenu {
                    button {
                        class: "user-menu-item",
                        onclick: move |_| { nav.push(Route::MyCampaigns {}); },
                        "My Campaigns"
                    }
                    button {
                        class: "user-menu-item",
                        onclick: move |_| { nav.push(Route::Analytics {}); },
                        "Analytics"
                    }
                    if is_admin {
                        button {
                            class: "user-menu-item",
                            onclick: move |_| { nav.push(Route::AdminDashboard {}); },
                            "Admin Dashboard"
                        }
                    }
                }
            }
        }

        if state.loading {
            div { class: "loader" }
        } else {
            Outlet::<Route> {}
        }
    }
}
