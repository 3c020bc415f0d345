use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{AuthModal, AuthProvider, ChatWidget, Toaster, Toasts};
use views::{
    AdminDashboard, Analytics, AppLayout, CampaignDetail, CreateCampaign, Discover, EditCampaign, Home,
    MyCampaigns, NotFound,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/discover")]
        Discover {},
        #[route("/campaign/:id")]
        CampaignDetail { id: String },
        #[route("/campaign/:id/edit")]
        EditCampaign { id: String },
        #[route("/create-campaign")]
        CreateCampaign {},
        #[route("/my-campaigns")]
        MyCampaigns {},
        #[route("/admin")]
        AdminDashboard {},
        #[route("/analytics")]
        Analytics {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialise logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ui::load_config);
    let client = use_hook(|| ui::make_client(&config));
    tracing::info!("FundLens client talking to {}", client.base_url());

    use_context_provider(|| config.clone());
    use_context_provider(|| client.clone());
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::FUNDLENS_CSS }

        AuthProvider {
            Router::<Route> {}
            AuthModal {}
            ChatWidget {}
        }
        Toaster {}
    }
}
