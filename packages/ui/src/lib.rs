//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const FUNDLENS_CSS: Asset = asset!("/assets/fundlens.css");

pub mod platform;

mod client;
pub use client::{load_config, make_client, use_api, use_client_config};

pub mod views;

mod navbar;
pub use navbar::{Navbar, UserMenu};

mod auth;
pub use auth::{
    close_auth_modal, open_auth_modal, sign_in, use_auth, AuthProvider, AuthState, LoginButton,
    LogoutButton,
};

pub mod bootstrap;

mod auth_modal;
pub use auth_modal::AuthModal;

pub mod toast;
pub use toast::{toast_error, toast_info, toast_success, use_toasts, Toaster, Toasts};

pub mod discover;
pub mod payment_poll;
pub mod wizard;

mod campaign_card;
pub use campaign_card::{CampaignCard, FundingProgress};

pub mod analytics;
pub use analytics::{CompetitorAnalysisPanel, MonteCarloPanel, SuccessPredictionPanel};

mod ai_insights;
pub use ai_insights::{MarketingCard, PredictionCard};

mod chat_widget;
pub use chat_widget::{ChatLog, ChatWidget};
