//! # API crate — typed client for the FundLens backend
//!
//! Every page of the web client talks to the backend through [`ApiClient`]. The
//! client speaks JSON over HTTP to `<backend>/api`, authenticates with the bearer
//! token kept in a [`store::TokenStore`], and turns every failure into an
//! [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Request building, bearer auth, status mapping, 401 token clearing |
//! | [`error`] | `ApiError` and the backend `detail` extraction |
//! | [`models`] | Request and response bodies (campaigns, comments, payments, AI, analytics, admin) |
//!
//! ## Endpoints
//!
//! Endpoint methods are grouped by backend area, each in its own `impl ApiClient`:
//!
//! - **Session**: `current_user`, `login`, `register`, `google_login_url`,
//!   `complete_google_login`, `logout`
//! - **Campaigns**: `list_campaigns`, `get_campaign`, `my_campaigns`,
//!   `create_campaign`, `update_campaign`, `delete_campaign`, `campaign_analysis`,
//!   `campaign_analyses`, `comments`, `post_comment`
//! - **Payments**: `create_checkout`, `payment_status`
//! - **AI assist**: `optimize_title`, `enhance_description`, `success_prediction`,
//!   `marketing_strategy`, `chat`
//! - **Analytics**: `monte_carlo`, `competitor_analysis`, `strategic_recommendations`
//! - **Admin**: `admin_campaigns`, `admin_users`, `admin_stats`

pub mod client;
pub mod error;
pub mod models;

mod admin;
mod analytics;
mod assist;
mod campaigns;
mod payments;
mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::*;
pub use session::SESSION_ID_HEADER;
