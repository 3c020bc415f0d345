mod layout;
pub use layout::AppLayout;

mod guard;
pub use guard::{RequireAdmin, RequireUser};

mod home;
pub use home::Home;

mod discover;
pub use discover::Discover;

mod campaign_detail;
pub use campaign_detail::CampaignDetail;

mod create_campaign;
pub use create_campaign::CreateCampaign;

mod edit_campaign;
pub use edit_campaign::EditCampaign;

mod my_campaigns;
pub use my_campaigns::MyCampaigns;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod analytics;
pub use analytics::Analytics;

mod not_found;
pub use not_found::NotFound;
