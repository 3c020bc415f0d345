//! Data models exchanged with the backend.

mod admin;
mod ai;
mod analytics;
mod auth;
mod campaign;
mod payment;
mod user;

pub use admin::AdminStats;
pub use ai::{
    CampaignBrief, ChatReply, ChatRequest, EnhancedDescription, MarketingChannel, MarketingPhase,
    MarketingStrategy, PredictionRequest, SuccessPrediction, TargetAudience, TitleRequest,
    TitleSuggestions,
};
pub use analytics::{
    ActionRecommendation, CampaignAnalysis, Competitor, CompetitorAnalysis, MarketOverview,
    MonteCarloResult, PredictionSummary, ProgressionPoint, StrategicRecommendation,
    StrategicRecommendations, SUCCESS_BADGE_THRESHOLD,
};
pub use auth::{AuthSession, LoginRequest, LoginUrl, RegisterRequest};
pub use campaign::{
    funding_percentage, progress_width, Campaign, CampaignUpdate, Comment, NewCampaign,
    NewComment, RewardTier, CATEGORIES, STATUS_ACTIVE, STATUS_DRAFT,
};
pub use payment::{CheckoutRequest, CheckoutSession, PaymentStatus, PAYMENT_STATUS_PAID};
pub use user::{initial_of, UserInfo};
