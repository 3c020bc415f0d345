//! Client-side filtering for the discover page.

use api::Campaign;

/// Category option that disables the category filter.
pub const ALL_CATEGORIES: &str = "all";

/// Campaigns whose title or description contains `query` (case-insensitive),
/// restricted to `category` unless it is [`ALL_CATEGORIES`].
pub fn filter_campaigns<'a>(campaigns: &'a [Campaign], query: &str, category: &str) -> Vec<&'a Campaign> {
    let needle = query.to_lowercase();
    campaigns
        .iter()
        .filter(|c| {
            c.title.to_lowercase().contains(&needle) || c.description.to_lowercase().contains(&needle)
        })
        .filter(|c| category == ALL_CATEGORIES || c.category == category)
        .collect()
}

/// `all` followed by every distinct category, in list order.
pub fn category_options(campaigns: &[Campaign]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for campaign in campaigns {
        if !options.iter().skip(1).any(|o| *o == campaign.category) {
            options.push(campaign.category.clone());
        }
    }
    options
}

/// Text shown for a category option.
pub fn category_label(option: &str) -> &str {
    if option == ALL_CATEGORIES {
        "All categories"
    } else {
        option
    }
}
