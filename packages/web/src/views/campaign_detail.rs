use api::{Campaign, CampaignAnalysis, Comment};
use dioxus::prelude::*;

use ui::payment_poll::{poll_checkout, remove_query_param, session_id_from_query, PollOutcome, PollPolicy, CHECKOUT_SESSION_PARAM};
use ui::{
    icons, open_auth_modal, platform, toast_error, toast_info, toast_success, use_api, use_auth, use_client_config,
    use_toasts, FundingProgress, Icon,
};

use crate::Route;

#[component]
pub fn CampaignDetail(id: String) -> Element {
    let client = use_api();
    let config = use_client_config();
    let mut auth = use_auth();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut campaign = use_signal(|| None::<Campaign>);
    let mut analysis = use_signal(|| None::<CampaignAnalysis>);
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut new_comment = use_signal(String::new);
    let mut confirming_payment = use_signal(|| false);
    let mut pledging = use_signal(|| false);
    let mut posting = use_signal(|| false);

    let load_client = client.clone();
    let _loader = use_resource(use_reactive((&id,), move |(id,)| {
        let client = load_client.clone();
        async move {
            let (found, scored, thread) = futures::join!(
                client.get_campaign(&id),
                client.campaign_analysis(&id),
                client.comments(&id),
            );
            match found {
                Ok(found) => campaign.set(Some(found)),
                Err(e) => {
                    toast_error(&mut toasts, e.user_message("Failed to load campaign"));
                    nav.push(Route::Discover {});
                    return;
                }
            }
            match scored {
                Ok(scored) => analysis.set(Some(scored)),
                Err(e) => tracing::warn!("no analysis for campaign {}: {}", id, e),
            }
            match thread {
                Ok(thread) => comments.set(thread),
                Err(e) => tracing::warn!("comments for campaign {} unavailable: {}", id, e),
            }
        }
    }));

    // Returning from checkout: drop the session id from the address bar and
    // poll for the outcome. The task belongs to this view and stops with it.
    let poll_client = client.clone();
    let poll_id = id.clone();
    use_hook(move || {
        let search = platform::location_search();
        let Some(session_id) = session_id_from_query(&search) else {
            return;
        };
        let remaining = remove_query_param(&search, CHECKOUT_SESSION_PARAM);
        platform::replace_url(&format!("{}{}", platform::location_path(), remaining));

        let policy = PollPolicy::from(&config.payments);
        confirming_payment.set(true);
        spawn(async move {
            match poll_checkout(&poll_client, &session_id, policy).await {
                PollOutcome::Paid(_) => {
                    toast_success(&mut toasts, "Payment successful! Thank you for backing this campaign.");
                    match poll_client.get_campaign(&poll_id).await {
                        Ok(updated) => campaign.set(Some(updated)),
                        Err(e) => tracing::warn!("could not refresh campaign after payment: {}", e),
                    }
                }
                PollOutcome::StillProcessing => {
                    toast_info(&mut toasts, "Payment processing - please check back shortly");
                }
            }
            confirming_payment.set(false);
        });
    });

    let pledge_client = client.clone();
    let pledge_id = id.clone();
    let back_project = move |_| {
        let client = pledge_client.clone();
        let id = pledge_id.clone();
        async move {
            if auth.peek().user.is_none() {
                open_auth_modal(&mut auth);
                return;
            }
            pledging.set(true);
            match client.create_checkout(&id, &platform::origin()).await {
                Ok(checkout) => platform::redirect(&checkout.url),
                Err(e) => toast_error(&mut toasts, e.user_message("Failed to initiate payment")),
            }
            pledging.set(false);
        }
    };

    let comment_id = id.clone();
    let post_comment = move |e: FormEvent| {
        e.prevent_default();
        let client = client.clone();
        let id = comment_id.clone();
        async move {
            let content = new_comment.peek().trim().to_string();
            if content.is_empty() {
                return;
            }
            posting.set(true);
            match client.post_comment(&id, &content).await {
                Ok(comment) => {
                    comments.write().insert(0, comment);
                    new_comment.set(String::new());
                    toast_success(&mut toasts, "Comment posted!");
                }
                Err(e) => toast_error(&mut toasts, e.user_message("Failed to post comment")),
            }
            posting.set(false);
        }
    };

    let Some(campaign) = campaign() else {
        return rsx! { div { class: "loader" } };
    };

    let signed_in = auth().user.is_some();
    let goal_label = format!("${:.0}", campaign.goal_amount);
    let duration_label = campaign.duration_days.map(|days| format!("{days} days"));
    let score = analysis().map(|a| (a.success_probability.round(), a.analysis_text));
    let creator = format!("by {}", campaign.creator_display_name());
    let thread: Vec<(Comment, Option<String>)> = comments
        .read()
        .iter()
        .map(|c| (c.clone(), c.created_at.map(|at| at.format("%b %d, %Y").to_string())))
        .collect();
    let comment_count = thread.len();

    rsx! {
        div {
            class: "container",
            button {
                class: "secondary",
                onclick: move |_| { nav.push(Route::Discover {}); },
                Icon { icon: icons::FaArrowLeft, width: 12, height: 12 }
                " Back to campaigns"
            }

            if confirming_payment() {
                div { class: "processing-notice", "Confirming your payment..." }
            }

            div {
                class: "detail-layout",
                div {
                    if let Some(url) = campaign.image_url.clone() {
                        img { class: "campaign-card-image", src: "{url}", alt: "{campaign.title}" }
                    }
                    span { class: "category-badge", "{campaign.category}" }
                    h1 { "{campaign.title}" }
                    p { class: "comment-meta", "{creator}" }
                    p { "{campaign.description}" }
                    div {
                        for tag in campaign.tags.iter() {
                            span { key: "{tag}", class: "tag", "#{tag}" }
                        }
                    }

                    h2 { "Comments ({comment_count})" }
                    if signed_in {
                        form {
                            onsubmit: post_comment,
                            div {
                                class: "form-field",
                                textarea {
                                    placeholder: "Share your thoughts...",
                                    value: "{new_comment}",
                                    oninput: move |e| new_comment.set(e.value()),
                                }
                            }
                            button {
                                class: "primary",
                                r#type: "submit",
                                disabled: posting() || new_comment.read().trim().is_empty(),
                                if posting() { "Posting..." } else { "Post Comment" }
                            }
                        }
                    } else {
                        p {
                            class: "comment-meta",
                            button {
                                class: "secondary",
                                onclick: move |_| open_auth_modal(&mut auth),
                                "Log in"
                            }
                            " to join the conversation."
                        }
                    }
                    for (comment, posted) in thread {
                        div {
                            key: "{comment.id}",
                            class: "comment",
                            p {
                                class: "comment-meta",
                                strong { "{comment.user_name}" }
                                if let Some(posted) = posted {
                                    " · {posted}"
                                }
                            }
                            p { "{comment.content}" }
                        }
                    }
                }

                aside {
                    class: "detail-sidebar",
                    FundingProgress { raised: campaign.raised_amount, goal: campaign.goal_amount }
                    div {
                        class: "stats-grid",
                        style: "grid-template-columns: repeat(2, 1fr)",
                        div { class: "stat", strong { "{campaign.backers_count}" } "backers" }
                        div { class: "stat", strong { "{goal_label}" } "goal" }
                        if let Some(duration) = duration_label {
                            div { class: "stat", strong { "{duration}" } "duration" }
                        }
                    }

                    if let Some((probability, text)) = score {
                        div {
                            class: "ai-card",
                            h4 {
                                Icon { icon: icons::FaBrain, width: 14, height: 14 }
                                " AI Success Analysis: {probability}%"
                            }
                            p { "{text}" }
                        }
                    }

                    if !campaign.reward_tiers.is_empty() {
                        h3 { "Rewards" }
                        for (index, tier) in campaign.reward_tiers.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "tier",
                                strong { {format!("${:.0} or more", tier.amount)} }
                                p { "{tier.description}" }
                            }
                        }
                    }

                    button {
                        class: "primary",
                        style: "width: 100%",
                        disabled: pledging() || !campaign.is_active(),
                        onclick: back_project,
                        if pledging() { "Redirecting..." } else { "Back this project" }
                    }
                }
            }
        }
    }
}
