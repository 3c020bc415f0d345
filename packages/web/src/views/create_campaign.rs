use api::{CATEGORIES, STATUS_ACTIVE, STATUS_DRAFT};
use dioxus::prelude::*;

use ui::wizard::{CampaignDraft, WizardStep, MAX_DURATION_DAYS, MIN_DURATION_DAYS};
use ui::{icons, toast_error, toast_success, use_api, use_toasts, Icon, MarketingCard, PredictionCard};

use super::RequireUser;
use crate::Route;

#[component]
pub fn CreateCampaign() -> Element {
    rsx! {
        RequireUser { CampaignWizard {} }
    }
}

#[component]
fn CampaignWizard() -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut draft = use_signal(CampaignDraft::default);
    let mut step = use_signal(WizardStep::default);
    let mut tag_input = use_signal(String::new);
    let mut tier_amount = use_signal(String::new);
    let mut tier_description = use_signal(String::new);

    let mut suggesting = use_signal(|| false);
    let mut enhancing = use_signal(|| false);
    let mut predicting = use_signal(|| false);
    let mut planning = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let mut add_tag = move || {
        let raw = tag_input.peek().clone();
        if draft.write().add_tag(&raw) {
            tag_input.set(String::new());
        }
    };

    let mut add_tier = move || {
        let result = draft
            .write()
            .add_reward_tier(&tier_amount.peek(), &tier_description.peek());
        match result {
            Ok(()) => {
                tier_amount.set(String::new());
                tier_description.set(String::new());
            }
            Err(e) => toast_error(&mut toasts, e.to_string()),
        }
    };

    // Leaving the basics needs everything a brief needs.
    let next_step = move |_| {
        let current = step();
        if current == WizardStep::Basics {
            if let Err(e) = draft.peek().brief() {
                toast_error(&mut toasts, e.to_string());
                return;
            }
        }
        if let Some(next) = current.next() {
            step.set(next);
        }
    };

    let prev_step = move |_| {
        if let Some(prev) = step().prev() {
            step.set(prev);
        }
    };

    let titles_client = client.clone();
    let suggest_titles = move |_| {
        let client = titles_client.clone();
        async move {
            let request = match draft.peek().title_request() {
                Ok(request) => request,
                Err(e) => return toast_error(&mut toasts, e.to_string()),
            };
            suggesting.set(true);
            match client.optimize_title(&request).await {
                Ok(titles) => {
                    draft.write().title_suggestions = titles;
                    toast_success(&mut toasts, "Title suggestions generated!");
                }
                Err(e) => toast_error(&mut toasts, e.user_message("Failed to generate title suggestions")),
            }
            suggesting.set(false);
        }
    };

    let enhance_client = client.clone();
    let enhance_description = move |_| {
        let client = enhance_client.clone();
        async move {
            let brief = match draft.peek().brief() {
                Ok(brief) => brief,
                Err(e) => return toast_error(&mut toasts, e.to_string()),
            };
            enhancing.set(true);
            match client.enhance_description(&brief).await {
                Ok(text) => {
                    if draft.write().set_enhanced_description(text) {
                        toast_success(&mut toasts, "Description enhanced!");
                    } else {
                        toast_error(&mut toasts, "Failed to enhance description");
                    }
                }
                Err(e) => toast_error(&mut toasts, e.user_message("Failed to enhance description")),
            }
            enhancing.set(false);
        }
    };

    let predict_client = client.clone();
    let predict_success = move |_| {
        let client = predict_client.clone();
        async move {
            let request = match draft.peek().prediction_request() {
                Ok(request) => request,
                Err(e) => return toast_error(&mut toasts, e.to_string()),
            };
            predicting.set(true);
            match client.success_prediction(&request).await {
                Ok(prediction) => {
                    draft.write().prediction = Some(prediction);
                    toast_success(&mut toasts, "Success prediction generated!");
                }
                Err(e) => toast_error(&mut toasts, e.user_message("Failed to generate success prediction")),
            }
            predicting.set(false);
        }
    };

    let marketing_client = client.clone();
    let plan_marketing = move |_| {
        let client = marketing_client.clone();
        async move {
            let brief = match draft.peek().brief() {
                Ok(brief) => brief,
                Err(e) => return toast_error(&mut toasts, e.to_string()),
            };
            planning.set(true);
            match client.marketing_strategy(&brief).await {
                Ok(strategy) => {
                    draft.write().marketing = Some(strategy);
                    toast_success(&mut toasts, "Marketing strategy generated!");
                }
                Err(e) => toast_error(&mut toasts, e.user_message("Failed to generate marketing strategy")),
            }
            planning.set(false);
        }
    };

    let submit = move |_| {
        let client = client.clone();
        async move {
            let payload = match draft.peek().to_payload() {
                Ok(payload) => payload,
                Err(e) => return toast_error(&mut toasts, e.to_string()),
            };
            submitting.set(true);
            match client.create_campaign(&payload).await {
                Ok(created) => {
                    toast_success(&mut toasts, "Campaign created successfully!");
                    nav.push(Route::CampaignDetail { id: created.id });
                }
                Err(e) => toast_error(&mut toasts, e.user_message("Failed to create campaign")),
            }
            submitting.set(false);
        }
    };

    let current = step();
    let form = draft();
    let duration = form.duration_days;

    rsx! {
        div {
            class: "container",
            style: "max-width: 800px",
            h1 { "Create Your Campaign" }

            div {
                class: "wizard-steps",
                for (number, s) in WizardStep::ALL.into_iter().map(|s| (s.number(), s)) {
                    div {
                        key: "{number}",
                        class: {
                            if s == current {
                                "wizard-step active"
                            } else if number < current.number() {
                                "wizard-step done"
                            } else {
                                "wizard-step"
                            }
                        },
                        {format!("{}. {}", number, s.label())}
                    }
                }
            }

            match current {
                WizardStep::Basics => rsx! {
                    div {
                        class: "form-field",
                        label { "Campaign Title *" }
                        input {
                            value: "{form.title}",
                            placeholder: "Give your campaign a memorable name",
                            oninput: move |e| draft.write().title = e.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Description *" }
                        textarea {
                            rows: "6",
                            value: "{form.description}",
                            placeholder: "What are you building and why does it matter?",
                            oninput: move |e| draft.write().description = e.value(),
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            style: "flex: 1",
                            label { "Category *" }
                            select {
                                value: "{form.category}",
                                onchange: move |e| draft.write().category = e.value(),
                                option { value: "", "Select a category" }
                                for name in CATEGORIES {
                                    option { key: "{name}", value: name, "{name}" }
                                }
                            }
                        }
                        div {
                            class: "form-field",
                            style: "flex: 1",
                            label { "Funding Goal ($) *" }
                            input {
                                r#type: "number",
                                min: "1",
                                value: "{form.goal_amount}",
                                oninput: move |e| draft.write().goal_amount = e.value(),
                            }
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            style: "flex: 1",
                            label { "Duration (days)" }
                            input {
                                r#type: "number",
                                min: "{MIN_DURATION_DAYS}",
                                max: "{MAX_DURATION_DAYS}",
                                value: "{duration}",
                                oninput: move |e| {
                                    if let Ok(days) = e.value().trim().parse::<u32>() {
                                        draft.write().set_duration(days);
                                    }
                                },
                            }
                        }
                        div {
                            class: "form-field",
                            style: "flex: 1",
                            label { "Status" }
                            select {
                                value: "{form.status}",
                                onchange: move |e| draft.write().status = e.value(),
                                option { value: STATUS_ACTIVE, "Active" }
                                option { value: STATUS_DRAFT, "Draft" }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Image URL" }
                        input {
                            r#type: "url",
                            value: "{form.image_url}",
                            placeholder: "https://...",
                            oninput: move |e| draft.write().image_url = e.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Tags" }
                        div {
                            class: "form-row",
                            input {
                                value: "{tag_input}",
                                placeholder: "Press Enter to add",
                                oninput: move |e| tag_input.set(e.value()),
                                onkeydown: move |e: KeyboardEvent| {
                                    if e.key() == Key::Enter {
                                        e.prevent_default();
                                        add_tag();
                                    }
                                },
                            }
                            button { class: "secondary", onclick: move |_| add_tag(), "Add" }
                        }
                        div {
                            for tag in form.tags.clone() {
                                span {
                                    key: "{tag}",
                                    class: "tag",
                                    "#{tag} "
                                    button {
                                        class: "toast-dismiss",
                                        onclick: move |_| draft.write().remove_tag(&tag),
                                        "×"
                                    }
                                }
                            }
                        }
                    }
                },
                WizardStep::Rewards => rsx! {
                    p { class: "panel-subtitle", "Reward tiers are optional. Tiers missing an amount or description are skipped." }
                    for (index, tier) in form.reward_tiers.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "tier",
                            div {
                                class: "suggestion",
                                strong { {format!("${:.0}", tier.amount)} }
                                button {
                                    class: "danger",
                                    onclick: move |_| draft.write().remove_reward_tier(index),
                                    Icon { icon: icons::FaTrash, width: 12, height: 12 }
                                }
                            }
                            p { "{tier.description}" }
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            style: "flex: 1",
                            label { "Amount ($)" }
                            input {
                                r#type: "number",
                                min: "1",
                                value: "{tier_amount}",
                                oninput: move |e| tier_amount.set(e.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            style: "flex: 3",
                            label { "What backers get" }
                            input {
                                value: "{tier_description}",
                                oninput: move |e| tier_description.set(e.value()),
                            }
                        }
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| add_tier(),
                        Icon { icon: icons::FaPlus, width: 12, height: 12 }
                        " Add Tier"
                    }
                },
                WizardStep::Optimize => rsx! {
                    div {
                        class: "ai-actions",
                        button {
                            class: "secondary",
                            disabled: suggesting(),
                            onclick: suggest_titles,
                            if suggesting() { "Generating..." } else { "Optimize Title" }
                        }
                        button {
                            class: "secondary",
                            disabled: enhancing(),
                            onclick: enhance_description,
                            if enhancing() { "Enhancing..." } else { "Enhance Description" }
                        }
                        button {
                            class: "secondary",
                            disabled: predicting(),
                            onclick: predict_success,
                            if predicting() { "Predicting..." } else { "Predict Success" }
                        }
                        button {
                            class: "secondary",
                            disabled: planning(),
                            onclick: plan_marketing,
                            if planning() { "Planning..." } else { "Marketing Strategy" }
                        }
                    }

                    if !form.title_suggestions.is_empty() {
                        div {
                            class: "ai-card",
                            h4 { "Title Suggestions" }
                            for suggestion in form.title_suggestions.clone() {
                                div {
                                    key: "{suggestion}",
                                    class: "suggestion",
                                    span { "{suggestion}" }
                                    button {
                                        class: "secondary",
                                        onclick: move |_| draft.write().apply_title(&suggestion),
                                        "Use"
                                    }
                                }
                            }
                        }
                    }

                    if let Some(enhanced) = form.enhanced_description.clone() {
                        div {
                            class: "ai-card",
                            h4 { "Enhanced Description" }
                            p { "{enhanced}" }
                            p { class: "panel-subtitle", "This description will be used when you launch." }
                            button {
                                class: "secondary",
                                onclick: move |_| draft.write().apply_enhanced_description(),
                                "Copy into description"
                            }
                        }
                    }

                    if let Some(prediction) = form.prediction.clone() {
                        h4 { "Success Prediction" }
                        PredictionCard { prediction }
                    }

                    if let Some(strategy) = form.marketing.clone() {
                        h4 { "Marketing Strategy" }
                        MarketingCard { strategy }
                    }
                },
            }

            div {
                class: "form-actions",
                button {
                    class: "secondary",
                    disabled: current.prev().is_none(),
                    onclick: prev_step,
                    "Back"
                }
                if current.next().is_some() {
                    button { class: "primary", onclick: next_step, "Next" }
                } else {
                    button {
                        class: "primary",
                        disabled: submitting(),
                        onclick: submit,
                        if submitting() { "Launching..." } else { "Launch Campaign" }
                    }
                }
            }
        }
    }
}
