use api::{CampaignUpdate, CATEGORIES, STATUS_ACTIVE, STATUS_DRAFT};
use dioxus::prelude::*;

use ui::wizard::DraftError;
use ui::{toast_error, toast_success, use_api, use_toasts};

use super::RequireAdmin;
use crate::Route;

#[component]
pub fn EditCampaign(id: String) -> Element {
    rsx! {
        RequireAdmin { EditCampaignForm { id } }
    }
}

/// Field checks before the update is sent.
fn validated(mut update: CampaignUpdate, goal_input: &str) -> Result<CampaignUpdate, DraftError> {
    let missing: Vec<&'static str> = [("title", &update.title), ("description", &update.description), ("category", &update.category)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
    if !missing.is_empty() {
        return Err(DraftError::MissingFields(missing));
    }
    update.goal_amount = goal_input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|goal| goal.is_finite() && *goal > 0.0)
        .ok_or(DraftError::InvalidGoal)?;
    update.image_url = update.image_url.filter(|url| !url.trim().is_empty());
    Ok(update)
}

#[component]
fn EditCampaignForm(id: String) -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut form = use_signal(|| None::<CampaignUpdate>);
    let mut goal_input = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let load_client = client.clone();
    let _loader = use_resource(use_reactive((&id,), move |(id,)| {
        let client = load_client.clone();
        async move {
            match client.get_campaign(&id).await {
                Ok(campaign) => {
                    goal_input.set(format!("{}", campaign.goal_amount));
                    form.set(Some(CampaignUpdate::from(&campaign)));
                }
                Err(e) => {
                    toast_error(&mut toasts, e.user_message("Failed to load campaign"));
                    nav.push(Route::AdminDashboard {});
                }
            }
        }
    }));

    let save_id = id.clone();
    let save = move |e: FormEvent| {
        e.prevent_default();
        let client = client.clone();
        let id = save_id.clone();
        async move {
            let Some(current) = form.peek().clone() else {
                return;
            };
            let update = match validated(current, &goal_input.peek()) {
                Ok(update) => update,
                Err(e) => return toast_error(&mut toasts, e.to_string()),
            };
            saving.set(true);
            match client.update_campaign(&id, &update).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Campaign updated successfully!");
                    nav.push(Route::AdminDashboard {});
                }
                Err(e) => toast_error(&mut toasts, e.user_message("Failed to update campaign")),
            }
            saving.set(false);
        }
    };

    let Some(current) = form() else {
        return rsx! { div { class: "loader" } };
    };
    let image_url = current.image_url.clone().unwrap_or_default();

    rsx! {
        div {
            class: "container",
            style: "max-width: 800px",
            h1 { "Edit Campaign" }
            form {
                onsubmit: save,
                div {
                    class: "form-field",
                    label { "Title" }
                    input {
                        value: "{current.title}",
                        oninput: move |e| {
                            if let Some(f) = form.write().as_mut() {
                                f.title = e.value();
                            }
                        },
                    }
                }
                div {
                    class: "form-field",
                    label { "Description" }
                    textarea {
                        rows: "8",
                        value: "{current.description}",
                        oninput: move |e| {
                            if let Some(f) = form.write().as_mut() {
                                f.description = e.value();
                            }
                        },
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        style: "flex: 1",
                        label { "Category" }
                        select {
                            value: "{current.category}",
                            onchange: move |e| {
                                if let Some(f) = form.write().as_mut() {
                                    f.category = e.value();
                                }
                            },
                            // Keep a legacy category selectable.
                            if !CATEGORIES.contains(&current.category.as_str()) {
                                option { value: "{current.category}", "{current.category}" }
                            }
                            for name in CATEGORIES {
                                option { key: "{name}", value: name, "{name}" }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        style: "flex: 1",
                        label { "Funding Goal ($)" }
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{goal_input}",
                            oninput: move |e| goal_input.set(e.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        style: "flex: 1",
                        label { "Status" }
                        select {
                            value: "{current.status}",
                            onchange: move |e| {
                                if let Some(f) = form.write().as_mut() {
                                    f.status = e.value();
                                }
                            },
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
                        value: "{image_url}",
                        oninput: move |e| {
                            if let Some(f) = form.write().as_mut() {
                                f.image_url = Some(e.value());
                            }
                        },
                    }
                }
                div {
                    class: "form-actions",
                    button {
                        class: "secondary",
                        r#type: "button",
                        onclick: move |_| { nav.push(Route::AdminDashboard {}); },
                        "Cancel"
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
