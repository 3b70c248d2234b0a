//! Form for proposing a new study space.

use api_client::PhotoUpload;
use common::building::Campus;
use common::facets::NoiseLevel;
use common::submission::{AMENITY_CHOICES, DESCRIPTION_MAX_CHARS, PRIVACY_CHOICES, SubmissionDraft};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

use crate::api::identity::{open_sign_in, use_current_user};
use crate::api::services::use_services;
use crate::components::photo_picker::PhotoPicker;
use crate::data_definitions::notifications::use_notifications;
use crate::routes::Route;

#[component]
pub fn SubmitPage() -> Element {
    let services = use_services();
    let notifications = use_notifications();
    let user = use_current_user();

    let mut draft = use_signal(SubmissionDraft::default);
    let photos = use_signal(Vec::<PhotoUpload>::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = services.client.clone();
        async move {
            let Some(user) = user() else {
                notifications.info("Sign in to submit a space");
                open_sign_in();
                return;
            };
            let form = draft.peek().clone();
            if let Err(e) = form.validate() {
                notifications.error(e.to_string());
                return;
            }
            submitting.set(true);

            let picked = photos.peek().clone();
            let mut photo_urls = Vec::new();
            if !picked.is_empty() {
                match client.upload_photos(picked).await {
                    Ok(urls) => photo_urls = urls,
                    Err(e) => tracing::warn!("submission photo upload failed, continuing without photos: {e}"),
                }
            }

            let outcome = match form.into_request(&user.id, photo_urls) {
                Ok(request) => client.create_submission(&request).await.map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            submitting.set(false);
            match outcome {
                Ok(created) => {
                    tracing::info!("created submission {}", created.id);
                    notifications.success("Thank you! Your submission will be reviewed.");
                    navigator().push(Route::HomePage {});
                }
                Err(e) => notifications.error(format!("Submission failed: {e}")),
            }
        }
    };

    let description_len = draft.read().description.chars().count();

    rsx! {
        Title { "Study Spaces - Submit a Space" }
        div {
            id: "x-submit-page",
            style: "display: flex; flex-direction: column; gap: 18px; padding: 28px 36px; max-width: 760px;",
            h1 { style: "font-size: 32px; font-weight: 500; color: #00274C; margin: 0;", "Submit a Study Space" }
            p { style: "color: #4B5563; margin: 0;", "Know a great place to study that is not listed? Tell us about it." }
            form {
                style: "display: flex; flex-direction: column; gap: 14px;",
                onsubmit: on_submit,

                FormField { label: "Space name *",
                    input {
                        r#type: "text",
                        style: INPUT_STYLE,
                        value: "{draft.read().name}",
                        oninput: move |e| { draft.write().name = e.value(); },
                    }
                }
                FormField { label: "Building *",
                    input {
                        r#type: "text",
                        style: INPUT_STYLE,
                        value: "{draft.read().building}",
                        oninput: move |e| { draft.write().building = e.value(); },
                    }
                }
                FormField { label: "Campus *",
                    select {
                        style: INPUT_STYLE,
                        onchange: move |e| { draft.write().campus = e.value(); },
                        option { value: "", selected: draft.read().campus.is_empty(), "Select a campus" }
                        for campus in Campus::ALL {
                            option { key: "{campus}", value: "{campus}", selected: draft.read().campus == campus.as_str(), "{campus.title()}" }
                        }
                    }
                }
                FormField { label: "Description ({description_len}/{DESCRIPTION_MAX_CHARS})",
                    textarea {
                        rows: "4",
                        style: INPUT_STYLE,
                        value: "{draft.read().description}",
                        oninput: move |e| { draft.write().description = e.value(); },
                    }
                }
                FormField { label: "Noise level",
                    select {
                        style: INPUT_STYLE,
                        onchange: move |e| { draft.write().noise_level = e.value(); },
                        option { value: "", "Not sure" }
                        for level in NoiseLevel::ALL {
                            option { key: "{level.as_str()}", value: "{level.as_str()}", "{level.icon()} {level.label()}" }
                        }
                    }
                }
                FormField { label: "Privacy",
                    select {
                        style: INPUT_STYLE,
                        onchange: move |e| { draft.write().privacy_level = e.value(); },
                        option { value: "", "Not sure" }
                        for (value, label) in PRIVACY_CHOICES {
                            option { key: "{value}", value: "{value}", "{label}" }
                        }
                    }
                }
                FormField { label: "Amenities",
                    div {
                        style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px 16px;",
                        for amenity in AMENITY_CHOICES {
                            div {
                                key: "{amenity}",
                                class: "x-facet-list-item",
                                style: "display: inline-flex; align-items: center; gap: 6px; cursor: pointer; padding: 2px 4px;",
                                onclick: move |_| draft.write().toggle_amenity(amenity),
                                if draft.read().amenities.iter().any(|a| a == amenity) {
                                    Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #00274C;" }
                                } else {
                                    Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px;" }
                                }
                                "{amenity}"
                            }
                        }
                    }
                }
                FormField { label: "Photos",
                    PhotoPicker { picked: photos }
                }
                button {
                    r#type: "submit",
                    disabled: submitting(),
                    style: "align-self: flex-start; border: none; border-radius: 8px; padding: 10px 18px; background: #00274C; color: white; font-size: 15px; cursor: pointer;",
                    if submitting() { "Submitting..." } else { "Submit for review" }
                }
            }
        }
    }
}

#[component]
fn FormField(label: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            span { style: "font-size: 14px; font-weight: 500; color: #374151;", "{label}" }
            {children}
        }
    }
}

const INPUT_STYLE: &str = "font-family: inherit; font-size: 15px; padding: 8px 10px; border-radius: 8px; border: 1px solid #D1D5DB; background: white;";
