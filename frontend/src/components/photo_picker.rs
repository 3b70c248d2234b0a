use api_client::PhotoUpload;
use common::app_const::MAX_PHOTOS_PER_UPLOAD;
use common::photos::{is_supported_image_format, photo_slots_left};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use crate::data_definitions::notifications::use_notifications;

/// File input that collects up to the upload limit of images into `picked`.
#[component]
pub fn PhotoPicker(mut picked: Signal<Vec<PhotoUpload>>) -> Element {
    let notifications = use_notifications();
    let picked_count = picked.read().len();
    let slots = photo_slots_left(picked_count);

    let on_files = move |evt: FormEvent| async move {
        let mut slots = photo_slots_left(picked.peek().len());
        let mut skipped = 0_usize;
        for file in evt.files() {
            let file_name = file.name();
            if slots == 0 || !is_supported_image_format(&file_name) {
                skipped += 1;
                continue;
            }
            match file.read_bytes().await {
                Ok(bytes) => {
                    let mime_type = file.content_type().unwrap_or_else(|| "application/octet-stream".to_string());
                    picked.write().push(PhotoUpload { file_name, mime_type, bytes: bytes.to_vec() });
                    slots -= 1;
                }
                Err(e) => {
                    tracing::error!("failed to read {file_name}: {e:?}");
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            notifications.info(format!(
                "Skipped {skipped} file(s). Up to {MAX_PHOTOS_PER_UPLOAD} JPG, PNG, GIF, WEBP or SVG images are accepted."
            ));
        }
    };

    rsx! {
        div {
            class: "x-photo-picker",
            style: "display: flex; flex-direction: column; gap: 8px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 10px;",
                input {
                    r#type: "file",
                    accept: "image/*",
                    multiple: true,
                    disabled: slots == 0,
                    onchange: on_files,
                }
                span { style: "font-size: 13px; color: #6B7280;", "{picked_count}/{MAX_PHOTOS_PER_UPLOAD} photos" }
            }
            if picked_count > 0 {
                ul {
                    style: "list-style: none; padding: 0; margin: 0; display: flex; flex-wrap: wrap; gap: 6px;",
                    for (i, photo) in picked.read().iter().enumerate() {
                        li {
                            key: "{i}-{photo.file_name}",
                            style: "display: inline-flex; align-items: center; gap: 4px; padding: 3px 8px; border-radius: 999px; background: #F3F4F6; font-size: 13px;",
                            "{photo.file_name}"
                            button {
                                style: "border: none; background: transparent; cursor: pointer; display: flex;",
                                onclick: move |_| {
                                    picked.write().remove(i);
                                },
                                Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
                            }
                        }
                    }
                }
            }
        }
    }
}
