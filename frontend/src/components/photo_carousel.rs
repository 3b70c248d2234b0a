use common::photos::{filter_supported_images, normalize_image_path};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronLeft, MdChevronRight};

/// One photo at a time with wrap-around arrows; "View all photos" switches to a grid.
#[component]
pub fn PhotoCarousel(photos: ReadSignal<Vec<String>>, alt: String) -> Element {
    let images = use_memo(move || {
        filter_supported_images(&photos.read()).iter().map(|p| normalize_image_path(p)).filter(|p| !p.is_empty()).collect::<Vec<_>>()
    });
    let mut index = use_signal(|| 0_usize);
    let mut show_all = use_signal(|| false);

    let count = images.read().len();
    if count == 0 {
        return rsx! {
            div {
                style: "width: 100%; height: 260px; border-radius: 14px; background: #E5E7EB; display: flex; align-items: center; justify-content: center; color: #6B7280;",
                "No photos yet"
            }
        };
    }
    let current = index() % count;
    let src = images.read()[current].clone();

    rsx! {
        div {
            id: "x-photo-carousel",
            style: "display: flex; flex-direction: column; gap: 8px; width: 100%;",
            if show_all() {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 8px;",
                    for (i, photo) in images.read().iter().cloned().enumerate() {
                        img {
                            key: "{photo}",
                            src: "{photo}",
                            alt: "{alt}",
                            style: "width: 100%; height: 140px; object-fit: cover; border-radius: 8px; cursor: pointer;",
                            onclick: move |_| {
                                index.set(i);
                                show_all.set(false);
                            },
                        }
                    }
                }
            } else {
                div {
                    style: "position: relative; width: 100%; height: 360px; border-radius: 14px; overflow: hidden; background: #111827;",
                    img { src: "{src}", alt: "{alt}", style: "width: 100%; height: 100%; object-fit: contain;" }
                    if count > 1 {
                        button {
                            style: "{ARROW_STYLE} left: 10px;",
                            onclick: move |_| index.set((current + count - 1) % count),
                            Icon { icon: MdChevronLeft, style: "width: 28px; height: 28px;" }
                        }
                        button {
                            style: "{ARROW_STYLE} right: 10px;",
                            onclick: move |_| index.set((current + 1) % count),
                            Icon { icon: MdChevronRight, style: "width: 28px; height: 28px;" }
                        }
                        div {
                            style: "position: absolute; bottom: 10px; right: 14px; color: white; font-size: 13px; background: rgba(0,0,0,0.5); padding: 2px 8px; border-radius: 999px;",
                            "{current + 1} / {count}"
                        }
                    }
                }
            }
            if count > 1 {
                button {
                    style: "align-self: flex-start; border: none; background: transparent; color: #00274C; cursor: pointer; text-decoration: underline; font-size: 14px;",
                    onclick: move |_| show_all.toggle(),
                    if show_all() { "Back to slideshow" } else { "View All Photos ({count})" }
                }
            }
        }
    }
}

const ARROW_STYLE: &str = "
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    border: none;
    border-radius: 999px;
    width: 40px;
    height: 40px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(255,255,255,0.85);
    cursor: pointer;
";
