//! Error boundaries. A failing page or widget shows its error in place and
//! leaves the rest of the session usable.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        id: "x-global-error",
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 12px;
                            padding: 32px;
                            max-width: 760px;
                        ",
                        h1 {
                            style: "color: #B91C1C; font-size: 40px; font-weight: 500; margin: 0;",
                            "Something went wrong"
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 18px; margin: 0;",
                            "While rendering: {boundary_name}"
                        }
                        // may render outside the router
                        a {
                            href: "/",
                            style: "color: #00274C; font-size: 18px; text-decoration: underline;",
                            "Back to campus selection"
                        }
                        pre {
                            style: "color: #111827; background: white; border: 1px solid #FCA5A5; padding: 12px; border-radius: 8px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #00274C; font-size: 16px; border: 1px solid #00274C; background: white; padding: 8px 14px; border-radius: 6px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

/// Inline error box used where a fetch failed but the page stays up.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-component-error",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 10px;
                padding: 16px;
                margin: 10px 0;
                border: 1px solid #FCA5A5;
                border-radius: 10px;
                background: #FEF2F2;
            ",
            div {
                style: "color: #B91C1C; font-size: 18px; font-weight: 500;",
                "Could not load this section"
            }
            pre {
                style: "color: #7F1D1D; margin: 0; text-wrap: auto; max-width: 560px; max-height: 240px; overflow-y: auto;",
                "{error_txt}"
            }
            {children}
        }
    }
}
