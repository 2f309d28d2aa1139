//! Status Menu Component
//!
//! Per-row dropdown for picking an item's status.

use leptos::prelude::*;

use crate::models::Status;

/// "Status" toggle button that opens the two-option menu
#[component]
pub fn StatusMenu(
    current: Status,
    on_select: impl Fn(Status) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <span class="status-menu">
            <button
                class="status-toggle"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "Status"
            </button>
            <Show when=move || open.get()>
                <span class="status-options">
                    {Status::ALL.iter().map(|&status| {
                        let is_current = status == current;
                        view! {
                            <button
                                class=move || if is_current { "status-btn active" } else { "status-btn" }
                                on:click=move |_| {
                                    set_open.set(false);
                                    on_select(status);
                                }
                            >
                                {status.label()}
                            </button>
                        }
                    }).collect_view()}
                </span>
            </Show>
        </span>
    }
}
