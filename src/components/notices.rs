//! Corner stack of transient notices.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, NoticeState};

/// Auto-dismiss delay.
#[cfg(feature = "csr")]
const DISMISS_MS: u64 = 5000;

/// Renders the notice queue and schedules one dismiss timer per notice.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let scheduled = RwSignal::new(HashSet::<String>::new());

    Effect::new(move || {
        for notice in notices.get().items {
            if scheduled.with_untracked(|s| s.contains(&notice.id)) {
                continue;
            }
            scheduled.update(|s| {
                s.insert(notice.id.clone());
            });
            #[cfg(feature = "csr")]
            {
                let id = notice.id.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_MS)).await;
                    notices.update(|n| n.dismiss(&id));
                });
            }
        }
    });

    view! {
        <div class="notices">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "notice notice--success",
                            NoticeKind::Error => "notice notice--error",
                        };
                        let id = notice.id.clone();
                        view! {
                            <div class=class>
                                <span class="notice__message">{notice.message}</span>
                                <button
                                    class="notice__dismiss"
                                    on:click=move |_| notices.update(|n| n.dismiss(&id))
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
