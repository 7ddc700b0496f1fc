//! Notice Bar Component
//!
//! Non-blocking notifications for every operation outcome.

use leptos::prelude::*;

use crate::context::{use_app_context, AppContext};
use crate::notify::{Notice, Tone};

/// Stack of current notices
#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = use_app_context().controller().notices();

    view! {
        <div class="notice-bar" role="status">
            <For
                each=move || notices.with(|n| n.entries().to_vec())
                key=|notice| notice.id
                children=move |notice| view! { <NoticeToast notice=notice /> }
            />
        </div>
    }
}

#[component]
fn NoticeToast(notice: Notice) -> impl IntoView {
    let ctx = use_app_context();
    let id = notice.id;
    schedule_dismiss(ctx, id);

    let class = match notice.tone {
        Tone::Success => "notice success",
        Tone::Error => "notice error",
    };

    view! {
        <div class=class>
            <strong class="notice-title">{notice.title}</strong>
            {notice.detail.map(|detail| view! { <p class="notice-detail">{detail}</p> })}
            <button class="notice-close" on:click=move |_| ctx.controller().dismiss_notice(id)>
                "×"
            </button>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(ctx: AppContext, id: u64) {
    gloo_timers::callback::Timeout::new(ctx.notice_timeout_ms, move || {
        ctx.controller().dismiss_notice(id);
    })
    .forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_ctx: AppContext, _id: u64) {}
