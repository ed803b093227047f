pub mod state;

use contracts::domain::a003_notification::{Notification, NotificationKind};
use futures::future::join;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::FeedState;
use crate::domain::a003_notification::api::{fetch_unread, mark_as_read};
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use crate::system::auth::use_session;

/// Unread low-stock and expiry notifications with a "mark as read" action
#[component]
pub fn NotificationFeed() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let feed = RwSignal::new(FeedState::default());

    let api_base = StoredValue::new(config.api_base.clone());
    let success_ms = config.success_message_ms;

    if session.verify() {
        let token = session.access_token();
        feed.update(|f| f.loading = true);

        spawn_local(async move {
            let base = api_base.get_value();
            let (low_stock, expiry) = join(
                fetch_unread(&base, token.as_deref(), NotificationKind::LowStock),
                fetch_unread(&base, token.as_deref(), NotificationKind::Expiry),
            )
            .await;

            match (low_stock, expiry) {
                (Ok(low_stock), Ok(expiry)) => feed.update(|f| f.set_lists(low_stock, expiry)),
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Failed to load notifications: {}", e);
                    feed.update(|f| f.load_failed(e.to_string()));
                }
            }
        });
    }

    let mark = Callback::new(move |notification: Notification| {
        let id = notification.id;
        if !session.verify() {
            return;
        }
        let started = feed.try_update(|f| f.begin_marking(id)).unwrap_or(false);
        if !started {
            return;
        }
        let token = session.access_token();

        spawn_local(async move {
            let base = api_base.get_value();
            let result = mark_as_read(&base, token.as_deref(), id).await;
            if let Err(e) = &result {
                log::error!("Failed to mark notification {} as read: {}", id, e);
            }

            let ticket = feed
                .try_update(|f| f.finish_marking(id, result.map_err(|e| e.to_string())))
                .flatten();

            if let Some(ticket) = ticket {
                TimeoutFuture::new(success_ms).await;
                feed.update(|f| {
                    f.clear_success(ticket);
                });
            }
        });
    });

    view! {
        <div class="page">
            <PageHeader title="Notifications" icon_name="bell">
                <Show when=move || feed.with(|f| f.loading)>
                    <Spinner />
                </Show>
            </PageHeader>

            {move || feed.with(|f| f.error.clone()).map(|e| view! {
                <div class="error-message">{e}</div>
            })}
            {move || feed.with(|f| f.success.clone()).map(|s| view! {
                <div class="success-message">{s}</div>
            })}

            <Show
                when=move || feed.with(|f| !f.is_empty() || f.loading)
                fallback=|| view! { <p class="notification-feed__empty">"No unread notifications"</p> }
            >
                {NotificationKind::all()
                    .into_iter()
                    .map(|kind| view! { <NotificationSection kind=kind feed=feed on_mark=mark /> })
                    .collect_view()}
            </Show>
        </div>
    }
}

#[component]
fn NotificationSection(
    kind: NotificationKind,
    feed: RwSignal<FeedState>,
    on_mark: Callback<Notification>,
) -> impl IntoView {
    view! {
        <section class="notification-feed__section">
            <h3>{kind.title()}</h3>
            <For
                each=move || feed.with(|f| f.list(kind).to_vec())
                key=|n| n.id
                children=move |notification| {
                    let id = notification.id;
                    let name = notification.name.clone();
                    let when = notification.date_time.as_deref().map(format_datetime);
                    let message = notification.message.clone();
                    let busy = Signal::derive(move || feed.with(|f| f.is_marking(id)));

                    view! {
                        <div class="notification-feed__item">
                            <div class="notification-feed__body">
                                {name.map(|n| view! { <strong>{n}</strong> })}
                                <span>{message}</span>
                                {when.map(|w| view! { <small>{w}</small> })}
                            </div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=busy
                                on_click=move |_| on_mark.run(notification.clone())
                            >
                                {move || if busy.get() { "Marking..." } else { "Mark as read" }}
                            </Button>
                        </div>
                    }
                }
            />
        </section>
    }
}
