//! Month calendar of scheduled and completed maintenance.

use chrono::Datelike;
use leptos::prelude::*;

use crate::util::calendar::{self, EVENTS_PER_DAY, EventStatus, MonthCursor, WEEKDAYS};

#[component]
pub fn CalendarPage() -> impl IntoView {
    let cursor = RwSignal::new(MonthCursor::default());
    let events = StoredValue::new(calendar::events());
    let today = calendar::today();

    let cells = move || {
        cursor
            .get()
            .cells()
            .into_iter()
            .map(|cell| match cell {
                None => view! { <div class="calendar__cell calendar__cell--blank"></div> }.into_any(),
                Some(date) => {
                    let on_day = events.with_value(|all| {
                        calendar::events_on(all, date).into_iter().cloned().collect::<Vec<_>>()
                    });
                    let hidden = on_day.len().saturating_sub(EVENTS_PER_DAY);
                    view! {
                        <div class="calendar__cell" class:calendar__cell--today={date == today}>
                            <span class="calendar__day">{date.day()}</span>
                            {on_day
                                .into_iter()
                                .take(EVENTS_PER_DAY)
                                .map(|e| {
                                    view! {
                                        <span class=format!("calendar__event calendar__event--{}", e.status.slug()) title=e.title>
                                            {e.title}
                                        </span>
                                    }
                                })
                                .collect_view()}
                            <Show when=move || { hidden > 0 }>
                                <span class="calendar__more">"+" {hidden} " more"</span>
                            </Show>
                        </div>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    let upcoming = move || {
        events.with_value(|all| {
            let mut list = all.iter().filter(|e| e.date >= today).cloned().collect::<Vec<_>>();
            list.sort_by_key(|e| e.date);
            list
        })
    };

    view! {
        <section class="page page--wide">
            <header class="page__header">
                <div>
                    <h1>"Calendar"</h1>
                    <p class="page__subtitle">"Maintenance schedule at a glance"</p>
                </div>
                <div class="calendar__nav">
                    <button class="btn" title="Previous month" on:click=move |_| cursor.update(|c| *c = c.prev())>
                        "‹"
                    </button>
                    <h2 class="calendar__title">{move || cursor.get().title()}</h2>
                    <button class="btn" title="Next month" on:click=move |_| cursor.update(|c| *c = c.next())>
                        "›"
                    </button>
                    <button class="btn" on:click=move |_| cursor.set(MonthCursor::default())>
                        "Today"
                    </button>
                </div>
            </header>

            <div class="calendar__legend">
                {EventStatus::ALL
                    .into_iter()
                    .map(|s| view! { <span class=format!("legend legend--{}", s.slug())>{s.label()}</span> })
                    .collect_view()}
            </div>

            <div class="calendar">
                {WEEKDAYS.into_iter().map(|d| view! { <div class="calendar__weekday">{d}</div> }).collect_view()}
                {cells}
            </div>

            <aside class="panel">
                <h2>"Upcoming"</h2>
                <ul class="panel__list">
                    {move || {
                        upcoming()
                            .into_iter()
                            .map(|e| {
                                view! {
                                    <li class=format!("panel__item panel__item--{}", e.status.slug())>
                                        <span>{e.title}</span>
                                        <span class="panel__meta">{e.date.format("%b %-d, %Y").to_string()}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </aside>
        </section>
    }
}
