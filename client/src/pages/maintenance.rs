//! Maintenance history: category filter, summary figures, newest-first
//! timeline, and a create-only entry modal.

#[cfg(all(test, feature = "ssr"))]
#[path = "maintenance_test.rs"]
mod maintenance_test;

use leptos::prelude::*;
use records::maintenance::{
    CATEGORY_OPTIONS, FORM_CATEGORY_OPTIONS, MaintenancePriority, MaintenanceRecord, MaintenanceStats,
    MaintenanceStatus, MaintenanceType,
};
use records::{EntryForm, Filter, Record};

use crate::components::empty_state::EmptyState;
use crate::components::field::{SelectField, TextArea, TextField, draft_binding, parse_amount, same};
use crate::components::filter_bar::FilterBar;
use crate::components::modal::Modal;
use crate::components::stat_card::StatCard;
use crate::pages::outcome::settle_save;
use crate::state::flash::FlashState;
use crate::state::settings::SettingsState;
use crate::state::workspace::Workspace;
use crate::util::format;

const TIMESTAMP_FORMAT: &str = "%b %-d, %Y %I:%M %p";

#[component]
pub fn MaintenancePage() -> impl IntoView {
    let ws = expect_context::<Workspace>();
    let banner = expect_context::<RwSignal<FlashState>>();
    let settings = expect_context::<RwSignal<SettingsState>>();
    let filter = RwSignal::new(Filter::<String>::All);
    let form = RwSignal::new(EntryForm::<MaintenanceRecord>::new());

    let stats = Memo::new(move |_| ws.maintenance.with(MaintenanceStats::of));
    let entries = Memo::new(move |_| {
        let selected = filter.get();
        ws.maintenance.with(|s| s.visible(&selected).cloned().collect::<Vec<_>>())
    });

    let on_submit = Callback::new(move |()| {
        let stamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let author = settings.with_untracked(|s| s.profile.name.clone());
        form.update(|f| {
            f.edit_fn(|d| {
                d.timestamp = stamp;
                d.created_by = author;
            });
        });
        let result = form.try_update(|f| ws.maintenance.try_update(|s| f.submit_front(s))).flatten();
        settle_save(banner, "Maintenance record", result);
    });

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1>"Maintenance"</h1>
                    <p class="page__subtitle">"Service history across all equipment"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| form.update(EntryForm::open_create)>
                    "+ New Record"
                </button>
            </header>

            <div class="stat-grid">
                <StatCard title="Total Records" value=Signal::derive(move || stats.get().records.to_string())/>
                <StatCard title="Completed" value=Signal::derive(move || stats.get().completed.to_string()) tone="success"/>
                <StatCard title="Scheduled" value=Signal::derive(move || stats.get().scheduled.to_string()) tone="info"/>
                <StatCard
                    title="Total Cost"
                    value=Signal::derive(move || format::money(stats.get().total_completed_cost))
                    note="Completed work"
                />
                <StatCard
                    title="Avg Cost"
                    value=Signal::derive(move || stats.get().avg_completed_cost.map_or_else(|| "—".to_owned(), format::money))
                />
            </div>

            <FilterBar
                filter=filter
                options=CATEGORY_OPTIONS.iter().map(|c| ((*c).to_owned(), *c)).collect()
            />

            <Show
                when=move || entries.with(|e| !e.is_empty())
                fallback=|| view! { <EmptyState title="No maintenance records" hint="Log a service to start the history."/> }
            >
                <ol class="timeline">
                    {move || {
                        entries.get()
                            .into_iter()
                            .map(|record| view! { <TimelineEntry record=record/> })
                            .collect_view()
                    }}
                </ol>
            </Show>

            <Show when=move || form.with(EntryForm::is_open)>
                <MaintenanceModal form=form on_submit=on_submit/>
            </Show>
        </section>
    }
}

#[component]
fn TimelineEntry(record: Record<MaintenanceRecord>) -> impl IntoView {
    let r = record.fields;
    let status = r.status;
    let notes = r.notes;
    let has_notes = !notes.is_empty();

    view! {
        <li class=format!("timeline__entry timeline__entry--{}", status.slug())>
            <div class="timeline__head">
                <h3>{r.equipment_name}</h3>
                <span class=format!("badge badge--{}", status.slug())>{status.label()}</span>
                <span class="badge">{r.category}</span>
                <span class="badge">{r.maintenance_type.label()}</span>
            </div>
            <p class="timeline__description">{r.description}</p>
            <dl class="timeline__meta">
                <dt>"Date"</dt>
                <dd>{r.date}</dd>
                <dt>"Technician"</dt>
                <dd>{r.technician}</dd>
                <dt>"Duration"</dt>
                <dd>{r.duration}</dd>
                <dt>"Cost"</dt>
                <dd>{format::money(r.cost)}</dd>
                <dt>"Priority"</dt>
                <dd>{r.priority.label()}</dd>
                <dt>"Company"</dt>
                <dd>{r.company_name}</dd>
            </dl>
            <Show when=move || has_notes>
                <p class="timeline__notes">{notes.clone()}</p>
            </Show>
            <p class="timeline__stamp">"Logged " {r.timestamp} " by " {r.created_by}</p>
        </li>
    }
}

#[component]
fn MaintenanceModal(form: RwSignal<EntryForm<MaintenanceRecord>>, on_submit: Callback<()>) -> impl IntoView {
    let (equipment, set_equipment) =
        draft_binding(form, |r| r.equipment_name.clone(), |r, v| r.equipment_name = v);
    let (date, set_date) = draft_binding(form, |r| r.date.clone(), |r, v| r.date = v);
    let (description, set_description) = draft_binding(form, |r| r.description.clone(), |r, v| r.description = v);
    let (cost, set_cost) =
        draft_binding(form, |r| r.cost.to_string(), |r, v: String| r.cost = parse_amount(&v));
    let (technician, set_technician) = draft_binding(form, |r| r.technician.clone(), |r, v| r.technician = v);
    let (duration, set_duration) = draft_binding(form, |r| r.duration.clone(), |r, v| r.duration = v);
    let (company, set_company) = draft_binding(form, |r| r.company_name.clone(), |r, v| r.company_name = v);
    let (category, set_category) = draft_binding(form, |r| r.category.clone(), |r, v| r.category = v);
    let (notes, set_notes) = draft_binding(form, |r| r.notes.clone(), |r, v| r.notes = v);
    let (status, set_status) = draft_binding(
        form,
        |r| r.status.slug().to_owned(),
        |r, v: String| {
            if let Some(status) = MaintenanceStatus::from_slug(&v) {
                r.status = status;
            }
        },
    );
    let (kind, set_kind) = draft_binding(
        form,
        |r| r.maintenance_type.label().to_owned(),
        |r, v: String| {
            if let Some(kind) = MaintenanceType::from_label(&v) {
                r.maintenance_type = kind;
            }
        },
    );
    let (priority, set_priority) = draft_binding(
        form,
        |r| r.priority.label().to_owned(),
        |r, v: String| {
            if let Some(priority) = MaintenancePriority::from_label(&v) {
                r.priority = priority;
            }
        },
    );

    let status_options = MaintenanceStatus::ALL.into_iter().map(|s| (s.slug(), s.label())).collect::<Vec<_>>();
    let kind_options = MaintenanceType::ALL.into_iter().map(|k| (k.label(), k.label())).collect::<Vec<_>>();
    let priority_options =
        MaintenancePriority::ALL.into_iter().map(|p| (p.label(), p.label())).collect::<Vec<_>>();

    view! {
        <Modal
            title="New Maintenance Record"
            submit_label="Save Record"
            on_cancel=Callback::new(move |()| form.update(EntryForm::cancel))
            on_submit=on_submit
        >
            <div class="dialog__grid">
                <TextField label="Equipment Name" value=equipment on_input=set_equipment required=true/>
                <TextField label="Date" value=date on_input=set_date required=true placeholder="Dec 27, 2025"/>
                <SelectField label="Category" options=same(FORM_CATEGORY_OPTIONS) value=category on_change=set_category/>
                <SelectField label="Type" options=kind_options value=kind on_change=set_kind/>
                <SelectField label="Status" options=status_options value=status on_change=set_status/>
                <SelectField label="Priority" options=priority_options value=priority on_change=set_priority/>
                <TextField label="Technician" value=technician on_input=set_technician/>
                <TextField label="Duration" value=duration on_input=set_duration placeholder="2h"/>
                <TextField label="Cost ($)" value=cost on_input=set_cost input_type="number"/>
                <TextField label="Company" value=company on_input=set_company/>
            </div>
            <TextField label="Description" value=description on_input=set_description required=true/>
            <TextArea label="Notes" value=notes on_input=set_notes/>
        </Modal>
    }
}
