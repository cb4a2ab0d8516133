//! Equipment inventory: status filter, table, entry modal, delete confirmation.

#[cfg(all(test, feature = "ssr"))]
#[path = "equipment_test.rs"]
mod equipment_test;

use leptos::prelude::*;
use records::equipment::{CATEGORY_OPTIONS, Equipment, EquipmentStatus};
use records::{DeleteGate, EntryForm, Filter, Record};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::field::{SelectField, TextArea, TextField, draft_binding, parse_score, same};
use crate::components::filter_bar::FilterBar;
use crate::components::modal::Modal;
use crate::pages::outcome::{settle_delete, settle_save};
use crate::state::flash::FlashState;
use crate::state::workspace::Workspace;

#[component]
pub fn EquipmentPage() -> impl IntoView {
    let ws = expect_context::<Workspace>();
    let banner = expect_context::<RwSignal<FlashState>>();
    let filter = RwSignal::new(Filter::<EquipmentStatus>::All);
    let form = RwSignal::new(EntryForm::<Equipment>::new());
    let gate = RwSignal::new(DeleteGate::default());

    let count = Callback::new(move |key: Option<EquipmentStatus>| {
        ws.equipment.with(|s| key.map_or(s.len(), |k| s.count_matching(&k)))
    });
    let rows = Memo::new(move |_| {
        let selected = filter.get();
        ws.equipment.with(|s| s.visible(&selected).cloned().collect::<Vec<_>>())
    });

    let on_submit = Callback::new(move |()| {
        let result = form.try_update(|f| ws.equipment.try_update(|s| f.submit(s))).flatten();
        settle_save(banner, "Equipment", result);
    });
    let on_confirm = Callback::new(move |()| {
        let result = gate.try_update(|g| ws.equipment.try_update(|s| g.confirm(s))).flatten();
        settle_delete(banner, "Equipment", result);
    });

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1>"Equipment"</h1>
                    <p class="page__subtitle">"Track and manage every asset"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| form.update(EntryForm::open_create)>
                    "+ Add Equipment"
                </button>
            </header>

            <FilterBar
                filter=filter
                options=EquipmentStatus::ALL.into_iter().map(|s| (s, s.label())).collect()
                count=count
            />

            <EquipmentTable rows=rows form=form gate=gate/>

            <Show when=move || form.with(EntryForm::is_open)>
                <EquipmentModal form=form on_submit=on_submit/>
            </Show>

            <ConfirmDialog
                gate=gate
                title="Delete Equipment"
                message="This equipment and its details will be removed. This cannot be undone."
                on_confirm=on_confirm
            />
        </section>
    }
}

/// Inventory table, or the empty state when no row passes the filter.
#[component]
fn EquipmentTable(
    rows: Memo<Vec<Record<Equipment>>>,
    form: RwSignal<EntryForm<Equipment>>,
    gate: RwSignal<DeleteGate>,
) -> impl IntoView {
    view! {
        <Show
            when=move || rows.with(|r| !r.is_empty())
            fallback=|| view! { <EmptyState title="No equipment found" hint="Try a different filter or add equipment."/> }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Equipment"</th>
                        <th>"Category"</th>
                        <th>"Location"</th>
                        <th>"Last Service"</th>
                        <th>"Next Due"</th>
                        <th>"Health"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|record| view! { <EquipmentRow record=record form=form gate=gate/> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn EquipmentRow(
    record: Record<Equipment>,
    form: RwSignal<EntryForm<Equipment>>,
    gate: RwSignal<DeleteGate>,
) -> impl IntoView {
    let id = record.id.clone();
    let tier = record.fields.health_tier().slug();
    let status = record.fields.status;
    let fields = record.fields.clone();

    view! {
        <tr>
            <td>
                <div class="data-table__primary">{fields.name}</div>
                <div class="data-table__secondary">{fields.model} " · " {fields.serial_number}</div>
            </td>
            <td>{fields.category}</td>
            <td>{fields.location}</td>
            <td>{fields.last_service}</td>
            <td>{fields.next_due}</td>
            <td>
                <div class="health">
                    <div class=format!("health__bar health__bar--{tier}") style=format!("width: {}%", fields.health_score)></div>
                    <span class="health__value">{fields.health_score} "%"</span>
                </div>
            </td>
            <td>
                <span class=format!("badge badge--{}", status.slug())>{status.label()}</span>
            </td>
            <td class="data-table__actions">
                <button class="btn btn--small" on:click=move |_| form.update(|f| f.open_edit(&record))>
                    "Edit"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| gate.update(|g| g.request(id.clone()))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn EquipmentModal(form: RwSignal<EntryForm<Equipment>>, on_submit: Callback<()>) -> impl IntoView {
    let editing = move || form.with(EntryForm::is_editing);
    let title = Signal::derive(move || if editing() { "Edit Equipment" } else { "Add Equipment" }.to_owned());
    let submit_label = Signal::derive(move || if editing() { "Save Changes" } else { "Add Equipment" }.to_owned());

    let (name, set_name) = draft_binding(form, |e| e.name.clone(), |e, v| e.name = v);
    let (category, set_category) = draft_binding(form, |e| e.category.clone(), |e, v| e.category = v);
    let (model, set_model) = draft_binding(form, |e| e.model.clone(), |e, v| e.model = v);
    let (serial, set_serial) = draft_binding(form, |e| e.serial_number.clone(), |e, v| e.serial_number = v);
    let (location, set_location) = draft_binding(form, |e| e.location.clone(), |e, v| e.location = v);
    let (department, set_department) = draft_binding(form, |e| e.department.clone(), |e, v| e.department = v);
    let (employee, set_employee) = draft_binding(form, |e| e.employee.clone(), |e, v| e.employee = v);
    let (used_by, set_used_by) = draft_binding(form, |e| e.used_by.clone(), |e, v| e.used_by = v);
    let (company, set_company) = draft_binding(form, |e| e.company_name.clone(), |e, v| e.company_name = v);
    let (team, set_team) = draft_binding(form, |e| e.maintenance_team.clone(), |e, v| e.maintenance_team = v);
    let (technician, set_technician) =
        draft_binding(form, |e| e.technician_name.clone(), |e, v| e.technician_name = v);
    let (workcenter, set_workcenter) = draft_binding(form, |e| e.workcenter.clone(), |e, v| e.workcenter = v);
    let (last_service, set_last_service) = draft_binding(form, |e| e.last_service.clone(), |e, v| e.last_service = v);
    let (next_due, set_next_due) = draft_binding(form, |e| e.next_due.clone(), |e, v| e.next_due = v);
    let (assign_date, set_assign_date) = draft_binding(form, |e| e.assign_date.clone(), |e, v| e.assign_date = v);
    let (scrap_date, set_scrap_date) = draft_binding(form, |e| e.scrap_date.clone(), |e, v| e.scrap_date = v);
    let (status, set_status) = draft_binding(
        form,
        |e| e.status.slug().to_owned(),
        |e, v: String| {
            if let Some(status) = EquipmentStatus::from_slug(&v) {
                e.status = status;
            }
        },
    );
    let (health, set_health) = draft_binding(
        form,
        |e| e.health_score.to_string(),
        |e, v: String| e.health_score = parse_score(&v),
    );
    let (description, set_description) = draft_binding(form, |e| e.description.clone(), |e, v| e.description = v);

    let status_options = EquipmentStatus::ALL.into_iter().map(|s| (s.slug(), s.label())).collect::<Vec<_>>();

    view! {
        <Modal
            title=title
            submit_label=submit_label
            on_cancel=Callback::new(move |()| form.update(EntryForm::cancel))
            on_submit=on_submit
        >
            <div class="dialog__grid">
                <TextField label="Equipment Name" value=name on_input=set_name required=true placeholder="e.g. Forklift #A-204"/>
                <SelectField
                    label="Category"
                    options=same(CATEGORY_OPTIONS)
                    value=category
                    on_change=set_category
                    placeholder="Select category"
                />
                <TextField label="Model" value=model on_input=set_model/>
                <TextField label="Serial Number" value=serial on_input=set_serial/>
                <TextField label="Location" value=location on_input=set_location/>
                <TextField label="Department" value=department on_input=set_department/>
                <TextField label="Employee" value=employee on_input=set_employee/>
                <TextField label="Used By" value=used_by on_input=set_used_by/>
                <TextField label="Company" value=company on_input=set_company/>
                <TextField label="Maintenance Team" value=team on_input=set_team/>
                <TextField label="Technician" value=technician on_input=set_technician/>
                <TextField label="Work Center" value=workcenter on_input=set_workcenter/>
                <TextField label="Last Service" value=last_service on_input=set_last_service placeholder="Dec 1, 2025"/>
                <TextField label="Next Due" value=next_due on_input=set_next_due placeholder="Jan 1, 2026"/>
                <TextField label="Assign Date" value=assign_date on_input=set_assign_date/>
                <TextField label="Scrap Date" value=scrap_date on_input=set_scrap_date/>
                <SelectField label="Status" options=status_options value=status on_change=set_status/>
                <TextField label="Health Score" value=health on_input=set_health input_type="number"/>
            </div>
            <TextArea label="Description" value=description on_input=set_description/>
        </Modal>
    }
}
