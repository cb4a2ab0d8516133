//! Equipment categories: totals, card grid, entry modal with icon and colour
//! pickers, and delete confirmation.

#[cfg(all(test, feature = "ssr"))]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;
use records::category::{COLOR_OPTIONS, Category, CategoryTotals, ICON_OPTIONS};
use records::{DeleteGate, EntryForm, Record};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::field::{TextArea, TextField, draft_binding, parse_amount, parse_number};
use crate::components::modal::Modal;
use crate::components::stat_card::StatCard;
use crate::pages::outcome::{settle_delete, settle_save};
use crate::state::flash::FlashState;
use crate::state::workspace::Workspace;
use crate::util::format;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let ws = expect_context::<Workspace>();
    let banner = expect_context::<RwSignal<FlashState>>();
    let form = RwSignal::new(EntryForm::<Category>::new());
    let gate = RwSignal::new(DeleteGate::default());

    let totals = Memo::new(move |_| ws.categories.with(CategoryTotals::of));
    let cards = Memo::new(move |_| ws.categories.with(|s| s.records().to_vec()));

    let on_submit = Callback::new(move |()| {
        let result = form.try_update(|f| ws.categories.try_update(|s| f.submit(s))).flatten();
        settle_save(banner, "Category", result);
    });
    let on_confirm = Callback::new(move |()| {
        let result = gate.try_update(|g| ws.categories.try_update(|s| g.confirm(s))).flatten();
        settle_delete(banner, "Category", result);
    });

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1>"Categories"</h1>
                    <p class="page__subtitle">"Group equipment and track spend"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| form.update(EntryForm::open_create)>
                    "+ Add Category"
                </button>
            </header>

            <div class="stat-grid">
                <StatCard title="Categories" value=Signal::derive(move || totals.get().categories.to_string())/>
                <StatCard title="Equipment" value=Signal::derive(move || totals.get().equipment.to_string())/>
                <StatCard title="Total Value" value=Signal::derive(move || format::thousands_k(format::whole_dollars(totals.get().value))) tone="success"/>
            </div>

            <Show
                when=move || cards.with(|c| !c.is_empty())
                fallback=|| view! { <EmptyState title="No categories yet" hint="Add a category to group equipment."/> }
            >
                <div class="card-grid">
                    {move || {
                        cards.get()
                            .into_iter()
                            .map(|record| view! { <CategoryCard record=record form=form gate=gate/> })
                            .collect_view()
                    }}
                </div>
            </Show>

            <Show when=move || form.with(EntryForm::is_open)>
                <CategoryModal form=form on_submit=on_submit/>
            </Show>

            <ConfirmDialog
                gate=gate
                title="Delete Category"
                message="This category will be removed. Equipment records are not affected."
                on_confirm=on_confirm
            />
        </section>
    }
}

#[component]
fn CategoryCard(record: Record<Category>, form: RwSignal<EntryForm<Category>>, gate: RwSignal<DeleteGate>) -> impl IntoView {
    let id = record.id.clone();
    let c = record.fields.clone();

    view! {
        <article class="category-card" style=format!("border-top-color: {}", c.color)>
            <div class="category-card__head">
                <span class="category-card__icon" style=format!("background: {}", c.color)>{c.icon}</span>
                <h3>{c.name}</h3>
            </div>
            <p class="category-card__description">{c.description}</p>
            <dl class="category-card__meta">
                <dt>"Equipment"</dt>
                <dd>{c.equipment_count}</dd>
                <dt>"Total Cost"</dt>
                <dd>{format::money(c.total_cost)}</dd>
                <dt>"Responsible"</dt>
                <dd>{c.responsible}</dd>
                <dt>"Company"</dt>
                <dd>{c.company_name}</dd>
                <dt>"Updated"</dt>
                <dd>{c.last_updated}</dd>
            </dl>
            <div class="category-card__actions">
                <button class="btn btn--small" on:click=move |_| form.update(|f| f.open_edit(&record))>
                    "Edit"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| gate.update(|g| g.request(id.clone()))>
                    "Delete"
                </button>
            </div>
        </article>
    }
}

#[component]
fn CategoryModal(form: RwSignal<EntryForm<Category>>, on_submit: Callback<()>) -> impl IntoView {
    let editing = move || form.with(EntryForm::is_editing);
    let title = Signal::derive(move || if editing() { "Edit Category" } else { "Add Category" }.to_owned());
    let submit_label = Signal::derive(move || if editing() { "Save Changes" } else { "Add Category" }.to_owned());

    let (name, set_name) = draft_binding(form, |c| c.name.clone(), |c, v| c.name = v);
    let (description, set_description) = draft_binding(form, |c| c.description.clone(), |c, v| c.description = v);
    let (responsible, set_responsible) = draft_binding(form, |c| c.responsible.clone(), |c, v| c.responsible = v);
    let (company, set_company) = draft_binding(form, |c| c.company_name.clone(), |c, v| c.company_name = v);
    let (count, set_count) =
        draft_binding(form, |c| c.equipment_count.to_string(), |c, v: String| c.equipment_count = parse_number(&v));
    let (cost, set_cost) =
        draft_binding(form, |c| c.total_cost.to_string(), |c, v: String| c.total_cost = parse_amount(&v));
    let (icon, set_icon) = draft_binding(form, |c| c.icon.clone(), |c, v| c.icon = v);
    let (color, set_color) = draft_binding(form, |c| c.color.clone(), |c, v| c.color = v);

    view! {
        <Modal
            title=title
            submit_label=submit_label
            on_cancel=Callback::new(move |()| form.update(EntryForm::cancel))
            on_submit=on_submit
        >
            <TextField label="Category Name" value=name on_input=set_name required=true/>
            <TextArea label="Description" value=description on_input=set_description/>
            <div class="dialog__grid">
                <TextField label="Responsible" value=responsible on_input=set_responsible/>
                <TextField label="Company" value=company on_input=set_company/>
                <TextField label="Equipment Count" value=count on_input=set_count input_type="number"/>
                <TextField label="Total Cost ($)" value=cost on_input=set_cost input_type="number"/>
            </div>
            <Picker label="Icon" options=ICON_OPTIONS value=icon on_pick=set_icon swatch=false/>
            <Picker label="Colour" options=COLOR_OPTIONS value=color on_pick=set_color swatch=true/>
        </Modal>
    }
}

/// Button grid for a fixed option list. Swatches render the option as a
/// background colour instead of text.
#[component]
fn Picker(
    label: &'static str,
    options: &'static [&'static str],
    value: Signal<String>,
    on_pick: Callback<String>,
    swatch: bool,
) -> impl IntoView {
    view! {
        <div class="dialog__label">
            {label}
            <div class="picker">
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <button
                                type="button"
                                class="picker__option"
                                class:picker__option--active=move || value.get() == option
                                style=if swatch { format!("background: {option}") } else { String::new() }
                                title=option
                                on:click=move |_| on_pick.run(option.to_owned())
                            >
                                {if swatch { "" } else { option }}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
