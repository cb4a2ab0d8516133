//! Task board: priority filter, five lanes, per-card move menu, entry modal
//! with tag editor, and delete confirmation.

#[cfg(all(test, feature = "ssr"))]
#[path = "kanban_test.rs"]
mod kanban_test;

use leptos::prelude::*;
use records::board::{self, Column};
use records::form::{add_tag, remove_tag};
use records::task::{ASSIGNEE_OPTIONS, Priority, Task};
use records::{DeleteGate, EntryForm, Filter, Record, RecordId};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::field::{SelectField, TextArea, TextField, draft_binding, same};
use crate::components::filter_bar::FilterBar;
use crate::components::modal::Modal;
use crate::components::tag_editor::TagEditor;
use crate::pages::outcome::{settle_delete, settle_save, settle_store};
use crate::state::flash::FlashState;
use crate::state::workspace::Workspace;

/// Lane contents detached from the store borrow.
type OwnedLane = (Column, Vec<Record<Task>>);

#[component]
pub fn KanbanPage() -> impl IntoView {
    let ws = expect_context::<Workspace>();
    let banner = expect_context::<RwSignal<FlashState>>();
    let filter = RwSignal::new(Filter::<Priority>::All);
    let form = RwSignal::new(EntryForm::<Task>::new());
    let gate = RwSignal::new(DeleteGate::default());

    let lanes = Memo::new(move |_| {
        let selected = filter.get();
        ws.tasks.with(|s| {
            board::partition(s.visible(&selected))
                .into_iter()
                .map(|lane| (lane.column, lane.tasks.into_iter().cloned().collect()))
                .collect::<Vec<OwnedLane>>()
        })
    });

    let on_move = Callback::new(move |(id, to): (RecordId, Column)| {
        let result = ws.tasks.try_update(|s| board::move_task(s, &id, to));
        if let Some(Ok(())) = result {
            log::debug!("task {id} moved to {}", to.slug());
        }
        settle_store(banner, "move task", result);
    });
    let on_submit = Callback::new(move |()| {
        let result = form.try_update(|f| ws.tasks.try_update(|s| f.submit(s))).flatten();
        settle_save(banner, "Task", result);
    });
    let on_confirm = Callback::new(move |()| {
        let result = gate.try_update(|g| ws.tasks.try_update(|s| g.confirm(s))).flatten();
        settle_delete(banner, "Task", result);
    });

    view! {
        <section class="page page--wide">
            <header class="page__header">
                <div>
                    <h1>"Task Board"</h1>
                    <p class="page__subtitle">"Plan and track maintenance work"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| form.update(EntryForm::open_create)>
                    "+ Add Task"
                </button>
            </header>

            <FilterBar filter=filter options=Priority::ALL.into_iter().map(|p| (p, p.label())).collect()/>

            <div class="kanban">
                {move || {
                    lanes.get()
                        .into_iter()
                        .map(|(column, tasks)| {
                            view! { <KanbanLane column=column tasks=tasks form=form gate=gate on_move=on_move/> }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || form.with(EntryForm::is_open)>
                <TaskModal form=form on_submit=on_submit/>
            </Show>

            <ConfirmDialog
                gate=gate
                title="Delete Task"
                message="This task will be removed from the board. This cannot be undone."
                on_confirm=on_confirm
            />
        </section>
    }
}

#[component]
fn KanbanLane(
    column: Column,
    tasks: Vec<Record<Task>>,
    form: RwSignal<EntryForm<Task>>,
    gate: RwSignal<DeleteGate>,
    on_move: Callback<(RecordId, Column)>,
) -> impl IntoView {
    let count = tasks.len();
    let empty = tasks.is_empty();

    view! {
        <div class=format!("kanban__lane kanban__lane--{}", column.slug())>
            <div class="kanban__lane-header">
                <h2>{column.title()}</h2>
                <span class="kanban__count">{count}</span>
            </div>
            <div class="kanban__cards">
                {tasks
                    .into_iter()
                    .map(|record| view! { <TaskCard record=record form=form gate=gate on_move=on_move/> })
                    .collect_view()}
                <Show when=move || empty>
                    <p class="kanban__empty">"No tasks"</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn TaskCard(
    record: Record<Task>,
    form: RwSignal<EntryForm<Task>>,
    gate: RwSignal<DeleteGate>,
    on_move: Callback<(RecordId, Column)>,
) -> impl IntoView {
    let id = record.id.clone();
    let move_id = record.id.clone();
    let task = record.fields.clone();
    let from = task.column;

    view! {
        <article class=format!("task-card task-card--{}", task.priority.slug())>
            <div class="task-card__head">
                <span class=format!("badge badge--{}", task.priority.slug())>{task.priority.label()}</span>
                <select
                    class="task-card__move"
                    title="Move to"
                    on:change=move |ev| {
                        if let Some(to) = Column::from_slug(&event_target_value(&ev)) {
                            on_move.run((move_id.clone(), to));
                        }
                    }
                >
                    <option value="" selected=true>"Move to…"</option>
                    {board::move_targets(from)
                        .into_iter()
                        .map(|c| view! { <option value=c.slug()>{c.title()}</option> })
                        .collect_view()}
                </select>
            </div>
            <h3 class="task-card__title">{task.title}</h3>
            <p class="task-card__description">{task.description}</p>
            <div class="task-card__meta">
                <span>{task.equipment}</span>
                <span>{task.due_date}</span>
            </div>
            <div class="task-card__tags">
                {task.tags.into_iter().map(|tag| view! { <span class="chip">{tag}</span> }).collect_view()}
            </div>
            <div class="task-card__footer">
                <span class="task-card__assignee">{task.assignee}</span>
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
fn TaskModal(form: RwSignal<EntryForm<Task>>, on_submit: Callback<()>) -> impl IntoView {
    let editing = move || form.with(EntryForm::is_editing);
    let title = Signal::derive(move || if editing() { "Edit Task" } else { "Add Task" }.to_owned());
    let submit_label = Signal::derive(move || if editing() { "Save Changes" } else { "Add Task" }.to_owned());

    let (task_title, set_task_title) = draft_binding(form, |t| t.title.clone(), |t, v| t.title = v);
    let (description, set_description) = draft_binding(form, |t| t.description.clone(), |t, v| t.description = v);
    let (equipment, set_equipment) = draft_binding(form, |t| t.equipment.clone(), |t, v| t.equipment = v);
    let (due_date, set_due_date) = draft_binding(form, |t| t.due_date.clone(), |t, v| t.due_date = v);
    let (assignee, set_assignee) = draft_binding(form, |t| t.assignee.clone(), |t, v| t.assignee = v);
    let (priority, set_priority) = draft_binding(
        form,
        |t| t.priority.slug().to_owned(),
        |t, v: String| {
            if let Some(priority) = Priority::from_slug(&v) {
                t.priority = priority;
            }
        },
    );
    let (column, set_column) = draft_binding(
        form,
        |t| t.column.slug().to_owned(),
        |t, v: String| {
            if let Some(column) = Column::from_slug(&v) {
                t.column = column;
            }
        },
    );
    let tags = Signal::derive(move || form.with(|f| f.draft().map(|t| t.tags.clone()).unwrap_or_default()));
    let on_add_tag = Callback::new(move |tag: String| {
        form.update(|f| {
            f.edit_fn(|t| {
                add_tag(&mut t.tags, &tag);
            });
        });
    });
    let on_remove_tag = Callback::new(move |tag: String| form.update(|f| f.edit_fn(|t| remove_tag(&mut t.tags, &tag))));

    let priority_options = Priority::ALL.into_iter().map(|p| (p.slug(), p.label())).collect::<Vec<_>>();
    let column_options = Column::ALL.into_iter().map(|c| (c.slug(), c.title())).collect::<Vec<_>>();

    view! {
        <Modal
            title=title
            submit_label=submit_label
            on_cancel=Callback::new(move |()| form.update(EntryForm::cancel))
            on_submit=on_submit
        >
            <TextField label="Task Title" value=task_title on_input=set_task_title required=true/>
            <TextArea label="Description" value=description on_input=set_description/>
            <div class="dialog__grid">
                <SelectField label="Priority" options=priority_options value=priority on_change=set_priority/>
                <SelectField label="Status" options=column_options value=column on_change=set_column/>
                <SelectField label="Assignee" options=same(ASSIGNEE_OPTIONS) value=assignee on_change=set_assignee/>
                <TextField label="Equipment" value=equipment on_input=set_equipment required=true/>
                <TextField label="Due Date" value=due_date on_input=set_due_date placeholder="Dec 30, 2025"/>
            </div>
            <TagEditor label="Tags" tags=tags on_add=on_add_tag on_remove=on_remove_tag placeholder="Add a tag"/>
        </Modal>
    }
}
