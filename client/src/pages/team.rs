//! Team roster: role filter, summary figures, member cards, entry modal with
//! specialty editor, and delete confirmation.

#[cfg(all(test, feature = "ssr"))]
#[path = "team_test.rs"]
mod team_test;

use leptos::prelude::*;
use records::equipment::HealthTier;
use records::form::{add_tag, remove_tag};
use records::team::{DEPARTMENT_OPTIONS, MemberStatus, ROLE_OPTIONS, TeamMember, TeamStats};
use records::{DeleteGate, EntryForm, Filter, Record};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::field::{SelectField, TextField, draft_binding, parse_number, parse_score, same};
use crate::components::filter_bar::FilterBar;
use crate::components::modal::Modal;
use crate::components::stat_card::StatCard;
use crate::components::tag_editor::TagEditor;
use crate::pages::outcome::{settle_delete, settle_save};
use crate::state::flash::FlashState;
use crate::state::workspace::Workspace;

#[component]
pub fn TeamPage() -> impl IntoView {
    let ws = expect_context::<Workspace>();
    let banner = expect_context::<RwSignal<FlashState>>();
    let filter = RwSignal::new(Filter::<String>::All);
    let form = RwSignal::new(EntryForm::<TeamMember>::new());
    let gate = RwSignal::new(DeleteGate::default());

    let stats = Memo::new(move |_| ws.team.with(TeamStats::of));
    let members = Memo::new(move |_| {
        let selected = filter.get();
        ws.team.with(|s| s.visible(&selected).cloned().collect::<Vec<_>>())
    });
    let count = Callback::new(move |role: Option<String>| {
        ws.team.with(|s| role.map_or(s.len(), |r| s.count_matching(&r)))
    });

    let on_submit = Callback::new(move |()| {
        let result = form.try_update(|f| ws.team.try_update(|s| f.submit(s))).flatten();
        settle_save(banner, "Team member", result);
    });
    let on_confirm = Callback::new(move |()| {
        let result = gate.try_update(|g| ws.team.try_update(|s| g.confirm(s))).flatten();
        settle_delete(banner, "Team member", result);
    });

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1>"Team"</h1>
                    <p class="page__subtitle">"Technicians and their workload"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| form.update(EntryForm::open_create)>
                    "+ Add Member"
                </button>
            </header>

            <div class="stat-grid">
                <StatCard title="Team Members" value=Signal::derive(move || stats.get().members.to_string())/>
                <StatCard title="Active Now" value=Signal::derive(move || stats.get().active.to_string()) tone="success"/>
                <StatCard title="Tasks Completed" value=Signal::derive(move || stats.get().tasks_completed.to_string())/>
                <StatCard title="Active Tasks" value=Signal::derive(move || stats.get().tasks_active.to_string()) tone="info"/>
                <StatCard
                    title="Avg Performance"
                    value=Signal::derive(move || stats.get().avg_performance.map_or_else(|| "—".to_owned(), |p| format!("{p}%")))
                />
            </div>

            <FilterBar
                filter=filter
                options=ROLE_OPTIONS.iter().map(|r| ((*r).to_owned(), *r)).collect()
                count=count
            />

            <Show
                when=move || members.with(|m| !m.is_empty())
                fallback=|| view! { <EmptyState title="No team members found" hint="Try another role or add a member."/> }
            >
                <div class="card-grid">
                    {move || {
                        members.get()
                            .into_iter()
                            .map(|record| view! { <MemberCard record=record form=form gate=gate/> })
                            .collect_view()
                    }}
                </div>
            </Show>

            <Show when=move || form.with(EntryForm::is_open)>
                <MemberModal form=form on_submit=on_submit/>
            </Show>

            <ConfirmDialog
                gate=gate
                title="Remove Team Member"
                message="This member will be removed from the team. This cannot be undone."
                on_confirm=on_confirm
            />
        </section>
    }
}

#[component]
fn MemberCard(record: Record<TeamMember>, form: RwSignal<EntryForm<TeamMember>>, gate: RwSignal<DeleteGate>) -> impl IntoView {
    let id = record.id.clone();
    let member = record.fields.clone();
    let initials = member.initials();
    let tier = HealthTier::from_score(member.performance).slug();

    view! {
        <article class="member-card">
            <div class="member-card__head">
                <span class="avatar">{initials}</span>
                <div>
                    <h3>{member.name}</h3>
                    <p class="member-card__role">{member.role} " · " {member.department}</p>
                </div>
                <span class=format!("status-dot status-dot--{}", member.status.slug())>{member.status.label()}</span>
            </div>
            <p class="member-card__email">{member.email}</p>
            <div class="member-card__numbers">
                <span>{member.tasks_completed} " completed"</span>
                <span>{member.tasks_active} " active"</span>
                <span>"Since " {member.join_date}</span>
            </div>
            <div class="health">
                <div class=format!("health__bar health__bar--{tier}") style=format!("width: {}%", member.performance)></div>
                <span class="health__value">{member.performance} "%"</span>
            </div>
            <div class="member-card__tags">
                {member.specialties.into_iter().map(|s| view! { <span class="chip">{s}</span> }).collect_view()}
            </div>
            <div class="member-card__actions">
                <button class="btn btn--small" on:click=move |_| form.update(|f| f.open_edit(&record))>
                    "Edit"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| gate.update(|g| g.request(id.clone()))>
                    "Remove"
                </button>
            </div>
        </article>
    }
}

#[component]
fn MemberModal(form: RwSignal<EntryForm<TeamMember>>, on_submit: Callback<()>) -> impl IntoView {
    let editing = move || form.with(EntryForm::is_editing);
    let title = Signal::derive(move || if editing() { "Edit Team Member" } else { "Add Team Member" }.to_owned());
    let submit_label = Signal::derive(move || if editing() { "Save Changes" } else { "Add Member" }.to_owned());

    let (name, set_name) = draft_binding(form, |m| m.name.clone(), |m, v| m.name = v);
    let (email, set_email) = draft_binding(form, |m| m.email.clone(), |m, v| m.email = v);
    let (role, set_role) = draft_binding(form, |m| m.role.clone(), |m, v| m.role = v);
    let (department, set_department) = draft_binding(form, |m| m.department.clone(), |m, v| m.department = v);
    let (join_date, set_join_date) = draft_binding(form, |m| m.join_date.clone(), |m, v| m.join_date = v);
    let (status, set_status) = draft_binding(
        form,
        |m| m.status.slug().to_owned(),
        |m, v: String| {
            if let Some(status) = MemberStatus::from_slug(&v) {
                m.status = status;
            }
        },
    );
    let (completed, set_completed) =
        draft_binding(form, |m| m.tasks_completed.to_string(), |m, v: String| m.tasks_completed = parse_number(&v));
    let (active, set_active) =
        draft_binding(form, |m| m.tasks_active.to_string(), |m, v: String| m.tasks_active = parse_number(&v));
    let (performance, set_performance) = draft_binding(
        form,
        |m| m.performance.to_string(),
        |m, v: String| m.performance = parse_score(&v),
    );
    let specialties =
        Signal::derive(move || form.with(|f| f.draft().map(|m| m.specialties.clone()).unwrap_or_default()));
    let on_add = Callback::new(move |s: String| {
        form.update(|f| {
            f.edit_fn(|m| {
                add_tag(&mut m.specialties, &s);
            });
        });
    });
    let on_remove = Callback::new(move |s: String| form.update(|f| f.edit_fn(|m| remove_tag(&mut m.specialties, &s))));

    let status_options = MemberStatus::ALL.into_iter().map(|s| (s.slug(), s.label())).collect::<Vec<_>>();

    view! {
        <Modal
            title=title
            submit_label=submit_label
            on_cancel=Callback::new(move |()| form.update(EntryForm::cancel))
            on_submit=on_submit
        >
            <div class="dialog__grid">
                <TextField label="Full Name" value=name on_input=set_name required=true/>
                <TextField label="Email" value=email on_input=set_email required=true input_type="email"/>
                <SelectField label="Role" options=same(ROLE_OPTIONS) value=role on_change=set_role/>
                <SelectField label="Department" options=same(DEPARTMENT_OPTIONS) value=department on_change=set_department/>
                <SelectField label="Status" options=status_options value=status on_change=set_status/>
                <TextField label="Join Date" value=join_date on_input=set_join_date placeholder="Dec 2025"/>
                <TextField label="Tasks Completed" value=completed on_input=set_completed input_type="number"/>
                <TextField label="Active Tasks" value=active on_input=set_active input_type="number"/>
                <TextField label="Performance (%)" value=performance on_input=set_performance input_type="number"/>
            </div>
            <TagEditor
                label="Specialties"
                tags=specialties
                on_add=on_add
                on_remove=on_remove
                placeholder="e.g. Hydraulics"
            />
        </Modal>
    }
}
