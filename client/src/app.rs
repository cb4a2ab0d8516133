//! Root application component with context providers and the screen switch.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{flash_banner::FlashBanner, sidebar::Sidebar, top_nav::TopNav};
use crate::pages::{
    analytics::AnalyticsPage, calendar::CalendarPage, categories::CategoriesPage, dashboard::DashboardPage,
    equipment::EquipmentPage, kanban::KanbanPage, login::LoginPage, maintenance::MaintenancePage,
    register::RegisterPage, settings::SettingsPage, team::TeamPage,
};
use crate::state::flash::FlashState;
use crate::state::notifications::NotificationsState;
use crate::state::settings::SettingsState;
use crate::state::shell::{AppScreen, AuthScreen, Shell};
use crate::state::ui::UiState;
use crate::state::workspace::Workspace;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts. There is a single route; screens are
/// switched by the [`Shell`] signal, not by URL.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let shell = RwSignal::new(Shell::default());
    let ui = RwSignal::new(UiState::default());
    let flash = RwSignal::new(FlashState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let settings = RwSignal::new(SettingsState::default());

    provide_context(shell);
    provide_context(ui);
    provide_context(flash);
    provide_context(notifications);
    provide_context(settings);
    provide_context(Workspace::new());

    // Browser-only: adopt the stored theme once mounted.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/gearguard.css"/>
        <Title text="GearGuard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ShellView/>
            </Routes>
        </Router>
    }
}

/// Auth gate: login/register until signed in, then the app frame.
#[component]
fn ShellView() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let signed_in = Memo::new(move |_| shell.get().is_authenticated());
    let auth_screen = Memo::new(move |_| match shell.get() {
        Shell::Unauthenticated(screen) => screen,
        Shell::Authenticated(_) => AuthScreen::Login,
    });

    view! {
        <Show
            when=move || signed_in.get()
            fallback=move || {
                move || match auth_screen.get() {
                    AuthScreen::Login => view! { <LoginPage/> }.into_any(),
                    AuthScreen::Register => view! { <RegisterPage/> }.into_any(),
                }
            }
        >
            <AppFrame/>
        </Show>
    }
}

/// Sidebar, top bar, banner, and the one active screen.
#[component]
fn AppFrame() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let active = Memo::new(move |_| shell.get().screen().unwrap_or_default());

    view! {
        <div class="app">
            <Sidebar/>
            <div class="app__main">
                <TopNav/>
                <FlashBanner/>
                <main class="app__content">
                    {move || match active.get() {
                        AppScreen::Dashboard => view! { <DashboardPage/> }.into_any(),
                        AppScreen::Equipment => view! { <EquipmentPage/> }.into_any(),
                        AppScreen::Maintenance => view! { <MaintenancePage/> }.into_any(),
                        AppScreen::Kanban => view! { <KanbanPage/> }.into_any(),
                        AppScreen::Calendar => view! { <CalendarPage/> }.into_any(),
                        AppScreen::Team => view! { <TeamPage/> }.into_any(),
                        AppScreen::Categories => view! { <CategoriesPage/> }.into_any(),
                        AppScreen::Analytics => view! { <AnalyticsPage/> }.into_any(),
                        AppScreen::Settings => view! { <SettingsPage/> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
