use crate::components::absence::AbsenceReport;
use crate::components::calendar::Calendar;
use crate::components::dashboard::Dashboard;
use crate::components::nav::Nav;
use crate::components::volunteer::Volunteer;
use crate::state::PortalState;
use leptos::*;
use portal_core::dto::PortalSnapshot;
use portal_core::nav::Tab;
use portal_core::store::{LoadState, SnapshotStore};
use portal_core::view::PortalView;
use std::sync::Arc;

#[component]
fn Skeleton() -> impl IntoView {
    view! {
      <div id="skeleton-loader" class="animate-pulse">
        <div class="skeleton-card"></div>
        <div class="skeleton-card"></div>
      </div>
    }
}

#[component]
fn LoadError(message: String) -> impl IntoView {
    view! {
      <div id="skeleton-loader" class="text-center">
        <i class="ph-x-circle text-6xl text-red-500 mx-auto"></i>
        <h2 class="text-2xl font-semibold text-slate-700 mt-4">"Failed to Load Portal"</h2>
        <p class="text-slate-500">{message}</p>
      </div>
    }
}

#[component]
fn PortalContent(portal: PortalState, snapshot: Arc<PortalSnapshot>) -> impl IntoView {
    let PortalView {
        dashboard,
        opportunities,
        signups,
        progress,
        students,
    } = PortalView::project(&snapshot);
    let region = move |tab: Tab| move || portal.nav.with(|n| n.content_class(tab));

    view! {
      <div id="main-content">
        <section id=Tab::Dashboard.id() class=region(Tab::Dashboard)>
          <Dashboard portal=portal cards=dashboard/>
        </section>
        <section id=Tab::Calendar.id() class=region(Tab::Calendar)>
          <Calendar portal=portal snapshot=Arc::clone(&snapshot) students=students.clone()/>
        </section>
        <section id=Tab::Volunteer.id() class=region(Tab::Volunteer)>
          <Volunteer portal=portal progress=progress opportunities=opportunities signups=signups/>
        </section>
        <section id=Tab::Actions.id() class=region(Tab::Actions)>
          <AbsenceReport portal=portal snapshot=snapshot students=students/>
        </section>
      </div>
    }
}

/// Signed-in view. Content is rebuilt only when a load outcome is applied
/// (a new store generation); the skeleton shows only while the first load
/// is outstanding.
#[component]
pub fn PortalShell(portal: PortalState) -> impl IntoView {
    let generation = create_memo(move |_| portal.store.with(SnapshotStore::generation));
    let skeleton = move || {
        let _ = generation.get();
        portal.store.with_untracked(SnapshotStore::skeleton_visible)
    };
    let body = move || {
        let _ = generation.get();
        match portal.store.with_untracked(|s| s.state().clone()) {
            LoadState::Ready(snapshot) => {
                view! { <PortalContent portal=portal snapshot=snapshot/> }.into_view()
            }
            LoadState::Failed(message) => view! { <LoadError message=message/> }.into_view(),
            LoadState::Loading => ().into_view(),
        }
    };
    view! {
      <header>
        <Nav portal=portal/>
      </header>
      <main>
        <Show when=skeleton fallback=body>
          <Skeleton/>
        </Show>
      </main>
    }
}
