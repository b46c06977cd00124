//! Page chrome shared by the company and student route groups.
//!
//! Each layout is a parent route: its navigation stays mounted while the
//! nested page in the `Outlet` changes.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::company_header::CompanyHeader;
use crate::components::student_menu_bar::StudentMenuBar;

#[component]
pub fn CompanyLayout() -> impl IntoView {
    view! {
        <div class="company-layout">
            <CompanyHeader />
            <main class="company-layout__main">
                <Outlet />
            </main>
        </div>
    }
}

#[component]
pub fn StudentLayout() -> impl IntoView {
    view! {
        <div class="student-layout">
            <StudentMenuBar />
            <main class="student-layout__main">
                <Outlet />
            </main>
        </div>
    }
}
