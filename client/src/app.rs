//! Root application component and server-rendered document shell.
//!
//! ARCHITECTURE
//! ============
//! Routes are split into the public sign-in screens, the company group under
//! the company header, the student group under the student sidebar, and the
//! role landing pages the sign-in flow can send a user to.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::{StaticSegment, path};

use crate::components::event_form::CreateNewEvent;
use crate::pages::layouts::{CompanyLayout, StudentLayout};
use crate::pages::placeholder::RoutePlaceholder;
use crate::pages::sign_in::SignInPage;

/// HTML document wrapper rendered on the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Every path the route table below answers. Kept in step with `App`.
pub const ROUTED_PATHS: [&str; 16] = [
    "/",
    "/sign-in",
    "/home",
    "/advisorHomePage",
    "/admin/users",
    "/student/dashboard",
    "/student/appointments",
    "/student/my-appointments",
    "/student/profile",
    "/company-home-page",
    "/post-competition",
    "/edit-delete-competition",
    "/post-job",
    "/edit-delete-job",
    "/view-user-profile",
    "/create-event",
];

fn placeholder(title: &'static str) -> impl IntoView {
    view! { <RoutePlaceholder title=title /> }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/career-compass.css" />
        <Title text="Career Compass" />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=SignInPage />
                <Route path=path!("/sign-in") view=SignInPage />
                <Route path=path!("/home") view=|| placeholder("Home") />
                <Route path=path!("/advisorHomePage") view=|| placeholder("Advisor Home") />
                <Route path=path!("/admin/users") view=|| placeholder("Manage Users") />
                <ParentRoute path=path!("/student") view=StudentLayout>
                    <Route path=path!("dashboard") view=|| placeholder("Dashboard") />
                    <Route path=path!("appointments") view=|| placeholder("Book Appointment") />
                    <Route path=path!("my-appointments") view=|| placeholder("My Appointments") />
                    <Route path=path!("profile") view=|| placeholder("My Profile") />
                </ParentRoute>
                <ParentRoute path=StaticSegment("") view=CompanyLayout>
                    <Route path=path!("company-home-page") view=|| placeholder("Company Home") />
                    <Route path=path!("post-competition") view=|| placeholder("Post Competition") />
                    <Route path=path!("edit-delete-competition") view=|| placeholder("Edit/Delete Competition") />
                    <Route path=path!("post-job") view=|| placeholder("Post Job") />
                    <Route path=path!("edit-delete-job") view=|| placeholder("Edit/Delete Job") />
                    <Route path=path!("view-user-profile") view=|| placeholder("User Profile") />
                    <Route path=path!("create-event") view=CreateNewEvent />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
