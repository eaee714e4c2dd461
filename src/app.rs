//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::admin_route::AdminRoute;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_login::AdminLoginPage, create_account::CreateAccountPage,
    dashboard::DashboardPage, home::HomePage, kyc::KycPage, login::LoginPage, signup::SignupPage,
    transaction::TransactionPage,
};
use crate::state::session::Session;

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
/// Provides the session and backend configuration, then routes. Customer
/// pages past onboarding sit behind `ProtectedRoute`; the admin console sits
/// behind `AdminRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(Session::restore()));
    provide_context(ClientConfig::from_build_env());

    view! {
        <Title text="SmartBank"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("kyc") view=KycPage/>
                <Route
                    path=StaticSegment("create-account")
                    view=|| view! { <ProtectedRoute><CreateAccountPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("transaction")
                    view=|| view! { <ProtectedRoute><TransactionPage/></ProtectedRoute> }
                />
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <AdminRoute><AdminDashboardPage/></AdminRoute> }
                />
            </Routes>
        </Router>
    }
}
