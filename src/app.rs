//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    admin_products::AdminProductsPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    product_detail::ProductDetailPage, products::ProductsPage, register::RegisterPage,
};
use crate::state::session::{self, SessionState};

/// Root application component.
///
/// Provides the shared session context, kicks off the storage restore,
/// and sets up client-side routing. The navbar sits inside the router so
/// its links participate in client-side navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    session::spawn_restore(session);

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="Storefront"/>

        <Router>
            <Navbar/>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route
                        path=(StaticSegment("products"), ParamSegment("id"))
                        view=ProductDetailPage
                    />
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("products"))
                        view=AdminProductsPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
