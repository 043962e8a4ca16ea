use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::*;
use dioxus_free_icons::Icon;

mod api;
mod pages;

use pages::*;

// ============================================================
// Routes
// ============================================================
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Tenants {},
}

// ============================================================
// Assets
// ============================================================
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

// ============================================================
// Layout
// ============================================================
#[component]
fn Layout() -> Element {
    let route: Route = use_route();

    let link_cls = |target: &Route| {
        if *target == route {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    rsx! {
        div { class: "shell",
            // Sidebar
            nav { class: "sidebar",
                div { class: "brand",
                    h1 { "tenants" }
                    p { "console" }
                }

                div { class: "menu",
                    p { class: "menu-title", "Menu" }
                    Link { class: link_cls(&Route::Tenants {}), to: Route::Tenants {},
                        Icon { width: 16, height: 16, icon: LdUsers }
                        span { "Tenants" }
                    }
                }
            }

            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
