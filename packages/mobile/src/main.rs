use dioxus::prelude::*;
use views::{Camera, Gallery};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Gallery {},
    #[route("/camera")]
    Camera {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::SNAPVAULT_CSS }
        Router::<Route> {}
    }
}
