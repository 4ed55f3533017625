use dioxus::prelude::*;

#[component]
pub fn Camera() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::CameraView {
            on_done: move |_| {
                // Remounts the gallery, which reloads the stored list.
                nav.go_back();
            },
        }
    }
}
