use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Gallery() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::GalleryView {
            on_navigate_camera: move |_| {
                nav.push(Route::Camera {});
            },
        }
    }
}
