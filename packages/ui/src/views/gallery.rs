use dioxus::prelude::*;

use crate::{icons, log_activity, make_gallery, use_activity_log, ActivityBanner, Icon, LogLevel};

/// Shared gallery view.
///
/// Lists every captured image in capture order, with a delete button per
/// image and a capture button. Platform packages provide the navigation
/// callback to the camera screen.
#[component]
pub fn GalleryView(
    /// Called when the user wants to capture a new image.
    on_navigate_camera: EventHandler<()>,
) -> Element {
    let mut images = use_signal(Vec::<String>::new);
    let mut load_failed = use_signal(|| false);
    let mut activity_log = use_activity_log();

    // Load the stored list on mount; re-runs when the view remounts after
    // navigating back from the camera.
    let _loader = use_resource(move || async move {
        let gallery = make_gallery();
        match gallery.list().await {
            Ok(list) => {
                images.set(list);
                load_failed.set(false);
            }
            Err(e) => {
                log_activity(&mut activity_log, LogLevel::Error, &format!("Load: {e}"));
                load_failed.set(true);
            }
        }
    });

    let handle_remove = move |uri: String| {
        spawn(async move {
            let gallery = make_gallery();
            if let Err(e) = gallery.remove(&uri).await {
                log_activity(&mut activity_log, LogLevel::Error, &format!("Delete: {e}"));
                return;
            }
            log_activity(&mut activity_log, LogLevel::Info, &format!("Removed {uri}"));
            match gallery.list().await {
                Ok(list) => images.set(list),
                Err(e) => {
                    log_activity(&mut activity_log, LogLevel::Error, &format!("Reload: {e}"))
                }
            }
        });
    };

    rsx! {
        div { class: "gallery-screen",
            h2 { class: "gallery-header", "Captured images" }

            if images().is_empty() && !load_failed() {
                p { class: "gallery-empty", "No images captured yet." }
            }

            div { class: "gallery-list",
                for (i, uri) in images().into_iter().enumerate() {
                    div { key: "{i}", class: "gallery-item",
                        img { class: "gallery-item-img", src: "{uri}" }
                        button {
                            class: "gallery-delete",
                            onclick: move |_| handle_remove(uri.clone()),
                            Icon {
                                icon: icons::FaTrashCan,
                                width: 20,
                                height: 20,
                                fill: "#d33",
                            }
                        }
                    }
                }
            }

            button {
                class: "capture-button",
                onclick: move |_| on_navigate_camera.call(()),
                Icon { icon: icons::FaCamera, width: 18, height: 18, fill: "white" }
                "Capture Image"
            }

            // Surfaces failed loads, deletes, and reloads from the log.
            ActivityBanner {}
        }
    }
}
