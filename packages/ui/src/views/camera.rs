use dioxus::prelude::*;

use crate::{
    discard_capture, icons, log_activity, make_gallery, save_capture, use_activity_log, Icon,
    LogLevel,
};

/// Shared capture view.
///
/// Opens the device camera through a file input with `capture`, shows the
/// captured photo, and on save hands it to the media library and appends the
/// resulting URI to the gallery. Retake discards the capture.
#[component]
pub fn CameraView(
    /// Called when the user saves a capture or backs out.
    on_done: EventHandler<()>,
) -> Element {
    // URI of the capture currently shown in the preview, if any.
    let mut captured = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<String>::None);
    let mut activity_log = use_activity_log();

    let handle_capture = move |evt: Event<FormData>| {
        let Some(file_engine) = evt.files() else {
            return;
        };
        let Some(name) = file_engine.files().first().cloned() else {
            return;
        };
        spawn(async move {
            match file_engine.read_file(&name).await {
                Some(bytes) => match save_capture(bytes, &name).await {
                    Ok(uri) => {
                        status.set(None);
                        captured.set(Some(uri));
                    }
                    Err(e) => {
                        log_activity(&mut activity_log, LogLevel::Error, &format!("Capture: {e}"));
                        status.set(Some("Failed to save image".to_string()));
                    }
                },
                None => {
                    log_activity(&mut activity_log, LogLevel::Error, "Failed to take picture");
                    status.set(Some("Failed to take picture".to_string()));
                }
            }
        });
    };

    let handle_retake = move |_| {
        if let Some(uri) = captured.take() {
            discard_capture(&uri);
        }
        status.set(None);
    };

    // Backing out of an unsaved preview releases the capture too.
    let handle_back = move |_| {
        if let Some(uri) = captured.take() {
            discard_capture(&uri);
        }
        on_done.call(());
    };

    let handle_save = move |_| {
        let Some(uri) = captured() else {
            return;
        };
        spawn(async move {
            let gallery = make_gallery();
            match gallery.add(&uri).await {
                Ok(()) => {
                    log_activity(&mut activity_log, LogLevel::Success, "Image saved to gallery");
                    captured.set(None);
                    on_done.call(());
                }
                Err(e) => {
                    log_activity(&mut activity_log, LogLevel::Error, &format!("Save: {e}"));
                    status.set(Some("Failed to save image".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "camera-screen",
            button { class: "back-button", onclick: handle_back,
                Icon { icon: icons::FaArrowLeft, width: 24, height: 24, fill: "white" }
            }

            if let Some(uri) = captured() {
                div { class: "camera-preview",
                    h4 { class: "camera-preview-title", "Captured Image" }
                    img { class: "camera-preview-img", src: "{uri}" }
                    div { class: "camera-actions",
                        button { class: "retake-button", onclick: handle_retake,
                            Icon { icon: icons::FaCamera, width: 18, height: 18, fill: "white" }
                            "Retake"
                        }
                        button { class: "save-button", onclick: handle_save,
                            Icon { icon: icons::FaImage, width: 18, height: 18, fill: "white" }
                            "Save to Gallery"
                        }
                    }
                }
            } else {
                label { class: "capture-label",
                    Icon { icon: icons::FaCamera, width: 32, height: 32, fill: "#111" }
                    span { "Take a photo" }
                    input {
                        class: "capture-input",
                        r#type: "file",
                        accept: "image/*",
                        capture: "environment",
                        onchange: handle_capture,
                    }
                }
            }

            if let Some(msg) = status() {
                div { class: "alert-banner", "{msg}" }
            }
        }
    }
}
