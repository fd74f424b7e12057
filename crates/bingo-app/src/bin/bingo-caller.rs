//! Bingo Caller desktop and web application using egui/eframe.

use bingo_app::BingoApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use bingo_app::{APP_ID, APP_NAME, INITIAL_WINDOW_SIZE, MIN_WINDOW_SIZE};

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_title(APP_NAME)
            .with_resizable(true)
            .with_inner_size(INITIAL_WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(BingoApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn install_panic_alert_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        previous(panic_info);

        let message = panic_info.to_string();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "{} has crashed.\n\n{message}\n\nReloading the page may fix the issue. Called numbers are kept in local storage.",
                bingo_app::APP_NAME
            ));
        }
    }));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    install_panic_alert_hook();

    // Route `log` output to the browser console.
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(BingoApp::new(cc)))),
            )
            .await;

        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(()) => loading_text.remove(),
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
