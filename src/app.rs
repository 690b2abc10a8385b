use crate::config::config::*;
use crate::core::gallery::GalleryModel;
use crate::ui::viewer::ArtSpaceApp;

pub fn run() {
    let gallery = match GalleryModel::builtin() {
        Ok(gallery) => gallery,
        Err(e) => {
            log::error!("cannot start without artworks: {e}");
            std::process::exit(1);
        }
    };
    let locale = locale_from_env();
    log::debug!("using locale {locale:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = ArtSpaceApp::new(gallery, locale);
            app.init(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    );

    if let Err(e) = result {
        log::error!("{APP_NAME} v{APP_VERSION} failed to start: {e}");
        std::process::exit(1);
    }
}
