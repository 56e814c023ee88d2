mod app;

use app::PortalApp;
use portal_app::content::Catalog;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let catalog = Catalog::seeded().expect("Failed to load seeded lecture data");

    log::info!("Loaded {} lectures", catalog.lectures().len());
    for lecture in catalog.lectures() {
        log::info!(
            "  - {} ({} topics, {} flashcards, {} quiz questions)",
            lecture.title,
            lecture.topics.len(),
            lecture.flashcards.len(),
            lecture.quiz.len()
        );
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "AI for Data Science - Learning Portal",
        options,
        Box::new(|_cc| Ok(Box::new(PortalApp::new_with_catalog(catalog)))),
    )
}
