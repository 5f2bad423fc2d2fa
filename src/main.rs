use conservation_quiz::QuizApp;
use conservation_quiz::app::SELECTION_KEY;
use conservation_quiz::config::QuizConfig;
use conservation_quiz::data::QuestionBank;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let config = QuizConfig::from_env()?;
    let bank = match &config.bank_path {
        Some(path) => {
            log::info!("cargando banco de preguntas desde {}", path.display());
            QuestionBank::from_path(path)?
        }
        None => QuestionBank::embedded()?,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 640.0]),
        ..Default::default()
    };
    let title = if bank.subject().is_empty() {
        "Quiz".to_string()
    } else {
        format!("{} Quiz", bank.subject())
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            // Única lectura de la clave guardada por la pantalla de selección
            let last = cc
                .storage
                .and_then(|s| eframe::get_value::<String>(s, SELECTION_KEY));
            Ok(Box::new(QuizApp::new(config, bank).with_last_selection(last)))
        }),
    )?;
    Ok(())
}
