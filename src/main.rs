// src/main.rs
//
// Simplificateur x/y/z — point d’entrée NATIF
// -------------------------------------------
// - journal terminal (simplelog), niveau lu dans SIMPLIF_LOG
// - fenêtre eframe : saisie -> noyau -> affichage
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppSimplif` vit dans src/app.rs
// - Ici: point d’entrée seulement

use eframe::egui;
use log::{info, warn};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod app;

use app::AppSimplif;

/// Titre unique (fenêtre + journal).
const TITRE_APP: &str = "Simplificateur x/y/z";

/// Variable d’environnement du niveau de journal.
const VAR_NIVEAU_LOG: &str = "SIMPLIF_LOG";

/* ------------------------ Journal ------------------------ */

/// "debug" | "info" | "warn" | "error" (insensible à la casse).
fn niveau_depuis(valeur: &str) -> Option<LevelFilter> {
    match valeur.trim().to_ascii_lowercase().as_str() {
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None,
    }
}

fn installer_journal() {
    let brut = std::env::var(VAR_NIVEAU_LOG).ok();
    let niveau = brut
        .as_deref()
        .and_then(niveau_depuis)
        .unwrap_or(LevelFilter::Info);

    // Échec possible si un logger est déjà installé : l’app tourne quand même.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        niveau,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    if let Some(v) = brut.filter(|v| niveau_depuis(v).is_none()) {
        warn!("{VAR_NIVEAU_LOG}={v:?} inconnu (debug, info, warn, error) : niveau info");
    }
    info!("{TITRE_APP} démarré (journal : {niveau})");
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

fn main() -> eframe::Result<()> {
    installer_journal();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppSimplif>::default())),
    )
}
