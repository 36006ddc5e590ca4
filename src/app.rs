// src/app.rs
//
// Prédicteur batterie — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppPredicteur (pour main.rs: use crate::app::AppPredicteur;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre par frame : réponses arrivées d’abord, dessin ensuite
// (une réponse n’est jamais affichée avec une frame de retard sur l’état).

pub mod etat;
pub mod vue;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests_bout_en_bout;

pub use etat::AppPredicteur;

use eframe::egui;

impl eframe::App for AppPredicteur {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.recevoir_reponses();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
