// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Formulaire : 5 champs, Enter dans un champ = soumettre
// - Bouton désactivé + spinner tant qu’une requête est en vol
// - Panneaux : prédiction, analyse (texte nettoyé), erreur générique

use eframe::egui;

use super::etat::{AppPredicteur, EtatPrediction};
use crate::noyau::{lignes_prediction, Champ};

const TITRE: &str = "Battery Size Predictor with ChatGotion AI";

const INTRO: &str = "This model predicts optimal battery cell dimensions based on battery pack \
parameters using a Convolutional Neural Network (CNN). ChatGotion AI enhances predictions by \
providing insights into:";

const AIDE_RESET: &str = "Clear the form and the results";

const POINTS: [(&str, &str); 3] = [
    (
        "Battery Cell Design",
        "Optimizing cell configurations for better efficiency.",
    ),
    (
        "Packing Efficiency",
        "Evaluating if predicted cell sizes maximize space utilization.",
    ),
    (
        "Power Density",
        "Assessing if power density meets modern battery performance standards.",
    ),
];

impl AppPredicteur {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(720.0);

                    self.ui_presentation(ui);
                    ui.add_space(10.0);

                    self.ui_formulaire(ui);
                    ui.add_space(10.0);

                    self.ui_resultats(ui);
                });
            });
    }

    fn ui_presentation(&self, ui: &mut egui::Ui) {
        ui.heading(egui::RichText::new(TITRE).strong());
        ui.add_space(6.0);
        ui.label(INTRO);

        for (titre, detail) in POINTS {
            ui.horizontal_wrapped(|ui| {
                ui.label("•");
                ui.label(egui::RichText::new(titre).strong());
                ui.label(format!("- {detail}"));
            });
        }
    }

    fn ui_formulaire(&mut self, ui: &mut egui::Ui) {
        let mut entree_validee = false;

        egui::Grid::new("formulaire_pack")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for (i, champ) in Champ::TOUS.into_iter().enumerate() {
                    ui.label(egui::RichText::new(champ.libelle()).strong());

                    let resp = ui.add(
                        egui::TextEdit::singleline(self.saisies.texte_mut(champ))
                            .desired_width(240.0)
                            .hint_text(champ.indice())
                            .id_source(("champ_pack", champ.cle_json())),
                    );

                    if i == 0 && self.focus_premier_champ {
                        resp.request_focus();
                        self.focus_premier_champ = false;
                    }

                    // Enter : le champ perd le focus au moment où la touche est pressée
                    if resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
                        entree_validee = true;
                    }

                    ui.end_row();
                }
            });

        ui.add_space(8.0);

        let en_cours = self.etat.est_en_cours();
        let mut clic = false;

        ui.horizontal(|ui| {
            let bouton = ui.add_enabled(
                !en_cours,
                egui::Button::new("Predict & Optimize").min_size(egui::vec2(180.0, 36.0)),
            );
            clic = bouton.clicked();

            if ui
                .button("Reset")
                .on_hover_text(AIDE_RESET)
                .clicked()
            {
                self.reinitialiser();
            }

            if en_cours {
                ui.spinner();
                ui.label("Prediction in progress…");
            }
        });

        if clic || entree_validee {
            self.soumettre(ui.ctx());
        }
    }

    fn ui_resultats(&self, ui: &mut egui::Ui) {
        match &self.etat {
            EtatPrediction::Vide | EtatPrediction::EnCours { .. } => {}
            EtatPrediction::Succes {
                prediction,
                analyse,
            } => {
                Self::panneau(ui, "NN Model Predictions", |ui| {
                    for ligne in lignes_prediction(prediction) {
                        ui.label(ligne);
                    }
                });

                if let Some(texte) = analyse {
                    ui.add_space(10.0);
                    Self::panneau(ui, "ChatGotion AI Optimization", |ui| {
                        // équivalent “pre-wrap” : retours à la ligne conservés
                        ui.add(egui::Label::new(egui::RichText::new(texte).monospace()).wrap());
                    });
                }
            }
            EtatPrediction::Echec(t) => {
                ui.add_space(8.0);
                ui.colored_label(ui.visuals().error_fg_color, t.message());
            }
        }
    }

    fn panneau(ui: &mut egui::Ui, titre: &str, contenu: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                    ui.label(egui::RichText::new(titre).heading());
                    ui.add_space(4.0);
                    contenu(ui);
                });
            });
    }
}
