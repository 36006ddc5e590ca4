//! Noyau du prédicteur (sans egui)
//!
//! Organisation interne :
//! - saisie.rs    : formulaire (5 champs fixes) + lecture tolérante des flottants
//! - nettoyage.rs : texte d’analyse -> texte brut (passes ordonnées)
//! - format.rs    : affichage des nombres (milliers, 2 décimales, `-`)
//! - api.rs       : contrat JSON + client HTTP (natif bloquant / web async)
//! - erreur.rs    : erreurs typées du client
//! - config.rs    : URL du service + délai

pub mod api;
pub mod config;
pub mod erreur;
pub mod format;
pub mod nettoyage;
pub mod saisie;

#[cfg(test)]
mod tests_nettoyage;

// API publique minimale
pub use api::{ClientPrediction, PredictionResult, ReponsePrediction};
pub use config::ConfigApi;
pub use erreur::ErreurApi;
pub use format::lignes_prediction;
pub use nettoyage::normaliser;
pub use saisie::{Champ, PredictionRequest, SaisiesPack};
