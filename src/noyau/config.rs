// src/noyau/config.rs

use std::time::Duration;

/// Service de prédiction externe (hors dépôt).
pub const BASE_URL: &str = "https://battery-size-cnn.onrender.com";

/// Le service est hébergé sur une instance qui peut “dormir” : réveil lent.
const DELAI_DEFAUT: Duration = Duration::from_secs(60);

/// Paramètres du client HTTP.
///
/// Pas de fichier, pas de variable d’environnement : constantes par défaut,
/// remplaçables à la construction (tests => serveur factice).
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigApi {
    pub base_url: String,
    pub delai: Duration,
}

impl Default for ConfigApi {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            delai: DELAI_DEFAUT,
        }
    }
}

impl ConfigApi {
    pub fn avec_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// `{base_url}/predict` ; un `/` final sur la base est toléré.
    pub fn url_predict(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }
}
