// src/noyau/api.rs
//
// Client du service de prédiction (hors dépôt)
// --------------------------------------------
// POST {base_url}/predict  (corps JSON = PredictionRequest)
// Réponse attendue : { "predictions": {...}, "deepseek_analysis": "..." }
//
// - NATIF : reqwest bloquant (à appeler hors du thread UI)
// - WEB   : reqwest async (fetch du navigateur)
// - Décodage commun : decoder_reponse(statut, corps)

use serde::Deserialize;
use serde_json::Value;

use super::config::ConfigApi;
use super::erreur::ErreurApi;
use super::saisie::PredictionRequest;

/// Sorties du modèle. Champ absent -> None (affiché `-`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "Length_cell", default)]
    pub length_cell: Option<f64>,
    #[serde(rename = "Width_cell", default)]
    pub width_cell: Option<f64>,
    #[serde(rename = "Height_cell", default)]
    pub height_cell: Option<f64>,
    #[serde(rename = "Power_density", default)]
    pub power_density: Option<f64>,
}

/// Réponse exploitable : prédiction + analyse brute (pas encore nettoyée).
#[derive(Clone, Debug, PartialEq)]
pub struct ReponsePrediction {
    pub predictions: PredictionResult,
    pub analyse: Option<String>,
}

/// Statut + corps -> réponse exploitable ou erreur typée.
///
/// Le corps ET `predictions` doivent être des objets JSON : serde accepterait
/// sinon un tableau rempli par position (`[1,2,3,4]`).
pub fn decoder_reponse(statut: u16, corps: &str) -> Result<ReponsePrediction, ErreurApi> {
    if !(200..300).contains(&statut) {
        return Err(ErreurApi::Statut {
            statut,
            corps: corps.chars().take(200).collect(),
        });
    }

    let brut: Value = serde_json::from_str(corps)
        .map_err(|e| ErreurApi::ReponseInvalide(format!("JSON illisible: {e}")))?;

    let objet = brut
        .as_object()
        .ok_or_else(|| ErreurApi::ReponseInvalide("corps non objet".into()))?;

    let predictions = match objet.get("predictions") {
        Some(p @ Value::Object(_)) => PredictionResult::deserialize(p)
            .map_err(|e| ErreurApi::ReponseInvalide(format!("`predictions`: {e}")))?,
        Some(Value::Null) | None => {
            return Err(ErreurApi::ReponseInvalide(
                "champ `predictions` absent".into(),
            ))
        }
        Some(_) => {
            return Err(ErreurApi::ReponseInvalide(
                "champ `predictions` non objet".into(),
            ))
        }
    };

    let analyse = match objet.get("deepseek_analysis") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(_) => {
            return Err(ErreurApi::ReponseInvalide(
                "champ `deepseek_analysis` non texte".into(),
            ))
        }
    };

    Ok(ReponsePrediction {
        predictions,
        analyse,
    })
}

/// Client léger : la configuration seulement, le client HTTP est créé par appel.
#[derive(Clone, Debug, Default)]
pub struct ClientPrediction {
    config: ConfigApi,
}

impl ClientPrediction {
    pub fn new(config: ConfigApi) -> Self {
        Self { config }
    }

    /// Appel bloquant : à utiliser dans un thread d’arrière-plan.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn predire(&self, requete: &PredictionRequest) -> Result<ReponsePrediction, ErreurApi> {
        let url = self.config.url_predict();
        log::debug!("POST {url}");

        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.delai)
            .build()
            .map_err(|e| ErreurApi::Transport(e.to_string()))?;

        let reponse = client
            .post(&url)
            .json(requete)
            .send()
            .map_err(|e| ErreurApi::Transport(e.to_string()))?;

        let statut = reponse.status().as_u16();
        let corps = reponse
            .text()
            .map_err(|e| ErreurApi::Transport(e.to_string()))?;

        decoder_reponse(statut, &corps)
    }

    #[cfg(target_arch = "wasm32")]
    pub async fn predire(
        &self,
        requete: &PredictionRequest,
    ) -> Result<ReponsePrediction, ErreurApi> {
        let url = self.config.url_predict();
        log::debug!("POST {url}");

        let reponse = reqwest::Client::new()
            .post(&url)
            .json(requete)
            .send()
            .await
            .map_err(|e| ErreurApi::Transport(e.to_string()))?;

        let statut = reponse.status().as_u16();
        let corps = reponse
            .text()
            .await
            .map_err(|e| ErreurApi::Transport(e.to_string()))?;

        decoder_reponse(statut, &corps)
    }
}
