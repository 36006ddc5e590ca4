// src/noyau/erreur.rs

use thiserror::Error;

/// Échecs possibles d’un appel au service de prédiction.
///
/// Le texte sert au journal (diagnostic) ; l’UI n’affiche jamais ces messages tels quels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurApi {
    /// Requête jamais aboutie (DNS, TLS, délai, connexion refusée…).
    #[error("transport: {0}")]
    Transport(String),

    /// Réponse reçue avec un statut d’erreur.
    #[error("statut HTTP {statut}: {corps}")]
    Statut { statut: u16, corps: String },

    /// Statut OK mais charge utile absente ou mal formée.
    #[error("réponse invalide: {0}")]
    ReponseInvalide(String),
}

impl ErreurApi {
    /// Le serveur a répondu, mais pas ce qu’on attendait.
    pub fn est_reponse_invalide(&self) -> bool {
        matches!(self, ErreurApi::ReponseInvalide(_))
    }
}
