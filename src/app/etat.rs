//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir le formulaire, l’état de la prédiction et la file des réponses,
//! et offrir les transitions de soumission sans logique d’affichage.
//!
//! Contrats :
//! - Une seule requête en vol à la fois (re-soumission refusée pendant l’attente).
//! - Chaque requête porte un numéro de séquence : toute réponse qui ne correspond
//!   pas à la requête en vol est ignorée (prédiction et analyse viennent toujours
//!   de la même paire requête/réponse).
//! - Le formulaire n’est jamais modifié par une réponse (on peut corriger et renvoyer).
//! - La cause réelle d’un échec va au journal, jamais à l’écran.

use std::sync::mpsc::{channel, Receiver, Sender};

use eframe::egui;
use log::{debug, error, info};

use crate::noyau::{
    normaliser, ClientPrediction, ConfigApi, ErreurApi, PredictionRequest, PredictionResult,
    ReponsePrediction, SaisiesPack,
};

/// Seul message d’échec montré à l’utilisateur.
pub const MESSAGE_ERREUR: &str = "Failed to get prediction. Please check API connection.";

/// Catégorie d’échec visible côté UI (la cause fine reste dans le journal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeErreur {
    /// Requête non aboutie ou statut d’erreur.
    Transport,
    /// Statut OK mais charge utile inutilisable.
    ReponseInvalide,
}

impl TypeErreur {
    pub fn message(self) -> &'static str {
        MESSAGE_ERREUR
    }
}

impl From<&ErreurApi> for TypeErreur {
    fn from(e: &ErreurApi) -> Self {
        if e.est_reponse_invalide() {
            TypeErreur::ReponseInvalide
        } else {
            TypeErreur::Transport
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum EtatPrediction {
    #[default]
    Vide,
    EnCours {
        sequence: u64,
    },
    Succes {
        prediction: PredictionResult,
        /// Analyse déjà nettoyée ; None si le service n’en a pas fourni.
        analyse: Option<String>,
    },
    Echec(TypeErreur),
}

impl EtatPrediction {
    pub fn est_en_cours(&self) -> bool {
        matches!(self, EtatPrediction::EnCours { .. })
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        match self {
            EtatPrediction::Succes { prediction, .. } => Some(prediction),
            _ => None,
        }
    }

    pub fn analyse(&self) -> Option<&str> {
        match self {
            EtatPrediction::Succes { analyse, .. } => analyse.as_deref(),
            _ => None,
        }
    }

    pub fn erreur(&self) -> Option<TypeErreur> {
        match self {
            EtatPrediction::Echec(t) => Some(*t),
            _ => None,
        }
    }
}

/// Réponse livrée par la tâche d’arrière-plan, étiquetée par sa séquence.
pub type Livraison = (u64, Result<ReponsePrediction, ErreurApi>);

pub struct AppPredicteur {
    // --- entrée utilisateur ---
    pub saisies: SaisiesPack,

    // --- sortie ---
    pub etat: EtatPrediction,

    // --- plomberie requête ---
    sequence: u64,
    client: ClientPrediction,
    tx: Sender<Livraison>,
    rx: Receiver<Livraison>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus au premier champ (démarrage, reset).
    pub focus_premier_champ: bool,
}

impl Default for AppPredicteur {
    fn default() -> Self {
        Self::avec_config(ConfigApi::default())
    }
}

impl AppPredicteur {
    pub fn avec_config(config: ConfigApi) -> Self {
        let (tx, rx) = channel();
        Self {
            saisies: SaisiesPack::default(),
            etat: EtatPrediction::Vide,
            sequence: 0,
            client: ClientPrediction::new(config),
            tx,
            rx,
            focus_premier_champ: true,
        }
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &ClientPrediction {
        &self.client
    }

    /* ------------------------ Transitions ------------------------ */

    /// Vide/Succes/Echec -> EnCours.
    ///
    /// Efface erreur + analyse précédentes, fige la requête depuis le formulaire.
    /// None si une requête est déjà en vol.
    pub fn demarrer_soumission(&mut self) -> Option<(u64, PredictionRequest)> {
        if self.etat.est_en_cours() {
            debug!("soumission ignorée : requête #{} en vol", self.sequence);
            return None;
        }

        self.sequence += 1;
        let requete = self.saisies.vers_requete();
        self.etat = EtatPrediction::EnCours {
            sequence: self.sequence,
        };

        info!("requête #{} : {:?}", self.sequence, requete);
        Some((self.sequence, requete))
    }

    /// EnCours -> Succes/Echec, seulement pour la requête en vol.
    ///
    /// Retourne false si la réponse est périmée (ignorée).
    pub fn appliquer_reponse(
        &mut self,
        sequence: u64,
        resultat: Result<ReponsePrediction, ErreurApi>,
    ) -> bool {
        match self.etat {
            EtatPrediction::EnCours { sequence: s } if s == sequence => {}
            _ => {
                debug!("réponse #{sequence} périmée, ignorée");
                return false;
            }
        }

        self.etat = match resultat {
            Ok(reponse) => {
                info!("réponse #{sequence} reçue");
                EtatPrediction::Succes {
                    prediction: reponse.predictions,
                    // pas d’analyse => pas de nettoyage
                    analyse: reponse.analyse.as_deref().map(normaliser),
                }
            }
            Err(e) => {
                error!("API Error (requête #{sequence}): {e}");
                EtatPrediction::Echec(TypeErreur::from(&e))
            }
        };
        true
    }

    /// Lance la requête hors du thread UI ; la réponse arrive par le canal.
    pub fn soumettre(&mut self, ctx: &egui::Context) {
        let Some((sequence, requete)) = self.demarrer_soumission() else {
            return;
        };
        lancer_requete(
            self.client.clone(),
            sequence,
            requete,
            self.tx.clone(),
            ctx.clone(),
        );
    }

    /// À appeler à chaque frame : applique les réponses arrivées.
    pub fn recevoir_reponses(&mut self) {
        while let Ok((sequence, resultat)) = self.rx.try_recv() {
            self.appliquer_reponse(sequence, resultat);
        }
    }

    /// Reset : formulaire + résultats. Une requête en vol sera ignorée à son arrivée.
    pub fn reinitialiser(&mut self) {
        self.saisies.vider();
        self.etat = EtatPrediction::Vide;
        self.focus_premier_champ = true;
    }

    #[cfg(test)]
    pub(crate) fn emetteur(&self) -> Sender<Livraison> {
        self.tx.clone()
    }
}

/* ------------------------ Exécution (natif / web) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn lancer_requete(
    client: ClientPrediction,
    sequence: u64,
    requete: PredictionRequest,
    tx: Sender<Livraison>,
    ctx: egui::Context,
) {
    std::thread::spawn(move || {
        let resultat = client.predire(&requete);
        if tx.send((sequence, resultat)).is_err() {
            debug!("réponse #{sequence} : application fermée");
        }
        ctx.request_repaint();
    });
}

#[cfg(target_arch = "wasm32")]
fn lancer_requete(
    client: ClientPrediction,
    sequence: u64,
    requete: PredictionRequest,
    tx: Sender<Livraison>,
    ctx: egui::Context,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let resultat = client.predire(&requete).await;
        if tx.send((sequence, resultat)).is_err() {
            debug!("réponse #{sequence} : application fermée");
        }
        ctx.request_repaint();
    });
}
