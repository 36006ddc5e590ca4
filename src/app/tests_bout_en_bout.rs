//! Tests bout en bout : formulaire -> service factice (httpmock) -> état affiché.
//!
//! Le service réel n’est jamais contacté : ConfigApi pointe sur MockServer.

use std::time::{Duration, Instant};

use eframe::egui;
use httpmock::prelude::*;
use serde_json::json;

use super::etat::{AppPredicteur, EtatPrediction, TypeErreur, MESSAGE_ERREUR};
use crate::noyau::{lignes_prediction, ConfigApi, ErreurApi};

fn app_sur(server: &MockServer) -> AppPredicteur {
    AppPredicteur::avec_config(ConfigApi::avec_base_url(server.base_url()))
}

fn remplir_scenario(app: &mut AppPredicteur) {
    app.saisies.longueur = "100".into();
    app.saisies.largeur = "50".into();
    app.saisies.hauteur = "20".into();
    app.saisies.energie = "1.5".into();
    app.saisies.tension = "400".into();
}

/// Soumission synchrone (même chemin que le thread d’arrière-plan, sans thread).
fn soumettre_et_attendre(app: &mut AppPredicteur) {
    let (seq, requete) = app.demarrer_soumission().expect("aucune requête en vol");
    let resultat = app.client().predire(&requete);
    assert!(app.appliquer_reponse(seq, resultat));
}

/// Budget anti-gel pour les tests qui passent par le vrai thread.
fn attendre_fin(app: &mut AppPredicteur, max: Duration) {
    let start = Instant::now();
    while app.etat.est_en_cours() {
        if start.elapsed() > max {
            panic!("budget temps dépassé: {:?}", max);
        }
        std::thread::sleep(Duration::from_millis(10));
        app.recevoir_reponses();
    }
}

fn mock_succes(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST).path("/predict").json_body(json!({
            "Length_pack": 100.0,
            "Width_pack": 50.0,
            "Height_pack": 20.0,
            "Energy": 1.5,
            "Total_Voltage": 400.0
        }));
        then.status(200).json_body(json!({
            "predictions": {
                "Length_cell": 10,
                "Width_cell": 5,
                "Height_cell": 2,
                "Power_density": 150.1234
            },
            "deepseek_analysis": "Power density $x$ is \\frac{E}{V}"
        }));
    })
}

#[test]
fn scenario_nominal() {
    let server = MockServer::start();
    let mock = mock_succes(&server);

    let mut app = app_sur(&server);
    remplir_scenario(&mut app);
    soumettre_et_attendre(&mut app);

    mock.assert();

    let prediction = app.etat.prediction().expect("prédiction attendue");
    let lignes = lignes_prediction(prediction);
    assert_eq!(lignes[0], "Length Cell: 10 mm");
    assert_eq!(lignes[1], "Width Cell: 5 mm");
    assert_eq!(lignes[2], "Height Cell: 2 mm");
    assert_eq!(lignes[3], "Power Density: 150.12 Wh/kg");
    assert_eq!(app.etat.analyse(), Some("Power density  is (E)/(V)"));
    assert_eq!(app.etat.erreur(), None);
}

#[test]
fn scenario_echec_http_apres_succes() {
    let server = MockServer::start();
    let mut ok = mock_succes(&server);

    let mut app = app_sur(&server);
    remplir_scenario(&mut app);
    soumettre_et_attendre(&mut app);
    assert!(app.etat.analyse().is_some());

    ok.delete();
    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(500).body("Internal Server Error");
    });

    soumettre_et_attendre(&mut app);

    assert_eq!(app.etat.erreur(), Some(TypeErreur::Transport));
    assert_eq!(app.etat.erreur().map(|t| t.message()), Some(MESSAGE_ERREUR));
    assert_eq!(app.etat.analyse(), None);
    assert_eq!(app.etat.prediction(), None);
    // formulaire intact pour renvoyer
    assert_eq!(app.saisies.tension, "400");
}

#[test]
fn reponse_sans_predictions() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200).json_body(json!({ "deepseek_analysis": "orpheline" }));
    });

    let mut app = app_sur(&server);
    soumettre_et_attendre(&mut app);

    assert_eq!(app.etat.erreur(), Some(TypeErreur::ReponseInvalide));
    assert_eq!(app.etat.analyse(), None);
}

#[test]
fn champs_invalides_envoyes_en_null() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/predict").json_body(json!({
            "Length_pack": 100.0,
            "Width_pack": null,
            "Height_pack": null,
            "Energy": null,
            "Total_Voltage": 12.0
        }));
        then.status(200).json_body(json!({ "predictions": {} }));
    });

    let mut app = app_sur(&server);
    app.saisies.longueur = "100".into();
    app.saisies.energie = "beaucoup".into();
    app.saisies.tension = "12V".into();
    soumettre_et_attendre(&mut app);

    mock.assert();
    let lignes = lignes_prediction(app.etat.prediction().expect("prédiction attendue"));
    assert_eq!(lignes[3], "Power Density: - Wh/kg");
    assert_eq!(app.etat.analyse(), None);
}

#[test]
fn service_injoignable() {
    // Port réservé, rien n’écoute : connexion refusée.
    let config = ConfigApi {
        base_url: "http://127.0.0.1:1".into(),
        delai: Duration::from_secs(5),
    };
    let app = AppPredicteur::avec_config(config);
    let requete = app.saisies.vers_requete();

    let e = app.client().predire(&requete).unwrap_err();
    assert!(matches!(e, ErreurApi::Transport(_)), "e={e}");
}

#[test]
fn soumission_via_thread_et_canal() {
    let server = MockServer::start();
    let mock = mock_succes(&server);
    let ctx = egui::Context::default();

    let mut app = app_sur(&server);
    remplir_scenario(&mut app);
    app.soumettre(&ctx);
    assert!(app.etat.est_en_cours());

    // double clic pendant l’attente : aucune seconde requête
    app.soumettre(&ctx);

    attendre_fin(&mut app, Duration::from_secs(10));

    mock.assert_calls(1);
    assert!(matches!(app.etat, EtatPrediction::Succes { .. }));
    assert_eq!(app.etat.analyse(), Some("Power density  is (E)/(V)"));
}
