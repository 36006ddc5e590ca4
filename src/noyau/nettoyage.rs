// src/noyau/nettoyage.rs
//
// Nettoyage du texte d’analyse (notation LaTeX -> texte brut)
// ----------------------------------------------------------
// Chaîne de passes indépendantes, chacune `&str -> String`, appliquées dans l’ordre :
//
//   1) \( \)          -> supprimés (contenu gardé)
//   2) $ ... $        -> supprimé AVEC le contenu (non gourmand, une seule ligne)
//   3) ^              -> "^ "
//   4) \times         -> ×
//   5) \frac{A}{B}    -> (A)/(B)
//   6) ,\text{...}    -> supprimé
//
// Passes 3 et 4 : non idempotentes au sens strict (3 rajoute un espace à chaque passage).
// Passe 2 : un montant du type "$5 ... $10" sur une ligne disparaît aussi.

use regex::Regex;
use std::sync::OnceLock;

/// Une passe de nettoyage.
pub type Passe = fn(&str) -> String;

/// Ordre d’application (il compte : voir en-tête).
pub const PASSES: [(&str, Passe); 6] = [
    ("delimiteurs", retirer_delimiteurs),
    ("segments_dollar", retirer_segments_dollar),
    ("exposants", espacer_exposants),
    ("times", remplacer_times),
    ("fractions", developper_fractions),
    ("unites", retirer_unites),
];

/// Texte affichable à partir du texte brut du service. Pur et total.
pub fn normaliser(texte: &str) -> String {
    PASSES
        .iter()
        .fold(texte.to_string(), |acc, (_, passe)| passe(&acc))
}

/* ------------------------ Motifs (compilés une fois) ------------------------ */

// `.*?` sans \r ni séparateurs U+2028/U+2029 (le `.` de Rust les accepte).
// Macro plutôt que const : concat! n’accepte que des littéraux.
macro_rules! hors_fin_de_ligne {
    () => {
        r"[^\n\r\x{2028}\x{2029}]*?"
    };
}

fn motif(cache: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    // Motifs constants : une erreur ici est un bug de ce fichier.
    cache.get_or_init(|| Regex::new(source).expect("motif de nettoyage invalide"))
}

fn re_delimiteurs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    motif(&RE, r"\\\(|\\\)")
}

fn re_dollar() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    motif(&RE, concat!(r"\$", hors_fin_de_ligne!(), r"\$"))
}

fn re_frac() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    motif(
        &RE,
        concat!(
            r"\\frac\{(",
            hors_fin_de_ligne!(),
            r")\}\{(",
            hors_fin_de_ligne!(),
            r")\}"
        ),
    )
}

fn re_unite() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    motif(&RE, concat!(r",\\text\{", hors_fin_de_ligne!(), r"\}"))
}

/* ------------------------ Passes ------------------------ */

pub fn retirer_delimiteurs(texte: &str) -> String {
    re_delimiteurs().replace_all(texte, "").into_owned()
}

pub fn retirer_segments_dollar(texte: &str) -> String {
    re_dollar().replace_all(texte, "").into_owned()
}

pub fn espacer_exposants(texte: &str) -> String {
    texte.replace('^', "^ ")
}

pub fn remplacer_times(texte: &str) -> String {
    texte.replace(r"\times", "×")
}

pub fn developper_fractions(texte: &str) -> String {
    re_frac().replace_all(texte, "(${1})/(${2})").into_owned()
}

pub fn retirer_unites(texte: &str) -> String {
    re_unite().replace_all(texte, "").into_owned()
}
