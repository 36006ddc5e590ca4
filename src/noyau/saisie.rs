// src/noyau/saisie.rs
//
// Saisie du pack batterie
// -----------------------
// - 5 champs fixes (pas de clés texte libres)
// - Lecture “tolérante” d’un flottant : le plus long préfixe numérique, sinon NaN
// - Aucune validation bloquante : NaN part tel quel au service (JSON `null`)

use serde::Serialize;

/// Les cinq paramètres du pack, dans l’ordre d’affichage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Champ {
    LongueurPack,
    LargeurPack,
    HauteurPack,
    Energie,
    TensionTotale,
}

impl Champ {
    pub const TOUS: [Champ; 5] = [
        Champ::LongueurPack,
        Champ::LargeurPack,
        Champ::HauteurPack,
        Champ::Energie,
        Champ::TensionTotale,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            Champ::LongueurPack => "Length (mm)",
            Champ::LargeurPack => "Width (mm)",
            Champ::HauteurPack => "Height (mm)",
            Champ::Energie => "Energy (kWh)",
            Champ::TensionTotale => "Total Voltage (V)",
        }
    }

    /// Nom exact du champ dans le corps JSON envoyé au service.
    pub fn cle_json(self) -> &'static str {
        match self {
            Champ::LongueurPack => "Length_pack",
            Champ::LargeurPack => "Width_pack",
            Champ::HauteurPack => "Height_pack",
            Champ::Energie => "Energy",
            Champ::TensionTotale => "Total_Voltage",
        }
    }

    /// Texte d’aide du champ vide.
    pub fn indice(self) -> String {
        format!("Enter {}", self.libelle().to_lowercase())
    }
}

/// Textes bruts du formulaire (ce que l’utilisateur a tapé).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SaisiesPack {
    pub longueur: String,
    pub largeur: String,
    pub hauteur: String,
    pub energie: String,
    pub tension: String,
}

impl SaisiesPack {
    pub fn texte(&self, champ: Champ) -> &str {
        match champ {
            Champ::LongueurPack => &self.longueur,
            Champ::LargeurPack => &self.largeur,
            Champ::HauteurPack => &self.hauteur,
            Champ::Energie => &self.energie,
            Champ::TensionTotale => &self.tension,
        }
    }

    pub fn texte_mut(&mut self, champ: Champ) -> &mut String {
        match champ {
            Champ::LongueurPack => &mut self.longueur,
            Champ::LargeurPack => &mut self.largeur,
            Champ::HauteurPack => &mut self.hauteur,
            Champ::Energie => &mut self.energie,
            Champ::TensionTotale => &mut self.tension,
        }
    }

    pub fn vider(&mut self) {
        for champ in Champ::TOUS {
            self.texte_mut(champ).clear();
        }
    }

    /// Construit une requête neuve à partir de l’état courant du formulaire.
    pub fn vers_requete(&self) -> PredictionRequest {
        PredictionRequest {
            length_pack: parse_nombre(&self.longueur),
            width_pack: parse_nombre(&self.largeur),
            height_pack: parse_nombre(&self.hauteur),
            energy: parse_nombre(&self.energie),
            total_voltage: parse_nombre(&self.tension),
        }
    }
}

/// Corps de `POST /predict`.
///
/// Unités implicites (mm, kWh, V), non vérifiées. serde_json écrit NaN comme `null`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PredictionRequest {
    #[serde(rename = "Length_pack")]
    pub length_pack: f64,
    #[serde(rename = "Width_pack")]
    pub width_pack: f64,
    #[serde(rename = "Height_pack")]
    pub height_pack: f64,
    #[serde(rename = "Energy")]
    pub energy: f64,
    #[serde(rename = "Total_Voltage")]
    pub total_voltage: f64,
}

/// Lecture tolérante d’un flottant.
///
/// - espaces de tête ignorés
/// - `[+-]` puis `Infinity`, ou chiffres `[.chiffres]` / `.chiffres`, exposant optionnel
/// - le reste du texte est ignoré (`"12kg"` -> 12)
/// - aucun préfixe numérique (ou texte vide) -> NaN
pub fn parse_nombre(texte: &str) -> f64 {
    let s = texte.trim_start();
    let b = s.as_bytes();
    let n = b.len();
    let mut i = 0;

    let negatif = b.first() == Some(&b'-');
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    if s[i..].starts_with("Infinity") {
        return if negatif {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let debut = i;
    while i < n && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut chiffres = i - debut;

    if i < n && b[i] == b'.' {
        let mut k = i + 1;
        while k < n && b[k].is_ascii_digit() {
            k += 1;
        }
        // "5." : on s’arrête avant le point (même valeur)
        if k > i + 1 {
            chiffres += k - (i + 1);
            i = k;
        }
    }

    if chiffres == 0 {
        return f64::NAN;
    }

    // Exposant seulement s’il est complet ("1e" -> 1)
    if i < n && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < n && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let d = j;
        while j < n && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > d {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}
