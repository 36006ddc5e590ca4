// src/noyau/format.rs

use super::api::PredictionResult;

/* ------------------------ Nombres ------------------------ */

/// Affichage “en-US” : séparateur de milliers `,`, au plus 2 décimales.
///
/// Valeur absente, nulle ou NaN -> `-` (placeholder).
/// Arrondi au centième sur l’écriture décimale la plus courte du nombre
/// (`1.005` -> `1.01`), demi -> loin de zéro ; zéros finaux retirés.
pub fn formater_nombre(v: Option<f64>) -> String {
    let v = match v {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => return "-".to_string(),
    };

    if v.is_infinite() {
        return if v < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let signe = if v < 0.0 { "-" } else { "" };
    let (entier, frac) = arrondir_centieme(&format!("{}", v.abs()));

    let mut out = String::with_capacity(entier.len() + 8);
    out.push_str(signe);
    out.push_str(&grouper_milliers(&entier));

    let frac = frac.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }

    out
}

/// "8.345" -> ("8", "35") : arrondi décimal exact, sans repasser par f64.
///
/// Entrée : écriture `Display` d’un f64 positif fini (jamais d’exposant).
fn arrondir_centieme(decimal: &str) -> (String, String) {
    let (ent, frac) = decimal.split_once('.').unwrap_or((decimal, ""));
    let f = frac.as_bytes();

    // entier + 2 chiffres de fraction (complétés par des 0)
    let mut chiffres: Vec<u8> = ent.bytes().collect();
    chiffres.extend((0..2).map(|i| f.get(i).copied().unwrap_or(b'0')));

    if f.get(2).is_some_and(|&c| c >= b'5') {
        let mut i = chiffres.len();
        loop {
            if i == 0 {
                chiffres.insert(0, b'1');
                break;
            }
            i -= 1;
            if chiffres[i] == b'9' {
                chiffres[i] = b'0';
            } else {
                chiffres[i] += 1;
                break;
            }
        }
    }

    let coupe = chiffres.len() - 2;
    let entier = String::from_utf8_lossy(&chiffres[..coupe]).into_owned();
    let frac = String::from_utf8_lossy(&chiffres[coupe..]).into_owned();
    (entier, frac)
}

/// "1234567" -> "1,234,567" (chiffres ASCII attendus).
fn grouper_milliers(chiffres: &str) -> String {
    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/* ------------------------ Panneau prédiction ------------------------ */

/// Les quatre lignes du panneau, dans l’ordre d’affichage.
pub fn lignes_prediction(p: &PredictionResult) -> [String; 4] {
    [
        format!("Length Cell: {} mm", formater_nombre(p.length_cell)),
        format!("Width Cell: {} mm", formater_nombre(p.width_cell)),
        format!("Height Cell: {} mm", formater_nombre(p.height_cell)),
        format!("Power Density: {} Wh/kg", formater_nombre(p.power_density)),
    ]
}
