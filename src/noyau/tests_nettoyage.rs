//! Tests de campagne du nettoyage : cas de référence + propriétés.
//!
//! - textes sans notation : inchangés
//! - passes de suppression : idempotentes
//! - RNG déterministe (seed fixe) pour les textes générés

use super::nettoyage::{
    normaliser, retirer_delimiteurs, retirer_segments_dollar, retirer_unites,
};

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick<'a>(&mut self, choix: &[&'a str]) -> &'a str {
        choix[(self.next_u32() as usize) % choix.len()]
    }
}

/// Texte plausible SANS aucun jeton de notation.
fn texte_neutre(rng: &mut Rng, mots: usize) -> String {
    const MOTS: &[&str] = &[
        "cell", "pack", "density", "150.12", "Wh/kg", "(a)", "{b}", "x", "=", "-", "/", "\n",
        "é", "×", "%", "text", "frac", "times", ",", "\\", "\\n", "kWh",
    ];
    let mut out = String::new();
    for _ in 0..mots {
        out.push_str(rng.pick(MOTS));
        out.push(' ');
    }
    out
}

/// Texte avec notation mélangée.
fn texte_balise(rng: &mut Rng, mots: usize) -> String {
    const MOTS: &[&str] = &[
        "cell", r"\(", r"\)", "$x$", "$", "^", r"\times", r"\frac{E}{V}", r",\text{kg}", "5",
        "\n", "density",
    ];
    let mut out = String::new();
    for _ in 0..mots {
        out.push_str(rng.pick(MOTS));
        out.push(' ');
    }
    out
}

/* ------------------------ Cas de référence ------------------------ */

#[test]
fn ref_vide() {
    assert_eq!(normaliser(""), "");
}

#[test]
fn ref_delimiteurs_et_exposant() {
    assert_eq!(normaliser(r"\(E=mc^2\)"), "E=mc^ 2");
}

#[test]
fn ref_times() {
    assert_eq!(normaliser(r"a \times b"), "a × b");
}

#[test]
fn ref_fraction() {
    assert_eq!(normaliser(r"\frac{1}{2}"), "(1)/(2)");
}

#[test]
fn ref_unite() {
    assert_eq!(normaliser(r"5,\text{kg}"), "5");
}

#[test]
fn ref_analyse_complete() {
    assert_eq!(
        normaliser(r"Power density $x$ is \frac{E}{V}"),
        "Power density  is (E)/(V)"
    );
}

#[test]
fn ref_multiligne() {
    let brut = "**Cell design**\n- \\(V = L \\times W \\times H\\)\n- ratio \\frac{V_{cell}}{V_{pack}}\n- mass 2,\\text{kg} total";
    let attendu = "**Cell design**\n- V = L × W × H\n- ratio (V_{cell})/(V_{pack})}\n- mass 2 total";
    assert_eq!(normaliser(brut), attendu);
}

#[test]
fn ref_montant_dollar_perdu() {
    // Comportement conservé : deux montants sur la même ligne s’effacent mutuellement.
    assert_eq!(normaliser("cost $5 to $10 per cell"), "cost 10 per cell");
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn prop_texte_neutre_inchange() {
    let mut rng = Rng::new(0xBA77_E21E);
    for n in 0..300 {
        let s = texte_neutre(&mut rng, n % 40);
        assert_eq!(normaliser(&s), s, "s={s:?}");
    }
}

#[test]
fn prop_suppressions_idempotentes() {
    let mut rng = Rng::new(42);
    for n in 0..300 {
        let s = texte_balise(&mut rng, n % 30);

        let d = retirer_delimiteurs(&s);
        assert_eq!(retirer_delimiteurs(&d), d, "s={s:?}");

        let u = retirer_unites(&s);
        assert_eq!(retirer_unites(&u), u, "s={s:?}");

        let out = normaliser(&s);
        assert_eq!(retirer_delimiteurs(&out), out, "s={s:?}");
        assert_eq!(retirer_unites(&out), out, "s={s:?}");
    }
}

#[test]
fn prop_segments_dollar_idempotents_sur_sortie() {
    let mut rng = Rng::new(7);
    for n in 0..300 {
        let s = texte_balise(&mut rng, n % 30);
        let out = retirer_segments_dollar(&s);
        // au plus un $ par ligne après passage : plus rien à retirer
        assert_eq!(retirer_segments_dollar(&out), out, "s={s:?}");
    }
}

#[test]
fn prop_exposant_non_idempotent() {
    let une = normaliser("x^2");
    let deux = normaliser(&une);
    assert_eq!(une, "x^ 2");
    assert_eq!(deux, "x^  2");
}

#[test]
fn prop_total_sur_entrees_arbitraires() {
    let mut rng = Rng::new(0xDEAD_BEEF);
    for _ in 0..500 {
        let len = (rng.next_u32() % 64) as usize;
        let s: String = (0..len)
            .map(|_| {
                let c = rng.next_u32() % 0x250;
                char::from_u32(c).unwrap_or('?')
            })
            .collect();
        let _ = normaliser(&s);
    }
}
