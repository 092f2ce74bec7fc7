// src/noyau/format.rs
//
// Affichage d’un résultat f64 pour l’hôte.
// - valeur entière => texte entier ("4", pas "4.0")
// - sinon => écriture décimale la plus courte, avec le séparateur configuré
//   (le texte produit est ré-évaluable tel quel)

use num_traits::ToPrimitive;

use super::reglages::Reglages;

/// Prédicat d’intégralité : `v == trunc(v)` (faux pour NaN et ±∞).
pub fn est_entier(v: f64) -> bool {
    v.is_finite() && v == v.trunc()
}

pub fn format_resultat(v: f64, reglages: &Reglages) -> String {
    if est_entier(v) {
        // -0.0 s’affiche "0"
        return match v.to_i64() {
            Some(n) => n.to_string(),
            None => format!("{v:.0}"),
        };
    }

    let texte = v.to_string();
    match reglages.separateur() {
        '.' => texte,
        sep => texte.replace('.', &sep.to_string()),
    }
}
