//! Noyau f64
//!
//! Organisation interne :
//! - erreur.rs   : CalcError (taxonomie + messages) + ReglagesError
//! - reglages.rs : séparateur décimal (défaut '.', locale pour l’hôte)
//! - jetons.rs   : jetons, tables d’opérateurs/fonctions, lexer paresseux
//! - eval.rs     : descente récursive (Add > Mul > Pow > Sign > Function > Braces > Value)
//! - format.rs   : affichage du résultat (entier replié, séparateur)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod reglages;


#[cfg(test)]
mod tests_fuzz_safe;


// API publique minimale
pub use erreur::{CalcError, ReglagesError};
pub use eval::{evaluate, evaluate_avec};
pub use format::format_resultat;
pub use jetons::FONCTIONS;
pub use reglages::Reglages;
