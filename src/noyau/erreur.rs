// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Chaque variante porte un message stable, affichable tel quel par l’hôte.

use thiserror::Error;

/// Échec d’une évaluation. Toujours fatal pour l’appel en cours.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// `(` jamais refermée, ou `)` là où une valeur était attendue.
    #[error("parenthèse manquante")]
    MissingBracket,

    /// Entrée épuisée alors qu’une valeur était attendue.
    #[error("fin d’expression inattendue")]
    EndOfExpression,

    /// Un opérateur (ou une fonction) à la place d’une valeur.
    #[error("nombre attendu")]
    NotANumber,

    #[error("fonction inconnue: {0}")]
    UnknownFunction(String),

    #[error("symbole inconnu")]
    UnknownToken,

    /// Diviseur ou modulo exactement égal à 0.0.
    #[error("division par zéro")]
    DivisionByZero,
}

/// Réglage refusé (voir `Reglages::avec_separateur`).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReglagesError {
    #[error("séparateur décimal invalide: '{0}'")]
    SeparateurInvalide(char),
}
