// src/noyau/reglages.rs
//
// Réglages du noyau : un seul paramètre substituable, le séparateur décimal.
// Défaut '.' ; l’hôte part de la locale (LC_ALL / LC_NUMERIC / LANG).

use super::erreur::ReglagesError;
use super::jetons::operateur;

/// Séparateur par défaut (indépendant de la machine : tests reproductibles).
pub const SEPARATEUR_DEFAUT: char = '.';

/// Langues qui écrivent la virgule décimale.
const LANGUES_VIRGULE: &[&str] = &[
    "fr", "de", "es", "it", "pt", "nl", "ru", "pl", "cs", "sk", "da", "sv", "nb", "nn", "no",
    "fi", "tr", "el", "uk", "ro", "hu", "id", "vi", "ca", "hr", "sl", "sr", "bg", "lt", "lv",
    "et",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    separateur: char,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            separateur: SEPARATEUR_DEFAUT,
        }
    }
}

impl Reglages {
    /// Refuse tout caractère qui a déjà un sens pour le lexer
    /// (chiffre, blanc, lettre, opérateur, parenthèse).
    pub fn avec_separateur(separateur: char) -> Result<Self, ReglagesError> {
        if separateur.is_ascii_digit()
            || separateur.is_whitespace()
            || separateur.is_alphabetic()
            || operateur(separateur).is_some()
        {
            return Err(ReglagesError::SeparateurInvalide(separateur));
        }
        Ok(Self { separateur })
    }

    /// Séparateur de la locale du processus (première variable non vide).
    pub fn depuis_locale() -> Self {
        let locale = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|v| std::env::var(v).ok())
            .find(|v| !v.is_empty())
            .unwrap_or_default();

        Self::pour_locale(&locale)
    }

    /// Locale POSIX ("fr_FR.UTF-8") ou étiquette de langue navigateur ("fr-FR").
    pub fn pour_locale(locale: &str) -> Self {
        let separateur = separateur_pour_locale(locale);
        tracing::debug!(%locale, %separateur, "séparateur décimal issu de la locale");
        Self { separateur }
    }

    pub fn separateur(&self) -> char {
        self.separateur
    }
}

/// "fr_FR.UTF-8" -> ',' ; "en_US.UTF-8", "C", "" -> '.'
pub fn separateur_pour_locale(locale: &str) -> char {
    let langue: String = locale
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();

    if LANGUES_VIRGULE.contains(&langue.as_str()) {
        ','
    } else {
        SEPARATEUR_DEFAUT
    }
}
