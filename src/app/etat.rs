//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, expression précédente,
//! notification passagère, réglages) et la logique de validation “Entrée”.
//!
//! Contrats :
//! - Le noyau est appelé seulement ici (`soumettre`), jamais depuis la vue.
//! - Succès : l’entrée est remplacée par le résultat formaté (on peut enchaîner).
//! - Échec : l’entrée reste intacte, le message part en notification.
//! - Le temps est passé en argument (secondes egui) : pas d’horloge cachée.

use calculatrice_f64::noyau::{evaluate_avec, format_resultat, Reglages};

/// Garde-fou : longueur max de l’entrée (la récursion suit les parenthèses).
pub const ENTREE_MAX: usize = 512;

/// Durée d’affichage d’une notification (secondes).
pub const DUREE_NOTIFICATION: f64 = 2.5;

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub expire: f64,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- dernière expression soumise (ligne du haut) ---
    pub precedent: String,

    // --- erreur passagère (toast) ---
    pub notification: Option<Notification>,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::depuis_locale())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            entree: String::new(),
            precedent: String::new(),
            notification: None,
            reglages,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /// Echap / C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Validation (Enter ou "=") : précédent <- entrée, puis évaluation.
    pub fn soumettre(&mut self, maintenant: f64) {
        self.precedent = self.entree.clone();
        self.focus_entree = true;

        if self.entree.chars().count() > ENTREE_MAX {
            tracing::warn!(longueur = self.entree.len(), "entrée trop longue");
            self.notifier(format!("entrée trop longue (max {ENTREE_MAX})"), maintenant);
            return;
        }

        match evaluate_avec(&self.entree, &self.reglages) {
            Ok(v) => {
                self.entree = format_resultat(v, &self.reglages);
                self.notification = None;
            }
            Err(e) => self.notifier(e.to_string(), maintenant),
        }
    }

    pub fn notifier(&mut self, message: impl Into<String>, maintenant: f64) {
        self.notification = Some(Notification {
            message: message.into(),
            expire: maintenant + DUREE_NOTIFICATION,
        });
    }

    /// Message encore visible à `maintenant` ; oublie la notification expirée.
    pub fn notification_active(&mut self, maintenant: f64) -> Option<&str> {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| maintenant >= n.expire)
        {
            self.notification = None;
        }
        self.notification.as_ref().map(|n| n.message.as_str())
    }

    /// Change le séparateur décimal ; un refus part en notification.
    pub fn set_separateur(&mut self, separateur: char, maintenant: f64) {
        match Reglages::avec_separateur(separateur) {
            Ok(r) => self.reglages = r,
            Err(e) => self.notifier(e.to_string(), maintenant),
        }
        self.focus_entree = true;
    }
}
