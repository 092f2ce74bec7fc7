//! Calculatrice f64 — bibliothèque
//!
//! Le noyau (lexer + évaluateur) vit ici ; le binaire (src/main.rs) n’en
//! est qu’un hôte egui parmi d’autres.
//!
//! ```
//! use calculatrice_f64::noyau::{evaluate, CalcError};
//!
//! assert_eq!(evaluate("2+3*4"), Ok(14.0));
//! assert_eq!(evaluate("5/0"), Err(CalcError::DivisionByZero));
//! ```

pub mod noyau;
