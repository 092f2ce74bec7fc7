//! Noyau — évaluation par descente récursive (précédence croissante)
//!
//! ```text
//! Add      := Mul  ( ('+'|'-') Mul )*
//! Mul      := Pow  ( ('*'|'/'|'%') Pow )*
//! Pow      := Sign ( '^' Sign )*
//! Sign     := ('+'|'-') Function | Function
//! Function := FuncName? Braces
//! Braces   := '(' Add ')' | Value
//! Value    := Number
//! ```
//!
//! Remarques :
//! - `^` est replié à GAUCHE comme `+` et `*` : 2^3^2 = (2^3)^2 = 64.
//! - Un seul signe par niveau : "--3" échoue (nombre attendu).
//! - Pas de contrôle générique de fin d’entrée ; seule une `)` orpheline
//!   au niveau racine est signalée.

use super::erreur::CalcError;
use super::jetons::{Brace, Classe, Lexer, Tok};
use super::reglages::Reglages;

/// API publique : évalue avec les réglages par défaut (séparateur '.').
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    evaluate_avec(expr, &Reglages::default())
}

/// Évalue avec un séparateur décimal choisi.
#[tracing::instrument(level = "debug", skip_all, fields(longueur = expr.len()))]
pub fn evaluate_avec(expr: &str, reglages: &Reglages) -> Result<f64, CalcError> {
    let resultat = Evaluateur::new(expr, reglages).evalue();
    match &resultat {
        Ok(v) => tracing::debug!(valeur = v, "évaluation réussie"),
        Err(e) => tracing::debug!(erreur = %e, "évaluation refusée"),
    }
    resultat
}

/// Parseur/évaluateur jetable : un par appel, jamais partagé.
pub struct Evaluateur<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Evaluateur<'a> {
    pub fn new(expr: &'a str, reglages: &Reglages) -> Self {
        Self {
            lexer: Lexer::new(expr, reglages),
        }
    }

    pub fn evalue(mut self) -> Result<f64, CalcError> {
        self.lexer.advance()?;
        let resultat = self.add()?;

        if self.lexer.courant() == Tok::Brace(Brace::Closing) {
            return Err(CalcError::MissingBracket);
        }
        Ok(resultat)
    }

    /* ------------------------ Niveaux binaires ------------------------ */

    fn add(&mut self) -> Result<f64, CalcError> {
        let mut resultat = self.mul()?;
        while let Tok::Delim(op) = self.lexer.courant() {
            if op.classe() != Classe::AddSub {
                break;
            }
            self.lexer.advance()?;
            let droite = self.mul()?;
            resultat = op.applique(resultat, droite);
        }
        Ok(resultat)
    }

    fn mul(&mut self) -> Result<f64, CalcError> {
        let mut resultat = self.pow()?;
        while let Tok::Delim(op) = self.lexer.courant() {
            if op.classe() != Classe::MulDiv {
                break;
            }
            self.lexer.advance()?;
            let droite = self.pow()?;
            if droite == 0.0 && op.exige_diviseur_non_nul() {
                return Err(CalcError::DivisionByZero);
            }
            resultat = op.applique(resultat, droite);
        }
        Ok(resultat)
    }

    fn pow(&mut self) -> Result<f64, CalcError> {
        let mut resultat = self.sign()?;
        while let Tok::Delim(op) = self.lexer.courant() {
            if op.classe() != Classe::Pow {
                break;
            }
            self.lexer.advance()?;
            let droite = self.sign()?;
            resultat = op.applique(resultat, droite);
        }
        Ok(resultat)
    }

    /* ------------------------ Niveaux unaires ------------------------ */

    fn sign(&mut self) -> Result<f64, CalcError> {
        match self.lexer.courant() {
            Tok::Delim(op) if op.classe() == Classe::AddSub => {
                self.lexer.advance()?;
                let operande = self.function()?;
                Ok(op.applique(0.0, operande))
            }
            _ => self.function(),
        }
    }

    fn function(&mut self) -> Result<f64, CalcError> {
        match self.lexer.courant() {
            Tok::Func(f) => {
                self.lexer.advance()?;
                let argument = self.braces()?;
                Ok(f.applique(argument))
            }
            _ => self.braces(),
        }
    }

    fn braces(&mut self) -> Result<f64, CalcError> {
        if self.lexer.courant() != Tok::Brace(Brace::Opening) {
            return self.value();
        }

        self.lexer.advance()?;
        let resultat = self.add()?;
        if self.lexer.courant() != Tok::Brace(Brace::Closing) {
            return Err(CalcError::MissingBracket);
        }
        self.lexer.advance()?;
        Ok(resultat)
    }

    fn value(&mut self) -> Result<f64, CalcError> {
        match self.lexer.courant() {
            Tok::Num(v) => {
                self.lexer.advance()?;
                Ok(v)
            }
            Tok::End => Err(CalcError::EndOfExpression),
            Tok::Brace(Brace::Closing) => Err(CalcError::MissingBracket),
            Tok::Start | Tok::Delim(_) | Tok::Brace(Brace::Opening) | Tok::Func(_) => {
                Err(CalcError::NotANumber)
            }
        }
    }
}
