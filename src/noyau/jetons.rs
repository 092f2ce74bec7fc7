// src/noyau/jetons.rs
//
// Jetons + lexer paresseux.
// - Un seul jeton courant, pas d’historique, pas de file d’attente.
// - Tables d’opérateurs / fonctions : dispatch statique (match), immuables.

use std::f64::consts::PI;

use super::erreur::CalcError;
use super::reglages::Reglages;

/* ------------------------ Jetons ------------------------ */

/// Classe de précédence d’un délimiteur (du plus faible au plus fort).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classe {
    AddSub,
    MulDiv,
    Pow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl Op {
    pub fn classe(self) -> Classe {
        match self {
            Op::Add | Op::Sub => Classe::AddSub,
            Op::Mul | Op::Div | Op::Mod => Classe::MulDiv,
            Op::Pow => Classe::Pow,
        }
    }

    /// `/` et `%` refusent un opérande droit nul ; `*` l’accepte.
    pub fn exige_diviseur_non_nul(self) -> bool {
        matches!(self, Op::Div | Op::Mod)
    }

    pub fn applique(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a / b,
            Op::Mod => a % b,
            Op::Pow => a.powf(b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Brace {
    Opening,
    Closing,
}

/// Fonctions unaires ; l’argument est en degrés.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
}

/// Table des fonctions (nom exact, sensible à la casse).
pub const FONCTIONS: [(&str, Func); 3] = [
    ("sin", Func::Sin),
    ("cos", Func::Cos),
    ("tan", Func::Tan),
];

impl Func {
    pub fn depuis_nom(nom: &str) -> Option<Func> {
        FONCTIONS
            .iter()
            .find(|(n, _)| *n == nom)
            .map(|(_, f)| *f)
    }

    pub fn applique(self, degres: f64) -> f64 {
        let rad = degres / 180.0 * PI;
        match self {
            Func::Sin => rad.sin(),
            Func::Cos => rad.cos(),
            Func::Tan => rad.tan(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    /// Sentinelle initiale : remplacée dès le premier `advance`.
    Start,
    /// Sentinelle terminale : tout `advance` suivant échoue.
    End,
    Num(f64),
    Delim(Op),
    Brace(Brace),
    Func(Func),
}

/// Table des caractères-opérateurs (délimiteurs + parenthèses).
pub fn operateur(c: char) -> Option<Tok> {
    let t = match c {
        '+' => Tok::Delim(Op::Add),
        '-' => Tok::Delim(Op::Sub),
        '*' => Tok::Delim(Op::Mul),
        '/' => Tok::Delim(Op::Div),
        '%' => Tok::Delim(Op::Mod),
        '^' => Tok::Delim(Op::Pow),
        '(' => Tok::Brace(Brace::Opening),
        ')' => Tok::Brace(Brace::Closing),
        _ => return None,
    };
    Some(t)
}

/* ------------------------ Lexer ------------------------ */

/// Curseur sur l’expression. Invariant : `0 <= i <= expr.len()`, `i` toujours
/// sur une frontière de caractère.
pub struct Lexer<'a> {
    expr: &'a str,
    i: usize,
    separateur: char,
    courant: Tok,
}

impl<'a> Lexer<'a> {
    pub fn new(expr: &'a str, reglages: &Reglages) -> Self {
        Self {
            expr,
            i: 0,
            separateur: reglages.separateur(),
            courant: Tok::Start,
        }
    }

    pub fn courant(&self) -> Tok {
        self.courant
    }

    /// Avance d’un jeton. Échoue si le jeton courant est déjà `End`.
    pub fn advance(&mut self) -> Result<(), CalcError> {
        if self.courant == Tok::End {
            return Err(CalcError::EndOfExpression);
        }

        self.courant = self.scan()?;
        tracing::trace!(jeton = ?self.courant, i = self.i, "jeton");
        Ok(())
    }

    fn reste(&self) -> &'a str {
        &self.expr[self.i..]
    }

    fn scan(&mut self) -> Result<Tok, CalcError> {
        // blancs
        let reste = self.reste();
        let debut = reste.trim_start_matches(char::is_whitespace);
        self.i += reste.len() - debut.len();

        let Some(c) = debut.chars().next() else {
            return Ok(Tok::End);
        };

        if let Some(t) = operateur(c) {
            self.i += c.len_utf8();
            return Ok(t);
        }

        if c.is_ascii_digit() {
            return self.scan_nombre();
        }

        if c.is_alphabetic() {
            let depart = self.i;
            let longueur: usize = self
                .reste()
                .chars()
                .take_while(|c| c.is_alphabetic())
                .map(char::len_utf8)
                .sum();
            self.i += longueur;

            let nom = &self.expr[depart..self.i];
            return Func::depuis_nom(nom)
                .map(Tok::Func)
                .ok_or_else(|| CalcError::UnknownFunction(nom.to_string()));
        }

        tracing::debug!(caractere = ?c, i = self.i, "symbole inconnu");
        Err(CalcError::UnknownToken)
    }

    /// Chiffres, au plus un séparateur, chiffres. S’arrête au premier autre
    /// caractère (un second séparateur compris).
    fn scan_nombre(&mut self) -> Result<Tok, CalcError> {
        let debut = self.i;
        let mut texte = String::new();
        let mut separateur_vu = false;

        for c in self.reste().chars() {
            if c.is_ascii_digit() {
                texte.push(c);
            } else if c == self.separateur && !separateur_vu {
                separateur_vu = true;
                texte.push('.');
            } else {
                break;
            }
            self.i += c.len_utf8();
        }

        // "12." est accepté par le parse f64 (= 12.0)
        texte.parse::<f64>().map(Tok::Num).map_err(|e| {
            tracing::debug!(texte = &self.expr[debut..self.i], erreur = %e, "nombre illisible");
            CalcError::NotANumber
        })
    }
}
