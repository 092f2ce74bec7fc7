//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions bien formées : seule la division par zéro est une erreur attendue
//! - invariant clé : deux évaluations de la même chaîne donnent le même résultat

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::{evaluate, CalcError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // 0 inclus : la division par zéro doit arriver via / et %
    let entier = rng.pick(10);
    if rng.coin() {
        format!("{entier}.{}", rng.pick(100))
    } else {
        format!("{entier}")
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("-{}", gen_nombre(rng)),
        _ => gen_nombre(rng),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(6) {
        0 => " + ",
        1 => " - ",
        2 => " * ",
        3 => " / ",
        4 => " % ",
        _ => "^",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(6) {
        0 => gen_atom(rng),
        1 => format!("({})", gen_expr(rng, depth - 1)),
        2 => {
            let f = ["sin", "cos", "tan"][rng.pick(3) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        3 => format!("-({})", gen_expr(rng, depth - 1)),
        _ => format!(
            "{}{}{}",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
    }
}

/* ------------------------ Helpers ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

fn bits(r: Result<f64, CalcError>) -> Result<u64, CalcError> {
    r.map(f64::to_bits)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_erreurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);
        let premier = evaluate(&expr);

        // fraîche instance => même résultat, au bit près
        assert_eq!(bits(premier.clone()), bits(evaluate(&expr)), "expr={expr:?}");

        match premier {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert_eq!(e, CalcError::DivisionByZero, "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_troncatures_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        // toute troncature d’une expression valide doit échouer proprement ou réussir
        let expr = gen_expr(&mut rng, 4);
        for (i, _) in expr.char_indices() {
            let _ = evaluate(&expr[..i]);
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1/2", 800);
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(evaluate(&expr), Ok(400.0));
}

#[test]
fn fuzz_safe_longue_chaine_plate() {
    // pas de récursion par terme : la boucle replie à gauche
    let expr = vec!["1"; 20_000].join("+");
    assert_eq!(evaluate(&expr), Ok(20_000.0));
}

#[test]
fn fuzz_safe_imbrication_bornee() {
    let n = 200;
    let expr = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluate(&expr), Ok(7.0));

    let ouverte = format!("{}7{}", "(".repeat(n), ")".repeat(n - 1));
    assert_eq!(evaluate(&ouverte), Err(CalcError::MissingBracket));
}
