//! Tests scientifiques (campagne) : scénarios + invariants + limites contrôlées.
//!
//! - scénarios de référence (entrée -> sortie exacte)
//! - stabilité : le rendu, relu, redonne le même rendu
//! - identités algébriques connues
//! - stress borné (budget temps) : sommes balancées, longues chaînes plates

use std::time::{Duration, Instant};

use super::{simplify_expression, SENTINELLE_INVALIDE};

fn assert_simplifie(expr: &str, attendu: &str) {
    assert_eq!(simplify_expression(expr), attendu, "expr={expr:?}");
}

fn assert_invalide(expr: &str) {
    assert_eq!(simplify_expression(expr), SENTINELLE_INVALIDE, "expr={expr:?}");
}

/// Relire la sortie doit redonner la même sortie.
fn assert_stable(expr: &str) {
    let une = simplify_expression(expr);
    assert_ne!(une, SENTINELLE_INVALIDE, "expr={expr:?}");
    let deux = simplify_expression(&une);
    assert_eq!(une, deux, "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::with_capacity(items.len() / 2 + 1);
        let mut it = items.into_iter();
        while let Some(a) = it.next() {
            match it.next() {
                Some(b) => next.push(format!("({a} + {b})")),
                None => next.push(a),
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn sci_scenarios_reference() {
    assert_simplifie("2 * (3 * x + 4 * y) - 7 * y + 9", "6*x - 3*y + 9");
    assert_simplifie("z + z + 2 + 3 - 2 * z", "5");
    assert_invalide("3 * ((");
    assert_simplifie("x * y + 2 * x * y", "3*x*y");
    assert_simplifie("x * 5 - 5 * x", "0");
    assert_simplifie("5 * (x + 1)", "5*x + 5");
}

#[test]
fn sci_signes() {
    assert_simplifie("-x", "-x");
    assert_simplifie("-5", "-5");
    assert_simplifie("0 - x - 2", "-x - 2");
    assert_simplifie("-(-(x))", "x");
    assert_simplifie("-x * -y", "x*y");
    assert_simplifie("3 - 3", "0");
    assert_simplifie("1 - x * x", "-x*x + 1");
}

#[test]
fn sci_ordre_des_termes() {
    assert_simplifie("1 + z + y + x", "x + y + z + 1");
    assert_simplifie("x + x * x + x * x * x", "x*x*x + x*x + x");
    assert_simplifie("z * z + x * y", "x*y + z*z");
    assert_simplifie("y * x * z + z * y", "x*y*z + y*z");
}

#[test]
fn sci_espaces_libres() {
    assert_simplifie("2*(3*x+4*y)-7*y+9", "6*x - 3*y + 9");
    assert_simplifie("   x   *   y   ", "x*y");
}

#[test]
fn sci_invalides() {
    for s in [
        "", " ", "x +", "+ x", "(x", "x)", "()", "5x", "x y", "2 3", "xyz", "x ^ 2", "x / 2",
        "1.0", "a", "X", "x\t+ 1", "x + (y * (z)",
    ] {
        assert_invalide(s);
    }
}

/* ------------------------ Identités ------------------------ */

#[test]
fn sci_identites_remarquables() {
    assert_simplifie("(x + y) * (x + y)", "x*x + 2*x*y + y*y");
    assert_simplifie("(x - y) * (x - y)", "x*x - 2*x*y + y*y");
    assert_simplifie("(x + y) * (x - y)", "x*x - y*y");
    assert_simplifie(
        "(x + 1) * (x + 1) * (x + 1)",
        "x*x*x + 3*x*x + 3*x + 1",
    );
}

#[test]
fn sci_grands_entiers() {
    // 2^64 * 2^64 = 2^128, hors de portée de i64/u64
    assert_simplifie(
        "18446744073709551616 * 18446744073709551616 * x",
        "340282366920938463463374607431768211456*x",
    );
    assert_simplifie("99999999999999999999 - 99999999999999999999", "0");
}

/* ------------------------ Stabilité ------------------------ */

#[test]
fn sci_stabilite_du_rendu() {
    for s in [
        "2 * (3 * x + 4 * y) - 7 * y + 9",
        "-(x + y) * (z - 3)",
        "(x + y + z) * (x - y - z) - 7",
        "-1",
        "x - x",
        "-x*x*y + 12",
    ] {
        assert_stable(s);
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_somme_balancee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = somme_balancee("x", 1000);
    assert_simplifie(&expr, "1000*x");
    budget(t0, max);
}

#[test]
fn sci_stress_chaines_plates() {
    // a + b + c + ... : épine gauche de 100 000 noeuds, sur le thread de test par défaut
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    assert_simplifie(&vec!["x"; 100_000].join(" + "), "100000*x");
    assert_simplifie(&vec!["1"; 20_000].join(" * "), "1");
    assert_simplifie(&vec!["z"; 30_000].join(" - "), "-29998*z");

    let expr = vec!["y"; 50_000].join(" * ");
    assert!(super::eval_expression(&format!("{expr} +")).is_err());

    let (res, d) = super::eval_expression(&vec!["x + 1"; 50_000].join(" - "))
        .unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(res, "-49998*x + 50000");
    assert_eq!(d.nb_monomes, 2);
    assert!(d.arbre.ends_with("-x)+1)"), "{}", &d.arbre[d.arbre.len() - 20..]);
    budget(t0, max);
}

#[test]
fn sci_stress_puissance_developpee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // (x + y + z)^6 : 28 monômes de degré 6
    let facteur = "(x + y + z)";
    let expr = vec![facteur; 6].join(" * ");
    let (res, d) = super::eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(d.nb_monomes, 28);
    assert_eq!(d.degre, 6);
    assert!(res.starts_with("x*x*x*x*x*x + 6*x*x*x*x*x*y"), "{res}");
    budget(t0, max);
}

#[test]
fn sci_stress_imbrication() {
    // imbrication raisonnable : acceptée
    let ok = format!("{}x{}", "(".repeat(100), ")".repeat(100));
    assert_simplifie(&ok, "x");

    // imbrication démesurée : refusée sans débordement de pile
    let trop = format!("{}x{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_invalide(&trop);

    let moins = format!("{}x", "-".repeat(100_000));
    assert_invalide(&moins);
}
