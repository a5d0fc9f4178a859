//! Tests de propriétés (proptest) sur tout le pipeline.
//!
//! Les expressions sont générées sous forme de TEXTE, bornées en profondeur,
//! puis passées par tokenize -> parse -> simplify -> render.

use num_bigint::BigInt;
use num_traits::Zero;
use proptest::prelude::*;

use super::analyse::parse;
use super::expr::{Expr, OpBinaire, Variable};
use super::format::render;
use super::jetons::tokenize;
use super::poly::{Monome, Polynome};
use super::simplif::simplify;
use super::{simplify_expression, SENTINELLE_INVALIDE};

/* ------------------------ Helpers ------------------------ */

fn arbre(s: &str) -> Expr {
    let jetons = tokenize(s).unwrap_or_else(|e| panic!("tokenize({s:?}) : {e}"));
    parse(&jetons).unwrap_or_else(|e| panic!("parse({s:?}) : {e}"))
}

fn poly(s: &str) -> Polynome {
    simplify(&arbre(s))
}

fn valeur_variable(v: Variable, point: &[i64; 3]) -> BigInt {
    match v {
        Variable::X => BigInt::from(point[0]),
        Variable::Y => BigInt::from(point[1]),
        Variable::Z => BigInt::from(point[2]),
    }
}

/// Évaluation directe de l’arbre (référence, sans passer par la forme canonique).
fn evalue_arbre(e: &Expr, point: &[i64; 3]) -> BigInt {
    match e {
        Expr::Nombre(n) => n.clone(),
        Expr::Var(v) => valeur_variable(*v, point),
        Expr::Neg(x) => -evalue_arbre(x, point),
        Expr::Binaire(op, a, b) => {
            let va = evalue_arbre(a, point);
            let vb = evalue_arbre(b, point);
            match op {
                OpBinaire::Add => va + vb,
                OpBinaire::Sub => va - vb,
                OpBinaire::Mul => va * vb,
            }
        }
    }
}

fn evalue_poly(p: &Polynome, point: &[i64; 3]) -> BigInt {
    p.iter()
        .map(|(m, c)| {
            m.variables()
                .iter()
                .fold(c.clone(), |acc, v| acc * valeur_variable(*v, point))
        })
        .sum()
}

/* ------------------------ Stratégies ------------------------ */

fn feuille() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..20).prop_map(|n| n.to_string()),
        prop::sample::select(vec!["x", "y", "z"]).prop_map(str::to_string),
    ]
}

fn expression() -> impl Strategy<Value = String> {
    feuille().prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a} + {b})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a} - {b})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{a} * {b}")),
            inner.prop_map(|a| format!("-{a}")),
        ]
    })
}

fn variable() -> impl Strategy<Value = Variable> {
    prop::sample::select(vec![Variable::X, Variable::Y, Variable::Z])
}

fn termes() -> impl Strategy<Value = Vec<(Vec<Variable>, i64)>> {
    proptest::collection::vec(
        (proptest::collection::vec(variable(), 0..4), -50i64..50),
        0..8,
    )
}

fn depuis(termes: &[(Vec<Variable>, i64)]) -> Polynome {
    Polynome::depuis_termes(
        termes
            .iter()
            .map(|(vars, c)| (Monome::new(vars.clone()), BigInt::from(*c))),
    )
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn rendu_stable_a_la_relecture(e in expression()) {
        let une = simplify_expression(&e);
        prop_assert_ne!(&une, SENTINELLE_INVALIDE);
        let deux = simplify_expression(&une);
        prop_assert_eq!(une, deux);
    }

    #[test]
    fn aucun_coefficient_nul(e in expression()) {
        let p = poly(&e);
        prop_assert!(p.iter().all(|(_, c)| !c.is_zero()));
    }

    #[test]
    fn addition_commutative(a in expression(), b in expression()) {
        prop_assert_eq!(poly(&format!("{a} + {b}")), poly(&format!("{b} + {a}")));
    }

    #[test]
    fn produit_commutatif(a in expression(), b in expression()) {
        prop_assert_eq!(poly(&format!("({a}) * ({b})")), poly(&format!("({b}) * ({a})")));
    }

    #[test]
    fn distributivite(a in expression(), b in expression(), c in expression()) {
        let gauche = poly(&format!("({a}) * ({b} + {c})"));
        let droite = poly(&format!("({a}) * ({b}) + ({a}) * ({c})"));
        prop_assert_eq!(gauche, droite);
    }

    #[test]
    fn soustraction_de_soi(a in expression()) {
        prop_assert_eq!(simplify_expression(&format!("({a}) - ({a})")), "0");
    }

    #[test]
    fn forme_canonique_fidele_a_l_arbre(
        e in expression(),
        point in prop::array::uniform3(-6i64..6),
    ) {
        let a = arbre(&e);
        prop_assert_eq!(evalue_arbre(&a, &point), evalue_poly(&simplify(&a), &point));
    }

    #[test]
    fn rendu_independant_de_l_ordre(t in termes()) {
        let mut inverse = t.clone();
        inverse.reverse();
        prop_assert_eq!(render(&depuis(&t)), render(&depuis(&inverse)));
    }

    #[test]
    fn entree_quelconque_sans_panique(s in "[0-9xyzw+*() /-]{0,40}") {
        let r = simplify_expression(&s);
        if r != SENTINELLE_INVALIDE {
            prop_assert_eq!(simplify_expression(&r), r);
        }
    }

    #[test]
    fn texte_arbitraire_sans_panique(s in "\\PC{0,30}") {
        let _ = simplify_expression(&s);
    }
}
