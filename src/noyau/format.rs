// src/noyau/format.rs

use num_bigint::BigInt;
use num_traits::{One, Signed};

use std::cmp::Ordering;

use super::poly::{Monome, Polynome};

/* ------------------------ Ordre d’affichage ------------------------ */

/// Degré décroissant, puis monôme croissant (ordre lexicographique des noms).
fn ordre_affichage(a: &Monome, b: &Monome) -> Ordering {
    b.degre().cmp(&a.degre()).then_with(|| a.cmp(b))
}

/* ------------------------ Terme ------------------------ */

/// Texte d’un terme SANS son signe : "7", "x*y", "3*x*x".
fn format_terme(m: &Monome, c: &BigInt) -> String {
    let abs = c.abs();
    if m.is_constant() {
        return abs.to_string();
    }
    if abs.is_one() {
        m.to_string()
    } else {
        format!("{abs}*{m}")
    }
}

/* ------------------------ Rendu ------------------------ */

/// Rendu déterministe de la forme canonique.
/// - polynôme nul : "0"
/// - premier terme : "-" seulement s’il est négatif (jamais de "+" en tête)
/// - termes suivants : " + " ou " - " puis la valeur absolue
pub fn render(p: &Polynome) -> String {
    if p.is_zero() {
        return "0".to_string();
    }

    let mut termes: Vec<(&Monome, &BigInt)> = p.iter().collect();
    termes.sort_by(|(a, _), (b, _)| ordre_affichage(a, b));

    let mut out = String::new();
    for (i, (m, c)) in termes.into_iter().enumerate() {
        let negatif = c.is_negative();
        if i == 0 {
            if negatif {
                out.push('-');
            }
        } else if negatif {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        out.push_str(&format_terme(m, c));
    }
    out
}
