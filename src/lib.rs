//! Simplificateur de polynômes x/y/z : texte -> jetons -> arbre -> forme canonique -> texte.

pub mod noyau;

pub use noyau::{eval_expression, simplify_expression, SENTINELLE_INVALIDE};
