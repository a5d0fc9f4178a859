//! Noyau — simplificateur de polynômes en x, y, z
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (contrôle de couverture de l’alphabet)
//! - analyse.rs  : descente récursive jetons -> Expr
//! - expr.rs     : AST (Nombre, Var, Neg, Binaire)
//! - poly.rs     : forme canonique (Monome -> coefficient)
//! - simplif.rs  : Expr -> Polynome
//! - format.rs   : rendu déterministe
//! - erreur.rs   : erreurs lexicales / de syntaxe
//! - eval.rs     : pipeline complet + sentinelle

pub mod analyse;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod poly;
pub mod simplif;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::{ErreurLexicale, ErreurNoyau, ErreurSyntaxe};
pub use eval::{eval_expression, simplify_expression, DemarcheNoyau, SENTINELLE_INVALIDE};
