//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> parse (Expr) -> simplify (Polynome) -> render
//!
//! Les erreurs restent typées jusqu’ici ; `simplify_expression` est le seul
//! endroit où elles deviennent la sentinelle unique.

use log::{debug, info};

use super::analyse::parse;
use super::erreur::ErreurNoyau;
use super::format::render;
use super::jetons::{format_tokens, tokenize};
use super::simplif::simplify;

/// Réponse unique pour toute entrée lexicalement ou syntaxiquement invalide.
pub const SENTINELLE_INVALIDE: &str = "Expression invalide";

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub arbre: String,
    pub resultat: String,
    pub nb_monomes: usize,
    pub degre: usize,
}

/// API typée : forme canonique + démarche, ou l’erreur (lexicale / syntaxe).
pub fn eval_expression(expr_str: &str) -> Result<(String, DemarcheNoyau), ErreurNoyau> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    let jetons_txt = format_tokens(&jetons);
    debug!("jetons : {jetons_txt}");

    // 2) Arbre
    let arbre = parse(&jetons)?;
    let arbre_txt = arbre.to_string();
    debug!("arbre : {arbre_txt} ({} noeuds)", arbre.taille());

    // 3) Forme canonique
    let poly = simplify(&arbre);
    debug!("forme canonique : {} monôme(s), degré {}", poly.nb_monomes(), poly.degre());

    // 4) Rendu
    let resultat = render(&poly);

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        arbre: arbre_txt,
        resultat: resultat.clone(),
        nb_monomes: poly.nb_monomes(),
        degre: poly.degre(),
    };

    Ok((resultat, d))
}

/// API publique : forme canonique, ou SENTINELLE_INVALIDE sur toute erreur.
pub fn simplify_expression(expression: &str) -> String {
    match eval_expression(expression) {
        Ok((resultat, _d)) => {
            info!("{expression:?} => {resultat:?}");
            resultat
        }
        Err(e) => {
            debug!("{expression:?} refusée : {e}");
            SENTINELLE_INVALIDE.to_string()
        }
    }
}
