// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// - Lexicale : caractère hors alphabet (jetons.rs)
// - Syntaxe  : suite de jetons hors grammaire (analyse.rs)
//
// Le pilote (eval.rs) est le seul endroit où ces erreurs sont écrasées
// en une sentinelle unique.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("caractère inattendu '{caractere}' en position {position}")]
pub struct ErreurLexicale {
    pub caractere: char,
    pub position: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("entrée vide")]
    EntreeVide,

    #[error("fin d’expression inattendue")]
    FinInattendue,

    #[error("jeton inattendu '{jeton}' en position {position}")]
    JetonInattendu { jeton: String, position: usize },

    #[error("parenthèse fermante attendue en position {position}")]
    ParentheseManquante { position: usize },

    #[error("jetons en trop à partir de la position {position}")]
    JetonsEnTrop { position: usize },

    #[error("expression trop imbriquée (profondeur > {profondeur})")]
    TropImbrique { profondeur: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    #[error("erreur lexicale : {0}")]
    Lexicale(#[from] ErreurLexicale),

    #[error("erreur de syntaxe : {0}")]
    Syntaxe(#[from] ErreurSyntaxe),
}

impl ErreurNoyau {
    pub fn is_lexicale(&self) -> bool {
        matches!(self, ErreurNoyau::Lexicale(_))
    }

    pub fn is_syntaxe(&self) -> bool {
        matches!(self, ErreurNoyau::Syntaxe(_))
    }
}
