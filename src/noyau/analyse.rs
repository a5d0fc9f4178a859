// src/noyau/analyse.rs
//
// Descente récursive : jetons -> Expr
//
// Grammaire (précédence usuelle, binaires associatifs à gauche) :
//   expression := terme ( ('+' | '-') terme )*
//   terme      := facteur ( '*' facteur )*
//   facteur    := entier | variable | '(' expression ')' | '-' facteur
//
// Règles:
// - curseur explicite, avancé à chaque consommation réussie
// - pas de retour arrière : le premier jeton d’un facteur décide de la production
// - toute l’entrée doit être consommée
// - garde-fou : profondeur d’imbrication bornée (parenthèses / moins unaire)

use log::warn;

use super::erreur::ErreurSyntaxe;
use super::expr::{Expr, OpBinaire};
use super::jetons::Tok;

/// Profondeur maximale de parenthèses / moins unaires imbriqués.
pub const PROFONDEUR_MAX: usize = 256;

/// Analyse une suite de jetons complète.
pub fn parse(jetons: &[Tok]) -> Result<Expr, ErreurSyntaxe> {
    if jetons.is_empty() {
        return Err(ErreurSyntaxe::EntreeVide);
    }

    let mut a = Analyseur {
        jetons,
        pos: 0,
        profondeur: 0,
    };
    let e = a.expression()?;

    if a.pos != jetons.len() {
        return Err(ErreurSyntaxe::JetonsEnTrop { position: a.pos });
    }
    Ok(e)
}

struct Analyseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
    profondeur: usize,
}

impl<'a> Analyseur<'a> {
    fn courant(&self) -> Option<&'a Tok> {
        self.jetons.get(self.pos)
    }

    fn expression(&mut self) -> Result<Expr, ErreurSyntaxe> {
        let mut acc = self.terme()?;

        while let Some(op) = match self.courant() {
            Some(Tok::Plus) => Some(OpBinaire::Add),
            Some(Tok::Minus) => Some(OpBinaire::Sub),
            _ => None,
        } {
            self.pos += 1;
            let droite = self.terme()?;
            acc = Expr::binaire(op, acc, droite);
        }

        Ok(acc)
    }

    fn terme(&mut self) -> Result<Expr, ErreurSyntaxe> {
        let mut acc = self.facteur()?;

        while matches!(self.courant(), Some(Tok::Star)) {
            self.pos += 1;
            let droite = self.facteur()?;
            acc = Expr::binaire(OpBinaire::Mul, acc, droite);
        }

        Ok(acc)
    }

    fn facteur(&mut self) -> Result<Expr, ErreurSyntaxe> {
        let tok = self.courant().ok_or(ErreurSyntaxe::FinInattendue)?;

        match tok {
            Tok::Entier(n) => {
                let e = Expr::Nombre(n.clone());
                self.pos += 1;
                Ok(e)
            }
            Tok::Var(v) => {
                let e = Expr::Var(*v);
                self.pos += 1;
                Ok(e)
            }
            Tok::LPar => {
                self.pos += 1;
                self.descendre()?;
                let e = self.expression()?;
                self.remonter();

                if !matches!(self.courant(), Some(Tok::RPar)) {
                    return Err(ErreurSyntaxe::ParentheseManquante { position: self.pos });
                }
                self.pos += 1;
                Ok(e)
            }
            Tok::Minus => {
                self.pos += 1;
                self.descendre()?;
                let x = self.facteur()?;
                self.remonter();
                Ok(Expr::neg(x))
            }
            Tok::Plus | Tok::Star | Tok::RPar => Err(ErreurSyntaxe::JetonInattendu {
                jeton: tok.texte(),
                position: self.pos,
            }),
        }
    }

    fn descendre(&mut self) -> Result<(), ErreurSyntaxe> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            warn!("analyse : imbrication > {PROFONDEUR_MAX} en position {}", self.pos);
            return Err(ErreurSyntaxe::TropImbrique {
                profondeur: PROFONDEUR_MAX,
            });
        }
        Ok(())
    }

    fn remonter(&mut self) {
        self.profondeur -= 1;
    }
}
