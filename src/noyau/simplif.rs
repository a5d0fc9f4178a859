// src/noyau/simplif.rs
//
// Expr -> Polynome (évaluation post-ordre, fonction totale).
//
// Parcours avec deux piles explicites (tâches, valeurs) : une chaîne plate
// de 100 000 termes ne consomme pas de pile d’appel.

use super::expr::{Expr, OpBinaire};
use super::poly::Polynome;

enum Tache<'a> {
    Visite(&'a Expr),
    Negation,
    Applique(OpBinaire),
}

/// Évalue l’arbre en forme canonique (somme de monômes, sans coefficient nul).
pub fn simplify(e: &Expr) -> Polynome {
    let mut taches = vec![Tache::Visite(e)];
    let mut valeurs: Vec<Polynome> = Vec::new();

    while let Some(t) = taches.pop() {
        match t {
            Tache::Visite(Expr::Nombre(n)) => valeurs.push(Polynome::constante(n.clone())),
            Tache::Visite(Expr::Var(v)) => valeurs.push(Polynome::variable(*v)),

            Tache::Visite(Expr::Neg(x)) => {
                taches.push(Tache::Negation);
                taches.push(Tache::Visite(x));
            }
            Tache::Visite(Expr::Binaire(op, a, b)) => {
                taches.push(Tache::Applique(*op));
                taches.push(Tache::Visite(b));
                taches.push(Tache::Visite(a));
            }

            // Chaque tâche d’opération suit la visite de ses opérandes :
            // la pile des valeurs en contient toujours assez.
            Tache::Negation => {
                let p = valeurs.pop().unwrap_or_default();
                valeurs.push(p.neg());
            }
            Tache::Applique(op) => {
                let pb = valeurs.pop().unwrap_or_default();
                let pa = valeurs.pop().unwrap_or_default();
                valeurs.push(match op {
                    OpBinaire::Add => pa.add(&pb),
                    OpBinaire::Sub => pa.sub(&pb),
                    OpBinaire::Mul => pa.mul(&pb),
                });
            }
        }
    }

    valeurs.pop().unwrap_or_default()
}
