// src/noyau/poly.rs
//
// Forme canonique : somme de monômes à coefficients entiers.
// - Monome   : suite TRIÉE de variables (répétitions permises), () = constante 1
// - Polynome : Monome -> coefficient BigInt
//
// Invariant : aucun coefficient nul n’est stocké.
// add/sub/neg consomment le polynôme de gauche et accumulent sur place ;
// mul construit un nouveau polynôme. Tous respectent l’invariant.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use std::collections::BTreeMap;
use std::fmt;

use super::expr::Variable;

/* ------------------------ Monome ------------------------ */

/// Produit de variables. L’égalité et l’ordre sont ceux de la suite triée
/// (ordre lexicographique sur les noms).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monome(Vec<Variable>);

impl Monome {
    /// Monôme constant (produit vide).
    pub fn un() -> Monome {
        Monome(Vec::new())
    }

    pub fn new(mut vars: Vec<Variable>) -> Monome {
        vars.sort_unstable();
        Monome(vars)
    }

    pub fn variable(v: Variable) -> Monome {
        Monome(vec![v])
    }

    /// Nombre total de variables (avec répétitions).
    pub fn degre(&self) -> usize {
        self.0.len()
    }

    pub fn is_constant(&self) -> bool {
        self.0.is_empty()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.0
    }

    /// Produit : concaténation puis tri.
    pub fn mul(&self, autre: &Monome) -> Monome {
        let mut vars = Vec::with_capacity(self.0.len() + autre.0.len());
        vars.extend_from_slice(&self.0);
        vars.extend_from_slice(&autre.0);
        Monome::new(vars)
    }
}

impl fmt::Display for Monome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("1");
        }
        let noms: Vec<&str> = self.0.iter().map(|v| v.nom()).collect();
        f.write_str(&noms.join("*"))
    }
}

/* ------------------------ Polynome ------------------------ */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynome {
    termes: BTreeMap<Monome, BigInt>,
}

impl Polynome {
    pub fn zero() -> Polynome {
        Polynome::default()
    }

    /// Constante c (polynôme nul si c == 0).
    pub fn constante(c: impl Into<BigInt>) -> Polynome {
        let mut p = Polynome::zero();
        p.accumule(Monome::un(), c.into());
        p
    }

    pub fn variable(v: Variable) -> Polynome {
        let mut p = Polynome::zero();
        p.accumule(Monome::variable(v), BigInt::one());
        p
    }

    /// Construit à partir de paires (monôme, coefficient) quelconques :
    /// les monômes égaux sont regroupés, les zéros retirés.
    pub fn depuis_termes<I>(termes: I) -> Polynome
    where
        I: IntoIterator<Item = (Monome, BigInt)>,
    {
        let mut p = Polynome::zero();
        for (m, c) in termes {
            p.accumule(m, c);
        }
        p
    }

    pub fn is_zero(&self) -> bool {
        self.termes.is_empty()
    }

    /// Nombre de monômes (non nuls).
    pub fn nb_monomes(&self) -> usize {
        self.termes.len()
    }

    /// Coefficient d’un monôme (0 s’il est absent).
    pub fn coeff(&self, m: &Monome) -> BigInt {
        self.termes.get(m).cloned().unwrap_or_else(BigInt::zero)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Monome, &BigInt)> {
        self.termes.iter()
    }

    /// Degré maximal des monômes (0 pour le polynôme nul).
    pub fn degre(&self) -> usize {
        self.termes.keys().map(Monome::degre).max().unwrap_or(0)
    }

    pub fn add(mut self, autre: &Polynome) -> Polynome {
        for (m, c) in &autre.termes {
            self.accumule(m.clone(), c.clone());
        }
        self
    }

    pub fn sub(mut self, autre: &Polynome) -> Polynome {
        for (m, c) in &autre.termes {
            self.accumule(m.clone(), -c);
        }
        self
    }

    /// Développement distributif : chaque paire de monômes contribue au produit.
    pub fn mul(&self, autre: &Polynome) -> Polynome {
        let mut out = Polynome::zero();
        for (m1, c1) in &self.termes {
            for (m2, c2) in &autre.termes {
                out.accumule(m1.mul(m2), c1 * c2);
            }
        }
        out
    }

    /// Négation coefficient par coefficient (aucun ne devient nul).
    pub fn neg(mut self) -> Polynome {
        for c in self.termes.values_mut() {
            *c = -&*c;
        }
        self
    }

    /// Ajoute c au coefficient de m ; retire l’entrée si elle devient nulle.
    fn accumule(&mut self, m: Monome, c: BigInt) {
        if c.is_zero() {
            return;
        }
        let total = match self.termes.remove(&m) {
            Some(ancien) => ancien + c,
            None => c,
        };
        if !total.is_zero() {
            self.termes.insert(m, total);
        }
    }
}
