// src/noyau/expr.rs
//
// AST exact (entiers seulement, sans flottants).
// - Nombre : littéral entier (BigInt, jamais de débordement)
// - Var    : une des trois variables x, y, z
// - Neg    : moins unaire
// - Binaire: + - * (associatif à gauche par construction)
//
// Chaque noeud possède ses enfants (Box), pas de partage.
// Une chaîne plate (a+b+c+...) donne une épine gauche aussi longue que la
// chaîne : taille, affichage et libération parcourent l’arbre avec une pile
// explicite, jamais par récursion.

use num_bigint::BigInt;

use std::fmt;
use std::mem;

/// Alphabet des variables. L’ordre X < Y < Z est l’ordre lexicographique des noms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variable {
    X,
    Y,
    Z,
}

impl Variable {
    pub fn depuis_char(c: char) -> Option<Variable> {
        match c {
            'x' => Some(Variable::X),
            'y' => Some(Variable::Y),
            'z' => Some(Variable::Z),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Variable::X => "x",
            Variable::Y => "y",
            Variable::Z => "z",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Add,
    Sub,
    Mul,
}

impl OpBinaire {
    fn symbole(self) -> &'static str {
        match self {
            OpBinaire::Add => "+",
            OpBinaire::Sub => "-",
            OpBinaire::Mul => "*",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Nombre(BigInt),
    Var(Variable),

    Neg(Box<Expr>),

    Binaire(OpBinaire, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn nombre(n: impl Into<BigInt>) -> Expr {
        Expr::Nombre(n.into())
    }

    pub fn binaire(op: OpBinaire, a: Expr, b: Expr) -> Expr {
        Expr::Binaire(op, Box::new(a), Box::new(b))
    }

    pub fn neg(e: Expr) -> Expr {
        Expr::Neg(Box::new(e))
    }

    /// Nombre de noeuds de l’arbre (démarche + tests).
    pub fn taille(&self) -> usize {
        let mut n = 0;
        let mut pile = vec![self];
        while let Some(e) = pile.pop() {
            n += 1;
            match e {
                Expr::Nombre(_) | Expr::Var(_) => {}
                Expr::Neg(x) => pile.push(x),
                Expr::Binaire(_, a, b) => {
                    pile.push(b);
                    pile.push(a);
                }
            }
        }
        n
    }

    /// Détache les enfants (remplacés par une feuille) et les empile.
    fn detache_enfants(&mut self, pile: &mut Vec<Expr>) {
        match self {
            Expr::Nombre(_) | Expr::Var(_) => {}
            Expr::Neg(x) => pile.push(mem::replace(&mut **x, Expr::Var(Variable::X))),
            Expr::Binaire(_, a, b) => {
                pile.push(mem::replace(&mut **a, Expr::Var(Variable::X)));
                pile.push(mem::replace(&mut **b, Expr::Var(Variable::X)));
            }
        }
    }
}

/// Libération itérative : chaque noeud est vidé avant d’être lâché,
/// la récursion implicite du Drop des Box ne descend donc que d’un niveau.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pile = Vec::new();
        self.detache_enfants(&mut pile);
        while let Some(mut e) = pile.pop() {
            e.detache_enfants(&mut pile);
        }
    }
}

enum Morceau<'a> {
    Noeud(&'a Expr),
    Texte(&'static str),
}

/// Affichage “arbre” : chaque opération binaire est parenthésée,
/// ce qui rend la structure (associativité, précédence) visible dans la démarche.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pile = vec![Morceau::Noeud(self)];
        while let Some(m) = pile.pop() {
            match m {
                Morceau::Texte(t) => f.write_str(t)?,
                Morceau::Noeud(Expr::Nombre(n)) => write!(f, "{n}")?,
                Morceau::Noeud(Expr::Var(v)) => write!(f, "{v}")?,
                Morceau::Noeud(Expr::Neg(x)) => {
                    f.write_str("-")?;
                    pile.push(Morceau::Noeud(x));
                }
                Morceau::Noeud(Expr::Binaire(op, a, b)) => {
                    f.write_str("(")?;
                    pile.push(Morceau::Texte(")"));
                    pile.push(Morceau::Noeud(b));
                    pile.push(Morceau::Texte(op.symbole()));
                    pile.push(Morceau::Noeud(a));
                }
            }
        }
        Ok(())
    }
}
