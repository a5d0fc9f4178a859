// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::erreur::ErreurLexicale;
use super::expr::Variable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Entier(BigInt),
    Var(Variable),

    Plus,
    Minus,
    Star,

    LPar,
    RPar,
}

impl Tok {
    /// Texte du jeton tel qu’il apparaît dans l’entrée.
    pub fn texte(&self) -> String {
        match self {
            Tok::Entier(n) => n.to_string(),
            Tok::Var(v) => v.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Alphabet accepté:
/// - entiers décimaux (ex: 12), lus en entier (pas de signe ici)
/// - variables x, y, z
/// - opérateurs + - *
/// - parenthèses ( )
/// - espace ' ' (séparateur, jamais un jeton)
///
/// Tout autre caractère fait échouer la lecture : chaque caractère de l’entrée
/// doit être couvert par un jeton ou être un espace.
/// Une entrée vide donne une suite vide (c’est l’analyse qui la refusera).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurLexicale> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        match c {
            ' ' => {
                i += 1;
                continue;
            }
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            '+' => out.push(Tok::Plus),
            '-' => out.push(Tok::Minus),
            '*' => out.push(Tok::Star),
            _ => {
                if let Some(v) = Variable::depuis_char(c) {
                    out.push(Tok::Var(v));
                    i += 1;
                    continue;
                }

                // Entier : plus longue suite de chiffres
                if c.is_ascii_digit() {
                    let start = i;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                    let txt: String = chars[start..i].iter().collect();
                    // Une suite non vide de chiffres ASCII est toujours lisible.
                    let n = BigInt::parse_bytes(txt.as_bytes(), 10).ok_or(ErreurLexicale {
                        caractere: c,
                        position: start,
                    })?;
                    out.push(Tok::Entier(n));
                    continue;
                }

                return Err(ErreurLexicale {
                    caractere: c,
                    position: i,
                });
            }
        }

        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(Tok::texte).collect::<Vec<_>>().join(" ")
}
