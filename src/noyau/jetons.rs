// src/noyau/jetons.rs

use std::fmt;

use num_traits::Zero;

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::format::format_nombre;

/// Les quatre opérateurs binaires. `=` n’en fait pas partie : c’est une action terminale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole Unicode affiché (boutons + trace).
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '\u{2212}',  // −
            Operateur::Fois => '\u{00D7}',   // ×
            Operateur::Divise => '\u{00F7}', // ÷
        }
    }

    /// Accepte le symbole Unicode ou son équivalent clavier ASCII.
    pub fn depuis_caractere(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' | '\u{2212}' => Some(Operateur::Moins),
            '*' | '\u{00D7}' => Some(Operateur::Fois),
            '/' | '\u{00F7}' => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// × et ÷ : passe 1 de la réduction.
    pub fn est_multiplicatif(self) -> bool {
        matches!(self, Operateur::Fois | Operateur::Divise)
    }

    /// Applique l’opérateur. Seule ÷ par un zéro exact (±0) échoue.
    pub fn appliquer(self, gauche: f64, droite: f64) -> ResultatCalcul<f64> {
        match self {
            Operateur::Plus => Ok(gauche + droite),
            Operateur::Moins => Ok(gauche - droite),
            Operateur::Fois => Ok(gauche * droite),
            Operateur::Divise => {
                if droite.is_zero() {
                    Err(ErreurCalcul::DivisionParZero)
                } else {
                    Ok(gauche / droite)
                }
            }
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Operande(f64),
    Op(Operateur),
}

impl Jeton {
    pub fn operande(&self) -> Option<f64> {
        match self {
            Jeton::Operande(v) => Some(*v),
            Jeton::Op(_) => None,
        }
    }

    pub fn operateur(&self) -> Option<Operateur> {
        match self {
            Jeton::Op(op) => Some(*op),
            Jeton::Operande(_) => None,
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Operande(v) => f.write_str(&format_nombre(*v)),
            Jeton::Op(op) => write!(f, "{op}"),
        }
    }
}

/// Trace affichée : chaque jeton suivi d’une espace (“9 × 9 + ”).
pub fn format_trace(jetons: &[Jeton]) -> String {
    let mut out = String::new();
    for j in jetons {
        out.push_str(&j.to_string());
        out.push(' ');
    }
    out
}
