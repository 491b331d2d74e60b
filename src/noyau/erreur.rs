// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - DivisionParZero : seule erreur “utilisateur” (affichée à la place de l’opérande)
// - le reste : séquence mal formée => erreur de programmation (l’accumulateur garantit la forme)

use thiserror::Error;

/// Message affiché à la place de l’opérande après une division par zéro.
pub const MESSAGE_DIVISION_PAR_ZERO: &str = "Cannot divide by zero";

pub type ResultatCalcul<T> = Result<T, ErreurCalcul>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("{}", MESSAGE_DIVISION_PAR_ZERO)]
    DivisionParZero,

    /// Longueur paire ou nulle : une séquence commence et finit par un opérande.
    #[error("séquence mal formée (longueur {longueur})")]
    SequenceMalformee { longueur: usize },

    /// Alternance opérande/opérateur rompue.
    #[error("opérande attendu en position {position}")]
    OperandeAttendu { position: usize },

    #[error("opérateur attendu en position {position}")]
    OperateurAttendu { position: usize },
}

impl ErreurCalcul {
    /// Vrai si l’erreur doit être montrée à l’utilisateur (pas un bug interne).
    pub fn est_utilisateur(&self) -> bool {
        matches!(self, ErreurCalcul::DivisionParZero)
    }
}
