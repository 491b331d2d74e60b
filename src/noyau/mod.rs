//! Noyau de la calculatrice standard
//!
//! Organisation interne :
//! - erreur.rs       : ErreurCalcul (division par zéro + séquences mal formées)
//! - jetons.rs       : opérateurs + jetons + trace affichée
//! - format.rs       : f64 -> texte (relisible)
//! - saisie.rs       : accumulateur d’entrée (opérande en cours)
//! - reduction.rs    : réduction en deux passes (×÷ puis +−)
//! - calculatrice.rs : machine d’états + API “une touche = un appel”

pub mod calculatrice;
pub mod erreur;
pub mod format;
pub mod jetons;
pub mod reduction;
pub mod saisie;

#[cfg(test)]
mod tests_scenarios;

// API publique minimale
pub use calculatrice::{Affichage, Calculatrice, Touche};
pub use jetons::Operateur;
