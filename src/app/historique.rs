//! src/app/historique.rs
//!
//! Historique des calculs (panneau “History”).
//!
//! - une entrée par appui sur “=” : trace + résultat (“9 × 9 = 81”)
//! - file bornée : au-delà de la capacité, la plus ancienne entrée sort
//! - rien n’est persisté entre deux lancements

use std::collections::VecDeque;

/// Garde-fou : on borne l’historique (anti-croissance sans fin).
pub const CAPACITE_HISTORIQUE: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    /// Trace au moment du “=” (“9 × 9 ”).
    pub operation: String,
    /// Résultat affiché (nombre ou message d’erreur).
    pub resultat: String,
    /// Valeur rappelable ; None si le calcul a échoué.
    pub valeur: Option<f64>,
}

impl EntreeHistorique {
    pub fn ligne(&self) -> String {
        format!("{}= {}", self.operation, self.resultat)
    }
}

#[derive(Clone, Debug)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
    capacite: usize,
}

impl Default for Historique {
    fn default() -> Self {
        Self::avec_capacite(CAPACITE_HISTORIQUE)
    }
}

impl Historique {
    pub fn avec_capacite(capacite: usize) -> Self {
        Self {
            entrees: VecDeque::with_capacity(capacite.min(CAPACITE_HISTORIQUE)),
            capacite: capacite.max(1),
        }
    }

    pub fn ajouter(&mut self, entree: EntreeHistorique) {
        if self.entrees.len() >= self.capacite {
            self.entrees.pop_front();
        }
        self.entrees.push_back(entree);
    }

    pub fn effacer(&mut self) {
        self.entrees.clear();
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Plus récente d’abord (ordre d’affichage).
    pub fn recentes(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter().rev()
    }

    /// Index dans l’ordre `recentes()`.
    pub fn get_recente(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.iter().rev().nth(index)
    }
}
