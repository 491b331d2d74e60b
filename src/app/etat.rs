//! src/app/etat.rs
//!
//! État UI : le noyau (Calculatrice) + ce qu’il a rendu à afficher + l’historique.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Calculatrice`.
//! - L’affichage n’est JAMAIS relu comme source de vérité : on garde le dernier `Affichage`.
//! - Une entrée d’historique par “=”.

use tracing::debug;

use super::historique::{EntreeHistorique, Historique};
use crate::noyau::{Affichage, Calculatrice, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    calculatrice: Calculatrice,

    // --- sorties (dernier rendu du noyau) ---
    pub affichage: Affichage,

    // --- historique ---
    pub historique: Historique,
    pub historique_visible: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        let calculatrice = Calculatrice::new();
        let affichage = calculatrice.affichage();
        Self {
            calculatrice,
            affichage,
            historique: Historique::default(),
            historique_visible: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions ------------------------ */

    /// Bouton ou clavier : une touche = un appel au noyau.
    pub fn appuyer(&mut self, touche: Touche) {
        self.affichage = self.calculatrice.appuyer(touche);
        debug!(?touche, etat = ?self.calculatrice.etat(), operande = %self.affichage.operande);

        if touche == Touche::Egal {
            let entree = EntreeHistorique {
                operation: self.affichage.operation.clone(),
                resultat: self.affichage.operande.clone(),
                valeur: self.affichage.valeur,
            };
            debug!(ligne = %entree.ligne(), "historique");
            self.historique.ajouter(entree);
        }
    }

    /// Clic sur une entrée d’historique : son résultat devient l’opérande.
    pub fn rappeler_historique(&mut self, index: usize) {
        let valeur = self.historique.get_recente(index).and_then(|e| e.valeur);
        if let Some(v) = valeur {
            self.affichage = self.calculatrice.rappeler(v);
        }
    }

    pub fn effacer_historique(&mut self) {
        self.historique.effacer();
    }
}
