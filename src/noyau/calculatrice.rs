//! src/noyau/calculatrice.rs
//!
//! Machine d’états de la calculatrice standard.
//!
//! États (remplacent les deux drapeaux “nouvel opérande” / “nouvelle séquence”) :
//! - Repos            : rien de saisi, trace vide
//! - Saisie           : opérande en cours de frappe
//! - OperationEnCours : opérateur appliqué, on attend l’opérande suivant
//! - Resultat         : “=” appliqué ; trace encore affichée, effacée à la prochaine entrée
//!
//! Toutes les opérations prennent `&mut self` et rendent un `Affichage` : l’UI ne lit
//! jamais l’état interne autrement.

use tracing::{trace, warn};

use super::erreur::ErreurCalcul;
use super::format::format_nombre;
use super::jetons::{Jeton, Operateur};
use super::reduction::reduire;
use super::saisie::{Effet, Saisie};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Etat {
    #[default]
    Repos,
    Saisie,
    OperationEnCours,
    Resultat,
}

impl Etat {
    /// Le prochain chiffre commence un nouvel opérande.
    pub fn attend_operande(self) -> bool {
        !matches!(self, Etat::Saisie)
    }

    /// La prochaine entrée repart d’une trace vide.
    pub fn attend_sequence(self) -> bool {
        matches!(self, Etat::Repos | Etat::Resultat)
    }
}

/// Libellé du bouton d’effacement : CE (entrée seulement) ou C (tout).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effacement {
    Entree,
    Tout,
}

impl Effacement {
    pub fn libelle(self) -> &'static str {
        match self {
            Effacement::Entree => "CE",
            Effacement::Tout => "C",
        }
    }
}

/// Une touche logique (bouton ou clavier déjà traduit).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Signe,
    Op(Operateur),
    Egal,
    Effacer,
}

/// Ce que l’UI doit afficher après chaque opération.
#[derive(Clone, Debug, PartialEq)]
pub struct Affichage {
    /// Opérande en cours, ou message d’erreur.
    pub operande: String,
    /// Valeur numérique de l’opérande ; None en erreur.
    pub valeur: Option<f64>,
    /// Trace de l’opération (“9 × 9 + ”).
    pub operation: String,
    pub effacement: Effacement,
    pub erreur: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    etat: Etat,
    saisie: Saisie,
    /// Jetons accumulés ; finit par l’opérateur en attente hors Resultat.
    sequence: Vec<Jeton>,
    /// Trace telle que tapée (texte des opérandes, pas leur valeur relue).
    trace: String,
    erreur: Option<ErreurCalcul>,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn etat(&self) -> Etat {
        self.etat
    }

    /* ------------------------ API publique (une touche = un appel) ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) -> Affichage {
        trace!(?touche, etat = ?self.etat, "touche");
        match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Point => self.point(),
            Touche::Signe => self.basculer_signe(),
            Touche::Op(op) => self.operateur(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer(),
        }
    }

    /// Chiffre 0..=9.
    pub fn chiffre(&mut self, d: u8) -> Affichage {
        self.nouvelle_entree();
        let effet = self.saisie.chiffre(d, self.etat.attend_operande());
        self.apres_saisie(effet);
        self.affichage()
    }

    pub fn point(&mut self) -> Affichage {
        self.nouvelle_entree();
        let effet = self.saisie.point();
        self.apres_saisie(effet);
        self.affichage()
    }

    /// ± : ne change pas l’état.
    pub fn basculer_signe(&mut self) -> Affichage {
        self.erreur = None;
        self.saisie.basculer_signe();
        self.affichage()
    }

    pub fn operateur(&mut self, op: Operateur) -> Affichage {
        self.appliquer(Some(op));
        self.affichage()
    }

    pub fn egal(&mut self) -> Affichage {
        self.appliquer(None);
        self.affichage()
    }

    /// CE pendant la saisie (opérande seul) ; C sinon (tout).
    pub fn effacer(&mut self) -> Affichage {
        self.erreur = None;
        self.saisie = Saisie::zero();

        match self.effacement() {
            Effacement::Entree => {
                // un opérateur en attente reste en attente
                self.etat = if self.sequence.is_empty() {
                    Etat::Repos
                } else {
                    Etat::OperationEnCours
                };
            }
            Effacement::Tout => {
                self.vider_sequence();
                self.etat = Etat::Repos;
            }
        }
        self.affichage()
    }

    /// Rappelle une valeur (ex: entrée d’historique) comme nouvel opérande d’une séquence neuve.
    pub fn rappeler(&mut self, valeur: f64) -> Affichage {
        self.erreur = None;
        self.vider_sequence();
        self.saisie = Saisie::depuis_resultat(format_nombre(valeur));
        self.etat = Etat::Resultat;
        self.affichage()
    }

    pub fn affichage(&self) -> Affichage {
        let (operande, valeur) = match &self.erreur {
            Some(e) => (e.to_string(), None),
            None => (self.saisie.texte().to_string(), Some(self.saisie.valeur())),
        };
        Affichage {
            operande,
            valeur,
            operation: self.trace.clone(),
            effacement: self.effacement(),
            erreur: self.erreur.is_some(),
        }
    }

    pub fn effacement(&self) -> Effacement {
        match self.etat {
            Etat::Saisie => Effacement::Entree,
            _ => Effacement::Tout,
        }
    }

    /* ------------------------ Interne ------------------------ */

    /// Avant un chiffre/point : après “=”, la trace repart de zéro.
    fn nouvelle_entree(&mut self) {
        self.erreur = None;
        if self.etat.attend_sequence() {
            self.vider_sequence();
        }
    }

    fn vider_sequence(&mut self) {
        self.sequence.clear();
        self.trace.clear();
    }

    fn apres_saisie(&mut self, effet: Effet) {
        match effet {
            Effet::Saisi => self.etat = Etat::Saisie,
            Effet::ZeroProvisoire | Effet::Ignore => {
                // la trace vient d’être vidée : Resultat n’a plus rien à montrer
                if self.etat == Etat::Resultat {
                    self.etat = Etat::Repos;
                }
            }
        }
    }

    /// `Some(op)` : opérateur ; `None` : “=”.
    fn appliquer(&mut self, op: Option<Operateur>) {
        // après une erreur, on repart de "0" (la saisie vaut déjà "0")
        self.erreur = None;

        if self.etat.attend_sequence() {
            self.vider_sequence();
        }
        self.sequence.push(Jeton::Operande(self.saisie.valeur()));
        self.trace.push_str(self.saisie.texte());
        self.trace.push(' ');

        let a_reduire = self.sequence.len();
        if let Some(op) = op {
            self.sequence.push(Jeton::Op(op));
            self.trace.push_str(&format!("{op} "));
        }

        self.etat = match op {
            Some(_) => Etat::OperationEnCours,
            None => Etat::Resultat,
        };

        match reduire(&self.sequence[..a_reduire]) {
            Ok(v) => {
                self.saisie = Saisie::depuis_resultat(format_nombre(v));
            }
            Err(e) if e.est_utilisateur() => {
                warn!(operation = %self.trace, "{e}");
                // séquence abandonnée : la trace reste visible jusqu’à la prochaine entrée
                self.erreur = Some(e);
                self.saisie = Saisie::zero();
                self.etat = Etat::Resultat;
            }
            Err(e) => unreachable!("séquence construite invalide: {e}"),
        }
    }
}
