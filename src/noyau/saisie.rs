// src/noyau/saisie.rs
//
// Accumulateur d’entrée : construit le texte de l’opérande en cours.
//
// Contrats :
// - au plus un point décimal
// - signe moins optionnel en tête, jamais “-0”
// - pas de zéros de tête redondants (hors "0" et "0.")
// - le texte est toujours relisible en f64 (garanti ici, pas par l’appelant)

/// Ce que la touche a produit, pour que la machine d’états décide de la transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effet {
    /// "0" posé sur un opérande neuf : ne compte pas comme une saisie.
    ZeroProvisoire,
    /// Un caractère a été saisi (l’opérande est “entamé”).
    Saisi,
    /// Point refusé (déjà présent, ou texte non décimal).
    Ignore,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Saisie {
    texte: String,
}

impl Default for Saisie {
    fn default() -> Self {
        Self::zero()
    }
}

impl Saisie {
    pub fn zero() -> Self {
        Self {
            texte: "0".to_string(),
        }
    }

    /// Opérande issu d’un résultat (texte déjà formaté, relisible).
    pub fn depuis_resultat(texte: impl Into<String>) -> Self {
        Self {
            texte: texte.into(),
        }
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    /// Valeur numérique. Un texte illisible est un bug de l’accumulateur, pas une faute utilisateur.
    pub fn valeur(&self) -> f64 {
        match self.texte.parse::<f64>() {
            Ok(v) => v,
            Err(e) => unreachable!("opérande illisible {:?}: {e}", self.texte),
        }
    }

    /// Chiffre 0..=9. `neuf` : le prochain caractère commence un nouvel opérande.
    pub fn chiffre(&mut self, d: u8, neuf: bool) -> Effet {
        debug_assert!(d <= 9, "chiffre hors bornes: {d}");
        let c = char::from(b'0' + d.min(9));

        if neuf {
            self.texte.clear();
            self.texte.push(c);
            return if c == '0' {
                Effet::ZeroProvisoire
            } else {
                Effet::Saisi
            };
        }

        self.texte.push(c);
        Effet::Saisi
    }

    /// Point décimal : toujours ajouté au texte affiché, y compris un résultat ("9" -> "9.").
    /// Refusé si le texte a déjà un point, ou n’est pas un décimal simple ("1e20", "inf").
    pub fn point(&mut self) -> Effet {
        let decimal_simple = self
            .texte
            .trim_start_matches('-')
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'.');
        if self.texte.contains('.') || !decimal_simple {
            return Effet::Ignore;
        }
        self.texte.push('.');
        Effet::Saisi
    }

    /// ± : retire exactement le “-” de tête, ou en ajoute un si la valeur est non nulle.
    pub fn basculer_signe(&mut self) {
        if let Some(reste) = self.texte.strip_prefix('-') {
            self.texte = reste.to_string();
            return;
        }
        if self.valeur() != 0.0 {
            self.texte.insert(0, '-');
        }
    }
}
