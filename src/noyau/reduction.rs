// src/noyau/reduction.rs
//
// Réduction d’une séquence “a op b op c …” en un seul nombre.
//
// Deux passes gauche -> droite, chacune un fold qui produit une NOUVELLE liste plus courte :
// - passe 1 : × et ÷ (÷ par zéro => échec immédiat)
// - passe 2 : + et −
//
// Exemple:
//   2 + 2 × 3 + 2 × 10
//   passe 1 -> 2 + 6 + 20
//   passe 2 -> 28          (et non 140 en naïf gauche->droite)

use tracing::debug;

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::{format_trace, Jeton, Operateur};

/// Réduit une séquence complète (longueur impaire, alternée) en un nombre.
pub fn reduire(jetons: &[Jeton]) -> ResultatCalcul<f64> {
    let (tete, suite) = decouper(jetons)?;

    if suite.is_empty() {
        return Ok(tete);
    }

    let apres_mul = passe(tete, &suite, Operateur::est_multiplicatif)?;
    debug!(avant = %format_trace(jetons), apres = %format_trace(&apres_mul), "passe ×÷");

    let (tete, suite) = decouper(&apres_mul)?;
    let apres_add = passe(tete, &suite, |op| !op.est_multiplicatif())?;
    debug!(apres = %format_trace(&apres_add), "passe +−");

    // Après les deux passes il ne reste qu’un opérande.
    match apres_add.as_slice() {
        [Jeton::Operande(v)] => Ok(*v),
        autre => Err(ErreurCalcul::SequenceMalformee {
            longueur: autre.len(),
        }),
    }
}

/// Une passe : chaque opérateur retenu fusionne l’opérande de gauche (déjà en sortie)
/// avec celui de droite ; les autres sont recopiés tels quels.
fn passe(
    tete: f64,
    suite: &[(Operateur, f64)],
    retenu: impl Fn(Operateur) -> bool,
) -> ResultatCalcul<Vec<Jeton>> {
    let depart = vec![Jeton::Operande(tete)];

    suite.iter().try_fold(
        depart,
        |mut sortie, &(op, droite)| -> ResultatCalcul<Vec<Jeton>> {
            if !retenu(op) {
                sortie.push(Jeton::Op(op));
                sortie.push(Jeton::Operande(droite));
                return Ok(sortie);
            }

            // la sortie finit toujours par un opérande
            let gauche = match sortie.pop() {
                Some(Jeton::Operande(g)) => g,
                _ => {
                    return Err(ErreurCalcul::OperandeAttendu {
                        position: sortie.len(),
                    })
                }
            };
            let v = op.appliquer(gauche, droite)?;
            debug!("{gauche} {op} {droite} = {v}");
            sortie.push(Jeton::Operande(v));
            Ok(sortie)
        },
    )
}

/// Vérifie la forme “opérande (opérateur opérande)*” et la découpe en tête + paires.
fn decouper(jetons: &[Jeton]) -> ResultatCalcul<(f64, Vec<(Operateur, f64)>)> {
    if jetons.len() % 2 == 0 {
        return Err(ErreurCalcul::SequenceMalformee {
            longueur: jetons.len(),
        });
    }

    let tete = jetons[0]
        .operande()
        .ok_or(ErreurCalcul::OperandeAttendu { position: 0 })?;

    let suite = jetons[1..]
        .chunks_exact(2)
        .enumerate()
        .map(|(k, paire)| -> ResultatCalcul<(Operateur, f64)> {
            let position = 1 + 2 * k;
            let op = paire[0]
                .operateur()
                .ok_or(ErreurCalcul::OperateurAttendu { position })?;
            let v = paire[1].operande().ok_or(ErreurCalcul::OperandeAttendu {
                position: position + 1,
            })?;
            Ok((op, v))
        })
        .collect::<ResultatCalcul<Vec<_>>>()?;

    Ok((tete, suite))
}
