//! Tests de scénarios : suites de touches complètes + propriétés de la réduction.
//!
//! But : vérifier la calculatrice comme un utilisateur la tape, et comparer la réduction
//! à un modèle de référence (précédence usuelle) sur des séquences aléatoires bornées.
//! - RNG : proptest (seed gérée par proptest)
//! - opérandes entiers petits => arithmétique exacte en f64, comparaison à l’égalité

use proptest::prelude::*;

use super::calculatrice::{Affichage, Calculatrice, Touche};
use super::erreur::ErreurCalcul;
use super::jetons::{Jeton, Operateur};
use super::reduction::reduire;

fn touches(s: &str) -> Vec<Touche> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
            '.' => Touche::Point,
            '±' => Touche::Signe,
            '=' => Touche::Egal,
            'C' => Touche::Effacer,
            op => Touche::Op(
                Operateur::depuis_caractere(op).unwrap_or_else(|| panic!("touche {op:?}")),
            ),
        })
        .collect()
}

fn jouer(s: &str) -> Affichage {
    let mut c = Calculatrice::new();
    touches(s)
        .into_iter()
        .fold(c.affichage(), |_, t| c.appuyer(t))
}

/* ------------------------ Scénarios utilisateur ------------------------ */

#[test]
fn scn_precedence_complete() {
    assert_eq!(jouer("2 + 2 * 3 + 2 * 10 =").operande, "28");
}

#[test]
fn scn_divisions_enchainees() {
    assert_eq!(jouer("6 / 3 / 2 =").operande, "1");
}

#[test]
fn scn_decimales() {
    assert_eq!(jouer("12.3 * 2 =").operande, "24.6");
    assert_eq!(jouer(".5 + 0.25 =").operande, "0.75");
    assert_eq!(jouer("1 / 3 =").operande, "0.3333333333333333");
}

#[test]
fn scn_point_apres_operateur() {
    // le point prolonge l’opérande affiché
    let a = jouer("9 * . 5");
    assert_eq!(a.operande, "9.5");
    assert_eq!(a.operation, "9 × ");
    assert_eq!(jouer("9 * . 5 =").operande, "85.5");
    // "0.5" affiché a déjà un point : ".25" donne "25"
    assert_eq!(jouer(".5 + .25 =").operande, "25.5");
}

#[test]
fn scn_point_apres_egal() {
    let a = jouer("9 * 9 = . 5");
    assert_eq!(a.operande, "81.5");
    assert_eq!(a.operation, "");
    assert_eq!(jouer("9 * 9 = . 5 + 1 =").operande, "82.5");
    // résultat exponentiel : le point est refusé
    let a = jouer("100000000 * 100000000 * 100 = .");
    assert_eq!(a.operande, "1e18");
}

#[test]
fn scn_negatifs() {
    assert_eq!(jouer("5 ± - 3 =").operande, "-8");
    assert_eq!(jouer("5 ± * 3 ± =").operande, "15");
}

#[test]
fn scn_grands_nombres_exponentiels() {
    let a = jouer("100000000 * 100000000 * 100 =");
    assert_eq!(a.operande, "1e18");
    // le résultat exponentiel reste utilisable comme opérande
    let mut c = Calculatrice::new();
    for t in touches("100000000 * 100000000 * 100 = / 1000 =") {
        c.appuyer(t);
    }
    assert_eq!(c.affichage().operande, "1000000000000000");
}

#[test]
fn scn_debordement_infini() {
    let mut c = Calculatrice::new();
    c.rappeler(1e308);
    for t in touches("* 10 =") {
        c.appuyer(t);
    }
    assert_eq!(c.affichage().operande, "inf");
    // puis on continue sans panique
    for t in touches("± + 1 =") {
        c.appuyer(t);
    }
    assert_eq!(c.affichage().operande, "-inf");
}

#[test]
fn scn_division_par_zero_puis_reprise() {
    let a = jouer("5 / 0 =");
    assert_eq!(a.operande, ErreurCalcul::DivisionParZero.to_string());
    assert!(a.erreur);

    let a = jouer("5 / 0 = 2 + 2 =");
    assert!(!a.erreur);
    assert_eq!(a.operande, "4");
    assert_eq!(a.operation, "2 + 2 ");
}

#[test]
fn scn_division_par_zero_calculee() {
    // le diviseur nul vient d’un opérande tapé "0.0"
    assert!(jouer("8 / 0.0 =").erreur);
    // mais 0 ÷ x est permis
    assert_eq!(jouer("0 / 8 =").operande, "0");
}

#[test]
fn scn_effacement_deux_temps() {
    let a = jouer("7 + 8 C");
    assert_eq!(a.operande, "0");
    assert_eq!(a.operation, "7 + ");
    let a = jouer("7 + 8 C 1 =");
    assert_eq!(a.operande, "8");
    let a = jouer("7 + 8 C C");
    assert_eq!(a.operation, "");
}

/* ------------------------ Propriétés de la réduction ------------------------ */

/// Modèle de référence : somme de produits/quotients, évalués gauche -> droite.
fn modele(tete: i32, suite: &[(Operateur, i32)]) -> Option<f64> {
    let mut termes: Vec<(f64, f64)> = vec![(1.0, f64::from(tete))]; // (signe, valeur)
    for &(op, v) in suite {
        let v = f64::from(v);
        match op {
            Operateur::Plus => termes.push((1.0, v)),
            Operateur::Moins => termes.push((-1.0, v)),
            Operateur::Fois => termes.last_mut()?.1 *= v,
            Operateur::Divise => {
                if v == 0.0 {
                    return None;
                }
                termes.last_mut()?.1 /= v;
            }
        }
    }
    Some(termes.iter().fold(0.0, |acc, (s, v)| acc + s * v))
}

fn operateur_strategy() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
        Just(Operateur::Divise),
    ]
}

fn sequence(tete: i32, suite: &[(Operateur, i32)]) -> Vec<Jeton> {
    let mut out = vec![Jeton::Operande(f64::from(tete))];
    for &(op, v) in suite {
        out.push(Jeton::Op(op));
        out.push(Jeton::Operande(f64::from(v)));
    }
    out
}

proptest! {
    #[test]
    fn prop_reduction_conforme_au_modele(
        tete in -20i32..=20,
        suite in prop::collection::vec((operateur_strategy(), -20i32..=20), 0..8),
    ) {
        let obtenu = reduire(&sequence(tete, &suite));
        match modele(tete, &suite) {
            Some(attendu) => {
                let v = obtenu.unwrap();
                prop_assert!(
                    (v - attendu).abs() <= 1e-9 * attendu.abs().max(1.0),
                    "obtenu={} attendu={}", v, attendu
                );
            }
            None => prop_assert_eq!(obtenu, Err(ErreurCalcul::DivisionParZero)),
        }
    }

    #[test]
    fn prop_sans_division_pas_d_erreur(
        tete in -1000i32..=1000,
        suite in prop::collection::vec(
            (prop_oneof![Just(Operateur::Plus), Just(Operateur::Moins), Just(Operateur::Fois)], -1000i32..=1000),
            0..6,
        ),
    ) {
        prop_assert!(reduire(&sequence(tete, &suite)).is_ok());
    }

    #[test]
    fn prop_operande_seul_identite(v in -1e12f64..1e12) {
        prop_assert_eq!(reduire(&[Jeton::Operande(v)]), Ok(v));
    }

    #[test]
    fn prop_touches_aleatoires_sans_panique(
        suite in prop::collection::vec(
            prop_oneof![
                (0u8..=9).prop_map(Touche::Chiffre),
                Just(Touche::Point),
                Just(Touche::Signe),
                operateur_strategy().prop_map(Touche::Op),
                Just(Touche::Egal),
                Just(Touche::Effacer),
            ],
            0..40,
        ),
    ) {
        let mut c = Calculatrice::new();
        for t in suite {
            let a = c.appuyer(t);
            // l’opérande affiché est un nombre relisible, ou le message d’erreur
            prop_assert!(a.erreur || a.operande.parse::<f64>().is_ok(), "{:?}", a);
        }
    }
}
