// src/app/clavier.rs
//
// Clavier -> touches logiques.
// - texte tapé : 0-9 . + - * / =
// - touches nommées : Enter (=), Escape (effacer), F9 (±)
// Le reste est ignoré ici : le noyau ne reçoit que des Touche valides.

use eframe::egui;

use crate::noyau::{Operateur, Touche};

/// Un caractère tapé -> touche, ou None si non reconnu.
pub fn touche_depuis_caractere(c: char) -> Option<Touche> {
    if let Some(d) = c.to_digit(10) {
        return Some(Touche::Chiffre(d as u8));
    }
    match c {
        '.' => Some(Touche::Point),
        '=' => Some(Touche::Egal),
        _ => Operateur::depuis_caractere(c).map(Touche::Op),
    }
}

fn touche_depuis_nommee(key: egui::Key) -> Option<Touche> {
    match key {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Escape => Some(Touche::Effacer),
        egui::Key::F9 => Some(Touche::Signe),
        _ => None,
    }
}

/// Traduit les événements d’une frame, dans l’ordre de frappe.
pub fn touches_depuis_evenements(events: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(s) => out.extend(s.chars().filter_map(touche_depuis_caractere)),
            egui::Event::Key {
                key, pressed: true, ..
            } => out.extend(touche_depuis_nommee(*key)),
            _ => {}
        }
    }
    out
}
