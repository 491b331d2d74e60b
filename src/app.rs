// src/app.rs
//
// Calculatrice standard — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs, vue.rs, clavier.rs, historique.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est lu ici, une fois par frame, puis traduit en Touche (clavier.rs).
// - Une touche = un appel au noyau, dans l’ordre de frappe.

pub mod clavier;
pub mod etat;
pub mod historique;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches = ctx.input(|i| clavier::touches_depuis_evenements(&i.events));
        for t in touches {
            self.appuyer(t);
        }

        if self.historique_visible {
            egui::SidePanel::right("panneau_historique")
                .resizable(true)
                .default_width(220.0)
                .show(ctx, |ui| {
                    self.ui_historique(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
