// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Zone d’affichage : trace (petite) + opérande (grande), alignées à droite
// - Pavé 4 colonnes : CE/C ± ÷ × / 7 8 9 − / 4 5 6 + / 1 2 3 = / 0 .
// - Panneau “History” à droite (clic = rappel du résultat)
//
// Note :
// - le libellé CE/C vient du noyau (Affichage::effacement), pas de l’UI

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Operateur, Touche};

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];
const TAILLE_OPERANDE: f32 = 34.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.heading("Calculatrice");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let libelle = if self.historique_visible {
                    "Masquer l’historique"
                } else {
                    "History"
                };
                if ui.button(libelle).clicked() {
                    self.historique_visible = !self.historique_visible;
                }
            });
        });
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // trace : hauteur stable même vide
                    let trace = if self.affichage.operation.is_empty() {
                        " "
                    } else {
                        self.affichage.operation.as_str()
                    };
                    ui.monospace(trace);

                    let texte = egui::RichText::new(&self.affichage.operande)
                        .size(TAILLE_OPERANDE)
                        .monospace();
                    if self.affichage.erreur {
                        ui.colored_label(ui.visuals().error_fg_color, texte);
                    } else {
                        ui.label(texte);
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let effacer = self.affichage.effacement.libelle();

        egui::Grid::new("pave_standard")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, effacer, Touche::Effacer);
                self.bouton(ui, "\u{00B1}", Touche::Signe);
                self.bouton_op(ui, Operateur::Divise);
                self.bouton_op(ui, Operateur::Fois);
                ui.end_row();

                self.bouton_chiffre(ui, 7);
                self.bouton_chiffre(ui, 8);
                self.bouton_chiffre(ui, 9);
                self.bouton_op(ui, Operateur::Moins);
                ui.end_row();

                self.bouton_chiffre(ui, 4);
                self.bouton_chiffre(ui, 5);
                self.bouton_chiffre(ui, 6);
                self.bouton_op(ui, Operateur::Plus);
                ui.end_row();

                self.bouton_chiffre(ui, 1);
                self.bouton_chiffre(ui, 2);
                self.bouton_chiffre(ui, 3);
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();

                self.bouton_chiffre(ui, 0);
                self.bouton(ui, ".", Touche::Point);
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Panneau latéral : liste des calculs, plus récent en haut.
    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong(format!("History ({})", self.historique.len()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let resp = ui.add_enabled(
                    !self.historique.is_empty(),
                    egui::Button::new("Clear history"),
                );
                if resp.clicked() {
                    self.effacer_historique();
                }
            });
        });
        ui.separator();

        if self.historique.is_empty() {
            ui.weak("Pas encore d’historique");
            return;
        }

        let mut clic: Option<usize> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (i, e) in self.historique.recentes().enumerate() {
                    let texte = egui::RichText::new(e.ligne()).monospace();
                    let resp = ui
                        .add(egui::Button::new(texte).frame(false))
                        .on_hover_text("Rappeler ce résultat");
                    if resp.clicked() {
                        clic = Some(i);
                    }
                }
            });

        if let Some(i) = clic {
            self.rappeler_historique(i);
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, d: u8) {
        let label = char::from(b'0' + d).to_string();
        self.bouton(ui, &label, Touche::Chiffre(d));
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, op: Operateur) {
        self.bouton(ui, &op.symbole().to_string(), Touche::Op(op));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(
            TAILLE_BOUTON,
            egui::Button::new(egui::RichText::new(label).size(18.0)),
        );
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
