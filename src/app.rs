// src/app.rs
//
// Plein de π — module App (racine)
// --------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppPi (pour main.rs: use crate::app::AppPi;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Toute l'interaction vit dans vue.rs ; l'état dans etat.rs.
// - Ici : seulement la colle eframe.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppPi;`
pub use etat::AppPi;

use eframe::egui;

impl eframe::App for AppPi {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
