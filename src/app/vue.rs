// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppPi (etat.rs) pour natif + wasm
// - Traceur : une ligne par courbe (visibilité, saisie, erreur EN LIGNE,
//   retrait), contrôles de domaine, tracé egui_plot (pan/zoom, légende)
// - Une erreur de parse bloque SA courbe seulement ; les autres tracent.
// - Outils : calcul déclenché au bouton, résultat DÉPOSÉ dans l'état
//   (la vue calcule, l'état stocke — jamais l'inverse)

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use super::etat::{AppPi, Onglet, OpFraction, ENTIER_MAX};
use crate::noyau::echantillon::{echantillonner, segments};
use crate::noyau::{compiler, fractions, nombres, triangle};

impl AppPi {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Plein de π");
        ui.add_space(4.0);

        // barre d'onglets : enum explicite, pas de référence exécutable en donnée
        ui.horizontal(|ui| {
            for onglet in Onglet::TOUS {
                let actif = self.onglet == onglet;
                if ui.selectable_label(actif, onglet.titre()).clicked() {
                    self.onglet = onglet;
                }
            }
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.onglet {
                Onglet::Traceur => self.ui_traceur(ui),
                Onglet::Nombres => self.ui_nombres(ui),
                Onglet::Fractions => self.ui_fractions(ui),
                Onglet::Triangle => self.ui_triangle(ui),
            });
    }

    /* ------------------------ Onglet Traceur ------------------------ */

    fn ui_traceur(&mut self, ui: &mut egui::Ui) {
        self.synchroniser_courbes();

        // lignes de courbes
        let mut a_supprimer: Option<u64> = None;
        for courbe in &mut self.courbes {
            ui.horizontal(|ui| {
                ui.checkbox(&mut courbe.visible, "");

                // pastille de couleur
                ui.colored_label(courbe.couleur, "●");

                ui.add(
                    egui::TextEdit::singleline(&mut courbe.texte)
                        .desired_width(260.0)
                        .hint_text("Ex: sin(x), x^2 - 1, 1/x")
                        .code_editor(),
                );

                if ui.button("✕").on_hover_text("Retirer la courbe").clicked() {
                    a_supprimer = Some(courbe.id);
                }

                // erreur EN LIGNE, à côté du champ — une par édition, pas par point
                if !courbe.erreur.is_empty() {
                    ui.colored_label(ui.visuals().error_fg_color, &courbe.erreur);
                }
            });
        }
        if let Some(id) = a_supprimer {
            self.supprimer_courbe(id);
        }

        if ui.button("+ Ajouter une courbe").clicked() {
            self.ajouter_courbe();
        }

        ui.add_space(6.0);
        self.ui_domaine(ui);

        ui.add_space(6.0);
        self.ui_trace(ui);

        ui.add_space(6.0);
        self.ui_detail(ui);
    }

    /// Recompile les courbes dont le texte a changé depuis la dernière frame.
    fn synchroniser_courbes(&mut self) {
        for courbe in &mut self.courbes {
            if courbe.texte == courbe.texte_compile {
                continue;
            }
            courbe.texte_compile = courbe.texte.clone();

            // champ vide : pas encore une expression, pas encore une erreur
            if courbe.texte.trim().is_empty() {
                courbe.fonction = None;
                courbe.erreur.clear();
                continue;
            }

            match compiler(&courbe.texte) {
                Ok(f) => {
                    courbe.fonction = Some(f);
                    courbe.erreur.clear();
                }
                Err(msg) => {
                    // erreur STRUCTURELLE : cette courbe ne trace plus,
                    // les voisines continuent
                    courbe.fonction = None;
                    courbe.erreur = msg;
                }
            }
        }
    }

    fn ui_domaine(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Domaine :");

            let mut x_min = self.x_min;
            let mut x_max = self.x_max;

            ui.label("x min");
            let r1 = ui.add(egui::DragValue::new(&mut x_min).speed(0.1));
            ui.label("x max");
            let r2 = ui.add(egui::DragValue::new(&mut x_max).speed(0.1));
            if r1.changed() || r2.changed() {
                self.fixer_domaine(x_min, x_max);
            }

            if ui.button("⟲").on_hover_text("Domaine par défaut").clicked() {
                self.reinitialiser_domaine();
            }

            if self.x_min >= self.x_max {
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    "domaine vide : x min doit être < x max",
                );
            }
        });
    }

    fn ui_trace(&mut self, ui: &mut egui::Ui) {
        let (x_min, x_max) = (self.x_min, self.x_max);
        let courbes = &self.courbes;

        Plot::new("trace_principal")
            .legend(Legend::default())
            .height(380.0)
            .x_axis_label("x")
            .y_axis_label("y")
            .show(ui, |plot_ui| {
                for courbe in courbes {
                    if !courbe.visible {
                        continue;
                    }
                    let Some(f) = &courbe.fonction else { continue };

                    // domaine invalide => suite vide => rien à tracer (contrat)
                    let points = echantillonner(f, x_min, x_max);

                    // un trou COUPE la courbe : un segment = une polyligne
                    for (i, seg) in segments(&points).into_iter().enumerate() {
                        let nom = if i == 0 { courbe.texte.as_str() } else { "" };
                        plot_ui.line(
                            Line::new(nom, PlotPoints::from(seg)).color(courbe.couleur),
                        );
                    }
                }
            });
    }

    fn ui_detail(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Détail (jetons / RPN)")
            .default_open(false)
            .show(ui, |ui| {
                for courbe in &self.courbes {
                    let Some(f) = &courbe.fonction else { continue };
                    ui.label(format!("{} :", courbe.texte));
                    ui.monospace(format!("  jetons : {}", f.jetons));
                    ui.monospace(format!("  rpn    : {}", f.rpn));
                    ui.add_space(4.0);
                }
            });
    }

    /* ------------------------ Onglet Nombres ------------------------ */

    fn ui_nombres(&mut self, ui: &mut egui::Ui) {
        ui.label("Entier à analyser (primalité, diviseurs, premiers suivants) :");
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.entree_entier)
                    .desired_width(160.0)
                    .hint_text("Ex: 173"),
            );
            if ui.button("Analyser").clicked() {
                self.analyser_entier();
            }
        });

        if !self.erreur_entier.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur_entier);
        }
        if !self.rapport_entier.is_empty() {
            Self::champ_monospace(ui, "rapport_entier", &self.rapport_entier, 5);
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label("Octet (0–255) : binaire, hexadécimal, quartets :");
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.entree_octet)
                    .desired_width(80.0)
                    .hint_text("0–255"),
            );
            if ui.button("Convertir").clicked() {
                self.convertir_octet();
            }
        });

        if !self.erreur_octet.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur_octet);
        }
        if !self.rapport_octet.is_empty() {
            Self::champ_monospace(ui, "rapport_octet", &self.rapport_octet, 4);
        }
    }

    /// Analyse l'entier saisi via le noyau, puis dépose le rapport dans l'état.
    /// Entrée invalide (vide, non entière, hors bornes) : erreur étiquetée,
    /// AUCUN calcul tenté.
    fn analyser_entier(&mut self) {
        let s = self.entree_entier.trim();
        if s.is_empty() {
            self.set_erreur_entier("Entrée vide");
            return;
        }
        let n: u64 = match s.parse() {
            Ok(n) => n,
            Err(_) => {
                self.set_erreur_entier(format!("entier invalide: '{s}'"));
                return;
            }
        };
        if n > ENTIER_MAX {
            self.set_erreur_entier(format!("trop grand (maximum {ENTIER_MAX})"));
            return;
        }

        let mut rapport = String::new();

        if nombres::est_premier(n) {
            rapport.push_str(&format!("{n} est premier\n"));
        } else {
            rapport.push_str(&format!("{n} n'est pas premier\n"));
            let paires = nombres::facteurs(n);
            if paires.is_empty() {
                rapport.push_str("aucune paire de diviseurs (hors 1 et n)\n");
            } else {
                let txt: Vec<String> =
                    paires.iter().map(|(a, b)| format!("{a}×{b}")).collect();
                rapport.push_str(&format!("paires : {}\n", txt.join(", ")));
            }
        }

        let suivants = nombres::premiers_suivants(n, 5);
        let txt: Vec<String> = suivants.iter().map(|p| p.to_string()).collect();
        rapport.push_str(&format!("5 premiers suivants : {}", txt.join(", ")));

        self.set_rapport_entier(rapport);
    }

    fn convertir_octet(&mut self) {
        let s = self.entree_octet.trim();
        if s.is_empty() {
            self.set_erreur_octet("Entrée vide");
            return;
        }
        let n: u64 = match s.parse() {
            Ok(n) => n,
            Err(_) => {
                self.set_erreur_octet(format!("entier invalide: '{s}'"));
                return;
            }
        };
        if n > 255 {
            self.set_erreur_octet("hors gamme : un octet va de 0 à 255");
            return;
        }

        let (haut, bas) = nombres::quartets(n as u8);
        let rapport = format!(
            "binaire : {}\nhexa    : {}\nquartet haut : {haut:04b} ({haut:X})\nquartet bas  : {bas:04b} ({bas:X})",
            nombres::decimal_vers_binaire(n, 8),
            nombres::decimal_vers_hexa(n, 8),
        );
        self.set_rapport_octet(rapport);
    }

    /* ------------------------ Onglet Fractions ------------------------ */

    fn ui_fractions(&mut self, ui: &mut egui::Ui) {
        ui.label("Deux fractions, une opération :");

        ui.horizontal(|ui| {
            Self::champ_entier(ui, &mut self.entrees_fraction[0]);
            ui.label("/");
            Self::champ_entier(ui, &mut self.entrees_fraction[1]);

            ui.add_space(8.0);
            for op in OpFraction::TOUTES {
                let actif = self.op_fraction == op;
                if ui.selectable_label(actif, op.symbole()).clicked() {
                    self.op_fraction = op;
                }
            }
            ui.add_space(8.0);

            Self::champ_entier(ui, &mut self.entrees_fraction[2]);
            ui.label("/");
            Self::champ_entier(ui, &mut self.entrees_fraction[3]);

            ui.add_space(8.0);
            if ui.button("=").clicked() {
                self.calculer_fraction();
            }
        });

        if !self.erreur_fraction.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur_fraction);
        }
        if !self.resultat_fraction.is_empty() {
            Self::champ_monospace(ui, "resultat_fraction", &self.resultat_fraction, 2);
        }
    }

    fn calculer_fraction(&mut self) {
        let mut valeurs = [0i64; 4];
        for (i, s) in self.entrees_fraction.iter().enumerate() {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(v) => valeurs[i] = v,
                Err(_) => {
                    self.set_erreur_fraction(format!("entier invalide: '{s}'"));
                    return;
                }
            }
        }

        let a = fractions::Fraction {
            num: valeurs[0],
            den: valeurs[1],
        };
        let b = fractions::Fraction {
            num: valeurs[2],
            den: valeurs[3],
        };

        let res = match self.op_fraction {
            OpFraction::Plus => a.ajouter(b),
            OpFraction::Moins => a.soustraire(b),
            OpFraction::Fois => a.multiplier(b),
            OpFraction::Division => a.diviser(b),
        };

        // erreur TYPÉE (pas de sentinelle 1/0) : impossible de l'ignorer
        match res {
            Ok(f) => {
                let sa = a.simplifier().map(|f| f.to_string()).unwrap_or_default();
                let sb = b.simplifier().map(|f| f.to_string()).unwrap_or_default();
                self.set_resultat_fraction(format!(
                    "{sa} {} {sb} = {f}",
                    self.op_fraction.symbole()
                ));
            }
            Err(e) => self.set_erreur_fraction(e.to_string()),
        }
    }

    /* ------------------------ Onglet Triangle ------------------------ */

    fn ui_triangle(&mut self, ui: &mut egui::Ui) {
        ui.label("Trois sommets — tout le reste est dérivé :");

        for (i, nom) in ["A", "B", "C"].iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(format!("{nom} :"));
                ui.label("x");
                ui.add(egui::DragValue::new(&mut self.sommets[i][0]).speed(0.1));
                ui.label("y");
                ui.add(egui::DragValue::new(&mut self.sommets[i][1]).speed(0.1));
            });
        }

        ui.add_space(6.0);

        let points = [
            triangle::Point2::nouveau(self.sommets[0][0], self.sommets[0][1]),
            triangle::Point2::nouveau(self.sommets[1][0], self.sommets[1][1]),
            triangle::Point2::nouveau(self.sommets[2][0], self.sommets[2][1]),
        ];
        let cotes = triangle::cotes(points);
        let angles = triangle::angles(cotes);
        let aire = triangle::aire(cotes);
        let classe = triangle::classifier(cotes);

        let mut rapport = String::new();
        rapport.push_str(&format!(
            "côtés  : a = {:.4}, b = {:.4}, c = {:.4}\n",
            cotes[0], cotes[1], cotes[2]
        ));
        rapport.push_str(&format!(
            "angles : α = {}, β = {}, γ = {}\n",
            triangle::format_angle_degres(angles[0]),
            triangle::format_angle_degres(angles[1]),
            triangle::format_angle_degres(angles[2]),
        ));
        rapport.push_str(&format!("aire   : {aire:.4}\n"));
        rapport.push_str(&format!("classe : {classe}"));

        Self::champ_monospace(ui, "rapport_triangle", &rapport, 4);
    }

    /* ------------------------ Petits composants partagés ------------------------ */

    fn champ_entier(ui: &mut egui::Ui, texte: &mut String) {
        ui.add(egui::TextEdit::singleline(texte).desired_width(48.0));
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }
}
