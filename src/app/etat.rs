//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de l’atelier (onglet courant, courbes du traceur,
//! saisies et rapports des outils) et offrir des opérations simples
//! (ajout/retrait de courbe, remise à zéro) sans logique d’affichage.
//!
//! Contrats (version UI) :
//! - Aucune évaluation ici (pas de noyau, pas de parsing) : la vue compile
//!   et DÉPOSE le résultat (`fonction`, `erreur`, rapports) dans l’état.
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur le domaine du traceur.

use eframe::egui::Color32;

use crate::noyau::FonctionCompilee;

/// Domaine de tracé par défaut.
pub const X_MIN_DEFAUT: f64 = -10.0;
pub const X_MAX_DEFAUT: f64 = 10.0;

/// Garde-fou : amplitude maximale du domaine saisi (anti-abus / anti-gel).
pub const X_BORNE: f64 = 1e6;

/// Garde-fou : plafond de l'outil "Nombres" (division d'essai en √n).
pub const ENTIER_MAX: u64 = 1_000_000_000_000;

/// Couleurs attribuées aux courbes, en cycle.
const PALETTE: [Color32; 6] = [
    Color32::from_rgb(0x4f, 0x9d, 0xde), // bleu
    Color32::from_rgb(0xe8, 0x6a, 0x5c), // corail
    Color32::from_rgb(0x6f, 0xc2, 0x76), // vert
    Color32::from_rgb(0xd9, 0xa5, 0x3b), // ambre
    Color32::from_rgb(0xb1, 0x7f, 0xd9), // violet
    Color32::from_rgb(0x5c, 0xc8, 0xc2), // turquoise
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Onglet {
    Traceur,
    Nombres,
    Fractions,
    Triangle,
}

impl Onglet {
    pub fn titre(&self) -> &'static str {
        match self {
            Onglet::Traceur => "Traceur",
            Onglet::Nombres => "Nombres",
            Onglet::Fractions => "Fractions",
            Onglet::Triangle => "Triangle",
        }
    }

    pub const TOUS: [Onglet; 4] = [
        Onglet::Traceur,
        Onglet::Nombres,
        Onglet::Fractions,
        Onglet::Triangle,
    ];
}

/// Une courbe du traceur.
///
/// Cycle de vie : créée à l’ajout, re-validée à CHAQUE frappe
/// (la vue recompile quand `texte` diverge de `texte_compile`),
/// supprimée au retrait. Jamais persistée.
#[derive(Clone, Debug)]
pub struct CourbeEtat {
    pub id: u64,
    pub texte: String,
    /// Dernier texte effectivement passé au noyau (détection d’édition).
    pub texte_compile: String,
    pub couleur: Color32,
    pub visible: bool,
    /// Erreur de parse à afficher en ligne ; vide si la courbe trace.
    pub erreur: String,
    pub fonction: Option<FonctionCompilee>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpFraction {
    Plus,
    Moins,
    Fois,
    Division,
}

impl OpFraction {
    pub fn symbole(&self) -> &'static str {
        match self {
            OpFraction::Plus => "+",
            OpFraction::Moins => "−",
            OpFraction::Fois => "×",
            OpFraction::Division => "÷",
        }
    }

    pub const TOUTES: [OpFraction; 4] = [
        OpFraction::Plus,
        OpFraction::Moins,
        OpFraction::Fois,
        OpFraction::Division,
    ];
}

#[derive(Clone, Debug)]
pub struct AppPi {
    pub onglet: Onglet,

    // --- traceur ---
    pub courbes: Vec<CourbeEtat>,
    prochain_id: u64,
    pub x_min: f64,
    pub x_max: f64,

    // --- nombres ---
    pub entree_entier: String,
    pub rapport_entier: String,
    pub erreur_entier: String,
    pub entree_octet: String,
    pub rapport_octet: String,
    pub erreur_octet: String,

    // --- fractions : [a_num, a_den, b_num, b_den] ---
    pub entrees_fraction: [String; 4],
    pub op_fraction: OpFraction,
    pub resultat_fraction: String,
    pub erreur_fraction: String,

    // --- triangle : trois sommets (x, y) ---
    pub sommets: [[f64; 2]; 3],
}

impl Default for AppPi {
    fn default() -> Self {
        let mut app = Self {
            onglet: Onglet::Traceur,

            courbes: Vec::new(),
            prochain_id: 0,
            x_min: X_MIN_DEFAUT,
            x_max: X_MAX_DEFAUT,

            entree_entier: String::new(),
            rapport_entier: String::new(),
            erreur_entier: String::new(),
            entree_octet: String::new(),
            rapport_octet: String::new(),
            erreur_octet: String::new(),

            entrees_fraction: [
                "1".to_string(),
                "2".to_string(),
                "1".to_string(),
                "3".to_string(),
            ],
            op_fraction: OpFraction::Plus,
            resultat_fraction: String::new(),
            erreur_fraction: String::new(),

            sommets: [[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]],
        };

        // une première courbe pour ne pas démarrer sur un tracé vide
        app.ajouter_courbe_avec("x^2");
        app
    }
}

impl AppPi {
    /* ------------------------ Actions traceur (état seulement) ------------------------ */

    pub fn ajouter_courbe(&mut self) {
        self.ajouter_courbe_avec("");
    }

    pub fn ajouter_courbe_avec(&mut self, texte: &str) {
        let couleur = PALETTE[(self.prochain_id as usize) % PALETTE.len()];
        self.courbes.push(CourbeEtat {
            id: self.prochain_id,
            texte: texte.to_string(),
            texte_compile: String::from("\u{0}jamais-compilé"), // force la 1re compile
            couleur,
            visible: true,
            erreur: String::new(),
            fonction: None,
        });
        self.prochain_id += 1;
    }

    pub fn supprimer_courbe(&mut self, id: u64) {
        self.courbes.retain(|c| c.id != id);
    }

    /// Garde-fou : borne le domaine et garantit x_min/x_max finis.
    pub fn fixer_domaine(&mut self, x_min: f64, x_max: f64) {
        self.x_min = if x_min.is_finite() {
            x_min.clamp(-X_BORNE, X_BORNE)
        } else {
            X_MIN_DEFAUT
        };
        self.x_max = if x_max.is_finite() {
            x_max.clamp(-X_BORNE, X_BORNE)
        } else {
            X_MAX_DEFAUT
        };
    }

    pub fn reinitialiser_domaine(&mut self) {
        self.x_min = X_MIN_DEFAUT;
        self.x_max = X_MAX_DEFAUT;
    }

    /* ------------------------ Dépôts d'outils (la vue calcule) ------------------------ */

    /// Dépose une erreur d'outil "Nombres" (aucun calcul tenté, rapport coupé).
    pub fn set_erreur_entier(&mut self, msg: impl Into<String>) {
        self.erreur_entier = msg.into();
        self.rapport_entier.clear();
    }

    pub fn set_rapport_entier(&mut self, rapport: impl Into<String>) {
        self.erreur_entier.clear();
        self.rapport_entier = rapport.into();
    }

    pub fn set_erreur_octet(&mut self, msg: impl Into<String>) {
        self.erreur_octet = msg.into();
        self.rapport_octet.clear();
    }

    pub fn set_rapport_octet(&mut self, rapport: impl Into<String>) {
        self.erreur_octet.clear();
        self.rapport_octet = rapport.into();
    }

    pub fn set_erreur_fraction(&mut self, msg: impl Into<String>) {
        self.erreur_fraction = msg.into();
        self.resultat_fraction.clear();
    }

    pub fn set_resultat_fraction(&mut self, resultat: impl Into<String>) {
        self.erreur_fraction.clear();
        self.resultat_fraction = resultat.into();
    }
}
