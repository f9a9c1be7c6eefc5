// src/noyau/echantillon.rs
//
// Échantillonnage à pas fixe (PAS adaptatif, par contrat) :
// - NB_PAS intervalles uniformes sur [x_min, x_max], bornes incluses
//   => NB_PAS + 1 points, toujours ordonnés par x croissant.
// - y = None : trou (pas de valeur en ce x). Le rendu doit COUPER la courbe
//   à un trou, jamais interpoler par-dessus.
// - Domaine invalide (x_min >= x_max, borne non finie) : suite vide.
//   C'est à l'appelant de valider avant d'échantillonner.

use super::eval::FonctionCompilee;

/// Nombre d'intervalles d'échantillonnage (constant sur toute l'application).
pub const NB_PAS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointTrace {
    pub x: f64,
    pub y: Option<f64>,
}

/// Échantillonne `f` sur [x_min, x_max] à pas uniforme.
pub fn echantillonner(f: &FonctionCompilee, x_min: f64, x_max: f64) -> Vec<PointTrace> {
    if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
        return Vec::new();
    }

    let pas = (x_max - x_min) / NB_PAS as f64;

    let mut out = Vec::with_capacity(NB_PAS + 1);
    for i in 0..=NB_PAS {
        // x recalculé depuis l'origine (pas d'accumulation d'erreur)
        let x = x_min + pas * i as f64;
        out.push(PointTrace {
            x,
            y: f.evaluer(x),
        });
    }
    out
}

/// Découpe une suite de points en segments continus, coupés aux trous.
/// Chaque segment est prêt pour un tracé en polyligne ([x, y]).
pub fn segments(points: &[PointTrace]) -> Vec<Vec<[f64; 2]>> {
    let mut out: Vec<Vec<[f64; 2]>> = Vec::new();
    let mut courant: Vec<[f64; 2]> = Vec::new();

    for p in points {
        match p.y {
            Some(y) => courant.push([p.x, y]),
            None => {
                if !courant.is_empty() {
                    out.push(std::mem::take(&mut courant));
                }
            }
        }
    }
    if !courant.is_empty() {
        out.push(courant);
    }
    out
}
