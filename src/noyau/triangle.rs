// src/noyau/triangle.rs
//
// Géométrie du triangle : tout est DÉRIVÉ des trois sommets,
// rien n'est stocké (sommets -> côtés -> angles -> classe).
//
// Conventions :
// - côtés [a, b, c] : a = BC (opposé à A), b = CA (opposé à B), c = AB.
// - angles [α, β, γ] en radians, au sommet A, B, C respectivement.
// - triangle dégénéré (inégalité triangulaire violée ou côté nul) :
//   angles NaN, aire 0.

use std::f64::consts::PI;
use std::fmt;

/// Tolérance relative pour les comparaisons de côtés / angle droit.
const EPS: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn nouveau(x: f64, y: f64) -> Point2 {
        Point2 { x, y }
    }

    fn distance(self, autre: Point2) -> f64 {
        ((self.x - autre.x).powi(2) + (self.y - autre.y).powi(2)).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClasseTriangle {
    Degenere,
    Equilateral,
    Rectangle,
    Isocele,
    Scalene,
}

impl fmt::Display for ClasseTriangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nom = match self {
            ClasseTriangle::Degenere => "dégénéré",
            ClasseTriangle::Equilateral => "équilatéral",
            ClasseTriangle::Rectangle => "rectangle",
            ClasseTriangle::Isocele => "isocèle",
            ClasseTriangle::Scalene => "scalène",
        };
        write!(f, "{nom}")
    }
}

/// Longueurs des côtés [a, b, c] à partir des sommets [A, B, C].
pub fn cotes(sommets: [Point2; 3]) -> [f64; 3] {
    let [a, b, c] = sommets;
    [b.distance(c), c.distance(a), a.distance(b)]
}

fn est_degenere(c: [f64; 3]) -> bool {
    let [a, b, cc] = c;
    if a <= EPS || b <= EPS || cc <= EPS {
        return true;
    }
    let perim = a + b + cc;
    // inégalité triangulaire, en relatif au périmètre
    a + b <= cc + EPS * perim || b + cc <= a + EPS * perim || cc + a <= b + EPS * perim
}

/// Angles [α, β, γ] en radians par la loi des cosinus.
///
/// Le TROISIÈME angle est calculé comme π - α - β (stabilité numérique :
/// la somme vaut exactement π au lieu d'accumuler trois arccos).
/// Triangle dégénéré : [NaN, NaN, NaN].
pub fn angles(c: [f64; 3]) -> [f64; 3] {
    if est_degenere(c) {
        return [f64::NAN; 3];
    }
    let [a, b, cc] = c;

    let alpha = ((b * b + cc * cc - a * a) / (2.0 * b * cc)).clamp(-1.0, 1.0).acos();
    let beta = ((a * a + cc * cc - b * b) / (2.0 * a * cc)).clamp(-1.0, 1.0).acos();
    let gamma = PI - alpha - beta;

    [alpha, beta, gamma]
}

/// Aire par la formule de Héron. Dégénéré => 0.
pub fn aire(c: [f64; 3]) -> f64 {
    if est_degenere(c) {
        return 0.0;
    }
    let [a, b, cc] = c;
    let s = (a + b + cc) / 2.0;
    // max(0) : le produit peut devenir légèrement négatif en flottant
    (s * (s - a) * (s - b) * (s - cc)).max(0.0).sqrt()
}

/// Classification par les côtés, en priorité :
/// dégénéré > équilatéral > rectangle > isocèle > scalène.
/// (Un 3-4-5 isocèle n'existe pas, mais un rectangle isocèle si :
/// la classe “rectangle” l'emporte.)
pub fn classifier(c: [f64; 3]) -> ClasseTriangle {
    if est_degenere(c) {
        return ClasseTriangle::Degenere;
    }
    let [a, b, cc] = c;
    let perim = a + b + cc;
    let egaux = |u: f64, v: f64| (u - v).abs() <= EPS * perim;

    if egaux(a, b) && egaux(b, cc) {
        return ClasseTriangle::Equilateral;
    }

    // angle droit : Pythagore sur le plus grand côté
    let mut tri = [a, b, cc];
    tri.sort_by(|u, v| u.partial_cmp(v).expect("côtés finis"));
    let [p, q, h] = tri;
    if (p * p + q * q - h * h).abs() <= EPS * perim * perim {
        return ClasseTriangle::Rectangle;
    }

    if egaux(a, b) || egaux(b, cc) || egaux(cc, a) {
        return ClasseTriangle::Isocele;
    }
    ClasseTriangle::Scalene
}

/// Angle en degrés, arrondi au centième : "90°", "53.13°".
/// NaN (triangle dégénéré) => "indéfini".
pub fn format_angle_degres(rad: f64) -> String {
    if rad.is_nan() {
        return "indéfini".to_string();
    }
    let deg = rad.to_degrees();
    let arrondi = (deg * 100.0).round() / 100.0;
    if (arrondi - arrondi.round()).abs() < 1e-9 {
        format!("{}°", arrondi.round() as i64)
    } else {
        format!("{arrondi}°")
    }
}
