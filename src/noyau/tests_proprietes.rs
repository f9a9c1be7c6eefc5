//! Tests de propriétés trans-modules : les contrats de l'atelier,
//! vérifiés bout à bout (compilation -> évaluation -> échantillonnage,
//! fractions, nombres, triangle).

use super::echantillon::{echantillonner, segments, NB_PAS};
use super::eval::{compiler, BORNE_Y};
use super::fractions::Fraction;
use super::nombres::{
    binaire_vers_decimal, decimal_vers_binaire, decimal_vers_hexa, est_premier, facteurs, ppcm,
};
use super::triangle::{aire, angles, classifier, cotes, ClasseTriangle, Point2};

fn approche(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "attendu {b}, obtenu {a}");
}

/* ------------------------ Traceur bout à bout ------------------------ */

#[test]
fn parabole_tracee_sans_trou() {
    let f = compiler("x^2").unwrap();
    let pts = echantillonner(&f, -10.0, 10.0);
    assert_eq!(pts.len(), NB_PAS + 1);
    assert!(pts.iter().all(|p| p.y.is_some()));

    // y(3) = 9 via la grille : x=3 est touché (pas = 0.1)
    let p = pts.iter().find(|p| (p.x - 3.0).abs() < 1e-9).unwrap();
    approche(p.y.unwrap(), 9.0, 1e-9);
}

#[test]
fn hyperbole_coupee_en_deux_branches() {
    // 1/x sur [-10, 10] : un trou en 0, donc exactement deux segments,
    // et aucune valeur finie au-delà de la garde du noyau.
    let f = compiler("1/x").unwrap();
    let pts = echantillonner(&f, -10.0, 10.0);

    let segs = segments(&pts);
    assert_eq!(segs.len(), 2, "attendu deux branches");

    for p in &pts {
        if let Some(y) = p.y {
            assert!(y.abs() <= BORNE_Y);
        }
    }
}

#[test]
fn erreur_de_parse_ne_contamine_pas_les_autres() {
    // Une expression fausse bloque SA courbe ; une voisine valide trace.
    assert!(compiler("foo(x)").is_err());
    let ok = compiler("sin(x)").unwrap();
    assert_eq!(echantillonner(&ok, 0.0, 6.28).len(), NB_PAS + 1);
}

#[test]
fn racine_domaine_partiel() {
    // sqrt(x) sur [-4, 4] : trous pour x < 0, valeurs pour x >= 0,
    // en un seul segment continu à droite.
    let f = compiler("sqrt(x)").unwrap();
    let pts = echantillonner(&f, -4.0, 4.0);
    let segs = segments(&pts);
    assert_eq!(segs.len(), 1);
    for p in &pts {
        assert_eq!(p.y.is_some(), p.x >= 0.0, "x = {}", p.x);
    }
}

/* ------------------------ Fractions ------------------------ */

#[test]
fn fraction_simplifiee_toujours_positive_au_denominateur() {
    for n in -20i64..=20 {
        for d in -20i64..=20 {
            match (Fraction { num: n, den: d }).simplifier() {
                Ok(f) => {
                    assert!(f.den > 0);
                    // idempotence
                    assert_eq!(f.simplifier().unwrap(), f);
                }
                Err(_) => assert_eq!(d, 0),
            }
        }
    }
}

#[test]
fn fraction_tour_de_jeu() {
    // un tour typique du jeu : (1/2 + 1/3) ÷ (5/6) = 1
    let somme = Fraction { num: 1, den: 2 }
        .ajouter(Fraction { num: 1, den: 3 })
        .unwrap();
    let quotient = somme.diviser(Fraction { num: 5, den: 6 }).unwrap();
    assert_eq!(quotient, Fraction { num: 1, den: 1 });
}

/* ------------------------ Nombres ------------------------ */

#[test]
fn premiers_et_facteurs_coherents() {
    for n in 2..300u64 {
        let paires = facteurs(n);
        assert_eq!(est_premier(n), paires.is_empty(), "désaccord sur {n}");
        for (a, b) in paires {
            assert_eq!(a * b, n);
        }
    }
}

#[test]
fn ppcm_multiple_commun_minimal() {
    for a in 1..40u64 {
        for b in 1..40u64 {
            let m = ppcm(a, b).unwrap();
            assert_eq!(m % a, 0);
            assert_eq!(m % b, 0);
            // minimalité : aucun multiple commun strictement plus petit
            for k in (a.max(b)..m).step_by(a as usize) {
                assert!(k % b != 0 || k % a != 0 || k == m);
            }
        }
    }
}

#[test]
fn octet_vers_bases_et_retour() {
    for n in 0..=255u64 {
        let bin = decimal_vers_binaire(n, 8);
        assert_eq!(binaire_vers_decimal(&bin).unwrap(), n);
    }
    assert_eq!(decimal_vers_hexa(173, 8), "0xAD");
    assert_eq!(decimal_vers_binaire(173, 8), "10101101");
}

/* ------------------------ Triangle ------------------------ */

#[test]
fn triangle_3_4_5_complet() {
    let c = cotes([
        Point2::nouveau(0.0, 0.0),
        Point2::nouveau(3.0, 0.0),
        Point2::nouveau(3.0, 4.0),
    ]);
    assert_eq!(classifier(c), ClasseTriangle::Rectangle);
    approche(aire(c), 6.0, 1e-9);

    let mut degres: Vec<f64> = angles(c).iter().map(|a| a.to_degrees()).collect();
    degres.sort_by(|u, v| u.partial_cmp(v).unwrap());
    approche(degres[0], 36.87, 0.01);
    approche(degres[1], 53.13, 0.01);
    approche(degres[2], 90.0, 0.01);
}
