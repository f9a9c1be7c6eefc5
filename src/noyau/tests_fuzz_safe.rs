//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler compile + évalue sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte les erreurs de parse attendues (symbole inconnu, parenthèses…)
//! - invariant clé : evaluer() ne panique JAMAIS et ne rend jamais
//!   un y non fini ni au-delà de la garde BORNE_Y

use std::time::{Duration, Instant};

use super::echantillon::{echantillonner, NB_PAS};
use super::eval::{compiler, BORNE_Y};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Générateur d'expressions ------------------------ */

const FONCTIONS: [&str; 13] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "abs", "ln", "log", "exp", "floor",
    "ceil",
];

fn expr_aleatoire(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 {
        // feuille
        return match rng.pick(5) {
            0 => "x".to_string(),
            1 => "pi".to_string(),
            2 => "e".to_string(),
            3 => format!("{}", rng.pick(100)),
            _ => format!("{}.{}", rng.pick(10), rng.pick(100)),
        };
    }

    match rng.pick(4) {
        // binaire
        0 => {
            let op = ["+", "-", "*", "/", "^"][rng.pick(5) as usize];
            format!(
                "({} {} {})",
                expr_aleatoire(rng, profondeur - 1),
                op,
                expr_aleatoire(rng, profondeur - 1)
            )
        }
        // fonction
        1 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{}({})", f, expr_aleatoire(rng, profondeur - 1))
        }
        // moins unaire
        2 => format!("-{}", expr_aleatoire(rng, profondeur - 1)),
        // descente simple
        _ => expr_aleatoire(rng, profondeur - 1),
    }
}

fn soupe_aleatoire(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789+-*/^()xpie. abcs#@";
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

fn est_erreur_attendue(msg: &str) -> bool {
    // Liste blanche : erreurs de parse *normales* pour un fuzz.
    msg.contains("symbole inconnu")
        || msg.contains("parenthèse")
        || msg.contains("parenthèses")
        || msg.contains("expression invalide")
        || msg.contains("fonction sans argument")
        || msg.contains("caractère inattendu")
        || msg.contains("Entrée vide")
}

/* ------------------------ Les marteaux ------------------------ */

#[test]
fn fuzz_expressions_bien_formees() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0xB1E4_F0DA);

    for _ in 0..300 {
        budget(start, max);

        let profondeur = 1 + rng.pick(4);
        let texte = expr_aleatoire(&mut rng, profondeur);

        // une expression générée par la grammaire DOIT compiler
        let f = compiler(&texte)
            .unwrap_or_else(|e| panic!("refus inattendu de {texte:?}: {e}"));

        // et s'évaluer sans paniquer, en respectant la garde
        for i in 0..20 {
            let x = -10.0 + i as f64;
            if let Some(y) = f.evaluer(x) {
                assert!(y.is_finite() && y.abs() <= BORNE_Y, "y hors garde pour {texte:?}");
            }
        }
    }
}

#[test]
fn fuzz_soupe_de_caracteres() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0x50_0BE5);

    for _ in 0..500 {
        budget(start, max);

        let longueur = 1 + rng.pick(40) as usize;
        let texte = soupe_aleatoire(&mut rng, longueur);

        // compiler ne panique jamais ; s'il refuse, le message est connu
        match compiler(&texte) {
            Ok(f) => {
                // compilable par hasard : l'échantillonnage reste sain
                let pts = echantillonner(&f, -5.0, 5.0);
                assert_eq!(pts.len(), NB_PAS + 1);
            }
            Err(msg) => {
                assert!(
                    est_erreur_attendue(&msg),
                    "erreur inattendue {msg:?} pour {texte:?}"
                );
            }
        }
    }
}

#[test]
fn fuzz_determinisme() {
    // même graine => mêmes textes => mêmes résultats
    let mut r1 = Rng::new(42);
    let mut r2 = Rng::new(42);
    for _ in 0..50 {
        let a = expr_aleatoire(&mut r1, 3);
        let b = expr_aleatoire(&mut r2, 3);
        assert_eq!(a, b);

        let fa = compiler(&a);
        let fb = compiler(&b);
        match (fa, fb) {
            (Ok(fa), Ok(fb)) => {
                for i in 0..10 {
                    let x = i as f64 * 0.7 - 3.0;
                    assert_eq!(fa.evaluer(x), fb.evaluer(x));
                }
            }
            (Err(ea), Err(eb)) => assert_eq!(ea, eb),
            _ => panic!("divergence compile pour {a:?}"),
        }
    }
}
