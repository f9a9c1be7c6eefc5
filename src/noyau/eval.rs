//! Noyau — compilation + évaluation gardée
//!
//! tokenize -> RPN -> Expr  (UNE fois par édition d'expression)
//! puis evaluer(x) -> Option<f64>  (par échantillon, sans jamais paniquer)
//!
//! Contrat (deux familles d'échecs bien séparées) :
//! - Erreur STRUCTURELLE (syntaxe, symbole inconnu) : remontée ici, en clair,
//!   AVANT tout échantillonnage. Elle bloque toute l'expression.
//! - Erreur de DOMAINE par échantillon (log d'un négatif, division par zéro,
//!   dépassement) : silencieuse, convertie en `None` = trou de tracé.
//!
//! Remarque : en f64 il n'y a pas de complexes — les opérations qui sortiraient
//! du réel (√ d'un négatif, etc.) donnent NaN, donc un trou. C'est le même
//! rendu final que “complexe => trou”.

use num_rational::BigRational;
use num_traits::ToPrimitive;

use super::expr::{Expr, Fonction};
use super::jetons::{format_jetons, tokenize};
use super::rpn::{depuis_rpn, vers_rpn};

/// Garde anti-absurde : au-delà, un y fini est traité comme un trou.
/// (Un 1/x échantillonné très près de 0 ne doit jamais produire un
/// “presque infini” fini qui écrase l'échelle du tracé.)
pub const BORNE_Y: f64 = 1e12;

/// Expression compilée : l'AST + les transcriptions jetons/RPN
/// (affichées dans le panneau “détail” du traceur, côté vue).
#[derive(Clone, Debug)]
pub struct FonctionCompilee {
    expr: Expr,
    pub jetons: String,
    pub rpn: String,
}

/// Compile une expression utilisateur.
///
/// Toute erreur retournée ici est une erreur de parse, à afficher en ligne
/// à côté du champ de saisie — une fois par édition, pas par échantillon.
pub fn compiler(texte: &str) -> Result<FonctionCompilee, String> {
    let s = texte.trim();
    if s.is_empty() {
        return Err("Entrée vide".into());
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_jetons(&jetons);

    // 2) RPN
    let rpn = vers_rpn(&jetons)?;
    let rpn_txt = format_jetons(&rpn);

    // 3) AST
    let expr = depuis_rpn(&rpn)?;

    Ok(FonctionCompilee {
        expr,
        jetons: jetons_txt,
        rpn: rpn_txt,
    })
}

impl FonctionCompilee {
    /// Évalue en un point. `None` = trou (pas de valeur à ce x).
    pub fn evaluer(&self, x: f64) -> Option<f64> {
        let y = eval_f64(&self.expr, x);
        if y.is_finite() && y.abs() <= BORNE_Y {
            Some(y)
        } else {
            None
        }
    }
}

/* ------------------------ Marche d'évaluation f64 ------------------------ */

// Les NaN/inf se propagent naturellement : on laisse faire, et le filtre
// final (evaluer) décide trou ou valeur. Pas de Result ici : un échec de
// domaine n'est PAS une erreur, c'est un point sans valeur.
fn eval_f64(e: &Expr, x: f64) -> f64 {
    use Expr::*;

    match e {
        Rat(r) => rat_vers_f64(r),
        Pi => std::f64::consts::PI,
        E => std::f64::consts::E,
        X => x,

        Fn(f, a) => {
            let v = eval_f64(a, x);
            match f {
                Fonction::Sin => v.sin(),
                Fonction::Cos => v.cos(),
                Fonction::Tan => v.tan(),
                Fonction::Asin => v.asin(),
                Fonction::Acos => v.acos(),
                Fonction::Atan => v.atan(),
                Fonction::Sqrt => v.sqrt(),
                Fonction::Abs => v.abs(),
                Fonction::Ln => v.ln(),
                Fonction::Log => v.log10(),
                Fonction::Exp => v.exp(),
                Fonction::Plancher => v.floor(),
                Fonction::Plafond => v.ceil(),
            }
        }

        Add(a, b) => eval_f64(a, x) + eval_f64(b, x),
        Sub(a, b) => eval_f64(a, x) - eval_f64(b, x),
        Mul(a, b) => eval_f64(a, x) * eval_f64(b, x),
        Div(a, b) => eval_f64(a, x) / eval_f64(b, x),
        Pow(a, b) => eval_f64(a, x).powf(eval_f64(b, x)),
    }
}

fn rat_vers_f64(r: &BigRational) -> f64 {
    // to_f64 échoue seulement sur des rationnels hors gamme => NaN => trou.
    r.to_f64().unwrap_or(f64::NAN)
}
