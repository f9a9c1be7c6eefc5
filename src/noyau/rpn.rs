// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(nom):
//    - si nom ∈ fonctions connues (sin/ln/sqrt/...) => fonction unaire (postfixée en RPN)
//    - si nom == "x" => variable du traceur
//    - sinon => erreur de parse "symbole inconnu" (contrat: une erreur
//      structurelle bloque toute l'expression AVANT tout échantillonnage)
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, on injecte 0 et on
//      empile le moins sans dépiler : "-x" => "0 x -", "3 - -2" => "3 0 2 - -"
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs “collés” à leur argument
//   et sont sorties après la parenthèse fermante.

use num_traits::Zero;

use num_rational::BigRational;

use super::expr::{Expr, Fonction};
use super::jetons::Jeton;

fn precedence(j: &Jeton) -> i32 {
    match j {
        Jeton::Plus | Jeton::Moins => 1,
        Jeton::Etoile | Jeton::Barre => 2,
        Jeton::Accent => 3,
        _ => 0,
    }
}

fn est_associatif_droite(j: &Jeton) -> bool {
    matches!(j, Jeton::Accent)
}

fn est_fonction_ident(nom: &str) -> bool {
    Fonction::depuis_nom(nom).is_some()
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Ident("sin"), ParG, Pi, Barre, Num(2), ParD]
///   rpn:    [Pi, Num(2), Barre, Ident("sin")]
pub fn vers_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, String> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prec_etait_valeur = false;

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Num(_) | Jeton::Pi | Jeton::E => {
                out.push(jeton);
                prec_etait_valeur = true;
            }

            Jeton::Ident(nom) => {
                if est_fonction_ident(&nom) {
                    // fonction : on la garde sur la pile (elle sortira après son argument)
                    ops.push(Jeton::Ident(nom));
                    prec_etait_valeur = false;
                } else if nom == "x" {
                    // variable : sortie directe
                    out.push(Jeton::Ident(nom));
                    prec_etait_valeur = true;
                } else {
                    // symbole inconnu => erreur STRUCTURELLE (pas un trou par point)
                    return Err(format!("symbole inconnu: '{nom}'"));
                }
            }

            Jeton::ParG => {
                ops.push(jeton);
                prec_etait_valeur = false;
            }

            Jeton::ParD => {
                // dépile jusqu’à '('
                let mut trouve = false;
                while let Some(haut) = ops.pop() {
                    if matches!(haut, Jeton::ParG) {
                        trouve = true;
                        break;
                    }
                    out.push(haut);
                }
                if !trouve {
                    return Err("parenthèse fermante sans ouvrante".into());
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Jeton::Ident(nom)) = ops.last() {
                    if est_fonction_ident(nom.as_str()) {
                        out.push(ops.pop().unwrap());
                    }
                }

                prec_etait_valeur = true;
            }

            Jeton::Plus | Jeton::Etoile | Jeton::Barre | Jeton::Accent => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(haut) = ops.last() {
                    if matches!(haut, Jeton::ParG) {
                        break;
                    }
                    if let Jeton::Ident(nom) = haut {
                        if est_fonction_ident(nom.as_str()) {
                            break;
                        }
                    }

                    let p_haut = precedence(haut);
                    let p_jeton = precedence(&jeton);

                    let doit_pop = if est_associatif_droite(&jeton) {
                        p_haut > p_jeton
                    } else {
                        p_haut >= p_jeton
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(jeton);
                prec_etait_valeur = false;
            }

            Jeton::Moins => {
                // moins unaire : injecte 0 et empile SANS rien dépiler.
                // Si on dépilait ici, un opérateur en attente sortirait
                // entre le 0 et l'opérande ("3 - -2" donnerait "3 0 - 2 -").
                // En restant sur la pile, le moins reste collé à son
                // opérande : "3 - -2" => "3 0 2 - -".
                if !prec_etait_valeur {
                    out.push(Jeton::Num(BigRational::zero()));
                    ops.push(Jeton::Moins);
                    continue;
                }

                while let Some(haut) = ops.last() {
                    if matches!(haut, Jeton::ParG) {
                        break;
                    }
                    if let Jeton::Ident(nom) = haut {
                        if est_fonction_ident(nom.as_str()) {
                            break;
                        }
                    }
                    if precedence(haut) >= precedence(&Jeton::Moins) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(Jeton::Moins);
                prec_etait_valeur = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::ParG) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
///
/// - Ident(nom):
///     - si nom ∈ fonctions connues => fonction unaire
///     - si nom == "x" => Expr::X
///     - sinon : vers_rpn() a déjà refusé, donc erreur interne
pub fn depuis_rpn(rpn: &[Jeton]) -> Result<Expr, String> {
    let mut pile: Vec<Expr> = Vec::new();

    for jeton in rpn.iter().cloned() {
        match jeton {
            Jeton::Num(r) => pile.push(Expr::Rat(r)),
            Jeton::Pi => pile.push(Expr::Pi),
            Jeton::E => pile.push(Expr::E),

            Jeton::Plus | Jeton::Moins | Jeton::Etoile | Jeton::Barre | Jeton::Accent => {
                let b = pile.pop().ok_or("expression invalide")?;
                let a = pile.pop().ok_or("expression invalide")?;

                let e = match jeton {
                    Jeton::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Jeton::Moins => Expr::Sub(Box::new(a), Box::new(b)),
                    Jeton::Etoile => Expr::Mul(Box::new(a), Box::new(b)),
                    Jeton::Barre => Expr::Div(Box::new(a), Box::new(b)),
                    Jeton::Accent => Expr::Pow(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                pile.push(e);
            }

            Jeton::Ident(nom) => {
                if let Some(f) = Fonction::depuis_nom(nom.as_str()) {
                    let x = pile.pop().ok_or("fonction sans argument")?;
                    pile.push(Expr::Fn(f, Box::new(x)));
                } else if nom == "x" {
                    pile.push(Expr::X);
                } else {
                    return Err(format!("symbole inconnu: '{nom}'"));
                }
            }

            Jeton::ParG | Jeton::ParD => return Err("parenthèse inattendue en RPN".into()),
        }
    }

    if pile.len() != 1 {
        return Err("expression invalide".into());
    }
    Ok(pile.pop().unwrap())
}

#[cfg(test)]
mod tests {
    use super::{depuis_rpn, vers_rpn};
    use crate::noyau::jetons::{format_jetons, tokenize};

    fn rpn_txt(s: &str) -> String {
        let jetons = tokenize(s).unwrap();
        let rpn = vers_rpn(&jetons).unwrap();
        format_jetons(&rpn)
    }

    fn parse(s: &str) -> Result<crate::noyau::expr::Expr, String> {
        let jetons = tokenize(s)?;
        let rpn = vers_rpn(&jetons)?;
        depuis_rpn(&rpn)
    }

    #[test]
    fn precedence_classique() {
        assert_eq!(rpn_txt("2 + 3*4"), "2 3 4 * +");
    }

    #[test]
    fn accent_associatif_droite() {
        // 2^3^2 = 2^(3^2)
        assert_eq!(rpn_txt("2^3^2"), "2 3 2 ^ ^");
    }

    #[test]
    fn fonction_collee_a_son_argument() {
        assert_eq!(rpn_txt("sin(pi/2)"), "π 2 / sin");
    }

    #[test]
    fn moins_unaire_injecte_zero() {
        assert_eq!(rpn_txt("-x"), "0 x -");
    }

    #[test]
    fn moins_unaire_apres_operateur() {
        // Le moins unaire reste collé à son opérande : l'opérateur en
        // attente ne doit pas s'intercaler entre le 0 et l'opérande.
        assert_eq!(rpn_txt("3 - -2"), "3 0 2 - -");
        assert_eq!(rpn_txt("2^-3"), "2 0 3 - ^");
        assert_eq!(rpn_txt("2*-x"), "2 0 x - *");
    }

    #[test]
    fn moins_unaire_double() {
        assert_eq!(rpn_txt("--x"), "0 0 x - -");
    }

    #[test]
    fn symbole_inconnu_refuse_au_parse() {
        // Contrat: "foo(x)" = erreur STRUCTURELLE, jamais un trou par échantillon.
        let err = parse("foo(x)").unwrap_err();
        assert!(err.contains("symbole inconnu"), "message: {err}");
    }

    #[test]
    fn parentheses_non_fermees() {
        let err = parse("(1 + 2").unwrap_err();
        assert!(err.contains("parenthèses non fermées"));
    }

    #[test]
    fn fermante_orpheline() {
        let err = parse("1 + 2)").unwrap_err();
        assert!(err.contains("fermante sans ouvrante"));
    }

    #[test]
    fn expression_tronquee() {
        assert!(parse("1 +").is_err());
        assert!(parse("sin()").is_err());
    }

    #[test]
    fn ast_affichage() {
        let e = parse("x^2 + 1").unwrap();
        assert_eq!(e.to_string(), "((x^2)+1)");
    }
}
