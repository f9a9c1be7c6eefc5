// src/noyau/expr.rs
//
// AST d'une expression tracée.
// - Rat : littéral rationnel exact (issu du tokenizer)
// - Pi / E : constantes
// - X : LA variable du traceur (une seule, par contrat)
// - Fn : application d'une fonction unaire connue (sin, ln, sqrt, ...)
//
// IMPORTANT:
// - L'AST ne porte aucun flottant : les littéraux restent exacts jusqu'à
//   l'évaluation (eval.rs convertit en f64 au dernier moment).
// - Aucune simplification symbolique ici : le traceur évalue, il ne prouve pas.

use num_rational::BigRational;
use num_traits::One;

use std::fmt;

/// Fonctions unaires reconnues par le parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Abs,
    Ln,
    Log, // base 10
    Exp,
    Plancher,
    Plafond,
}

impl Fonction {
    /// Nom accepté dans l'entrée utilisateur (déjà minusculisé par le tokenizer).
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        Some(match nom {
            "sin" => Fonction::Sin,
            "cos" => Fonction::Cos,
            "tan" => Fonction::Tan,
            "asin" => Fonction::Asin,
            "acos" => Fonction::Acos,
            "atan" => Fonction::Atan,
            "sqrt" => Fonction::Sqrt,
            "abs" => Fonction::Abs,
            "ln" => Fonction::Ln,
            "log" => Fonction::Log,
            "exp" => Fonction::Exp,
            "floor" => Fonction::Plancher,
            "ceil" => Fonction::Plafond,
            _ => return None,
        })
    }

    pub fn nom(&self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Sqrt => "sqrt",
            Fonction::Abs => "abs",
            Fonction::Ln => "ln",
            Fonction::Log => "log",
            Fonction::Exp => "exp",
            Fonction::Plancher => "floor",
            Fonction::Plafond => "ceil",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Rat(BigRational),
    Pi,
    E,
    X,

    Fn(Fonction, Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

/* ------------------------ Affichage debug (panneau “détail”) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Rat(r) => {
                let n = r.numer();
                let d = r.denom();
                if d.is_one() {
                    write!(f, "{n}")
                } else {
                    write!(f, "{n}/{d}")
                }
            }
            Pi => write!(f, "π"),
            E => write!(f, "e"),
            X => write!(f, "x"),
            Fn(fonc, x) => write!(f, "{}({x})", fonc.nom()),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
            Pow(a, b) => write!(f, "({a}^{b})"),
        }
    }
}
