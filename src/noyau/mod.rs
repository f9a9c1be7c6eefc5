//! Noyau "Plein de π"
//!
//! Organisation interne :
//! - jetons.rs      : tokenisation (littéraux exacts via BigRational)
//! - rpn.rs         : shunting-yard + construction Expr
//! - expr.rs        : AST d'expression + fonctions unaires connues
//! - eval.rs        : compilation + évaluation f64 gardée (trous)
//! - echantillon.rs : échantillonnage à pas fixe + découpe en segments
//! - nombres.rs     : premiers, diviseurs, pgcd/ppcm, bases, quartets
//! - fractions.rs   : fractions i64 à erreurs typées
//! - triangle.rs    : côtés / angles / aire / classe d'un triangle

pub mod echantillon;
pub mod eval;
pub mod expr;
pub mod fractions;
pub mod jetons;
pub mod nombres;
pub mod rpn;
pub mod triangle;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{compiler, FonctionCompilee};
