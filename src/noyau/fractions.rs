// src/noyau/fractions.rs
//
// Arithmétique de fractions exactes sur i64.
//
// Invariant après simplification :
// - den > 0
// - pgcd(|num|, |den|) == 1
// - zéro s'écrit 0/1
//
// IMPORTANT : pas de valeur-sentinelle {1, 0} pour signaler une faute —
// toutes les opérations retournent Result<Fraction, ErreurFraction>,
// l'appelant ne PEUT PAS oublier de vérifier.

use std::fmt;

use super::nombres::pgcd;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    pub num: i64,
    pub den: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurFraction {
    DenominateurNul,
    DivisionParZero,
    Debordement,
}

impl fmt::Display for ErreurFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurFraction::DenominateurNul => write!(f, "dénominateur nul"),
            ErreurFraction::DivisionParZero => write!(f, "division par zéro"),
            ErreurFraction::Debordement => write!(f, "dépassement de capacité"),
        }
    }
}

impl Fraction {
    /// Construit et simplifie d'un coup.
    pub fn nouvelle(num: i64, den: i64) -> Result<Fraction, ErreurFraction> {
        Fraction { num, den }.simplifier()
    }

    /// Forme canonique : den > 0, pgcd(|num|, |den|) = 1, zéro = 0/1.
    /// Idempotente : simplifier(simplifier(f)) == simplifier(f).
    pub fn simplifier(self) -> Result<Fraction, ErreurFraction> {
        if self.den == 0 {
            return Err(ErreurFraction::DenominateurNul);
        }
        if self.num == 0 {
            return Ok(Fraction { num: 0, den: 1 });
        }

        let g = pgcd(self.num.unsigned_abs(), self.den.unsigned_abs()) as i64;
        let mut num = self.num / g;
        let mut den = self.den / g;

        // signe porté par le numérateur
        if den < 0 {
            num = num.checked_neg().ok_or(ErreurFraction::Debordement)?;
            den = den.checked_neg().ok_or(ErreurFraction::Debordement)?;
        }

        Ok(Fraction { num, den })
    }

    pub fn ajouter(self, autre: Fraction) -> Result<Fraction, ErreurFraction> {
        self.verifier()?;
        autre.verifier()?;
        // élargi en i128 : pas de débordement intermédiaire
        let num = self.num as i128 * autre.den as i128 + autre.num as i128 * self.den as i128;
        let den = self.den as i128 * autre.den as i128;
        depuis_i128(num, den)
    }

    pub fn soustraire(self, autre: Fraction) -> Result<Fraction, ErreurFraction> {
        self.verifier()?;
        autre.verifier()?;
        let num = self.num as i128 * autre.den as i128 - autre.num as i128 * self.den as i128;
        let den = self.den as i128 * autre.den as i128;
        depuis_i128(num, den)
    }

    pub fn multiplier(self, autre: Fraction) -> Result<Fraction, ErreurFraction> {
        self.verifier()?;
        autre.verifier()?;
        depuis_i128(
            self.num as i128 * autre.num as i128,
            self.den as i128 * autre.den as i128,
        )
    }

    pub fn diviser(self, autre: Fraction) -> Result<Fraction, ErreurFraction> {
        self.verifier()?;
        autre.verifier()?;
        if autre.num == 0 {
            return Err(ErreurFraction::DivisionParZero);
        }
        depuis_i128(
            self.num as i128 * autre.den as i128,
            self.den as i128 * autre.num as i128,
        )
    }

    fn verifier(self) -> Result<(), ErreurFraction> {
        if self.den == 0 {
            Err(ErreurFraction::DenominateurNul)
        } else {
            Ok(())
        }
    }
}

/// Simplifie en i128 puis vérifie que le résultat tient dans i64.
fn depuis_i128(num: i128, den: i128) -> Result<Fraction, ErreurFraction> {
    if den == 0 {
        return Err(ErreurFraction::DenominateurNul);
    }
    if num == 0 {
        return Ok(Fraction { num: 0, den: 1 });
    }

    let g = pgcd_i128(num.unsigned_abs(), den.unsigned_abs()) as i128;
    let mut num = num / g;
    let mut den = den / g;
    if den < 0 {
        num = -num;
        den = -den;
    }

    let num = i64::try_from(num).map_err(|_| ErreurFraction::Debordement)?;
    let den = i64::try_from(den).map_err(|_| ErreurFraction::Debordement)?;
    Ok(Fraction { num, den })
}

fn pgcd_i128(a: u128, b: u128) -> u128 {
    if b == 0 {
        a
    } else {
        pgcd_i128(b, a % b)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
