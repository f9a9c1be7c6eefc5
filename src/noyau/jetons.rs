// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

#[derive(Clone, Debug)]
pub enum Jeton {
    Num(BigRational),
    Pi,
    E,

    // Fonctions + variable (tout ce qui n’est pas pi / e / opérateur / nombre)
    // NOTE: le parse (RPN->Expr) décidera si c’est une fonction (sin/ln/...) ou la variable x.
    Ident(String),

    Plus,
    Moins,
    Etoile,
    Barre,
    Accent, // ^

    ParG,
    ParD,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12)
/// - décimaux (ex: 0.5, 3.25) -> Num exact sur une puissance de 10
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - π ou pi, e
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
/// - √ (équivaut à ident("sqrt"))
///
/// IMPORTANT: pas de fraction littérale "a/b" collée. Ici "1/0" doit rester
/// une division ordinaire pour devenir un trou de tracé à l’évaluation,
/// pas une erreur de tokenisation.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::ParD);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Moins);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Etoile);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Barre);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Jeton::Accent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // π : symbole unicode direct
        if c == 'π' {
            out.push(Jeton::Pi);
            i += 1;
            continue;
        }

        // Racine carrée unicode : √  => ident("sqrt")
        if c == '√' {
            out.push(Jeton::Ident("sqrt".to_string()));
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            // Normalisation : "pi" / "e" sont des constantes, pas des idents.
            match w.as_str() {
                "pi" => out.push(Jeton::Pi),
                "e" => out.push(Jeton::E),
                _ => out.push(Jeton::Ident(w)),
            }
            continue;
        }

        // Nombre : entier ou décimal "a.b" (exact : a.b = (a*10^k + b) / 10^k)
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let int_str: String = chars[start..i].iter().collect();
            let n = BigInt::parse_bytes(int_str.as_bytes(), 10).ok_or("nombre invalide")?;

            // par défaut: entier
            let mut rat = BigRational::from_integer(n.clone());

            // partie décimale: ".ddd" (le point doit être suivi d'un chiffre)
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                let start_d = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                let d_str: String = chars[start_d..i].iter().collect();
                let d =
                    BigInt::parse_bytes(d_str.as_bytes(), 10).ok_or("partie décimale invalide")?;

                let k = d_str.len() as u32;
                let dix_k = BigInt::from(10).pow(k);
                rat = BigRational::new(n * &dix_k + d, dix_k);
            }

            out.push(Jeton::Num(rat));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Format utilitaire (debug/“détail”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Num(r) => format_rat(r),
            Jeton::Pi => "π".to_string(),
            Jeton::E => "e".to_string(),
            Jeton::Ident(nom) => nom.clone(),

            Jeton::Plus => "+".to_string(),
            Jeton::Moins => "-".to_string(),
            Jeton::Etoile => "*".to_string(),
            Jeton::Barre => "/".to_string(),
            Jeton::Accent => "^".to_string(),

            Jeton::ParG => "(".to_string(),
            Jeton::ParD => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
