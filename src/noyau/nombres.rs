// src/noyau/nombres.rs
//
// Utilitaires entiers de l'atelier "Nombres" :
// - primalité / paires de diviseurs / premiers suivants
// - pgcd / ppcm
// - conversions de bases (binaire, hexadécimal) + quartets
//
// Tout est pur et sans état. Les entrées passent par u64 : la vue borne
// déjà la saisie, et les gardes ici refusent le reste proprement.

/// Test de primalité par division d'essai jusqu'à √n,
/// en sautant les multiples de 2 et 3 (pas 6k±1).
/// Faux pour tout n ≤ 1.
pub fn est_premier(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true; // 2 et 3
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // i <= n / i plutôt que i*i <= n : pas de débordement près de u64::MAX
    let mut i: u64 = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Paires de diviseurs (d, n/d) avec 1 < d ≤ n/d, triées par d croissant.
/// Vide pour n ≤ 1 et pour les premiers (1 et n sont exclus par contrat).
pub fn facteurs(n: u64) -> Vec<(u64, u64)> {
    let mut out = Vec::new();
    if n <= 1 {
        return out;
    }

    let mut d: u64 = 2;
    while d <= n / d {
        if n % d == 0 {
            out.push((d, n / d));
        }
        d += 1;
    }
    out
}

/// Les `nombre` premiers strictement supérieurs à `depart`.
///
/// Balayage simple vers le haut : pas de borne heuristique de coupure
/// (l'ancienne approximation par comptage de premiers pouvait rendre
/// moins de résultats que demandé). On s'arrête seulement si le plafond
/// u64 est atteint — inatteignable depuis la saisie bornée de la vue.
pub fn premiers_suivants(depart: u64, nombre: usize) -> Vec<u64> {
    let mut out = Vec::with_capacity(nombre);
    let mut candidat = depart;

    while out.len() < nombre {
        candidat = match candidat.checked_add(1) {
            Some(c) => c,
            None => break,
        };
        if est_premier(candidat) {
            out.push(candidat);
        }
    }
    out
}

/// PGCD, Euclide récursif.
pub fn pgcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        pgcd(b, a % b)
    }
}

/// PPCM = a·b / pgcd. Convention : ppcm(0, x) = 0.
/// `None` si le résultat déborde u64 (grands entiers premiers entre eux).
pub fn ppcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / pgcd(a, b)).checked_mul(b)
}

/* ------------------------ Conversions de bases ------------------------ */

/// n en binaire sur `bits` chiffres, complété de zéros à gauche.
/// Ex : decimal_vers_binaire(173, 8) == "10101101".
pub fn decimal_vers_binaire(n: u64, bits: usize) -> String {
    let brut = format!("{n:b}");
    if brut.len() >= bits {
        brut
    } else {
        format!("{}{}", "0".repeat(bits - brut.len()), brut)
    }
}

/// Chaîne binaire -> entier. Espaces tolérés (lecture par groupes).
pub fn binaire_vers_decimal(s: &str) -> Result<u64, String> {
    let propre: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if propre.is_empty() {
        return Err("binaire vide".into());
    }
    u64::from_str_radix(&propre, 2).map_err(|_| format!("binaire invalide: '{s}'"))
}

/// n en hexadécimal "0x..." majuscule, sur `bits` bits (bits/4 chiffres).
/// Ex : decimal_vers_hexa(173, 8) == "0xAD".
pub fn decimal_vers_hexa(n: u64, bits: usize) -> String {
    let chiffres = (bits / 4).max(1);
    format!("0x{n:0>chiffres$X}")
}

/// Chaîne hexadécimale -> entier. Préfixe "0x"/"0X" optionnel.
pub fn hexa_vers_decimal(s: &str) -> Result<u64, String> {
    let propre = s.trim();
    let sans_prefixe = propre
        .strip_prefix("0x")
        .or_else(|| propre.strip_prefix("0X"))
        .unwrap_or(propre);
    if sans_prefixe.is_empty() {
        return Err("hexadécimal vide".into());
    }
    u64::from_str_radix(sans_prefixe, 16).map_err(|_| format!("hexadécimal invalide: '{s}'"))
}

/// Quartets d'un octet : (haut, bas). Le quartet haut = 4 bits de poids fort.
pub fn quartets(octet: u8) -> (u8, u8) {
    (octet >> 4, octet & 0x0F)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Oracle brut : cherche un diviseur dans 2..n.
    fn est_premier_brut(n: u64) -> bool {
        n >= 2 && (2..n).all(|d| n % d != 0)
    }

    #[test]
    fn primalite_petits_cas() {
        assert!(!est_premier(0));
        assert!(!est_premier(1));
        assert!(est_premier(2));
        assert!(est_premier(3));
        assert!(!est_premier(4));
    }

    #[test]
    fn primalite_contre_oracle() {
        for n in 0..500u64 {
            assert_eq!(est_premier(n), est_premier_brut(n), "désaccord sur {n}");
        }
    }

    #[test]
    fn facteurs_vides_pour_premiers_et_petits() {
        assert!(facteurs(0).is_empty());
        assert!(facteurs(1).is_empty());
        assert!(facteurs(13).is_empty());
    }

    #[test]
    fn facteurs_reconstruisent_les_diviseurs() {
        // {1, n} ∪ paires = ensemble complet des diviseurs
        for n in 2..200u64 {
            let mut divs: Vec<u64> = vec![1, n];
            for (a, b) in facteurs(n) {
                assert_eq!(a * b, n);
                divs.push(a);
                if b != a {
                    divs.push(b);
                }
            }
            divs.sort_unstable();
            divs.dedup();

            let attendu: Vec<u64> = (1..=n).filter(|d| n % d == 0).collect();
            assert_eq!(divs, attendu, "diviseurs de {n}");
        }
    }

    #[test]
    fn facteurs_36() {
        assert_eq!(facteurs(36), vec![(2, 18), (3, 12), (4, 9), (6, 6)]);
    }

    #[test]
    fn premiers_suivants_compte_exact() {
        assert_eq!(premiers_suivants(10, 4), vec![11, 13, 17, 19]);
        assert_eq!(premiers_suivants(0, 5), vec![2, 3, 5, 7, 11]);
        // l'ancien garde-fou heuristique pouvait sous-rendre ; plus maintenant
        assert_eq!(premiers_suivants(1_000_000, 3).len(), 3);
    }

    #[test]
    fn pgcd_ppcm() {
        assert_eq!(pgcd(12, 18), 6);
        assert_eq!(pgcd(17, 5), 1);
        assert_eq!(pgcd(0, 7), 7);
        assert_eq!(ppcm(4, 6), Some(12));
        assert_eq!(ppcm(0, 9), Some(0));
        assert_eq!(ppcm(9, 0), Some(0));
    }

    #[test]
    fn bornes_u64_sans_debordement() {
        // n ≈ u64::MAX : la garde i <= n/i ne doit pas paniquer
        assert!(!est_premier(u64::MAX)); // divisible par 3
        assert!(!est_premier(u64::MAX - 1)); // pair
        // entiers consécutifs => premiers entre eux, produit hors gamme
        assert_eq!(ppcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn conversions_173() {
        assert_eq!(decimal_vers_binaire(173, 8), "10101101");
        assert_eq!(decimal_vers_hexa(173, 8), "0xAD");
    }

    #[test]
    fn binaire_aller_retour_octet() {
        for n in 0..=255u64 {
            let b = decimal_vers_binaire(n, 8);
            assert_eq!(b.len(), 8);
            assert_eq!(binaire_vers_decimal(&b).unwrap(), n);
        }
    }

    #[test]
    fn hexa_aller_retour() {
        assert_eq!(hexa_vers_decimal("0xAD").unwrap(), 173);
        assert_eq!(hexa_vers_decimal("ad").unwrap(), 173);
        assert!(hexa_vers_decimal("0xZZ").is_err());
        assert!(binaire_vers_decimal("10201").is_err());
    }

    #[test]
    fn quartets_haut_bas() {
        assert_eq!(quartets(0xAD), (0xA, 0xD));
        assert_eq!(quartets(0x0F), (0x0, 0xF));
    }
}
