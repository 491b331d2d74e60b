// src/noyau/format.rs
//
// f64 -> texte affiché.
// Conversion native de Rust (plus courte représentation qui relit la même valeur),
// en notation exponentielle hors de [1e-7, 1e16). Le texte produit est toujours
// relisible par `str::parse::<f64>` (y compris "inf", "-inf", "NaN").

/// Au-delà : notation exponentielle.
const BORNE_HAUTE: f64 = 1e16;

/// En deçà (hors zéro) : notation exponentielle.
const BORNE_BASSE: f64 = 1e-7;

pub fn format_nombre(v: f64) -> String {
    // 0 et -0 s’affichent "0" (jamais de zéro signé)
    if v == 0.0 {
        return "0".to_string();
    }
    if !v.is_finite() {
        return format!("{v}");
    }

    let a = v.abs();
    if (BORNE_BASSE..BORNE_HAUTE).contains(&a) {
        format!("{v}")
    } else {
        format!("{v:e}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_nombre;

    #[test]
    fn entiers_sans_decimales() {
        assert_eq!(format_nombre(81.0), "81");
        assert_eq!(format_nombre(-28.0), "-28");
        assert_eq!(format_nombre(0.0), "0");
        assert_eq!(format_nombre(-0.0), "0");
    }

    #[test]
    fn decimales_natives() {
        assert_eq!(format_nombre(12.3), "12.3");
        assert_eq!(format_nombre(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_nombre(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn exponentielle_aux_extremes() {
        assert_eq!(format_nombre(1e20), "1e20");
        assert_eq!(format_nombre(-2.5e-9), "-2.5e-9");
        assert_eq!(format_nombre(1e16), "1e16");
        assert_eq!(format_nombre(9_999_999_999_999_998.0), "9999999999999998");
    }

    #[test]
    fn non_finis_relisibles() {
        for v in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let s = format_nombre(v);
            let relu: f64 = s.parse().unwrap();
            assert_eq!(relu.is_nan(), v.is_nan(), "{s}");
            if !v.is_nan() {
                assert_eq!(relu, v);
            }
        }
    }

    #[test]
    fn relecture_exacte() {
        for v in [81.0, 12.3, 1e20, 3.5e-12, -7.25, 1.0 / 3.0] {
            let relu: f64 = format_nombre(v).parse().unwrap();
            assert_eq!(relu, v);
        }
    }
}
