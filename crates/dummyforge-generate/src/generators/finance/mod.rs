use dummyforge_core::CurrencyOptions;
use rand::{Rng, RngCore};

// Largest unit count that still round-trips exactly through f64.
const MAX_EXACT_UNITS: f64 = 9.0e15;

/// Formatted amount such as `¥12,345` or `$1,234.50`.
///
/// The amount is drawn in minor units (`10^-decimals`) between the rounded-in
/// bounds, so the rendered value never leaves `[min, max]`.
pub fn currency_amount(options: &CurrencyOptions, rng: &mut dyn RngCore) -> String {
    let scale = 10_i64.pow(options.decimals);
    let units = draw_units(options, scale as f64, rng);
    format!("{}{}", options.symbol(), format_units(units, scale, options.decimals))
}

fn draw_units(options: &CurrencyOptions, scale: f64, rng: &mut dyn RngCore) -> i64 {
    let low = (options.min * scale).ceil();
    let high = (options.max * scale).floor();
    if low > high || low.abs() > MAX_EXACT_UNITS || high.abs() > MAX_EXACT_UNITS {
        return (options.min * scale)
            .round()
            .clamp(-MAX_EXACT_UNITS, MAX_EXACT_UNITS) as i64;
    }
    rng.random_range(low as i64..=high as i64)
}

fn format_units(units: i64, scale: i64, decimals: u32) -> String {
    let sign = if units < 0 { "-" } else { "" };
    let magnitude = units.unsigned_abs();
    let scale = scale.unsigned_abs();
    let whole = group_thousands(magnitude / scale);
    if decimals == 0 {
        return format!("{sign}{whole}");
    }
    let fraction = magnitude % scale;
    format!(
        "{sign}{whole}.{fraction:0width$}",
        width = decimals as usize
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use dummyforge_core::CurrencyType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn options(min: f64, max: f64, decimals: u32) -> CurrencyOptions {
        CurrencyOptions {
            currency_type: CurrencyType::Yen,
            min,
            max,
            decimals,
            symbol: None,
        }
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn pads_fraction_digits() {
        assert_eq!(format_units(1005, 100, 2), "10.05");
        assert_eq!(format_units(-1234500, 1000, 3), "-1,234.500");
    }

    #[test]
    fn amounts_stay_inside_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let options = options(1.25, 2.75, 2);
        for _ in 0..100 {
            let text = currency_amount(&options, &mut rng);
            let amount: f64 = text.trim_start_matches('¥').parse().expect("amount");
            assert!((1.25..=2.75).contains(&amount), "{text}");
        }
    }

    #[test]
    fn bounds_without_a_whole_unit_fall_back_to_min() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(currency_amount(&options(1.2, 1.8, 0), &mut rng), "¥1");
    }
}
