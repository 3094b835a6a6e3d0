extern crate rand;

use rand::{thread_rng, Rng};

/// Uniform factor in `[-spread, spread)`.
pub fn symmetric(spread: f64) -> f64 {
    if spread <= 0.0 {
        0.0
    } else {
        thread_rng().gen_range(-spread..spread)
    }
}

#[cfg(test)]
mod tests {
    use super::symmetric;

    #[test]
    fn stays_in_range() {
        for _ in 0..1000 {
            let v = symmetric(0.5);
            assert!((-0.5..0.5).contains(&v));
        }
        assert_eq!(symmetric(0.0), 0.0);
    }
}
