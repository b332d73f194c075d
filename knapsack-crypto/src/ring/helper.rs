/// Computes the greatest common divisor of two numbers.
pub fn gcd(a: u64, b: u64) -> u64 {
    num_integer::gcd(a, b)
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
///
/// Works on `i128` so that any pair of `u64` inputs fits without overflow.
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if a == 0 {
        if b.is_negative() {
            return (-b, 0, -1);
        }

        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b % a, a);
    let x = y1 - (b / a) * x1;
    let y = x1;
    (g, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_gcd() {
        assert_eq!(gcd(1, 6), 1);
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(31, 59), 1);
        assert_eq!(gcd(10, 0), 10);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(54, 24), 6);
    }

    #[test]
    fn test_extended_gcd_basic() {
        let (g, x, y) = extended_gcd(12, 8);
        assert_eq!(g, 4);
        assert_eq!(12 * x + 8 * y, g);

        let (g, x, y) = extended_gcd(31, 59);
        assert_eq!(g, 1);
        assert_eq!(31 * x + 59 * y, g);
    }

    #[test]
    fn test_extended_gcd_zero() {
        let (g, x, y) = extended_gcd(0, 15);
        assert_eq!(g, 15);
        assert_eq!(x, 0);
        assert_eq!(y, 1);

        let (g, x, _y) = extended_gcd(15, 0);
        assert_eq!(g, 15);
        assert_eq!(15 * x, g);
    }

    #[test]
    fn test_extended_gcd_large() {
        let (g, x, y) = extended_gcd(1001, 103);
        assert_eq!(g, 1);
        assert_eq!(1001 * x + 103 * y, g);

        let a = (1i128 << 40) + 15;
        let b = (1i128 << 33) + 1;
        let (g, x, y) = extended_gcd(a, b);
        assert_eq!(a * x + b * y, g);
        assert_eq!(g as u64, gcd(a as u64, b as u64));
    }
}
