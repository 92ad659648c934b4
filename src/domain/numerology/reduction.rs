//! Digit reduction with master-number early exit.

/// Values that are never reduced further.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Every value a core number may take under normal input.
pub const CORE_NUMBERS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

/// Returns true for 11, 22 and 33.
pub fn is_master_number(n: u64) -> bool {
    MASTER_NUMBERS.iter().any(|&m| u64::from(m) == n)
}

/// Returns true if `n` is in {1..9, 11, 22, 33}.
pub fn is_core_number(n: u32) -> bool {
    CORE_NUMBERS.contains(&n)
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sums digits repeatedly until a single digit or a master number remains.
///
/// The master check runs before every pass, so `29 -> 11` stops at 11 and
/// `38 -> 11` stops there too. Terminates because the digit sum of any
/// value >= 10 is strictly smaller than the value.
pub fn reduce(n: u64) -> u32 {
    let mut value = n;
    while value >= 10 && !is_master_number(value) {
        value = digit_sum(value);
    }
    // value < 10 or value is 11/22/33 here
    value as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reduce_known_values() {
        assert_eq!(reduce(0), 0);
        assert_eq!(reduce(9), 9);
        assert_eq!(reduce(10), 1);
        assert_eq!(reduce(19), 1);
        assert_eq!(reduce(29), 11);
    }

    #[test]
    fn reduce_keeps_master_numbers() {
        assert_eq!(reduce(11), 11);
        assert_eq!(reduce(22), 22);
        assert_eq!(reduce(33), 33);
    }

    #[test]
    fn reduce_stops_at_master_number_on_later_passes() {
        // 9992 -> 29 -> 11
        assert_eq!(reduce(9992), 11);
        // 4799 -> 29 -> 11
        assert_eq!(reduce(4799), 11);
        // 9_999_992 -> 56 -> 11
        assert_eq!(reduce(9_999_992), 11);
        // 1990 -> 19 -> 10 -> 1
        assert_eq!(reduce(1990), 1);
        // 2009 -> 11
        assert_eq!(reduce(2009), 11);
        // 9994 -> 31 -> 4
        assert_eq!(reduce(9994), 4);
        // 992 -> 20 -> 2
        assert_eq!(reduce(992), 2);
        // 1966 -> 22
        assert_eq!(reduce(1966), 22);
        // 99_996 -> 42 -> 6
        assert_eq!(reduce(99_996), 6);
        // 9_999_993 -> 57 -> 12 -> 3
        assert_eq!(reduce(9_999_993), 3);
        // 3_999_997 -> 55 -> 10 -> 1
        assert_eq!(reduce(3_999_997), 1);
        // 1_999_999_993 -> 76 -> 13 -> 4
        assert_eq!(reduce(1_999_999_993), 4);
        assert_eq!(reduce(47), 11);
    }

    #[test]
    fn digit_sum_basics() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(u64::MAX), 87);
    }

    #[test]
    fn core_number_membership() {
        assert!(is_core_number(1));
        assert!(is_core_number(33));
        assert!(!is_core_number(0));
        assert!(!is_core_number(10));
        assert!(!is_core_number(44));
    }

    proptest! {
        #[test]
        fn reduce_always_lands_in_range(n in any::<u64>()) {
            let r = reduce(n);
            prop_assert!(r <= 9 || MASTER_NUMBERS.contains(&r), "reduce({}) = {}", n, r);
            prop_assert_ne!(r, 10);
        }

        #[test]
        fn reduce_is_idempotent(n in any::<u64>()) {
            let once = reduce(n);
            prop_assert_eq!(reduce(u64::from(once)), once);
        }

        #[test]
        fn reduce_of_positive_is_positive(n in 1u64..) {
            prop_assert!(reduce(n) >= 1);
        }
    }
}
