use primer::numerical::digits::reverse_digits;
use primer::numerical::fast_exponentiation::fast_pow;
use primer::numerical::primes::{is_prime, sieve};

#[test]
fn primality_of_small_numbers() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(is_prime(2));
    assert!(is_prime(3));
    assert!(!is_prime(34));
    assert!(!is_prime(129)); // 3 * 43
    assert!(is_prime(131));
    assert!(!is_prime(49)); // square of a prime
}

#[test]
fn sieve_matches_trial_division() {
    let primes = sieve(36);
    assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31]);
    for p in primes {
        assert!(is_prime(p as u64));
    }
    assert!(sieve(0).is_empty());
    assert!(sieve(1).is_empty());
    assert_eq!(sieve(2), vec![2]);
}

#[test]
fn digit_reversal() {
    assert_eq!(reverse_digits(456), 654);
    assert_eq!(reverse_digits(12345), 54321);
    assert_eq!(reverse_digits(0), 0);
    assert_eq!(reverse_digits(-120), -21);
    assert_eq!(reverse_digits(1000), 1);
}

#[test]
fn fast_pow_matches_repeated_multiplication() {
    assert_eq!(fast_pow(2, 3), 8);
    assert_eq!(fast_pow(2, 0), 1);
    assert_eq!(fast_pow(0, 0), 1);
    assert_eq!(fast_pow(0, 5), 0);
    assert_eq!(fast_pow(3, 10), 59049);
    assert_eq!(fast_pow(10, 9), 1_000_000_000);
}
