pub mod digits;
pub mod fast_exponentiation;
pub mod primes;
