/// Reverse the decimal digits; the sign stays put.
/// reverse_digits(456) == 654, reverse_digits(-120) == -21.
pub fn reverse_digits(mut n: i64) -> i64 {
    let mut reversed = 0;
    while n != 0 {
        reversed = reversed * 10 + n % 10;
        n /= 10;
    }
    reversed
}
