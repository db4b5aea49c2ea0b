/// Luhn-style mod 10 check digit over the nine leading digits.
pub fn check_digit(digits: &[u32; 9]) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let value = if i % 2 == 0 { d * 2 } else { d };
            if value > 9 {
                value - 9
            } else {
                value
            }
        })
        .sum();

    (10 - sum % 10) % 10
}
