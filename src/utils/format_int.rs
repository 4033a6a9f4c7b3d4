/// Non-negative counter printed with `'` between groups of three digits.
pub struct NiceInt(u128);

impl NiceInt {
    pub fn from(value: impl Into<u128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u128)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let head = digits.len() % 3;
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && i % 3 == head {
                out.push('\'');
            }
            out.push(c);
        }
        f.write_str(&out)
    }
}
