use std::fmt;

/// Number of sets or reps as displayed to the lifter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    Fixed(u32),
    Range(u32, u32),
    Label(String),
}

impl Quantity {
    /// Parse a displayed value such as `"8"`, `"8-10"` or `"Light"`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if let Ok(fixed) = value.parse::<u32>() {
            return Quantity::Fixed(fixed);
        }
        if let Some((low, high)) = value.split_once('-') {
            if let (Ok(low), Ok(high)) = (low.trim().parse::<u32>(), high.trim().parse::<u32>()) {
                return Quantity::Range(low, high);
            }
        }
        Quantity::Label(value.to_string())
    }

    /// Lower bound of the rep target, or 0 if it cannot be determined.
    #[must_use]
    pub fn target_reps(&self) -> u32 {
        self.lower_bound()
    }

    /// Lower bound of the set count, or 0 if it cannot be determined.
    #[must_use]
    pub fn numeric_sets(&self) -> u32 {
        self.lower_bound()
    }

    /// Upper bound for ranges, the value itself otherwise.
    #[must_use]
    pub fn upper_bound(&self) -> u32 {
        match self {
            Quantity::Range(_, high) => *high,
            _ => self.lower_bound(),
        }
    }

    fn lower_bound(&self) -> u32 {
        match self {
            Quantity::Fixed(value) | Quantity::Range(value, _) => *value,
            Quantity::Label(label) => {
                let head = label.split_once('-').map_or(label.as_str(), |(low, _)| low);
                head.trim().parse().unwrap_or(0)
            }
        }
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Quantity::Fixed(value)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::parse(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Quantity::Fixed(value) => write!(f, "{value}"),
            Quantity::Range(low, high) => write!(f, "{low}-{high}"),
            Quantity::Label(label) => write!(f, "{label}"),
        }
    }
}
