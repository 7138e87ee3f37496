use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const fn all() -> &'static [Self] {
        &[Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The one move this move defeats. Fixed relation, never changes at runtime.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err("invalid move"),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Rock => "rock",
                Self::Paper => "paper",
                Self::Scissors => "scissors",
            }
        )
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        use rand::Rng;
        match rand::rng().random_range(0..3) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beats_is_total_and_asymmetric() {
        for m in Move::all() {
            assert!(m.beats() != *m);
            assert!(m.beats().beats() != *m);
            assert!(m.beats().beats().beats() == *m);
        }
    }

    #[test]
    fn parse_canonical() {
        assert!(Move::try_from("rock") == Ok(Move::Rock));
        assert!(Move::try_from("paper") == Ok(Move::Paper));
        assert!(Move::try_from("scissors") == Ok(Move::Scissors));
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        assert!(Move::try_from("ROCK") == Ok(Move::Rock));
        assert!(Move::try_from(" rock ") == Ok(Move::Rock));
        assert!(Move::try_from("\tScissors\n") == Ok(Move::Scissors));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Move::try_from("lizard").is_err());
        assert!(Move::try_from("").is_err());
        assert!(Move::try_from("   ").is_err());
    }

    #[test]
    fn random_is_canonical() {
        for _ in 0..100 {
            assert!(Move::all().contains(&Move::random()));
        }
    }

    #[test]
    fn display_roundtrip() {
        for m in Move::all() {
            assert!(Move::try_from(m.to_string().as_str()) == Ok(*m));
        }
    }
}
