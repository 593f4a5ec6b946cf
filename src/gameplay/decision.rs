/// What a player chooses after a successful roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Hold,
    Roll,
}

impl TryFrom<&str> for Decision {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "h" => Ok(Self::Hold),
            "r" => Ok(Self::Roll),
            other => Err(anyhow::anyhow!("invalid response {:?}", other)),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hold => write!(f, "hold"),
            Self::Roll => write!(f, "roll"),
        }
    }
}
