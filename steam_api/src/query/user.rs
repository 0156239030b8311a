use std::str::FromStr;

/// Relationship filter for `ISteamUser/GetFriendList`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relationship {
    All,
    Friend,
}
impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Relationship::All => "all",
                Relationship::Friend => "friend",
            }
        )
    }
}
impl FromStr for Relationship {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Relationship::All),
            "friend" => Ok(Relationship::Friend),
            _ => Err(()),
        }
    }
}

/// Kind of vanity URL passed to `ISteamUser/ResolveVanityURL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VanityUrlType {
    Individual = 1,
    Group = 2,
    OfficialGameGroup = 3,
}
impl FromStr for VanityUrlType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "individual" => Ok(VanityUrlType::Individual),
            "2" | "group" => Ok(VanityUrlType::Group),
            "3" | "game-group" => Ok(VanityUrlType::OfficialGameGroup),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_round_trips_through_str() {
        assert_eq!(Relationship::Friend.to_string(), "friend");
        assert_eq!("all".parse::<Relationship>(), Ok(Relationship::All));
        assert!("enemy".parse::<Relationship>().is_err());
    }

    #[test]
    fn vanity_url_type_codes() {
        assert_eq!(VanityUrlType::Group as u8, 2);
        assert_eq!("3".parse::<VanityUrlType>(), Ok(VanityUrlType::OfficialGameGroup));
        assert_eq!("individual".parse::<VanityUrlType>(), Ok(VanityUrlType::Individual));
    }
}
