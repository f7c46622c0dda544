use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Accepted coin denominations.
///
/// Coins are fungible: a `Coin` carries no identity beyond its face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    Penny,
    Nickel,
    Dime,
    Quarter,
}

impl Coin {
    /// Every denomination the machine accepts, smallest first.
    pub const ALL: [Coin; 4] = [Coin::Penny, Coin::Nickel, Coin::Dime, Coin::Quarter];

    /// Face value in cents.
    pub fn value(self) -> u32 {
        match self {
            Coin::Penny => 1,
            Coin::Nickel => 5,
            Coin::Dime => 10,
            Coin::Quarter => 25,
        }
    }

    /// Sums the face value of a run of coins.
    pub fn total<'a>(coins: impl IntoIterator<Item = &'a Coin>) -> u32 {
        coins.into_iter().map(|coin| coin.value()).sum()
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Coin::Penny => "penny",
            Coin::Nickel => "nickel",
            Coin::Dime => "dime",
            Coin::Quarter => "quarter",
        };
        write!(f, "{}", name)
    }
}
