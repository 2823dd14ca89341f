use super::{Feather, Rarity};

/// The fixed catalog of collectible feathers.
pub fn feather_catalog() -> Vec<Feather> {
    vec![
        Feather {
            id: "sparrow".into(),
            name: "Sparrow Feather".into(),
            image: "feather_sparrow.png".into(),
            rarity: Rarity::Common,
            description: "Sparrows are small but energetic birds. Their feathers \
                          are often found in gardens"
                .into(),
        },
        Feather {
            id: "chicken".into(),
            name: "Chicken Feather".into(),
            image: "feather_chicken.png".into(),
            rarity: Rarity::Common,
            description: "Chicken feathers are the most common, but they remind us \
                          of homey comfort and simplicity"
                .into(),
        },
        Feather {
            id: "flamingo".into(),
            name: "Flamingo Feather".into(),
            image: "feather_flamingo.png".into(),
            rarity: Rarity::Rare,
            description: "Flamingos owe their color to their diet. A single pink \
                          feather looks like a piece of sunset"
                .into(),
        },
        Feather {
            id: "invisible-owl".into(),
            name: "Invisible Owl Feather".into(),
            image: "feather_owl.png".into(),
            rarity: Rarity::Legendary,
            description: "The Invisible Owl is a mythical bird, and its feather is \
                          considered a symbol of wisdom and mystery. It's almost \
                          impossible to find"
                .into(),
        },
        Feather {
            id: "parrot".into(),
            name: "Parrot Feather".into(),
            image: "feather_parrot.png".into(),
            rarity: Rarity::Rare,
            description: "Parrots are bright and intelligent birds. Their green \
                          feathers remind us of the tropics and exoticism"
                .into(),
        },
        Feather {
            id: "jay".into(),
            name: "Jay Feather".into(),
            image: "feather_jay.png".into(),
            rarity: Rarity::Common,
            description: "Jays are bright and noisy birds. Their blue feathers are \
                          a rare find, symbolizing courage"
                .into(),
        },
        Feather {
            id: "pigeon".into(),
            name: "Pigeon Feather".into(),
            image: "feather_pigeon.png".into(),
            rarity: Rarity::Common,
            description: "Pigeons are a symbol of peace and tranquility. Their \
                          feathers are often found in parks and city streets"
                .into(),
        },
        Feather {
            id: "seagull".into(),
            name: "Seagull Feather".into(),
            image: "feather_seagull.png".into(),
            rarity: Rarity::Rare,
            description: "Seagulls are coastal dwellers. Their feathers remind us \
                          of the sea breeze and freedom"
                .into(),
        },
    ]
}
