use super::{Bird, Recording};

/// The encyclopedia's species list.
pub fn bird_catalog() -> Vec<Bird> {
    vec![
        Bird {
            id: "rock-dove".into(),
            name: "Rock Dove".into(),
            image: "bird_rock_dove.png".into(),
            tags: vec!["urban birds".into()],
            range: "Urban areas worldwide".into(),
            traits: "Flocks often scavenge human food scraps; social and adaptable"
                .into(),
            sighting_tags: vec!["seen around town".into()],
            field_note: "Everyone knows these! Always lurking around benches for \
                         crumbs"
                .into(),
            recordings: vec![Recording {
                id: "rd-1".into(),
                title: "Classic coo".into(),
                audio: "rock_dove_coo.mp3".into(),
            }],
        },
        Bird {
            id: "nightingale".into(),
            name: "Common Nightingale".into(),
            image: "bird_nightingale.png".into(),
            tags: vec!["songbirds".into(), "wild birds".into()],
            range: "Europe, Asia, North Africa".into(),
            traits: "Famous for complex nocturnal songs during mating season".into(),
            sighting_tags: vec!["migratory".into(), "sings in the morning".into()],
            field_note: "I listened to them every summer in my grandma's garden -- \
                         true vocal virtuosos!"
                .into(),
            recordings: vec![
                Recording {
                    id: "ng-1".into(),
                    title: "Evening song".into(),
                    audio: "nightingale_evening.mp3".into(),
                },
                Recording {
                    id: "ng-2".into(),
                    title: "Dawn song".into(),
                    audio: "nightingale_dawn.mp3".into(),
                },
            ],
        },
        Bird {
            id: "black-swan".into(),
            name: "Black Swan".into(),
            image: "bird_black_swan.png".into(),
            tags: vec!["waterfowl".into(), "exotic birds".into()],
            range: "Australia, New Zealand".into(),
            traits: "Form monogamous pairs, aggressive during nesting".into(),
            sighting_tags: vec!["very rare".into()],
            field_note: "Saw them at the zoo -- graceful but hiss like geese!".into(),
            recordings: vec![Recording {
                id: "bs-1".into(),
                title: "Trumpet call".into(),
                audio: "black_swan_trumpet.mp3".into(),
            }],
        },
        Bird {
            id: "toco-toucan".into(),
            name: "Toco Toucan".into(),
            image: "bird_toco_toucan.png".into(),
            tags: vec!["exotic birds".into()],
            range: "South American rainforests".into(),
            traits: "Uses large beak for thermoregulation and fruit foraging".into(),
            sighting_tags: vec!["very loud".into()],
            field_note: "Dream of seeing one in real life -- looks straight out of \
                         a cartoon!"
                .into(),
            recordings: vec![Recording {
                id: "tc-1".into(),
                title: "Tree croak".into(),
                audio: "toco_toucan_croak.mp3".into(),
            }],
        },
        Bird {
            id: "eurasian-magpie".into(),
            name: "Eurasian Magpie".into(),
            image: "bird_eurasian_magpie.png".into(),
            tags: vec!["urban birds".into(), "wild birds".into()],
            range: "Eurasia, North Africa".into(),
            traits: "Attracted to shiny objects; highly intelligent".into(),
            sighting_tags: vec!["seen in town".into(), "very loud".into()],
            field_note: "This one's loud and sassy, especially in spring!".into(),
            recordings: vec![Recording {
                id: "em-1".into(),
                title: "Chatter".into(),
                audio: "eurasian_magpie_chatter.mp3".into(),
            }],
        },
    ]
}
