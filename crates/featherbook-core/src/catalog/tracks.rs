use super::Track;

/// The demo tracks offered on the encyclopedia screen. Users copy them
/// into their personal playlist.
pub fn track_catalog() -> Vec<Track> {
    vec![
        Track {
            id: "trk1".into(),
            title: "Cossack Blackbird".into(),
            image: "track_blackbird.png".into(),
            audio: "blackbird_singing.mp3".into(),
        },
        Track {
            id: "trk2".into(),
            title: "Dove".into(),
            image: "track_dove.png".into(),
            audio: "dove.mp3".into(),
        },
        Track {
            id: "trk3".into(),
            title: "Grey Owl".into(),
            image: "track_grey_owl.png".into(),
            audio: "owl.mp3".into(),
        },
        Track {
            id: "trk4".into(),
            title: "Corncrake".into(),
            image: "track_corncrake.png".into(),
            audio: "corncrake.mp3".into(),
        },
        Track {
            id: "trk5".into(),
            title: "Oriole".into(),
            image: "track_oriole.png".into(),
            audio: "oriole.mp3".into(),
        },
    ]
}
