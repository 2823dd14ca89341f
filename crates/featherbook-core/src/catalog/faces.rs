use super::FaceId;

/// Card faces available to the matching game. The default 4x3 grid uses
/// six of these; a larger grid may use them all.
pub fn face_catalog() -> Vec<FaceId> {
    vec![
        "face_sparrow.png".into(),
        "face_bullfinch.png".into(),
        "face_tit.png".into(),
        "face_woodpecker.png".into(),
        "face_swallow.png".into(),
        "face_crow.png".into(),
    ]
}
