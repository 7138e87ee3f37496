use serde::{Deserialize, Serialize};

/// Body of `POST /api/play`. The move arrives as a raw string and is
/// validated against [`crate::game::Move`] at the boundary.
#[derive(Default, Serialize, Deserialize)]
pub struct PlayRequest {
    pub r#move: Option<String>,
}
