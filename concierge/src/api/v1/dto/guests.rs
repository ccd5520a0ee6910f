use serde::{Deserialize, Serialize};

use crate::models::GuestProfile;

/// One selectable guest profile.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestData {
    /// Display name used to select the profile (e.g. `"Bob (Music Lover)"`).
    pub name: String,
    /// Preference tags in stable alphabetical order.
    pub preferences: Vec<String>,
}

impl From<&GuestProfile> for GuestData {
    fn from(profile: &GuestProfile) -> Self {
        Self {
            name: profile.display_name.clone(),
            preferences: profile.preferences.iter().cloned().collect(),
        }
    }
}

/// `GET /api/v1/guests` payload.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestListData {
    pub guests: Vec<GuestData>,
}
