use serde::{Deserialize, Serialize};

use crate::shared::list::resource::{SEARCH_FILTER, STATUS_FILTER};
use crate::shared::list::{FilterField, ResourceDescriptor, ResourceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberDto {
    pub team_member_id: i64,
    pub name: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: bool,
}

impl ResourceRecord for TeamMemberDto {
    fn key(&self) -> String {
        self.team_member_id.to_string()
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn status(&self) -> Option<bool> {
        Some(self.status)
    }

    fn set_status(&mut self, active: bool) {
        self.status = active;
    }
}

const FILTERS: &[FilterField] = &[SEARCH_FILTER, STATUS_FILTER];

pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    code: "a005_team_member",
    title: "Team members",
    endpoint: "/api/team-member",
    key_field: "team_member_id",
    status_field: Some("status"),
    deletable: true,
    filters: FILTERS,
};
