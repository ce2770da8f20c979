//! Master data managed from the back-office.

pub mod a001_category {
    pub mod dto;
}
pub mod a002_gst {
    pub mod dto;
}
pub mod a003_variant {
    pub mod dto;
}
pub mod a004_policy {
    pub mod dto;
}
pub mod a005_team_member {
    pub mod dto;
}
pub mod a006_testimonial {
    pub mod dto;
}
pub mod a007_store {
    pub mod dto;
}
pub mod a008_career {
    pub mod dto;
}
pub mod a009_delivery_zone {
    pub mod dto;
}
