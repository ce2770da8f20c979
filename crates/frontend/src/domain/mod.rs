pub mod a001_category {
    pub mod ui {
        pub mod list;
    }
}
pub mod a002_gst {
    pub mod ui {
        pub mod list;
    }
}
pub mod a003_variant {
    pub mod ui {
        pub mod list;
    }
}
pub mod a004_policy {
    pub mod ui {
        pub mod list;
    }
}
pub mod a005_team_member {
    pub mod ui {
        pub mod list;
    }
}
pub mod a006_testimonial {
    pub mod ui {
        pub mod list;
    }
}
pub mod a007_store {
    pub mod ui {
        pub mod list;
    }
}
pub mod a008_career {
    pub mod ui {
        pub mod list;
    }
}
pub mod a009_delivery_zone {
    pub mod ui {
        pub mod list;
    }
}
