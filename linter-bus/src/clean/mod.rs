//! Label cleanup for headsigns and stop names.
//!
//! Labels go through a fixed sequence of French (Québec) transforms. Each
//! stage is total and the order matters: bounds are stripped before street
//! types are abbreviated, and casing is fixed last.

mod bounds;
mod label;
mod point;
mod street_types;

pub use bounds::clean_bounds_fr;
pub use label::clean_label_fr;
pub use point::clean_points;
pub use street_types::clean_street_types_fr_ca;

/// Clean a trip headsign.
pub fn clean_headsign(headsign: &str) -> String {
    let headsign = clean_points(headsign);
    let headsign = clean_bounds_fr(&headsign);
    let headsign = clean_street_types_fr_ca(&headsign);
    clean_label_fr(&headsign)
}

/// Clean a stop name. Same as headsigns, without period spacing.
pub fn clean_stop_name(stop_name: &str) -> String {
    let stop_name = clean_bounds_fr(stop_name);
    let stop_name = clean_street_types_fr_ca(&stop_name);
    clean_label_fr(&stop_name)
}
