//! Body kinds and stellar classification tables.

pub mod body_type;
pub mod star_type_info;

#[cfg(test)]
mod body_type_test;

pub use body_type::{BodySuperType, BodyType};
pub use star_type_info::{
    star_color, star_luminosity, star_metallicity, star_scale, star_type_info,
    StarTypeInfo,
};
