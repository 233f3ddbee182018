pub mod carousel;
pub mod icons;
