pub mod axial;
pub mod keratometry;
pub mod kind;
pub mod pachymetry;
pub mod patient;
pub mod refraction;
pub mod series;
