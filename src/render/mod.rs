pub(crate) mod layout;
pub(crate) mod raster;
pub(crate) mod svg;
