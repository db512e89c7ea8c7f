//! Static content tables behind [`crate::StudioCatalog`].

pub(crate) mod boards;
pub(crate) mod copy;
pub(crate) mod lab;
pub(crate) mod modes;
pub(crate) mod projects;
pub(crate) mod visuals;
