mod section;

pub use section::{default_sections, CatalogError, SectionCatalog, SectionDescriptor, SectionId};
