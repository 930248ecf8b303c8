use thiserror::Error;

/// Errors that can occur when loading an establishment registry from an
/// external source.
///
/// The generation and scoring pipeline itself is infallible by contract: a
/// malformed restaurant name classifies as [`Category::Default`], an empty
/// allergy list scores without penalties, and degenerate seeds still produce a
/// stable ordering. Errors only arise at the configuration boundary, when a
/// caller supplies a registry file of hand-authored menus.
///
/// [`Category::Default`]: crate::menu::Category::Default
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Could not read registry file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse registry JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Establishment '{0}' appears more than once in the registry")]
    DuplicateEstablishment(String),

    #[error("Establishment '{establishment}' contains duplicate dish id '{dish_id}'")]
    DuplicateDishId {
        establishment: String,
        dish_id: String,
    },
}
