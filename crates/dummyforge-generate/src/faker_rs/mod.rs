mod adapter;
pub(crate) mod locales;

pub use adapter::FakerProvider;
