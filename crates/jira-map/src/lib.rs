pub mod resolver;

pub use resolver::MappingResolver;
