/// License identifier normalization
mod identifier_parser;

pub use identifier_parser::SpdxIdentifierParser;
