//! Manifest codecs.

mod toml_codec;

pub use toml_codec::TomlCodec;
