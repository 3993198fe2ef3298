pub mod constants;
pub mod encoding;
pub mod logger;

pub use self::encoding::{open_utf8_reader, strip_utf8_bom, utf8_decoder, EncodedBufReader};
pub use self::logger::Logger;
