use encoding_rs::UTF_8;
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

pub type EncodedBufReader = BufReader<encoding_rs_io::DecodeReaderBytes<File, Vec<u8>>>;

/// Open a file as UTF-8 text and return a buffered reader.
/// Invalid sequences become U+FFFD. A UTF-8 BOM, if the decoder keeps it,
/// is removed from the first line by `strip_utf8_bom`.
pub fn open_utf8_reader(filepath: &Path, buffer_size: usize) -> io::Result<EncodedBufReader> {
    let file = File::open(filepath)?;
    Ok(BufReader::with_capacity(buffer_size, utf8_decoder(file)))
}

/// Wrap any byte source in the same UTF-8 decoder.
/// BOM sniffing stays off so a UTF-16 BOM cannot switch the encoding.
pub fn utf8_decoder<R: Read>(source: R) -> encoding_rs_io::DecodeReaderBytes<R, Vec<u8>> {
    DecodeReaderBytesBuilder::new()
        .encoding(Some(UTF_8))
        .bom_override(false)
        .build(source)
}

// 첫 라인 앞의 UTF-8 BOM 제거
pub fn strip_utf8_bom(line: &str) -> &str {
    line.strip_prefix('\u{FEFF}').unwrap_or(line)
}
