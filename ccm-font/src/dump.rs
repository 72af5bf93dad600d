//! Raw-byte diagnostic dump

/// Bytes rendered per dump line
const BYTES_PER_LINE: usize = 16;

/// Iterate over hex-dump lines for `data`
///
/// Each line covers up to 16 bytes: an 8-digit hex offset, the bytes as
/// space-separated lowercase hex pairs in a fixed-width column, and an ASCII
/// column where `.` stands in for anything outside `0x20..=0x7e`:
///
/// ```
/// let mut lines = ccm_font::hex_dump(&[0x41, 0x42, 0x0a]);
/// assert_eq!(
///     lines.next().as_deref(),
///     Some("00000000  41 42 0a                         AB."),
/// );
/// assert_eq!(lines.next(), None);
/// ```
///
/// The iterator is lazy; call [`hex_dump`] again (or clone the iterator) to
/// restart from the top. Empty input yields no lines.
pub fn hex_dump(data: &[u8]) -> HexDump<'_> {
    HexDump { data, offset: 0 }
}

/// Lazy hex-dump line iterator, see [`hex_dump`]
#[derive(Debug, Clone)]
pub struct HexDump<'a> {
    data: &'a [u8],
    offset: usize,
}

impl Iterator for HexDump<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.offset >= self.data.len() {
            return None;
        }
        let end = (self.offset + BYTES_PER_LINE).min(self.data.len());
        let chunk = &self.data[self.offset..end];

        let hex = chunk
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");
        let ascii: String = chunk
            .iter()
            .map(|&b| if (0x20..=0x7e).contains(&b) { b as char } else { '.' })
            .collect();

        let line = format!("{:08x}  {hex:<31}  {ascii}", self.offset);
        self.offset = end;
        Some(line)
    }
}
